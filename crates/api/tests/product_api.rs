//! HTTP-level integration tests for the product catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;
use storefront_core::roles::{ROLE_ADMIN, ROLE_USER};
use storefront_db::models::product::{CreateProduct, Product};
use storefront_db::repositories::ProductRepo;

/// Insert a product directly through the repository.
async fn seed_product(pool: &PgPool, name: &str, price: f64) -> Product {
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            image: None,
            categorie: "electronics".to_string(),
        },
    )
    .await
    .expect("product creation should succeed")
}

/// The product listing is public and returns every product.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_public(pool: PgPool) {
    seed_product(&pool, "Keyboard", 49.99).await;
    seed_product(&pool, "Mouse", 19.99).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let products = json.as_array().expect("listing must be an array");
    assert_eq!(products.len(), 2);
}

/// Creating a product without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Keyboard", "description": "Mechanical", "price": 49.99, "categorie": "electronics"
    });
    let response = post_json(app, "/api/v1/products", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Creating a product as a non-admin returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_admin(pool: PgPool) {
    let user = common::create_user(&pool, "plain@test.com", ROLE_USER).await;
    let token = common::token_for(&user);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Keyboard", "description": "Mechanical", "price": 49.99, "categorie": "electronics"
    });
    let response = post_json_auth(app, "/api/v1/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin role required");
}

/// An admin can create a product, and the public listing then returns
/// exactly that product with exactly the expected fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_list_round_trips(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Keyboard",
        "description": "Mechanical keyboard",
        "price": 49.99,
        "image": "https://cdn.test/kbd.png",
        "categorie": "electronics"
    });
    let response = post_json_auth(app.clone(), "/api/v1/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["id"].is_number());
    assert_eq!(created["name"], "Keyboard");
    assert_eq!(created["description"], "Mechanical keyboard");
    assert_eq!(created["price"], 49.99);
    assert_eq!(created["image"], "https://cdn.test/kbd.png");
    assert_eq!(created["categorie"], "electronics");
    assert!(created["created_at"].is_string());

    let response = get(app, "/api/v1/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let products = json.as_array().expect("listing must be an array");
    assert_eq!(products.len(), 1);

    let listed = products[0].as_object().expect("entries must be objects");
    assert_eq!(listed["id"], created["id"]);
    assert_eq!(listed["name"], "Keyboard");
    assert_eq!(listed["description"], "Mechanical keyboard");
    assert_eq!(listed["price"], 49.99);
    assert_eq!(listed["image"], "https://cdn.test/kbd.png");
    assert_eq!(listed["categorie"], "electronics");
    assert!(listed["created_at"].is_string());
    assert!(listed["updated_at"].is_string());

    // Exactly the fields above, nothing extra.
    let mut keys: Vec<_> = listed.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "categorie",
            "created_at",
            "description",
            "id",
            "image",
            "name",
            "price",
            "updated_at",
        ]
    );
}

/// Missing required fields return 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_fields(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Keyboard", "price": 49.99 });
    let response = post_json_auth(app, "/api/v1/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "name, description, price and categorie are required");
}

/// A negative price is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_negative_price(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Keyboard", "description": "Mechanical", "price": -1.0, "categorie": "electronics"
    });
    let response = post_json_auth(app, "/api/v1/products", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "price must be positive");
}

/// A partial update only touches the supplied fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_partial(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    let product = seed_product(&pool, "Keyboard", 49.99).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "price": 39.99 });
    let response = put_json_auth(
        app,
        &format!("/api/v1/products/{}", product.id),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["price"], 39.99);
    // Untouched fields survive.
    assert_eq!(json["name"], "Keyboard");
    assert_eq!(json["categorie"], "electronics");
}

/// Updating a missing product returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_not_found(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Ghost" });
    let response = put_json_auth(app, "/api/v1/products/9999", &token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a product returns a confirmation message, and a second delete
/// returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(&admin);
    let product = seed_product(&pool, "Keyboard", 49.99).await;
    let uri = format!("/api/v1/products/{}", product.id);
    let app = common::build_test_app(pool);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Product deleted successfully");

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
