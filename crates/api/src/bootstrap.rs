//! Startup provisioning of the administrator account.

use anyhow::Context;
use storefront_core::roles::ROLE_ADMIN;
use storefront_db::models::user::CreateUser;
use storefront_db::repositories::UserRepo;
use storefront_db::DbPool;

use crate::auth::password::hash_password;

/// Ensure an administrator account exists for the given credentials.
///
/// Idempotent: if an account with `email` already exists it is left
/// untouched (including its role and password). Called at startup when
/// `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set, so a fresh deployment
/// always has a way into the admin surface.
pub async fn ensure_admin_account(pool: &DbPool, email: &str, password: &str) -> anyhow::Result<()> {
    if let Some(existing) = UserRepo::find_by_email(pool, email)
        .await
        .context("Failed to look up admin account")?
    {
        tracing::info!(user_id = existing.id, "Admin account already present");
        return Ok(());
    }

    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!("Failed to hash admin password: {e}"))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await
    .context("Failed to create admin account")?;

    tracing::info!(user_id = user.id, "Provisioned admin account");
    Ok(())
}
