//! Closed status enums for the purchase and reclamation workflows.
//!
//! Statuses are stored as text and parsed exactly once at the API boundary.
//! An administrator may overwrite any status with any other status -- the
//! domains are flat enums, not transition graphs. The only system-assigned
//! value is the initial one at creation.

/// Purchase request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl PurchaseStatus {
    /// Return the stored/wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Confirmed => "confirmed",
            PurchaseStatus::Rejected => "rejected",
        }
    }

    /// Parse a status string. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<PurchaseStatus> {
        match s {
            "pending" => Some(PurchaseStatus::Pending),
            "confirmed" => Some(PurchaseStatus::Confirmed),
            "rejected" => Some(PurchaseStatus::Rejected),
            _ => None,
        }
    }
}

/// Reclamation (complaint) status.
///
/// The wire labels are French and kept verbatim for client compatibility:
/// `en attente` (pending), `en cours` (in progress), `fini` (done).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReclamationStatus {
    EnAttente,
    EnCours,
    Fini,
}

impl ReclamationStatus {
    /// Return the stored/wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            ReclamationStatus::EnAttente => "en attente",
            ReclamationStatus::EnCours => "en cours",
            ReclamationStatus::Fini => "fini",
        }
    }

    /// Parse a status string. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<ReclamationStatus> {
        match s {
            "en attente" => Some(ReclamationStatus::EnAttente),
            "en cours" => Some(ReclamationStatus::EnCours),
            "fini" => Some(ReclamationStatus::Fini),
            _ => None,
        }
    }
}
