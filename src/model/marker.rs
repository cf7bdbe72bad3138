//! # Deletion Markers
//!
//! A marker is a document in the [`MARKER_COLLECTION`] collection whose id is
//! the uid of the account to delete. Creating it is the request; the handler
//! answers by annotating it with a [`MarkerUpdate`].
//!
//! ## Lifecycle
//!
//! ```text
//! pending ──► success
//!         ├─► failed
//!         └─► not_found
//! ```
//!
//! `pending` is implicit: a freshly created marker simply has no status yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Collection the deletion markers live in.
pub const MARKER_COLLECTION: &str = "deletedUsers";

/// Annotation error written when the trigger carried no uid.
pub const MISSING_UID: &str = "Missing UID";

/// Annotation error written when the account was already gone.
pub const AUTH_USER_NOT_FOUND: &str = "Auth user not found";

/// Terminal outcome of a deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStatus {
    Success,
    Failed,
    NotFound,
}

impl DeletionStatus {
    /// The wire value stored in `authDeletionStatus`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionStatus::Success => "success",
            DeletionStatus::Failed => "failed",
            DeletionStatus::NotFound => "not_found",
        }
    }
}

impl Display for DeletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a marker document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerRef {
    pub collection: String,
    pub id: String,
}

impl MarkerRef {
    /// A reference into [`MARKER_COLLECTION`].
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            collection: MARKER_COLLECTION.to_string(),
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Document path, e.g. `deletedUsers/abc123`.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl Display for MarkerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// The annotation a single handler pass writes onto a marker.
///
/// Serializes with the stored field names; `authDeletionError` is omitted for
/// `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerUpdate {
    #[serde(rename = "authDeletionStatus")]
    pub status: DeletionStatus,
    #[serde(rename = "authDeletionError", skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(rename = "authDeletionAt")]
    pub at: DateTime<Utc>,
}

impl MarkerUpdate {
    pub fn success(at: DateTime<Utc>) -> Self {
        Self {
            status: DeletionStatus::Success,
            error: None,
            at,
        }
    }

    pub fn failed(error: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            status: DeletionStatus::Failed,
            error: Some(error.into()),
            at,
        }
    }

    pub fn not_found(at: DateTime<Utc>) -> Self {
        Self {
            status: DeletionStatus::NotFound,
            error: Some(AUTH_USER_NOT_FOUND.to_string()),
            at,
        }
    }
}

/// A marker document as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionMarker {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auth_deletion_status: Option<DeletionStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auth_deletion_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auth_deletion_at: Option<DateTime<Utc>>,
}

impl DeletionMarker {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
            auth_deletion_status: None,
            auth_deletion_error: None,
            auth_deletion_at: None,
        }
    }

    /// True until the first annotation lands.
    pub fn is_pending(&self) -> bool {
        self.auth_deletion_status.is_none()
    }

    /// Merges an annotation into the marker.
    ///
    /// The three annotation fields move together so the error never outlives
    /// the status it explains.
    pub fn apply(&mut self, update: &MarkerUpdate) {
        self.auth_deletion_status = Some(update.status);
        self.auth_deletion_error = update.error.clone();
        self.auth_deletion_at = Some(update.at);
    }
}
