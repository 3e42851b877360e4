//! crates/invitation_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete database and file storage.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{NewInvitation, WeddingInvitation};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (database, filesystem).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The store could not be reached or rejected the credentials.
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait InvitationStore: Send + Sync {
    /// Inserts one row in a single statement and returns the generated id.
    async fn insert_invitation(&self, invitation: &NewInvitation) -> PortResult<i64>;

    /// Fetches the row with the given id. Absence is `Ok(None)`.
    async fn get_invitation_by_id(&self, id: i64) -> PortResult<Option<WeddingInvitation>>;
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Writes `data` under `name`, replacing anything already stored there.
    /// Returns the reference to record in `cover_image_path`.
    async fn save_asset(&self, name: &str, data: Bytes) -> PortResult<String>;
}
