//! services/web/src/web/state.rs
//!
//! Defines the application's shared state.

use invitation_core::InvitationService;
use std::path::PathBuf;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub invitations: InvitationService,
    /// Directory the cover photos are written to and served from.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}
