//! crates/invitation_core/src/service.rs
//!
//! The invitation writer and reader, composed over the storage ports.

use std::sync::Arc;

use tracing::info;

use crate::domain::{CoverUpload, NewInvitation, WeddingInvitation};
use crate::input::{InvitationInput, ValidationError};
use crate::ports::{AssetStore, InvitationStore, PortError};

/// Errors surfaced by `InvitationService`.
#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] PortError),
}

/// The name a cover photo is stored under: `{groom}-{bride}-{file}`.
///
/// Only the last path component of the client's file name is used, and path
/// separators inside the groom and bride names become `-`, so the result is
/// always a flat name. Two uploads with the same groom, bride and file name
/// map to the same name, so the later one replaces the earlier one.
pub fn cover_asset_name(groom: &str, bride: &str, file_name: &str) -> String {
    format!(
        "{}-{}-{}",
        flatten(groom),
        flatten(bride),
        base_file_name(file_name)
    )
}

fn flatten(part: &str) -> String {
    part.replace(['/', '\\'], "-")
}

fn base_file_name(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or(file_name)
}

/// Creates and loads invitations. Built once at startup from explicit
/// store handles and shared between requests.
#[derive(Clone)]
pub struct InvitationService {
    store: Arc<dyn InvitationStore>,
    assets: Arc<dyn AssetStore>,
}

impl InvitationService {
    pub fn new(store: Arc<dyn InvitationStore>, assets: Arc<dyn AssetStore>) -> Self {
        Self { store, assets }
    }

    /// Persists a validated submission and returns the new invitation id.
    ///
    /// The cover, if any, is written before the row so the row can record
    /// where it went. A cover with an empty file name counts as no cover.
    pub async fn create(
        &self,
        input: InvitationInput,
        cover: Option<CoverUpload>,
    ) -> Result<i64, InvitationError> {
        let cover_image_path = match cover {
            Some(cover) if !base_file_name(&cover.file_name).is_empty() => {
                let name = cover_asset_name(input.groom(), input.bride(), &cover.file_name);
                Some(self.assets.save_asset(&name, cover.data).await?)
            }
            _ => None,
        };

        let row = NewInvitation {
            groom_name: input.groom().to_string(),
            bride_name: input.bride().to_string(),
            wedding_date: input.wedding_date(),
            city: input.city().to_string(),
            story: input.story().to_string(),
            cover_image_path,
            haldi_date: input.haldi_date(),
            mehendi_date: input.mehendi_date(),
        };

        let id = self.store.insert_invitation(&row).await?;
        info!(invitation_id = id, "Created invitation for {} & {}", row.groom_name, row.bride_name);
        Ok(id)
    }

    /// Loads an invitation by id. `Ok(None)` when no such row exists.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<WeddingInvitation>, InvitationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id).into());
        }
        Ok(self.store.get_invitation_by_id(id).await?)
    }
}
