//! crates/invitation_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or HTTP framework.

use bytes::Bytes;
use chrono::NaiveDate;

/// A stored invitation, exactly as it sits in the `wedding_details` table.
///
/// Rows are immutable once created; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeddingInvitation {
    pub id: i64,
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: NaiveDate,
    pub city: String,
    pub story: String,
    pub cover_image_path: Option<String>,
    pub haldi_date: Option<NaiveDate>,
    pub mehendi_date: Option<NaiveDate>,
}

/// The row handed to the store for insertion. Everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvitation {
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: NaiveDate,
    pub city: String,
    pub story: String,
    pub cover_image_path: Option<String>,
    pub haldi_date: Option<NaiveDate>,
    pub mehendi_date: Option<NaiveDate>,
}

impl NewInvitation {
    /// Attaches the store-generated id, producing the persisted entity.
    pub fn with_id(self, id: i64) -> WeddingInvitation {
        WeddingInvitation {
            id,
            groom_name: self.groom_name,
            bride_name: self.bride_name,
            wedding_date: self.wedding_date,
            city: self.city,
            story: self.story,
            cover_image_path: self.cover_image_path,
            haldi_date: self.haldi_date,
            mehendi_date: self.mehendi_date,
        }
    }
}

/// A cover photo as received from the client, before it is stored.
#[derive(Debug, Clone)]
pub struct CoverUpload {
    /// The file name the client sent, e.g. `photo.jpg`.
    pub file_name: String,
    pub data: Bytes,
}

/// A named ceremony shown on the invitation page. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CeremonyEvent {
    pub name: String,
    pub date: NaiveDate,
}

// Presentation-ready form of an invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationView {
    pub id: i64,
    pub groom: String,
    pub bride: String,
    pub wedding_date: NaiveDate,
    pub city: String,
    pub story: String,
    pub cover_image_path: Option<String>,
    pub events: Vec<CeremonyEvent>,
}
