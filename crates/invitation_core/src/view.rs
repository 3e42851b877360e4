//! crates/invitation_core/src/view.rs
//!
//! Builds the presentation-ready `InvitationView` from a stored invitation.

use chrono::NaiveDate;

use crate::domain::{CeremonyEvent, InvitationView, WeddingInvitation};

pub const HALDI_CEREMONY: &str = "Haldi Ceremony";
pub const MEHENDI_CEREMONY: &str = "Mehendi Ceremony";

/// Converts a row into its view-model. Pure; no I/O.
///
/// Ceremonies appear in a fixed order, Haldi before Mehendi, and a ceremony
/// without a date is left out entirely.
pub fn to_view_model(row: &WeddingInvitation) -> InvitationView {
    InvitationView {
        id: row.id,
        groom: row.groom_name.clone(),
        bride: row.bride_name.clone(),
        wedding_date: row.wedding_date,
        city: row.city.clone(),
        story: row.story.clone(),
        cover_image_path: row.cover_image_path.clone(),
        events: ceremony_events(row.haldi_date, row.mehendi_date),
    }
}

fn ceremony_events(haldi: Option<NaiveDate>, mehendi: Option<NaiveDate>) -> Vec<CeremonyEvent> {
    [(HALDI_CEREMONY, haldi), (MEHENDI_CEREMONY, mehendi)]
        .into_iter()
        .filter_map(|(name, date)| {
            date.map(|date| CeremonyEvent {
                name: name.to_string(),
                date,
            })
        })
        .collect()
}

impl From<&WeddingInvitation> for InvitationView {
    fn from(row: &WeddingInvitation) -> Self {
        to_view_model(row)
    }
}
