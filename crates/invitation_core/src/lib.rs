pub mod domain;
pub mod input;
pub mod ports;
pub mod service;
pub mod view;

pub use domain::{CeremonyEvent, CoverUpload, InvitationView, NewInvitation, WeddingInvitation};
pub use input::{InvitationForm, InvitationInput, ValidationError};
pub use ports::{AssetStore, InvitationStore, PortError, PortResult};
pub use service::{cover_asset_name, InvitationError, InvitationService};
pub use view::to_view_model;
