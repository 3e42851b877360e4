pub mod assets;
pub mod db;

pub use assets::FsAssetStore;
pub use db::{PgInvitationStore, StorageAccessor};
