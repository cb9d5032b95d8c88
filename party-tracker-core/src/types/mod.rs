//! View-state types

mod edit;

pub use edit::{DraftField, EditTarget};

// Re-export wire types from the gateway crate
pub use party_tracker_gateway::{Party, PartyDraft, PartyId};
