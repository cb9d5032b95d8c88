//! Party Tracker Core Library
//!
//! Client-side state synchronization for the party collection: one
//! controller owning the list snapshot, the form draft, and the edit
//! target, with a fixed set of transitions that keep them coherent across
//! the asynchronous request/response cycle.
//!
//! The library is platform-independent: the network boundary is abstracted
//! behind the `PartyGateway` trait, so the controller can be driven by any
//! frontend and unit tested without a network or a rendering environment.

pub mod controller;
pub mod error;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::PartyController;
pub use error::{CoreError, CoreResult};
pub use party_tracker_gateway::PartyGateway;
