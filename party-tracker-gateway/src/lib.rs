//! # party-tracker-gateway
//!
//! A thin, stateless gateway over one remote REST collection resource:
//! the `/political_parties/` endpoint of the party tracker backend.
//!
//! The crate exposes exactly four operations — list, create, update by id,
//! delete by id — behind the [`PartyGateway`] trait. Each call maps 1:1 to
//! one network round trip: no retries, no caching, no request queueing.
//! Any network failure or non-2xx response surfaces as a [`GatewayError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use party_tracker_gateway::{PartyDraft, create_gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = create_gateway("http://localhost:8000");
//!
//!     let created = gateway
//!         .create_party(&PartyDraft {
//!             name: "Green Party".to_string(),
//!             ideology: "Environmentalism".to_string(),
//!             founded_year: "1980".to_string(),
//!             is_ruling: false,
//!         })
//!         .await?;
//!
//!     let parties = gateway.list_parties().await?;
//!     println!("{} parties, latest id {}", parties.len(), created.id);
//!
//!     gateway.delete_party(created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GatewayError>`](GatewayError). Callers
//! that only care whether the round trip succeeded can treat every variant
//! as one transport failure; the variants exist so a future UI can surface
//! more specific messages without reworking its callers.

mod error;
mod factory;
mod http_client;
mod rest;
mod traits;
mod types;

// Re-export error types
pub use error::{GatewayError, Result};

// Re-export factory function
pub use factory::create_gateway;

// Re-export the gateway trait
pub use traits::PartyGateway;

// Re-export wire types
pub use types::{Party, PartyDraft, PartyId};

// Re-export the concrete REST implementation
pub use rest::RestPartyGateway;
