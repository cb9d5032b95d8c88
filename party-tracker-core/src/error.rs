//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use party_tracker_gateway::GatewayError;

/// Core layer error type
///
/// Every controller operation that touches the network surfaces its failure
/// through this type and otherwise leaves the owned state untouched. The
/// current frontends drop the error after logging it; the variant structure
/// exists so a future UI can display failures without a controller redesign.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Transport failure from the gateway (network error, timeout, non-2xx
    /// response, or unparseable body)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
