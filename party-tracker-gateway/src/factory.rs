//! Gateway factory function.

use std::sync::Arc;

use crate::rest::RestPartyGateway;
use crate::traits::PartyGateway;

/// Creates a [`PartyGateway`] bound to the backend at `base_url`.
///
/// The gateway is wrapped in `Arc<dyn PartyGateway>` for easy sharing
/// across async tasks and for substituting a mock in tests.
///
/// # Examples
///
/// ```rust,no_run
/// use party_tracker_gateway::create_gateway;
///
/// let gateway = create_gateway("http://localhost:8000");
/// ```
#[must_use]
pub fn create_gateway(base_url: impl Into<String>) -> Arc<dyn PartyGateway> {
    Arc::new(RestPartyGateway::new(base_url))
}
