use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Party, PartyDraft, PartyId};

/// Stateless request/response boundary to the remote party collection.
///
/// Implementations own no state beyond their connection handle: every call
/// maps to exactly one network round trip, with no retries and no caching.
/// Operations are not idempotent beyond what the underlying transport
/// naturally provides.
#[async_trait]
pub trait PartyGateway: Send + Sync {
    /// Fetch all current records, in the order the server returns them.
    async fn list_parties(&self) -> Result<Vec<Party>>;

    /// Create a new record from a draft. The server assigns the id.
    ///
    /// Returns the created record as echoed by the server; callers that
    /// re-fetch the full list afterwards may discard it.
    async fn create_party(&self, draft: &PartyDraft) -> Result<Party>;

    /// Replace the record at `id` with the draft's fields (full replace,
    /// not a partial patch).
    ///
    /// An id the server no longer knows manifests as a plain
    /// [`GatewayError::Status`](crate::GatewayError::Status) failure, not a
    /// distinguished not-found case.
    async fn update_party(&self, id: PartyId, draft: &PartyDraft) -> Result<Party>;

    /// Delete the record at `id`.
    async fn delete_party(&self, id: PartyId) -> Result<()>;
}
