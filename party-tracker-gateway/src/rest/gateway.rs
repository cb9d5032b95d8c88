//! `PartyGateway` trait implementation for the REST gateway.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::PartyGateway;
use crate::types::{Party, PartyDraft, PartyId};

use super::RestPartyGateway;

#[async_trait]
impl PartyGateway for RestPartyGateway {
    async fn list_parties(&self) -> Result<Vec<Party>> {
        self.get_json(&self.collection_url()).await
    }

    async fn create_party(&self, draft: &PartyDraft) -> Result<Party> {
        self.post_json(&self.collection_url(), draft).await
    }

    async fn update_party(&self, id: PartyId, draft: &PartyDraft) -> Result<Party> {
        self.put_json(&self.item_url(id), draft).await
    }

    async fn delete_party(&self, id: PartyId) -> Result<()> {
        self.delete(&self.item_url(id)).await
    }
}
