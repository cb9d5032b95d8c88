//! Test helper module
//!
//! Provides a mock gateway with failure injection and per-operation call
//! counting, plus convenient factory methods.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use party_tracker_gateway::{
    GatewayError, Party, PartyDraft, PartyGateway, PartyId, Result as GatewayResult,
};
use tokio::sync::RwLock;

use crate::controller::PartyController;

// ===== MockPartyGateway =====

pub struct MockPartyGateway {
    /// Simulated server-side records.
    parties: RwLock<Vec<Party>>,
    /// If Some, `list_parties` returns this instead of the stored records.
    list_override: RwLock<Option<Vec<Party>>>,
    /// Next server-assigned id.
    next_id: AtomicI64,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_delete: AtomicBool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    /// Id passed to the most recent `update_party` call.
    last_update_id: RwLock<Option<PartyId>>,
}

impl Default for MockPartyGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPartyGateway {
    pub fn new() -> Self {
        Self {
            parties: RwLock::new(Vec::new()),
            list_override: RwLock::new(None),
            next_id: AtomicI64::new(1),
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            last_update_id: RwLock::new(None),
        }
    }

    /// Replace the simulated server state and bump the id counter past it.
    pub async fn seed_parties(&self, parties: Vec<Party>) {
        let max_id = parties.iter().map(|p| p.id).max().unwrap_or(0);
        self.next_id.store(max_id + 1, Ordering::SeqCst);
        *self.parties.write().await = parties;
    }

    /// Force the next ids assigned on create.
    pub fn set_next_id(&self, id: PartyId) {
        self.next_id.store(id, Ordering::SeqCst);
    }

    /// Pin `list_parties` to a fixed response, regardless of stored records.
    pub async fn set_list_override(&self, response: Option<Vec<Party>>) {
        *self.list_override.write().await = response;
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub async fn last_update_id(&self) -> Option<PartyId> {
        *self.last_update_id.read().await
    }

    fn injected_failure() -> GatewayError {
        GatewayError::Network {
            detail: "injected transport failure".to_string(),
        }
    }

    fn not_found(id: PartyId) -> GatewayError {
        GatewayError::Status {
            status: 404,
            body: format!("{{\"detail\":\"Political Party not found: {id}\"}}"),
        }
    }
}

#[async_trait]
impl PartyGateway for MockPartyGateway {
    async fn list_parties(&self) -> GatewayResult<Vec<Party>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        if let Some(ref fixed) = *self.list_override.read().await {
            return Ok(fixed.clone());
        }
        Ok(self.parties.read().await.clone())
    }

    async fn create_party(&self, draft: &PartyDraft) -> GatewayResult<Party> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        let party = Party {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name.clone(),
            ideology: draft.ideology.clone(),
            founded_year: draft.founded_year.clone(),
            is_ruling: draft.is_ruling,
        };
        self.parties.write().await.push(party.clone());
        Ok(party)
    }

    async fn update_party(&self, id: PartyId, draft: &PartyDraft) -> GatewayResult<Party> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_update_id.write().await = Some(id);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        let mut parties = self.parties.write().await;
        let Some(stored) = parties.iter_mut().find(|p| p.id == id) else {
            return Err(Self::not_found(id));
        };
        stored.name = draft.name.clone();
        stored.ideology = draft.ideology.clone();
        stored.founded_year = draft.founded_year.clone();
        stored.is_ruling = draft.is_ruling;
        Ok(stored.clone())
    }

    async fn delete_party(&self, id: PartyId) -> GatewayResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        let mut parties = self.parties.write().await;
        if !parties.iter().any(|p| p.id == id) {
            return Err(Self::not_found(id));
        }
        parties.retain(|p| p.id != id);
        Ok(())
    }
}

// ===== Factory methods =====

/// Create a controller wired to a fresh mock gateway.
pub fn create_test_controller() -> (PartyController, Arc<MockPartyGateway>) {
    let gateway = Arc::new(MockPartyGateway::new());
    let controller = PartyController::new(gateway.clone());
    (controller, gateway)
}

/// Build a test record with distinctive field values.
pub fn test_party(id: PartyId, name: &str) -> Party {
    Party {
        id,
        name: name.to_string(),
        ideology: format!("{name} ideology"),
        founded_year: "1950".to_string(),
        is_ruling: false,
    }
}
