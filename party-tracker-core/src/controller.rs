//! View-state controller for the party collection
//!
//! Owns the triple (list snapshot, form draft, edit target) behind a fixed
//! mutation API: user input mutates the draft synchronously, mutating
//! operations run one gateway round trip and then refresh the snapshot
//! wholesale from the server. Nothing outside this module mutates the
//! triple, which is what makes the transition rules unit-testable without
//! a rendering environment.

use std::sync::Arc;

use party_tracker_gateway::PartyGateway;

use crate::error::CoreResult;
use crate::types::{DraftField, EditTarget, Party, PartyDraft, PartyId};

/// State-owning controller over one party collection.
///
/// The mode is implicit in [`EditTarget`]: `Create` submits new records,
/// `Edit(id)` replaces the targeted record. Initial state is create mode
/// with an empty draft and an empty snapshot; call [`load`](Self::load)
/// once at startup to populate the list.
pub struct PartyController {
    gateway: Arc<dyn PartyGateway>,
    parties: Vec<Party>,
    draft: PartyDraft,
    target: EditTarget,
}

impl PartyController {
    /// Create a controller in create mode with an empty draft and snapshot.
    #[must_use]
    pub fn new(gateway: Arc<dyn PartyGateway>) -> Self {
        Self {
            gateway,
            parties: Vec::new(),
            draft: PartyDraft::default(),
            target: EditTarget::Create,
        }
    }

    // ===== Read accessors (presentation boundary) =====

    /// The last list snapshot fetched from the server, in server order.
    #[must_use]
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    /// The current form draft.
    #[must_use]
    pub fn draft(&self) -> &PartyDraft {
        &self.draft
    }

    /// The current submission target.
    #[must_use]
    pub fn edit_target(&self) -> EditTarget {
        self.target
    }

    /// Whether edit mode is active (frontends use this to pick the submit
    /// button label).
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.target.is_editing()
    }

    // ===== Operations =====

    /// Refresh the list snapshot from the server, replacing it wholesale.
    ///
    /// On failure the previous snapshot stays as-is and the error is
    /// surfaced to the caller.
    pub async fn load(&mut self) -> CoreResult<()> {
        self.parties = self.gateway.list_parties().await?;
        log::debug!("loaded {} parties", self.parties.len());
        Ok(())
    }

    /// Write one field into the draft, preserving all others.
    ///
    /// Never touches the edit target; typing into the form while editing
    /// keeps targeting the same record.
    pub fn edit_field(&mut self, field: DraftField) {
        field.apply_to(&mut self.draft);
    }

    /// Enter edit mode for the record at `id`, copying its fields into the
    /// draft.
    ///
    /// A stale id (not in the current snapshot, e.g. the record was deleted
    /// since the last load) is silently ignored: the draft and target stay
    /// unchanged rather than showing a corrupt form.
    pub fn begin_edit(&mut self, id: PartyId) {
        if let Some(party) = self.parties.iter().find(|p| p.id == id) {
            self.draft = PartyDraft::from(party);
            self.target = EditTarget::Edit(id);
        } else {
            log::debug!("begin_edit ignored: id {id} not in current snapshot");
        }
    }

    /// Submit the draft: create a new record in create mode, replace the
    /// targeted record in edit mode.
    ///
    /// On success the draft resets to empty, the target resets to create
    /// mode, and the snapshot is refreshed. On failure the draft, target,
    /// and snapshot are all left exactly as they were, so the user can
    /// correct the input and resubmit.
    pub async fn submit(&mut self) -> CoreResult<()> {
        match self.target {
            EditTarget::Create => {
                // The created record is re-fetched via load(), so the echo
                // from the server is not consumed here.
                self.gateway.create_party(&self.draft).await?;
            }
            EditTarget::Edit(id) => {
                self.gateway.update_party(id, &self.draft).await?;
            }
        }
        self.draft = PartyDraft::default();
        self.target = EditTarget::Create;
        self.load().await
    }

    /// Delete the record at `id` and refresh the snapshot.
    ///
    /// On failure the snapshot is unchanged. Removing the record currently
    /// being edited does NOT clear the edit target or draft; the form keeps
    /// the stale copy until the user submits or re-enters edit mode.
    pub async fn remove(&mut self, id: PartyId) -> CoreResult<()> {
        self.gateway.delete_party(id).await?;
        self.load().await
    }
}
