//! Edit mode marker and draft field messages

use party_tracker_gateway::{PartyDraft, PartyId};

/// Marker selecting what a submission does: create a new record, or replace
/// the record at a given id.
///
/// Modeled as an explicit two-variant enum rather than a nullable id so both
/// submission branches are exhaustive at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    /// Submissions create a new record (server assigns the id).
    #[default]
    Create,
    /// Submissions replace the record with this id.
    Edit(PartyId),
}

impl EditTarget {
    /// Whether edit mode is active (used by frontends to pick the submit
    /// button label).
    #[must_use]
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// The targeted record id, if any.
    #[must_use]
    pub fn target_id(self) -> Option<PartyId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// A single-field write into the form draft, carrying the new value.
///
/// One message per form control; applying a field never touches the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    /// Party name input.
    Name(String),
    /// Ideology input.
    Ideology(String),
    /// Founded year input (free text, not validated as numeric).
    FoundedYear(String),
    /// Ruling party checkbox.
    IsRuling(bool),
}

impl DraftField {
    /// Write this field's value into the draft, preserving all others.
    pub fn apply_to(self, draft: &mut PartyDraft) {
        match self {
            Self::Name(value) => draft.name = value,
            Self::Ideology(value) => draft.ideology = value,
            Self::FoundedYear(value) => draft.founded_year = value,
            Self::IsRuling(value) => draft.is_ruling = value,
        }
    }
}
