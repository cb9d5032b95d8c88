use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a persisted party record.
///
/// The backend assigns ids on create; the client never fabricates one and
/// treats the value as opaque beyond equality comparison.
pub type PartyId = i64;

/// A party record as persisted by the remote collection endpoint.
///
/// Records are only ever replaced wholesale: an update call sends a full
/// [`PartyDraft`], never a partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Server-assigned identifier, immutable once created.
    pub id: PartyId,
    /// Party name.
    pub name: String,
    /// Ideology description.
    pub ideology: String,
    /// Founding year, transmitted as free text (not validated as numeric).
    pub founded_year: String,
    /// Whether the party currently holds power.
    pub is_ruling: bool,
}

/// The unsaved working copy of a party: shape-compatible with [`Party`]
/// minus the server-assigned `id`.
///
/// `Default` is the empty draft (empty strings, `is_ruling = false`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyDraft {
    /// Party name.
    pub name: String,
    /// Ideology description.
    pub ideology: String,
    /// Founding year, edited as free text.
    pub founded_year: String,
    /// Whether the party currently holds power.
    pub is_ruling: bool,
}

impl From<&Party> for PartyDraft {
    /// Copy a record's editable fields into a draft, dropping the id.
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            ideology: party.ideology.clone(),
            founded_year: party.founded_year.clone(),
            is_ruling: party.is_ruling,
        }
    }
}
