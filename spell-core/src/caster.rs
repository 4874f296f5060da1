//! The caster collaborator.
//!
//! Spell resolution never owns a character; it reads one through the
//! [`Caster`] trait. Hosts implement it over whatever actor model they keep.

use crate::ability::AbilityKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an item owned by a caster. Casting entries are items, so a
/// spell's location is one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Spellcasting payload carried by items that are casting entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingData {
    /// Ability that governs spells cast through this entry.
    pub ability: AbilityKey,
}

/// An item in a caster's inventory: feats, equipment, casting entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub id: EntryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spellcasting: Option<SpellcastingData>,
}

impl OwnedItem {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spellcasting: None,
        }
    }

    /// A feat or other named item with a generated id.
    pub fn feat(name: impl Into<String>) -> Self {
        Self::new(EntryId::generate(), name)
    }

    /// A casting entry governed by `ability`.
    pub fn casting_entry(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        ability: AbilityKey,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spellcasting: Some(SpellcastingData { ability }),
        }
    }
}

/// Read-only view of a character casting a spell.
pub trait Caster {
    /// Character level.
    fn level(&self) -> u8;

    /// Modifier for the given ability score.
    fn ability_mod(&self, ability: AbilityKey) -> i32;

    /// Every owned item, in inventory order.
    fn items(&self) -> &[OwnedItem];

    /// Look up an owned item by id.
    fn owned_item(&self, id: &EntryId) -> Option<&OwnedItem> {
        self.items().iter().find(|item| &item.id == id)
    }

    /// Whether any owned item carries exactly this name.
    fn has_item_named(&self, name: &str) -> bool {
        self.items().iter().any(|item| item.name == name)
    }
}
