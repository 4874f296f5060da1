//! Testing utilities for spell resolution.
//!
//! This module provides:
//! - `MockCaster`, an in-memory `Caster` built up with chained setters
//! - A lookup counter for asserting how often a resolver asked for items

use crate::ability::AbilityKey;
use crate::caster::{Caster, EntryId, OwnedItem};
use std::cell::Cell;
use std::collections::HashMap;

/// A scripted caster for deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct MockCaster {
    level: u8,
    ability_mods: HashMap<AbilityKey, i32>,
    items: Vec<OwnedItem>,
    lookups: Cell<usize>,
}

impl MockCaster {
    /// Create a caster of the given character level with every modifier at 0.
    pub fn new(level: u8) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn with_ability_mod(mut self, ability: AbilityKey, modifier: i32) -> Self {
        self.ability_mods.insert(ability, modifier);
        self
    }

    /// Add a feat (or any named item) to the inventory.
    pub fn with_feat(mut self, name: impl Into<String>) -> Self {
        self.items.push(OwnedItem::feat(name));
        self
    }

    /// Add a casting entry under `id` governed by `ability`.
    pub fn with_casting_entry(mut self, id: impl Into<EntryId>, ability: AbilityKey) -> Self {
        let id = id.into();
        let name = format!("Spellcasting ({})", id);
        self.items.push(OwnedItem::casting_entry(id, name, ability));
        self
    }

    pub fn with_item(mut self, item: OwnedItem) -> Self {
        self.items.push(item);
        self
    }

    /// How many times `owned_item` has been called.
    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }
}

impl Caster for MockCaster {
    fn level(&self) -> u8 {
        self.level
    }

    fn ability_mod(&self, ability: AbilityKey) -> i32 {
        self.ability_mods.get(&ability).copied().unwrap_or(0)
    }

    fn items(&self) -> &[OwnedItem] {
        &self.items
    }

    fn owned_item(&self, id: &EntryId) -> Option<&OwnedItem> {
        self.lookups.set(self.lookups.get() + 1);
        self.items.iter().find(|item| &item.id == id)
    }
}
