//! Casting entries and their once-per-cast lookup.
//!
//! A spell names the casting entry it is cast through by id. The entry is an
//! item the caster may or may not own; when it is missing the cast falls back
//! to trick-magic-item rules instead of failing.

use crate::ability::AbilityKey;
use crate::caster::{Caster, EntryId};
use once_cell::unsync::OnceCell;

/// The casting entry a spell resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastingEntry {
    /// The caster owns a casting entry with this id.
    Present {
        id: EntryId,
        name: String,
        ability: AbilityKey,
    },
    /// No owned casting entry matches the spell's location.
    Absent { id: EntryId },
}

impl CastingEntry {
    /// Build the view for `id` from whatever the caster owns under it.
    ///
    /// An item that exists but carries no spellcasting data is not a casting
    /// entry and resolves as absent.
    pub fn lookup<C: Caster + ?Sized>(caster: &C, id: &EntryId) -> Self {
        match caster.owned_item(id) {
            Some(item) => match item.spellcasting {
                Some(data) => CastingEntry::Present {
                    id: id.clone(),
                    name: item.name.clone(),
                    ability: data.ability,
                },
                None => CastingEntry::Absent { id: id.clone() },
            },
            None => CastingEntry::Absent { id: id.clone() },
        }
    }

    pub fn id(&self) -> &EntryId {
        match self {
            CastingEntry::Present { id, .. } | CastingEntry::Absent { id } => id,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, CastingEntry::Present { .. })
    }

    /// Governing ability, if the entry is present.
    pub fn ability(&self) -> Option<AbilityKey> {
        match self {
            CastingEntry::Present { ability, .. } => Some(*ability),
            CastingEntry::Absent { .. } => None,
        }
    }
}

/// Where a resolver's entry lookup currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState<'a> {
    /// Not looked up yet.
    Unresolved,
    /// Looked up; the caster owns no matching entry.
    Absent,
    /// Looked up and found.
    Present(&'a CastingEntry),
}

/// Memo cell holding a resolver's casting entry once it has been looked up.
#[derive(Debug, Default)]
pub struct EntryCache {
    cell: OnceCell<CastingEntry>,
}

impl EntryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached entry, looking it up on first use.
    pub fn get_or_resolve<C: Caster + ?Sized>(&self, caster: &C, id: &EntryId) -> &CastingEntry {
        self.cell.get_or_init(|| {
            let entry = CastingEntry::lookup(caster, id);
            match &entry {
                CastingEntry::Present { name, ability, .. } => {
                    tracing::debug!(
                        entry = %id,
                        entry_name = %name,
                        ability = %ability,
                        "resolved casting entry"
                    );
                }
                CastingEntry::Absent { .. } => {
                    tracing::debug!(entry = %id, "casting entry not owned by caster");
                }
            }
            entry
        })
    }

    pub fn state(&self) -> EntryState<'_> {
        match self.cell.get() {
            None => EntryState::Unresolved,
            Some(CastingEntry::Absent { .. }) => EntryState::Absent,
            Some(entry) => EntryState::Present(entry),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}
