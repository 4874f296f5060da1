//! Authored spell records.
//!
//! Records arrive in the authored document shape: scalars wrapped in
//! `{ "value": ... }` objects, camelCase keys, and the rules payload nested
//! under `data`. Optional pieces are kept optional here and defaulted by the
//! accessors on [`SpellRecord`], so callers never coalesce them by hand.

use crate::ability::AbilityKey;
use crate::caster::EntryId;
use crate::error::SpellError;
use crate::scaling::{HeighteningMode, Scaling};
use serde::{Deserialize, Serialize};

/// Tradition marker for focus spells.
pub const FOCUS_TRADITION: &str = "focus";
/// Tradition marker for rituals.
pub const RITUAL_TRADITION: &str = "ritual";

static NO_SCALING: Scaling = Scaling {
    formula: String::new(),
    mode: HeighteningMode::Unknown(String::new()),
};

/// A `{ "value": ... }` wrapper as used throughout authored data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value<T> {
    pub value: T,
}

impl<T> Value<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Base damage of a spell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    /// Damage formula, e.g. "2d6". Absent, empty, and "0" all mean none.
    #[serde(default)]
    pub value: Option<String>,
    /// Add the caster's spellcasting modifier.
    #[serde(default)]
    pub apply_mod: bool,
}

/// Ability used when casting by trick magic item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickMagicItemData {
    /// Missing only matters when the spell adds a spellcasting modifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<AbilityKey>,
}

/// The rules payload of a spell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellData {
    pub level: Value<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heightened_level: Option<Value<u8>>,
    #[serde(default)]
    pub damage: Damage,
    /// Empty for instantaneous spells. Absent is not instantaneous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Scaling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traditions: Option<Value<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trick_magic_item_data: Option<TrickMagicItemData>,
    /// Casting entry this spell is cast through.
    #[serde(default)]
    pub location: Value<EntryId>,
}

/// An authored spell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub name: String,
    pub data: SpellData,
}

impl SpellRecord {
    /// Create a record with only a name and level; everything else defaults.
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            data: SpellData {
                level: Value::new(level),
                ..SpellData::default()
            },
        }
    }

    /// Parse a record from authored JSON.
    pub fn from_json(json: &str) -> Result<Self, SpellError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_heightened_level(mut self, level: u8) -> Self {
        self.data.heightened_level = Some(Value::new(level));
        self
    }

    pub fn with_damage(mut self, formula: impl Into<String>) -> Self {
        self.data.damage.value = Some(formula.into());
        self
    }

    pub fn with_apply_mod(mut self, apply_mod: bool) -> Self {
        self.data.damage.apply_mod = apply_mod;
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.data.duration = Some(Value::new(duration.into()));
        self
    }

    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.data.scaling = Some(scaling);
        self
    }

    /// Add a tradition (or a `focus`/`ritual` marker).
    pub fn with_tradition(mut self, tradition: impl Into<String>) -> Self {
        self.data
            .traditions
            .get_or_insert_with(Value::default)
            .value
            .push(tradition.into());
        self
    }

    pub fn with_trick_magic_item(mut self, ability: AbilityKey) -> Self {
        self.data.trick_magic_item_data = Some(TrickMagicItemData {
            ability: Some(ability),
        });
        self
    }

    pub fn with_location(mut self, id: impl Into<EntryId>) -> Self {
        self.data.location = Value::new(id.into());
        self
    }

    pub fn level(&self) -> u8 {
        self.data.level.value
    }

    /// Authored heightened level, or the base level when none is set.
    pub fn heightened_level(&self) -> u8 {
        self.data
            .heightened_level
            .as_ref()
            .map_or(self.level(), |level| level.value)
    }

    pub fn damage(&self) -> &Damage {
        &self.data.damage
    }

    /// Base damage formula, if the spell has one worth rolling.
    pub fn damage_value(&self) -> Option<&str> {
        match self.data.damage.value.as_deref() {
            None | Some("") | Some("0") => None,
            Some(formula) => Some(formula),
        }
    }

    /// Authored duration text, if any.
    pub fn duration(&self) -> Option<&str> {
        self.data
            .duration
            .as_ref()
            .map(|duration| duration.value.as_str())
    }

    /// Only an explicitly empty duration is instantaneous.
    pub fn is_instantaneous(&self) -> bool {
        self.duration() == Some("")
    }

    /// Heightening rule, or one that never heightens when none is authored.
    pub fn scaling(&self) -> &Scaling {
        self.data.scaling.as_ref().unwrap_or(&NO_SCALING)
    }

    pub fn traditions(&self) -> &[String] {
        self.data
            .traditions
            .as_ref()
            .map(|traditions| traditions.value.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_tradition(&self, tradition: &str) -> bool {
        self.traditions().iter().any(|t| t == tradition)
    }

    pub fn trick_magic_item_ability(&self) -> Option<AbilityKey> {
        self.data
            .trick_magic_item_data
            .and_then(|data| data.ability)
    }

    pub fn location(&self) -> &EntryId {
        &self.data.location.value
    }
}
