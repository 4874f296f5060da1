//! Ability scores that can govern spellcasting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six ability scores, keyed the way authored data spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKey {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "wis")]
    Wisdom,
    #[serde(rename = "cha")]
    Charisma,
}

impl AbilityKey {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AbilityKey::Strength => "STR",
            AbilityKey::Dexterity => "DEX",
            AbilityKey::Constitution => "CON",
            AbilityKey::Intelligence => "INT",
            AbilityKey::Wisdom => "WIS",
            AbilityKey::Charisma => "CHA",
        }
    }

    pub fn all() -> [AbilityKey; 6] {
        [
            AbilityKey::Strength,
            AbilityKey::Dexterity,
            AbilityKey::Constitution,
            AbilityKey::Intelligence,
            AbilityKey::Wisdom,
            AbilityKey::Charisma,
        ]
    }
}

impl fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
