//! Heightening rules: how a spell's formula grows when cast above its level.
//!
//! A scaling rule pairs a formula fragment (e.g. "1d6") with a mode naming
//! how many levels above the base it takes to earn one more copy of it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level interval at which a heightened spell gains another formula part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeighteningMode {
    /// +1 part every level.
    Level1,
    /// +1 part every 2 levels.
    Level2,
    /// +1 part every 3 levels.
    Level3,
    /// +1 part every 4 levels.
    Level4,
    /// Any mode string without a known interval. Never heightens.
    Unknown(String),
}

impl HeighteningMode {
    /// Levels needed per extra part, or `None` when the mode does not heighten.
    pub fn divisor(&self) -> Option<u8> {
        match self {
            HeighteningMode::Level1 => Some(1),
            HeighteningMode::Level2 => Some(2),
            HeighteningMode::Level3 => Some(3),
            HeighteningMode::Level4 => Some(4),
            HeighteningMode::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HeighteningMode::Level1 => "level1",
            HeighteningMode::Level2 => "level2",
            HeighteningMode::Level3 => "level3",
            HeighteningMode::Level4 => "level4",
            HeighteningMode::Unknown(mode) => mode,
        }
    }
}

impl Default for HeighteningMode {
    fn default() -> Self {
        HeighteningMode::Unknown(String::new())
    }
}

impl From<String> for HeighteningMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "level1" => HeighteningMode::Level1,
            "level2" => HeighteningMode::Level2,
            "level3" => HeighteningMode::Level3,
            "level4" => HeighteningMode::Level4,
            _ => HeighteningMode::Unknown(mode),
        }
    }
}

impl From<&str> for HeighteningMode {
    fn from(mode: &str) -> Self {
        HeighteningMode::from(mode.to_string())
    }
}

impl From<HeighteningMode> for String {
    fn from(mode: HeighteningMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for HeighteningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A spell's heightening rule. An empty formula means no heightening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scaling {
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub mode: HeighteningMode,
}

impl Scaling {
    pub fn new(formula: impl Into<String>, mode: impl Into<HeighteningMode>) -> Self {
        Self {
            formula: formula.into(),
            mode: mode.into(),
        }
    }

    /// Number of extra formula parts earned when a spell of `spell_level` is
    /// cast at `cast_level`. Never negative.
    pub fn part_count(&self, spell_level: u8, cast_level: u8, sentinel: u8) -> usize {
        if self.formula.is_empty() {
            return 0;
        }
        let Some(divisor) = self.mode.divisor() else {
            return 0;
        };

        let base = effective_spell_level(spell_level, sentinel);
        let levels_above = i32::from(cast_level) - i32::from(base);
        let count = levels_above.div_euclid(i32::from(divisor));
        usize::try_from(count).unwrap_or(0)
    }

    /// Repeat the formula once per earned part.
    pub fn heightened_parts(&self, spell_level: u8, cast_level: u8, sentinel: u8) -> Vec<String> {
        let count = self.part_count(spell_level, cast_level, sentinel);
        vec![self.formula.clone(); count]
    }
}

/// Baseline level heightening counts from: the spell's own level, or 1 for
/// cantrips and anything at or above the sentinel level.
pub fn effective_spell_level(spell_level: u8, sentinel: u8) -> u8 {
    if spell_level > 0 && spell_level < sentinel {
        spell_level
    } else {
        1
    }
}
