//! Rule knobs for spell resolution.

use serde::{Deserialize, Serialize};

/// Name of the feat that adds cast-level damage to instantaneous spells.
pub const DANGEROUS_SORCERY: &str = "Dangerous Sorcery";

/// Placeholder level for cantrip-like entries that always scale with the
/// caster.
pub const AUTO_SCALING_SENTINEL: u8 = 11;

/// Configuration for a spell resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Feat whose owner adds the cast level to instantaneous spell damage.
    pub bonus_feat_name: String,

    /// Spell level treated like a cantrip for scaling purposes. Also the
    /// exclusive upper bound on levels heightening counts from.
    pub auto_scaling_sentinel: u8,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different feat name for the instantaneous damage bonus.
    pub fn with_bonus_feat_name(mut self, name: impl Into<String>) -> Self {
        self.bonus_feat_name = name.into();
        self
    }

    pub fn with_auto_scaling_sentinel(mut self, level: u8) -> Self {
        self.auto_scaling_sentinel = level;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            bonus_feat_name: DANGEROUS_SORCERY.to_string(),
            auto_scaling_sentinel: AUTO_SCALING_SENTINEL,
        }
    }
}
