//! Errors surfaced by spell resolution.

use thiserror::Error;

/// Error type for loading spell records and assembling damage.
#[derive(Debug, Error)]
pub enum SpellError {
    /// The spell adds its caster's spellcasting modifier to damage, but the
    /// caster owns no matching casting entry and the record names no
    /// trick-magic-item ability to fall back on.
    #[error("Spell '{spell}' applies a spellcasting modifier but has no casting entry or trick magic item ability")]
    MissingAbilitySource { spell: String },

    #[error("Invalid spell record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}
