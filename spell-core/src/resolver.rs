//! Spell resolution for a single cast.
//!
//! A [`SpellResolver`] pairs an authored [`SpellRecord`] with the [`Caster`]
//! casting it and derives everything a damage roll or a spell card needs:
//! the level the spell is cast at, how many heightening steps it earns, and
//! the ordered damage parts. A resolver is built per cast and thrown away
//! afterwards; the only thing it remembers is the casting entry lookup.

use crate::caster::{Caster, EntryId};
use crate::config::ResolverConfig;
use crate::damage::{DamagePart, DamageParts};
use crate::entry::{CastingEntry, EntryCache, EntryState};
use crate::error::SpellError;
use crate::record::{SpellRecord, FOCUS_TRADITION, RITUAL_TRADITION};
use crate::scaling::{self, Scaling};

/// Per-cast inputs supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastingContext {
    /// Level to cast at. `None` (or 0) casts at the spell's own level.
    pub cast_level: Option<u8>,
}

impl CastingContext {
    pub fn at_level(level: u8) -> Self {
        Self {
            cast_level: Some(level),
        }
    }
}

/// Derived view of one spell cast by one caster.
#[derive(Debug)]
pub struct SpellResolver<'a, C: Caster + ?Sized> {
    record: &'a SpellRecord,
    caster: &'a C,
    cast_level: u8,
    config: ResolverConfig,
    entry: EntryCache,
}

impl<'a, C: Caster + ?Sized> SpellResolver<'a, C> {
    /// Resolve `record` as cast by `caster` at the spell's own level.
    pub fn new(record: &'a SpellRecord, caster: &'a C) -> Self {
        Self::with_context(record, caster, CastingContext::default())
    }

    /// Resolve `record` as cast by `caster` with per-cast inputs such as an
    /// explicit cast level.
    pub fn with_context(record: &'a SpellRecord, caster: &'a C, context: CastingContext) -> Self {
        let cast_level = match context.cast_level {
            Some(level) if level > 0 => level,
            _ => record.level(),
        };
        Self {
            record,
            caster,
            cast_level,
            config: ResolverConfig::default(),
            entry: EntryCache::new(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn record(&self) -> &SpellRecord {
        self.record
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn spell_level(&self) -> u8 {
        self.record.level()
    }

    pub fn heightened_level(&self) -> u8 {
        self.record.heightened_level()
    }

    pub fn traditions(&self) -> &[String] {
        self.record.traditions()
    }

    pub fn is_cantrip(&self) -> bool {
        self.spell_level() == 0
    }

    pub fn is_focus_spell(&self) -> bool {
        self.record.has_tradition(FOCUS_TRADITION)
    }

    pub fn is_ritual(&self) -> bool {
        self.record.has_tradition(RITUAL_TRADITION)
    }

    /// Cantrips, sentinel-level entries and focus spells scale with the
    /// caster rather than being cast at a fixed level.
    pub fn auto_scaling_spell(&self) -> bool {
        let level = self.spell_level();
        level == 0 || level == self.config.auto_scaling_sentinel || self.is_focus_spell()
    }

    /// Level the spell is actually cast at.
    ///
    /// Auto-scaling spells always use half the caster's level, rounded up,
    /// whatever override was supplied.
    pub fn cast_level(&self) -> u8 {
        if self.auto_scaling_spell() {
            return self.caster.level().div_ceil(2);
        }
        self.cast_level
    }

    /// Level heightening is counted from.
    pub fn effective_spell_level(&self) -> u8 {
        scaling::effective_spell_level(self.spell_level(), self.config.auto_scaling_sentinel)
    }

    pub fn spellcasting_entry_id(&self) -> &EntryId {
        self.record.location()
    }

    /// The casting entry this spell is cast through, looked up on first use.
    pub fn spellcasting_entry(&self) -> &CastingEntry {
        self.entry
            .get_or_resolve(self.caster, self.spellcasting_entry_id())
    }

    pub fn entry_state(&self) -> EntryState<'_> {
        self.entry.state()
    }

    pub fn entry_resolved(&self) -> bool {
        self.entry.is_resolved()
    }

    pub fn scaling(&self) -> &Scaling {
        self.record.scaling()
    }

    pub fn damage_value(&self) -> Option<&str> {
        self.record.damage_value()
    }

    /// Copies of the scaling formula earned by casting above the base level.
    pub fn heightened_parts(&self) -> Vec<String> {
        self.scaling().heightened_parts(
            self.spell_level(),
            self.cast_level(),
            self.config.auto_scaling_sentinel,
        )
    }

    /// Spellcasting modifier added to damage.
    ///
    /// Uses the casting entry's ability, or the trick-magic-item ability when
    /// the caster owns no entry. Having neither is a configuration error.
    pub fn spellcasting_modifier(&self) -> Result<i32, SpellError> {
        let entry = self.spellcasting_entry();
        let ability = match (entry.ability(), self.record.trick_magic_item_ability()) {
            (Some(ability), _) => ability,
            (None, Some(trick)) => trick,
            (None, None) => {
                tracing::warn!(
                    spell = %self.record.name,
                    entry = %entry.id(),
                    "no ability source for spellcasting modifier"
                );
                return Err(SpellError::MissingAbilitySource {
                    spell: self.record.name.clone(),
                });
            }
        };
        Ok(self.caster.ability_mod(ability))
    }

    /// Cast-level bonus from the instantaneous-damage feat, if it applies.
    pub fn feat_bonus(&self) -> Option<u8> {
        if !self.record.is_instantaneous() || self.is_focus_spell() || self.is_cantrip() {
            return None;
        }
        if !self.caster.has_item_named(&self.config.bonus_feat_name) {
            return None;
        }

        let bonus = self.cast_level();
        tracing::info!(
            spell = %self.record.name,
            feat = %self.config.bonus_feat_name,
            bonus,
            "adding feat damage bonus"
        );
        Some(bonus)
    }

    /// Ordered damage contributions: base formula, spellcasting modifier,
    /// feat bonus, then one part per heightening step.
    pub fn damage_parts(&self) -> Result<DamageParts, SpellError> {
        let mut parts = DamageParts::new();

        if let Some(formula) = self.damage_value() {
            parts.push(DamagePart::Base(formula.to_string()));
        }
        if self.record.damage().apply_mod {
            parts.push(DamagePart::AbilityModifier(self.spellcasting_modifier()?));
        }
        if let Some(bonus) = self.feat_bonus() {
            parts.push(DamagePart::FeatBonus(bonus));
        }
        parts.extend(
            self.heightened_parts()
                .into_iter()
                .map(DamagePart::Heightened),
        );

        Ok(parts)
    }

    /// The damage parts joined into a single roll formula.
    pub fn damage_formula(&self) -> Result<String, SpellError> {
        Ok(self.damage_parts()?.formula())
    }
}
