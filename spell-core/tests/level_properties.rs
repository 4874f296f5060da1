//! Property tests for cast level and heightening rules.

use proptest::prelude::*;
use spell_core::testing::MockCaster;
use spell_core::{CastingContext, Scaling, SpellRecord, SpellResolver};

proptest! {
    #[test]
    fn regular_levels_count_from_themselves(level in 1u8..11) {
        let caster = MockCaster::new(20);
        let spell = SpellRecord::new("Test", level);
        let resolver = SpellResolver::new(&spell, &caster);
        prop_assert_eq!(resolver.effective_spell_level(), level);
    }

    #[test]
    fn cantrip_and_sentinel_count_from_one(level in prop::sample::select(vec![0u8, 11]), caster_level in 1u8..=20) {
        let caster = MockCaster::new(caster_level);
        let spell = SpellRecord::new("Test", level);
        let resolver = SpellResolver::new(&spell, &caster);
        prop_assert_eq!(resolver.effective_spell_level(), 1);
    }

    #[test]
    fn auto_scaling_ignores_override(
        caster_level in 1u8..=20,
        cast_level in proptest::option::of(1u8..=10),
        focus in any::<bool>(),
    ) {
        let caster = MockCaster::new(caster_level);
        let spell = if focus {
            SpellRecord::new("Focus", 3).with_tradition("focus")
        } else {
            SpellRecord::new("Cantrip", 0)
        };
        let resolver = SpellResolver::with_context(&spell, &caster, CastingContext { cast_level });
        prop_assert!(resolver.auto_scaling_spell());
        prop_assert_eq!(resolver.cast_level(), caster_level.div_ceil(2));
    }

    #[test]
    fn fixed_spells_cast_at_their_level(level in 1u8..=10, caster_level in 1u8..=20) {
        let caster = MockCaster::new(caster_level);
        let spell = SpellRecord::new("Fixed", level);
        let resolver = SpellResolver::new(&spell, &caster);
        prop_assert_eq!(resolver.cast_level(), level);
    }

    #[test]
    fn heightened_part_count_matches_interval(
        level in 1u8..=10,
        cast_level in 1u8..=10,
        divisor in 1u8..=4,
    ) {
        let caster = MockCaster::new(20);
        let mode = format!("level{}", divisor);
        let spell = SpellRecord::new("Scaled", level).with_scaling(Scaling::new("1d6", mode.as_str()));
        let context = CastingContext::at_level(cast_level);
        let resolver = SpellResolver::with_context(&spell, &caster, context);

        let expected = if cast_level > level {
            usize::from((cast_level - level) / divisor)
        } else {
            0
        };
        let parts = resolver.heightened_parts();
        prop_assert_eq!(parts.len(), expected);
        prop_assert!(parts.iter().all(|p| p == "1d6"));
    }

    #[test]
    fn unknown_modes_never_heighten(mode in "[a-z]{1,8}", cast_level in 1u8..=10) {
        prop_assume!(!matches!(mode.as_str(), "level1" | "level2" | "level3" | "level4"));
        let caster = MockCaster::new(20);
        let spell = SpellRecord::new("Odd", 1).with_scaling(Scaling::new("1d6", mode.as_str()));
        let context = CastingContext::at_level(cast_level);
        let resolver = SpellResolver::with_context(&spell, &caster, context);
        prop_assert!(resolver.heightened_parts().is_empty());
    }
}
