//! Spell resolution for a tabletop rules engine.
//!
//! This crate provides:
//! - Authored spell records loaded from JSON
//! - The `Caster` trait hosts implement over their own character model
//! - `SpellResolver`, which derives cast level, heightening, and damage parts
//!
//! # Quick Start
//!
//! ```
//! use spell_core::testing::MockCaster;
//! use spell_core::{AbilityKey, CastingContext, Scaling, SpellRecord, SpellResolver};
//!
//! let caster = MockCaster::new(9)
//!     .with_ability_mod(AbilityKey::Intelligence, 4)
//!     .with_casting_entry("arcane", AbilityKey::Intelligence);
//!
//! let fireball = SpellRecord::new("Fireball", 3)
//!     .with_damage("6d6")
//!     .with_duration("1 round")
//!     .with_location("arcane")
//!     .with_scaling(Scaling::new("2d6", "level1"));
//!
//! let context = CastingContext::at_level(5);
//! let resolver = SpellResolver::with_context(&fireball, &caster, context);
//! assert_eq!(resolver.damage_formula().unwrap(), "6d6 + 2d6 + 2d6");
//! ```

pub mod ability;
pub mod caster;
pub mod config;
pub mod damage;
pub mod entry;
pub mod error;
pub mod record;
pub mod resolver;
pub mod scaling;
pub mod testing;

// Primary public API
pub use ability::AbilityKey;
pub use caster::{Caster, EntryId, OwnedItem, SpellcastingData};
pub use config::ResolverConfig;
pub use damage::{DamagePart, DamageParts};
pub use entry::{CastingEntry, EntryState};
pub use error::SpellError;
pub use record::SpellRecord;
pub use resolver::{CastingContext, SpellResolver};
pub use scaling::{HeighteningMode, Scaling};
