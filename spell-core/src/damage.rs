//! Damage contributions assembled for a cast.
//!
//! Parts are handed to a roll formatter in order; they are concatenated,
//! never reordered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contribution to a spell's damage roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamagePart {
    /// The spell's base damage formula.
    Base(String),
    /// Caster's spellcasting ability modifier.
    AbilityModifier(i32),
    /// Bonus from the instantaneous-damage feat, equal to the cast level.
    FeatBonus(u8),
    /// One heightening step's worth of the scaling formula.
    Heightened(String),
}

impl DamagePart {
    /// Numeric value for modifier-like parts.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            DamagePart::AbilityModifier(modifier) => Some(*modifier),
            DamagePart::FeatBonus(bonus) => Some(i32::from(*bonus)),
            DamagePart::Base(_) | DamagePart::Heightened(_) => None,
        }
    }
}

impl fmt::Display for DamagePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamagePart::Base(formula) | DamagePart::Heightened(formula) => write!(f, "{}", formula),
            DamagePart::AbilityModifier(modifier) => write!(f, "{}", modifier),
            DamagePart::FeatBonus(bonus) => write!(f, "{}", bonus),
        }
    }
}

/// Ordered damage contributions for a single cast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DamageParts(Vec<DamagePart>);

impl DamageParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: DamagePart) {
        self.0.push(part);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DamagePart> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DamagePart] {
        &self.0
    }

    /// Render as a single roll formula, e.g. "6d6 + 4 + 2d6".
    pub fn formula(&self) -> String {
        let mut formula = String::new();
        for part in &self.0 {
            match part.as_number() {
                Some(n) if n < 0 => {
                    if formula.is_empty() {
                        formula.push_str(&n.to_string());
                    } else {
                        formula.push_str(&format!(" - {}", n.unsigned_abs()));
                    }
                }
                _ => {
                    if !formula.is_empty() {
                        formula.push_str(" + ");
                    }
                    formula.push_str(&part.to_string());
                }
            }
        }
        formula
    }
}

impl Extend<DamagePart> for DamageParts {
    fn extend<I: IntoIterator<Item = DamagePart>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for DamageParts {
    type Item = DamagePart;
    type IntoIter = std::vec::IntoIter<DamagePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DamageParts {
    type Item = &'a DamagePart;
    type IntoIter = std::slice::Iter<'a, DamagePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DamageParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula())
    }
}
