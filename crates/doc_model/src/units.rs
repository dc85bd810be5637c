//! Length units
//!
//! WordprocessingML measures page geometry, row heights and column widths in
//! twentieths of a point. Keeping lengths as integer twips from the start
//! means widths add up exactly instead of accumulating float error.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Twips per centimetre (the conversion Word itself rounds to)
pub const TWIPS_PER_CM: f32 = 567.0;

/// A length in twips (1/1440 inch, 1/20 point)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Twips(pub u32);

impl Twips {
    pub const ZERO: Twips = Twips(0);

    /// Convert centimetres to twips, rounding to the nearest twip
    pub fn from_cm(cm: f32) -> Self {
        Twips((cm * TWIPS_PER_CM).round().max(0.0) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn saturating_sub(self, other: Twips) -> Twips {
        Twips(self.0.saturating_sub(other.0))
    }
}

impl Add for Twips {
    type Output = Twips;

    fn add(self, rhs: Twips) -> Twips {
        Twips(self.0 + rhs.0)
    }
}

impl Sum for Twips {
    fn sum<I: Iterator<Item = Twips>>(iter: I) -> Twips {
        iter.fold(Twips::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Twips> for Twips {
    fn sum<I: Iterator<Item = &'a Twips>>(iter: I) -> Twips {
        iter.copied().sum()
    }
}
