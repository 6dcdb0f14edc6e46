//! Money value object stored as integer minor units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// An amount of money in minor units (cents / paise).
///
/// Stored as `i64` so sums over the ledger are exact. Returns may be
/// negative; invested amounts are validated positive at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates money from minor units.
    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Converts a major-unit amount (e.g. `1250.75`), rounding to the nearest
    /// minor unit. Rejects NaN and infinity.
    pub fn from_major(field: &str, major: f64) -> Result<Self, ValidationError> {
        if !major.is_finite() {
            return Err(ValidationError::not_finite(field));
        }
        let minor = (major * 100.0).round();
        if minor.abs() > i64::MAX as f64 {
            return Err(ValidationError::out_of_range(
                field,
                i64::MIN as f64 / 100.0,
                i64::MAX as f64 / 100.0,
                major,
            ));
        }
        Ok(Self(minor as i64))
    }

    /// Like [`Money::from_major`] but also requires a strictly positive amount.
    pub fn positive_from_major(field: &str, major: f64) -> Result<Self, ValidationError> {
        let money = Self::from_major(field, major)?;
        if money.0 <= 0 {
            return Err(ValidationError::invalid_format(field, "must be greater than zero"));
        }
        Ok(money)
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the amount in major units.
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_major())
    }
}
