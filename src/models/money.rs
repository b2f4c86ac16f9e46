//! Money type for expense and budget amounts
//!
//! Amounts are held as `rust_decimal::Decimal`, keeping every digit that was
//! typed. Rounding to cents happens only when an amount is formatted. Parsing
//! accepts the loose forms a number field produces ("42.5", ".5", "12.",
//! "-3", "1e3", "$10.00").
//!
//! Arithmetic saturates at the limits of `Decimal` instead of panicking.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Largest power-of-ten exponent worth applying; beyond it every nonzero
/// value overflows or rounds to zero
const MAX_EXPONENT: u32 = 64;

/// A monetary amount in currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Error returned when text cannot be read as an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount: {0}")]
    InvalidFormat(String),
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount in currency units, for charts
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Whether `self > limit * numerator / denominator`
    ///
    /// Fractions such as 1/2 and 4/5 have exact decimal forms, so the
    /// comparison uses every digit of both amounts. A zero limit makes every
    /// positive amount exceed it.
    pub fn exceeds_fraction_of(&self, limit: Money, numerator: i64, denominator: i64) -> bool {
        let Some(share) = Decimal::from(numerator).checked_div(Decimal::from(denominator)) else {
            return false;
        };
        match limit.0.checked_mul(share) {
            Some(threshold) => self.0 > threshold,
            // Out of range on the negative side means everything exceeds it
            None => limit.0.is_sign_negative() != share.is_sign_negative(),
        }
    }

    /// Share of `whole` as a percentage, 0 when `whole` is zero
    pub fn percent_of(&self, whole: Money) -> f64 {
        self.0
            .checked_div(whole.0)
            .and_then(|ratio| ratio.to_f64())
            .map_or(0.0, |ratio| ratio * 100.0)
    }

    /// Parse an amount such as "42.5", "$1,200.00", "-3" or "2.5e3"
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let text: String = rest.chars().filter(|c| *c != ',').collect();

        let (mantissa, exponent) = match text.split_once(|c| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => {
                (mantissa, exponent.parse::<i32>().map_err(|_| invalid())?)
            }
            None => (text.as_str(), 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !digits(whole) || !digits(fraction) {
            return Err(invalid());
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let normalized = if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, fraction)
        };
        let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;
        let value = scale_by_power_of_ten(value, exponent).ok_or_else(invalid)?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with the configured currency symbol, rounded to cents, e.g. "-$3.05"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}{}{:.2}", sign, symbol, rounded.abs())
    }

    /// Plain decimal form without a symbol, e.g. "42.50"
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

fn scale_by_power_of_ten(value: Decimal, exponent: i32) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }
    let mut result = value;
    for _ in 0..exponent.unsigned_abs().min(MAX_EXPONENT) {
        result = if exponent > 0 {
            result.checked_mul(Decimal::TEN)?
        } else {
            result.checked_div(Decimal::TEN)?
        };
    }
    Some(result)
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
