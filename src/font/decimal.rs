//! Exact decimal multiplication.
//!
//! Pixel values are rescaled without going through `f64`, so `12.34 * 2`
//! is `24.68` and `0.1 * 2` is `0.2`.

use std::fmt;
use std::str::FromStr;

use crate::error::{IconfontError, Result};

/// A base-10 number stored as `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

impl Decimal {
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Exact product; the scale of the result is the sum of both scales.
    pub fn checked_mul(self, other: Decimal) -> Option<Decimal> {
        Some(Decimal {
            mantissa: self.mantissa.checked_mul(other.mantissa)?,
            scale: self.scale.checked_add(other.scale)?,
        })
    }

    /// Drop trailing fractional zeros (`24.50` → `24.5`, `2.0` → `2`).
    pub fn normalized(mut self) -> Self {
        while self.scale > 0 && self.mantissa % 10 == 0 {
            self.mantissa /= 10;
            self.scale -= 1;
        }
        self
    }
}

impl FromStr for Decimal {
    type Err = IconfontError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || IconfontError::Decimal {
            value: s.to_string(),
        };

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{}{}", whole, fraction);
        let magnitude: i128 = digits.parse().map_err(|_| invalid())?;
        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;

        Ok(Decimal {
            mantissa: if negative { -magnitude } else { magnitude },
            scale,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, whole, fraction)
    }
}

/// Multiply two decimal strings exactly.
///
/// The result carries no trailing fractional zeros, so it reads the same
/// as a hand-written CSS value.
pub fn scale(value: &str, factor: &str) -> Result<String> {
    let a: Decimal = value.parse()?;
    let b: Decimal = factor.parse()?;

    let product = a.checked_mul(b).ok_or_else(|| IconfontError::Decimal {
        value: format!("{} * {}", value, factor),
    })?;

    Ok(product.normalized().to_string())
}
