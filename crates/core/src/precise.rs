//! Precision arithmetic
//!
//! Operands are scaled to integers using their decimal-place counts, the
//! operation runs on integers, and the result is rescaled once. A single
//! division of two exactly representable integers is correctly rounded, so
//! `precise_add(0.1, 0.2)` lands on the same f64 as the literal `0.3`.
//!
//! Operands that cannot be scaled exactly (non-finite, or more than 53 bits
//! once scaled) fall back to plain floating-point arithmetic.

use tracing::trace;

/// Largest integer magnitude an f64 holds exactly
const MAX_EXACT: i128 = 1 << 53;

/// 10^22 is the largest power of ten an f64 holds exactly
const MAX_SCALE: u32 = 22;

/// A finite number as `digits / 10^scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scaled {
    digits: i128,
    scale: u32,
}

impl Scaled {
    fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }

        // Display for f64 is the shortest round-trip form and never uses an exponent
        let text = x.to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let digits: i128 = format!("{}{}", int_part, frac_part).parse().ok()?;

        if digits.abs() > MAX_EXACT {
            return None;
        }

        Some(Self {
            digits,
            scale: frac_part.len() as u32,
        })
    }

    /// Digits expressed at a larger scale
    fn at_scale(self, scale: u32) -> Option<i128> {
        self.digits.checked_mul(pow10(scale.checked_sub(self.scale)?)?)
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

/// `numerator / 10^scale`, if both sides are exact in f64
fn rescale(numerator: i128, scale: u32) -> Option<f64> {
    if numerator.abs() > MAX_EXACT || scale > MAX_SCALE {
        return None;
    }
    Some(numerator as f64 / pow10(scale)? as f64)
}

/// Number of digits after the decimal point in the shortest form of `x`
pub fn decimal_places(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    x.to_string()
        .split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0)
}

fn scaled_sum(a: Scaled, b: Scaled) -> Option<f64> {
    let scale = a.scale.max(b.scale);
    let sum = a.at_scale(scale)?.checked_add(b.at_scale(scale)?)?;
    rescale(sum, scale)
}

/// Add without binary floating-point residue
pub fn precise_add(a: f64, b: f64) -> f64 {
    Scaled::from_f64(a)
        .zip(Scaled::from_f64(b))
        .and_then(|(a, b)| scaled_sum(a, b))
        .unwrap_or_else(|| {
            trace!("precise_add({}, {}) falling back to float arithmetic", a, b);
            a + b
        })
}

/// Subtract without binary floating-point residue
pub fn precise_sub(a: f64, b: f64) -> f64 {
    Scaled::from_f64(a)
        .zip(Scaled::from_f64(b))
        .and_then(|(a, b)| {
            let negated = Scaled {
                digits: -b.digits,
                scale: b.scale,
            };
            scaled_sum(a, negated)
        })
        .unwrap_or_else(|| {
            trace!("precise_sub({}, {}) falling back to float arithmetic", a, b);
            a - b
        })
}

/// Multiply without binary floating-point residue
pub fn precise_mul(a: f64, b: f64) -> f64 {
    Scaled::from_f64(a)
        .zip(Scaled::from_f64(b))
        .and_then(|(a, b)| rescale(a.digits.checked_mul(b.digits)?, a.scale + b.scale))
        .unwrap_or_else(|| {
            trace!("precise_mul({}, {}) falling back to float arithmetic", a, b);
            a * b
        })
}

/// Divide without binary floating-point residue
///
/// A zero divisor is not an error: the result is an infinity or NaN,
/// exactly as with `a / b`.
pub fn precise_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a / b;
    }

    Scaled::from_f64(a)
        .zip(Scaled::from_f64(b))
        .and_then(|(a, b)| {
            // (a.digits / 10^a.scale) / (b.digits / 10^b.scale)
            let numerator = a.digits.checked_mul(pow10(b.scale)?)?;
            let denominator = b.digits.checked_mul(pow10(a.scale)?)?;
            if numerator.abs() > MAX_EXACT || denominator.abs() > MAX_EXACT {
                return None;
            }
            Some(numerator as f64 / denominator as f64)
        })
        .unwrap_or_else(|| {
            trace!("precise_div({}, {}) falling back to float arithmetic", a, b);
            a / b
        })
}
