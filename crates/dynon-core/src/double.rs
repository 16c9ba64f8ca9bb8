//! Floating-point cells with an optional display precision.
//!
//! A [`Double`] stores an `f64` plus an optional number of digits to show
//! after the decimal point. Precision affects only how the value renders
//! (and therefore serializes); the stored value and all arithmetic stay
//! full-precision IEEE 754.
//!
//! ```rust
//! use dynon_core::Double;
//!
//! let mut d = Double::new(8.055);
//! d.set_precision(2);
//! // 8.055 stores as 8.05499999..., and rendering rounds the stored
//! // binary value, not the source literal.
//! assert_eq!(d.to_string(), "8.05");
//! ```

use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// A double-precision float with an optional display precision.
///
/// Equality compares stored values only; two doubles with different display
/// precisions but the same value are equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Double {
    value: f64,
    precision: Option<u8>,
}

impl Double {
    /// A double with no display precision (shortest round-trip rendering).
    pub fn new(value: f64) -> Self {
        Double {
            value,
            precision: None,
        }
    }

    /// The stored value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the stored value, keeping the display precision.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Digits rendered after the decimal point, if set.
    pub fn precision(&self) -> Option<u8> {
        self.precision
    }

    /// Fix how many digits render after the decimal point.
    pub fn set_precision(&mut self, digits: u8) {
        self.precision = Some(digits);
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Renders with the fixed precision when one is set (round-nearest, ties to
/// even, on the stored binary value). Otherwise uses the shortest form that
/// re-parses to the same value; that form always carries a `.` or an
/// exponent (`3.0`, `1.7976931348623157e308`), so serialized doubles
/// re-parse as doubles rather than integers.
impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Some(digits) => write!(f, "{:.prec$}", self.value, prec = digits as usize),
            None => write!(f, "{:?}", self.value),
        }
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Double::new(value)
    }
}

impl AddAssign<f64> for Double {
    fn add_assign(&mut self, rhs: f64) {
        self.value += rhs;
    }
}

impl SubAssign<f64> for Double {
    fn sub_assign(&mut self, rhs: f64) {
        self.value -= rhs;
    }
}

impl MulAssign<f64> for Double {
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl DivAssign<f64> for Double {
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}
