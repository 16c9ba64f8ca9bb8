//! Fixed-width integer cells with wraparound compound arithmetic.
//!
//! An [`Integer`] remembers the width and signedness of the Rust type it was
//! built from (or that the parser inferred for a literal) and makes compound
//! arithmetic wrap exactly like that native type: two's-complement for signed
//! widths, modulo 2^n for unsigned ones. The backing store is always a
//! width-masked `u64` bit pattern.
//!
//! ```rust
//! use dynon_core::Integer;
//!
//! let mut n = Integer::from(127i8);
//! n += 2;
//! assert_eq!(n.as_i64(), -127);
//!
//! let mut m = Integer::from(250u8);
//! m += 10;
//! assert_eq!(m.as_u64(), 4);
//! ```

use std::fmt;
use std::ops::{AddAssign, MulAssign, SubAssign};

use crate::error::{DynonError, Result};

/// Declared storage width of an [`Integer`], in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    /// Number of bits this width spans (8, 16, 32, or 64).
    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    fn mask(self) -> u64 {
        match self {
            Width::W8 => 0xFF,
            Width::W16 => 0xFFFF,
            Width::W32 => 0xFFFF_FFFF,
            Width::W64 => u64::MAX,
        }
    }
}

/// An integer value carrying its declared width and signedness.
///
/// `bits` holds the width-masked two's-complement pattern, so an `i8` of
/// `-1` and a `u8` of `255` share the pattern `0xFF` but render and compare
/// according to their own signedness. Equality is mathematical: two
/// integers are equal when they denote the same number, regardless of
/// declared width.
#[derive(Debug, Clone, Copy)]
pub struct Integer {
    bits: u64,
    width: Width,
    signed: bool,
}

impl Integer {
    fn new(bits: u64, width: Width, signed: bool) -> Self {
        Integer {
            bits: bits & width.mask(),
            width,
            signed,
        }
    }

    /// Declared width captured at construction.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Whether the declared type was signed.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// The stored bit pattern, zero-extended to 64 bits.
    pub fn as_u64(&self) -> u64 {
        self.bits
    }

    /// The denoted value as an `i64`: sign-extended from the declared width
    /// when signed, the raw bit pattern otherwise.
    pub fn as_i64(&self) -> i64 {
        if self.signed {
            match self.width {
                Width::W8 => self.bits as u8 as i8 as i64,
                Width::W16 => self.bits as u16 as i16 as i64,
                Width::W32 => self.bits as u32 as i32 as i64,
                Width::W64 => self.bits as i64,
            }
        } else {
            self.bits as i64
        }
    }

    /// The denoted value as an `f64` (used by numeric coercion).
    pub fn to_f64(&self) -> f64 {
        if self.signed {
            self.as_i64() as f64
        } else {
            self.as_u64() as f64
        }
    }

    /// Compound division in the declared signedness domain. Truncating, and
    /// wrapping at the width boundary (`i64::MIN / -1` wraps rather than
    /// panicking). A zero divisor fails with [`DynonError::DivideByZero`]
    /// and leaves the value unchanged.
    pub fn try_div_assign(&mut self, rhs: i64) -> Result<()> {
        if rhs == 0 {
            return Err(DynonError::DivideByZero);
        }
        let quotient = if self.signed {
            self.as_i64().wrapping_div(rhs) as u64
        } else {
            // The divisor is reinterpreted as an unsigned pattern, matching
            // what a native unsigned division by a cast operand does.
            self.bits / (rhs as u64)
        };
        self.bits = quotient & self.width.mask();
        Ok(())
    }

    // Equality goes through i128 so every declared type, u64 included,
    // compares by denoted value.
    fn denoted(&self) -> i128 {
        if self.signed {
            self.as_i64() as i128
        } else {
            self.bits as i128
        }
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.denoted() == other.denoted()
    }
}

impl Eq for Integer {}

/// Renders the denoted value in decimal. Unsigned integers never render
/// with a sign, whatever their bit pattern.
impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signed {
            write!(f, "{}", self.as_i64())
        } else {
            write!(f, "{}", self.as_u64())
        }
    }
}

// Wrapping add/sub/mul need no sign distinction: (a op b) mod 2^n depends
// only on the operands' low n bits, so a 64-bit wrapping op plus a mask is
// exact for every width and signedness.

impl AddAssign<i64> for Integer {
    fn add_assign(&mut self, rhs: i64) {
        self.bits = self.bits.wrapping_add(rhs as u64) & self.width.mask();
    }
}

impl SubAssign<i64> for Integer {
    fn sub_assign(&mut self, rhs: i64) {
        self.bits = self.bits.wrapping_sub(rhs as u64) & self.width.mask();
    }
}

impl MulAssign<i64> for Integer {
    fn mul_assign(&mut self, rhs: i64) {
        self.bits = self.bits.wrapping_mul(rhs as u64) & self.width.mask();
    }
}

impl From<i8> for Integer {
    fn from(v: i8) -> Self {
        Integer::new(v as u8 as u64, Width::W8, true)
    }
}

impl From<u8> for Integer {
    fn from(v: u8) -> Self {
        Integer::new(v as u64, Width::W8, false)
    }
}

impl From<i16> for Integer {
    fn from(v: i16) -> Self {
        Integer::new(v as u16 as u64, Width::W16, true)
    }
}

impl From<u16> for Integer {
    fn from(v: u16) -> Self {
        Integer::new(v as u64, Width::W16, false)
    }
}

impl From<i32> for Integer {
    fn from(v: i32) -> Self {
        Integer::new(v as u32 as u64, Width::W32, true)
    }
}

impl From<u32> for Integer {
    fn from(v: u32) -> Self {
        Integer::new(v as u64, Width::W32, false)
    }
}

impl From<i64> for Integer {
    fn from(v: i64) -> Self {
        Integer::new(v as u64, Width::W64, true)
    }
}

impl From<u64> for Integer {
    fn from(v: u64) -> Self {
        Integer::new(v, Width::W64, false)
    }
}
