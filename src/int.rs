/***************************************************************************************************
 * Copyright (c) 2023-2025 Qualcomm Innovation Center, Inc. All rights reserved.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of this software
 * and associated documentation files (the “Software”), to deal in the Software without
 * restriction, including without limitation the rights to use, copy, modify, merge, publish,
 * distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice (including the next
 * paragraph) shall be included in all copies or substantial portions of the
 * Software.
 *
 * THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING
 * BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
 * NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
 * DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 **************************************************************************************************/
/***************************************************************************************************
 * tps_streamcbor integer quantities
 *
 * CBOR argument values are unsigned 64-bit quantities, and CBOR negative integers are encoded
 * as the quantity n standing for -1 - n. U64 keeps arguments apart from platform integers so
 * that a signed value can never slip in unannounced; Int restores the mathematical ordering
 * across the two integer major types.
 **************************************************************************************************/
use crate::ast::Value;
use crate::error::ParseError;

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// Unsigned 64-bit quantity used for CBOR arguments: integer values, string lengths,
/// container counts, tag numbers and float bit patterns.
///
/// `U64` is only constructible from unsigned primitives. Signed values must go through
/// [`Int`], which makes the `-1 - n` convention of major type 1 explicit instead of letting
/// a cast decide.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct U64(u64);

impl U64 {
    /// Returns the underlying quantity.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for U64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/***************************************************************************************************
 * Standard Trait Implementations: unsigned primitive to U64. Always succeeds
 **************************************************************************************************/

/// Convert a u8 into U64
impl From<u8> for U64 {
    #[inline(always)]
    fn from(v: u8) -> Self {
        U64(v as u64)
    }
}

/// Convert a u16 into U64
impl From<u16> for U64 {
    #[inline(always)]
    fn from(v: u16) -> Self {
        U64(v as u64)
    }
}

/// Convert a u32 into U64
impl From<u32> for U64 {
    #[inline(always)]
    fn from(v: u32) -> Self {
        U64(v as u64)
    }
}

/// Convert a u64 into U64
impl From<u64> for U64 {
    #[inline(always)]
    fn from(v: u64) -> Self {
        U64(v)
    }
}

/// Convert a usize into U64. CBOR arguments are at least as wide as any supported platform's
/// pointer size.
impl From<usize> for U64 {
    #[inline(always)]
    fn from(v: usize) -> Self {
        U64(v as u64)
    }
}

/// Convert a U64 back into the primitive quantity
impl From<U64> for u64 {
    #[inline(always)]
    fn from(v: U64) -> Self {
        v.0
    }
}

/// Widen a U64 into a u128
impl From<U64> for u128 {
    #[inline(always)]
    fn from(v: U64) -> Self {
        v.0 as u128
    }
}

/// Compare a U64 against a primitive quantity
impl PartialEq<u64> for U64 {
    #[inline(always)]
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

/// Compare a primitive quantity against a U64
impl PartialEq<U64> for u64 {
    #[inline(always)]
    fn eq(&self, other: &U64) -> bool {
        *self == other.0
    }
}

/***************************************************************************************************
 * Int: both integer major types under the mathematical ordering
 **************************************************************************************************/

/// A CBOR integer of either major type.
///
/// `Nint(n)` stands for the integer `-1 - n`, so the covered interval is
/// `[-2^64, 2^64 - 1]`. Comparison follows the represented integer: every `Nint` is below
/// every `Uint`, and within `Nint` a larger stored quantity is a smaller integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Int {
    /// A non-negative integer.
    Uint(U64),
    /// A negative integer `-1 - n`.
    Nint(U64),
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Int::Uint(a), Int::Uint(b)) => a.cmp(b),
            (Int::Uint(_), Int::Nint(_)) => Ordering::Greater,
            (Int::Nint(_), Int::Uint(_)) => Ordering::Less,
            // The stored quantity grows as the represented integer shrinks.
            (Int::Nint(a), Int::Nint(b)) => b.cmp(a),
        }
    }
}

impl PartialOrd for Int {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i128::from(*self))
    }
}

/// Convert a u64 into Int
impl From<u64> for Int {
    #[inline(always)]
    fn from(v: u64) -> Self {
        Int::Uint(U64(v))
    }
}

/// Convert a u32 into Int
impl From<u32> for Int {
    #[inline(always)]
    fn from(v: u32) -> Self {
        Int::Uint(U64(v as u64))
    }
}

/// Convert an i32 into Int
impl From<i32> for Int {
    #[inline]
    fn from(v: i32) -> Self {
        Int::from(v as i64)
    }
}

/// Convert an i64 into Int
impl From<i64> for Int {
    #[inline]
    fn from(v: i64) -> Self {
        if v < 0 {
            Int::Nint(U64((-1 - v) as u64))
        } else {
            Int::Uint(U64(v as u64))
        }
    }
}

/// Widen an Int into the represented integer. Always succeeds: the covered interval fits
/// comfortably in 128 bits.
impl From<Int> for i128 {
    #[inline]
    fn from(v: Int) -> Self {
        match v {
            Int::Uint(n) => n.0 as i128,
            Int::Nint(n) => -1 - (n.0 as i128),
        }
    }
}

/// Attempt to view an integer-variant value as an Int
impl TryFrom<&Value> for Int {
    type Error = ParseError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::UInt(n) => Ok(Int::Uint(*n)),
            Value::NInt(n) => Ok(Int::Nint(*n)),
            _ => Err(ParseError::Invalid),
        }
    }
}
