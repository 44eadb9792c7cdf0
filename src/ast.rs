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
 * tps_streamcbor CBOR value tree
 *
 * The owned representation of a decoded CBOR data item. Containers own their elements, a tag
 * owns its content through one heap indirection, and nothing borrows from the input buffer.
 **************************************************************************************************/
use crate::constants::SIMPLE_UNDEFINED;
use crate::int::{Int, U64};

use alloc::boxed::Box;
use alloc::vec::Vec;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::mem;

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/// The data type for decoded CBOR items.
///
/// Representations follow the wire, not a host-language reading of it:
///
/// - Positive and negative integers are kept as the encoded quantity, with the variant
///   distinguishing major type 0 from major type 1 (`NInt(n)` stands for `-1 - n`).
/// - `Tstr` keeps the payload bytes verbatim; UTF-8 validation is the caller's decision.
/// - `Map` keeps entries in decode order and does not deduplicate keys.
/// - `Float` keeps the gathered bit pattern; the on-wire width is not recorded.
/// - `Simple` covers the whole 8-bit simple value space. Items decoded from the wire carry
///   the five-bit additional information value (`undefined` arrives as `Simple(23)`); the
///   crate's own well-known constants, including the default value `Simple(0xf7)`, use the
///   encoded-byte convention of [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Non-negative integer.
    UInt(U64),
    /// Negative integer `-1 - n`.
    NInt(U64),
    /// Byte string.
    Bstr(Vec<u8>),
    /// Text string; bytes as encoded, not validated.
    Tstr(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Ordered sequence of key/value entries, duplicates permitted.
    Map(Vec<(Value, Value)>),
    /// Tag number and the single value it applies to.
    Tag(U64, Box<Value>),
    /// Simple value.
    Simple(u8),
    /// Floating-point bit pattern.
    Float(U64),
}

/// A default-constructed value is the CBOR `undefined` simple value.
impl Default for Value {
    #[inline]
    fn default() -> Self {
        Value::Simple(SIMPLE_UNDEFINED)
    }
}

/***************************************************************************************************
 * Constructors
 **************************************************************************************************/

impl Value {
    /// Constructs a non-negative integer value.
    #[inline]
    pub fn uint(n: impl Into<U64>) -> Value {
        Value::UInt(n.into())
    }

    /// Constructs the negative integer value `-1 - n` from the encoded quantity `n`.
    #[inline]
    pub fn nint(n: impl Into<U64>) -> Value {
        Value::NInt(n.into())
    }

    /// Constructs a byte string value.
    #[inline]
    pub fn byte_str(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Bstr(bytes.into())
    }

    /// Constructs a text string value from encoded bytes.
    #[inline]
    pub fn text_str(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Tstr(bytes.into())
    }

    /// Constructs a tagged value.
    #[inline]
    pub fn tag(number: impl Into<U64>, content: Value) -> Value {
        Value::Tag(number.into(), Box::new(content))
    }

    /// Constructs a floating-point value from its bit pattern.
    #[inline]
    pub fn float(bits: impl Into<U64>) -> Value {
        Value::Float(bits.into())
    }
}

/***************************************************************************************************
 * Inspectors
 **************************************************************************************************/

impl Value {
    /// Returns `true` if the value is a non-negative integer.
    #[inline]
    pub fn is_uint(&self) -> bool {
        matches!(self, Value::UInt(_))
    }

    /// Returns `true` if the value is a negative integer.
    #[inline]
    pub fn is_nint(&self) -> bool {
        matches!(self, Value::NInt(_))
    }

    /// Returns `true` if the value is a byte string.
    #[inline]
    pub fn is_bstr(&self) -> bool {
        matches!(self, Value::Bstr(_))
    }

    /// Returns `true` if the value is a text string.
    #[inline]
    pub fn is_tstr(&self) -> bool {
        matches!(self, Value::Tstr(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a map.
    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is tagged.
    #[inline]
    pub fn is_tag(&self) -> bool {
        matches!(self, Value::Tag(_, _))
    }

    /// Returns `true` if the value is a simple value.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(self, Value::Simple(_))
    }

    /// Returns `true` if the value is a floating-point bit pattern.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

/***************************************************************************************************
 * Accessors: by value, by reference, by move
 *
 * The by-value accessors clone; the move accessors exchange the content against the default
 * value (`undefined`) and report whether anything was moved, so repeating a move is a no-op.
 **************************************************************************************************/

impl Value {
    /// If the value is a non-negative integer, returns the quantity.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_uint(&self) -> Option<U64> {
        if let Value::UInt(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// If the value is a negative integer `-1 - n`, returns the encoded quantity `n`.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_nint(&self) -> Option<U64> {
        if let Value::NInt(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// If the value is an integer of either sign, returns it under the mathematical
    /// ordering of [`Int`].
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_int(&self) -> Option<Int> {
        Int::try_from(self).ok()
    }

    /// If the value is a byte string, returns a copy of it.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_bstr(&self) -> Option<Vec<u8>> {
        if let Value::Bstr(bytes) = self {
            Some(bytes.clone())
        } else {
            None
        }
    }

    /// If the value is a byte string, returns a view of it.
    #[inline]
    pub fn as_bstr_ref(&self) -> Option<&[u8]> {
        if let Value::Bstr(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }

    /// If the value is a byte string, moves it into `target` and leaves `undefined`
    /// behind. Returns `false`, and touches nothing, for any other variant.
    #[cfg_attr(feature = "trace", trace)]
    pub fn move_bstr(&mut self, target: &mut Vec<u8>) -> bool {
        if let Value::Bstr(bytes) = self {
            *target = mem::take(bytes);
            *self = Value::default();
            true
        } else {
            false
        }
    }

    /// If the value is a text string, returns a copy of its bytes.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_tstr(&self) -> Option<Vec<u8>> {
        if let Value::Tstr(bytes) = self {
            Some(bytes.clone())
        } else {
            None
        }
    }

    /// If the value is a text string, returns a view of its bytes.
    #[inline]
    pub fn as_tstr_ref(&self) -> Option<&[u8]> {
        if let Value::Tstr(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }

    /// If the value is a text string, moves its bytes into `target` and leaves
    /// `undefined` behind. Returns `false`, and touches nothing, for any other variant.
    #[cfg_attr(feature = "trace", trace)]
    pub fn move_tstr(&mut self, target: &mut Vec<u8>) -> bool {
        if let Value::Tstr(bytes) = self {
            *target = mem::take(bytes);
            *self = Value::default();
            true
        } else {
            false
        }
    }

    /// If the value is an array, returns a copy of its elements.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_array(&self) -> Option<Vec<Value>> {
        if let Value::Array(elements) = self {
            Some(elements.clone())
        } else {
            None
        }
    }

    /// If the value is an array, returns a view of its elements.
    #[inline]
    pub fn as_array_ref(&self) -> Option<&[Value]> {
        if let Value::Array(elements) = self {
            Some(elements)
        } else {
            None
        }
    }

    /// If the value is an array, moves its elements into `target` and leaves
    /// `undefined` behind. Returns `false`, and touches nothing, for any other variant.
    #[cfg_attr(feature = "trace", trace)]
    pub fn move_array(&mut self, target: &mut Vec<Value>) -> bool {
        if let Value::Array(elements) = self {
            *target = mem::take(elements);
            *self = Value::default();
            true
        } else {
            false
        }
    }

    /// If the value is a map, returns a copy of its entries.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_map(&self) -> Option<Vec<(Value, Value)>> {
        if let Value::Map(entries) = self {
            Some(entries.clone())
        } else {
            None
        }
    }

    /// If the value is a map, returns a view of its entries.
    #[inline]
    pub fn as_map_ref(&self) -> Option<&[(Value, Value)]> {
        if let Value::Map(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// If the value is a map, moves its entries into `target` and leaves `undefined`
    /// behind. Returns `false`, and touches nothing, for any other variant.
    #[cfg_attr(feature = "trace", trace)]
    pub fn move_map(&mut self, target: &mut Vec<(Value, Value)>) -> bool {
        if let Value::Map(entries) = self {
            *target = mem::take(entries);
            *self = Value::default();
            true
        } else {
            false
        }
    }

    /// If the value is tagged, returns a copy of the tag number and content.
    #[cfg_attr(feature = "trace", trace)]
    pub fn as_tag(&self) -> Option<(U64, Value)> {
        if let Value::Tag(number, content) = self {
            Some((*number, (**content).clone()))
        } else {
            None
        }
    }

    /// If the value is tagged, returns the tag number and a view of the content.
    #[inline]
    pub fn as_tag_ref(&self) -> Option<(U64, &Value)> {
        if let Value::Tag(number, content) = self {
            Some((*number, content))
        } else {
            None
        }
    }

    /// If the value is tagged, moves the tag number and content into `target` and leaves
    /// `undefined` behind. Returns `false`, and touches nothing, for any other variant.
    #[cfg_attr(feature = "trace", trace)]
    pub fn move_tag(&mut self, target: &mut (U64, Box<Value>)) -> bool {
        if let Value::Tag(_, _) = self {
            if let Value::Tag(number, content) = mem::take(self) {
                *target = (number, content);
            }
            true
        } else {
            false
        }
    }

    /// If the value is a simple value, returns it.
    #[inline]
    pub fn as_simple(&self) -> Option<u8> {
        if let Value::Simple(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// If the value is a floating-point bit pattern, returns it.
    #[inline]
    pub fn as_float(&self) -> Option<U64> {
        if let Value::Float(bits) = self {
            Some(*bits)
        } else {
            None
        }
    }
}

/// Ordering is defined across the integer variants only, and follows the represented
/// integer: every `NInt` is below every `UInt`, and within `NInt` a larger encoded
/// quantity is a smaller integer. All other pairs are unordered unless equal.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (Int::try_from(self), Int::try_from(other)) {
            (Ok(a), Ok(b)) => Some(a.cmp(&b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

/***************************************************************************************************
 * Standard Trait Implementations: From value to CBOR item. Always succeeds
 **************************************************************************************************/

/// Convert a u8 into a Value
impl From<u8> for Value {
    #[inline(always)]
    fn from(v: u8) -> Self {
        Value::UInt((v as u64).into())
    }
}

/// Convert a u16 into a Value
impl From<u16> for Value {
    #[inline(always)]
    fn from(v: u16) -> Self {
        Value::UInt((v as u64).into())
    }
}

/// Convert a u32 into a Value
impl From<u32> for Value {
    #[inline(always)]
    fn from(v: u32) -> Self {
        Value::UInt((v as u64).into())
    }
}

/// Convert a u64 into a Value
impl From<u64> for Value {
    #[inline(always)]
    fn from(v: u64) -> Self {
        Value::UInt(v.into())
    }
}

/// Convert an i32 into a Value of the appropriate integer major type
impl From<i32> for Value {
    #[inline]
    fn from(v: i32) -> Self {
        Value::from(v as i64)
    }
}

/// Convert an i64 into a Value of the appropriate integer major type
impl From<i64> for Value {
    #[inline]
    fn from(v: i64) -> Self {
        if v < 0 {
            Value::NInt(((-1 - v) as u64).into())
        } else {
            Value::UInt((v as u64).into())
        }
    }
}

/// Convert an Int into a Value of the appropriate integer major type
impl From<Int> for Value {
    #[inline]
    fn from(v: Int) -> Self {
        match v {
            Int::Uint(n) => Value::UInt(n),
            Int::Nint(n) => Value::NInt(n),
        }
    }
}
