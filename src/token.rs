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
 * tps_streamcbor token alphabet
 *
 * Tokens are the terminal symbols produced by the scanner and consumed by the parser. A token
 * corresponds to one complete CBOR head together with its argument and, for definite-length
 * strings, its payload.
 **************************************************************************************************/
use crate::int::U64;

use alloc::vec::Vec;

/// Discriminant-only view of the token alphabet. The scanner records the kind of the token it
/// is gathering, and parse errors report the kinds that would have been acceptable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// A non-negative integer.
    Uint,
    /// A negative integer.
    Nint,
    /// Opens a byte string of indefinite length.
    BstrX,
    /// A byte string, definite length.
    Bstr,
    /// Opens a text string of indefinite length.
    TstrX,
    /// A text string, definite length.
    Tstr,
    /// Opens an array of indefinite length.
    ArrayX,
    /// An array header, definite length.
    Array,
    /// Opens a map of indefinite length.
    MapX,
    /// A map header, definite length.
    Map,
    /// A tag number.
    Tag,
    /// A simple value.
    Simple,
    /// A floating-point bit pattern.
    Float,
    /// Terminates an indefinite-length construct.
    Break,
}

/// A terminal symbol of the CBOR grammar, with its payload.
///
/// String payloads are materialised byte vectors; the scanner has already gathered them in
/// full. Text string bytes are carried verbatim and are not checked for UTF-8 validity.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// A non-negative integer value.
    Uint(U64),
    /// A negative integer value `-1 - n`.
    Nint(U64),
    /// Opens a byte string of indefinite length.
    BstrX,
    /// A byte string chunk or item.
    Bstr(Vec<u8>),
    /// Opens a text string of indefinite length.
    TstrX,
    /// A text string chunk or item.
    Tstr(Vec<u8>),
    /// Opens an array of indefinite length.
    ArrayX,
    /// An array header carrying the element count.
    Array(U64),
    /// Opens a map of indefinite length.
    MapX,
    /// A map header carrying the pair count.
    Map(U64),
    /// A tag number; exactly one value follows.
    Tag(U64),
    /// A simple value.
    Simple(u8),
    /// A floating-point bit pattern. The on-wire width (2, 4 or 8 bytes) is implicit in the
    /// number of argument bytes the scanner gathered and is not recorded here.
    Float(U64),
    /// Terminates an indefinite-length construct.
    Break,
}

impl Token {
    /// Returns the kind of a token.
    pub fn kind(&self) -> Kind {
        match self {
            Token::Uint(_) => Kind::Uint,
            Token::Nint(_) => Kind::Nint,
            Token::BstrX => Kind::BstrX,
            Token::Bstr(_) => Kind::Bstr,
            Token::TstrX => Kind::TstrX,
            Token::Tstr(_) => Kind::Tstr,
            Token::ArrayX => Kind::ArrayX,
            Token::Array(_) => Kind::Array,
            Token::MapX => Kind::MapX,
            Token::Map(_) => Kind::Map,
            Token::Tag(_) => Kind::Tag,
            Token::Simple(_) => Kind::Simple,
            Token::Float(_) => Kind::Float,
            Token::Break => Kind::Break,
        }
    }
}

/***************************************************************************************************
 * Standard Trait Implementations: primitive value to Token. Used mostly by tests
 **************************************************************************************************/

/// Convert a u64 into the corresponding integer token
impl From<u64> for Token {
    #[inline]
    fn from(v: u64) -> Self {
        Token::Uint(v.into())
    }
}

/// Convert an i64 into the corresponding integer token, applying the `-1 - n` convention for
/// negative values
impl From<i64> for Token {
    #[inline]
    fn from(v: i64) -> Self {
        if v < 0 {
            Token::Nint(((-1 - v) as u64).into())
        } else {
            Token::Uint((v as u64).into())
        }
    }
}

/// Convert a byte vector into a definite-length byte string token
impl From<Vec<u8>> for Token {
    #[inline]
    fn from(v: Vec<u8>) -> Self {
        Token::Bstr(v)
    }
}
