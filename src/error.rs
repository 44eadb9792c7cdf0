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
 * tps_streamcbor Error API
 *
 * Scan errors and parse errors form disjoint taxonomies; the parser wraps scanner errors when
 * it reports on behalf of the byte level.
 **************************************************************************************************/
use crate::token::{Kind, Token};

use alloc::string::String;
use alloc::vec::Vec;
use std::result;

#[cfg(any(feature = "full", test))]
use thiserror::Error;

/// An alias for `Result<T, ParseError>` used by the parser and the high-level decoders.
pub type Result<T> = result::Result<T, ParseError>;

/// `ScanError` describes a failure of the byte-level scanner. Once a scan error has been
/// returned the scanner state that produced it is no longer meaningful; callers should
/// reset before reusing it.
#[cfg_attr(any(feature = "full", test), derive(Copy, Clone, Error, Debug, PartialEq, Eq))]
#[cfg_attr(all(not(feature = "full"), not(test)), derive(Copy, Clone, Debug, PartialEq, Eq))]
pub enum ScanError {
    /// The initial byte of an item is not assigned by RFC8949.
    #[cfg_attr(any(feature = "full", test), error("Unrecognised initial byte"))]
    UnexpectedHead(u8),
    /// A string length or container count exceeds the configured limit, or cannot be
    /// represented on this platform.
    #[cfg_attr(any(feature = "full", test), error("Count exceeds the configured limit"))]
    Excessive(u64),
    /// The input ended in the middle of an item. Only the strict drivers report this; the
    /// stepwise scanner cannot know that the stream has ended.
    #[cfg_attr(any(feature = "full", test), error("Input ended inside an item"))]
    UnexpectedEof,
}

/// `ParseError` describes a failure of the token-level parser. Except where noted, a parser
/// that has reported an error is in an unspecified state and should be discarded.
#[cfg_attr(any(feature = "full", test), derive(Clone, Error, Debug, PartialEq))]
#[cfg_attr(all(not(feature = "full"), not(test)), derive(Clone, Debug, PartialEq))]
pub enum ParseError {
    /// The parser has not been set up for a grammar, or its result was already taken.
    #[cfg_attr(any(feature = "full", test), error("Parser is in an invalid state"))]
    Invalid,
    /// More tokens are required before the parser can accept or reject its input. This is a
    /// continuation signal, not a failure; it is surfaced by the one-shot drivers when the
    /// input ends between tokens.
    #[cfg_attr(any(feature = "full", test), error("Parser needs more tokens"))]
    Incomplete,
    /// The received token cannot continue any production at this point.
    #[cfg_attr(any(feature = "full", test), error("Unexpected token"))]
    UnexpectedT {
        /// Token kinds that would have been acceptable.
        expected: Vec<Kind>,
        /// The token actually received.
        found: Token,
    },
    /// Reserved for an LR-style front end; the LL machine in this crate never reports it.
    #[cfg_attr(any(feature = "full", test), error("Unexpected non-terminal"))]
    UnexpectedNT,
    /// Unexpected circumstances described by the message.
    #[cfg_attr(any(feature = "full", test), error("{0}"))]
    Unexpected(String),
    /// A token arrived after the parser had already produced its value.
    #[cfg_attr(any(feature = "full", test), error("Trailing input"))]
    TrailingInput,
    /// An error propagated from the byte-level scanner.
    #[cfg_attr(any(feature = "full", test), error("Scanner: {0}"))]
    Scanner(#[cfg_attr(any(feature = "full", test), from)] ScanError),
    /// Accepting the token would require more context stack than the configured limit.
    #[cfg_attr(any(feature = "full", test), error("Insufficient stack size"))]
    InsufficientStackSize,
    /// An internal invariant of the parser was violated. Seeing this is a bug in the crate
    /// or its tests, not in the input.
    #[cfg_attr(any(feature = "full", test), error("Internal error"))]
    Internal,
}

#[cfg(all(not(feature = "full"), not(test)))]
impl From<ScanError> for ParseError {
    fn from(e: ScanError) -> Self {
        ParseError::Scanner(e)
    }
}
