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
 * tps_streamcbor byte-level scanner
 *
 * A resumable automaton over the CBOR item framing: one head byte, zero to eight big-endian
 * argument bytes, and, for definite-length strings, that many payload bytes. The scanner
 * consumes exactly one byte per step and never looks ahead, which is what makes it safe to
 * drive from arbitrarily chunked input.
 **************************************************************************************************/
use crate::constants::*;
use crate::error::ScanError;
use crate::token::{Kind, Token};

use alloc::vec::Vec;
use std::convert::TryFrom;
use std::mem;

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/***************************************************************************************************
 * Limits
 **************************************************************************************************/

/// Upper bounds the scanner enforces on counts before it commits to gathering a payload or
/// emits a container header. All caps default to `u64::MAX`; a count above its cap (or one
/// that cannot index memory on this platform) produces [`ScanError::Excessive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanLimits {
    /// Maximum byte count of a single definite-length byte string.
    pub bstr_count_max: u64,
    /// Maximum byte count of a single definite-length text string.
    pub tstr_count_max: u64,
    /// Maximum element count of a definite-length array header.
    pub array_count_max: u64,
    /// Maximum pair count of a definite-length map header.
    pub map_count_max: u64,
}

impl Default for ScanLimits {
    fn default() -> Self {
        ScanLimits {
            bstr_count_max: u64::MAX,
            tstr_count_max: u64::MAX,
            array_count_max: u64::MAX,
            map_count_max: u64::MAX,
        }
    }
}

/***************************************************************************************************
 * Scanner state
 **************************************************************************************************/

/// Resumable state of the scanner between bytes.
///
/// The state is opaque: it is either waiting for a head byte, gathering a big-endian
/// argument, or gathering a string payload. A fresh (default) state expects a head byte.
#[derive(Clone, Debug, Default)]
pub struct ScanState(State);

impl ScanState {
    /// Returns `true` if the state is at an item boundary, i.e. not in the middle of an
    /// argument or payload.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        matches!(self.0, State::Head)
    }
}

#[derive(Clone, Debug)]
enum State {
    /// Expecting the head byte of the next item.
    Head,
    /// Gathering `pending` more bytes of a big-endian argument for a token of kind `kind`.
    Arg { kind: Kind, arg: u64, pending: usize },
    /// Gathering `pending` more bytes of a string payload for a token of kind `kind`.
    Pay {
        kind: Kind,
        bytes: Vec<u8>,
        pending: usize,
    },
}

impl Default for State {
    fn default() -> Self {
        State::Head
    }
}

/// Outcome of one scan step that did not fail.
#[derive(Clone, Debug)]
pub enum Progress {
    /// The byte was consumed; the returned state wants more bytes.
    Incomplete(ScanState),
    /// The byte completed `Token`; the returned state expects the next head byte.
    Complete(ScanState, Token),
}

/***************************************************************************************************
 * Step construction helpers
 **************************************************************************************************/

type ScanStep = Result<Progress, ScanError>;

#[inline]
fn complete(token: Token) -> ScanStep {
    Ok(Progress::Complete(ScanState(State::Head), token))
}

#[inline]
fn incomplete(state: State) -> ScanStep {
    Ok(Progress::Incomplete(ScanState(state)))
}

/// Begin gathering an `n`-byte big-endian argument for a token of kind `kind`.
#[inline]
fn gather_argument(kind: Kind, n: usize) -> ScanStep {
    incomplete(State::Arg {
        kind,
        arg: 0,
        pending: n,
    })
}

/// Number of argument bytes implied by an additional information value in `24..=27`.
#[inline]
fn argument_width(ai: u8) -> usize {
    1usize << (ai - AI_ONE_BYTE)
}

/// A definite string length is now known: emit the empty token, or start gathering the
/// payload, applying the configured cap first.
fn gather_string(kind: Kind, count: u64, cap: u64) -> ScanStep {
    if count > cap {
        return Err(ScanError::Excessive(count));
    }
    match usize::try_from(count) {
        Ok(0) => complete(string_token(kind, Vec::new())),
        Ok(size) => incomplete(State::Pay {
            kind,
            bytes: Vec::with_capacity(size),
            pending: size,
        }),
        Err(_) => Err(ScanError::Excessive(count)),
    }
}

/// A definite container count is now known: emit the header token, applying the cap first.
fn container_token(kind: Kind, count: u64, cap: u64) -> ScanStep {
    if count > cap {
        return Err(ScanError::Excessive(count));
    }
    match kind {
        Kind::Array => complete(Token::Array(count.into())),
        _ => complete(Token::Map(count.into())),
    }
}

fn string_token(kind: Kind, bytes: Vec<u8>) -> Token {
    match kind {
        Kind::Bstr => Token::Bstr(bytes),
        _ => Token::Tstr(bytes),
    }
}

/***************************************************************************************************
 * The automaton
 **************************************************************************************************/

/// Consumes one byte in the given state.
///
/// Returns [`Progress::Complete`] when the byte finished a token, [`Progress::Incomplete`]
/// when more bytes are required, and a [`ScanError`] when the byte cannot belong to any
/// well-formed item. On error the input state is lost; the caller starts over from a fresh
/// state once it has dealt with the failure.
///
/// End of input is not visible at this level. A caller that knows its stream has ended
/// while the state is mid-item reports [`ScanError::UnexpectedEof`] itself, or uses the
/// strict drivers [`Scanner::finish`] and [`tokenize`].
#[cfg_attr(feature = "trace", trace)]
pub fn scan(state: ScanState, byte: u8, limits: &ScanLimits) -> Result<Progress, ScanError> {
    match state.0 {
        State::Head => scan_head(byte, limits),
        State::Arg { kind, arg, pending } => scan_argument(kind, arg, pending, byte, limits),
        State::Pay {
            kind,
            bytes,
            pending,
        } => scan_payload(kind, bytes, pending, byte),
    }
}

/// Decode a head byte: major type in the top three bits, additional information below.
fn scan_head(byte: u8, limits: &ScanLimits) -> ScanStep {
    let mt = byte >> MT_SHIFT;
    let ai = byte & AI_MASK;
    match mt {
        MT_UINT => match ai {
            0..=AI_IMMEDIATE_MAX => complete(Token::Uint((ai as u64).into())),
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Uint, argument_width(ai)),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_NINT => match ai {
            0..=AI_IMMEDIATE_MAX => complete(Token::Nint((ai as u64).into())),
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Nint, argument_width(ai)),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_BSTR => match ai {
            0..=AI_IMMEDIATE_MAX => gather_string(Kind::Bstr, ai as u64, limits.bstr_count_max),
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Bstr, argument_width(ai)),
            AI_INDEFINITE => complete(Token::BstrX),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_TSTR => match ai {
            0..=AI_IMMEDIATE_MAX => gather_string(Kind::Tstr, ai as u64, limits.tstr_count_max),
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Tstr, argument_width(ai)),
            AI_INDEFINITE => complete(Token::TstrX),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_ARRAY => match ai {
            0..=AI_IMMEDIATE_MAX => {
                container_token(Kind::Array, ai as u64, limits.array_count_max)
            }
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Array, argument_width(ai)),
            AI_INDEFINITE => complete(Token::ArrayX),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_MAP => match ai {
            0..=AI_IMMEDIATE_MAX => container_token(Kind::Map, ai as u64, limits.map_count_max),
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Map, argument_width(ai)),
            AI_INDEFINITE => complete(Token::MapX),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_TAG => match ai {
            0..=AI_IMMEDIATE_MAX => complete(Token::Tag((ai as u64).into())),
            AI_ONE_BYTE..=AI_EIGHT_BYTES => gather_argument(Kind::Tag, argument_width(ai)),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        MT_SIMPLE => match ai {
            // Major type 7 carries simple values, floats by width, and the break marker.
            0..=AI_IMMEDIATE_MAX => complete(Token::Simple(ai)),
            AI_ONE_BYTE => gather_argument(Kind::Simple, 1),
            AI_TWO_BYTES => gather_argument(Kind::Float, 2),
            AI_FOUR_BYTES => gather_argument(Kind::Float, 4),
            AI_EIGHT_BYTES => gather_argument(Kind::Float, 8),
            AI_INDEFINITE => complete(Token::Break),
            _ => Err(ScanError::UnexpectedHead(byte)),
        },
        // A three-bit major type cannot take any other value.
        _ => Err(ScanError::UnexpectedHead(byte)),
    }
}

/// Shift one more byte into a big-endian argument; dispatch on the token kind once the
/// argument is complete.
fn scan_argument(kind: Kind, arg: u64, pending: usize, byte: u8, limits: &ScanLimits) -> ScanStep {
    let arg = (arg << 8) | byte as u64;
    let pending = pending - 1;
    if pending > 0 {
        return incomplete(State::Arg { kind, arg, pending });
    }
    match kind {
        Kind::Uint => complete(Token::Uint(arg.into())),
        Kind::Nint => complete(Token::Nint(arg.into())),
        Kind::Bstr => gather_string(Kind::Bstr, arg, limits.bstr_count_max),
        Kind::Tstr => gather_string(Kind::Tstr, arg, limits.tstr_count_max),
        Kind::Array => container_token(Kind::Array, arg, limits.array_count_max),
        Kind::Map => container_token(Kind::Map, arg, limits.map_count_max),
        Kind::Tag => complete(Token::Tag(arg.into())),
        Kind::Simple => complete(Token::Simple(arg as u8)),
        Kind::Float => complete(Token::Float(arg.into())),
        // No other kind ever enters the argument state.
        _ => Err(ScanError::UnexpectedHead(byte)),
    }
}

/// Append one more payload byte; emit the string token once the payload is complete.
fn scan_payload(kind: Kind, mut bytes: Vec<u8>, pending: usize, byte: u8) -> ScanStep {
    bytes.push(byte);
    let pending = pending - 1;
    if pending > 0 {
        incomplete(State::Pay {
            kind,
            bytes,
            pending,
        })
    } else {
        complete(string_token(kind, bytes))
    }
}

/// Consumes bytes from `input` until a token is produced, an error occurs, or the input is
/// exhausted. Returns the number of bytes consumed alongside the progress made.
///
/// Exhausting the input is not an error at this level; the returned state resumes where
/// this call stopped.
pub fn scan_slice(
    state: ScanState,
    input: &[u8],
    limits: &ScanLimits,
) -> Result<(usize, Progress), ScanError> {
    let mut state = state;
    for (index, byte) in input.iter().enumerate() {
        match scan(state, *byte, limits)? {
            Progress::Incomplete(next) => state = next,
            complete @ Progress::Complete(_, _) => return Ok((index + 1, complete)),
        }
    }
    Ok((input.len(), Progress::Incomplete(state)))
}

/***************************************************************************************************
 * Owning wrapper and range drivers
 **************************************************************************************************/

/// A scanner owning its resumable state and limits.
///
/// ## Example
///
/// ```
/// use tps_streamcbor::scanner::Scanner;
/// use tps_streamcbor::types::Token;
///
/// let mut scanner = Scanner::new();
/// let mut tokens = vec![];
/// for byte in [0x18u8, 0x2a, 0x44, 0xde, 0xad, 0xbe, 0xef].iter() {
///     if let Some(token) = scanner.consume(*byte).unwrap() {
///         tokens.push(token);
///     }
/// }
/// assert_eq!(
///     tokens,
///     vec![Token::Uint(42u8.into()), Token::Bstr(vec![0xde, 0xad, 0xbe, 0xef])]
/// );
/// ```
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScanState,
    limits: ScanLimits,
}

impl Scanner {
    /// Construct a scanner with default (unbounded) limits.
    pub fn new() -> Scanner {
        Scanner::default()
    }

    /// Construct a scanner with the given limits.
    pub fn with_limits(limits: ScanLimits) -> Scanner {
        Scanner {
            state: ScanState::default(),
            limits,
        }
    }

    /// Consume one byte; maybe produce a token.
    ///
    /// Returns `Ok(Some(token))` when the byte completed a token, `Ok(None)` when more
    /// bytes are required. After an error the scanner is back at an item boundary and may
    /// be fed again, but the item that failed is gone.
    #[cfg_attr(feature = "trace", trace)]
    pub fn consume(&mut self, byte: u8) -> Result<Option<Token>, ScanError> {
        match scan(mem::take(&mut self.state), byte, &self.limits)? {
            Progress::Incomplete(state) => {
                self.state = state;
                Ok(None)
            }
            Progress::Complete(state, token) => {
                self.state = state;
                Ok(Some(token))
            }
        }
    }

    /// Consume bytes from `input` until a token is produced, an error occurs, or the input
    /// is exhausted. Returns the number of bytes consumed alongside the token, if any.
    ///
    /// Exhausting the input mid-item is not an error here: the next call resumes where
    /// this one stopped.
    pub fn consume_slice(&mut self, input: &[u8]) -> Result<(usize, Option<Token>), ScanError> {
        for (index, byte) in input.iter().enumerate() {
            if let Some(token) = self.consume(*byte)? {
                return Ok((index + 1, Some(token)));
            }
        }
        Ok((input.len(), None))
    }

    /// Assert that the input stream has ended.
    ///
    /// Returns [`ScanError::UnexpectedEof`] if the scanner is mid-item; otherwise does
    /// nothing.
    pub fn finish(&self) -> Result<(), ScanError> {
        if self.state.is_boundary() {
            Ok(())
        } else {
            Err(ScanError::UnexpectedEof)
        }
    }

    /// Resets the scanner to an item boundary, discarding any partial state.
    pub fn reset(&mut self) {
        self.state = ScanState::default();
    }
}

/// Tokenizes a complete input in strict mode: every byte must be accounted for and the
/// input must end at an item boundary, otherwise [`ScanError::UnexpectedEof`].
pub fn tokenize(input: &[u8], limits: &ScanLimits) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::with_limits(*limits);
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let (consumed, token) = scanner.consume_slice(rest)?;
        if let Some(token) = token {
            tokens.push(token);
        }
        rest = &rest[consumed..];
    }
    scanner.finish()?;
    Ok(tokens)
}
