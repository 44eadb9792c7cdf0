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
 * tps_streamcbor module definition
 *
 * A resumable, push-driven deserializer for CBOR (RFC8949). The byte-level scanner and the
 * token-level parser are both pure state machines, so input may arrive in arbitrary chunks.
 * This implementation does not require the Rust standard library, but does require an allocator.
 **************************************************************************************************/

// Default configuration
#![no_std]
#![warn(missing_docs)]

//! # TPS_STREAMCBOR
//!
//! The `tps_streamcbor` crate decodes CBOR (RFC8949) byte streams into an owned value tree. It
//! is aimed at callers who receive encoded data in arbitrary chunks - a socket, a UART, a flash
//! pager - and cannot hand the decoder one contiguous buffer.
//!
//! Decoding is split into two cooperating state machines:
//!
//! - The [`scanner::Scanner`] consumes bytes one at a time and emits [`types::Token`]s. Its
//!   state survives across chunk boundaries: feeding the same bytes in any chunking produces
//!   the same tokens.
//! - The [`parser::Parser`] consumes tokens and builds a single [`types::Value`], handling
//!   nested arrays, maps, tagged values and indefinite-length constructs terminated by the
//!   `break` marker.
//!
//! Both machines report progress through `Result<Option<_>, _>`: `Ok(None)` means "feed me
//! more", `Ok(Some(_))` carries a finished token or value, and errors are returned, never
//! panicked.
//!
//! For input that is already resident in memory, [`decoder::decode`] runs the whole pipeline
//! in one call, and [`decoder::Decoder`] iterates over the data items of an RFC8742 CBOR
//! sequence.
//!
//! ## Features
//!
//! - Decodes every well-formed RFC8949 encoding, including indefinite-length strings,
//!   arrays and maps.
//! - Preserves what the wire said: map entries keep their order (duplicates included), text
//!   strings keep their bytes, floats keep their bit pattern.
//! - Configurable guard rails: per-kind count caps on the scanner
//!   ([`scanner::ScanLimits`]) and a context-stack depth cap on the parser
//!   ([`parser::ParseLimits`]) protect against hostile lengths and hostile nesting.
//!
//! ## Examples
//!
//! ### One-shot decoding
//!
//! ```
//! use tps_streamcbor::decoder::decode;
//! use tps_streamcbor::error::ParseError;
//! use tps_streamcbor::types::Value;
//!
//! fn main() -> Result<(), ParseError> {
//!     // [1, [2, 3]]
//!     let value = decode(&[0x82, 0x01, 0x82, 0x02, 0x03])?;
//!
//!     let items = value.as_array_ref().ok_or(ParseError::Invalid)?;
//!     assert_eq!(items.len(), 2);
//!     assert_eq!(items[0], Value::uint(1u8));
//!     Ok(())
//! }
//! ```
//!
//! ### Streaming decoding
//!
//! The scanner and parser can be driven directly when input arrives in pieces. The chunk
//! boundaries below fall in the middle of an integer argument and a string payload; neither
//! machine notices.
//!
//! ```
//! use tps_streamcbor::parser::Parser;
//! use tps_streamcbor::scanner::Scanner;
//! use tps_streamcbor::error::ParseError;
//! use tps_streamcbor::types::Value;
//!
//! fn main() -> Result<(), ParseError> {
//!     // ["hi", 500] delivered in three chunks
//!     let chunks: [&[u8]; 3] = [&[0x82, 0x62], &[0x68, 0x69, 0x19], &[0x01, 0xf4]];
//!
//!     let mut scanner = Scanner::new();
//!     let mut parser = Parser::new();
//!     let mut result = None;
//!     for chunk in chunks.iter() {
//!         for byte in chunk.iter() {
//!             if let Some(token) = scanner.consume(*byte).map_err(ParseError::Scanner)? {
//!                 if let Some(value) = parser.consume(token)? {
//!                     result = Some(value);
//!                 }
//!             }
//!         }
//!     }
//!     scanner.finish().map_err(ParseError::Scanner)?;
//!
//!     let entries = result.ok_or(ParseError::Incomplete)?;
//!     assert_eq!(
//!         entries,
//!         Value::Array(vec![Value::text_str(*b"hi"), Value::uint(500u16)])
//!     );
//!     Ok(())
//! }
//! ```

// Pull in std if we are testing or if it is defined as feature (because we run tests on a
// platform supporting I/O and full feature set.
#[cfg(any(feature = "std", test))]
extern crate std;

// If we are really building no_std, pull in core as well. It is aliased as std so that "use"
// statements are always the same
#[cfg(all(not(feature = "std"), not(test)))]
extern crate core as std;

// Heap storage for scanner payloads and parser stacks.
extern crate alloc;

#[cfg(any(feature = "float", test))]
extern crate half;

pub(crate) mod ast;
#[cfg(any(feature = "full", test))]
mod cbor_diag;
pub(crate) mod decode;
pub(crate) mod int;
pub(crate) mod parse;
pub(crate) mod scan;
pub(crate) mod token;

/// The `constants` module contains the bit layout of the CBOR initial byte and the
/// well-known simple values.
pub mod constants;

/// The `error` module contains error definitions used throughout `tps_streamcbor`.
pub mod error;

/// The `float` module contains helpers for turning gathered float bit patterns into `f64`,
/// given the on-wire width that the caller tracked.
#[cfg(any(feature = "float", test))]
pub mod float;

/// The `types` module exports the [`Value`](crate::types::Value) tree produced by the
/// parser, the [`Token`](crate::types::Token) alphabet connecting the scanner to the
/// parser, and the integer quantity types [`U64`](crate::types::U64) and
/// [`Int`](crate::types::Int).
pub mod types {
    pub use super::ast::Value;
    pub use super::int::{Int, U64};
    pub use super::token::{Kind, Token};
}

/// The `scanner` module exports the byte-level state machine: the resumable
/// [`Scanner`](crate::scanner::Scanner), the pure [`scan`](crate::scanner::scan) step
/// function and its state and limit types, and the strict
/// [`tokenize`](crate::scanner::tokenize) driver.
pub mod scanner {
    pub use super::scan::{scan, scan_slice, tokenize, Progress, ScanLimits, ScanState, Scanner};
}

/// The `parser` module exports the token-level pushdown machine.
pub mod parser {
    pub use super::parse::{ParseLimits, Parser};
}

/// The `decoder` module exports the high-level entry points for input that is resident in
/// memory: one-shot [`decode`](crate::decoder::decode) and the RFC8742 sequence iterator
/// [`Decoder`](crate::decoder::Decoder).
pub mod decoder {
    pub use super::decode::{decode, decode_with_limits, Decoder};
}

/// The `debug` module exports the CBOR diagnostic notation renderer.
#[cfg(any(feature = "full", test))]
pub mod debug {
    pub use super::cbor_diag::{print_hex, Diag};
}
