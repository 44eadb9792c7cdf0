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
 * tps_streamcbor high-level decoding
 *
 * Drivers for input that is already resident in memory. They run the scanner and parser as a
 * pipeline and apply the strict end-of-input rules that the stepwise machines leave to the
 * caller.
 **************************************************************************************************/
use crate::ast::Value;
use crate::error::{ParseError, Result};
use crate::parse::{ParseLimits, Parser};
use crate::scan::{ScanLimits, Scanner};

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/// Decodes exactly one CBOR data item occupying the whole input.
///
/// - Input ending inside an item: [`ParseError::Scanner`] wrapping
///   [`crate::error::ScanError::UnexpectedEof`].
/// - Input ending at a token boundary but inside a value: [`ParseError::Incomplete`].
/// - Bytes left over after the value: [`ParseError::TrailingInput`].
///
/// ## Example
///
/// ```
/// use tps_streamcbor::decoder::decode;
/// use tps_streamcbor::types::Value;
///
/// // 1(1363896240)
/// let value = decode(&[0xc1, 0x1a, 0x51, 0x4b, 0x67, 0xb0]).unwrap();
/// assert_eq!(value, Value::tag(1u8, Value::uint(1363896240u32)));
/// ```
#[cfg_attr(feature = "trace", trace)]
pub fn decode(input: &[u8]) -> Result<Value> {
    decode_with_limits(input, &ScanLimits::default(), &ParseLimits::default())
}

/// Decodes exactly one CBOR data item occupying the whole input, under the given limits.
pub fn decode_with_limits(
    input: &[u8],
    scan_limits: &ScanLimits,
    parse_limits: &ParseLimits,
) -> Result<Value> {
    let mut decoder = Decoder::with_limits(input, *scan_limits, *parse_limits);
    match decoder.next_value()? {
        Some(value) if decoder.at_end() => Ok(value),
        Some(_) => Err(ParseError::TrailingInput),
        None => Err(ParseError::Incomplete),
    }
}

/// An iterator over the data items of an RFC8742 CBOR sequence: zero or more CBOR items
/// encoded back to back.
///
/// Each item is decoded by a fresh parser under shared limits. Iteration ends cleanly at
/// the end of the input, or with an error item if the tail is not a well-formed item;
/// after an error the iterator is exhausted.
///
/// ## Example
///
/// ```
/// use tps_streamcbor::decoder::Decoder;
/// use tps_streamcbor::types::Value;
///
/// // Three items: 1, "a", [2]
/// let input = [0x01, 0x61, 0x61, 0x81, 0x02];
/// let items: Result<Vec<Value>, _> = Decoder::from_slice(&input).collect();
/// assert_eq!(
///     items.unwrap(),
///     vec![
///         Value::uint(1u8),
///         Value::text_str(*b"a"),
///         Value::Array(vec![Value::uint(2u8)]),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Decoder<'buf> {
    input: &'buf [u8],
    index: usize,
    scan_limits: ScanLimits,
    parse_limits: ParseLimits,
}

impl<'buf> Decoder<'buf> {
    /// Construct a decoder over `input` with default limits.
    pub fn from_slice(input: &'buf [u8]) -> Decoder<'buf> {
        Decoder::with_limits(input, ScanLimits::default(), ParseLimits::default())
    }

    /// Construct a decoder over `input` with the given limits.
    pub fn with_limits(
        input: &'buf [u8],
        scan_limits: ScanLimits,
        parse_limits: ParseLimits,
    ) -> Decoder<'buf> {
        Decoder {
            input,
            index: 0,
            scan_limits,
            parse_limits,
        }
    }

    /// Returns `true` once the whole input has been consumed.
    pub fn at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Decode the next data item, or `Ok(None)` at the end of the input.
    #[cfg_attr(feature = "trace", trace)]
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        if self.at_end() {
            return Ok(None);
        }
        let mut scanner = Scanner::with_limits(self.scan_limits);
        let mut parser = Parser::with_limits(self.parse_limits);
        while self.index < self.input.len() {
            let (consumed, token) = scanner.consume_slice(&self.input[self.index..])?;
            self.index += consumed;
            if let Some(token) = token {
                if let Some(value) = parser.consume(token)? {
                    return Ok(Some(value));
                }
            }
        }
        // The input ran out mid-item: distinguish a torn token from a torn value.
        scanner.finish()?;
        Err(ParseError::Incomplete)
    }
}

impl<'buf> Iterator for Decoder<'buf> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_value() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => None,
            Err(e) => {
                // Do not resume scanning inside a broken item.
                self.index = self.input.len();
                Some(Err(e))
            }
        }
    }
}
