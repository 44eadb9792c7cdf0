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
 * tps_streamcbor token-level parser
 *
 * A pushdown machine over two stacks. The context stack holds what the grammar still expects:
 * non-terminal symbols to recognise and deferred reductions to run. The value stack holds
 * completed values awaiting incorporation into their parent container. Reductions run in the
 * flush loop between token consumptions and move ownership from the value stack into the
 * container being assembled.
 **************************************************************************************************/
use crate::ast::Value;
use crate::error::{ParseError, Result};
use crate::int::U64;
use crate::token::{Kind, Token};

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/***************************************************************************************************
 * Limits
 **************************************************************************************************/

/// Upper bound the parser enforces on its context stack. Hostile nesting, or a definite
/// container header announcing more children than the limit, is rejected with
/// [`ParseError::InsufficientStackSize`] before anything is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum number of context frames.
    pub context_stack_max: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        ParseLimits {
            context_stack_max: 1024,
        }
    }
}

/***************************************************************************************************
 * Context frames
 **************************************************************************************************/

/// Non-terminal symbols of the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NonTerm {
    /// Any single CBOR value.
    Value,
    /// Tail of an indefinite-length array: values until `break`.
    ArrayXSeq,
    /// Tail of an indefinite-length map: key/value pairs until `break`.
    MapXSeq,
    /// Tail of an indefinite-length byte string: definite chunks until `break`.
    BstrXSeq,
    /// Tail of an indefinite-length text string: definite chunks until `break`.
    TstrXSeq,
}

/// Deferred reductions. Each one rearranges the top of the value stack without consuming
/// input; the flush loop interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reduction {
    /// Pop the last `n` values and push an array of them.
    CollectArray(usize),
    /// Pop the last `n` key/value pairs and push a map of them.
    CollectMap(usize),
    /// Pop one value and push it wrapped in the tag.
    WrapTag(U64),
    /// Pop one value and append it to the array beneath it.
    AppendElement,
    /// Pop a value and a key and append the entry to the map beneath them.
    AppendEntry,
    /// Pop a byte string chunk and append it to the byte string beneath it.
    AppendBstr,
    /// Pop a text string chunk and append it to the text string beneath it.
    AppendTstr,
}

/// One frame of the context stack.
#[derive(Clone, Debug)]
enum Context {
    /// The grammar must recognise one of the productions of this non-terminal next.
    NonTerminal(NonTerm),
    /// A reduction to run, without input, once it reaches the top of the stack.
    Reduce(Reduction),
}

/***************************************************************************************************
 * The parser
 **************************************************************************************************/

/// A parser for a single CBOR data item.
///
/// Feed it tokens one at a time. `Ok(None)` means the item is not finished; `Ok(Some(v))`
/// carries the finished value, after which any further token is [`ParseError::TrailingInput`]
/// until the parser is [reset](Parser::reset). After any error the parser state is
/// unspecified and should be reset or discarded.
///
/// ## Example
///
/// ```
/// use tps_streamcbor::parser::Parser;
/// use tps_streamcbor::types::{Token, Value};
///
/// let mut parser = Parser::new();
/// assert_eq!(parser.consume(Token::Array(2u8.into())).unwrap(), None);
/// assert_eq!(parser.consume(Token::from(1i64)).unwrap(), None);
/// let value = parser.consume(Token::from(-2i64)).unwrap();
/// assert_eq!(
///     value,
///     Some(Value::Array(vec![Value::uint(1u8), Value::nint(1u8)]))
/// );
/// ```
#[derive(Debug)]
pub struct Parser {
    context: Vec<Context>,
    values: Vec<Value>,
    limits: ParseLimits,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    /// Construct a parser for one CBOR data item, with the default limits.
    pub fn new() -> Parser {
        Parser::with_limits(ParseLimits::default())
    }

    /// Construct a parser for one CBOR data item, with the given limits.
    pub fn with_limits(limits: ParseLimits) -> Parser {
        Parser {
            context: vec![Context::NonTerminal(NonTerm::Value)],
            values: Vec::new(),
            limits,
        }
    }

    /// Discard all progress and expect a fresh data item.
    pub fn reset(&mut self) {
        self.context.clear();
        self.context.push(Context::NonTerminal(NonTerm::Value));
        self.values.clear();
    }

    /// Consume one token.
    ///
    /// Returns `Ok(None)` while the item is incomplete and `Ok(Some(value))` when the token
    /// completed it.
    #[cfg_attr(feature = "trace", trace)]
    pub fn consume(&mut self, token: Token) -> Result<Option<Value>> {
        self.dispatch(token)?;
        self.flush()?;
        if !self.context.is_empty() {
            return Ok(None);
        }
        match self.values.len() {
            1 => Ok(self.values.pop()),
            0 => Err(ParseError::Invalid),
            _ => Err(ParseError::Internal),
        }
    }

    /***********************************************************************************************
     * Token dispatch
     **********************************************************************************************/

    /// Route one token through the context stack. Frames that expand productions without
    /// consuming the token loop back around; frames that consume it return.
    fn dispatch(&mut self, token: Token) -> Result<()> {
        loop {
            let context = match self.context.pop() {
                Some(context) => context,
                None => return Err(ParseError::TrailingInput),
            };
            match context {
                // A reduction surfacing here runs exactly as it would in the flush loop.
                Context::Reduce(reduction) => {
                    self.reduce(reduction)?;
                    continue;
                }
                Context::NonTerminal(NonTerm::Value) => return self.value_production(token),
                Context::NonTerminal(NonTerm::ArrayXSeq) => {
                    if token.kind() == Kind::Break {
                        return Ok(());
                    }
                    // arrayxseq = value arrayxseq
                    self.push(Context::NonTerminal(NonTerm::ArrayXSeq))?;
                    self.push(Context::Reduce(Reduction::AppendElement))?;
                    self.push(Context::NonTerminal(NonTerm::Value))?;
                    continue;
                }
                Context::NonTerminal(NonTerm::MapXSeq) => {
                    if token.kind() == Kind::Break {
                        return Ok(());
                    }
                    // mapxseq = key:value item:value mapxseq
                    self.push(Context::NonTerminal(NonTerm::MapXSeq))?;
                    self.push(Context::Reduce(Reduction::AppendEntry))?;
                    self.push(Context::NonTerminal(NonTerm::Value))?;
                    self.push(Context::NonTerminal(NonTerm::Value))?;
                    continue;
                }
                Context::NonTerminal(NonTerm::BstrXSeq) => {
                    return self.chunk_production(NonTerm::BstrXSeq, token)
                }
                Context::NonTerminal(NonTerm::TstrXSeq) => {
                    return self.chunk_production(NonTerm::TstrXSeq, token)
                }
            }
        }
    }

    /// Productions of the `value` non-terminal, one per token that may start a value.
    fn value_production(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Uint(n) => self.values.push(Value::UInt(n)),
            Token::Nint(n) => self.values.push(Value::NInt(n)),
            Token::Bstr(bytes) => self.values.push(Value::Bstr(bytes)),
            Token::Tstr(bytes) => self.values.push(Value::Tstr(bytes)),
            Token::Simple(n) => self.values.push(Value::Simple(n)),
            Token::Float(bits) => self.values.push(Value::Float(bits)),
            Token::Array(n) => {
                let count = self.reserve_frames(n.get(), 1)?;
                self.context.push(Context::Reduce(Reduction::CollectArray(count)));
                self.push_values(count);
            }
            Token::Map(n) => {
                let pairs = n.get();
                let count = pairs
                    .checked_mul(2)
                    .ok_or(ParseError::InsufficientStackSize)
                    .and_then(|entries| self.reserve_frames(entries, 1))?;
                self.context.push(Context::Reduce(Reduction::CollectMap(count / 2)));
                self.push_values(count);
            }
            Token::Tag(number) => {
                self.reserve_frames(1, 1)?;
                self.context.push(Context::Reduce(Reduction::WrapTag(number)));
                self.push_values(1);
            }
            Token::ArrayX => {
                self.values.push(Value::Array(Vec::new()));
                self.push(Context::NonTerminal(NonTerm::ArrayXSeq))?;
            }
            Token::MapX => {
                self.values.push(Value::Map(Vec::new()));
                self.push(Context::NonTerminal(NonTerm::MapXSeq))?;
            }
            Token::BstrX => {
                self.values.push(Value::Bstr(Vec::new()));
                self.push(Context::NonTerminal(NonTerm::BstrXSeq))?;
            }
            Token::TstrX => {
                self.values.push(Value::Tstr(Vec::new()));
                self.push(Context::NonTerminal(NonTerm::TstrXSeq))?;
            }
            Token::Break => {
                // Not a value. Restore the expectation before reporting.
                self.push(Context::NonTerminal(NonTerm::Value))?;
                return Err(ParseError::UnexpectedT {
                    expected: vec![
                        Kind::Array,
                        Kind::ArrayX,
                        Kind::Bstr,
                        Kind::BstrX,
                        Kind::Float,
                        Kind::Map,
                        Kind::MapX,
                        Kind::Nint,
                        Kind::Simple,
                        Kind::Tag,
                        Kind::Tstr,
                        Kind::TstrX,
                        Kind::Uint,
                    ],
                    found: token,
                });
            }
        }
        Ok(())
    }

    /// Productions of the string chunk sequences. RFC8949 only admits definite-length
    /// chunks of the same string type between the opening token and the `break`.
    fn chunk_production(&mut self, seq: NonTerm, token: Token) -> Result<()> {
        match (seq, token) {
            (_, Token::Break) => Ok(()),
            (NonTerm::BstrXSeq, Token::Bstr(chunk)) => {
                self.push(Context::NonTerminal(NonTerm::BstrXSeq))?;
                self.push(Context::Reduce(Reduction::AppendBstr))?;
                self.values.push(Value::Bstr(chunk));
                Ok(())
            }
            (NonTerm::TstrXSeq, Token::Tstr(chunk)) => {
                self.push(Context::NonTerminal(NonTerm::TstrXSeq))?;
                self.push(Context::Reduce(Reduction::AppendTstr))?;
                self.values.push(Value::Tstr(chunk));
                Ok(())
            }
            (_, token) => {
                self.push(Context::NonTerminal(seq))?;
                let expected = if seq == NonTerm::BstrXSeq {
                    vec![Kind::Break, Kind::Bstr]
                } else {
                    vec![Kind::Break, Kind::Tstr]
                };
                Err(ParseError::UnexpectedT {
                    expected,
                    found: token,
                })
            }
        }
    }

    /***********************************************************************************************
     * Flush loop and reductions
     **********************************************************************************************/

    /// Run reductions from the top of the context stack until a symbol frame (or nothing)
    /// surfaces.
    fn flush(&mut self) -> Result<()> {
        while let Some(Context::Reduce(reduction)) = self.context.last() {
            let reduction = *reduction;
            self.context.pop();
            self.reduce(reduction)?;
        }
        Ok(())
    }

    fn reduce(&mut self, reduction: Reduction) -> Result<()> {
        match reduction {
            Reduction::CollectArray(n) => {
                let elements = self.split_values(n)?;
                self.values.push(Value::Array(elements));
            }
            Reduction::CollectMap(n) => {
                let flat = self.split_values(2 * n)?;
                let mut entries = Vec::with_capacity(n);
                let mut flat = flat.into_iter();
                while let (Some(key), Some(value)) = (flat.next(), flat.next()) {
                    entries.push((key, value));
                }
                self.values.push(Value::Map(entries));
            }
            Reduction::WrapTag(number) => {
                let content = self.pop_value()?;
                self.values.push(Value::Tag(number, Box::new(content)));
            }
            Reduction::AppendElement => {
                let element = self.pop_value()?;
                match self.values.last_mut() {
                    Some(Value::Array(elements)) => elements.push(element),
                    _ => return Err(ParseError::Internal),
                }
            }
            Reduction::AppendEntry => {
                let value = self.pop_value()?;
                let key = self.pop_value()?;
                match self.values.last_mut() {
                    Some(Value::Map(entries)) => entries.push((key, value)),
                    _ => return Err(ParseError::Internal),
                }
            }
            Reduction::AppendBstr => {
                let chunk = self.pop_value()?;
                match (self.values.last_mut(), chunk) {
                    (Some(Value::Bstr(acc)), Value::Bstr(mut chunk)) => acc.append(&mut chunk),
                    _ => return Err(ParseError::Internal),
                }
            }
            Reduction::AppendTstr => {
                let chunk = self.pop_value()?;
                match (self.values.last_mut(), chunk) {
                    (Some(Value::Tstr(acc)), Value::Tstr(mut chunk)) => acc.append(&mut chunk),
                    _ => return Err(ParseError::Internal),
                }
            }
        }
        Ok(())
    }

    /***********************************************************************************************
     * Stack plumbing
     **********************************************************************************************/

    /// Push one context frame, honouring the depth limit.
    fn push(&mut self, context: Context) -> Result<()> {
        if self.context.len() < self.limits.context_stack_max {
            self.context.push(context);
            Ok(())
        } else {
            Err(ParseError::InsufficientStackSize)
        }
    }

    /// Check that `count` value frames plus `extra` bookkeeping frames fit the remaining
    /// stack budget; returns the count as a platform size. The check runs before anything
    /// is pushed or reserved, so a hostile header cannot commit memory.
    fn reserve_frames(&self, count: u64, extra: usize) -> Result<usize> {
        let available = self
            .limits
            .context_stack_max
            .saturating_sub(self.context.len())
            .saturating_sub(extra);
        if count <= available as u64 {
            Ok(count as usize)
        } else {
            Err(ParseError::InsufficientStackSize)
        }
    }

    /// Push `count` `value` non-terminal frames. The budget was already checked.
    fn push_values(&mut self, count: usize) {
        for _ in 0..count {
            self.context.push(Context::NonTerminal(NonTerm::Value));
        }
    }

    fn pop_value(&mut self) -> Result<Value> {
        self.values.pop().ok_or(ParseError::Internal)
    }

    /// Remove the last `n` values, preserving their order.
    fn split_values(&mut self, n: usize) -> Result<Vec<Value>> {
        if self.values.len() < n {
            return Err(ParseError::Internal);
        }
        let at = self.values.len() - n;
        Ok(self.values.split_off(at))
    }
}
