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
 * Parser test cases: one value per well-formed token sequence, container assembly in both the
 * definite and indefinite forms, and the rejection paths.
 *
 * Encodings from RFC8949, Appendix A.
 **************************************************************************************************/

extern crate tps_streamcbor;

use hex_literal::hex;

use tps_streamcbor::error::ParseError;
use tps_streamcbor::parser::{ParseLimits, Parser};
use tps_streamcbor::scanner::{tokenize, ScanLimits};
use tps_streamcbor::types::{Kind, Token, Value};

/// Feed all tokens to a fresh parser; the last token must complete the value and none of the
/// earlier ones may.
fn parse_tokens(tokens: Vec<Token>) -> Result<Value, ParseError> {
    let mut parser = Parser::new();
    let count = tokens.len();
    for (index, token) in tokens.into_iter().enumerate() {
        match parser.consume(token)? {
            Some(value) => {
                assert_eq!(index + 1, count, "value completed before the last token");
                return Ok(value);
            }
            None => assert!(index + 1 < count, "value incomplete after the last token"),
        }
    }
    unreachable!()
}

/// Scan and parse one complete encoding.
fn parse_bytes(input: &[u8]) -> Value {
    parse_tokens(tokenize(input, &ScanLimits::default()).unwrap()).unwrap()
}

/***************************************************************************************************
 * Single-token values
 **************************************************************************************************/

#[test]
fn parse_integers() {
    assert_eq!(parse_bytes(&hex!("18 01")), Value::uint(1u8));
    assert_eq!(
        parse_bytes(&hex!("1b 01 02 03 04 05 06 07 08")),
        Value::uint(0x0102030405060708u64)
    );
    // 0x21 is -2, encoded as the quantity 1
    assert_eq!(parse_bytes(&[0x21]), Value::nint(1u8));
}

#[test]
fn parse_strings() {
    assert_eq!(parse_bytes(&[0x40]), Value::byte_str(vec![]));
    let payload: Vec<u8> = (1..=23u8).collect();
    let mut input = vec![0x58, 0x17];
    input.extend_from_slice(&payload);
    assert_eq!(parse_bytes(&input), Value::byte_str(payload));
    assert_eq!(parse_bytes(&hex!("64 49 45 54 46")), Value::text_str(*b"IETF"));
}

#[test]
fn parse_simple_and_float() {
    assert_eq!(parse_bytes(&[0xf4]), Value::Simple(20));
    assert_eq!(parse_bytes(&hex!("f8 ff")), Value::Simple(255));
    // A half-width bit pattern stays a bit pattern.
    assert_eq!(parse_bytes(&hex!("f9 01 02")), Value::float(0x0102u16));
    assert_eq!(
        parse_bytes(&hex!("fb 3f f0 00 00 00 00 00 00")),
        Value::float(1.0f64.to_bits())
    );
}

/***************************************************************************************************
 * Definite-length containers and tags
 **************************************************************************************************/

#[test]
fn parse_arrays() {
    assert_eq!(parse_bytes(&[0x80]), Value::Array(vec![]));
    assert_eq!(
        parse_bytes(&hex!("82 01 02")),
        Value::Array(vec![Value::uint(1u8), Value::uint(2u8)])
    );
    assert_eq!(
        parse_bytes(&hex!("83 01 82 02 03 82 04 05")),
        Value::Array(vec![
            Value::uint(1u8),
            Value::Array(vec![Value::uint(2u8), Value::uint(3u8)]),
            Value::Array(vec![Value::uint(4u8), Value::uint(5u8)]),
        ])
    );
}

#[test]
fn parse_array_of_25() {
    let input = hex!(
        "98 19 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f 10 11 12 13 14 15 16 17 18 18 18 19"
    );
    let expected: Vec<Value> = (1..=25u8).map(Value::uint).collect();
    assert_eq!(parse_bytes(&input), Value::Array(expected));
}

#[test]
fn parse_maps() {
    assert_eq!(parse_bytes(&[0xa0]), Value::Map(vec![]));
    assert_eq!(
        parse_bytes(&hex!("a2 01 02 03 04")),
        Value::Map(vec![
            (Value::uint(1u8), Value::uint(2u8)),
            (Value::uint(3u8), Value::uint(4u8)),
        ])
    );
    assert_eq!(
        parse_bytes(&hex!("a2 61 61 01 61 62 82 02 03")),
        Value::Map(vec![
            (Value::text_str(*b"a"), Value::uint(1u8)),
            (
                Value::text_str(*b"b"),
                Value::Array(vec![Value::uint(2u8), Value::uint(3u8)])
            ),
        ])
    );
}

#[test]
fn parse_map_keeps_duplicate_keys() {
    assert_eq!(
        parse_bytes(&hex!("a2 01 02 01 03")),
        Value::Map(vec![
            (Value::uint(1u8), Value::uint(2u8)),
            (Value::uint(1u8), Value::uint(3u8)),
        ])
    );
}

#[test]
fn parse_tags() {
    assert_eq!(
        parse_bytes(&hex!("c1 01")),
        Value::tag(1u8, Value::uint(1u8))
    );
    assert_eq!(
        parse_bytes(&hex!("c1 1a 51 4b 67 b0")),
        Value::tag(1u8, Value::uint(1363896240u32))
    );
    // Tags nest: 55799(24(h'01'))
    assert_eq!(
        parse_bytes(&hex!("d9 d9 f7 d8 18 41 01")),
        Value::tag(55799u16, Value::tag(24u8, Value::byte_str(vec![0x01])))
    );
}

/***************************************************************************************************
 * Indefinite-length constructs
 **************************************************************************************************/

#[test]
fn parse_indefinite_empty_containers() {
    assert_eq!(parse_bytes(&hex!("bf ff")), Value::Map(vec![]));
    assert_eq!(parse_bytes(&hex!("9f ff")), Value::Array(vec![]));
}

#[test]
fn parse_indefinite_array() {
    // [_ 1, [2, 3], [_ 4, 5]]
    assert_eq!(
        parse_bytes(&hex!("9f 01 82 02 03 9f 04 05 ff ff")),
        Value::Array(vec![
            Value::uint(1u8),
            Value::Array(vec![Value::uint(2u8), Value::uint(3u8)]),
            Value::Array(vec![Value::uint(4u8), Value::uint(5u8)]),
        ])
    );
}

#[test]
fn parse_indefinite_map() {
    // {_ "a": 1, "b": [_ 2, 3]}
    assert_eq!(
        parse_bytes(&hex!("bf 61 61 01 61 62 9f 02 03 ff ff")),
        Value::Map(vec![
            (Value::text_str(*b"a"), Value::uint(1u8)),
            (
                Value::text_str(*b"b"),
                Value::Array(vec![Value::uint(2u8), Value::uint(3u8)])
            ),
        ])
    );
}

#[test]
fn parse_chunked_strings() {
    // (_ h'0102', h'030405')
    assert_eq!(
        parse_bytes(&hex!("5f 42 01 02 43 03 04 05 ff")),
        Value::byte_str(vec![0x01, 0x02, 0x03, 0x04, 0x05])
    );
    // (_ "strea", "ming")
    assert_eq!(
        parse_bytes(&hex!("7f 65 73 74 72 65 61 64 6d 69 6e 67 ff")),
        Value::text_str(*b"streaming")
    );
    // Empty chunk streams collapse to empty strings.
    assert_eq!(parse_bytes(&hex!("5f ff")), Value::byte_str(vec![]));
    assert_eq!(parse_bytes(&hex!("7f ff")), Value::text_str(vec![]));
}

/***************************************************************************************************
 * Rejection paths
 **************************************************************************************************/

#[test]
fn parse_rejects_stray_break() {
    let result = parse_tokens(vec![Token::Break]);
    match result {
        Err(ParseError::UnexpectedT { expected, found }) => {
            assert_eq!(found, Token::Break);
            assert!(!expected.contains(&Kind::Break));
            assert_eq!(expected.len(), 13);
        }
        other => panic!("expected UnexpectedT, got {:?}", other),
    }
}

#[test]
fn parse_rejects_break_inside_definite_array() {
    let mut parser = Parser::new();
    assert_eq!(parser.consume(Token::Array(2u8.into())).unwrap(), None);
    assert_eq!(parser.consume(Token::from(1i64)).unwrap(), None);
    assert!(matches!(
        parser.consume(Token::Break),
        Err(ParseError::UnexpectedT { .. })
    ));
}

#[test]
fn parse_rejects_non_chunk_in_string_sequences() {
    // Only definite chunks of the same string type may appear before the break.
    let result = parse_tokens(vec![Token::BstrX, Token::Uint(1u8.into())]);
    match result {
        Err(ParseError::UnexpectedT { expected, found }) => {
            assert_eq!(expected, vec![Kind::Break, Kind::Bstr]);
            assert_eq!(found, Token::Uint(1u8.into()));
        }
        other => panic!("expected UnexpectedT, got {:?}", other),
    }
    // A nested indefinite string is not a chunk.
    assert!(matches!(
        parse_tokens(vec![Token::BstrX, Token::BstrX]),
        Err(ParseError::UnexpectedT { .. })
    ));
    // Chunk types do not mix.
    let result = parse_tokens(vec![Token::TstrX, Token::Bstr(vec![0x01])]);
    match result {
        Err(ParseError::UnexpectedT { expected, .. }) => {
            assert_eq!(expected, vec![Kind::Break, Kind::Tstr]);
        }
        other => panic!("expected UnexpectedT, got {:?}", other),
    }
}

#[test]
fn parse_rejects_trailing_token() {
    let mut parser = Parser::new();
    assert!(parser.consume(Token::from(1i64)).unwrap().is_some());
    assert_eq!(
        parser.consume(Token::from(2i64)),
        Err(ParseError::TrailingInput)
    );
}

#[test]
fn parse_reset_accepts_a_fresh_item() {
    let mut parser = Parser::new();
    assert!(parser.consume(Token::from(1i64)).unwrap().is_some());
    parser.reset();
    assert_eq!(
        parser.consume(Token::from(2i64)).unwrap(),
        Some(Value::uint(2u8))
    );
}

#[test]
fn parse_depth_limit() {
    let limits = ParseLimits {
        context_stack_max: 4,
    };
    let mut parser = Parser::with_limits(limits);
    assert_eq!(parser.consume(Token::Array(1u8.into())).unwrap(), None);
    assert_eq!(parser.consume(Token::Array(1u8.into())).unwrap(), None);
    assert_eq!(parser.consume(Token::Array(1u8.into())).unwrap(), None);
    assert_eq!(
        parser.consume(Token::Array(1u8.into())),
        Err(ParseError::InsufficientStackSize)
    );
}

#[test]
fn parse_rejects_oversized_definite_headers() {
    // A hostile count must fail before anything is reserved for it.
    let mut parser = Parser::new();
    assert_eq!(
        parser.consume(Token::Array(u64::MAX.into())),
        Err(ParseError::InsufficientStackSize)
    );
    let mut parser = Parser::new();
    assert_eq!(
        parser.consume(Token::Map(u64::MAX.into())),
        Err(ParseError::InsufficientStackSize)
    );
}

#[test]
fn parse_deep_nesting_within_limit() {
    // 512 nested arrays fit the default budget of 1024 frames.
    let mut tokens: Vec<Token> = (0..512).map(|_| Token::Array(1u8.into())).collect();
    tokens.push(Token::from(7i64));
    let mut value = parse_tokens(tokens).unwrap();
    let mut depth = 0;
    while let Value::Array(mut elements) = value {
        assert_eq!(elements.len(), 1);
        value = elements.pop().unwrap();
        depth += 1;
    }
    assert_eq!(depth, 512);
    assert_eq!(value, Value::uint(7u8));
}
