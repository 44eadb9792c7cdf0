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
 * Diagnostic notation and float helper test cases.
 *
 * Run with: cargo test --features full,float
 **************************************************************************************************/
#![cfg(all(feature = "full", feature = "float"))]

extern crate tps_streamcbor;

use hex_literal::hex;

use tps_streamcbor::debug::{print_hex, Diag};
use tps_streamcbor::decoder::decode;
use tps_streamcbor::float::{to_f64, FloatWidth};
use tps_streamcbor::types::Value;

#[test]
fn diag_scalars() {
    assert_eq!(Value::uint(23u8).diag(), "23");
    assert_eq!(Value::nint(99u8).diag(), "-100");
    assert_eq!(Value::nint(u64::MAX).diag(), "-18446744073709551616");
    assert_eq!(Value::Simple(20).diag(), "false");
    assert_eq!(Value::Simple(21).diag(), "true");
    assert_eq!(Value::Simple(22).diag(), "null");
    assert_eq!(Value::Simple(23).diag(), "undefined");
    assert_eq!(Value::Simple(99).diag(), "simple(99)");
    assert_eq!(Value::float(0x3c00u16).diag(), "float(0x3c00)");
}

#[test]
fn diag_strings_and_containers() {
    assert_eq!(print_hex(&[0x01, 0xab]), "h'01ab'");
    assert_eq!(Value::byte_str(vec![0x01, 0xab]).diag(), "h'01ab'");
    assert_eq!(Value::text_str(*b"IETF").diag(), "\"IETF\"");
    let value = decode(&hex!("a2 61 61 01 61 62 82 02 03")).unwrap();
    assert_eq!(value.diag(), "{\"a\": 1, \"b\": [2, 3]}");
    let value = decode(&hex!("c1 1a 51 4b 67 b0")).unwrap();
    assert_eq!(value.diag(), "1(1363896240)");
}

#[test]
fn float_helpers_decode_by_width() {
    assert_eq!(to_f64(FloatWidth::F16, 0x3c00u16.into()), 1.0);
    assert_eq!(to_f64(FloatWidth::F16, 0xc400u16.into()), -4.0);
    assert_eq!(to_f64(FloatWidth::F32, 0x47c35000u32.into()), 100000.0);
    assert_eq!(to_f64(FloatWidth::F64, 0x3ff199999999999au64.into()), 1.1);
    // +Infinity in half precision
    assert!(to_f64(FloatWidth::F16, 0x7c00u16.into()).is_infinite());
}
