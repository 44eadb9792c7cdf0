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
 * cbor_diag - CBOR diagnostic style output for decoded values
 *
 * Diagnostic notation is defined in RFC8949, Section 8. It is intended for humans, not for
 * interchange: tools dump a decoded tree here when a byte-level hexdump is too opaque.
 *
 * Two deviations from the RFC, both forced by what the value tree preserves:
 *
 * - Floats are shown as their raw bit pattern, `float(0x3c00)`, because the on-wire width is
 *   not recorded and re-deriving a numeric rendering would be a guess.
 * - Text strings are rendered lossily; the tree keeps whatever bytes the wire carried.
 **************************************************************************************************/
use crate::ast::Value;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Render a byte string payload as `h'..'` with lower-case hex digits.
pub fn print_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push_str("h'");
    for byte in bytes.iter() {
        out.push_str(&format!("{:02x}", byte));
    }
    out.push('\'');
    out
}

/// Diagnostic notation rendering.
pub trait Diag {
    /// Returns the RFC8949 Section 8 diagnostic notation for this item.
    fn diag(&self) -> String;
}

impl Diag for Value {
    fn diag(&self) -> String {
        match self {
            Value::UInt(n) => format!("{}", n),
            Value::NInt(n) => format!("-{}", (n.get() as u128) + 1),
            Value::Bstr(bytes) => print_hex(bytes),
            Value::Tstr(bytes) => format!("\"{}\"", String::from_utf8_lossy(bytes)),
            Value::Array(elements) => {
                let inner: Vec<String> = elements.iter().map(Diag::diag).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Map(entries) => {
                let inner: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key.diag(), value.diag()))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            Value::Tag(number, content) => format!("{}({})", number, content.diag()),
            // Wire-decoded simple values carry the five-bit form.
            Value::Simple(20) => String::from("false"),
            Value::Simple(21) => String::from("true"),
            Value::Simple(22) => String::from("null"),
            Value::Simple(23) => String::from("undefined"),
            Value::Simple(n) => format!("simple({})", n),
            Value::Float(bits) => format!("float(0x{:x})", bits.get()),
        }
    }
}
