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
 * tps_streamcbor float decoding helpers
 *
 * A float token keeps its gathered bit pattern; the on-wire width (implicit in the head byte)
 * is not recorded in the token or the value tree. Callers that track the width themselves can
 * use these helpers to obtain a host float, half precision included.
 **************************************************************************************************/
use crate::int::U64;

use half::f16;

/// On-wire width of a CBOR floating-point item.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FloatWidth {
    /// Half precision, head byte `0xf9`, two argument bytes.
    F16,
    /// Single precision, head byte `0xfa`, four argument bytes.
    F32,
    /// Double precision, head byte `0xfb`, eight argument bytes.
    F64,
}

/// Decodes a gathered bit pattern as a float of the given on-wire width, widened to `f64`.
///
/// Bits above the width are ignored; the scanner never sets them.
///
/// ## Example
///
/// ```
/// use tps_streamcbor::float::{to_f64, FloatWidth};
///
/// // 0xf9 0x3c 0x00 is 1.0 in half precision
/// assert_eq!(to_f64(FloatWidth::F16, 0x3c00u16.into()), 1.0);
/// ```
pub fn to_f64(width: FloatWidth, bits: U64) -> f64 {
    match width {
        FloatWidth::F16 => f16::from_bits(bits.get() as u16).to_f64(),
        FloatWidth::F32 => f32::from_bits(bits.get() as u32) as f64,
        FloatWidth::F64 => f64::from_bits(bits.get()),
    }
}
