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
 * tps_streamcbor wire format constants
 *
 * Bit layout of the CBOR initial byte (RFC8949, Section 3) and the well-known simple values.
 **************************************************************************************************/

/// Number of bits the major type occupies at the top of the initial byte.
pub const MT_SHIFT: u8 = 5;

/// Mask extracting the additional information from the initial byte.
pub const AI_MASK: u8 = 0x1f;

/// Major type 0: unsigned integer.
pub const MT_UINT: u8 = 0;
/// Major type 1: negative integer.
pub const MT_NINT: u8 = 1;
/// Major type 2: byte string.
pub const MT_BSTR: u8 = 2;
/// Major type 3: text string.
pub const MT_TSTR: u8 = 3;
/// Major type 4: array.
pub const MT_ARRAY: u8 = 4;
/// Major type 5: map.
pub const MT_MAP: u8 = 5;
/// Major type 6: tag.
pub const MT_TAG: u8 = 6;
/// Major type 7: simple values and floats.
pub const MT_SIMPLE: u8 = 7;

/// Largest additional information value that is itself the argument.
pub const AI_IMMEDIATE_MAX: u8 = 23;
/// Additional information: one argument byte follows.
pub const AI_ONE_BYTE: u8 = 24;
/// Additional information: two argument bytes follow.
pub const AI_TWO_BYTES: u8 = 25;
/// Additional information: four argument bytes follow.
pub const AI_FOUR_BYTES: u8 = 26;
/// Additional information: eight argument bytes follow.
pub const AI_EIGHT_BYTES: u8 = 27;
/// Additional information: indefinite length, or `break` under major type 7.
pub const AI_INDEFINITE: u8 = 31;

/// The simple value `false`, in the original encoded-byte convention.
pub const SIMPLE_FALSE: u8 = 0xf4;
/// The simple value `true`, in the original encoded-byte convention.
pub const SIMPLE_TRUE: u8 = 0xf5;
/// The simple value `null`, in the original encoded-byte convention.
pub const SIMPLE_NULL: u8 = 0xf6;
/// The simple value `undefined`, in the original encoded-byte convention. This is the
/// content of a default-constructed [`crate::types::Value`] and of a value whose content
/// has been moved out.
pub const SIMPLE_UNDEFINED: u8 = 0xf7;
