// File:    render.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Renders a 64-bit value as a fixed run of base64-alphabet characters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Fixed-width base64-alphabet rendering.
//!
//! This is not standard base64: the value is consumed six bits at a time from
//! the low end, for exactly ten sextets, so the top four bits of the input
//! never reach the output. There is no padding character.

/// The 64-character alphabet, in standard base64 order.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The fixed length of every rendered string.
pub const RENDERED_LEN: usize = 10;

/// Renders `value` as a 10-character string over [`BASE64_ALPHABET`].
///
/// Each iteration looks up the low six bits and shifts right by six, so the
/// first output character holds the least significant sextet. The lookup
/// index is masked to `0..64` and can never be out of range.
#[must_use]
pub fn render_base64(value: u64) -> String {
    let mut rendered = String::with_capacity(RENDERED_LEN);
    let mut rest = value;
    for _ in 0..RENDERED_LEN {
        rendered.push(char::from(BASE64_ALPHABET[(rest & 0x3f) as usize]));
        rest >>= 6;
    }
    rendered
}
