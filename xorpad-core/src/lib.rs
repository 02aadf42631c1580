// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for xorpad-core, orchestrating the bit-mask transform, rendering, and cross-checking.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Xorpad Core Library
//!
//! This library provides the core functionality for the xorpad toy cipher:
//! the 64-bit key-mask XOR transform, the fixed-width base64-alphabet
//! rendering of its output, and the cross-check comparator that runs every
//! transform variant over one input pair.
//!
//! None of this is real cryptography. The transform reduces to XOR with the
//! low 32 bits of the key and is kept only for its fully pinned-down,
//! bit-exact behavior.

/// Run the transform variants over one input pair and report the results.
pub mod compare;
/// The bit-mask "encryption" transform and its variants.
pub mod crypto;
/// Fixed-width rendering of a 64-bit value as base64-alphabet characters.
pub mod render;
