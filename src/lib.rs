// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unicode character database queries and text algorithms over sequences of
//! scalar values.
//!
//! This crate answers per-code-point property queries (general category,
//! scripts, blocks, binary and derived core properties, combining classes),
//! applies the default and language-tailored case algorithms of Unicode
//! chapter 3, normalizes text into the four normalization forms of
//! [UAX #15](https://www.unicode.org/reports/tr15/), and segments text into
//! grapheme clusters, words, and sentences according to
//! [UAX #29](https://www.unicode.org/reports/tr29/).
//!
//! All operations are pure functions over `char` slices: they accept
//! read-only input, never perform I/O, and the backing property tables are
//! immutable `static` data, so every function may be called freely from
//! multiple threads.
//!
//! ```rust
//! use unicode_scalar::{case, grapheme, normalize, props};
//!
//! // A + COMBINING DIAERESIS composes to Ä.
//! assert_eq!(normalize::to_nfc(&['A', '\u{0308}']), ['\u{00C4}']);
//!
//! // One user-perceived character, two scalar values.
//! assert_eq!(grapheme::grapheme_count(&['a', '\u{0308}']), 1);
//!
//! // Sharp s uppercases to SS.
//! assert_eq!(case::to_uppercase(&['\u{00DF}'], None), ['S', 'S']);
//!
//! assert_eq!(props::general_category('1'), props::GeneralCategory::DecimalNumber);
//! ```
//!
//! Encoding conversion is out of scope: callers decode UTF-8/UTF-16 into
//! scalar values before querying, using `str::chars` or an equivalent.

#![no_std]
#![deny(missing_docs, unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod case;
pub mod combining;
pub mod grapheme;
mod hangul;
pub mod normalize;
pub mod props;
pub mod sentence;
mod tables;
pub mod word;

pub use crate::case::Language;
pub use crate::props::{
    Block, EmojiProperty, GeneralCategory, GraphemeClusterBreak, Script, SentenceBreak, WordBreak,
};
