// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sentence boundaries, rules SB1-SB998 of
//! [UAX #29](https://www.unicode.org/reports/tr29/#Sentence_Boundaries).
//!
//! The contextual rules look leftwards through the pattern
//! `SATerm Close* Sp*` (stripping the trailing runs to find the effective
//! terminator) and, for SB8, scan forward to the first character that
//! classifies as letter, terminator, or paragraph separator. Extend and
//! Format characters are transparent throughout (SB5).

use crate::props::{self, SentenceBreak as SB};

fn skipped(class: SB) -> bool {
    matches!(class, SB::Extend | SB::Format)
}

fn prev_skip(s: &[char], i: usize) -> Option<usize> {
    let mut pos = i;
    while pos > 0 {
        pos -= 1;
        if !skipped(props::sentence_break(s[pos])) {
            return Some(pos);
        }
    }
    None
}

fn next_skip(s: &[char], i: usize) -> Option<usize> {
    let mut pos = i + 1;
    while pos < s.len() {
        if !skipped(props::sentence_break(s[pos])) {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

fn is_para_sep(class: SB) -> bool {
    matches!(class, SB::Sep | SB::CR | SB::LF)
}

fn is_sa_term(class: SB) -> bool {
    matches!(class, SB::STerm | SB::ATerm)
}

// Strips a trailing Close* run (and first a Sp* run when `strip_sp` is
// set) to expose the effective terminator of `SATerm Close* Sp*`.
fn effective_left(s: &[char], i: usize, strip_sp: bool) -> Option<SB> {
    let mut pos = prev_skip(s, i);
    if strip_sp {
        while let Some(p) = pos {
            if props::sentence_break(s[p]) != SB::Sp {
                break;
            }
            pos = prev_skip(s, p);
        }
    }
    while let Some(p) = pos {
        if props::sentence_break(s[p]) != SB::Close {
            break;
        }
        pos = prev_skip(s, p);
    }
    pos.map(|p| props::sentence_break(s[p]))
}

/// Whether a sentence boundary lies between `s[i - 1]` and `s[i]`.
/// Positions 0 and `s.len()` are always boundaries.
pub fn is_sentence_boundary(s: &[char], i: usize) -> bool {
    // SB1: sot ÷
    if i == 0 {
        return true;
    }
    // SB2: ÷ eot
    if i >= s.len() {
        return true;
    }

    let before = props::sentence_break(s[i - 1]);
    let after = props::sentence_break(s[i]);

    // SB3: CR × LF
    if before == SB::CR && after == SB::LF {
        return false;
    }
    // SB4: ParaSep ÷
    if is_para_sep(before) {
        return true;
    }
    // SB5: X (Extend | Format)* → X
    if skipped(after) {
        return false;
    }

    let left_pos = prev_skip(s, i);
    let left = left_pos.map(|p| props::sentence_break(s[p]));

    // SB6: ATerm × Numeric
    if left == Some(SB::ATerm) && after == SB::Numeric {
        return false;
    }

    // SB7: (Upper | Lower) ATerm × Upper
    let left2 = left_pos
        .and_then(|p| prev_skip(s, p))
        .map(|p| props::sentence_break(s[p]));
    if matches!(left2, Some(SB::Upper | SB::Lower))
        && left == Some(SB::ATerm)
        && after == SB::Upper
    {
        return false;
    }

    let left_term = effective_left(s, i, true);

    // SB8: ATerm Close* Sp* × (¬(OLetter | Upper | Lower | ParaSep |
    // SATerm))* Lower — forward scan bounded by the first classifying
    // character.
    if left_term == Some(SB::ATerm) {
        let mut pos = i;
        let ahead = loop {
            let class = props::sentence_break(s[pos]);
            if is_para_sep(class)
                || is_sa_term(class)
                || matches!(class, SB::OLetter | SB::Upper | SB::Lower)
            {
                break class;
            }
            match next_skip(s, pos) {
                Some(p) => pos = p,
                None => break class,
            }
        };
        if ahead == SB::Lower {
            return false;
        }
    }

    // SB8a: SATerm Close* Sp* × (SContinue | SATerm)
    if left_term.is_some_and(is_sa_term) && (after == SB::SContinue || is_sa_term(after)) {
        return false;
    }

    // SB9: SATerm Close* × (Close | Sp | ParaSep)
    let left_close = effective_left(s, i, false);
    if left_close.is_some_and(is_sa_term)
        && (matches!(after, SB::Close | SB::Sp) || is_para_sep(after))
    {
        return false;
    }

    // SB10: SATerm Close* Sp* × (Sp | ParaSep)
    if left_term.is_some_and(is_sa_term) && (after == SB::Sp || is_para_sep(after)) {
        return false;
    }

    // SB11: SATerm Close* Sp* ParaSep? ÷ (the ParaSep case is SB4)
    if left_term.is_some_and(is_sa_term) {
        return true;
    }

    // SB998: Any × Any
    false
}

/// Length in code points of the first sentence of `s`; 0 for empty input.
pub fn sentence_length(s: &[char]) -> usize {
    if s.is_empty() {
        return 0;
    }
    (1..s.len())
        .find(|&i| is_sentence_boundary(s, i))
        .unwrap_or(s.len())
}

/// Number of sentences in `s`.
pub fn sentence_count(s: &[char]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < s.len() {
        count += 1;
        i += sentence_length(&s[i..]);
    }
    count
}

/// Returns an iterator over the sentence boundaries of `s`, with the
/// contract of [`crate::grapheme::grapheme_boundaries`].
pub fn sentence_boundaries(s: &[char]) -> SentenceBoundaries<'_> {
    SentenceBoundaries {
        s,
        pos: 0,
        started: false,
    }
}

/// Iterator over sentence boundary indices, created by
/// [`sentence_boundaries`].
#[derive(Clone, Debug)]
pub struct SentenceBoundaries<'s> {
    s: &'s [char],
    pos: usize,
    started: bool,
}

impl Iterator for SentenceBoundaries<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.started {
            self.started = true;
            return Some(0);
        }
        if self.pos >= self.s.len() {
            return None;
        }
        let mut i = self.pos + 1;
        while i < self.s.len() && !is_sentence_boundary(self.s, i) {
            i += 1;
        }
        self.pos = i;
        Some(i)
    }
}

impl core::iter::FusedIterator for SentenceBoundaries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use itertools::Itertools;

    fn segments(text: &str) -> Vec<alloc::string::String> {
        let s: Vec<char> = text.chars().collect();
        sentence_boundaries(&s)
            .tuple_windows()
            .map(|(a, b)| s[a..b].iter().collect())
            .collect()
    }

    #[test]
    fn empty_string() {
        assert_eq!(sentence_boundaries(&[]).collect::<Vec<_>>(), [0]);
        assert_eq!(sentence_count(&[]), 0);
    }

    #[test]
    fn full_stops_split_sentences() {
        assert_eq!(segments("He left. She stayed."), ["He left. ", "She stayed."]);
        assert_eq!(sentence_count(&"One. Two. Three.".chars().collect::<Vec<_>>()), 3);
    }

    #[test]
    fn terminators_keep_trailing_closers_and_spaces() {
        // Closing punctuation and spaces stay with the terminated sentence
        // (SB9/SB10).
        assert_eq!(segments("(Hi.)  Next"), ["(Hi.)  ", "Next"]);
        assert_eq!(segments("\"Stop!\" Go"), ["\"Stop!\" ", "Go"]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        // ATerm followed by lowercase continues the sentence (SB8).
        assert_eq!(segments("etc. and more"), ["etc. and more"]);
        // ATerm between digits continues (SB6).
        assert_eq!(segments("3.2 works"), ["3.2 works"]);
        // Upper ATerm Upper continues (SB7), so acronyms hold together.
        assert_eq!(segments("U.S.A"), ["U.S.A"]);
        // With a space after the period SB7 no longer applies, so an
        // initial before a capitalized surname does split.
        assert_eq!(segments("J. Smith"), ["J. ", "Smith"]);
    }

    #[test]
    fn sb8_scans_across_non_classifying_runs() {
        // Digits and punctuation between the period and the lowercase
        // letter are transparent to SB8.
        assert_eq!(segments("No. 42 is fine"), ["No. 42 is fine"]);
        // Pathological Close*/Sp* runs before the lookahead.
        assert_eq!(segments("x.)))   )) y"), ["x.)))   )) y"]);
        // The same run before an uppercase letter does split.
        assert_eq!(segments("x.)))   Y"), ["x.)))   ", "Y"]);
    }

    #[test]
    fn continuation_punctuation_holds() {
        // SContinue after a terminator (SB8a).
        assert_eq!(segments("Wait... and see"), ["Wait... and see"]);
        assert_eq!(segments("No.: yes"), ["No.: yes"]);
    }

    #[test]
    fn paragraph_separators_always_split() {
        assert_eq!(segments("One\r\nTwo"), ["One\r\n", "Two"]);
        assert_eq!(segments("One\u{2029}Two"), ["One\u{2029}", "Two"]);
        // CR LF is a single separator (SB3).
        let s: Vec<char> = "a\r\nb".chars().collect();
        assert!(!is_sentence_boundary(&s, 2));
    }

    #[test]
    fn ideographic_full_stop() {
        assert_eq!(segments("一。二"), ["一。", "二"]);
    }

    #[test]
    fn marks_are_transparent() {
        // Combining marks never introduce boundaries (SB5).
        assert_eq!(segments("a\u{0301}. b\u{0301}"), ["a\u{0301}. b\u{0301}"]);
    }

    #[test]
    fn boundaries_partition_the_input() {
        let s: Vec<char> = "Hi! (Ok.) No. 3.2 done.".chars().collect();
        let bounds: Vec<usize> = sentence_boundaries(&s).collect();
        assert_eq!(bounds.first(), Some(&0));
        assert_eq!(bounds.last(), Some(&s.len()));
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
    }
}
