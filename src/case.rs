// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The default case algorithms of Unicode Section 3.13: simple and full
//! case mapping, case folding, and the caseless match relations.
//!
//! Full mappings resolve, in order: a special-casing record whose language
//! tag and casing context both match, the unconditional multi-character
//! default, and finally the simple single-character mapping. The casing
//! contexts (Final_Sigma, After_Soft_Dotted, More_Above, Before_Dot,
//! After_I) are evaluated against the original input around the mapped
//! position, so `Σ` at the end of a word lowercases to `ς` while `Σ` in the
//! middle lowercases to `σ`.

use alloc::vec::Vec;

use crate::normalize;
use crate::props;
use crate::tables;
use crate::word;

/// Language tags honoured by the special-casing data. Every other language
/// behaves like the root locale.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    /// `tr`: dotted and dotless i.
    Turkish,
    /// `az`: same i conventions as Turkish.
    Azerbaijani,
    /// `lt`: retains the dot above under accents.
    Lithuanian,
}

impl Language {
    /// Parses a BCP 47 primary language subtag; tags without tailored
    /// casing data answer `None`.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "tr" => Some(Language::Turkish),
            "az" => Some(Language::Azerbaijani),
            "lt" => Some(Language::Lithuanian),
            _ => None,
        }
    }

    /// The BCP 47 subtag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::Azerbaijani => "az",
            Language::Lithuanian => "lt",
        }
    }
}

/// Casing contexts of Unicode Table 3-17, as carried by the
/// special-casing records.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum CasingContext {
    FinalSigma,
    AfterSoftDotted,
    MoreAbove,
    NotBeforeDot,
    AfterI,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum MappingKind {
    Lower,
    Title,
    Upper,
}

impl tables::case_mapping::SpecialCasing {
    fn mapping(&self, kind: MappingKind) -> &'static [char] {
        match kind {
            MappingKind::Lower => self.lower,
            MappingKind::Title => self.title,
            MappingKind::Upper => self.upper,
        }
    }
}

impl tables::case_mapping::SpecialDefault {
    fn mapping(&self, kind: MappingKind) -> &'static [char] {
        match kind {
            MappingKind::Lower => self.lower,
            MappingKind::Title => self.title,
            MappingKind::Upper => self.upper,
        }
    }
}

fn simple_mapping(c: char, kind: MappingKind) -> char {
    match tables::case_mapping::simple_mapping(c as u32) {
        Some((upper, lower, title)) => match kind {
            MappingKind::Upper => upper,
            MappingKind::Lower => lower,
            MappingKind::Title => title,
        },
        None => c,
    }
}

/// Simple_Uppercase_Mapping, defaulting to `c` itself.
pub fn simple_uppercase_mapping(c: char) -> char {
    simple_mapping(c, MappingKind::Upper)
}

/// Simple_Lowercase_Mapping, defaulting to `c` itself.
pub fn simple_lowercase_mapping(c: char) -> char {
    simple_mapping(c, MappingKind::Lower)
}

/// Simple_Titlecase_Mapping, defaulting to `c` itself.
pub fn simple_titlecase_mapping(c: char) -> char {
    simple_mapping(c, MappingKind::Title)
}

/// Simple (single-code-point) case folding: the S entry if present,
/// otherwise the common C entry, otherwise `c` itself.
pub fn simple_case_folding(c: char) -> char {
    tables::case_mapping::fold_simple(c as u32)
        .or_else(|| tables::case_mapping::fold_common(c as u32))
        .unwrap_or(c)
}

// Characters of combining class 0 or 230 terminate the scans of the
// accent-sensitive contexts; everything else is transparent.
fn stops_accent_scan(c: char) -> bool {
    matches!(props::combining_class(c), 0 | 230)
}

// Final_Sigma: a cased character before (through case-ignorables), no
// cased character after (through case-ignorables).
fn is_final_sigma(s: &[char], i: usize) -> bool {
    let mut pos = i;
    loop {
        if pos == 0 {
            return false;
        }
        pos -= 1;
        if !props::is_case_ignorable(s[pos]) {
            break;
        }
    }
    if !props::is_cased(s[pos]) {
        return false;
    }

    let mut pos = i + 1;
    while pos < s.len() && props::is_case_ignorable(s[pos]) {
        pos += 1;
    }
    !(pos < s.len() && props::is_cased(s[pos]))
}

// After_Soft_Dotted: a Soft_Dotted character before, with no intervening
// character of class 0 or 230.
fn is_after_soft_dotted(s: &[char], i: usize) -> bool {
    let mut pos = i;
    while pos > 0 {
        pos -= 1;
        if stops_accent_scan(s[pos]) {
            return props::is_soft_dotted(s[pos]);
        }
    }
    false
}

// More_Above: a character of class 230 follows, with no intervening
// character of class 0 or 230.
fn is_more_above(s: &[char], i: usize) -> bool {
    let mut pos = i + 1;
    while pos < s.len() {
        match props::combining_class(s[pos]) {
            230 => return true,
            0 => return false,
            _ => pos += 1,
        }
    }
    false
}

// Before_Dot: COMBINING DOT ABOVE follows, with no intervening character
// of class 0 or 230.
fn is_before_dot(s: &[char], i: usize) -> bool {
    let mut pos = i + 1;
    while pos < s.len() {
        if stops_accent_scan(s[pos]) {
            return s[pos] == '\u{0307}';
        }
        pos += 1;
    }
    false
}

// After_I: an uppercase I before, with no intervening character of class
// 0 or 230.
fn is_after_i(s: &[char], i: usize) -> bool {
    let mut pos = i;
    while pos > 0 {
        pos -= 1;
        if stops_accent_scan(s[pos]) {
            return s[pos] == 'I';
        }
    }
    false
}

fn context_matches(context: CasingContext, s: &[char], i: usize) -> bool {
    match context {
        CasingContext::FinalSigma => is_final_sigma(s, i),
        CasingContext::AfterSoftDotted => is_after_soft_dotted(s, i),
        CasingContext::MoreAbove => is_more_above(s, i),
        CasingContext::NotBeforeDot => !is_before_dot(s, i),
        CasingContext::AfterI => is_after_i(s, i),
    }
}

fn full_case_mapping(
    s: &[char],
    i: usize,
    lang: Option<Language>,
    kind: MappingKind,
    out: &mut Vec<char>,
) {
    let Some(&c) = s.get(i) else { return };

    for record in tables::case_mapping::special_casings(c as u32) {
        let language_matches = match record.language {
            None => true,
            Some(required) => lang == Some(required),
        };
        if !language_matches {
            continue;
        }
        let context_ok = match record.context {
            None => true,
            Some(context) => context_matches(context, s, i),
        };
        if !context_ok {
            continue;
        }
        out.extend_from_slice(record.mapping(kind));
        return;
    }

    if let Some(default) = tables::case_mapping::special_default(c as u32) {
        out.extend_from_slice(default.mapping(kind));
        return;
    }

    out.push(simple_mapping(c, kind));
}

/// toUppercase (R1): maps each character to its full uppercase mapping.
pub fn to_uppercase(s: &[char], lang: Option<Language>) -> Vec<char> {
    let mut out = Vec::with_capacity(s.len());
    for i in 0..s.len() {
        full_case_mapping(s, i, lang, MappingKind::Upper, &mut out);
    }
    out
}

/// toLowercase (R2): maps each character to its full lowercase mapping.
pub fn to_lowercase(s: &[char], lang: Option<Language>) -> Vec<char> {
    let mut out = Vec::with_capacity(s.len());
    for i in 0..s.len() {
        full_case_mapping(s, i, lang, MappingKind::Lower, &mut out);
    }
    out
}

/// toTitlecase (R3): titlecases the first cased character after every word
/// boundary and lowercases the rest of the word.
pub fn to_titlecase(s: &[char], lang: Option<Language>) -> Vec<char> {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        while i < s.len() && !props::is_cased(s[i]) {
            out.push(s[i]);
            i += 1;
        }
        if i == s.len() {
            break;
        }

        full_case_mapping(s, i, lang, MappingKind::Title, &mut out);
        i += 1;

        while i < s.len() && !word::is_word_boundary(s, i) {
            full_case_mapping(s, i, lang, MappingKind::Lower, &mut out);
            i += 1;
        }
    }
    out
}

fn case_fold_char(c: char, turkic: bool, out: &mut Vec<char>) {
    if turkic {
        if let Some(folded) = tables::case_mapping::fold_turkic(c as u32) {
            out.extend_from_slice(folded);
            return;
        }
    }
    if let Some(folded) = tables::case_mapping::fold_full(c as u32) {
        out.extend_from_slice(folded);
        return;
    }
    if let Some(folded) = tables::case_mapping::fold_simple(c as u32) {
        out.push(folded);
        return;
    }
    if let Some(folded) = tables::case_mapping::fold_common(c as u32) {
        out.push(folded);
        return;
    }
    out.push(c);
}

/// toCasefold (R4): maps each character to its full case folding. With
/// `turkic` set, the T entries for the dotted and dotless i apply first.
pub fn to_case_fold(s: &[char], turkic: bool) -> Vec<char> {
    let mut out = Vec::with_capacity(s.len());
    for &c in s {
        case_fold_char(c, turkic, &mut out);
    }
    out
}

/// isUppercase (D140): no character would change under toUppercase.
pub fn is_uppercase(s: &[char]) -> bool {
    !s.iter().any(|&c| props::is_changes_when_uppercased(c))
}

/// isLowercase (D139): no character would change under toLowercase.
pub fn is_lowercase(s: &[char]) -> bool {
    !s.iter().any(|&c| props::is_changes_when_lowercased(c))
}

/// isCasefolded (D142): no character would change under toCasefold.
pub fn is_case_folded(s: &[char]) -> bool {
    !s.iter().any(|&c| props::is_changes_when_casefolded(c))
}

/// isTitlecase (D141): the same word walk as [`to_titlecase`], checking the
/// `Changes_When_*` properties instead of mapping.
pub fn is_titlecase(s: &[char]) -> bool {
    let mut i = 0;
    while i < s.len() {
        while i < s.len() && !props::is_cased(s[i]) {
            if props::is_changes_when_lowercased(s[i]) {
                return false;
            }
            i += 1;
        }
        if i == s.len() {
            break;
        }

        if props::is_changes_when_titlecased(s[i]) {
            return false;
        }
        i += 1;

        while i < s.len() && !word::is_word_boundary(s, i) {
            if props::is_changes_when_lowercased(s[i]) {
                return false;
            }
            i += 1;
        }
    }
    true
}

/// Caseless match (D144): `toCasefold(x) == toCasefold(y)`.
pub fn caseless_match(x: &[char], y: &[char], turkic: bool) -> bool {
    to_case_fold(x, turkic) == to_case_fold(y, turkic)
}

fn canonical_fold(s: &[char], turkic: bool) -> Vec<char> {
    normalize::to_nfd(&to_case_fold(&normalize::to_nfd(s), turkic))
}

/// Canonical caseless match (D145):
/// `NFD(toCasefold(NFD(x))) == NFD(toCasefold(NFD(y)))`.
pub fn canonical_caseless_match(x: &[char], y: &[char], turkic: bool) -> bool {
    canonical_fold(x, turkic) == canonical_fold(y, turkic)
}

fn compatibility_fold(s: &[char], turkic: bool) -> Vec<char> {
    let folded = to_case_fold(&normalize::to_nfd(s), turkic);
    let folded = to_case_fold(&normalize::to_nfkd(&folded), turkic);
    normalize::to_nfkd(&folded)
}

/// Compatibility caseless match (D146):
/// `NFKD(toCasefold(NFKD(toCasefold(NFD(x))))) ==
/// NFKD(toCasefold(NFKD(toCasefold(NFD(y)))))`.
pub fn compatibility_caseless_match(x: &[char], y: &[char], turkic: bool) -> bool {
    compatibility_fold(x, turkic) == compatibility_fold(y, turkic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn simple_mappings_default_to_identity() {
        assert_eq!(simple_uppercase_mapping('a'), 'A');
        assert_eq!(simple_lowercase_mapping('Å'), 'å');
        assert_eq!(simple_titlecase_mapping('ǆ'), 'ǅ');
        assert_eq!(simple_uppercase_mapping('!'), '!');
        assert_eq!(simple_case_folding('ẞ'), 'ß');
        assert_eq!(simple_case_folding('ß'), 'ß');
    }

    #[test]
    fn sharp_s_uppercases_to_double_s() {
        assert_eq!(to_uppercase(&['ß'], None), ['S', 'S']);
        // Casing is not invertible: SS lowercases to ss, not back to ß.
        assert_eq!(to_lowercase(&['S', 'S'], None), ['s', 's']);
    }

    #[test]
    fn final_sigma() {
        // Σ Α Σ: only the trailing sigma takes the final form.
        let input = ['\u{03A3}', '\u{0041}', '\u{03A3}'];
        assert_eq!(
            to_lowercase(&input, None),
            ['\u{03C3}', '\u{0061}', '\u{03C2}']
        );
        // A lone sigma is not final (no cased character before it).
        assert_eq!(to_lowercase(&['\u{03A3}'], None), ['\u{03C3}']);
        // Case-ignorable characters are transparent: "ΟΣ'" keeps the final
        // form before the apostrophe.
        assert_eq!(
            to_lowercase(&['\u{039F}', '\u{03A3}', '\''], None),
            ['\u{03BF}', '\u{03C2}', '\'']
        );
    }

    #[test]
    fn turkish_dotted_i() {
        assert_eq!(to_uppercase(&['i'], Some(Language::Turkish)), ['\u{0130}']);
        assert_eq!(to_uppercase(&['i'], None), ['I']);
        assert_eq!(to_lowercase(&['I'], Some(Language::Turkish)), ['\u{0131}']);
        assert_eq!(to_lowercase(&['I'], None), ['i']);
        // I + combining dot above lowercases to plain i in Turkish: the
        // dotless record does not apply Before_Dot and the dot is removed
        // After_I.
        assert_eq!(
            to_lowercase(&['I', '\u{0307}'], Some(Language::Turkish)),
            ['i']
        );
        // İ lowercases to i in Turkish, i + dot above elsewhere.
        assert_eq!(to_lowercase(&['\u{0130}'], Some(Language::Turkish)), ['i']);
        assert_eq!(to_lowercase(&['\u{0130}'], None), ['i', '\u{0307}']);
    }

    #[test]
    fn lithuanian_dot_retention() {
        // I followed by an accent of class 230 gains an explicit dot.
        assert_eq!(
            to_lowercase(&['I', '\u{0301}'], Some(Language::Lithuanian)),
            ['i', '\u{0307}', '\u{0301}']
        );
        // Bare I lowercases normally: no More_Above context.
        assert_eq!(to_lowercase(&['I'], Some(Language::Lithuanian)), ['i']);
        // The dot above survives after a soft-dotted base.
        assert_eq!(
            to_lowercase(&['i', '\u{0307}'], Some(Language::Lithuanian)),
            ['i', '\u{0307}']
        );
        // Uppercasing removes the retained dot.
        assert_eq!(
            to_uppercase(&['i', '\u{0307}'], Some(Language::Lithuanian)),
            ['I']
        );
    }

    #[test]
    fn titlecase_walks_words() {
        assert_eq!(
            to_titlecase(&chars("hello world"), None),
            chars("Hello World")
        );
        assert_eq!(to_titlecase(&chars("ßeta"), None), chars("Sseta"));
        assert_eq!(to_titlecase(&chars("o'neill"), None), chars("O'neill"));
        assert_eq!(to_titlecase(&chars("ǆungla"), None), chars("ǅungla"));
    }

    #[test]
    fn case_folding_forms() {
        assert_eq!(to_case_fold(&['ß'], false), ['s', 's']);
        assert_eq!(to_case_fold(&['\u{03A3}'], false), ['\u{03C3}']);
        assert_eq!(to_case_fold(&['\u{03C2}'], false), ['\u{03C3}']);
        assert_eq!(to_case_fold(&['\u{FB03}'], false), ['f', 'f', 'i']);
        // Turkic folding keeps the i distinction.
        assert_eq!(to_case_fold(&['I'], true), ['\u{0131}']);
        assert_eq!(to_case_fold(&['\u{0130}'], true), ['i']);
        assert_eq!(to_case_fold(&['I'], false), ['i']);
        assert_eq!(to_case_fold(&['\u{0130}'], false), ['i', '\u{0307}']);
    }

    #[test]
    fn predicates() {
        assert!(is_lowercase(&chars("hello, world!")));
        assert!(!is_lowercase(&chars("Hello")));
        assert!(is_uppercase(&chars("HELLO")));
        assert!(!is_uppercase(&chars("HELLO ß")));
        assert!(is_titlecase(&chars("Hello World")));
        assert!(!is_titlecase(&chars("hello world")));
        assert!(!is_titlecase(&chars("HELLO")));
        assert!(is_case_folded(&chars("hello ss")));
        assert!(!is_case_folded(&chars("Hello ß")));
    }

    #[test]
    fn casing_transforms_are_idempotent_on_their_targets() {
        let samples = [chars("Hello, ßΣ World"), chars("ΟΔΥΣΣΕΥΣ"), chars("")];
        for s in &samples {
            assert!(is_lowercase(&to_lowercase(s, None)));
            assert!(is_uppercase(&to_uppercase(s, None)));
            assert!(is_case_folded(&to_case_fold(s, false)));
            let lower = to_lowercase(s, None);
            assert_eq!(to_lowercase(&lower, None), lower);
            let upper = to_uppercase(s, None);
            assert_eq!(to_uppercase(&upper, None), upper);
        }
    }

    #[test]
    fn caseless_matches() {
        assert!(caseless_match(&chars("Straße"), &chars("STRASSE"), false));
        let s = chars("MASSE");
        assert!(caseless_match(&s, &to_case_fold(&s, false), false));
        // Å as precomposed vs. A + ring: only the canonical match sees
        // them as equal.
        let composed = ['\u{00C5}'];
        let decomposed = ['A', '\u{030A}'];
        assert!(!caseless_match(&composed, &decomposed, false));
        assert!(canonical_caseless_match(&composed, &decomposed, false));
        // The fi ligature case-folds to the letters "fi" outright.
        assert!(caseless_match(&['\u{FB01}'], &['f', 'i'], false));
        // A circled digit has no case folding, so only the compatibility
        // match sees through the enclosing circle.
        let circled = ['\u{2460}'];
        let plain = ['1'];
        assert!(!caseless_match(&circled, &plain, false));
        assert!(!canonical_caseless_match(&circled, &plain, false));
        assert!(compatibility_caseless_match(&circled, &plain, false));
    }
}
