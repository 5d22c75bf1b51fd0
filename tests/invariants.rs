// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cross-module laws: idempotence of the normalization forms and casing
//! transforms, agreement between the predicates and the transforms, and
//! the caseless match relations, exercised over a mixed corpus.

use unicode_scalar::{case, normalize};

fn corpus() -> Vec<Vec<char>> {
    [
        "The quick brown fox",
        "Straße STRASSE straße",
        "ΟΔΥΣΣΕΥΣ Ὀδυσσεύς οδυσσευς",
        "a\u{0301}e\u{0323}\u{0302} ä Å \u{212B}",
        "\u{FB00}\u{FB01}\u{FB03} ffi",
        "\u{1100}\u{1161}\u{11A8} \u{AC01} 한글",
        "i I \u{0130}",
        "№ 3.2, fig. 7; §4 — done.",
        "",
    ]
    .iter()
    .map(|s| s.chars().collect())
    .collect()
}

#[test]
fn normalization_is_idempotent() {
    for s in corpus() {
        let forms = [
            normalize::to_nfd(&s),
            normalize::to_nfc(&s),
            normalize::to_nfkd(&s),
            normalize::to_nfkc(&s),
        ];
        assert_eq!(normalize::to_nfd(&forms[0]), forms[0]);
        assert_eq!(normalize::to_nfc(&forms[1]), forms[1]);
        assert_eq!(normalize::to_nfkd(&forms[2]), forms[2]);
        assert_eq!(normalize::to_nfkc(&forms[3]), forms[3]);
        // Composing an already-decomposed string gives NFC directly.
        assert_eq!(normalize::to_nfc(&forms[0]), forms[1]);
        // The checks agree with the transforms.
        assert!(normalize::is_nfd(&forms[0]));
        assert!(normalize::is_nfc(&forms[1]));
        assert!(normalize::is_nfkd(&forms[2]));
        assert!(normalize::is_nfkc(&forms[3]));
    }
}

#[test]
fn casing_transforms_reach_fixpoints() {
    for s in corpus() {
        let lower = case::to_lowercase(&s, None);
        let upper = case::to_uppercase(&s, None);
        let folded = case::to_case_fold(&s, false);
        assert!(case::is_lowercase(&lower), "{lower:?}");
        assert!(case::is_uppercase(&upper), "{upper:?}");
        assert!(case::is_case_folded(&folded), "{folded:?}");
        assert_eq!(case::to_lowercase(&lower, None), lower);
        assert_eq!(case::to_uppercase(&upper, None), upper);
        assert_eq!(case::to_case_fold(&folded, false), folded);
        // Folding is insensitive to case.
        assert_eq!(case::to_case_fold(&lower, false), folded);
        assert_eq!(case::to_case_fold(&upper, false), folded);
    }
}

#[test]
fn every_string_caselessly_matches_its_own_folding() {
    for s in corpus() {
        let folded = case::to_case_fold(&s, false);
        assert!(case::caseless_match(&s, &folded, false));
        assert!(case::canonical_caseless_match(&s, &folded, false));
        assert!(case::compatibility_caseless_match(&s, &folded, false));
    }
}

#[test]
fn case_fold_then_nfd_is_stable() {
    // Folding followed by NFD reaches a fixed point after one round.
    for s in corpus() {
        let round = |x: &[char]| normalize::to_nfd(&case::to_case_fold(x, false));
        let once = round(&s);
        assert_eq!(round(&once), once, "{s:?}");
    }
}

#[test]
fn titlecase_produces_titlecase() {
    for text in ["hello world", "ǆungla i ǉeto", "ßeta tests"] {
        let s: Vec<char> = text.chars().collect();
        let titled = case::to_titlecase(&s, None);
        assert!(case::is_titlecase(&titled), "{titled:?}");
        assert_eq!(case::to_titlecase(&titled, None), titled);
    }
}
