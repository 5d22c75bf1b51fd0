// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Segmentation cases in the UCD break-test notation: `÷` marks a
//! boundary, `×` forbids one, code points are hex. Example:
//! `÷ 0061 × 0308 ÷ 0062 ÷`.

use unicode_scalar::{grapheme, sentence, word};

struct TestCase {
    chars: Vec<char>,
    breaks: Vec<usize>,
}

fn parse(line: &str) -> TestCase {
    let mut chars = Vec::new();
    let mut breaks = Vec::new();
    for (count, item) in line.split_ascii_whitespace().enumerate() {
        if count % 2 == 1 {
            let cp = u32::from_str_radix(item, 16).unwrap();
            chars.push(char::from_u32(cp).unwrap());
        } else if item == "\u{00F7}" {
            breaks.push(chars.len());
        } else {
            assert_eq!(item, "\u{00D7}", "bad notation: {line}");
        }
    }
    TestCase { chars, breaks }
}

fn run(lines: &[&str], is_boundary: fn(&[char], usize) -> bool, which: &str) {
    for line in lines {
        let case = parse(line);
        let got: Vec<usize> = (0..=case.chars.len())
            .filter(|&i| is_boundary(&case.chars, i))
            .collect();
        assert_eq!(got, case.breaks, "{which} break mismatch for: {line}");
    }
}

#[test]
fn grapheme_cluster_breaks() {
    run(
        &[
            "÷ 0020 ÷ 0020 ÷",
            "÷ 000D × 000A ÷",
            "÷ 0061 ÷ 000D × 000A ÷ 0062 ÷",
            "÷ 0061 × 0308 ÷ 0062 ÷",
            "÷ 0061 × 0308 × 0301 ÷ 0062 ÷",
            "÷ 0061 × 200D ÷ 0062 ÷",
            "÷ 1F1FA × 1F1F8 ÷ 1F1FA × 1F1F8 ÷",
            "÷ 1F1FA × 1F1F8 ÷ 1F1FA ÷",
            "÷ 0061 ÷ 1F1FA × 1F1F8 ÷ 0062 ÷",
            "÷ 1100 × 1161 × 11A8 ÷ AC00 ÷",
            "÷ AC00 × 11A8 ÷ 1100 × 1161 ÷",
            "÷ AC01 × 11A8 ÷",
            "÷ 0600 × 0030 ÷",
            "÷ 0061 ÷ 0600 × 0062 ÷",
            "÷ 1F469 × 1F3FB × 200D × 1F469 ÷",
            "÷ 1F469 × 200D × 1F680 ÷ 1F680 ÷",
            "÷ 000A ÷ 0308 ÷",
            "÷ 0915 × 093E ÷ 0915 ÷",
            "÷ 0061 × FE0F ÷ 0062 ÷",
        ],
        grapheme::is_grapheme_boundary,
        "grapheme",
    );
}

#[test]
fn word_breaks() {
    run(
        &[
            "÷ 0061 × 0062 ÷ 0020 ÷ 0063 ÷",
            "÷ 0064 × 006F × 006E × 0027 × 0074 ÷",
            "÷ 0061 × 003A × 0062 ÷",
            "÷ 0031 × 002C × 0032 ÷",
            "÷ 0031 ÷ 002C ÷",
            "÷ 0031 × 002E × 0032 × 002C × 0033 ÷",
            "÷ 0061 × 0301 × 0062 ÷",
            "÷ 0031 × 00AD × 0032 ÷",
            "÷ 05D0 × 0022 × 05D0 ÷",
            "÷ 0061 ÷ 0022 ÷ 0061 ÷",
            "÷ 05D0 × 0027 ÷",
            "÷ 0041 × 0031 ÷",
            "÷ 0031 × 0041 ÷",
            "÷ 30A2 × 30A3 ÷ 0020 ÷ 0061 ÷",
            "÷ 0061 × 005F × 0031 ÷",
            "÷ 0061 ÷ 000A ÷ 0062 ÷",
            "÷ 000D × 000A ÷",
            "÷ 0020 × 0020 ÷ 0061 ÷",
            "÷ 1F1FA × 1F1F8 ÷ 1F1FA × 1F1F8 ÷",
            "÷ 200D × 1F680 ÷",
        ],
        word::is_word_boundary,
        "word",
    );
}

#[test]
fn sentence_breaks() {
    run(
        &[
            "÷ 0061 × 002E × 0020 ÷ 0042 ÷",
            "÷ 0061 × 002E × 0020 × 0062 ÷",
            "÷ 0061 × 002E × 0041 ÷",
            "÷ 0033 × 002E × 0032 ÷",
            "÷ 0061 × 0021 × 0022 × 0020 ÷ 0062 ÷",
            "÷ 0061 × 002E × 002E × 0020 ÷ 0041 ÷",
            "÷ 0061 × 000D × 000A ÷ 0062 ÷",
            "÷ 0061 × 2029 ÷ 0062 ÷",
            "÷ 4E00 × 3002 ÷ 4E8C ÷",
            "÷ 0065 × 0074 × 0063 × 002E × 0020 × 0079 ÷",
            "÷ 0061 × 002E × 003A × 0020 × 0062 ÷",
            "÷ 0061 × 0301 × 002E × 0020 ÷ 0042 ÷",
            "÷ 0061 × 002E × 0029 × 0020 ÷ 0042 ÷",
            "÷ 0021 × 0020 × 0020 ÷ 0041 ÷",
        ],
        sentence::is_sentence_boundary,
        "sentence",
    );
}

#[test]
fn spans_partition_the_input() {
    let samples = [
        "The quick (\"brown\") fox can't jump 32.3 feet, right?",
        "a\u{0301}bc déf 🇺🇸🇺🇸 한글 カタカナ",
        "One. Two! Three? (Four.) five\r\nSix\u{2029}",
        "",
    ];
    for text in samples {
        let s: Vec<char> = text.chars().collect();
        for boundaries in [
            grapheme::grapheme_boundaries(&s).collect::<Vec<_>>(),
            word::word_boundaries(&s).collect::<Vec<_>>(),
            sentence::sentence_boundaries(&s).collect::<Vec<_>>(),
        ] {
            assert_eq!(boundaries.first(), Some(&0), "{text:?}");
            if !s.is_empty() {
                assert_eq!(boundaries.last(), Some(&s.len()), "{text:?}");
            }
            assert!(
                boundaries.windows(2).all(|w| w[0] < w[1]),
                "spans must be non-overlapping and increasing: {text:?}"
            );
        }
    }
}
