// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Script and Script_Extensions tables compiled from Scripts.txt and
// ScriptExtensions.txt. Code points absent from the extensions table use
// the singleton set of their primary script.

use crate::props::Script::{self, *};

pub(crate) fn lookup(cp: u32) -> Script {
    super::range_value(SCRIPTS, cp).unwrap_or(Unknown)
}

pub(crate) fn extensions(cp: u32) -> Option<&'static [Script]> {
    super::range_value(SCRIPT_EXTENSIONS, cp)
}

/// The singleton extension set of a primary script.
pub(crate) fn singleton(script: Script) -> &'static [Script] {
    match script {
        Arabic => &[Arabic],
        Armenian => &[Armenian],
        Bengali => &[Bengali],
        Bopomofo => &[Bopomofo],
        Braille => &[Braille],
        Cherokee => &[Cherokee],
        Common => &[Common],
        Coptic => &[Coptic],
        Cyrillic => &[Cyrillic],
        Devanagari => &[Devanagari],
        Ethiopic => &[Ethiopic],
        Georgian => &[Georgian],
        Greek => &[Greek],
        Gujarati => &[Gujarati],
        Gurmukhi => &[Gurmukhi],
        Han => &[Han],
        Hangul => &[Hangul],
        Hebrew => &[Hebrew],
        Hiragana => &[Hiragana],
        Inherited => &[Inherited],
        Kannada => &[Kannada],
        Katakana => &[Katakana],
        Khmer => &[Khmer],
        Lao => &[Lao],
        Latin => &[Latin],
        Malayalam => &[Malayalam],
        Mongolian => &[Mongolian],
        Myanmar => &[Myanmar],
        Ogham => &[Ogham],
        Oriya => &[Oriya],
        Runic => &[Runic],
        Sinhala => &[Sinhala],
        Syriac => &[Syriac],
        Tamil => &[Tamil],
        Telugu => &[Telugu],
        Thaana => &[Thaana],
        Thai => &[Thai],
        Tibetan => &[Tibetan],
        Unknown => &[Unknown],
        Yi => &[Yi],
    }
}

#[rustfmt::skip]
static SCRIPTS: &[(u32, u32, Script)] = &[
    (0x0000, 0x0040, Common),
    (0x0041, 0x005A, Latin),
    (0x005B, 0x0060, Common),
    (0x0061, 0x007A, Latin),
    (0x007B, 0x00A9, Common),
    (0x00AA, 0x00AA, Latin),
    (0x00AB, 0x00B9, Common),
    (0x00BA, 0x00BA, Latin),
    (0x00BB, 0x00BF, Common),
    (0x00C0, 0x00D6, Latin),
    (0x00D7, 0x00D7, Common),
    (0x00D8, 0x00F6, Latin),
    (0x00F7, 0x00F7, Common),
    (0x00F8, 0x02B8, Latin),
    (0x02B9, 0x02DF, Common),
    (0x02E0, 0x02E4, Latin),
    (0x02E5, 0x02E9, Common),
    (0x02EA, 0x02EB, Bopomofo),
    (0x02EC, 0x02FF, Common),
    (0x0300, 0x036F, Inherited),
    (0x0370, 0x0373, Greek),
    (0x0374, 0x0374, Common),
    (0x0375, 0x0377, Greek),
    (0x037A, 0x037D, Greek),
    (0x037E, 0x037E, Common),
    (0x037F, 0x037F, Greek),
    (0x0384, 0x0384, Greek),
    (0x0385, 0x0385, Common),
    (0x0386, 0x0386, Greek),
    (0x0387, 0x0387, Common),
    (0x0388, 0x03E1, Greek),
    (0x03E2, 0x03EF, Coptic),
    (0x03F0, 0x03FF, Greek),
    (0x0400, 0x0484, Cyrillic),
    (0x0485, 0x0486, Inherited),
    (0x0487, 0x052F, Cyrillic),
    (0x0531, 0x058F, Armenian),
    (0x0591, 0x05F4, Hebrew),
    (0x0600, 0x060B, Arabic),
    (0x060C, 0x060C, Common),
    (0x060D, 0x061A, Arabic),
    (0x061B, 0x061B, Common),
    (0x061C, 0x061E, Arabic),
    (0x061F, 0x061F, Common),
    (0x0620, 0x063F, Arabic),
    (0x0640, 0x0640, Common),
    (0x0641, 0x064A, Arabic),
    (0x064B, 0x0655, Inherited),
    (0x0656, 0x066F, Arabic),
    (0x0670, 0x0670, Inherited),
    (0x0671, 0x06DC, Arabic),
    (0x06DE, 0x06FF, Arabic),
    (0x0700, 0x074A, Syriac),
    (0x0750, 0x077F, Arabic),
    (0x0780, 0x07BF, Thaana),
    (0x0900, 0x0950, Devanagari),
    (0x0951, 0x0952, Inherited),
    (0x0953, 0x0963, Devanagari),
    (0x0964, 0x0965, Common),
    (0x0966, 0x097F, Devanagari),
    (0x0980, 0x09FF, Bengali),
    (0x0E01, 0x0E3A, Thai),
    (0x0E3F, 0x0E3F, Common),
    (0x0E40, 0x0E5B, Thai),
    (0x10A0, 0x10FA, Georgian),
    (0x10FB, 0x10FB, Common),
    (0x10FC, 0x10FF, Georgian),
    (0x1100, 0x11FF, Hangul),
    (0x1680, 0x169C, Ogham),
    (0x16A0, 0x16EA, Runic),
    (0x1780, 0x17F9, Khmer),
    (0x1800, 0x1801, Mongolian),
    (0x1802, 0x1803, Common),
    (0x1804, 0x1804, Mongolian),
    (0x1805, 0x1805, Common),
    (0x1806, 0x18AA, Mongolian),
    (0x1DC0, 0x1DFF, Inherited),
    (0x1E00, 0x1EFF, Latin),
    (0x1F00, 0x1FFE, Greek),
    (0x2000, 0x200B, Common),
    (0x200C, 0x200D, Inherited),
    (0x200E, 0x2064, Common),
    (0x2066, 0x2070, Common),
    (0x2071, 0x2071, Latin),
    (0x2074, 0x207E, Common),
    (0x207F, 0x207F, Latin),
    (0x2080, 0x208E, Common),
    (0x2090, 0x209C, Latin),
    (0x20A0, 0x20BF, Common),
    (0x20D0, 0x20F0, Inherited),
    (0x2100, 0x2125, Common),
    (0x2126, 0x2126, Greek),
    (0x2127, 0x2129, Common),
    (0x212A, 0x212B, Latin),
    (0x212C, 0x2131, Common),
    (0x2132, 0x2132, Latin),
    (0x2133, 0x214D, Common),
    (0x214E, 0x214E, Latin),
    (0x2150, 0x215F, Common),
    (0x2160, 0x2188, Latin),
    (0x2190, 0x245F, Common),
    (0x2460, 0x27FF, Common),
    (0x2800, 0x28FF, Braille),
    (0x2900, 0x2BFF, Common),
    (0x2E80, 0x2FD5, Han),
    (0x3000, 0x3004, Common),
    (0x3005, 0x3005, Han),
    (0x3006, 0x3006, Common),
    (0x3007, 0x3007, Han),
    (0x3008, 0x3020, Common),
    (0x3021, 0x3029, Han),
    (0x302A, 0x302D, Inherited),
    (0x302E, 0x302F, Hangul),
    (0x3030, 0x3037, Common),
    (0x3038, 0x303B, Han),
    (0x303C, 0x303F, Common),
    (0x3041, 0x3096, Hiragana),
    (0x3099, 0x309A, Inherited),
    (0x309B, 0x309C, Common),
    (0x309D, 0x309F, Hiragana),
    (0x30A0, 0x30A0, Common),
    (0x30A1, 0x30FA, Katakana),
    (0x30FB, 0x30FC, Common),
    (0x30FD, 0x30FF, Katakana),
    (0x3105, 0x312F, Bopomofo),
    (0x3131, 0x318E, Hangul),
    (0x31F0, 0x31FF, Katakana),
    (0x3400, 0x4DBF, Han),
    (0x4E00, 0x9FFF, Han),
    (0xA000, 0xA4CF, Yi),
    (0xA960, 0xA97C, Hangul),
    (0xAC00, 0xD7FB, Hangul),
    (0xF900, 0xFAD9, Han),
    (0xFB00, 0xFB06, Latin),
    (0xFB13, 0xFB17, Armenian),
    (0xFB1D, 0xFB4F, Hebrew),
    (0xFE00, 0xFE0F, Inherited),
    (0xFE20, 0xFE2D, Inherited),
    (0xFF01, 0xFF20, Common),
    (0xFF21, 0xFF3A, Latin),
    (0xFF3B, 0xFF40, Common),
    (0xFF41, 0xFF5A, Latin),
    (0xFF5B, 0xFF65, Common),
    (0xFF66, 0xFF9F, Katakana),
    (0xFFA0, 0xFFBE, Hangul),
    (0xFFE0, 0xFFEE, Common),
    (0x1F000, 0x1FAFF, Common),
    (0x20000, 0x2A6DF, Han),
    (0xE0001, 0xE007F, Common),
    (0xE0100, 0xE01EF, Inherited),
];

#[rustfmt::skip]
static SCRIPT_EXTENSIONS: &[(u32, u32, &[Script])] = &[
    (0x060C, 0x060C, &[Arabic, Syriac, Thaana]),
    (0x061B, 0x061B, &[Arabic, Syriac, Thaana]),
    (0x061F, 0x061F, &[Arabic, Syriac, Thaana]),
    (0x0640, 0x0640, &[Arabic, Mongolian, Syriac]),
    (0x0951, 0x0952, &[Bengali, Devanagari, Tamil, Telugu]),
    (0x0964, 0x0965, &[Bengali, Devanagari, Gujarati, Gurmukhi, Kannada, Malayalam, Oriya, Tamil, Telugu]),
    (0x3001, 0x3002, &[Bopomofo, Han, Hangul, Hiragana, Katakana, Yi]),
    (0x3006, 0x3006, &[Han]),
    (0x3008, 0x3011, &[Bopomofo, Han, Hangul, Hiragana, Katakana, Yi]),
    (0x3031, 0x3035, &[Hiragana, Katakana]),
    (0x3099, 0x309A, &[Hiragana, Katakana]),
    (0x309B, 0x309C, &[Hiragana, Katakana]),
    (0x30A0, 0x30A0, &[Hiragana, Katakana]),
    (0x30FB, 0x30FC, &[Hiragana, Katakana]),
    (0xFF65, 0xFF65, &[Hiragana, Katakana]),
];
