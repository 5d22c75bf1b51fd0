// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Allocation block range table compiled from Blocks.txt.

use crate::props::Block::{self, *};

pub(crate) fn lookup(cp: u32) -> Block {
    super::range_value(BLOCKS, cp).unwrap_or(NoBlock)
}

#[rustfmt::skip]
static BLOCKS: &[(u32, u32, Block)] = &[
    (0x0000, 0x007F, BasicLatin),
    (0x0080, 0x00FF, Latin1Supplement),
    (0x0100, 0x017F, LatinExtendedA),
    (0x0180, 0x024F, LatinExtendedB),
    (0x0250, 0x02AF, IpaExtensions),
    (0x02B0, 0x02FF, SpacingModifierLetters),
    (0x0300, 0x036F, CombiningDiacriticalMarks),
    (0x0370, 0x03FF, GreekAndCoptic),
    (0x0400, 0x04FF, Cyrillic),
    (0x0500, 0x052F, CyrillicSupplement),
    (0x0530, 0x058F, Armenian),
    (0x0590, 0x05FF, Hebrew),
    (0x0600, 0x06FF, Arabic),
    (0x0700, 0x074F, Syriac),
    (0x0780, 0x07BF, Thaana),
    (0x0900, 0x097F, Devanagari),
    (0x0980, 0x09FF, Bengali),
    (0x0B80, 0x0BFF, Tamil),
    (0x0E00, 0x0E7F, Thai),
    (0x0E80, 0x0EFF, Lao),
    (0x0F00, 0x0FFF, Tibetan),
    (0x1000, 0x109F, Myanmar),
    (0x10A0, 0x10FF, Georgian),
    (0x1100, 0x11FF, HangulJamo),
    (0x1200, 0x137F, Ethiopic),
    (0x13A0, 0x13FF, Cherokee),
    (0x1680, 0x169F, Ogham),
    (0x16A0, 0x16FF, Runic),
    (0x1780, 0x17FF, Khmer),
    (0x1800, 0x18AF, Mongolian),
    (0x1E00, 0x1EFF, LatinExtendedAdditional),
    (0x1F00, 0x1FFF, GreekExtended),
    (0x2000, 0x206F, GeneralPunctuation),
    (0x2070, 0x209F, SuperscriptsAndSubscripts),
    (0x20A0, 0x20CF, CurrencySymbols),
    (0x20D0, 0x20FF, CombiningDiacriticalMarksForSymbols),
    (0x2100, 0x214F, LetterlikeSymbols),
    (0x2150, 0x218F, NumberForms),
    (0x2190, 0x21FF, Arrows),
    (0x2200, 0x22FF, MathematicalOperators),
    (0x2300, 0x23FF, MiscellaneousTechnical),
    (0x2460, 0x24FF, EnclosedAlphanumerics),
    (0x25A0, 0x25FF, GeometricShapes),
    (0x2600, 0x26FF, MiscellaneousSymbols),
    (0x2700, 0x27BF, Dingbats),
    (0x3000, 0x303F, CjkSymbolsAndPunctuation),
    (0x3040, 0x309F, Hiragana),
    (0x30A0, 0x30FF, Katakana),
    (0x3100, 0x312F, Bopomofo),
    (0x3130, 0x318F, HangulCompatibilityJamo),
    (0x31F0, 0x31FF, KatakanaPhoneticExtensions),
    (0x3400, 0x4DBF, CjkUnifiedIdeographsExtensionA),
    (0x4E00, 0x9FFF, CjkUnifiedIdeographs),
    (0xA000, 0xA48F, YiSyllables),
    (0xA490, 0xA4CF, YiRadicals),
    (0xA960, 0xA97F, HangulJamoExtendedA),
    (0xAC00, 0xD7AF, HangulSyllables),
    (0xD7B0, 0xD7FF, HangulJamoExtendedB),
    (0xD800, 0xDB7F, HighSurrogates),
    (0xDC00, 0xDFFF, LowSurrogates),
    (0xE000, 0xF8FF, PrivateUseArea),
    (0xF900, 0xFAFF, CjkCompatibilityIdeographs),
    (0xFB00, 0xFB4F, AlphabeticPresentationForms),
    (0xFB50, 0xFDFF, ArabicPresentationFormsA),
    (0xFE00, 0xFE0F, VariationSelectors),
    (0xFE20, 0xFE2F, CombiningHalfMarks),
    (0xFE30, 0xFE4F, CjkCompatibilityForms),
    (0xFE50, 0xFE6F, SmallFormVariants),
    (0xFE70, 0xFEFF, ArabicPresentationFormsB),
    (0xFF00, 0xFFEF, HalfwidthAndFullwidthForms),
    (0xFFF0, 0xFFFF, Specials),
    (0x1F000, 0x1F02F, MahjongTiles),
    (0x1F030, 0x1F09F, DominoTiles),
    (0x1F0A0, 0x1F0FF, PlayingCards),
    (0x1F100, 0x1F1FF, EnclosedAlphanumericSupplement),
    (0x1F200, 0x1F2FF, EnclosedIdeographicSupplement),
    (0x1F300, 0x1F5FF, MiscellaneousSymbolsAndPictographs),
    (0x1F600, 0x1F64F, Emoticons),
    (0x1F650, 0x1F67F, OrnamentalDingbats),
    (0x1F680, 0x1F6FF, TransportAndMapSymbols),
    (0x1F900, 0x1F9FF, SupplementalSymbolsAndPictographs),
    (0x1FA70, 0x1FAFF, SymbolsAndPictographsExtendedA),
    (0x20000, 0x2A6DF, CjkUnifiedIdeographsExtensionB),
    (0xE0000, 0xE007F, Tags),
    (0xE0100, 0xE01EF, VariationSelectorsSupplement),
    (0xF0000, 0xFFFFF, SupplementaryPrivateUseAreaA),
    (0x100000, 0x10FFFF, SupplementaryPrivateUseAreaB),
];
