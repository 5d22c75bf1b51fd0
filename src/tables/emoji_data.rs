// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Emoji classification range table compiled from emoji-data.txt of
// UTS #51. Each code point carries its most specific classification; the
// segmenters only consult Extended_Pictographic and the modifiers.

use crate::props::EmojiProperty::{self, *};

pub(crate) fn lookup(cp: u32) -> EmojiProperty {
    super::range_value(EMOJI, cp).unwrap_or(EmojiProperty::None)
}

/// Extended_Pictographic membership. Emoji_Presentation characters and
/// modifier bases are all Extended_Pictographic; components and the skin
/// tone modifiers are not.
pub(crate) fn is_extended_pictographic(cp: u32) -> bool {
    matches!(
        lookup(cp),
        ExtendedPictographic | EmojiPresentation | EmojiModifierBase
    )
}

#[rustfmt::skip]
static EMOJI: &[(u32, u32, EmojiProperty)] = &[
    (0x0023, 0x0023, EmojiComponent),
    (0x002A, 0x002A, EmojiComponent),
    (0x0030, 0x0039, EmojiComponent),
    (0x00A9, 0x00A9, ExtendedPictographic),
    (0x00AE, 0x00AE, ExtendedPictographic),
    (0x200D, 0x200D, EmojiComponent),
    (0x203C, 0x203C, ExtendedPictographic),
    (0x2049, 0x2049, ExtendedPictographic),
    (0x20E3, 0x20E3, EmojiComponent),
    (0x2122, 0x2122, ExtendedPictographic),
    (0x2139, 0x2139, ExtendedPictographic),
    (0x2194, 0x2199, ExtendedPictographic),
    (0x21A9, 0x21AA, ExtendedPictographic),
    (0x231A, 0x231B, EmojiPresentation),
    (0x2328, 0x2328, ExtendedPictographic),
    (0x23CF, 0x23CF, ExtendedPictographic),
    (0x23E9, 0x23F3, EmojiPresentation),
    (0x24C2, 0x24C2, ExtendedPictographic),
    (0x25AA, 0x25AB, ExtendedPictographic),
    (0x25B6, 0x25B6, ExtendedPictographic),
    (0x25C0, 0x25C0, ExtendedPictographic),
    (0x25FB, 0x25FE, ExtendedPictographic),
    (0x2600, 0x27BF, ExtendedPictographic),
    (0x2B05, 0x2B07, ExtendedPictographic),
    (0x2B1B, 0x2B1C, EmojiPresentation),
    (0x2B50, 0x2B50, EmojiPresentation),
    (0x2B55, 0x2B55, EmojiPresentation),
    (0x3030, 0x3030, ExtendedPictographic),
    (0x303D, 0x303D, ExtendedPictographic),
    (0x3297, 0x3297, ExtendedPictographic),
    (0x3299, 0x3299, ExtendedPictographic),
    (0xFE0F, 0xFE0F, EmojiComponent),
    (0x1F004, 0x1F004, EmojiPresentation),
    (0x1F0CF, 0x1F0CF, EmojiPresentation),
    (0x1F170, 0x1F171, ExtendedPictographic),
    (0x1F17E, 0x1F17F, ExtendedPictographic),
    (0x1F18E, 0x1F18E, EmojiPresentation),
    (0x1F191, 0x1F19A, EmojiPresentation),
    (0x1F1E6, 0x1F1FF, EmojiComponent),
    (0x1F201, 0x1F202, ExtendedPictographic),
    (0x1F21A, 0x1F21A, EmojiPresentation),
    (0x1F22F, 0x1F22F, EmojiPresentation),
    (0x1F232, 0x1F23A, ExtendedPictographic),
    (0x1F250, 0x1F251, EmojiPresentation),
    (0x1F300, 0x1F384, EmojiPresentation),
    (0x1F385, 0x1F385, EmojiModifierBase),
    (0x1F386, 0x1F3B4, EmojiPresentation),
    (0x1F3B5, 0x1F3C1, EmojiPresentation),
    (0x1F3C2, 0x1F3C4, EmojiModifierBase),
    (0x1F3C5, 0x1F3C6, EmojiPresentation),
    (0x1F3C7, 0x1F3C7, EmojiModifierBase),
    (0x1F3C8, 0x1F3C9, EmojiPresentation),
    (0x1F3CA, 0x1F3CC, EmojiModifierBase),
    (0x1F3CD, 0x1F3FA, EmojiPresentation),
    (0x1F3FB, 0x1F3FF, EmojiModifier),
    (0x1F400, 0x1F440, EmojiPresentation),
    (0x1F441, 0x1F441, ExtendedPictographic),
    (0x1F442, 0x1F443, EmojiModifierBase),
    (0x1F444, 0x1F445, EmojiPresentation),
    (0x1F446, 0x1F450, EmojiModifierBase),
    (0x1F451, 0x1F465, EmojiPresentation),
    (0x1F466, 0x1F478, EmojiModifierBase),
    (0x1F479, 0x1F47B, EmojiPresentation),
    (0x1F47C, 0x1F47C, EmojiModifierBase),
    (0x1F47D, 0x1F480, EmojiPresentation),
    (0x1F481, 0x1F483, EmojiModifierBase),
    (0x1F484, 0x1F484, EmojiPresentation),
    (0x1F485, 0x1F487, EmojiModifierBase),
    (0x1F488, 0x1F4FF, EmojiPresentation),
    (0x1F500, 0x1F53D, EmojiPresentation),
    (0x1F546, 0x1F54A, ExtendedPictographic),
    (0x1F550, 0x1F567, EmojiPresentation),
    (0x1F574, 0x1F575, EmojiModifierBase),
    (0x1F576, 0x1F579, ExtendedPictographic),
    (0x1F57A, 0x1F57A, EmojiModifierBase),
    (0x1F587, 0x1F5A3, ExtendedPictographic),
    (0x1F5A4, 0x1F5A4, EmojiPresentation),
    (0x1F5A5, 0x1F5FA, ExtendedPictographic),
    (0x1F5FB, 0x1F5FF, EmojiPresentation),
    (0x1F600, 0x1F644, EmojiPresentation),
    (0x1F645, 0x1F647, EmojiModifierBase),
    (0x1F648, 0x1F64A, EmojiPresentation),
    (0x1F64B, 0x1F64F, EmojiModifierBase),
    (0x1F680, 0x1F6A2, EmojiPresentation),
    (0x1F6A3, 0x1F6A3, EmojiModifierBase),
    (0x1F6A4, 0x1F6B3, EmojiPresentation),
    (0x1F6B4, 0x1F6B6, EmojiModifierBase),
    (0x1F6B7, 0x1F6BF, EmojiPresentation),
    (0x1F6C0, 0x1F6C0, EmojiModifierBase),
    (0x1F6C1, 0x1F6C5, EmojiPresentation),
    (0x1F6CB, 0x1F6CF, ExtendedPictographic),
    (0x1F6D0, 0x1F6D2, EmojiPresentation),
    (0x1F6E0, 0x1F6EC, ExtendedPictographic),
    (0x1F6F0, 0x1F6FC, ExtendedPictographic),
    (0x1F90C, 0x1F90C, EmojiModifierBase),
    (0x1F90D, 0x1F917, EmojiPresentation),
    (0x1F918, 0x1F91F, EmojiModifierBase),
    (0x1F920, 0x1F925, EmojiPresentation),
    (0x1F926, 0x1F926, EmojiModifierBase),
    (0x1F927, 0x1F92F, EmojiPresentation),
    (0x1F930, 0x1F939, EmojiModifierBase),
    (0x1F93A, 0x1F93B, EmojiPresentation),
    (0x1F93C, 0x1F93E, EmojiModifierBase),
    (0x1F93F, 0x1F976, EmojiPresentation),
    (0x1F977, 0x1F977, EmojiModifierBase),
    (0x1F978, 0x1F9B4, EmojiPresentation),
    (0x1F9B5, 0x1F9B6, EmojiModifierBase),
    (0x1F9B7, 0x1F9B7, EmojiPresentation),
    (0x1F9B8, 0x1F9B9, EmojiModifierBase),
    (0x1F9BA, 0x1F9BC, EmojiPresentation),
    (0x1F9BD, 0x1F9BF, EmojiModifierBase),
    (0x1F9C0, 0x1F9CC, EmojiPresentation),
    (0x1F9CD, 0x1F9DD, EmojiModifierBase),
    (0x1F9DE, 0x1F9FF, EmojiPresentation),
    (0x1FA70, 0x1FAFF, ExtendedPictographic),
    (0xE0020, 0xE007F, EmojiComponent),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pictographic_classes_are_pictographic() {
        // Emoji_Presentation and the modifier bases are all
        // Extended_Pictographic for segmentation purposes.
        assert!(matches!(
            lookup(0x1F600),
            EmojiPresentation | ExtendedPictographic
        ));
        assert_eq!(lookup(0x1F1FA), EmojiComponent);
        assert_eq!(lookup(0x1F3FB), EmojiModifier);
        assert_eq!(lookup(0x0041), EmojiProperty::None);
    }
}
