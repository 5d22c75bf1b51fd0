// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Case data compiled from UnicodeData.txt, CaseFolding.txt, and
// SpecialCasing.txt.
//
// SIMPLE rows are (code, upper, lower, title) single-code-point mappings.
// Folding statuses keep the C/F/S/T split of CaseFolding.txt. Special
// casings are split into the conditional records (language tag and/or
// casing context, in file order per code point) and the unconditional
// multi-code-point defaults.

use crate::case::{CasingContext, Language};

/// `(upper, lower, title)` for `cp`, or `None` if all three are identity.
pub(crate) fn simple_mapping(cp: u32) -> Option<(char, char, char)> {
    SIMPLE
        .binary_search_by_key(&cp, |&(code, _, _, _)| code)
        .ok()
        .and_then(|idx| SIMPLE.get(idx))
        .map(|&(_, upper, lower, title)| {
            let fallback = char::from_u32(cp).unwrap_or('\u{FFFD}');
            (
                char::from_u32(upper).unwrap_or(fallback),
                char::from_u32(lower).unwrap_or(fallback),
                char::from_u32(title).unwrap_or(fallback),
            )
        })
}

pub(crate) fn fold_common(cp: u32) -> Option<char> {
    super::key_value(CASE_FOLDING_COMMON, cp).and_then(|&mapped| char::from_u32(mapped))
}

pub(crate) fn fold_full(cp: u32) -> Option<&'static [char]> {
    super::key_value(CASE_FOLDING_FULL, cp).copied()
}

pub(crate) fn fold_simple(cp: u32) -> Option<char> {
    super::key_value(CASE_FOLDING_SIMPLE, cp).and_then(|&mapped| char::from_u32(mapped))
}

pub(crate) fn fold_turkic(cp: u32) -> Option<&'static [char]> {
    super::key_value(CASE_FOLDING_TURKIC, cp).copied()
}

pub(crate) struct SpecialCasing {
    pub(crate) code: u32,
    pub(crate) lower: &'static [char],
    pub(crate) title: &'static [char],
    pub(crate) upper: &'static [char],
    pub(crate) language: Option<Language>,
    pub(crate) context: Option<CasingContext>,
}

pub(crate) struct SpecialDefault {
    pub(crate) lower: &'static [char],
    pub(crate) title: &'static [char],
    pub(crate) upper: &'static [char],
}

/// All conditional special-casing records for `cp`, in file order.
pub(crate) fn special_casings(cp: u32) -> &'static [SpecialCasing] {
    let start = SPECIAL_CASINGS.partition_point(|record| record.code < cp);
    let end = SPECIAL_CASINGS.partition_point(|record| record.code <= cp);
    SPECIAL_CASINGS.get(start..end).unwrap_or(&[])
}

pub(crate) fn special_default(cp: u32) -> Option<&'static SpecialDefault> {
    super::key_value(SPECIAL_DEFAULTS, cp)
}

#[rustfmt::skip]
static SIMPLE: &[(u32, u32, u32, u32)] = &[
    (0x0041, 0x0041, 0x0061, 0x0041),
    (0x0042, 0x0042, 0x0062, 0x0042),
    (0x0043, 0x0043, 0x0063, 0x0043),
    (0x0044, 0x0044, 0x0064, 0x0044),
    (0x0045, 0x0045, 0x0065, 0x0045),
    (0x0046, 0x0046, 0x0066, 0x0046),
    (0x0047, 0x0047, 0x0067, 0x0047),
    (0x0048, 0x0048, 0x0068, 0x0048),
    (0x0049, 0x0049, 0x0069, 0x0049),
    (0x004A, 0x004A, 0x006A, 0x004A),
    (0x004B, 0x004B, 0x006B, 0x004B),
    (0x004C, 0x004C, 0x006C, 0x004C),
    (0x004D, 0x004D, 0x006D, 0x004D),
    (0x004E, 0x004E, 0x006E, 0x004E),
    (0x004F, 0x004F, 0x006F, 0x004F),
    (0x0050, 0x0050, 0x0070, 0x0050),
    (0x0051, 0x0051, 0x0071, 0x0051),
    (0x0052, 0x0052, 0x0072, 0x0052),
    (0x0053, 0x0053, 0x0073, 0x0053),
    (0x0054, 0x0054, 0x0074, 0x0054),
    (0x0055, 0x0055, 0x0075, 0x0055),
    (0x0056, 0x0056, 0x0076, 0x0056),
    (0x0057, 0x0057, 0x0077, 0x0057),
    (0x0058, 0x0058, 0x0078, 0x0058),
    (0x0059, 0x0059, 0x0079, 0x0059),
    (0x005A, 0x005A, 0x007A, 0x005A),
    (0x0061, 0x0041, 0x0061, 0x0041),
    (0x0062, 0x0042, 0x0062, 0x0042),
    (0x0063, 0x0043, 0x0063, 0x0043),
    (0x0064, 0x0044, 0x0064, 0x0044),
    (0x0065, 0x0045, 0x0065, 0x0045),
    (0x0066, 0x0046, 0x0066, 0x0046),
    (0x0067, 0x0047, 0x0067, 0x0047),
    (0x0068, 0x0048, 0x0068, 0x0048),
    (0x0069, 0x0049, 0x0069, 0x0049),
    (0x006A, 0x004A, 0x006A, 0x004A),
    (0x006B, 0x004B, 0x006B, 0x004B),
    (0x006C, 0x004C, 0x006C, 0x004C),
    (0x006D, 0x004D, 0x006D, 0x004D),
    (0x006E, 0x004E, 0x006E, 0x004E),
    (0x006F, 0x004F, 0x006F, 0x004F),
    (0x0070, 0x0050, 0x0070, 0x0050),
    (0x0071, 0x0051, 0x0071, 0x0051),
    (0x0072, 0x0052, 0x0072, 0x0052),
    (0x0073, 0x0053, 0x0073, 0x0053),
    (0x0074, 0x0054, 0x0074, 0x0054),
    (0x0075, 0x0055, 0x0075, 0x0055),
    (0x0076, 0x0056, 0x0076, 0x0056),
    (0x0077, 0x0057, 0x0077, 0x0057),
    (0x0078, 0x0058, 0x0078, 0x0058),
    (0x0079, 0x0059, 0x0079, 0x0059),
    (0x007A, 0x005A, 0x007A, 0x005A),
    (0x00B5, 0x039C, 0x00B5, 0x039C),
    (0x00C0, 0x00C0, 0x00E0, 0x00C0),
    (0x00C1, 0x00C1, 0x00E1, 0x00C1),
    (0x00C2, 0x00C2, 0x00E2, 0x00C2),
    (0x00C3, 0x00C3, 0x00E3, 0x00C3),
    (0x00C4, 0x00C4, 0x00E4, 0x00C4),
    (0x00C5, 0x00C5, 0x00E5, 0x00C5),
    (0x00C6, 0x00C6, 0x00E6, 0x00C6),
    (0x00C7, 0x00C7, 0x00E7, 0x00C7),
    (0x00C8, 0x00C8, 0x00E8, 0x00C8),
    (0x00C9, 0x00C9, 0x00E9, 0x00C9),
    (0x00CA, 0x00CA, 0x00EA, 0x00CA),
    (0x00CB, 0x00CB, 0x00EB, 0x00CB),
    (0x00CC, 0x00CC, 0x00EC, 0x00CC),
    (0x00CD, 0x00CD, 0x00ED, 0x00CD),
    (0x00CE, 0x00CE, 0x00EE, 0x00CE),
    (0x00CF, 0x00CF, 0x00EF, 0x00CF),
    (0x00D0, 0x00D0, 0x00F0, 0x00D0),
    (0x00D1, 0x00D1, 0x00F1, 0x00D1),
    (0x00D2, 0x00D2, 0x00F2, 0x00D2),
    (0x00D3, 0x00D3, 0x00F3, 0x00D3),
    (0x00D4, 0x00D4, 0x00F4, 0x00D4),
    (0x00D5, 0x00D5, 0x00F5, 0x00D5),
    (0x00D6, 0x00D6, 0x00F6, 0x00D6),
    (0x00D8, 0x00D8, 0x00F8, 0x00D8),
    (0x00D9, 0x00D9, 0x00F9, 0x00D9),
    (0x00DA, 0x00DA, 0x00FA, 0x00DA),
    (0x00DB, 0x00DB, 0x00FB, 0x00DB),
    (0x00DC, 0x00DC, 0x00FC, 0x00DC),
    (0x00DD, 0x00DD, 0x00FD, 0x00DD),
    (0x00DE, 0x00DE, 0x00FE, 0x00DE),
    (0x00E0, 0x00C0, 0x00E0, 0x00C0),
    (0x00E1, 0x00C1, 0x00E1, 0x00C1),
    (0x00E2, 0x00C2, 0x00E2, 0x00C2),
    (0x00E3, 0x00C3, 0x00E3, 0x00C3),
    (0x00E4, 0x00C4, 0x00E4, 0x00C4),
    (0x00E5, 0x00C5, 0x00E5, 0x00C5),
    (0x00E6, 0x00C6, 0x00E6, 0x00C6),
    (0x00E7, 0x00C7, 0x00E7, 0x00C7),
    (0x00E8, 0x00C8, 0x00E8, 0x00C8),
    (0x00E9, 0x00C9, 0x00E9, 0x00C9),
    (0x00EA, 0x00CA, 0x00EA, 0x00CA),
    (0x00EB, 0x00CB, 0x00EB, 0x00CB),
    (0x00EC, 0x00CC, 0x00EC, 0x00CC),
    (0x00ED, 0x00CD, 0x00ED, 0x00CD),
    (0x00EE, 0x00CE, 0x00EE, 0x00CE),
    (0x00EF, 0x00CF, 0x00EF, 0x00CF),
    (0x00F0, 0x00D0, 0x00F0, 0x00D0),
    (0x00F1, 0x00D1, 0x00F1, 0x00D1),
    (0x00F2, 0x00D2, 0x00F2, 0x00D2),
    (0x00F3, 0x00D3, 0x00F3, 0x00D3),
    (0x00F4, 0x00D4, 0x00F4, 0x00D4),
    (0x00F5, 0x00D5, 0x00F5, 0x00D5),
    (0x00F6, 0x00D6, 0x00F6, 0x00D6),
    (0x00F8, 0x00D8, 0x00F8, 0x00D8),
    (0x00F9, 0x00D9, 0x00F9, 0x00D9),
    (0x00FA, 0x00DA, 0x00FA, 0x00DA),
    (0x00FB, 0x00DB, 0x00FB, 0x00DB),
    (0x00FC, 0x00DC, 0x00FC, 0x00DC),
    (0x00FD, 0x00DD, 0x00FD, 0x00DD),
    (0x00FE, 0x00DE, 0x00FE, 0x00DE),
    (0x00FF, 0x0178, 0x00FF, 0x0178),
    (0x0100, 0x0100, 0x0101, 0x0100),
    (0x0101, 0x0100, 0x0101, 0x0100),
    (0x0102, 0x0102, 0x0103, 0x0102),
    (0x0103, 0x0102, 0x0103, 0x0102),
    (0x0104, 0x0104, 0x0105, 0x0104),
    (0x0105, 0x0104, 0x0105, 0x0104),
    (0x0106, 0x0106, 0x0107, 0x0106),
    (0x0107, 0x0106, 0x0107, 0x0106),
    (0x0108, 0x0108, 0x0109, 0x0108),
    (0x0109, 0x0108, 0x0109, 0x0108),
    (0x010A, 0x010A, 0x010B, 0x010A),
    (0x010B, 0x010A, 0x010B, 0x010A),
    (0x010C, 0x010C, 0x010D, 0x010C),
    (0x010D, 0x010C, 0x010D, 0x010C),
    (0x010E, 0x010E, 0x010F, 0x010E),
    (0x010F, 0x010E, 0x010F, 0x010E),
    (0x0110, 0x0110, 0x0111, 0x0110),
    (0x0111, 0x0110, 0x0111, 0x0110),
    (0x0112, 0x0112, 0x0113, 0x0112),
    (0x0113, 0x0112, 0x0113, 0x0112),
    (0x011A, 0x011A, 0x011B, 0x011A),
    (0x011B, 0x011A, 0x011B, 0x011A),
    (0x011E, 0x011E, 0x011F, 0x011E),
    (0x011F, 0x011E, 0x011F, 0x011E),
    (0x0122, 0x0122, 0x0123, 0x0122),
    (0x0123, 0x0122, 0x0123, 0x0122),
    (0x0128, 0x0128, 0x0129, 0x0128),
    (0x0129, 0x0128, 0x0129, 0x0128),
    (0x012A, 0x012A, 0x012B, 0x012A),
    (0x012B, 0x012A, 0x012B, 0x012A),
    (0x012C, 0x012C, 0x012D, 0x012C),
    (0x012D, 0x012C, 0x012D, 0x012C),
    (0x012E, 0x012E, 0x012F, 0x012E),
    (0x012F, 0x012E, 0x012F, 0x012E),
    (0x0130, 0x0130, 0x0069, 0x0130),
    (0x0131, 0x0049, 0x0131, 0x0049),
    (0x0141, 0x0141, 0x0142, 0x0141),
    (0x0142, 0x0141, 0x0142, 0x0141),
    (0x0143, 0x0143, 0x0144, 0x0143),
    (0x0144, 0x0143, 0x0144, 0x0143),
    (0x0145, 0x0145, 0x0146, 0x0145),
    (0x0146, 0x0145, 0x0146, 0x0145),
    (0x0147, 0x0147, 0x0148, 0x0147),
    (0x0148, 0x0147, 0x0148, 0x0147),
    (0x014C, 0x014C, 0x014D, 0x014C),
    (0x014D, 0x014C, 0x014D, 0x014C),
    (0x0152, 0x0152, 0x0153, 0x0152),
    (0x0153, 0x0152, 0x0153, 0x0152),
    (0x0158, 0x0158, 0x0159, 0x0158),
    (0x0159, 0x0158, 0x0159, 0x0158),
    (0x015A, 0x015A, 0x015B, 0x015A),
    (0x015B, 0x015A, 0x015B, 0x015A),
    (0x015C, 0x015C, 0x015D, 0x015C),
    (0x015D, 0x015C, 0x015D, 0x015C),
    (0x015E, 0x015E, 0x015F, 0x015E),
    (0x015F, 0x015E, 0x015F, 0x015E),
    (0x0160, 0x0160, 0x0161, 0x0160),
    (0x0161, 0x0160, 0x0161, 0x0160),
    (0x016A, 0x016A, 0x016B, 0x016A),
    (0x016B, 0x016A, 0x016B, 0x016A),
    (0x016E, 0x016E, 0x016F, 0x016E),
    (0x016F, 0x016E, 0x016F, 0x016E),
    (0x0178, 0x0178, 0x00FF, 0x0178),
    (0x0179, 0x0179, 0x017A, 0x0179),
    (0x017A, 0x0179, 0x017A, 0x0179),
    (0x017B, 0x017B, 0x017C, 0x017B),
    (0x017C, 0x017B, 0x017C, 0x017B),
    (0x017D, 0x017D, 0x017E, 0x017D),
    (0x017E, 0x017D, 0x017E, 0x017D),
    (0x017F, 0x0053, 0x017F, 0x0053),
    (0x01C4, 0x01C4, 0x01C6, 0x01C5),
    (0x01C5, 0x01C4, 0x01C6, 0x01C5),
    (0x01C6, 0x01C4, 0x01C6, 0x01C5),
    (0x01C7, 0x01C7, 0x01C9, 0x01C8),
    (0x01C8, 0x01C7, 0x01C9, 0x01C8),
    (0x01C9, 0x01C7, 0x01C9, 0x01C8),
    (0x01CA, 0x01CA, 0x01CC, 0x01CB),
    (0x01CB, 0x01CA, 0x01CC, 0x01CB),
    (0x01CC, 0x01CA, 0x01CC, 0x01CB),
    (0x01D5, 0x01D5, 0x01D6, 0x01D5),
    (0x01D6, 0x01D5, 0x01D6, 0x01D5),
    (0x01D7, 0x01D7, 0x01D8, 0x01D7),
    (0x01D8, 0x01D7, 0x01D8, 0x01D7),
    (0x01D9, 0x01D9, 0x01DA, 0x01D9),
    (0x01DA, 0x01D9, 0x01DA, 0x01D9),
    (0x01DB, 0x01DB, 0x01DC, 0x01DB),
    (0x01DC, 0x01DB, 0x01DC, 0x01DB),
    (0x0345, 0x0399, 0x0345, 0x0399),
    (0x0386, 0x0386, 0x03AC, 0x0386),
    (0x0388, 0x0388, 0x03AD, 0x0388),
    (0x0389, 0x0389, 0x03AE, 0x0389),
    (0x038A, 0x038A, 0x03AF, 0x038A),
    (0x038C, 0x038C, 0x03CC, 0x038C),
    (0x038E, 0x038E, 0x03CD, 0x038E),
    (0x038F, 0x038F, 0x03CE, 0x038F),
    (0x0391, 0x0391, 0x03B1, 0x0391),
    (0x0392, 0x0392, 0x03B2, 0x0392),
    (0x0393, 0x0393, 0x03B3, 0x0393),
    (0x0394, 0x0394, 0x03B4, 0x0394),
    (0x0395, 0x0395, 0x03B5, 0x0395),
    (0x0396, 0x0396, 0x03B6, 0x0396),
    (0x0397, 0x0397, 0x03B7, 0x0397),
    (0x0398, 0x0398, 0x03B8, 0x0398),
    (0x0399, 0x0399, 0x03B9, 0x0399),
    (0x039A, 0x039A, 0x03BA, 0x039A),
    (0x039B, 0x039B, 0x03BB, 0x039B),
    (0x039C, 0x039C, 0x03BC, 0x039C),
    (0x039D, 0x039D, 0x03BD, 0x039D),
    (0x039E, 0x039E, 0x03BE, 0x039E),
    (0x039F, 0x039F, 0x03BF, 0x039F),
    (0x03A0, 0x03A0, 0x03C0, 0x03A0),
    (0x03A1, 0x03A1, 0x03C1, 0x03A1),
    (0x03A3, 0x03A3, 0x03C3, 0x03A3),
    (0x03A4, 0x03A4, 0x03C4, 0x03A4),
    (0x03A5, 0x03A5, 0x03C5, 0x03A5),
    (0x03A6, 0x03A6, 0x03C6, 0x03A6),
    (0x03A7, 0x03A7, 0x03C7, 0x03A7),
    (0x03A8, 0x03A8, 0x03C8, 0x03A8),
    (0x03A9, 0x03A9, 0x03C9, 0x03A9),
    (0x03AA, 0x03AA, 0x03CA, 0x03AA),
    (0x03AB, 0x03AB, 0x03CB, 0x03AB),
    (0x03AC, 0x0386, 0x03AC, 0x0386),
    (0x03AD, 0x0388, 0x03AD, 0x0388),
    (0x03AE, 0x0389, 0x03AE, 0x0389),
    (0x03AF, 0x038A, 0x03AF, 0x038A),
    (0x03B1, 0x0391, 0x03B1, 0x0391),
    (0x03B2, 0x0392, 0x03B2, 0x0392),
    (0x03B3, 0x0393, 0x03B3, 0x0393),
    (0x03B4, 0x0394, 0x03B4, 0x0394),
    (0x03B5, 0x0395, 0x03B5, 0x0395),
    (0x03B6, 0x0396, 0x03B6, 0x0396),
    (0x03B7, 0x0397, 0x03B7, 0x0397),
    (0x03B8, 0x0398, 0x03B8, 0x0398),
    (0x03B9, 0x0399, 0x03B9, 0x0399),
    (0x03BA, 0x039A, 0x03BA, 0x039A),
    (0x03BB, 0x039B, 0x03BB, 0x039B),
    (0x03BC, 0x039C, 0x03BC, 0x039C),
    (0x03BD, 0x039D, 0x03BD, 0x039D),
    (0x03BE, 0x039E, 0x03BE, 0x039E),
    (0x03BF, 0x039F, 0x03BF, 0x039F),
    (0x03C0, 0x03A0, 0x03C0, 0x03A0),
    (0x03C1, 0x03A1, 0x03C1, 0x03A1),
    (0x03C2, 0x03A3, 0x03C2, 0x03A3),
    (0x03C3, 0x03A3, 0x03C3, 0x03A3),
    (0x03C4, 0x03A4, 0x03C4, 0x03A4),
    (0x03C5, 0x03A5, 0x03C5, 0x03A5),
    (0x03C6, 0x03A6, 0x03C6, 0x03A6),
    (0x03C7, 0x03A7, 0x03C7, 0x03A7),
    (0x03C8, 0x03A8, 0x03C8, 0x03A8),
    (0x03C9, 0x03A9, 0x03C9, 0x03A9),
    (0x03CA, 0x03AA, 0x03CA, 0x03AA),
    (0x03CB, 0x03AB, 0x03CB, 0x03AB),
    (0x03CC, 0x038C, 0x03CC, 0x038C),
    (0x03CD, 0x038E, 0x03CD, 0x038E),
    (0x03CE, 0x038F, 0x03CE, 0x038F),
    (0x03CF, 0x03CF, 0x03D7, 0x03CF),
    (0x03D0, 0x0392, 0x03D0, 0x0392),
    (0x03D1, 0x0398, 0x03D1, 0x0398),
    (0x03D5, 0x03A6, 0x03D5, 0x03A6),
    (0x03D6, 0x03A0, 0x03D6, 0x03A0),
    (0x03D7, 0x03CF, 0x03D7, 0x03CF),
    (0x03F0, 0x039A, 0x03F0, 0x039A),
    (0x03F1, 0x03A1, 0x03F1, 0x03A1),
    (0x03F4, 0x03F4, 0x03B8, 0x03F4),
    (0x03F5, 0x0395, 0x03F5, 0x0395),
    (0x0400, 0x0400, 0x0450, 0x0400),
    (0x0401, 0x0401, 0x0451, 0x0401),
    (0x0402, 0x0402, 0x0452, 0x0402),
    (0x0403, 0x0403, 0x0453, 0x0403),
    (0x0404, 0x0404, 0x0454, 0x0404),
    (0x0405, 0x0405, 0x0455, 0x0405),
    (0x0406, 0x0406, 0x0456, 0x0406),
    (0x0407, 0x0407, 0x0457, 0x0407),
    (0x0408, 0x0408, 0x0458, 0x0408),
    (0x0409, 0x0409, 0x0459, 0x0409),
    (0x040A, 0x040A, 0x045A, 0x040A),
    (0x040B, 0x040B, 0x045B, 0x040B),
    (0x040C, 0x040C, 0x045C, 0x040C),
    (0x040D, 0x040D, 0x045D, 0x040D),
    (0x040E, 0x040E, 0x045E, 0x040E),
    (0x040F, 0x040F, 0x045F, 0x040F),
    (0x0410, 0x0410, 0x0430, 0x0410),
    (0x0411, 0x0411, 0x0431, 0x0411),
    (0x0412, 0x0412, 0x0432, 0x0412),
    (0x0413, 0x0413, 0x0433, 0x0413),
    (0x0414, 0x0414, 0x0434, 0x0414),
    (0x0415, 0x0415, 0x0435, 0x0415),
    (0x0416, 0x0416, 0x0436, 0x0416),
    (0x0417, 0x0417, 0x0437, 0x0417),
    (0x0418, 0x0418, 0x0438, 0x0418),
    (0x0419, 0x0419, 0x0439, 0x0419),
    (0x041A, 0x041A, 0x043A, 0x041A),
    (0x041B, 0x041B, 0x043B, 0x041B),
    (0x041C, 0x041C, 0x043C, 0x041C),
    (0x041D, 0x041D, 0x043D, 0x041D),
    (0x041E, 0x041E, 0x043E, 0x041E),
    (0x041F, 0x041F, 0x043F, 0x041F),
    (0x0420, 0x0420, 0x0440, 0x0420),
    (0x0421, 0x0421, 0x0441, 0x0421),
    (0x0422, 0x0422, 0x0442, 0x0422),
    (0x0423, 0x0423, 0x0443, 0x0423),
    (0x0424, 0x0424, 0x0444, 0x0424),
    (0x0425, 0x0425, 0x0445, 0x0425),
    (0x0426, 0x0426, 0x0446, 0x0426),
    (0x0427, 0x0427, 0x0447, 0x0427),
    (0x0428, 0x0428, 0x0448, 0x0428),
    (0x0429, 0x0429, 0x0449, 0x0429),
    (0x042A, 0x042A, 0x044A, 0x042A),
    (0x042B, 0x042B, 0x044B, 0x042B),
    (0x042C, 0x042C, 0x044C, 0x042C),
    (0x042D, 0x042D, 0x044D, 0x042D),
    (0x042E, 0x042E, 0x044E, 0x042E),
    (0x042F, 0x042F, 0x044F, 0x042F),
    (0x0430, 0x0410, 0x0430, 0x0410),
    (0x0431, 0x0411, 0x0431, 0x0411),
    (0x0432, 0x0412, 0x0432, 0x0412),
    (0x0433, 0x0413, 0x0433, 0x0413),
    (0x0434, 0x0414, 0x0434, 0x0414),
    (0x0435, 0x0415, 0x0435, 0x0415),
    (0x0436, 0x0416, 0x0436, 0x0416),
    (0x0437, 0x0417, 0x0437, 0x0417),
    (0x0438, 0x0418, 0x0438, 0x0418),
    (0x0439, 0x0419, 0x0439, 0x0419),
    (0x043A, 0x041A, 0x043A, 0x041A),
    (0x043B, 0x041B, 0x043B, 0x041B),
    (0x043C, 0x041C, 0x043C, 0x041C),
    (0x043D, 0x041D, 0x043D, 0x041D),
    (0x043E, 0x041E, 0x043E, 0x041E),
    (0x043F, 0x041F, 0x043F, 0x041F),
    (0x0440, 0x0420, 0x0440, 0x0420),
    (0x0441, 0x0421, 0x0441, 0x0421),
    (0x0442, 0x0422, 0x0442, 0x0422),
    (0x0443, 0x0423, 0x0443, 0x0423),
    (0x0444, 0x0424, 0x0444, 0x0424),
    (0x0445, 0x0425, 0x0445, 0x0425),
    (0x0446, 0x0426, 0x0446, 0x0426),
    (0x0447, 0x0427, 0x0447, 0x0427),
    (0x0448, 0x0428, 0x0448, 0x0428),
    (0x0449, 0x0429, 0x0449, 0x0429),
    (0x044A, 0x042A, 0x044A, 0x042A),
    (0x044B, 0x042B, 0x044B, 0x042B),
    (0x044C, 0x042C, 0x044C, 0x042C),
    (0x044D, 0x042D, 0x044D, 0x042D),
    (0x044E, 0x042E, 0x044E, 0x042E),
    (0x044F, 0x042F, 0x044F, 0x042F),
    (0x0450, 0x0400, 0x0450, 0x0400),
    (0x0451, 0x0401, 0x0451, 0x0401),
    (0x0452, 0x0402, 0x0452, 0x0402),
    (0x0453, 0x0403, 0x0453, 0x0403),
    (0x0454, 0x0404, 0x0454, 0x0404),
    (0x0455, 0x0405, 0x0455, 0x0405),
    (0x0456, 0x0406, 0x0456, 0x0406),
    (0x0457, 0x0407, 0x0457, 0x0407),
    (0x0458, 0x0408, 0x0458, 0x0408),
    (0x0459, 0x0409, 0x0459, 0x0409),
    (0x045A, 0x040A, 0x045A, 0x040A),
    (0x045B, 0x040B, 0x045B, 0x040B),
    (0x045C, 0x040C, 0x045C, 0x040C),
    (0x045D, 0x040D, 0x045D, 0x040D),
    (0x045E, 0x040E, 0x045E, 0x040E),
    (0x045F, 0x040F, 0x045F, 0x040F),
    (0x1E00, 0x1E00, 0x1E01, 0x1E00),
    (0x1E01, 0x1E00, 0x1E01, 0x1E00),
    (0x1E0A, 0x1E0A, 0x1E0B, 0x1E0A),
    (0x1E0B, 0x1E0A, 0x1E0B, 0x1E0A),
    (0x1E40, 0x1E40, 0x1E41, 0x1E40),
    (0x1E41, 0x1E40, 0x1E41, 0x1E40),
    (0x1E9E, 0x1E9E, 0x00DF, 0x1E9E),
    (0x1F00, 0x1F08, 0x1F00, 0x1F08),
    (0x1F01, 0x1F09, 0x1F01, 0x1F09),
    (0x1F02, 0x1F0A, 0x1F02, 0x1F0A),
    (0x1F03, 0x1F0B, 0x1F03, 0x1F0B),
    (0x1F04, 0x1F0C, 0x1F04, 0x1F0C),
    (0x1F05, 0x1F0D, 0x1F05, 0x1F0D),
    (0x1F06, 0x1F0E, 0x1F06, 0x1F0E),
    (0x1F07, 0x1F0F, 0x1F07, 0x1F0F),
    (0x1F08, 0x1F08, 0x1F00, 0x1F08),
    (0x1F09, 0x1F09, 0x1F01, 0x1F09),
    (0x1F0A, 0x1F0A, 0x1F02, 0x1F0A),
    (0x1F0B, 0x1F0B, 0x1F03, 0x1F0B),
    (0x1F0C, 0x1F0C, 0x1F04, 0x1F0C),
    (0x1F0D, 0x1F0D, 0x1F05, 0x1F0D),
    (0x1F0E, 0x1F0E, 0x1F06, 0x1F0E),
    (0x1F0F, 0x1F0F, 0x1F07, 0x1F0F),
    (0x1F51, 0x1F59, 0x1F51, 0x1F59),
    (0x1F53, 0x1F5B, 0x1F53, 0x1F5B),
    (0x1F55, 0x1F5D, 0x1F55, 0x1F5D),
    (0x1F57, 0x1F5F, 0x1F57, 0x1F5F),
    (0x1F59, 0x1F59, 0x1F51, 0x1F59),
    (0x1F5B, 0x1F5B, 0x1F53, 0x1F5B),
    (0x1F5D, 0x1F5D, 0x1F55, 0x1F5D),
    (0x1F5F, 0x1F5F, 0x1F57, 0x1F5F),
    (0x1F80, 0x1F88, 0x1F80, 0x1F88),
    (0x1F81, 0x1F89, 0x1F81, 0x1F89),
    (0x1F82, 0x1F8A, 0x1F82, 0x1F8A),
    (0x1F83, 0x1F8B, 0x1F83, 0x1F8B),
    (0x1F84, 0x1F8C, 0x1F84, 0x1F8C),
    (0x1F85, 0x1F8D, 0x1F85, 0x1F8D),
    (0x1F86, 0x1F8E, 0x1F86, 0x1F8E),
    (0x1F87, 0x1F8F, 0x1F87, 0x1F8F),
    (0x1F88, 0x1F88, 0x1F80, 0x1F88),
    (0x1F89, 0x1F89, 0x1F81, 0x1F89),
    (0x1F8A, 0x1F8A, 0x1F82, 0x1F8A),
    (0x1F8B, 0x1F8B, 0x1F83, 0x1F8B),
    (0x1F8C, 0x1F8C, 0x1F84, 0x1F8C),
    (0x1F8D, 0x1F8D, 0x1F85, 0x1F8D),
    (0x1F8E, 0x1F8E, 0x1F86, 0x1F8E),
    (0x1F8F, 0x1F8F, 0x1F87, 0x1F8F),
    (0x2126, 0x2126, 0x03C9, 0x2126),
    (0x212A, 0x212A, 0x006B, 0x212A),
    (0x212B, 0x212B, 0x00E5, 0x212B),
];

#[rustfmt::skip]
static CASE_FOLDING_COMMON: &[(u32, u32)] = &[
    (0x0041, 0x0061), (0x0042, 0x0062), (0x0043, 0x0063), (0x0044, 0x0064),
    (0x0045, 0x0065), (0x0046, 0x0066), (0x0047, 0x0067), (0x0048, 0x0068),
    (0x0049, 0x0069), (0x004A, 0x006A), (0x004B, 0x006B), (0x004C, 0x006C),
    (0x004D, 0x006D), (0x004E, 0x006E), (0x004F, 0x006F), (0x0050, 0x0070),
    (0x0051, 0x0071), (0x0052, 0x0072), (0x0053, 0x0073), (0x0054, 0x0074),
    (0x0055, 0x0075), (0x0056, 0x0076), (0x0057, 0x0077), (0x0058, 0x0078),
    (0x0059, 0x0079), (0x005A, 0x007A),
    (0x00B5, 0x03BC),
    (0x00C0, 0x00E0), (0x00C1, 0x00E1), (0x00C2, 0x00E2), (0x00C3, 0x00E3),
    (0x00C4, 0x00E4), (0x00C5, 0x00E5), (0x00C6, 0x00E6), (0x00C7, 0x00E7),
    (0x00C8, 0x00E8), (0x00C9, 0x00E9), (0x00CA, 0x00EA), (0x00CB, 0x00EB),
    (0x00CC, 0x00EC), (0x00CD, 0x00ED), (0x00CE, 0x00EE), (0x00CF, 0x00EF),
    (0x00D0, 0x00F0), (0x00D1, 0x00F1), (0x00D2, 0x00F2), (0x00D3, 0x00F3),
    (0x00D4, 0x00F4), (0x00D5, 0x00F5), (0x00D6, 0x00F6), (0x00D8, 0x00F8),
    (0x00D9, 0x00F9), (0x00DA, 0x00FA), (0x00DB, 0x00FB), (0x00DC, 0x00FC),
    (0x00DD, 0x00FD), (0x00DE, 0x00FE),
    (0x0100, 0x0101), (0x0102, 0x0103), (0x0104, 0x0105), (0x0106, 0x0107),
    (0x0108, 0x0109), (0x010A, 0x010B), (0x010C, 0x010D), (0x010E, 0x010F),
    (0x0110, 0x0111), (0x0112, 0x0113), (0x011A, 0x011B), (0x011E, 0x011F),
    (0x0122, 0x0123), (0x0128, 0x0129), (0x012A, 0x012B), (0x012C, 0x012D),
    (0x012E, 0x012F), (0x0141, 0x0142), (0x0143, 0x0144), (0x0145, 0x0146),
    (0x0147, 0x0148), (0x014C, 0x014D), (0x0152, 0x0153), (0x0158, 0x0159),
    (0x015A, 0x015B), (0x015C, 0x015D), (0x015E, 0x015F), (0x0160, 0x0161),
    (0x016A, 0x016B), (0x016E, 0x016F), (0x0178, 0x00FF), (0x0179, 0x017A),
    (0x017B, 0x017C), (0x017D, 0x017E), (0x017F, 0x0073),
    (0x01C4, 0x01C6), (0x01C5, 0x01C6), (0x01C7, 0x01C9), (0x01C8, 0x01C9),
    (0x01CA, 0x01CC), (0x01CB, 0x01CC),
    (0x01D5, 0x01D6), (0x01D7, 0x01D8), (0x01D9, 0x01DA), (0x01DB, 0x01DC),
    (0x0345, 0x03B9),
    (0x0386, 0x03AC), (0x0388, 0x03AD), (0x0389, 0x03AE), (0x038A, 0x03AF),
    (0x038C, 0x03CC), (0x038E, 0x03CD), (0x038F, 0x03CE),
    (0x0391, 0x03B1), (0x0392, 0x03B2), (0x0393, 0x03B3), (0x0394, 0x03B4),
    (0x0395, 0x03B5), (0x0396, 0x03B6), (0x0397, 0x03B7), (0x0398, 0x03B8),
    (0x0399, 0x03B9), (0x039A, 0x03BA), (0x039B, 0x03BB), (0x039C, 0x03BC),
    (0x039D, 0x03BD), (0x039E, 0x03BE), (0x039F, 0x03BF), (0x03A0, 0x03C0),
    (0x03A1, 0x03C1), (0x03A3, 0x03C3), (0x03A4, 0x03C4), (0x03A5, 0x03C5),
    (0x03A6, 0x03C6), (0x03A7, 0x03C7), (0x03A8, 0x03C8), (0x03A9, 0x03C9),
    (0x03AA, 0x03CA), (0x03AB, 0x03CB),
    (0x03C2, 0x03C3),
    (0x03CF, 0x03D7),
    (0x03D0, 0x03B2), (0x03D1, 0x03B8), (0x03D5, 0x03C6), (0x03D6, 0x03C0),
    (0x03F0, 0x03BA), (0x03F1, 0x03C1), (0x03F4, 0x03B8), (0x03F5, 0x03B5),
    (0x0400, 0x0450), (0x0401, 0x0451), (0x0402, 0x0452), (0x0403, 0x0453),
    (0x0404, 0x0454), (0x0405, 0x0455), (0x0406, 0x0456), (0x0407, 0x0457),
    (0x0408, 0x0458), (0x0409, 0x0459), (0x040A, 0x045A), (0x040B, 0x045B),
    (0x040C, 0x045C), (0x040D, 0x045D), (0x040E, 0x045E), (0x040F, 0x045F),
    (0x0410, 0x0430), (0x0411, 0x0431), (0x0412, 0x0432), (0x0413, 0x0433),
    (0x0414, 0x0434), (0x0415, 0x0435), (0x0416, 0x0436), (0x0417, 0x0437),
    (0x0418, 0x0438), (0x0419, 0x0439), (0x041A, 0x043A), (0x041B, 0x043B),
    (0x041C, 0x043C), (0x041D, 0x043D), (0x041E, 0x043E), (0x041F, 0x043F),
    (0x0420, 0x0440), (0x0421, 0x0441), (0x0422, 0x0442), (0x0423, 0x0443),
    (0x0424, 0x0444), (0x0425, 0x0445), (0x0426, 0x0446), (0x0427, 0x0447),
    (0x0428, 0x0448), (0x0429, 0x0449), (0x042A, 0x044A), (0x042B, 0x044B),
    (0x042C, 0x044C), (0x042D, 0x044D), (0x042E, 0x044E), (0x042F, 0x044F),
    (0x1E00, 0x1E01), (0x1E0A, 0x1E0B), (0x1E40, 0x1E41),
    (0x1F08, 0x1F00), (0x1F09, 0x1F01), (0x1F0A, 0x1F02), (0x1F0B, 0x1F03),
    (0x1F0C, 0x1F04), (0x1F0D, 0x1F05), (0x1F0E, 0x1F06), (0x1F0F, 0x1F07),
    (0x1F59, 0x1F51), (0x1F5B, 0x1F53), (0x1F5D, 0x1F55), (0x1F5F, 0x1F57),
    (0x1F88, 0x1F80), (0x1F89, 0x1F81), (0x1F8A, 0x1F82), (0x1F8B, 0x1F83),
    (0x1F8C, 0x1F84), (0x1F8D, 0x1F85), (0x1F8E, 0x1F86), (0x1F8F, 0x1F87),
    (0x2126, 0x03C9), (0x212A, 0x006B), (0x212B, 0x00E5),
];

#[rustfmt::skip]
static CASE_FOLDING_FULL: &[(u32, &[char])] = &[
    (0x00DF, &['\u{0073}', '\u{0073}']),
    (0x0130, &['\u{0069}', '\u{0307}']),
    (0x0149, &['\u{02BC}', '\u{006E}']),
    (0x01F0, &['\u{006A}', '\u{030C}']),
    (0x0390, &['\u{03B9}', '\u{0308}', '\u{0301}']),
    (0x03B0, &['\u{03C5}', '\u{0308}', '\u{0301}']),
    (0x0587, &['\u{0565}', '\u{0582}']),
    (0x1E96, &['\u{0068}', '\u{0331}']),
    (0x1E97, &['\u{0074}', '\u{0308}']),
    (0x1E98, &['\u{0077}', '\u{030A}']),
    (0x1E99, &['\u{0079}', '\u{030A}']),
    (0x1E9A, &['\u{0061}', '\u{02BE}']),
    (0x1E9E, &['\u{0073}', '\u{0073}']),
    (0x1F50, &['\u{03C5}', '\u{0313}']),
    (0xFB00, &['\u{0066}', '\u{0066}']),
    (0xFB01, &['\u{0066}', '\u{0069}']),
    (0xFB02, &['\u{0066}', '\u{006C}']),
    (0xFB03, &['\u{0066}', '\u{0066}', '\u{0069}']),
    (0xFB04, &['\u{0066}', '\u{0066}', '\u{006C}']),
    (0xFB05, &['\u{0073}', '\u{0074}']),
    (0xFB06, &['\u{0073}', '\u{0074}']),
    (0xFB13, &['\u{0574}', '\u{0576}']),
    (0xFB14, &['\u{0574}', '\u{0565}']),
    (0xFB15, &['\u{0574}', '\u{056B}']),
    (0xFB16, &['\u{057E}', '\u{0576}']),
    (0xFB17, &['\u{0574}', '\u{056D}']),
];

static CASE_FOLDING_SIMPLE: &[(u32, u32)] = &[(0x1E9E, 0x00DF)];

static CASE_FOLDING_TURKIC: &[(u32, &[char])] =
    &[(0x0049, &['\u{0131}']), (0x0130, &['\u{0069}'])];

static SPECIAL_CASINGS: &[SpecialCasing] = &[
    SpecialCasing {
        code: 0x0049,
        lower: &['\u{0131}'],
        title: &['\u{0049}'],
        upper: &['\u{0049}'],
        language: Some(Language::Turkish),
        context: Some(CasingContext::NotBeforeDot),
    },
    SpecialCasing {
        code: 0x0049,
        lower: &['\u{0131}'],
        title: &['\u{0049}'],
        upper: &['\u{0049}'],
        language: Some(Language::Azerbaijani),
        context: Some(CasingContext::NotBeforeDot),
    },
    SpecialCasing {
        code: 0x0049,
        lower: &['\u{0069}', '\u{0307}'],
        title: &['\u{0049}'],
        upper: &['\u{0049}'],
        language: Some(Language::Lithuanian),
        context: Some(CasingContext::MoreAbove),
    },
    SpecialCasing {
        code: 0x004A,
        lower: &['\u{006A}', '\u{0307}'],
        title: &['\u{004A}'],
        upper: &['\u{004A}'],
        language: Some(Language::Lithuanian),
        context: Some(CasingContext::MoreAbove),
    },
    SpecialCasing {
        code: 0x0069,
        lower: &['\u{0069}'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
        language: Some(Language::Turkish),
        context: None,
    },
    SpecialCasing {
        code: 0x0069,
        lower: &['\u{0069}'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
        language: Some(Language::Azerbaijani),
        context: None,
    },
    SpecialCasing {
        code: 0x00CC,
        lower: &['\u{0069}', '\u{0307}', '\u{0300}'],
        title: &['\u{00CC}'],
        upper: &['\u{00CC}'],
        language: Some(Language::Lithuanian),
        context: None,
    },
    SpecialCasing {
        code: 0x00CD,
        lower: &['\u{0069}', '\u{0307}', '\u{0301}'],
        title: &['\u{00CD}'],
        upper: &['\u{00CD}'],
        language: Some(Language::Lithuanian),
        context: None,
    },
    SpecialCasing {
        code: 0x0128,
        lower: &['\u{0069}', '\u{0307}', '\u{0303}'],
        title: &['\u{0128}'],
        upper: &['\u{0128}'],
        language: Some(Language::Lithuanian),
        context: None,
    },
    SpecialCasing {
        code: 0x012E,
        lower: &['\u{012F}', '\u{0307}'],
        title: &['\u{012E}'],
        upper: &['\u{012E}'],
        language: Some(Language::Lithuanian),
        context: Some(CasingContext::MoreAbove),
    },
    SpecialCasing {
        code: 0x0130,
        lower: &['\u{0069}'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
        language: Some(Language::Turkish),
        context: None,
    },
    SpecialCasing {
        code: 0x0307,
        lower: &[],
        title: &['\u{0307}'],
        upper: &['\u{0307}'],
        language: Some(Language::Turkish),
        context: Some(CasingContext::AfterI),
    },
    SpecialCasing {
        code: 0x0307,
        lower: &[],
        title: &['\u{0307}'],
        upper: &['\u{0307}'],
        language: Some(Language::Azerbaijani),
        context: Some(CasingContext::AfterI),
    },
    SpecialCasing {
        code: 0x0307,
        lower: &['\u{0307}'],
        title: &[],
        upper: &[],
        language: Some(Language::Lithuanian),
        context: Some(CasingContext::AfterSoftDotted),
    },
    SpecialCasing {
        code: 0x03A3,
        lower: &['\u{03C2}'],
        title: &['\u{03A3}'],
        upper: &['\u{03A3}'],
        language: None,
        context: Some(CasingContext::FinalSigma),
    },
];

#[rustfmt::skip]
static SPECIAL_DEFAULTS: &[(u32, SpecialDefault)] = &[
    (0x00DF, SpecialDefault {
        lower: &['\u{00DF}'],
        title: &['\u{0053}', '\u{0073}'],
        upper: &['\u{0053}', '\u{0053}'],
    }),
    (0x0130, SpecialDefault {
        lower: &['\u{0069}', '\u{0307}'],
        title: &['\u{0130}'],
        upper: &['\u{0130}'],
    }),
    (0x0149, SpecialDefault {
        lower: &['\u{0149}'],
        title: &['\u{02BC}', '\u{004E}'],
        upper: &['\u{02BC}', '\u{004E}'],
    }),
    (0x01F0, SpecialDefault {
        lower: &['\u{01F0}'],
        title: &['\u{01F0}'],
        upper: &['\u{004A}', '\u{030C}'],
    }),
    (0x0390, SpecialDefault {
        lower: &['\u{0390}'],
        title: &['\u{0390}'],
        upper: &['\u{0399}', '\u{0308}', '\u{0301}'],
    }),
    (0x03B0, SpecialDefault {
        lower: &['\u{03B0}'],
        title: &['\u{03B0}'],
        upper: &['\u{03A5}', '\u{0308}', '\u{0301}'],
    }),
    (0x0587, SpecialDefault {
        lower: &['\u{0587}'],
        title: &['\u{0535}', '\u{0582}'],
        upper: &['\u{0535}', '\u{0552}'],
    }),
    (0x1E96, SpecialDefault {
        lower: &['\u{1E96}'],
        title: &['\u{0048}', '\u{0331}'],
        upper: &['\u{0048}', '\u{0331}'],
    }),
    (0x1E97, SpecialDefault {
        lower: &['\u{1E97}'],
        title: &['\u{0054}', '\u{0308}'],
        upper: &['\u{0054}', '\u{0308}'],
    }),
    (0x1E98, SpecialDefault {
        lower: &['\u{1E98}'],
        title: &['\u{0057}', '\u{030A}'],
        upper: &['\u{0057}', '\u{030A}'],
    }),
    (0x1E99, SpecialDefault {
        lower: &['\u{1E99}'],
        title: &['\u{0059}', '\u{030A}'],
        upper: &['\u{0059}', '\u{030A}'],
    }),
    (0x1E9A, SpecialDefault {
        lower: &['\u{1E9A}'],
        title: &['\u{0041}', '\u{02BE}'],
        upper: &['\u{0041}', '\u{02BE}'],
    }),
    (0x1F50, SpecialDefault {
        lower: &['\u{1F50}'],
        title: &['\u{03A5}', '\u{0313}'],
        upper: &['\u{03A5}', '\u{0313}'],
    }),
    (0xFB00, SpecialDefault {
        lower: &['\u{FB00}'],
        title: &['\u{0046}', '\u{0066}'],
        upper: &['\u{0046}', '\u{0046}'],
    }),
    (0xFB01, SpecialDefault {
        lower: &['\u{FB01}'],
        title: &['\u{0046}', '\u{0069}'],
        upper: &['\u{0046}', '\u{0049}'],
    }),
    (0xFB02, SpecialDefault {
        lower: &['\u{FB02}'],
        title: &['\u{0046}', '\u{006C}'],
        upper: &['\u{0046}', '\u{004C}'],
    }),
    (0xFB03, SpecialDefault {
        lower: &['\u{FB03}'],
        title: &['\u{0046}', '\u{0066}', '\u{0069}'],
        upper: &['\u{0046}', '\u{0046}', '\u{0049}'],
    }),
    (0xFB04, SpecialDefault {
        lower: &['\u{FB04}'],
        title: &['\u{0046}', '\u{0066}', '\u{006C}'],
        upper: &['\u{0046}', '\u{0046}', '\u{004C}'],
    }),
    (0xFB05, SpecialDefault {
        lower: &['\u{FB05}'],
        title: &['\u{0053}', '\u{0074}'],
        upper: &['\u{0053}', '\u{0054}'],
    }),
    (0xFB06, SpecialDefault {
        lower: &['\u{FB06}'],
        title: &['\u{0053}', '\u{0074}'],
        upper: &['\u{0053}', '\u{0054}'],
    }),
    (0xFB13, SpecialDefault {
        lower: &['\u{FB13}'],
        title: &['\u{0544}', '\u{0576}'],
        upper: &['\u{0544}', '\u{0546}'],
    }),
    (0xFB14, SpecialDefault {
        lower: &['\u{FB14}'],
        title: &['\u{0544}', '\u{0565}'],
        upper: &['\u{0544}', '\u{0535}'],
    }),
    (0xFB15, SpecialDefault {
        lower: &['\u{FB15}'],
        title: &['\u{0544}', '\u{056B}'],
        upper: &['\u{0544}', '\u{053B}'],
    }),
    (0xFB16, SpecialDefault {
        lower: &['\u{FB16}'],
        title: &['\u{054E}', '\u{0576}'],
        upper: &['\u{054E}', '\u{0546}'],
    }),
    (0xFB17, SpecialDefault {
        lower: &['\u{FB17}'],
        title: &['\u{0544}', '\u{056D}'],
        upper: &['\u{0544}', '\u{053D}'],
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(SIMPLE.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(CASE_FOLDING_COMMON.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(CASE_FOLDING_FULL.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(SPECIAL_CASINGS.windows(2).all(|w| w[0].code <= w[1].code));
        assert!(SPECIAL_DEFAULTS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn conditional_records_resolve_by_code() {
        assert_eq!(special_casings(0x0049).len(), 3);
        assert_eq!(special_casings(0x0307).len(), 3);
        assert_eq!(special_casings(0x03A3).len(), 1);
        assert!(special_casings(0x0041).is_empty());
    }
}
