// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-code-point property queries.
//!
//! This module defines the closed property-value enumerations (general
//! category, scripts, blocks, break classifications) and one boolean
//! predicate per binary and derived core property. Every query is total:
//! unassigned code points answer [`GeneralCategory::Unassigned`], combining
//! class 0, [`Script::Unknown`], [`Block::NoBlock`], and the `Other`/`None`
//! member of each break classification.

use crate::tables;

/// General_Category of a code point, one of the 30 two-letter categories of
/// [UAX #44](https://www.unicode.org/reports/tr44/#General_Category_Values).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum GeneralCategory {
    /// `Lu`, an uppercase letter
    UppercaseLetter,
    /// `Ll`, a lowercase letter
    LowercaseLetter,
    /// `Lt`, a digraphic character, with first part uppercase
    TitlecaseLetter,
    /// `Lm`, a modifier letter
    ModifierLetter,
    /// `Lo`, other letters, including syllables and ideographs
    OtherLetter,
    /// `Mn`, a nonspacing combining mark (zero advance width)
    NonspacingMark,
    /// `Mc`, a spacing combining mark (positive advance width)
    SpacingMark,
    /// `Me`, an enclosing combining mark
    EnclosingMark,
    /// `Nd`, a decimal digit
    DecimalNumber,
    /// `Nl`, a letterlike numeric character
    LetterNumber,
    /// `No`, a numeric character of another type
    OtherNumber,
    /// `Pc`, a connecting punctuation mark, like a tie
    ConnectorPunctuation,
    /// `Pd`, a dash or hyphen punctuation mark
    DashPunctuation,
    /// `Ps`, an opening punctuation mark (of a pair)
    OpenPunctuation,
    /// `Pe`, a closing punctuation mark (of a pair)
    ClosePunctuation,
    /// `Pi`, an initial quotation mark
    InitialPunctuation,
    /// `Pf`, a final quotation mark
    FinalPunctuation,
    /// `Po`, a punctuation mark of another type
    OtherPunctuation,
    /// `Sm`, a symbol of mathematical use
    MathSymbol,
    /// `Sc`, a currency sign
    CurrencySymbol,
    /// `Sk`, a non-letterlike modifier symbol
    ModifierSymbol,
    /// `So`, a symbol of another type
    OtherSymbol,
    /// `Zs`, a space character (of various non-zero widths)
    SpaceSeparator,
    /// `Zl`, U+2028 LINE SEPARATOR only
    LineSeparator,
    /// `Zp`, U+2029 PARAGRAPH SEPARATOR only
    ParagraphSeparator,
    /// `Cc`, a C0 or C1 control code
    Control,
    /// `Cf`, a format control character
    Format,
    /// `Cs`, a surrogate code point
    Surrogate,
    /// `Co`, a private-use character
    PrivateUse,
    /// `Cn`, a reserved unassigned code point or a noncharacter
    Unassigned,
}

impl GeneralCategory {
    /// True for `Lu`, `Ll`, and `Lt`.
    pub fn is_cased_letter(self) -> bool {
        matches!(
            self,
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
        )
    }

    /// True for the letter categories `L*`.
    pub fn is_letter(self) -> bool {
        matches!(
            self,
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
    }

    /// True for the combining mark categories `M*`.
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
        )
    }

    /// True for the number categories `N*`.
    pub fn is_number(self) -> bool {
        matches!(
            self,
            GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
    }

    /// True for the punctuation categories `P*`.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
        )
    }

    /// True for the symbol categories `S*`.
    pub fn is_symbol(self) -> bool {
        matches!(
            self,
            GeneralCategory::MathSymbol
                | GeneralCategory::CurrencySymbol
                | GeneralCategory::ModifierSymbol
                | GeneralCategory::OtherSymbol
        )
    }

    /// True for the separator categories `Z*`.
    pub fn is_separator(self) -> bool {
        matches!(
            self,
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
    }

    /// True for the control/format/surrogate/private-use/unassigned
    /// categories `C*`.
    pub fn is_other(self) -> bool {
        matches!(
            self,
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
    }
}

/// Returns the General_Category of `c`.
pub fn general_category(c: char) -> GeneralCategory {
    general_category_u32(c as u32)
}

/// Returns the General_Category of an arbitrary code point, including
/// surrogates (`Cs`), which cannot be represented as `char`.
pub fn general_category_u32(cp: u32) -> GeneralCategory {
    tables::general_category::lookup(cp)
}

/// Whether `c` is in one of the cased letter categories `Lu`, `Ll`, `Lt`.
pub fn is_cased_letter(c: char) -> bool {
    general_category(c).is_cased_letter()
}

/// Whether `c` is in one of the letter categories `L*`.
pub fn is_letter(c: char) -> bool {
    general_category(c).is_letter()
}

/// Whether `c` is in one of the combining mark categories `M*`.
pub fn is_mark(c: char) -> bool {
    general_category(c).is_mark()
}

/// Whether `c` is in one of the number categories `N*`.
pub fn is_number(c: char) -> bool {
    general_category(c).is_number()
}

/// Whether `c` is in one of the punctuation categories `P*`.
pub fn is_punctuation(c: char) -> bool {
    general_category(c).is_punctuation()
}

/// Whether `c` is in one of the symbol categories `S*`.
pub fn is_symbol(c: char) -> bool {
    general_category(c).is_symbol()
}

/// Whether `c` is in one of the separator categories `Z*`.
pub fn is_separator(c: char) -> bool {
    general_category(c).is_separator()
}

/// Whether `c` is in one of the categories `C*`.
pub fn is_other(c: char) -> bool {
    general_category(c).is_other()
}

/// Returns the Canonical_Combining_Class of `c`; 0 for starters.
pub fn combining_class(c: char) -> u8 {
    tables::normalization::combining_class(c as u32)
}

// Binary properties of PropList.txt.

/// White_Space
pub fn is_white_space(c: char) -> bool {
    tables::set_contains(tables::prop_list::WHITE_SPACE, c as u32)
}

/// Bidi_Control
pub fn is_bidi_control(c: char) -> bool {
    tables::set_contains(tables::prop_list::BIDI_CONTROL, c as u32)
}

/// Join_Control (ZWJ and ZWNJ)
pub fn is_join_control(c: char) -> bool {
    tables::set_contains(tables::prop_list::JOIN_CONTROL, c as u32)
}

/// Dash
pub fn is_dash(c: char) -> bool {
    tables::set_contains(tables::prop_list::DASH, c as u32)
}

/// Hyphen
pub fn is_hyphen(c: char) -> bool {
    tables::set_contains(tables::prop_list::HYPHEN, c as u32)
}

/// Quotation_Mark
pub fn is_quotation_mark(c: char) -> bool {
    tables::set_contains(tables::prop_list::QUOTATION_MARK, c as u32)
}

/// Terminal_Punctuation
pub fn is_terminal_punctuation(c: char) -> bool {
    tables::set_contains(tables::prop_list::TERMINAL_PUNCTUATION, c as u32)
}

/// Other_Math
pub fn is_other_math(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_MATH, c as u32)
}

/// Hex_Digit
pub fn is_hex_digit(c: char) -> bool {
    tables::set_contains(tables::prop_list::HEX_DIGIT, c as u32)
}

/// ASCII_Hex_Digit
pub fn is_ascii_hex_digit(c: char) -> bool {
    tables::set_contains(tables::prop_list::ASCII_HEX_DIGIT, c as u32)
}

/// Other_Alphabetic
pub fn is_other_alphabetic(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_ALPHABETIC, c as u32)
}

/// Ideographic
pub fn is_ideographic(c: char) -> bool {
    tables::set_contains(tables::prop_list::IDEOGRAPHIC, c as u32)
}

/// Diacritic
pub fn is_diacritic(c: char) -> bool {
    tables::set_contains(tables::prop_list::DIACRITIC, c as u32)
}

/// Extender
pub fn is_extender(c: char) -> bool {
    tables::set_contains(tables::prop_list::EXTENDER, c as u32)
}

/// Other_Lowercase
pub fn is_other_lowercase(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_LOWERCASE, c as u32)
}

/// Other_Uppercase
pub fn is_other_uppercase(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_UPPERCASE, c as u32)
}

/// Noncharacter_Code_Point
pub fn is_noncharacter_code_point(c: char) -> bool {
    tables::set_contains(tables::prop_list::NONCHARACTER_CODE_POINT, c as u32)
}

/// Other_Grapheme_Extend
pub fn is_other_grapheme_extend(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_GRAPHEME_EXTEND, c as u32)
}

/// IDS_Binary_Operator
pub fn is_ids_binary_operator(c: char) -> bool {
    tables::set_contains(tables::prop_list::IDS_BINARY_OPERATOR, c as u32)
}

/// IDS_Trinary_Operator
pub fn is_ids_trinary_operator(c: char) -> bool {
    tables::set_contains(tables::prop_list::IDS_TRINARY_OPERATOR, c as u32)
}

/// Radical
pub fn is_radical(c: char) -> bool {
    tables::set_contains(tables::prop_list::RADICAL, c as u32)
}

/// Unified_Ideograph
pub fn is_unified_ideograph(c: char) -> bool {
    tables::set_contains(tables::prop_list::UNIFIED_IDEOGRAPH, c as u32)
}

/// Other_Default_Ignorable_Code_Point
pub fn is_other_default_ignorable_code_point(c: char) -> bool {
    tables::set_contains(
        tables::prop_list::OTHER_DEFAULT_IGNORABLE_CODE_POINT,
        c as u32,
    )
}

/// Deprecated
pub fn is_deprecated(c: char) -> bool {
    tables::set_contains(tables::prop_list::DEPRECATED, c as u32)
}

/// Soft_Dotted: characters with a dot that disappears under accents, like
/// `i` and `j`.
pub fn is_soft_dotted(c: char) -> bool {
    tables::set_contains(tables::prop_list::SOFT_DOTTED, c as u32)
}

/// Logical_Order_Exception
pub fn is_logical_order_exception(c: char) -> bool {
    tables::set_contains(tables::prop_list::LOGICAL_ORDER_EXCEPTION, c as u32)
}

/// Other_ID_Start
pub fn is_other_id_start(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_ID_START, c as u32)
}

/// Other_ID_Continue
pub fn is_other_id_continue(c: char) -> bool {
    tables::set_contains(tables::prop_list::OTHER_ID_CONTINUE, c as u32)
}

/// Sentence_Terminal
pub fn is_sentence_terminal(c: char) -> bool {
    tables::set_contains(tables::prop_list::SENTENCE_TERMINAL, c as u32)
}

/// Variation_Selector
pub fn is_variation_selector(c: char) -> bool {
    tables::set_contains(tables::prop_list::VARIATION_SELECTOR, c as u32)
}

/// Pattern_White_Space
pub fn is_pattern_white_space(c: char) -> bool {
    tables::set_contains(tables::prop_list::PATTERN_WHITE_SPACE, c as u32)
}

/// Pattern_Syntax
pub fn is_pattern_syntax(c: char) -> bool {
    tables::set_contains(tables::prop_list::PATTERN_SYNTAX, c as u32)
}

/// Prepended_Concatenation_Mark
pub fn is_prepended_concatenation_mark(c: char) -> bool {
    tables::set_contains(tables::prop_list::PREPENDED_CONCATENATION_MARK, c as u32)
}

// Derived core properties of DerivedCoreProperties.txt.

/// Math
pub fn is_math(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::MATH, c as u32)
}

/// Alphabetic
pub fn is_alphabetic(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::ALPHABETIC, c as u32)
}

/// Lowercase
pub fn is_lowercase(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::LOWERCASE, c as u32)
}

/// Uppercase
pub fn is_uppercase(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::UPPERCASE, c as u32)
}

/// Cased: `c` has the Lowercase or Uppercase property or is `Lt`.
pub fn is_cased(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::CASED, c as u32)
}

/// Case_Ignorable: `c` is transparent to the casing context scans of
/// Unicode Table 3-17 (Final_Sigma and friends).
pub fn is_case_ignorable(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::CASE_IGNORABLE, c as u32)
}

/// Changes_When_Lowercased
pub fn is_changes_when_lowercased(c: char) -> bool {
    tables::set_contains(
        tables::derived_core_properties::CHANGES_WHEN_LOWERCASED,
        c as u32,
    )
}

/// Changes_When_Uppercased
pub fn is_changes_when_uppercased(c: char) -> bool {
    tables::set_contains(
        tables::derived_core_properties::CHANGES_WHEN_UPPERCASED,
        c as u32,
    )
}

/// Changes_When_Titlecased
pub fn is_changes_when_titlecased(c: char) -> bool {
    tables::set_contains(
        tables::derived_core_properties::CHANGES_WHEN_TITLECASED,
        c as u32,
    )
}

/// Changes_When_Casefolded
pub fn is_changes_when_casefolded(c: char) -> bool {
    tables::set_contains(
        tables::derived_core_properties::CHANGES_WHEN_CASEFOLDED,
        c as u32,
    )
}

/// Changes_When_Casemapped
pub fn is_changes_when_casemapped(c: char) -> bool {
    tables::set_contains(
        tables::derived_core_properties::CHANGES_WHEN_CASEMAPPED,
        c as u32,
    )
}

/// ID_Start
pub fn is_id_start(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::ID_START, c as u32)
}

/// ID_Continue
pub fn is_id_continue(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::ID_CONTINUE, c as u32)
}

/// XID_Start
pub fn is_xid_start(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::XID_START, c as u32)
}

/// XID_Continue
pub fn is_xid_continue(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::XID_CONTINUE, c as u32)
}

/// Default_Ignorable_Code_Point
pub fn is_default_ignorable_code_point(c: char) -> bool {
    tables::set_contains(
        tables::derived_core_properties::DEFAULT_IGNORABLE_CODE_POINT,
        c as u32,
    )
}

/// Grapheme_Extend
pub fn is_grapheme_extend(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::GRAPHEME_EXTEND, c as u32)
}

/// Grapheme_Base
pub fn is_grapheme_base(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::GRAPHEME_BASE, c as u32)
}

/// Grapheme_Link
pub fn is_grapheme_link(c: char) -> bool {
    tables::set_contains(tables::derived_core_properties::GRAPHEME_LINK, c as u32)
}

/// Script of a code point, per
/// [UAX #24](https://www.unicode.org/reports/tr24/). Code points shared
/// across scripts answer [`Script::Common`] or [`Script::Inherited`]; see
/// [`is_script`] for membership tests that honour Script_Extensions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[allow(missing_docs)] // variant names are the UCD script names
pub enum Script {
    Arabic,
    Armenian,
    Bengali,
    Bopomofo,
    Braille,
    Cherokee,
    Common,
    Coptic,
    Cyrillic,
    Devanagari,
    Ethiopic,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Inherited,
    Kannada,
    Katakana,
    Khmer,
    Lao,
    Latin,
    Malayalam,
    Mongolian,
    Myanmar,
    Ogham,
    Oriya,
    Runic,
    Sinhala,
    Syriac,
    Tamil,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Unknown,
    Yi,
}

/// Returns the primary Script of `c`.
pub fn script(c: char) -> Script {
    tables::scripts::lookup(c as u32)
}

/// Returns the Script_Extensions of `c`: the scripts whose text commonly
/// uses `c`. For code points without an extensions entry this is the
/// singleton set of the primary script.
pub fn script_extensions(c: char) -> &'static [Script] {
    match tables::scripts::extensions(c as u32) {
        Some(list) => list,
        None => tables::scripts::singleton(script(c)),
    }
}

/// Whether `c` belongs to script `sc`.
///
/// Characters whose primary script is Common or Inherited are resolved
/// through Script_Extensions, so punctuation shared between scripts answers
/// true for each of them.
pub fn is_script(sc: Script, c: char) -> bool {
    match script(c) {
        Script::Common | Script::Inherited => script_extensions(c).contains(&sc),
        s => s == sc,
    }
}

/// Allocation block of a code point, per Blocks.txt.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[allow(missing_docs)] // variant names are the UCD block names
pub enum Block {
    NoBlock,
    BasicLatin,
    Latin1Supplement,
    LatinExtendedA,
    LatinExtendedB,
    IpaExtensions,
    SpacingModifierLetters,
    CombiningDiacriticalMarks,
    GreekAndCoptic,
    Cyrillic,
    CyrillicSupplement,
    Armenian,
    Hebrew,
    Arabic,
    Syriac,
    Thaana,
    Devanagari,
    Bengali,
    Tamil,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Georgian,
    HangulJamo,
    Ethiopic,
    Cherokee,
    Ogham,
    Runic,
    Khmer,
    Mongolian,
    LatinExtendedAdditional,
    GreekExtended,
    GeneralPunctuation,
    SuperscriptsAndSubscripts,
    CurrencySymbols,
    CombiningDiacriticalMarksForSymbols,
    LetterlikeSymbols,
    NumberForms,
    Arrows,
    MathematicalOperators,
    MiscellaneousTechnical,
    EnclosedAlphanumerics,
    GeometricShapes,
    MiscellaneousSymbols,
    Dingbats,
    CjkSymbolsAndPunctuation,
    Hiragana,
    Katakana,
    Bopomofo,
    HangulCompatibilityJamo,
    KatakanaPhoneticExtensions,
    CjkUnifiedIdeographsExtensionA,
    CjkUnifiedIdeographs,
    YiSyllables,
    YiRadicals,
    HangulJamoExtendedA,
    HangulSyllables,
    HangulJamoExtendedB,
    HighSurrogates,
    LowSurrogates,
    PrivateUseArea,
    CjkCompatibilityIdeographs,
    AlphabeticPresentationForms,
    ArabicPresentationFormsA,
    VariationSelectors,
    CombiningHalfMarks,
    CjkCompatibilityForms,
    SmallFormVariants,
    ArabicPresentationFormsB,
    HalfwidthAndFullwidthForms,
    Specials,
    MahjongTiles,
    DominoTiles,
    PlayingCards,
    EnclosedAlphanumericSupplement,
    EnclosedIdeographicSupplement,
    MiscellaneousSymbolsAndPictographs,
    Emoticons,
    OrnamentalDingbats,
    TransportAndMapSymbols,
    SupplementalSymbolsAndPictographs,
    SymbolsAndPictographsExtendedA,
    CjkUnifiedIdeographsExtensionB,
    Tags,
    VariationSelectorsSupplement,
    SupplementaryPrivateUseAreaA,
    SupplementaryPrivateUseAreaB,
}

/// Returns the block `c` is allocated in, or [`Block::NoBlock`].
pub fn block(c: char) -> Block {
    tables::blocks::lookup(c as u32)
}

/// Emoji classification of a code point, per
/// [UTS #51](https://www.unicode.org/reports/tr51/).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum EmojiProperty {
    /// Not part of the emoji data.
    None,
    /// Emoji
    Emoji,
    /// Emoji_Presentation
    EmojiPresentation,
    /// Emoji_Modifier (the skin tone modifiers)
    EmojiModifier,
    /// Emoji_Modifier_Base
    EmojiModifierBase,
    /// Emoji_Component
    EmojiComponent,
    /// Extended_Pictographic, the base class of emoji ZWJ sequences
    ExtendedPictographic,
}

/// Returns the emoji classification of `c`.
pub fn emoji(c: char) -> EmojiProperty {
    tables::emoji_data::lookup(c as u32)
}

/// Grapheme_Cluster_Break classification of
/// [UAX #29 §3.1](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[allow(missing_docs)] // variant names are the UAX #29 class names
pub enum GraphemeClusterBreak {
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    Other,
}

/// Returns the Grapheme_Cluster_Break class of `c`.
pub fn grapheme_cluster_break(c: char) -> GraphemeClusterBreak {
    tables::grapheme_cluster_break::lookup(c as u32)
}

/// Word_Break classification of
/// [UAX #29 §4.1](https://www.unicode.org/reports/tr29/#Word_Break_Property_Values).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[allow(missing_docs)] // variant names are the UAX #29 class names
pub enum WordBreak {
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    Format,
    RegionalIndicator,
    WSegSpace,
    Katakana,
    ALetter,
    HebrewLetter,
    MidLetter,
    MidNum,
    MidNumLet,
    SingleQuote,
    DoubleQuote,
    Numeric,
    ExtendNumLet,
    Other,
}

/// Returns the Word_Break class of `c`.
pub fn word_break(c: char) -> WordBreak {
    tables::word_break::lookup(c as u32)
}

/// Sentence_Break classification of
/// [UAX #29 §5.1](https://www.unicode.org/reports/tr29/#Sentence_Break_Property_Values).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[allow(missing_docs)] // variant names are the UAX #29 class names
pub enum SentenceBreak {
    CR,
    LF,
    Sep,
    Extend,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    STerm,
    Close,
    SContinue,
    Other,
}

/// Returns the Sentence_Break class of `c`.
pub fn sentence_break(c: char) -> SentenceBreak {
    tables::sentence_break::lookup(c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults() {
        assert_eq!(general_category('\u{0378}'), GeneralCategory::Unassigned);
        assert_eq!(general_category_u32(0xD800), GeneralCategory::Surrogate);
        assert_eq!(general_category_u32(0x10FFFF), GeneralCategory::Unassigned);
    }

    #[test]
    fn category_sets() {
        assert!(is_letter('A'));
        assert!(is_cased_letter('ǅ'));
        assert!(is_mark('\u{0301}'));
        assert!(is_number('7'));
        assert!(is_punctuation('!'));
        assert!(is_symbol('+'));
        assert!(is_separator(' '));
        assert!(is_other('\u{0007}'));
        assert!(!is_letter('1'));
    }

    #[test]
    fn binary_properties() {
        assert!(is_white_space(' '));
        assert!(is_white_space('\u{3000}'));
        assert!(!is_white_space('x'));
        assert!(is_soft_dotted('i'));
        assert!(is_soft_dotted('j'));
        assert!(!is_soft_dotted('l'));
        assert!(is_hex_digit('F'));
        assert!(!is_hex_digit('G'));
        assert!(is_ideographic('\u{4E2D}'));
        assert!(is_noncharacter_code_point('\u{FFFE}'));
    }

    #[test]
    fn derived_properties() {
        assert!(is_alphabetic('ß'));
        assert!(is_cased('A'));
        assert!(is_cased('σ'));
        assert!(!is_cased('!'));
        assert!(is_case_ignorable('\u{0301}'));
        assert!(is_case_ignorable('\u{0027}'));
        assert!(is_changes_when_uppercased('ß'));
        assert!(!is_changes_when_uppercased('S'));
        assert!(is_id_start('A'));
        assert!(!is_id_start('1'));
        assert!(is_id_continue('1'));
    }

    #[test]
    fn scripts() {
        assert_eq!(script('a'), Script::Latin);
        assert_eq!(script('α'), Script::Greek);
        assert_eq!(script('!'), Script::Common);
        assert_eq!(script('\u{0301}'), Script::Inherited);
        assert!(is_script(Script::Latin, 'a'));
        assert!(!is_script(Script::Greek, 'a'));
        // U+3099 is Inherited with {Hiragana, Katakana} extensions.
        assert!(is_script(Script::Hiragana, '\u{3099}'));
        assert!(is_script(Script::Katakana, '\u{3099}'));
        assert!(!is_script(Script::Latin, '\u{3099}'));
    }

    #[test]
    fn blocks() {
        assert_eq!(block('A'), Block::BasicLatin);
        assert_eq!(block('ä'), Block::Latin1Supplement);
        assert_eq!(block('\u{AC00}'), Block::HangulSyllables);
        assert_eq!(block('\u{1F600}'), Block::Emoticons);
        assert_eq!(block('\u{0530}'), Block::Armenian);
    }

    #[test]
    fn combining_classes() {
        assert_eq!(combining_class('a'), 0);
        assert_eq!(combining_class('\u{0301}'), 230);
        assert_eq!(combining_class('\u{0323}'), 220);
        assert_eq!(combining_class('\u{0345}'), 240);
        assert_eq!(combining_class('\u{3099}'), 8);
    }

    #[test]
    fn break_classes() {
        assert_eq!(grapheme_cluster_break('\r'), GraphemeClusterBreak::CR);
        assert_eq!(
            grapheme_cluster_break('\u{1F1FA}'),
            GraphemeClusterBreak::RegionalIndicator
        );
        assert_eq!(grapheme_cluster_break('\u{AC00}'), GraphemeClusterBreak::LV);
        assert_eq!(grapheme_cluster_break('\u{AC01}'), GraphemeClusterBreak::LVT);
        assert_eq!(word_break('a'), WordBreak::ALetter);
        assert_eq!(word_break('\u{05D0}'), WordBreak::HebrewLetter);
        assert_eq!(word_break(':'), WordBreak::MidLetter);
        assert_eq!(sentence_break('.'), SentenceBreak::ATerm);
        assert_eq!(sentence_break('?'), SentenceBreak::STerm);
        assert_eq!(sentence_break(')'), SentenceBreak::Close);
    }

    #[test]
    fn emoji_classes() {
        assert_eq!(emoji('\u{1F600}'), EmojiProperty::EmojiPresentation);
        assert_eq!(emoji('\u{2328}'), EmojiProperty::ExtendedPictographic);
        assert_eq!(emoji('\u{1F3FB}'), EmojiProperty::EmojiModifier);
        assert_eq!(emoji('\u{1F1FA}'), EmojiProperty::EmojiComponent);
        assert_eq!(emoji('a'), EmojiProperty::None);
    }
}
