//! The fixed category registry (spec §4.1).
//!
//! `Tag` is a closed enum: every category the classifiers can emit is a
//! variant here, and [`REGISTRY`] lists them in declaration order. That
//! order is a user-visible contract — it is also the order sections appear
//! in the final report — so it must never be reshuffled once published.

use std::fmt;

macro_rules! tags {
    ($( $variant:ident => $name:literal, $desc:literal ; )*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Tag {
            $( $variant, )*
        }

        impl Tag {
            /// The stable wire identifier, e.g. `NON_UTF8`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Tag::$variant => $name, )*
                }
            }

            /// Human-readable description shown as the report section header.
            pub fn description(self) -> &'static str {
                match self {
                    $( Tag::$variant => $desc, )*
                }
            }
        }

        /// All tags, in registry (== report) order.
        pub const REGISTRY: &[Tag] = &[ $( Tag::$variant, )* ];
    };
}

tags! {
    // --- encoding integrity ---
    NonUtf8 => "NON_UTF8", "Ill-formed UTF-8 byte sequence";
    Utf8NonShortest => "UTF8_NON_SHORTEST", "Overlong (non-shortest-form) UTF-8 encoding";

    // --- control / zero-width / formatting ---
    ControlCharacter => "CONTROL_CHARACTER", "C1 control character";
    NonAsciiWhitespace => "NON_ASCII_WHITESPACE", "Non-ASCII whitespace character";
    NonAsciiWhitespaceChar => "NON_ASCII_WHITESPACE_CHAR", "Non-ASCII whitespace character (per character)";
    ZeroWidth => "ZERO_WIDTH", "Zero-width or directional formatting character";
    InitialByteOrderMark => "INITIAL_BYTE_ORDER_MARK", "Byte order mark at the start of a token";
    CombiningDiacritic => "COMBINING_DIACRITIC", "Combining diacritical mark";
    VariationSelector => "VARIATION_SELECTOR", "Variation selector";
    Tag_ => "TAG", "Unicode tag character";
    TagChar => "TAG_CHAR", "Unicode tag character (per character)";

    // --- symbols ---
    NonAsciiPunct => "NON_ASCII_PUNCT", "Non-ASCII punctuation character";
    NonAsciiPunctChar => "NON_ASCII_PUNCT_CHAR", "Non-ASCII punctuation character (per character)";
    LetterlikeSymbol => "LETTERLIKE_SYMBOL", "Letterlike symbol";
    LetterlikeSymbolChar => "LETTERLIKE_SYMBOL_CHAR", "Letterlike symbol (per character)";
    MathematicalOperator => "MATHEMATICAL_OPERATOR", "Mathematical operator symbol";
    MathematicalOperatorChar => "MATHEMATICAL_OPERATOR_CHAR", "Mathematical operator symbol (per character)";
    TechnicalSymbol => "TECHNICAL_SYMBOL", "Miscellaneous technical symbol";
    TechnicalSymbolChar => "TECHNICAL_SYMBOL_CHAR", "Miscellaneous technical symbol (per character)";
    ArrowSymbol => "ARROW_SYMBOL", "Arrow symbol";
    ArrowSymbolChar => "ARROW_SYMBOL_CHAR", "Arrow symbol (per character)";
    MiscSymbol => "MISC_SYMBOL", "Miscellaneous symbol";
    MiscSymbolChar => "MISC_SYMBOL_CHAR", "Miscellaneous symbol (per character)";
    GeometricShape => "GEOMETRIC_SHAPE", "Geometric shape symbol";
    GeometricShapeChar => "GEOMETRIC_SHAPE_CHAR", "Geometric shape symbol (per character)";
    EnclosedAlphanumeric => "ENCLOSED_ALPHANUMERIC", "Enclosed alphanumeric symbol";
    BoxDrawing => "BOX_DRAWING", "Box drawing character";
    Pictograph => "PICTOGRAPH", "Pictograph or emoji character";
    OtherChar => "OTHER_CHAR", "Character matching no known range";
    ReplacementCharacter => "REPLACEMENT_CHARACTER", "Unicode replacement character U+FFFD";
    ReplacementObject => "REPLACEMENT_OBJECT", "Object replacement character";

    // --- Latin and general alphabetics ---
    AsciiLetter => "ASCII_LETTER", "Plain ASCII letter token";
    LatinPlusAlpha => "LATIN_PLUS_ALPHA", "Latin-script letter outside plain ASCII";
    LanguageSpecific => "LANGUAGE_SPECIFIC", "Character expected for the configured language";
    LatinExtendedLigature => "LATIN_EXTENDED_LIGATURE", "Latin extended ligature (IJ/ij, Œ/œ)";
    Fullwidth => "FULLWIDTH", "Fullwidth form character";
    Ipa => "IPA", "International Phonetic Alphabet extension";

    // --- Greek / Cyrillic / Armenian / Hebrew ---
    Greek => "GREEK", "Greek or Coptic character";
    Cyrillic => "CYRILLIC", "Cyrillic character";
    Armenian => "ARMENIAN", "Armenian character";
    Hebrew => "HEBREW", "Hebrew character";

    // --- Arabic family ---
    ArabicLetter => "ARABIC_LETTER", "Arabic letter";
    ArabicLetterYeh => "ARABIC_LETTER_YEH", "Arabic letter yeh";
    FarsiLetterYeh => "FARSI_LETTER_YEH", "Farsi letter yeh";
    ArabicLetterKaf => "ARABIC_LETTER_KAF", "Arabic letter kaf";
    FarsiLetterKeheh => "FARSI_LETTER_KEHEF", "Farsi letter keheh";
    ArabicTatweel => "ARABIC_TATWEEL", "Arabic tatweel elongation character";
    ArabicDigit => "ARABIC_DIGIT", "Arabic-Indic digit";
    ArabicIndicDigit => "ARABIC_INDIC_DIGIT", "Extended Arabic-Indic digit";
    ArabicPunctuation => "ARABIC_PUNCTUATION", "Arabic punctuation mark";
    ArabicPresentationForm => "ARABIC_PRESENTATION_FORM", "Arabic presentation form character";
    ArabicLigature => "ARABIC_LIGATURE", "Arabic ligature character";

    // --- Syriac / Thaana ---
    Syriac => "SYRIAC", "Syriac character";
    Thaana => "THAANA", "Thaana character";

    // --- Indic row ---
    Devanagari => "DEVANAGARI", "Devanagari character";
    Bengali => "BENGALI", "Bengali character";
    Gurmukhi => "GURMUKHI", "Gurmukhi character";
    Gujarati => "GUJARATI", "Gujarati character";
    Oriya => "ORIYA", "Oriya character";
    Tamil => "TAMIL", "Tamil character";
    Telugu => "TELUGU", "Telugu character";
    Kannada => "KANNADA", "Kannada character";
    Malayalam => "MALAYALAM", "Malayalam character";
    Sinhala => "SINHALA", "Sinhala character";

    // --- South-East Asian ---
    Thai => "THAI", "Thai character";
    Lao => "LAO", "Lao character";
    Khmer => "KHMER", "Khmer character";
    Myanmar => "MYANMAR", "Myanmar character";

    // --- Tibetan ---
    TibetanLetter => "TIBETAN_LETTER", "Tibetan letter";
    TibetanPunctuation => "TIBETAN_PUNCTUATION", "Tibetan punctuation mark";

    // --- Georgian ---
    GeorgianAsomtavruli => "GEORGIAN_ASOMTAVRULI", "Georgian Asomtavruli character";
    GeorgianNuskhuri => "GEORGIAN_NUSKHURI", "Georgian Nuskhuri character";
    Georgian => "GEORGIAN", "Georgian Mkhedruli character";
    GeorgianArchaic => "GEORGIAN_ARCHAIC", "Archaic Georgian character";
    GeorgianEmphasis => "GEORGIAN_EMPHASIS", "Georgian emphasis mark";

    // --- other scripts ---
    Ethiopic => "ETHIOPIC", "Ethiopic character";
    Cherokee => "CHEROKEE", "Cherokee character";
    CanadianSyllabics => "CANADIAN_SYLLABICS", "Unified Canadian Aboriginal Syllabics character";
    Ogham => "OGHAM", "Ogham character";
    Runic => "RUNIC", "Runic character";
    Mongolian => "MONGOLIAN", "Mongolian character";
    Buginese => "BUGINESE", "Buginese character";
    Sundanese => "SUNDANESE", "Sundanese character";
    Yi => "YI", "Yi syllable";
    Lisu => "LISU", "Lisu character";
    Javanese => "JAVANESE", "Javanese character";
    MeeteiMayek => "MEETEI_MAYEK", "Meetei Mayek character";
    Hangul => "HANGUL", "Hangul syllable or jamo";
    Gothic => "GOTHIC", "Gothic character";
    Phoenician => "PHOENICIAN", "Phoenician character";
    Cuneiform => "CUNEIFORM", "Cuneiform character";
    EgyptianHieroglyph => "EGYPTIAN_HIEROGLYPH", "Egyptian hieroglyph";
    MathematicalAlphanumeric => "MATHEMATICAL_ALPHANUMERIC", "Mathematical alphanumeric symbol";

    // --- CJK ---
    Cjk => "CJK", "CJK Unified Ideograph";
    CjkExtension => "CJK_EXTENSION", "CJK Unified Ideograph (supplementary plane)";
    CjkSquaredLatinAbbreviation => "CJK_SQUARED_LATIN_ABBREVIATION", "CJK squared Latin abbreviation";

    // --- private use / scripts of special interest ---
    PrivateUse => "PRIVATE_USE", "Private use area character";
    KlingonPiqad => "KLINGON_PIQAD", "Klingon pIqaD character (private use)";

    // --- Devanagari nukta sub-analysis ---
    StdSepNukta => "STD_SEP_NUKTA", "Standard separately-encoded nukta";
    AltSepNukta => "ALT_SEP_NUKTA", "Nukta encoded separately in an unexpected position";
    StdCmpNukta => "STD_CMP_NUKTA", "Standard pre-composed nukta character";
    AltCmpNukta => "ALT_CMP_NUKTA", "Legacy pre-composed nukta character";
    DisVsgnNukta => "DIS_VSGN_NUKTA", "Vowel sign ordered before nukta";

    // --- mixed script ---
    MixedCyrillicLatin => "MIXED_CYRILLIC_LATIN", "Token mixing Cyrillic and Latin letters";
    MixedCjkAscii => "MIXED_CJK_ASCII", "Token mixing CJK and ASCII characters";
    MixedArabicAscii => "MIXED_ARABIC_ASCII", "Token mixing Arabic and ASCII characters";
    ArabicPrefixAscii => "ARABIC_PREFIX_ASCII", "Known Arabic prefix attached to an ASCII stem";
    MixedCyrillicPunctPrefix => "MIXED_CYRILLIC_PUNCT_PREFIX", "Cyrillic token with leading ASCII punctuation";
    MixedCyrillicPunctSuffix => "MIXED_CYRILLIC_PUNCT_SUFFIX", "Cyrillic token with trailing ASCII punctuation";
    MixedCyrillicPunctPeriod => "MIXED_CYRILLIC_PUNCT_PERIOD", "Cyrillic token with a single trailing period";
    MixedCyrillicPunctMixed => "MIXED_CYRILLIC_PUNCT_MIXED", "Cyrillic token with interior ASCII punctuation";
    MixedGeorgianPunctPrefix => "MIXED_GEORGIAN_PUNCT_PREFIX", "Georgian token with leading ASCII punctuation";
    MixedGeorgianPunctSuffix => "MIXED_GEORGIAN_PUNCT_SUFFIX", "Georgian token with trailing ASCII punctuation";
    MixedGeorgianPunctPeriod => "MIXED_GEORGIAN_PUNCT_PERIOD", "Georgian token with a single trailing period";
    MixedGeorgianPunctMixed => "MIXED_GEORGIAN_PUNCT_MIXED", "Georgian token with interior ASCII punctuation";

    // --- tokenization quality ---
    UnsplitPunctAlphaHyphen => "UNSPLIT_PUNCT_ALPHA_HYPHEN", "Leading letters followed by hyphen(s) not split off";
    UnsplitPunct => "UNSPLIT_PUNCT", "Punctuation not split off from adjoining letters/digits";
    UnsplitApoS => "UNSPLIT_APO_S", "Trailing possessive/plural apostrophe-s not split off";
    UnsplitApoV => "UNSPLIT_APO_V", "Trailing English contraction clitic not split off";
    UnsplitNot => "UNSPLIT_NOT", "Trailing \"n't\" or \"cannot\" not split off";
    UnsplitPeriod => "UNSPLIT_PERIOD", "Trailing sentence period not split off";
    NumUnsplitPeriod => "NUM_UNSPLIT_PERIOD", "Trailing period after a bare number";
    BenUnsplitPeriod => "BEN_UNSPLIT_PERIOD", "Benign exemption to UNSPLIT_PERIOD (abbreviation/number/domain)";
    BenUnsplitApo => "BEN_UNSPLIT_APO", "Benign exemption to an apostrophe-contraction check";
    BenUnsplitPunct => "BEN_UNSPLIT_PUNCT", "Benign exemption to a punctuation-unsplit check";
    Email => "EMAIL", "Recognized e-mail address";
    Url => "URL", "Recognized URL";
    Hashtag => "HASHTAG", "Recognized hashtag";
    Handle => "HANDLE", "Recognized social-media handle";
    Xml => "XML", "Recognized XML/HTML tag or entity";
    SuspiciousUrl => "SUSPICIOUS_URL", "Token resembling a URL that failed clean recognition";

    // --- line pre-scan (split artifacts) ---
    BrokenUrl => "BROKEN_URL", "URL split across whitespace by tokenization";
    BrokenEmail => "BROKEN_EMAIL", "E-mail address split across whitespace by tokenization";
    BrokenFilename => "BROKEN_FILENAME", "Filename split across whitespace by tokenization";
    BrokenUrlFuzzy => "BROKEN_URL_FUZZY", "URL-like split artifact matched by a fallback pattern";
    BrokenEmailFuzzy => "BROKEN_EMAIL_FUZZY", "E-mail-like split artifact matched by a fallback pattern";
    SplitXml => "SPLIT_XML", "XML/HTML tag split across whitespace";
    XmlEscDec => "XML_ESC_DEC", "Decimal XML character escape";
    XmlEscHex => "XML_ESC_HEX", "Hexadecimal XML character escape";
    XmlEscStd => "XML_ESC_STD", "Standard named XML entity";
    XmlEscAbc => "XML_ESC_ABC", "Non-standard named XML entity";
    UnusualPunctComb => "UNUSUAL_PUNCT_COMB", "Unusual punctuation combination";

    // --- length ---
    LongToken20 => "LONG_TOKEN_20", "Token at or above the configured long-token threshold";
    LongToken30 => "LONG_TOKEN_30", "Token at or above 30 leading bytes";
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Tag {
    /// True if this tag is declared in the registry (always true for a
    /// value of this type — the check exists so call sites that accept a
    /// tag from outside the closed enum, e.g. deserialized from JSON, can
    /// fail fast per spec §7 rather than silently emitting an unknown
    /// category).
    pub fn contains(self) -> bool {
        REGISTRY.contains(&self)
    }

    /// The `_CHAR` sibling tag that should also be noted whenever this tag
    /// fires with a character available (spec §4.2 "Side effect").
    pub fn char_sibling(self) -> Option<Tag> {
        match self {
            Tag::NonAsciiPunct => Some(Tag::NonAsciiPunctChar),
            Tag::NonAsciiWhitespace => Some(Tag::NonAsciiWhitespaceChar),
            Tag::GeometricShape => Some(Tag::GeometricShapeChar),
            Tag::LetterlikeSymbol => Some(Tag::LetterlikeSymbolChar),
            Tag::MathematicalOperator => Some(Tag::MathematicalOperatorChar),
            Tag::TechnicalSymbol => Some(Tag::TechnicalSymbolChar),
            Tag::ArrowSymbol => Some(Tag::ArrowSymbolChar),
            Tag::MiscSymbol => Some(Tag::MiscSymbolChar),
            Tag::Tag_ => Some(Tag::TagChar),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_no_duplicate_tags() {
        let mut seen = std::collections::HashSet::new();
        for tag in REGISTRY {
            assert!(seen.insert(tag.name()), "duplicate tag {}", tag.name());
        }
    }

    #[test]
    fn registry_order_is_stable_across_lookups() {
        let first_pass: Vec<_> = REGISTRY.iter().map(|t| t.name()).collect();
        let second_pass: Vec<_> = REGISTRY.iter().map(|t| t.name()).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn char_sibling_mapping_matches_spec_list() {
        let with_sibling = [
            Tag::NonAsciiPunct,
            Tag::NonAsciiWhitespace,
            Tag::GeometricShape,
            Tag::LetterlikeSymbol,
            Tag::MathematicalOperator,
            Tag::TechnicalSymbol,
            Tag::ArrowSymbol,
            Tag::MiscSymbol,
            Tag::Tag_,
        ];
        for tag in with_sibling {
            assert!(tag.char_sibling().is_some());
        }
        assert!(Tag::AsciiLetter.char_sibling().is_none());
    }
}
