//! The character classifier (spec §4.3): walks the raw bytes of one token,
//! validates UTF-8 framing, and assigns category tags by codepoint range.

use crate::language::LanguagePolicy;
use crate::registry::Tag;
use crate::store::{ExampleStore, Location, Mode};

/// Byte-range decision table plus per-codepoint tagging for one token.
///
/// Deterministic and stateless across tokens. Allocates nothing for a
/// fully-ASCII token (the common case): the byte walk only builds a `char`
/// and a short `&str` slice when it actually needs to note an issue.
pub fn classify_token_chars(
    store: &mut ExampleStore,
    policy: &LanguagePolicy,
    token: &str,
    location: &Location,
) {
    let bytes = token.as_bytes();
    let mut i = 0;
    let mut first_emission = true;
    // Tracks codepoint *position*, independent of `first_emission`: a
    // leading codepoint that emits no tag (e.g. ASCII punctuation) must
    // still count as "the first codepoint" so a following BOM is correctly
    // recognized as non-initial (spec §4.3 step 8 keys on token position).
    let mut first_codepoint = true;

    // Step 1: token begins with continuation bytes.
    if let Some(&b0) = bytes.first() {
        if is_continuation(b0) {
            note(
                store,
                &mut first_emission,
                Tag::NonUtf8,
                token,
                location,
                None,
            );
            while i < bytes.len() && is_continuation(bytes[i]) {
                i += 1;
            }
        }
    }

    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            let ch = b as char;
            classify_and_note(store, policy, &mut first_emission, &mut first_codepoint, ch, token, location);
            i += 1;
            continue;
        }

        if is_continuation(b) {
            // Stray continuation byte outside a lead sequence.
            note(
                store,
                &mut first_emission,
                Tag::NonUtf8,
                token,
                location,
                None,
            );
            i += 1;
            continue;
        }

        let expected_len = lead_byte_length(b);
        match expected_len {
            None => {
                // 0xF8..=0xFF: tolerated only for resynchronization, never
                // a valid modern Unicode scalar value.
                note(
                    store,
                    &mut first_emission,
                    Tag::NonUtf8,
                    token,
                    location,
                    None,
                );
                i += 1;
            }
            Some(len) if len > 4 => {
                // 5/6-byte lead: detect-only, always ill-formed.
                note(
                    store,
                    &mut first_emission,
                    Tag::NonUtf8,
                    token,
                    location,
                    None,
                );
                i += 1;
            }
            Some(len) => {
                let well_formed = i + len <= bytes.len()
                    && bytes[i + 1..i + len].iter().all(|&cb| is_continuation(cb));
                if !well_formed {
                    note(
                        store,
                        &mut first_emission,
                        Tag::NonUtf8,
                        token,
                        location,
                        None,
                    );
                    i += 1;
                    continue;
                }
                if is_overlong(bytes[i], bytes[i + 1]) {
                    note(
                        store,
                        &mut first_emission,
                        Tag::Utf8NonShortest,
                        token,
                        location,
                        None,
                    );
                }
                match std::str::from_utf8(&bytes[i..i + len]).ok().and_then(|s| s.chars().next())
                {
                    Some(ch) => {
                        classify_and_note(store, policy, &mut first_emission, &mut first_codepoint, ch, token, location);
                    }
                    None => {
                        note(
                            store,
                            &mut first_emission,
                            Tag::NonUtf8,
                            token,
                            location,
                            None,
                        );
                    }
                }
                i += len;
            }
        }
    }
}

fn is_continuation(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

/// Expected total sequence length from a lead byte's high bits, or `None`
/// for a byte (`0xF8..=0xFF`) that can never start a valid sequence.
fn lead_byte_length(b: u8) -> Option<usize> {
    match b {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        0xF8..=0xFB => Some(5),
        0xFC..=0xFD => Some(6),
        _ => None,
    }
}

/// Overlong (non-shortest-form) detection (spec §4.3 step 3).
fn is_overlong(lead: u8, first_continuation: u8) -> bool {
    match lead {
        0xC0 | 0xC1 => true,
        0xE0 => (0x80..=0x9F).contains(&first_continuation),
        0xF0 => (0x80..=0x8F).contains(&first_continuation),
        _ => false,
    }
}

fn classify_and_note(
    store: &mut ExampleStore,
    policy: &LanguagePolicy,
    first_emission: &mut bool,
    first_codepoint: &mut bool,
    ch: char,
    token: &str,
    location: &Location,
) {
    let is_first_codepoint = *first_codepoint;
    *first_codepoint = false;
    if let Some(tag) = classify_codepoint(ch, is_first_codepoint, policy) {
        let mut buf = [0u8; 4];
        let char_str = ch.encode_utf8(&mut buf);
        note_char(store, first_emission, tag, token, location, char_str);
    }
}

fn note(
    store: &mut ExampleStore,
    first_emission: &mut bool,
    tag: Tag,
    token: &str,
    location: &Location,
    char: Option<&str>,
) {
    let mode = if *first_emission {
        Mode::Initial
    } else {
        Mode::FollowUp
    };
    match char {
        Some(c) => store.note_with_char(tag, token, location.clone(), mode, c),
        None => store.note(tag, token, location.clone(), mode),
    }
    *first_emission = false;
}

fn note_char(
    store: &mut ExampleStore,
    first_emission: &mut bool,
    tag: Tag,
    token: &str,
    location: &Location,
    char: &str,
) {
    note(store, first_emission, tag, token, location, Some(char));
}

/// Classify a single well-formed codepoint (spec §4.3 steps 4-8).
/// `is_first` marks whether this is the first decoded codepoint of the
/// token, used only for the BOM special case (step 8).
pub fn classify_codepoint(ch: char, is_first: bool, policy: &LanguagePolicy) -> Option<Tag> {
    let cp = ch as u32;

    if cp == 0xFEFF {
        return Some(if is_first {
            Tag::InitialByteOrderMark
        } else {
            Tag::ZeroWidth
        });
    }

    if ch.is_ascii() {
        // Pure-ASCII-letter tokens take the fast track (spec §4.4 step 1)
        // and never reach here; a mixed-script token still earns
        // ASCII_LETTER for its Latin letters so mixed-script detection has
        // something to pair it against.
        return if ch.is_ascii_alphabetic() {
            Some(Tag::AsciiLetter)
        } else {
            None
        };
    }

    if (0x80..=0x9F).contains(&cp) {
        return Some(Tag::ControlCharacter);
    }

    if is_non_ascii_whitespace(cp) {
        return Some(Tag::NonAsciiWhitespace);
    }

    if is_zero_width(cp) {
        return Some(Tag::ZeroWidth);
    }

    if (0x0300..=0x036F).contains(&cp) {
        return Some(Tag::CombiningDiacritic);
    }

    if (0xFE00..=0xFE0F).contains(&cp) || (0xE0100..=0xE01EF).contains(&cp) {
        return Some(Tag::VariationSelector);
    }

    if cp == 0xE0001 || (0xE0020..=0xE007F).contains(&cp) {
        return Some(Tag::Tag_);
    }

    if (0x0250..=0x02AF).contains(&cp) {
        return Some(Tag::Ipa);
    }

    if is_arabic_range(cp) {
        return Some(classify_arabic(cp));
    }

    if (0x0700..=0x074F).contains(&cp) {
        return Some(Tag::Syriac);
    }
    if (0x0780..=0x07BF).contains(&cp) {
        return Some(Tag::Thaana);
    }

    if is_latin_extended_range(cp) {
        if cp == 0x0132 || cp == 0x0133 || cp == 0x0152 || cp == 0x0153 {
            return Some(Tag::LatinExtendedLigature);
        }
        if (policy.is_language_specific_char)(ch) {
            return Some(Tag::LanguageSpecific);
        }
        return Some(Tag::LatinPlusAlpha);
    }

    if (policy.is_language_specific_char)(ch) {
        return Some(Tag::LanguageSpecific);
    }

    if (0x0370..=0x03FF).contains(&cp) {
        return Some(Tag::Greek);
    }
    if (0x0400..=0x052F).contains(&cp) {
        return Some(Tag::Cyrillic);
    }
    if (0x0530..=0x058F).contains(&cp) {
        return Some(Tag::Armenian);
    }
    if (0x0590..=0x05FF).contains(&cp) {
        return Some(Tag::Hebrew);
    }

    if (0x0900..=0x097F).contains(&cp) {
        return Some(Tag::Devanagari);
    }
    if (0x0980..=0x09FF).contains(&cp) {
        return Some(Tag::Bengali);
    }
    if (0x0A00..=0x0A7F).contains(&cp) {
        return Some(Tag::Gurmukhi);
    }
    if (0x0A80..=0x0AFF).contains(&cp) {
        return Some(Tag::Gujarati);
    }
    if (0x0B00..=0x0B7F).contains(&cp) {
        return Some(Tag::Oriya);
    }
    if (0x0B80..=0x0BFF).contains(&cp) {
        return Some(Tag::Tamil);
    }
    if (0x0C00..=0x0C7F).contains(&cp) {
        return Some(Tag::Telugu);
    }
    if (0x0C80..=0x0CFF).contains(&cp) {
        return Some(Tag::Kannada);
    }
    if (0x0D00..=0x0D7F).contains(&cp) {
        return Some(Tag::Malayalam);
    }
    if (0x0D80..=0x0DFF).contains(&cp) {
        return Some(Tag::Sinhala);
    }

    if (0x0E00..=0x0E7F).contains(&cp) {
        return Some(Tag::Thai);
    }
    if (0x0E80..=0x0EFF).contains(&cp) {
        return Some(Tag::Lao);
    }

    if (0x0F00..=0x0FFF).contains(&cp) {
        return Some(if is_tibetan_punctuation(cp) {
            Tag::TibetanPunctuation
        } else {
            Tag::TibetanLetter
        });
    }

    if (0x1000..=0x109F).contains(&cp) {
        return Some(Tag::Myanmar);
    }

    if is_georgian_range(cp) {
        return Some(classify_georgian(cp));
    }

    if (0x1200..=0x139F).contains(&cp) {
        return Some(Tag::Ethiopic);
    }
    if (0x13A0..=0x13FF).contains(&cp) || (0xAB70..=0xABBF).contains(&cp) {
        return Some(Tag::Cherokee);
    }
    if (0x1400..=0x167F).contains(&cp) || (0x18B0..=0x18FF).contains(&cp) {
        return Some(Tag::CanadianSyllabics);
    }
    if (0x1680..=0x169F).contains(&cp) {
        return Some(Tag::Ogham);
    }
    if (0x16A0..=0x16FF).contains(&cp) {
        return Some(Tag::Runic);
    }
    if (0x1780..=0x17FF).contains(&cp) {
        return Some(Tag::Khmer);
    }
    if (0x1800..=0x18AF).contains(&cp) {
        return Some(Tag::Mongolian);
    }
    if (0x1A00..=0x1A1F).contains(&cp) {
        return Some(Tag::Buginese);
    }
    if (0x1B80..=0x1BBF).contains(&cp) {
        return Some(Tag::Sundanese);
    }
    if (0xA4D0..=0xA4FF).contains(&cp) {
        return Some(Tag::Lisu);
    }
    if (0xA980..=0xA9DF).contains(&cp) {
        return Some(Tag::Javanese);
    }
    if (0xABC0..=0xABFF).contains(&cp) || (0xAAE0..=0xAAFF).contains(&cp) {
        return Some(Tag::MeeteiMayek);
    }
    if (0xA000..=0xA4CF).contains(&cp) {
        return Some(Tag::Yi);
    }
    if is_hangul_range(cp) {
        return Some(Tag::Hangul);
    }

    if (0x10330..=0x1034F).contains(&cp) {
        return Some(Tag::Gothic);
    }
    if (0x10900..=0x1091F).contains(&cp) {
        return Some(Tag::Phoenician);
    }
    if (0x12000..=0x123FF).contains(&cp) {
        return Some(Tag::Cuneiform);
    }
    if (0x13000..=0x1342F).contains(&cp) {
        return Some(Tag::EgyptianHieroglyph);
    }
    if (0x1D400..=0x1D7FF).contains(&cp) {
        return Some(Tag::MathematicalAlphanumeric);
    }

    if is_cjk_range(cp) {
        return Some(if is_cjk_extended_plane(cp) {
            Tag::CjkExtension
        } else {
            Tag::Cjk
        });
    }
    if (0x3300..=0x33FF).contains(&cp) {
        return Some(Tag::CjkSquaredLatinAbbreviation);
    }

    if cp == 0xFFFD {
        return Some(Tag::ReplacementCharacter);
    }
    if cp == 0xFFFC {
        return Some(Tag::ReplacementObject);
    }
    if (0xFF00..=0xFFEF).contains(&cp) {
        return Some(Tag::Fullwidth);
    }

    if (0xE000..=0xF8FF).contains(&cp) {
        return Some(if (0xF8D0..=0xF8FF).contains(&cp) {
            Tag::KlingonPiqad
        } else {
            Tag::PrivateUse
        });
    }

    if (0x2100..=0x214F).contains(&cp) {
        return Some(Tag::LetterlikeSymbol);
    }
    if (0x2190..=0x21FF).contains(&cp) || (0x27F0..=0x27FF).contains(&cp) || (0x2900..=0x297F).contains(&cp) {
        return Some(Tag::ArrowSymbol);
    }
    if (0x2200..=0x22FF).contains(&cp) || (0x2A00..=0x2AFF).contains(&cp) {
        return Some(Tag::MathematicalOperator);
    }
    if (0x2300..=0x23FF).contains(&cp) {
        return Some(Tag::TechnicalSymbol);
    }
    if (0x2460..=0x24FF).contains(&cp) || (0x1F100..=0x1F1FF).contains(&cp) {
        return Some(Tag::EnclosedAlphanumeric);
    }
    if (0x2500..=0x257F).contains(&cp) {
        return Some(Tag::BoxDrawing);
    }
    if (0x25A0..=0x25FF).contains(&cp) {
        return Some(Tag::GeometricShape);
    }
    if (0x1F300..=0x1F5FF).contains(&cp)
        || (0x1F600..=0x1F64F).contains(&cp)
        || (0x1F680..=0x1F6FF).contains(&cp)
        || (0x1F900..=0x1F9FF).contains(&cp)
    {
        return Some(Tag::Pictograph);
    }
    if (0x2600..=0x26FF).contains(&cp) || (0x2700..=0x27BF).contains(&cp) {
        return Some(Tag::MiscSymbol);
    }

    if (0x0080..=0x00FF).contains(&cp) {
        // Latin-1 supplement punctuation/symbols not claimed above.
        if ch.is_alphabetic() {
            return Some(Tag::LatinPlusAlpha);
        }
        if !ch.is_ascii() {
            // Only the genuine Unicode-punctuation codepoints of this block
            // (¡ § « ¶ · » ¿) count as NON_ASCII_PUNCT; everything else here
            // is a symbol or number (currency, math, superscript/fraction,
            // ©/®) and belongs under MISC_SYMBOL, per spec §8 scenario 6
            // (`25km²` must not tag `²` as NON_ASCII_PUNCT).
            return Some(if is_latin1_punctuation(cp) {
                Tag::NonAsciiPunct
            } else {
                Tag::MiscSymbol
            });
        }
    }

    if !ch.is_ascii() && (ch.is_ascii_punctuation() || is_general_punctuation(cp)) {
        return Some(Tag::NonAsciiPunct);
    }

    Some(Tag::OtherChar)
}

fn is_non_ascii_whitespace(cp: u32) -> bool {
    matches!(cp, 0x00A0 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000)
}

fn is_zero_width(cp: u32) -> bool {
    matches!(
        cp,
        0x200B..=0x200D | 0x2060 | 0x200E | 0x200F | 0x202A..=0x202E | 0x2066..=0x2069
    )
}

fn is_general_punctuation(cp: u32) -> bool {
    (0x2000..=0x206F).contains(&cp) || (0x2E00..=0x2E7F).contains(&cp)
}

/// The Latin-1 Supplement codepoints that are genuine Unicode punctuation
/// (¡ § « ¶ · » ¿) rather than a symbol/number (currency, math operator,
/// superscript/fraction digit, ©/®, …).
fn is_latin1_punctuation(cp: u32) -> bool {
    matches!(cp, 0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF)
}

/// Latin-1 Supplement letters plus Latin Extended-A/B (spec §4.3 step 7/9).
fn is_latin_extended_range(cp: u32) -> bool {
    ((0x00C0..=0x00FF).contains(&cp) && cp != 0x00D7 && cp != 0x00F7)
        || (0x0100..=0x024F).contains(&cp)
}

fn is_arabic_range(cp: u32) -> bool {
    (0x0600..=0x06FF).contains(&cp)
        || (0x0750..=0x077F).contains(&cp)
        || (0xFB50..=0xFDFF).contains(&cp)
        || (0xFE70..=0xFEFF).contains(&cp)
}

fn classify_arabic(cp: u32) -> Tag {
    match cp {
        0x064A => Tag::ArabicLetterYeh,
        0x06CC => Tag::FarsiLetterYeh,
        0x0643 => Tag::ArabicLetterKaf,
        0x06A9 => Tag::FarsiLetterKeheh,
        0x0640 => Tag::ArabicTatweel,
        0x0660..=0x0669 => Tag::ArabicDigit,
        0x06F0..=0x06F9 => Tag::ArabicIndicDigit,
        0x060C | 0x061B | 0x061F | 0x066A..=0x066D => Tag::ArabicPunctuation,
        0xFEF5..=0xFEFC => Tag::ArabicLigature,
        0xFB50..=0xFDFF | 0xFE70..=0xFEFF => Tag::ArabicPresentationForm,
        _ => Tag::ArabicLetter,
    }
}

fn is_tibetan_punctuation(cp: u32) -> bool {
    matches!(cp, 0x0F00..=0x0F17 | 0x0F1A..=0x0F1F | 0x0F34 | 0x0F36 | 0x0F38 | 0x0F3A..=0x0F3D | 0x0F85)
}

fn is_georgian_range(cp: u32) -> bool {
    (0x10A0..=0x10FF).contains(&cp) || (0x1C90..=0x1CBF).contains(&cp) || cp == 0x2D00 || (0x2D00..=0x2D2F).contains(&cp)
}

fn classify_georgian(cp: u32) -> Tag {
    match cp {
        0x10A0..=0x10C5 => Tag::GeorgianAsomtavruli,
        0x10C7 | 0x10CD => Tag::GeorgianArchaic,
        0x10D0..=0x10F0 => Tag::Georgian,
        0x10F1..=0x10FA => Tag::GeorgianArchaic,
        0x10FB => Tag::GeorgianEmphasis,
        0x10FC => Tag::GeorgianNuskhuri,
        0x2D00..=0x2D2F => Tag::GeorgianNuskhuri,
        0x1C90..=0x1CBF => Tag::GeorgianNuskhuri,
        _ => Tag::Georgian,
    }
}

fn is_hangul_range(cp: u32) -> bool {
    (0xAC00..=0xD7A3).contains(&cp)
        || (0x1100..=0x11FF).contains(&cp)
        || (0x3130..=0x318F).contains(&cp)
        || (0xA960..=0xA97F).contains(&cp)
        || (0xD7B0..=0xD7FF).contains(&cp)
}

fn is_cjk_range(cp: u32) -> bool {
    (0x4E00..=0x9FFF).contains(&cp)
        || (0x3400..=0x4DBF).contains(&cp)
        || (0xF900..=0xFAFF).contains(&cp)
        || (0x20000..=0x2FA1F).contains(&cp)
}

fn is_cjk_extended_plane(cp: u32) -> bool {
    cp >= 0x20000
}

/// Is this codepoint an Arabic-script letter/mark? Used by the token
/// classifier's mixed-script detection (spec §4.4 step 5).
pub fn is_arabic_char(ch: char) -> bool {
    is_arabic_range(ch as u32)
}

/// Is this codepoint a CJK ideograph? Used for mixed-script detection.
pub fn is_cjk_char(ch: char) -> bool {
    is_cjk_range(ch as u32)
}

/// Is this codepoint Cyrillic? Used for mixed-script detection.
pub fn is_cyrillic_char(ch: char) -> bool {
    (0x0400..=0x052F).contains(&(ch as u32))
}

/// Is this codepoint Georgian? Used for mixed-script detection.
pub fn is_georgian_char(ch: char) -> bool {
    is_georgian_range(ch as u32)
}

/// Is this codepoint in the Devanagari block? Used for nukta sub-analysis.
pub fn is_devanagari_char(ch: char) -> bool {
    (0x0900..=0x097F).contains(&(ch as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::policy_for;

    fn classify_all(token: &str) -> Vec<Tag> {
        let mut store = ExampleStore::new(20, 10);
        let policy = policy_for(None);
        classify_token_chars(&mut store, &policy, token, &Location::Line(1));
        crate::registry::REGISTRY
            .iter()
            .copied()
            .filter(|t| store.count(*t) > 0)
            .collect()
    }

    #[test]
    fn overlong_two_byte_c0_80() {
        let bytes = [0xC0u8, 0x80u8];
        let token = unsafe { std::str::from_utf8_unchecked(&bytes) };
        let mut store = ExampleStore::new(20, 10);
        let policy = policy_for(None);
        classify_token_chars(&mut store, &policy, token, &Location::Line(1));
        assert_eq!(store.count(Tag::Utf8NonShortest), 1);
    }

    #[test]
    fn pure_ascii_letters_tag_as_ascii_letter_at_character_level() {
        // The token classifier's fast track bypasses this path for pure
        // ASCII-letter tokens; this exercises the character classifier
        // directly, as happens for a mixed-script token containing ASCII.
        let tags = classify_all("hello");
        assert_eq!(tags, vec![Tag::AsciiLetter]);
    }

    #[test]
    fn cyrillic_is_tagged() {
        assert!(classify_all("привет").contains(&Tag::Cyrillic));
    }

    #[test]
    fn greek_is_tagged() {
        assert!(classify_all("ελληνικά").contains(&Tag::Greek));
    }

    #[test]
    fn geometric_shape_has_char_sibling() {
        let tags = classify_all("▲x");
        assert!(tags.contains(&Tag::GeometricShape));
        assert!(tags.contains(&Tag::GeometricShapeChar));
    }

    #[test]
    fn initial_bom_tagged_specially() {
        let tags = classify_all("\u{FEFF}word");
        assert!(tags.contains(&Tag::InitialByteOrderMark));
    }

    #[test]
    fn non_initial_bom_is_zero_width() {
        let tags = classify_all("wo\u{FEFF}rd");
        assert!(tags.contains(&Tag::ZeroWidth));
        assert!(!tags.contains(&Tag::InitialByteOrderMark));
    }

    #[test]
    fn devanagari_block_is_tagged() {
        assert!(classify_all("नमस्ते").contains(&Tag::Devanagari));
    }

    #[test]
    fn superscript_two_is_misc_symbol_not_non_ascii_punct() {
        // U+00B2 SUPERSCRIPT TWO is a number/symbol, not punctuation (spec
        // §8 scenario 6: `25km²` must not tag `²` as NON_ASCII_PUNCT).
        let tags = classify_all("km²");
        assert!(tags.contains(&Tag::MiscSymbol));
        assert!(tags.contains(&Tag::MiscSymbolChar));
        assert!(!tags.contains(&Tag::NonAsciiPunct));
    }

    #[test]
    fn latin1_inverted_question_mark_is_non_ascii_punct() {
        // U+00BF ¿ is genuine Unicode punctuation, unlike the symbols/
        // numbers (°, ², ©, ×, …) that share the Latin-1 Supplement block.
        let tags = classify_all("¿que");
        assert!(tags.contains(&Tag::NonAsciiPunct));
        assert!(!tags.contains(&Tag::MiscSymbol));
    }

    #[test]
    fn bom_after_non_emitting_leading_char_is_not_initial() {
        // A leading '.' emits no tag at all, but it is still codepoint 0 of
        // the token; the following BOM is therefore not "initial".
        let tags = classify_all(".\u{FEFF}word");
        assert!(tags.contains(&Tag::ZeroWidth));
        assert!(!tags.contains(&Tag::InitialByteOrderMark));
    }
}
