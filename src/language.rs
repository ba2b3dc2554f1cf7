//! Language policy (spec §4.6): maps a language code to a suppression set,
//! a language-specific allowed-character predicate, and language-specific
//! benign-unsplit exemptions used by the token classifier.

use crate::registry::Tag;

/// Per-language policy. Unknown codes yield [`LanguagePolicy::default`],
/// which suppresses nothing and allows nothing extra — the spec's "unknown
/// codes silently yield empty sets" rule.
pub struct LanguagePolicy {
    /// Tags suppressed from the report because the script is expected for
    /// this language (spec §4.6(a)).
    pub suppressed: &'static [Tag],
    /// Returns true if `ch` is a language-specific letter that should be
    /// tagged `LANGUAGE_SPECIFIC` instead of the generic `LATIN_PLUS_ALPHA`
    /// (spec §4.6(b), §4.3 step 7).
    pub is_language_specific_char: fn(char) -> bool,
    /// Title abbreviations (mixed- and upper-case) exempted from
    /// `UNSPLIT_PERIOD` (spec §4.4 step 3, `BEN_UNSPLIT_PERIOD`).
    pub title_abbreviations: &'static [&'static str],
    /// Bare apostrophe-clitics exempted beyond the universal list (spec
    /// §4.4 step 3, `BEN_UNSPLIT_APO`).
    pub benign_apostrophe_suffixes: &'static [&'static str],
    /// For languages with a productive apostrophe-joined prefix (e.g.
    /// Kinyarwanda stem prefixes), returns true if `token` is such a
    /// benign prefix+stem combination.
    pub benign_apostrophe_prefix: fn(&str) -> bool,
}

impl Default for LanguagePolicy {
    fn default() -> Self {
        LanguagePolicy {
            suppressed: &[],
            is_language_specific_char: |_| false,
            title_abbreviations: &[],
            benign_apostrophe_suffixes: &[],
            benign_apostrophe_prefix: |_| false,
        }
    }
}

fn is_german_letter(ch: char) -> bool {
    matches!(ch, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü' | 'ß')
}

fn is_french_letter(ch: char) -> bool {
    matches!(
        ch,
        'à' | 'â'
            | 'ç'
            | 'é'
            | 'è'
            | 'ê'
            | 'ë'
            | 'î'
            | 'ï'
            | 'ô'
            | 'ù'
            | 'û'
            | 'ü'
            | 'ÿ'
            | 'œ'
            | 'æ'
            | 'À'
            | 'Â'
            | 'Ç'
            | 'É'
            | 'È'
            | 'Ê'
            | 'Ë'
            | 'Î'
            | 'Ï'
            | 'Ô'
            | 'Ù'
            | 'Û'
            | 'Ü'
            | 'Ÿ'
            | 'Œ'
            | 'Æ'
    )
}

fn is_spanish_letter(ch: char) -> bool {
    matches!(ch, 'ñ' | 'Ñ' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ü')
}

fn is_urdu_letter(ch: char) -> bool {
    // A handful of letters used in Urdu but outside the core Arabic block
    // that Arabic-only policies would otherwise flag as unexpected.
    matches!(ch as u32, 0x0679 | 0x0688 | 0x0691 | 0x06BA | 0x06BE | 0x06C1 | 0x06D2)
}

fn is_kinyarwanda_prefix(token: &str) -> bool {
    // Productive noun-class prefixes joined to a stem with an apostrophe,
    // e.g. "n'", "ry'", "cy'".
    const STEMS: &[&str] = &["n'", "ry'", "cy'", "by'", "ky'", "w'", "y'"];
    let lower = token.to_lowercase();
    STEMS.iter().any(|s| lower.starts_with(s) && lower.len() > s.len())
}

fn is_malagasy_suffix(token: &str) -> bool {
    const SUFFIXES: &[&str] = &["'ny", "'ndeha", "'zay"];
    let lower = token.to_lowercase();
    SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Malagasy Bible book abbreviation list exempted from `UNSPLIT_PERIOD`
/// (spec §4.4 step 3, "for language mlg also a Malagasy bible-book list").
pub const MALAGASY_BIBLE_BOOKS: &[&str] = &[
    "Gen.", "Eks.", "Lev.", "Nom.", "Deo.", "Mat.", "Mar.", "Lio.", "Jao.", "Asa.", "Rom.",
];

pub fn policy_for(language_code: Option<&str>) -> LanguagePolicy {
    match language_code {
        Some("eng") => LanguagePolicy {
            suppressed: &[Tag::AsciiLetter],
            ..LanguagePolicy::default()
        },
        Some("de") => LanguagePolicy {
            is_language_specific_char: is_german_letter,
            ..LanguagePolicy::default()
        },
        Some("fr") | Some("fre") => LanguagePolicy {
            is_language_specific_char: is_french_letter,
            ..LanguagePolicy::default()
        },
        Some("es") => LanguagePolicy {
            is_language_specific_char: is_spanish_letter,
            ..LanguagePolicy::default()
        },
        Some("ar") | Some("ara") | Some("far") | Some("dar") => LanguagePolicy {
            suppressed: &[Tag::ArabicLetter],
            ..LanguagePolicy::default()
        },
        Some("ur") => LanguagePolicy {
            suppressed: &[Tag::ArabicLetter],
            is_language_specific_char: is_urdu_letter,
            ..LanguagePolicy::default()
        },
        Some("zh") | Some("chi") | Some("jp") => LanguagePolicy {
            suppressed: &[Tag::Cjk],
            ..LanguagePolicy::default()
        },
        Some("ru") => LanguagePolicy {
            suppressed: &[Tag::Cyrillic],
            ..LanguagePolicy::default()
        },
        Some("gr") => LanguagePolicy {
            suppressed: &[Tag::Greek],
            ..LanguagePolicy::default()
        },
        Some("kin") => LanguagePolicy {
            benign_apostrophe_prefix: is_kinyarwanda_prefix,
            ..LanguagePolicy::default()
        },
        Some("mlg") => LanguagePolicy {
            title_abbreviations: MALAGASY_BIBLE_BOOKS,
            benign_apostrophe_prefix: is_malagasy_suffix,
            ..LanguagePolicy::default()
        },
        Some("som") => LanguagePolicy::default(),
        _ => LanguagePolicy::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_yields_empty_policy() {
        let policy = policy_for(Some("zz"));
        assert!(policy.suppressed.is_empty());
        assert!(!(policy.is_language_specific_char)('ä'));
    }

    #[test]
    fn eng_suppresses_ascii_letter() {
        let policy = policy_for(Some("eng"));
        assert!(policy.suppressed.contains(&Tag::AsciiLetter));
    }

    #[test]
    fn german_policy_recognizes_umlauts() {
        let policy = policy_for(Some("de"));
        assert!((policy.is_language_specific_char)('ü'));
        assert!(!(policy.is_language_specific_char)('x'));
    }

    #[test]
    fn kinyarwanda_prefix_detection() {
        let policy = policy_for(Some("kin"));
        assert!((policy.benign_apostrophe_prefix)("n'umuntu"));
        assert!(!(policy.benign_apostrophe_prefix)("normal"));
    }
}
