//! The token classifier (spec §4.4): whole-token pattern checks plus the
//! fast-track optimization, dispatching residual character-level work to
//! [`crate::charclass`].

use std::sync::LazyLock;

use regex::Regex;

use crate::charclass::{classify_token_chars, is_arabic_char, is_cjk_char, is_cyrillic_char, is_devanagari_char, is_georgian_char};
use crate::config::Config;
use crate::language::LanguagePolicy;
use crate::registry::Tag;
use crate::store::{ExampleStore, Location, Mode};

/// Known domain suffixes for the URL/email recognizer (spec §4.4 step 2).
const DOMAIN_SUFFIXES: &[&str] = &[
    "cat", "com", "coop", "edu", "gov", "info", "int", "mil", "museum", "name", "net", "org",
    "pro", "biz", "aero", "asia", "jobs", "mobi", "tel", "travel", "co", "io", "uk", "us", "eu",
];

/// Common file extensions recognized by the filename/pre-scan patterns
/// (spec §4.4 step 2, §4.5).
const FILE_EXTENSIONS: &[&str] = &[
    "cgi", "doc", "docx", "gif", "htm", "html", "jpeg", "jpg", "pdf", "php", "png", "ppt", "txt",
    "xls", "xml", "zip",
];

/// Bare clitic tokens (spec §4.4 "bare clitics") — the *whole* token is the
/// clitic, e.g. the token is literally `'s`, not merely ending in `'s`.
const UNIVERSAL_BENIGN_APOSTROPHE_SUFFIX_CLITICS: &[&str] =
    &["'d", "'ll", "'m", "n't", "'re", "'s", "'ve"];

/// Elision prefixes (`c'est`, `d'accord`, `l'amour`): benign when the token
/// *starts with* one of these, not when it merely ends with one.
const UNIVERSAL_BENIGN_APOSTROPHE_PREFIX_CLITICS: &[&str] = &["c'", "d'", "l'"];

const TITLE_ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "rev.", "hon.", "gen.", "col.",
    "capt.", "lt.", "sgt.", "gov.",
];

const MONTH_ABBREVIATIONS: &[&str] = &[
    "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.", "sep.", "sept.", "oct.", "nov.",
    "dec.",
];

const FIXED_BENIGN_ABBREVIATIONS: &[&str] = &["a.m.", "p.m.", "i.e.", "e.g.", "vs.", "v.", "etc."];

const KNOWN_LONG_WORDS: &[&str] = &[
    "counterrevolutionary",
    "internationalization",
    "disproportionately",
    "incomprehensibility",
    "telecommunications",
];

const ARABIC_PREFIXES: &[&str] = &["ال", "ب", "ل", "و", "وال", "بال", "لل", "وب"];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap()
});
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://|www\.)[^\s]+\.[a-z]{2,}([/?#][^\s]*)?$").unwrap()
});
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\w{2,}$").unwrap());
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@\w{2,}$").unwrap());
static XML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?[A-Za-z][\w:.-]*(?:\s+[^>]*)?/?>$").unwrap());

static SUSPICIOUS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(www\.\S|https?:\S)|\.(com|org)\b").unwrap()
});

static ALPHA_HYPHEN_LEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+-+").unwrap());
static INTERNAL_HYPHEN_APO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z'`]-[a-z'`]").unwrap());
static LEADING_HYPHEN_APO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^-[a-z']").unwrap());
static EMBEDDED_DASH_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--+\d").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z0-9][!?;:,]+$").unwrap());
static DIGIT_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\d,[a-z]").unwrap());

static APO_S_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)('s|s')$").unwrap());
static APO_V_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)('d|'ll|'m|'ve)$").unwrap());
static NOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(n't)$").unwrap());

static NUM_PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.$").unwrap());
static TRAILING_PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.$").unwrap());
static SINGLE_LETTER_ABBREV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]\.)+$").unwrap());
static NUMERIC_GROUPING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}([.,]\d{3})*$").unwrap());
static NUMERIC_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}[./-]\d{1,2}[./-]\d{1,4}$").unwrap());
static NUMERIC_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}(:\d{2})?$").unwrap());
static ARTICLE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::(article|emphasis|title|heading)").unwrap());
static SOMALI_VOWEL_APO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+'[aeiou]$").unwrap());

static NUKTA_STD_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{0915}-\u{0939}]\u{093C}?[\u{093E}-\u{094C}]?\u{093C}$").unwrap());
static NUKTA_ALT_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\u{093C}[\u{0915}-\u{0939}]").unwrap());
static NUKTA_VSIGN_BEFORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{093E}-\u{094C}]\u{093C}").unwrap());

fn is_domain_like(token: &str) -> bool {
    let lower = token.to_lowercase();
    DOMAIN_SUFFIXES
        .iter()
        .any(|suf| lower.ends_with(&format!(".{suf}")))
}

fn is_file_like(token: &str) -> bool {
    let lower = token.to_lowercase();
    FILE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Special-token-type recognition (spec §4.4 step 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialType {
    Email,
    Url,
    Hashtag,
    Handle,
    Xml,
    None,
}

pub fn recognize_special_type(token: &str) -> SpecialType {
    if EMAIL_RE.is_match(token) {
        SpecialType::Email
    } else if URL_RE.is_match(token) || is_domain_like(token) {
        SpecialType::Url
    } else if HASHTAG_RE.is_match(token) {
        SpecialType::Hashtag
    } else if HANDLE_RE.is_match(token) {
        SpecialType::Handle
    } else if XML_TAG_RE.is_match(token) {
        SpecialType::Xml
    } else {
        SpecialType::None
    }
}

/// Top-level entry point: classify one whole token, updating `store` with
/// every tag the token earns, then dispatch to the character classifier
/// for residual per-character checks (spec §4.4 step 8).
pub fn classify_token(
    store: &mut ExampleStore,
    config: &Config,
    policy: &LanguagePolicy,
    token: &str,
    location: &Location,
) {
    if token.is_empty() {
        return;
    }

    // --- Step 1: fast track ---
    if token.len() < config.long_token_min as usize && token.bytes().all(|b| b.is_ascii_alphabetic())
    {
        if token.eq_ignore_ascii_case("cannot") {
            store.note(Tag::UnsplitNot, token, location.clone(), Mode::Unconditional);
        }
        store.note(Tag::AsciiLetter, token, location.clone(), Mode::Unconditional);
        return;
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return;
    }
    if token.len() == 1 && token.bytes().all(|b| b.is_ascii_punctuation()) {
        return;
    }
    if token.len() < 40 && token.chars().all(is_arabic_char) {
        store.note(Tag::ArabicLetter, token, location.clone(), Mode::Unconditional);
        return;
    }
    if token.len() < 60 && !token.is_empty() && token.chars().all(is_cjk_char) {
        store.note(Tag::Cjk, token, location.clone(), Mode::Unconditional);
        return;
    }

    let special = recognize_special_type(token);
    match special {
        SpecialType::Email => store.note(Tag::Email, token, location.clone(), Mode::Unconditional),
        SpecialType::Url => store.note(Tag::Url, token, location.clone(), Mode::Unconditional),
        SpecialType::Hashtag => store.note(Tag::Hashtag, token, location.clone(), Mode::Unconditional),
        SpecialType::Handle => store.note(Tag::Handle, token, location.clone(), Mode::Unconditional),
        SpecialType::Xml => store.note(Tag::Xml, token, location.clone(), Mode::Unconditional),
        SpecialType::None => {
            check_unsplit_punctuation(store, policy, token, location);
            if SUSPICIOUS_URL_RE.is_match(token) {
                store.note(Tag::SuspiciousUrl, token, location.clone(), Mode::Unconditional);
            }
        }
    }

    check_mixed_script(store, token, location);
    check_devanagari_nukta(store, token, location);
    check_long_token(store, config, token, location);

    classify_token_chars(store, policy, token, location);
}

fn check_unsplit_punctuation(
    store: &mut ExampleStore,
    policy: &LanguagePolicy,
    token: &str,
    location: &Location,
) {
    let lower = token.to_lowercase();

    if ALPHA_HYPHEN_LEAD_RE.is_match(token) {
        store.note(Tag::UnsplitPunctAlphaHyphen, token, location.clone(), Mode::Unconditional);
    }

    if NOT_RE.is_match(token) || token.eq_ignore_ascii_case("cannot") {
        store.note(Tag::UnsplitNot, token, location.clone(), Mode::Unconditional);
    } else if APO_V_RE.is_match(token) {
        if is_benign_apostrophe(policy, &lower) {
            store.note(Tag::BenUnsplitApo, token, location.clone(), Mode::Unconditional);
        } else {
            store.note(Tag::UnsplitApoV, token, location.clone(), Mode::Unconditional);
        }
    } else if APO_S_RE.is_match(token) {
        if is_benign_apostrophe(policy, &lower) {
            store.note(Tag::BenUnsplitApo, token, location.clone(), Mode::Unconditional);
        } else {
            store.note(Tag::UnsplitApoS, token, location.clone(), Mode::Unconditional);
        }
    }

    if NUM_PERIOD_RE.is_match(token) {
        store.note(Tag::NumUnsplitPeriod, token, location.clone(), Mode::Unconditional);
    } else if TRAILING_PERIOD_RE.is_match(token) {
        if is_benign_period(policy, token, &lower) {
            store.note(Tag::BenUnsplitPeriod, token, location.clone(), Mode::Unconditional);
        } else {
            store.note(Tag::UnsplitPeriod, token, location.clone(), Mode::Unconditional);
        }
    }

    let other_unsplit = INTERNAL_HYPHEN_APO_RE.is_match(token)
        || LEADING_HYPHEN_APO_RE.is_match(token)
        || EMBEDDED_DASH_DIGIT_RE.is_match(token)
        || TRAILING_PUNCT_RE.is_match(token)
        || DIGIT_LETTER_RE.is_match(token);
    if other_unsplit {
        if is_benign_punct(token) {
            store.note(Tag::BenUnsplitPunct, token, location.clone(), Mode::Unconditional);
        } else {
            store.note(Tag::UnsplitPunct, token, location.clone(), Mode::Unconditional);
        }
    }
}

fn is_benign_apostrophe(policy: &LanguagePolicy, lower: &str) -> bool {
    if UNIVERSAL_BENIGN_APOSTROPHE_SUFFIX_CLITICS.iter().any(|c| lower == *c) {
        return true;
    }
    if UNIVERSAL_BENIGN_APOSTROPHE_PREFIX_CLITICS.iter().any(|c| lower.starts_with(c)) {
        return true;
    }
    if lower == "o'clock" {
        return true;
    }
    if policy.benign_apostrophe_suffixes.iter().any(|s| lower.ends_with(s)) {
        return true;
    }
    (policy.benign_apostrophe_prefix)(lower)
}

fn is_benign_period(policy: &LanguagePolicy, token: &str, lower: &str) -> bool {
    if SINGLE_LETTER_ABBREV_RE.is_match(token) {
        return true;
    }
    if FIXED_BENIGN_ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    if TITLE_ABBREVIATIONS.contains(&lower.as_str()) || MONTH_ABBREVIATIONS.contains(&lower.as_str())
    {
        return true;
    }
    if policy.title_abbreviations.iter().any(|a| a.eq_ignore_ascii_case(token)) {
        return true;
    }
    if NUMERIC_GROUPING_RE.is_match(token.trim_end_matches('.')) {
        return true;
    }
    if is_domain_like(token) || is_file_like(token) {
        return true;
    }
    if EMAIL_RE.is_match(token.trim_end_matches('.')) {
        return true;
    }
    false
}

fn is_benign_punct(token: &str) -> bool {
    NUMERIC_DATE_RE.is_match(token)
        || NUMERIC_TIME_RE.is_match(token)
        || ARTICLE_MARKER_RE.is_match(token)
        || SOMALI_VOWEL_APO_RE.is_match(token)
}

/// Mixed-script detection (spec §4.4 step 5).
fn check_mixed_script(store: &mut ExampleStore, token: &str, location: &Location) {
    let has_ascii_alpha = token.bytes().any(|b| b.is_ascii_alphabetic());
    let has_digit = token.bytes().any(|b| b.is_ascii_digit());
    let has_arabic = token.chars().any(is_arabic_char);
    let has_cjk = token.chars().any(is_cjk_char);
    let has_cyrillic = token.chars().any(is_cyrillic_char);
    let has_georgian = token.chars().any(is_georgian_char);

    if has_arabic && (has_ascii_alpha || has_digit) {
        let stripped = strip_known_arabic_prefix(token);
        if let Some(rest) = stripped {
            if rest.chars().next().map(|c| c.is_ascii_digit() || c.is_ascii_alphabetic()).unwrap_or(false) {
                store.note(Tag::ArabicPrefixAscii, token, location.clone(), Mode::Unconditional);
            } else {
                store.note(Tag::MixedArabicAscii, token, location.clone(), Mode::Unconditional);
            }
        } else {
            store.note(Tag::MixedArabicAscii, token, location.clone(), Mode::Unconditional);
        }
    }

    if has_cjk && has_ascii_alpha {
        store.note(Tag::MixedCjkAscii, token, location.clone(), Mode::Unconditional);
    }

    if has_cyrillic && has_ascii_alpha {
        store.note(Tag::MixedCyrillicLatin, token, location.clone(), Mode::Unconditional);
    }

    if has_cyrillic && !has_ascii_alpha {
        if let Some(tag) = classify_script_punct_position(token, is_cyrillic_char) {
            let mapped = match tag {
                PunctPosition::Prefix => Tag::MixedCyrillicPunctPrefix,
                PunctPosition::Suffix => Tag::MixedCyrillicPunctSuffix,
                PunctPosition::PeriodOnly => Tag::MixedCyrillicPunctPeriod,
                PunctPosition::Mixed => Tag::MixedCyrillicPunctMixed,
            };
            store.note(mapped, token, location.clone(), Mode::Unconditional);
        }
    }

    if has_georgian {
        if let Some(tag) = classify_script_punct_position(token, is_georgian_char) {
            let mapped = match tag {
                PunctPosition::Prefix => Tag::MixedGeorgianPunctPrefix,
                PunctPosition::Suffix => Tag::MixedGeorgianPunctSuffix,
                PunctPosition::PeriodOnly => Tag::MixedGeorgianPunctPeriod,
                PunctPosition::Mixed => Tag::MixedGeorgianPunctMixed,
            };
            store.note(mapped, token, location.clone(), Mode::Unconditional);
        }
    }
}

fn strip_known_arabic_prefix(token: &str) -> Option<&str> {
    for prefix in ARABIC_PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            if !rest.is_empty() {
                return Some(rest);
            }
        }
    }
    None
}

enum PunctPosition {
    Prefix,
    Suffix,
    PeriodOnly,
    Mixed,
}

/// Classify where ASCII punctuation sits relative to the script characters
/// of interest within `token` (spec §4.4 step 5, "further classified by the
/// relative position of the punctuation").
fn classify_script_punct_position(token: &str, is_script: fn(char) -> bool) -> Option<PunctPosition> {
    let chars: Vec<char> = token.chars().collect();
    let has_punct = chars.iter().any(|c| c.is_ascii_punctuation());
    if !has_punct {
        return None;
    }
    let first_script = chars.iter().position(|c| is_script(*c))?;
    let last_script = chars.iter().rposition(|c| is_script(*c))?;

    let leading_punct = chars[..first_script].iter().all(|c| c.is_ascii_punctuation() || !c.is_ascii());
    let trailing_punct = chars[last_script + 1..].iter().all(|c| c.is_ascii_punctuation() || !c.is_ascii());
    let leading_has_punct = chars[..first_script].iter().any(|c| c.is_ascii_punctuation());
    let trailing_has_punct = chars[last_script + 1..].iter().any(|c| c.is_ascii_punctuation());

    if trailing_has_punct && &chars[last_script + 1..].iter().collect::<String>() == "." && !leading_has_punct {
        return Some(PunctPosition::PeriodOnly);
    }
    match (leading_has_punct && leading_punct, trailing_has_punct && trailing_punct) {
        (true, true) => Some(PunctPosition::Mixed),
        (true, false) => Some(PunctPosition::Prefix),
        (false, true) => Some(PunctPosition::Suffix),
        (false, false) => {
            if chars[first_script..=last_script].iter().any(|c| c.is_ascii_punctuation()) {
                Some(PunctPosition::Mixed)
            } else {
                None
            }
        }
    }
}

/// Devanagari nukta sub-analysis (spec §4.4 step 6).
fn check_devanagari_nukta(store: &mut ExampleStore, token: &str, location: &Location) {
    if !token.chars().any(is_devanagari_char) {
        return;
    }
    // Legacy pre-composed nukta letters in the Devanagari block's extended
    // range (U+0958-095F), historically encoded both as a base consonant +
    // combining nukta (U+093C) and as a single pre-composed character.
    const LEGACY_PRECOMPOSED: [char; 8] =
        ['\u{0958}', '\u{0959}', '\u{095A}', '\u{095B}', '\u{095C}', '\u{095D}', '\u{095E}', '\u{095F}'];
    const STANDARD_PRECOMPOSED_BASES: [char; 2] = ['\u{0929}', '\u{0931}'];

    if token.chars().any(|c| LEGACY_PRECOMPOSED.contains(&c)) {
        store.note(Tag::AltCmpNukta, token, location.clone(), Mode::Unconditional);
    }
    if token.chars().any(|c| STANDARD_PRECOMPOSED_BASES.contains(&c)) {
        store.note(Tag::StdCmpNukta, token, location.clone(), Mode::Unconditional);
    }
    if NUKTA_VSIGN_BEFORE_RE.is_match(token) {
        store.note(Tag::DisVsgnNukta, token, location.clone(), Mode::Unconditional);
    } else if NUKTA_STD_SEP_RE.is_match(token) {
        store.note(Tag::StdSepNukta, token, location.clone(), Mode::Unconditional);
    } else if NUKTA_ALT_SEP_RE.is_match(token) {
        store.note(Tag::AltSepNukta, token, location.clone(), Mode::Unconditional);
    }
}

/// Long-token check (spec §4.4 step 7): only lead bytes are decoded, so
/// this counts codepoints, not bytes, without a full per-char walk.
fn check_long_token(store: &mut ExampleStore, config: &Config, token: &str, location: &Location) {
    let lower = token.to_lowercase();
    if KNOWN_LONG_WORDS.contains(&lower.as_str()) {
        return;
    }
    let lead_byte_count = token.bytes().filter(|&b| !(0x80..=0xBF).contains(&b)).count();
    if lead_byte_count >= 30 {
        store.note(Tag::LongToken30, token, location.clone(), Mode::Unconditional);
    } else if lead_byte_count >= config.long_token_min as usize {
        store.note(Tag::LongToken20, token, location.clone(), Mode::Unconditional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::language::policy_for;
    use rstest::rstest;

    fn run(token: &str) -> ExampleStore {
        let (config, _) = ConfigBuilder::default().build();
        let policy = policy_for(None);
        let mut store = ExampleStore::new(config.max_examples, config.max_locations);
        classify_token(&mut store, &config, &policy, token, &Location::Line(1));
        store
    }

    #[test]
    fn fast_track_ascii_letters_only_emits_ascii_letter() {
        let store = run("hello");
        assert_eq!(store.count(Tag::AsciiLetter), 1);
        assert_eq!(store.count(Tag::UnsplitNot), 0);
    }

    #[test]
    fn cannot_emits_unsplit_not() {
        let store = run("cannot");
        assert_eq!(store.count(Tag::AsciiLetter), 1);
        assert_eq!(store.count(Tag::UnsplitNot), 1);
    }

    #[test]
    fn email_is_recognized_without_unsplit_period() {
        let store = run("president@whitehouse.org");
        assert_eq!(store.count(Tag::Email), 1);
        assert_eq!(store.count(Tag::UnsplitPeriod), 0);
        assert_eq!(store.count(Tag::SuspiciousUrl), 0);
    }

    #[test]
    fn trailing_apostrophe_s_is_flagged() {
        let store = run("dog's");
        assert_eq!(store.count(Tag::UnsplitApoS), 1);
        assert_eq!(store.count(Tag::BenUnsplitApo), 0);
    }

    #[test]
    fn bare_apostrophe_s_clitic_token_is_benign() {
        // The whole token *is* the clitic, unlike "dog's" above.
        let store = run("'s");
        assert_eq!(store.count(Tag::BenUnsplitApo), 1);
        assert_eq!(store.count(Tag::UnsplitApoS), 0);
    }

    #[test]
    fn elision_prefix_is_benign_by_starts_with_not_ends_with() {
        // Exercises is_benign_apostrophe directly: "d'accord" starts with
        // the elision prefix "d'" but does not end with it, so an
        // ends_with-based check (the bug) would have missed it entirely.
        let policy = policy_for(None);
        assert!(is_benign_apostrophe(&policy, "d'accord"));
        assert!(is_benign_apostrophe(&policy, "c'est"));
        // A token merely containing an apostrophe elsewhere is not benign.
        assert!(!is_benign_apostrophe(&policy, "accord'd"));
    }

    #[test]
    fn us_abbreviation_is_benign() {
        let store = run("U.S.A.");
        assert_eq!(store.count(Tag::BenUnsplitPeriod), 1);
        assert_eq!(store.count(Tag::UnsplitPeriod), 0);
    }

    #[test]
    fn mixed_cyrillic_latin_detected() {
        let store = run("Hеllο");
        assert!(store.count(Tag::Cyrillic) >= 1);
        assert!(store.count(Tag::Greek) >= 1);
        assert_eq!(store.count(Tag::AsciiLetter), 1);
        assert_eq!(store.count(Tag::MixedCyrillicLatin), 1);
    }

    #[test]
    fn long_token_20_and_30_thresholds() {
        let store20 = run(&"a".repeat(25));
        assert_eq!(store20.count(Tag::LongToken20), 1);
        let store30 = run(&"a".repeat(35));
        assert_eq!(store30.count(Tag::LongToken30), 1);
    }

    #[test]
    fn known_long_word_is_exempt() {
        let store = run("internationalization");
        assert_eq!(store.count(Tag::LongToken20), 0);
        assert_eq!(store.count(Tag::LongToken30), 0);
    }

    /// Parameterized check that a single-script token fast-tracks to its own
    /// script tag without tripping any mixed-script category.
    #[rstest]
    #[case::cyrillic("привет", Tag::Cyrillic)]
    #[case::arabic("كتاب", Tag::ArabicLetter)]
    #[case::devanagari("नमस्ते", Tag::Devanagari)]
    #[case::georgian("საქართველო", Tag::Georgian)]
    #[case::cjk("漢字", Tag::Cjk)]
    fn single_script_token_emits_only_its_own_script(#[case] token: &str, #[case] tag: Tag) {
        let store = run(token);
        assert!(store.count(tag) >= 1, "expected {tag:?} for {token:?}");
        assert_eq!(store.count(Tag::MixedCyrillicLatin), 0);
    }
}
