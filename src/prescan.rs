//! The line pre-scanner (spec §4.5): before tokenization, recognizes split
//! URLs/emails/filenames/XML escapes that whitespace has driven apart, and
//! blanks the matched substring so later checks don't re-trip on it.

use std::sync::LazyLock;

use regex::Regex;

use crate::registry::Tag;
use crate::store::{ExampleStore, Location, Mode};

const TRIGGER_SUBSTRINGS: &[&str] = &["http", "www", " @ "];

fn line_has_trigger(line: &str) -> bool {
    TRIGGER_SUBSTRINGS.iter().any(|t| line.contains(t))
        || line.contains('&') && line.contains(';')
        || line.contains('\\') && line.contains('"')
}

/// Ordered, most-specific-first (spec §4.5 "Order matters"). Each entry is
/// `(tag, regex)`; the first match in the line on each pass wins.
struct PrescanRule {
    tag: Tag,
    regex: &'static LazyLock<Regex>,
}

// Requires genuine whitespace next to the scheme separator so intact URLs
// (no whitespace anywhere) never match; the trailing group only swallows
// further dot/slash-joined pieces, not unrelated following words.
static BROKEN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(https?|www)(?:\s+[:.]\s*|[:.]\s+)\s*/\s*/\s*\S+(?:\s+[./]\s+\S+)*")
        .unwrap()
});
static BROKEN_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[\w.+-]+\s+@\s+[\w.-]+\s+\.\s+[a-z]{2,}\b").unwrap());
static BROKEN_FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[\w-]+\s+\.\s+(cgi|doc|docx|gif|htm|html|jpeg|jpg|pdf|php|png|ppt|txt|xls|xml|zip)\b").unwrap()
});
static BROKEN_URL_FUZZY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwww\s*\.\s*\S+(\s+\.\s+\S+)+").unwrap());
static BROKEN_EMAIL_FUZZY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[\w.]+\s+@\s+[\w.]+\b").unwrap());
static SPLIT_XML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*/?\s*[A-Za-z][\w:.-]*\s*(?:[^<>]*?)\s*/?\s*>").unwrap());
static XML_ESC_DEC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#\d+;").unwrap());
static XML_ESC_HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#x[0-9A-Fa-f]+;").unwrap());
static XML_ESC_STD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|apos);").unwrap()
});
static XML_ESC_ABC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[A-Za-z][A-Za-z0-9]*;").unwrap());
static UNUSUAL_PUNCT_COMB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\\\s*""#).unwrap());

static RULES: LazyLock<Vec<PrescanRule>> = LazyLock::new(|| {
    vec![
        PrescanRule { tag: Tag::BrokenUrl, regex: &BROKEN_URL_RE },
        PrescanRule { tag: Tag::BrokenEmail, regex: &BROKEN_EMAIL_RE },
        PrescanRule { tag: Tag::BrokenFilename, regex: &BROKEN_FILENAME_RE },
        PrescanRule { tag: Tag::BrokenUrlFuzzy, regex: &BROKEN_URL_FUZZY_RE },
        PrescanRule { tag: Tag::BrokenEmailFuzzy, regex: &BROKEN_EMAIL_FUZZY_RE },
        PrescanRule { tag: Tag::SplitXml, regex: &SPLIT_XML_RE },
        PrescanRule { tag: Tag::XmlEscDec, regex: &XML_ESC_DEC_RE },
        PrescanRule { tag: Tag::XmlEscHex, regex: &XML_ESC_HEX_RE },
        PrescanRule { tag: Tag::XmlEscStd, regex: &XML_ESC_STD_RE },
        PrescanRule { tag: Tag::XmlEscAbc, regex: &XML_ESC_ABC_RE },
        PrescanRule { tag: Tag::UnusualPunctComb, regex: &UNUSUAL_PUNCT_COMB_RE },
    ]
});

/// The XML-escape-only sub-list run when the line lacks the broader
/// trigger substrings (spec §4.5, last sentence).
const XML_ONLY_TAGS: &[Tag] = &[
    Tag::XmlEscDec,
    Tag::XmlEscHex,
    Tag::XmlEscStd,
    Tag::XmlEscAbc,
];

/// Scan and blank split artifacts in `line`, returning the (possibly
/// modified) line to hand to the tokenizer. Recorded matches are replaced
/// with equivalent-length whitespace so token boundaries elsewhere on the
/// line are preserved.
pub fn prescan_line(store: &mut ExampleStore, line: &str, location: &Location) -> String {
    let mut working = line.to_string();
    let run_full_pass = line_has_trigger(line);

    loop {
        let mut matched_any = false;
        for rule in RULES.iter() {
            if !run_full_pass && !XML_ONLY_TAGS.contains(&rule.tag) {
                continue;
            }
            if let Some(m) = rule.regex.find(&working) {
                let matched_text = m.as_str().to_string();
                store.note(rule.tag, &matched_text, location.clone(), Mode::Unconditional);
                let blank: String = matched_text
                    .chars()
                    .map(|c| if c.is_whitespace() { c } else { ' ' })
                    .collect();
                working.replace_range(m.range(), &blank);
                matched_any = true;
                break;
            }
        }
        if !matched_any {
            break;
        }
    }

    working
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_url_is_recognized_and_blanked() {
        let mut store = ExampleStore::new(20, 10);
        let result = prescan_line(
            &mut store,
            "see http : / / example . com / path here",
            &Location::Line(1),
        );
        assert_eq!(store.count(Tag::BrokenUrl), 1);
        assert!(!result.contains("http"));
    }

    #[test]
    fn broken_url_fuzzy_matches_dotted_www_without_scheme() {
        let mut store = ExampleStore::new(20, 10);
        let result = prescan_line(&mut store, "www . example . com", &Location::Line(1));
        assert_eq!(store.count(Tag::BrokenUrlFuzzy), 1);
        assert!(!result.contains("www"));
    }

    #[test]
    fn xml_decimal_escape_recognized() {
        let mut store = ExampleStore::new(20, 10);
        let result = prescan_line(&mut store, "value &#65; here", &Location::Line(1));
        assert_eq!(store.count(Tag::XmlEscDec), 1);
        assert!(!result.contains('#'));
    }

    #[test]
    fn line_without_triggers_only_runs_xml_sublist() {
        let mut store = ExampleStore::new(20, 10);
        prescan_line(&mut store, "plain text , no markup", &Location::Line(1));
        assert_eq!(store.count(Tag::BrokenUrl), 0);
        assert_eq!(store.count(Tag::UnusualPunctComb), 0);
    }

    #[test]
    fn broken_email_blanked_before_fuzzy_pass_fires() {
        let mut store = ExampleStore::new(20, 10);
        prescan_line(&mut store, "contact jane @ example . com today", &Location::Line(1));
        assert_eq!(store.count(Tag::BrokenEmail), 1);
        assert_eq!(store.count(Tag::BrokenEmailFuzzy), 0);
    }
}
