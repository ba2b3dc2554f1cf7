// End-to-end tests of the classification engine's testable properties
// (encoding integrity, mixed-script detection, dedup semantics, the line
// pre-scanner, and language suppression) driven through the public
// `Analyzer` API rather than individual unit tests per module.

use std::io::Cursor;

use lexsentry::config::ConfigBuilder;
use lexsentry::driver::{Analyzer, Cancellation};
use lexsentry::registry::Tag;

fn analyze(input: &str, language: Option<&str>) -> lexsentry::Report {
    let (config, _) = ConfigBuilder {
        language_code: language.map(str::to_string),
        ..Default::default()
    }
    .build();
    let mut analyzer = Analyzer::new(config);
    analyzer
        .run(Cursor::new(input.as_bytes()), &Cancellation::new())
        .expect("analysis should not fail on well-formed input")
}

fn section_count(report: &lexsentry::Report, tag: Tag) -> u64 {
    report
        .sections
        .iter()
        .find(|s| s.tag == tag.name())
        .map(|s| s.count)
        .unwrap_or(0)
}

#[test]
fn mixed_script_token_earns_ascii_cyrillic_and_mixed_tag() {
    // "Hеllο" interleaves Latin H/l with Cyrillic е and Greek ο.
    let report = analyze("Hеllο world\n", None);
    assert!(section_count(&report, Tag::AsciiLetter) >= 1);
    assert!(section_count(&report, Tag::Cyrillic) >= 1);
    assert!(section_count(&report, Tag::Greek) >= 1);
    assert_eq!(section_count(&report, Tag::MixedCyrillicLatin), 1);
}

#[test]
fn broken_url_across_whitespace_is_prescanned_before_tokenization() {
    let report = analyze("see http : / / example . com / path for details\n", None);
    assert_eq!(section_count(&report, Tag::BrokenUrl), 1);
}

#[test]
fn broken_url_fuzzy_matches_dotted_www_without_slashes() {
    let report = analyze("see www . example . com for details\n", None);
    assert_eq!(section_count(&report, Tag::BrokenUrlFuzzy), 1);
}

#[test]
fn clean_url_recognized_without_suspicious_url() {
    let report = analyze("visit https://example.com/page today\n", None);
    assert_eq!(section_count(&report, Tag::Url), 1);
    assert_eq!(section_count(&report, Tag::SuspiciousUrl), 0);
}

#[test]
fn fast_track_ascii_token_emits_only_ascii_letter() {
    let report = analyze("hello\n", None);
    let ascii = report
        .sections
        .iter()
        .find(|s| s.tag == "ASCII_LETTER")
        .unwrap();
    assert_eq!(ascii.count, 1);
    assert_eq!(section_count(&report, Tag::NonUtf8), 0);
}

#[test]
fn arabic_letter_suppressed_for_arabic_language_code() {
    let report = analyze("كتاب جميل\n", Some("ara"));
    let section = report
        .sections
        .iter()
        .find(|s| s.tag == "ARABIC_LETTER")
        .expect("section should still appear since it occurred");
    assert!(section.suppressed_by_language);
    assert!(section.examples.is_empty());
}

#[test]
fn repeated_location_is_not_deduplicated() {
    // Two identical tokens on the same line record the line twice, the
    // legacy behavior the example store preserves deliberately.
    let report = analyze("▲ ▲\n", None);
    let section = report
        .sections
        .iter()
        .find(|s| s.tag == "GEOMETRIC_SHAPE")
        .unwrap();
    let example = &section.examples[0];
    assert_eq!(example.occurrences, 2);
    assert_eq!(example.locations, vec!["1", "1"]);
}

#[test]
fn malformed_utf8_never_panics_and_is_accounted_for() {
    // A lone continuation byte and an overlong encoding, each surrounded
    // by plain ASCII so they land inside otherwise-ordinary tokens.
    let mut raw = Vec::new();
    raw.extend_from_slice(b"ab");
    raw.push(0x80); // stray continuation byte
    raw.extend_from_slice(b"cd ");
    raw.push(0xC0);
    raw.push(0x80); // overlong NUL
    raw.push(b'\n');

    let (config, _) = ConfigBuilder::default().build();
    let mut analyzer = Analyzer::new(config);
    let report = analyzer
        .run(Cursor::new(raw), &Cancellation::new())
        .expect("ill-formed UTF-8 is data, not an error");
    assert!(section_count(&report, Tag::NonUtf8) >= 1);
    assert!(section_count(&report, Tag::Utf8NonShortest) >= 1);
}

#[test]
fn sentence_id_mode_uses_first_field_as_location() {
    let (config, _) = ConfigBuilder {
        first_field_is_sentence_id: true,
        ..Default::default()
    }
    .build();
    let mut analyzer = Analyzer::new(config);
    let report = analyzer
        .run(Cursor::new(b"doc-1 hello world\n".to_vec()), &Cancellation::new())
        .unwrap();
    let section = report.sections.iter().find(|s| s.tag == "ASCII_LETTER").unwrap();
    let hello = section.examples.iter().find(|e| e.token == "hello").unwrap();
    assert_eq!(hello.locations, vec!["doc-1"]);
}

#[test]
fn cancellation_between_lines_yields_partial_report() {
    let (config, _) = ConfigBuilder::default().build();
    let mut analyzer = Analyzer::new(config);
    let cancellation = Cancellation::new();
    cancellation.cancel();
    let report = analyzer
        .run(Cursor::new(b"one two\nthree four\n".to_vec()), &cancellation)
        .unwrap();
    assert_eq!(report.n_lines, 0);
    assert_eq!(report.n_tokens, 0);
}
