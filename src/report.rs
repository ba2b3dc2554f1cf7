//! The aggregator / report builder (spec §4.7) and the structured JSON dump
//! (spec §6 "Output — structured").

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::Config;
use crate::language::LanguagePolicy;
use crate::registry::{REGISTRY, Tag};
use crate::store::{ExampleStore, Location};

/// One example line, ready to print or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct ReportExample {
    pub token: String,
    pub occurrences: u64,
    pub locations: Vec<String>,
    pub locations_truncated: bool,
}

/// One category section of the finished report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub tag: String,
    pub description: String,
    pub count: u64,
    pub suppressed_by_language: bool,
    pub examples: Vec<ReportExample>,
    pub examples_full: bool,
}

/// The finished, immutable report (spec §4.7 end state).
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub n_lines: usize,
    pub n_tokens: usize,
    pub language_code: Option<String>,
    pub sections: Vec<ReportSection>,
}

/// Sort examples descending by occurrence count, then ascending
/// case-insensitive alphabetically (spec §4.7 "Example ordering").
fn sort_examples(mut examples: Vec<(String, u64, Vec<Location>)>) -> Vec<(String, u64, Vec<Location>)> {
    examples.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });
    examples
}

/// Build the finished report by iterating the registry in declaration
/// order and applying the display policy table from spec §4.7.
pub fn build_report(
    store: &ExampleStore,
    config: &Config,
    policy: &LanguagePolicy,
    n_lines: usize,
    n_tokens: usize,
) -> Report {
    let mut sections = Vec::new();

    for &tag in REGISTRY {
        let count = store.count(tag);
        let suppressed = policy.suppressed.contains(&tag);

        if count == 0 && !config.show_all_categories {
            continue;
        }

        let show_examples = count > 0 && (!suppressed || config.show_all_categories);

        let examples = if show_examples {
            let category = store.category(tag);
            let raw: Vec<(String, u64, Vec<Location>)> = category
                .map(|c| {
                    c.examples_in_insertion_order()
                        .map(|(tok, rec)| (tok.to_string(), rec.occurrences, rec.locations.clone()))
                        .collect()
                })
                .unwrap_or_default();
            sort_examples(raw)
                .into_iter()
                .map(|(token, occurrences, locations)| {
                    let locations_truncated = occurrences > config.max_locations as u64;
                    ReportExample {
                        token,
                        occurrences,
                        locations: locations.iter().map(|l| l.to_string()).collect(),
                        locations_truncated,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let examples_full = store.category(tag).map(|c| c.examples_full).unwrap_or(false);

        sections.push(ReportSection {
            tag: tag.name().to_string(),
            description: tag.description().to_string(),
            count,
            suppressed_by_language: suppressed,
            examples,
            examples_full: show_examples && examples_full,
        });
    }

    Report {
        n_lines,
        n_tokens,
        language_code: config.language_code.clone(),
        sections,
    }
}

/// Render the human-readable text report (spec §6 "Output — human-readable
/// report").
pub fn write_text_report(report: &Report) -> String {
    let mut out = String::new();
    let lang = report.language_code.as_deref().unwrap_or("none");
    let _ = writeln!(
        out,
        "Analysed {} tokens in {} lines (language code: {})",
        report.n_tokens, report.n_lines, lang
    );

    for section in &report.sections {
        let _ = writeln!(out);
        let _ = write!(out, "{}: {}", section.tag, section.description);
        if section.count == 0 {
            let _ = writeln!(out, " (0 instances)");
            continue;
        }
        let _ = writeln!(out, " ({} instances)", section.count);

        if section.suppressed_by_language && section.examples.is_empty() {
            let _ = writeln!(
                out,
                "  (suppressed for this language; examples not shown)"
            );
            continue;
        }

        for example in &section.examples {
            let _ = write!(
                out,
                "  {} ({} instance{}; line {}",
                example.token,
                example.occurrences,
                if example.occurrences == 1 { "" } else { "s" },
                example
                    .locations
                    .first()
                    .map(|s| s.as_str())
                    .unwrap_or("?"),
            );
            for loc in example.locations.iter().skip(1) {
                let _ = write!(out, ", {loc}");
            }
            if example.locations_truncated {
                let _ = write!(out, ", …");
            }
            let _ = writeln!(out, ")");
        }
        if section.examples_full {
            let _ = writeln!(out, "  …");
        }
        if section.suppressed_by_language {
            let _ = writeln!(out, "  (note: category suppressed for this language)");
        }
    }

    out
}

// --- structured dump (spec §6 "Output — structured (optional)") ---

#[derive(Debug, Clone, Serialize)]
pub struct StructuredExample {
    pub token: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructuredEntry {
    pub char: String,
    pub id: String,
    pub name: String,
    pub count: u64,
    pub ex: Vec<StructuredExample>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NonCanonicalEntry {
    pub char: String,
    pub id: String,
    pub name: String,
    pub count: u64,
    pub ex: Vec<StructuredExample>,
    pub orig: String,
    pub norm: String,
    #[serde(rename = "orig-count")]
    pub orig_count: u64,
    #[serde(rename = "norm-count")]
    pub norm_count: u64,
    #[serde(rename = "orig-form")]
    pub orig_form: String,
    #[serde(rename = "norm-form")]
    pub norm_form: String,
    pub changes: u64,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct StructuredDump {
    pub n_lines: usize,
    pub n_characters: usize,
    #[serde(rename = "letter-script")]
    pub letter_script: std::collections::BTreeMap<String, StructuredEntry>,
    #[serde(rename = "number-script")]
    pub number_script: std::collections::BTreeMap<String, StructuredEntry>,
    #[serde(rename = "other-script")]
    pub other_script: std::collections::BTreeMap<String, StructuredEntry>,
    #[serde(rename = "non-canonical")]
    pub non_canonical: std::collections::BTreeMap<String, NonCanonicalEntry>,
    #[serde(rename = "char-conflict")]
    pub char_conflict: std::collections::BTreeMap<String, StructuredEntry>,
    #[serde(rename = "notable-token")]
    pub notable_token: std::collections::BTreeMap<String, StructuredEntry>,
    pub pattern: std::collections::BTreeMap<String, StructuredEntry>,
    pub block: std::collections::BTreeMap<String, StructuredEntry>,
}

/// Which top-level structured-dump bucket a tag belongs in. `None` means
/// the tag has no place in the structured dump (e.g. a `_CHAR` sibling,
/// already folded into its parent's `ex` list via the text report).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    LetterScript,
    NumberScript,
    OtherScript,
    NonCanonical,
    CharConflict,
    NotableToken,
    Pattern,
    Block,
}

fn bucket_for(tag: Tag) -> Option<Bucket> {
    use Tag::*;
    Some(match tag {
        NonUtf8 | Utf8NonShortest => Bucket::NonCanonical,
        MixedCyrillicLatin | MixedCjkAscii | MixedArabicAscii | ArabicPrefixAscii
        | MixedCyrillicPunctPrefix | MixedCyrillicPunctSuffix | MixedCyrillicPunctPeriod
        | MixedCyrillicPunctMixed | MixedGeorgianPunctPrefix | MixedGeorgianPunctSuffix
        | MixedGeorgianPunctPeriod | MixedGeorgianPunctMixed => Bucket::CharConflict,
        UnsplitPunctAlphaHyphen | UnsplitPunct | UnsplitApoS | UnsplitApoV | UnsplitNot
        | UnsplitPeriod | NumUnsplitPeriod | BenUnsplitPeriod | BenUnsplitApo | BenUnsplitPunct
        | Email | Url | Hashtag | Handle | Xml | SuspiciousUrl | BrokenUrl | BrokenEmail
        | BrokenFilename | BrokenUrlFuzzy | BrokenEmailFuzzy | SplitXml | XmlEscDec | XmlEscHex
        | XmlEscStd | XmlEscAbc | UnusualPunctComb => Bucket::NotableToken,
        StdSepNukta | AltSepNukta | StdCmpNukta | AltCmpNukta | DisVsgnNukta | LongToken20
        | LongToken30 => Bucket::Pattern,
        ArabicDigit | ArabicIndicDigit | MathematicalAlphanumeric => Bucket::NumberScript,
        ControlCharacter | NonAsciiWhitespace | ZeroWidth | InitialByteOrderMark
        | CombiningDiacritic | VariationSelector | Tag_ | OtherChar | ReplacementCharacter
        | ReplacementObject | NonAsciiPunct | LetterlikeSymbol | MathematicalOperator
        | TechnicalSymbol | ArrowSymbol | MiscSymbol | GeometricShape | EnclosedAlphanumeric
        | BoxDrawing | Pictograph | Fullwidth | PrivateUse | KlingonPiqad
        | CjkSquaredLatinAbbreviation => Bucket::OtherScript,
        AsciiLetter | LatinPlusAlpha | LanguageSpecific | LatinExtendedLigature | Ipa | Greek
        | Cyrillic | Armenian | Hebrew | ArabicLetter | ArabicLetterYeh | FarsiLetterYeh
        | ArabicLetterKaf | FarsiLetterKeheh | ArabicTatweel | ArabicPunctuation
        | ArabicPresentationForm | ArabicLigature | Syriac | Thaana | Devanagari | Bengali
        | Gurmukhi | Gujarati | Oriya | Tamil | Telugu | Kannada | Malayalam | Sinhala | Thai
        | Lao | Khmer | Myanmar | TibetanLetter | TibetanPunctuation | GeorgianAsomtavruli
        | GeorgianNuskhuri | Georgian | GeorgianArchaic | GeorgianEmphasis | Ethiopic | Cherokee
        | CanadianSyllabics | Ogham | Runic | Mongolian | Buginese | Sundanese | Yi | Lisu
        | Javanese | MeeteiMayek | Hangul | Gothic | Phoenician | Cuneiform | EgyptianHieroglyph
        | Cjk | CjkExtension => Bucket::LetterScript,
        // _CHAR siblings are folded into their parent's examples, not
        // surfaced as independent structured-dump entries.
        NonAsciiWhitespaceChar | TagChar | NonAsciiPunctChar | LetterlikeSymbolChar
        | MathematicalOperatorChar | TechnicalSymbolChar | ArrowSymbolChar | MiscSymbolChar
        | GeometricShapeChar => return None,
    })
}

/// Build the structured dump from the finished example store. Since
/// `lexsentry` performs no text repair (spec §1 Non-goals), the
/// non-canonical `norm`/`norm-form` fields mirror `orig`/`orig-form`
/// unchanged — the shape is populated for downstream compatibility, but no
/// normalization is actually performed here.
pub fn build_structured_dump(
    store: &ExampleStore,
    n_lines: usize,
    n_characters: usize,
) -> StructuredDump {
    let mut dump = StructuredDump {
        n_lines,
        n_characters,
        ..Default::default()
    };

    for &tag in REGISTRY {
        let Some(bucket) = bucket_for(tag) else {
            continue;
        };
        let count = store.count(tag);
        if count == 0 {
            continue;
        }
        let category = store.category(tag);
        let ex: Vec<StructuredExample> = category
            .map(|c| {
                c.examples_in_insertion_order()
                    .flat_map(|(tok, rec)| {
                        rec.locations
                            .iter()
                            .map(move |loc| StructuredExample {
                                token: tok.to_string(),
                                location: loc.to_string(),
                            })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let key = tag.name().to_lowercase();
        // A representative codepoint for this category: the first character
        // of the first recorded example. Categories are per-tag, not
        // per-codepoint, so this is a sample rather than a unique identity;
        // it still gives `id`/`char` a concrete, inspectable value instead
        // of a placeholder.
        let sample_char = ex
            .first()
            .and_then(|e| e.token.chars().next())
            .unwrap_or('\u{0}');
        let id = format!("U+{:04X}", sample_char as u32);
        let char_field = sample_char.to_string();
        let name = tag.description().to_string();

        if bucket == Bucket::NonCanonical {
            let sample_orig = ex.first().map(|e| e.token.clone()).unwrap_or_default();
            dump.non_canonical.insert(
                key,
                NonCanonicalEntry {
                    char: char_field,
                    id,
                    name,
                    count,
                    ex,
                    orig: sample_orig.clone(),
                    norm: sample_orig.clone(),
                    orig_count: count,
                    norm_count: count,
                    orig_form: sample_orig.clone(),
                    norm_form: sample_orig,
                    changes: 0,
                },
            );
            continue;
        }

        let entry = StructuredEntry { char: char_field, id, name, count, ex };
        match bucket {
            Bucket::LetterScript => dump.letter_script.insert(key, entry),
            Bucket::NumberScript => dump.number_script.insert(key, entry),
            Bucket::OtherScript => dump.other_script.insert(key, entry),
            Bucket::CharConflict => dump.char_conflict.insert(key, entry),
            Bucket::NotableToken => dump.notable_token.insert(key, entry),
            Bucket::Pattern => dump.pattern.insert(key, entry),
            Bucket::Block => dump.block.insert(key, entry),
            Bucket::NonCanonical => unreachable!("handled above"),
        };
    }

    dump
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::language::policy_for;
    use crate::store::Mode;

    #[test]
    fn zero_count_omitted_unless_show_all() {
        let mut store = ExampleStore::new(20, 10);
        store.note(Tag::Cjk, "foo", Location::Line(1), Mode::Unconditional);
        let (config, _) = ConfigBuilder::default().build();
        let policy = policy_for(None);
        let report = build_report(&store, &config, &policy, 1, 1);
        assert!(!report.sections.iter().any(|s| s.tag == "NON_UTF8"));
    }

    #[test]
    fn show_all_categories_includes_zero_count_header_only() {
        let store = ExampleStore::new(20, 10);
        let (mut config, _) = ConfigBuilder::default().build();
        config.show_all_categories = true;
        let policy = policy_for(None);
        let report = build_report(&store, &config, &policy, 0, 0);
        let section = report.sections.iter().find(|s| s.tag == "NON_UTF8").unwrap();
        assert_eq!(section.count, 0);
        assert!(section.examples.is_empty());
    }

    #[test]
    fn suppressed_category_hides_examples_unless_show_all() {
        let mut store = ExampleStore::new(20, 10);
        store.note(Tag::ArabicLetter, "كتاب", Location::Line(1), Mode::Unconditional);
        let (config, _) = ConfigBuilder::default().build();
        let policy = policy_for(Some("ara"));
        let report = build_report(&store, &config, &policy, 1, 1);
        let section = report.sections.iter().find(|s| s.tag == "ARABIC_LETTER").unwrap();
        assert_eq!(section.count, 1);
        assert!(section.examples.is_empty());
    }

    #[test]
    fn sort_is_by_count_desc_then_alpha_asc() {
        let sorted = sort_examples(vec![
            ("Banana".to_string(), 2, vec![]),
            ("apple".to_string(), 3, vec![]),
            ("cherry".to_string(), 3, vec![]),
        ]);
        let order: Vec<&str> = sorted.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(order, vec!["apple", "cherry", "Banana"]);
    }

    #[test]
    fn registry_order_preserved_in_report() {
        let store = ExampleStore::new(20, 10);
        let (mut config, _) = ConfigBuilder::default().build();
        config.show_all_categories = true;
        let policy = policy_for(None);
        let report = build_report(&store, &config, &policy, 0, 0);
        let report_order: Vec<&str> = report.sections.iter().map(|s| s.tag.as_str()).collect();
        let registry_order: Vec<&str> = REGISTRY.iter().map(|t| t.name()).collect();
        assert_eq!(report_order, registry_order);
    }
}
