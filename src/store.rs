//! The example store (spec §4.2): bounded, insertion-ordered bookkeeping of
//! distinct example tokens and their locations, per category.

use std::collections::{HashMap, HashSet};

use crate::registry::Tag;

/// Either a 1-based line number or, in sentence-ID mode, the first
/// whitespace-delimited field of the line. Opaque to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Line(usize),
    SentenceId(String),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Line(n) => write!(f, "{n}"),
            Location::SentenceId(id) => write!(f, "{id}"),
        }
    }
}

/// Controls per-token dedup semantics for [`ExampleStore::note`] (spec §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// First character of a token: clears the per-token already-noted set.
    Initial,
    /// Subsequent characters: no-op if the tag is already in the set.
    FollowUp,
    /// Whole-token checks: neither reads nor writes the set.
    Unconditional,
}

/// A single (tag, token) example: how many times it occurred, and a
/// bounded, insertion-ordered list of where it occurred.
#[derive(Debug, Clone, Default)]
pub struct ExampleRecord {
    pub occurrences: u64,
    pub locations: Vec<Location>,
}

/// Per-category bookkeeping: total count plus bounded, insertion-ordered
/// distinct examples.
#[derive(Debug, Clone, Default)]
pub struct CategoryRecord {
    pub count: u64,
    order: Vec<String>,
    examples: HashMap<String, ExampleRecord>,
    pub examples_full: bool,
}

impl CategoryRecord {
    /// Examples in insertion order, exactly as recorded.
    pub fn examples_in_insertion_order(&self) -> impl Iterator<Item = (&str, &ExampleRecord)> {
        self.order
            .iter()
            .map(move |tok| (tok.as_str(), &self.examples[tok]))
    }

    pub fn example_count(&self) -> usize {
        self.order.len()
    }
}

/// Holds every category's bookkeeping, created lazily on first note
/// (spec §3 "Lifecycle"), plus the per-token already-noted set used for
/// per-character dedup.
#[derive(Debug, Default)]
pub struct ExampleStore {
    categories: HashMap<Tag, CategoryRecord>,
    already_noted: HashSet<Tag>,
    max_examples: u32,
    max_locations: u32,
}

impl ExampleStore {
    pub fn new(max_examples: u32, max_locations: u32) -> Self {
        ExampleStore {
            categories: HashMap::new(),
            already_noted: HashSet::new(),
            max_examples,
            max_locations,
        }
    }

    /// Record one occurrence of `tag` for `example` at `location`.
    ///
    /// `mode` controls per-token dedup (spec §4.2): on `Initial` the
    /// already-noted set is cleared before checking membership; on
    /// `FollowUp` a tag already in the set is skipped entirely (count is
    /// *not* incremented — token-level categories count once per token);
    /// `Unconditional` bypasses the set altogether.
    ///
    /// If `char` is provided and `tag` has a registered `_CHAR` sibling, a
    /// secondary note is performed for that sibling tag using `char` as the
    /// example token, always in `FollowUp`-equivalent semantics for the
    /// sibling (each character counts once, regardless of the parent
    /// token's dedup state).
    pub fn note(&mut self, tag: Tag, example: &str, location: Location, mode: Mode) {
        self.note_inner(tag, example, location, mode, None);
    }

    /// Like [`Self::note`], but also notes the paired `_CHAR` sibling tag
    /// (if one is registered for `tag`) using `char` as its example token.
    pub fn note_with_char(
        &mut self,
        tag: Tag,
        example: &str,
        location: Location,
        mode: Mode,
        char: &str,
    ) {
        self.note_inner(tag, example, location, mode, Some(char));
    }

    fn note_inner(
        &mut self,
        tag: Tag,
        example: &str,
        location: Location,
        mode: Mode,
        char: Option<&str>,
    ) {
        match mode {
            Mode::Initial => {
                self.already_noted.clear();
                self.already_noted.insert(tag);
                self.record(tag, example, location.clone());
            }
            Mode::FollowUp => {
                if !self.already_noted.insert(tag) {
                    // Already noted this token for this tag: count and
                    // example bookkeeping are skipped, but the _CHAR
                    // sibling (if any) still fires below, since characters
                    // are deduped independently of their parent token tag.
                } else {
                    self.record(tag, example, location.clone());
                }
            }
            Mode::Unconditional => {
                self.record(tag, example, location.clone());
            }
        }

        if let Some(char) = char {
            if let Some(sibling) = tag.char_sibling() {
                // Character-level tags are counted once per character, so
                // they always use Unconditional semantics regardless of the
                // parent token's mode.
                self.record(sibling, char, location);
            }
        }
    }

    fn record(&mut self, tag: Tag, example: &str, location: Location) {
        let max_examples = self.max_examples as usize;
        let max_locations = self.max_locations as usize;
        let category = self.categories.entry(tag).or_default();
        category.count += 1;

        if let Some(rec) = category.examples.get_mut(example) {
            rec.occurrences += 1;
            if rec.locations.len() < max_locations {
                rec.locations.push(location);
            }
            return;
        }

        if category.order.len() < max_examples {
            category.order.push(example.to_string());
            category.examples.insert(
                example.to_string(),
                ExampleRecord {
                    occurrences: 1,
                    locations: vec![location],
                },
            );
        } else {
            category.examples_full = true;
        }
    }

    pub fn category(&self, tag: Tag) -> Option<&CategoryRecord> {
        self.categories.get(&tag)
    }

    pub fn count(&self, tag: Tag) -> u64 {
        self.categories.get(&tag).map(|c| c.count).unwrap_or(0)
    }
}
