//! The driver (spec §2 item 8, §5): owns the line loop, wires the line
//! pre-scanner, token classifier and aggregator together, and tracks the
//! global counters the summary line reports.

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::config::Config;
use crate::error::{LexError, LexResult};
use crate::language::{LanguagePolicy, policy_for};
use crate::prescan::prescan_line;
use crate::report::{Report, build_report, build_structured_dump, StructuredDump};
use crate::store::{ExampleStore, Location};
use crate::token::classify_token;

/// A cooperative cancellation flag, checked between lines (spec §5
/// "Cancellation is cooperative at the line-loop granularity").
#[derive(Debug, Clone, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    pub fn new() -> Self {
        Cancellation(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Collapse internal whitespace runs to a single space and strip
/// leading/trailing ASCII space/tab (spec §6 "Input").
fn normalize_whitespace(line: &str) -> String {
    let trimmed = line.trim_matches(|c| c == ' ' || c == '\t');
    let mut out = String::with_capacity(trimmed.len());
    let mut in_run = false;
    for ch in trimmed.chars() {
        if ch == ' ' || ch == '\t' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Reads `(line_number, sentence_id, text)` triples from a `BufRead`,
/// applying the whitespace normalization and optional sentence-ID
/// extraction spec §2.5 assigns to the input boundary.
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
    first_field_is_sentence_id: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, first_field_is_sentence_id: bool) -> Self {
        LineSource {
            reader,
            line_number: 0,
            first_field_is_sentence_id,
        }
    }

    /// Reads the next line, returning `Ok(None)` at end-of-input. I/O
    /// errors are returned; malformed UTF-8 is read lossily rather than
    /// failing the run (spec §2.5).
    pub fn next_line(&mut self) -> LexResult<Option<(usize, Option<String>, String)>> {
        let mut raw = Vec::new();
        let bytes_read = self.reader.read_until(b'\n', &mut raw).map_err(LexError::Io)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        while raw.last() == Some(&b'\n') || raw.last() == Some(&b'\r') {
            raw.pop();
        }
        self.line_number += 1;
        let decoded = String::from_utf8_lossy(&raw).into_owned();

        if self.first_field_is_sentence_id {
            let trimmed = decoded.trim_start_matches(|c| c == ' ' || c == '\t');
            let split_point = trimmed.find(|c: char| c == ' ' || c == '\t');
            let (id, rest) = match split_point {
                Some(idx) => (trimmed[..idx].to_string(), &trimmed[idx..]),
                None => (trimmed.to_string(), ""),
            };
            Ok(Some((
                self.line_number,
                Some(id),
                normalize_whitespace(rest),
            )))
        } else {
            Ok(Some((self.line_number, None, normalize_whitespace(&decoded))))
        }
    }
}

/// Owns the example store and global counters for a single analysis run.
pub struct Analyzer {
    store: ExampleStore,
    config: Config,
    policy: LanguagePolicy,
    n_lines: usize,
    n_tokens: usize,
    n_characters: usize,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        let policy = policy_for(config.language_code.as_deref());
        let store = ExampleStore::new(config.max_examples, config.max_locations);
        Analyzer {
            store,
            config,
            policy,
            n_lines: 0,
            n_tokens: 0,
            n_characters: 0,
        }
    }

    /// Runs the full line loop over `reader`, honoring `cancellation`
    /// between lines, and returns the finished report.
    pub fn run<R: BufRead>(
        &mut self,
        reader: R,
        cancellation: &Cancellation,
    ) -> LexResult<Report> {
        let mut source = LineSource::new(reader, self.config.first_field_is_sentence_id);

        loop {
            if cancellation.is_cancelled() {
                warn!("analysis cancelled after {} lines", self.n_lines);
                break;
            }
            let Some((line_number, sentence_id, text)) = source.next_line()? else {
                break;
            };
            self.n_lines += 1;
            self.n_characters += text.chars().count();

            let location = match sentence_id {
                Some(id) => Location::SentenceId(id),
                None => Location::Line(line_number),
            };

            let scanned = prescan_line(&mut self.store, &text, &location);

            for token in scanned.split(' ').filter(|t| !t.is_empty()) {
                self.n_tokens += 1;
                classify_token(&mut self.store, &self.config, &self.policy, token, &location);
            }
        }

        Ok(build_report(
            &self.store,
            &self.config,
            &self.policy,
            self.n_lines,
            self.n_tokens,
        ))
    }

    /// Builds the optional structured dump (spec §6) from the same store
    /// the text report was built from. Must be called after [`Self::run`].
    pub fn structured_dump(&self) -> StructuredDump {
        build_structured_dump(&self.store, self.n_lines, self.n_characters)
    }
}
