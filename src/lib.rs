//! `lexsentry`: a streaming text-anomaly analyzer over tokenized UTF-8 text.
//!
//! The core classifies every token (and, where relevant, every character
//! within it) into a fixed taxonomy of issue categories spanning UTF-8
//! encoding integrity, Unicode script/block membership, and tokenization
//! quality. See [`report::build_report`] for the end-of-run aggregation and
//! [`driver::Analyzer`] for the line loop that drives classification.

pub mod charclass;
pub mod config;
pub mod driver;
pub mod error;
pub mod language;
pub mod prescan;
pub mod registry;
pub mod report;
pub mod store;
pub mod token;

pub use driver::{Analyzer, Cancellation, LineSource};
pub use error::{LexError, LexResult};
pub use registry::{REGISTRY, Tag};
pub use report::{Report, build_report, build_structured_dump};
