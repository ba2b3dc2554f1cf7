use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Builder;
use lexsentry::config::ConfigBuilder;
use lexsentry::driver::{Analyzer, Cancellation};
use lexsentry::report::write_text_report;

/// Classify tokenized text into UTF-8 and Unicode anomaly categories
#[derive(Parser)]
#[command(name = "lexsentry")]
#[command(version)]
#[command(about = "Scan tokenized UTF-8 text for encoding, script, and tokenization anomalies")]
struct Cli {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Distinct examples stored per category (clamped to 1000)
    #[arg(long)]
    max_examples: Option<u32>,

    /// Locations stored per example (clamped to 100)
    #[arg(long)]
    max_locations: Option<u32>,

    /// ISO-ish language code used to suppress expected-script categories
    #[arg(long)]
    language: Option<String>,

    /// Show every category, including those with zero instances
    #[arg(long)]
    show_all_categories: bool,

    /// Treat the first whitespace-delimited field of each line as a sentence ID
    #[arg(long)]
    sentence_id: bool,

    /// Minimum codepoint length for the long-token checks
    #[arg(long)]
    long_token_min: Option<u32>,

    /// Also emit the structured JSON dump alongside the text report
    #[arg(long)]
    json: bool,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let (config, warnings) = ConfigBuilder {
        max_examples: cli.max_examples,
        max_locations: cli.max_locations,
        show_all_categories: cli.show_all_categories,
        first_field_is_sentence_id: cli.sentence_id,
        language_code: cli.language,
        long_token_min: cli.long_token_min,
    }
    .build();
    for warning in &warnings {
        log::warn!("{warning}");
    }

    let mut analyzer = Analyzer::new(config);
    let cancellation = Cancellation::new();

    let report = match cli.input {
        Some(path) => match File::open(&path) {
            Ok(file) => analyzer.run(BufReader::new(file), &cancellation),
            Err(e) => {
                eprintln!("lexsentry: failed to open '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => analyzer.run(BufReader::new(io::stdin().lock()), &cancellation),
    };

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("lexsentry: {e}");
            std::process::exit(1);
        }
    };

    let mut rendered = write_text_report(&report);
    if cli.json {
        let dump = analyzer.structured_dump();
        match serde_json::to_string_pretty(&dump) {
            Ok(json) => {
                rendered.push('\n');
                rendered.push_str(&json);
                rendered.push('\n');
            }
            Err(e) => {
                eprintln!("lexsentry: failed to serialize structured dump: {e}");
                std::process::exit(1);
            }
        }
    }

    let write_result = match cli.output {
        Some(path) => File::create(&path).and_then(|f| BufWriter::new(f).write_all(rendered.as_bytes())),
        None => io::stdout().lock().write_all(rendered.as_bytes()),
    };
    if let Err(e) = write_result {
        eprintln!("lexsentry: failed to write report: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    // Smoke-test that Cli's derive macro expansion is well-formed; clap
    // validates argument definitions at parse time, not compile time.
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
