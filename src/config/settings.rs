//! The immutable run configuration (spec §3 "Configuration", §6 "Configuration surface").

use super::defaults::{
    DEFAULT_LONG_TOKEN_MIN, DEFAULT_MAX_EXAMPLES, DEFAULT_MAX_LOCATIONS, HARD_CAP_MAX_EXAMPLES,
    HARD_CAP_MAX_LOCATIONS, KNOWN_LANGUAGE_CODES,
};

/// Immutable, validated configuration for a single analysis run.
///
/// Built via [`ConfigBuilder`], never mutated afterward — the classifiers
/// and aggregator all take `&Config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_examples: u32,
    pub max_locations: u32,
    pub show_all_categories: bool,
    pub first_field_is_sentence_id: bool,
    pub language_code: Option<String>,
    pub long_token_min: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_examples: DEFAULT_MAX_EXAMPLES,
            max_locations: DEFAULT_MAX_LOCATIONS,
            show_all_categories: false,
            first_field_is_sentence_id: false,
            language_code: None,
            long_token_min: DEFAULT_LONG_TOKEN_MIN,
        }
    }
}

/// Raw, unvalidated configuration inputs as gathered from the CLI
/// collaborator. [`ConfigBuilder::build`] applies the clamping and alias
/// rules from spec §6 and returns the warnings that should be logged
/// rather than failing the run (per spec §7, out-of-range knobs are
/// clamped, not rejected).
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub max_examples: Option<u32>,
    pub max_locations: Option<u32>,
    pub show_all_categories: bool,
    pub first_field_is_sentence_id: bool,
    pub language_code: Option<String>,
    pub long_token_min: Option<u32>,
}

impl ConfigBuilder {
    /// Validate and clamp raw inputs into a [`Config`], returning any
    /// warnings that should be surfaced to the user via logging.
    pub fn build(self) -> (Config, Vec<String>) {
        let mut warnings = Vec::new();

        let max_examples = match self.max_examples {
            Some(v) if v > HARD_CAP_MAX_EXAMPLES => {
                warnings.push(format!(
                    "max_examples={v} exceeds hard cap {HARD_CAP_MAX_EXAMPLES}; clamping"
                ));
                HARD_CAP_MAX_EXAMPLES
            }
            Some(v) => v,
            None => DEFAULT_MAX_EXAMPLES,
        };

        let max_locations = match self.max_locations {
            Some(v) if v > HARD_CAP_MAX_LOCATIONS => {
                warnings.push(format!(
                    "max_locations={v} exceeds hard cap {HARD_CAP_MAX_LOCATIONS}; clamping"
                ));
                HARD_CAP_MAX_LOCATIONS
            }
            Some(v) => v,
            None => DEFAULT_MAX_LOCATIONS,
        };

        let language_code = self.language_code.map(|code| normalize_language(&code));
        if let Some(code) = &language_code {
            if !KNOWN_LANGUAGE_CODES.contains(&code.as_str()) {
                warnings.push(format!(
                    "unrecognized language code '{code}'; suppression and allow-lists will be empty"
                ));
            }
        }

        let long_token_min = self.long_token_min.unwrap_or(DEFAULT_LONG_TOKEN_MIN);

        let config = Config {
            max_examples,
            max_locations,
            show_all_categories: self.show_all_categories,
            first_field_is_sentence_id: self.first_field_is_sentence_id,
            language_code,
            long_token_min,
        };
        (config, warnings)
    }
}

/// Apply the `en -> eng` alias from spec §6; all other codes pass through.
pub fn normalize_language(code: &str) -> String {
    if code.eq_ignore_ascii_case("en") {
        "eng".to_string()
    } else {
        code.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_max_examples_above_hard_cap() {
        let builder = ConfigBuilder {
            max_examples: Some(5000),
            ..Default::default()
        };
        let (config, warnings) = builder.build();
        assert_eq!(config.max_examples, HARD_CAP_MAX_EXAMPLES);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn clamps_max_locations_above_hard_cap() {
        let builder = ConfigBuilder {
            max_locations: Some(500),
            ..Default::default()
        };
        let (config, warnings) = builder.build();
        assert_eq!(config.max_locations, HARD_CAP_MAX_LOCATIONS);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn en_aliases_to_eng() {
        assert_eq!(normalize_language("en"), "eng");
        assert_eq!(normalize_language("EN"), "eng");
        assert_eq!(normalize_language("ara"), "ara");
    }

    #[test]
    fn unknown_language_code_warns_but_does_not_fail() {
        let builder = ConfigBuilder {
            language_code: Some("xx".to_string()),
            ..Default::default()
        };
        let (config, warnings) = builder.build();
        assert_eq!(config.language_code.as_deref(), Some("xx"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn defaults_match_spec() {
        let (config, warnings) = ConfigBuilder::default().build();
        assert_eq!(config.max_examples, 20);
        assert_eq!(config.max_locations, 10);
        assert_eq!(config.long_token_min, 20);
        assert!(warnings.is_empty());
    }
}
