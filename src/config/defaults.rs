//! Default values and hard caps for [`super::settings::Config`] (spec §3, §6).

/// Default distinct examples stored per category.
pub const DEFAULT_MAX_EXAMPLES: u32 = 20;
/// Hard cap on distinct examples per category; values above this are clamped.
pub const HARD_CAP_MAX_EXAMPLES: u32 = 1000;

/// Default locations stored per example.
pub const DEFAULT_MAX_LOCATIONS: u32 = 10;
/// Hard cap on locations per example; values above this are clamped.
pub const HARD_CAP_MAX_LOCATIONS: u32 = 100;

/// Default minimum codepoint length for the long-token checks.
pub const DEFAULT_LONG_TOKEN_MIN: u32 = 20;

/// Language codes accepted by the configuration surface (spec §6).
pub const KNOWN_LANGUAGE_CODES: &[&str] = &[
    "ar", "ara", "chi", "dar", "de", "en", "eng", "es", "far", "fr", "fre", "gr", "jp", "kin",
    "mlg", "ru", "som", "ur", "zh",
];
