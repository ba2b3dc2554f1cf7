pub mod defaults;
pub mod settings;

pub use settings::{Config, ConfigBuilder, normalize_language};
