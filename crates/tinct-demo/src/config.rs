//! Application configuration for the demo.

use crate::cli::Cli;
use tinct_core::display::{DEFAULT_PRECISION, MAX_PRECISION};

/// Default tracing filter.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration for the Tinct demo.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Decimals shown for real-valued fields.
    pub precision: usize,
    /// Emit views as JSON instead of text.
    pub json: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            precision: precision_from(std::env::var("TINCT_PRECISION").ok().as_deref()),
            json: std::env::var("TINCT_JSON").is_ok(),
            log_filter: std::env::var("TINCT_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Parse a precision setting, falling back to the default and capping at
/// [`MAX_PRECISION`].
fn precision_from(value: Option<&str>) -> usize {
    value
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_PRECISION)
        .min(MAX_PRECISION)
}

impl AppConfig {
    /// Apply command-line overrides on top of the environment defaults.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(precision) = cli.precision {
            self.precision = usize::from(precision);
        }
        if cli.json {
            self.json = true;
        }
        if cli.verbose {
            self.log_filter = "debug".to_string();
        }
        self
    }
}
