/// Engine configuration
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |-----------|---------|-------------|
/// | LOG_LEVEL | info | Log verbosity |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
#[derive(Debug, Clone)]
pub struct Config {
    /// Log verbosity: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for file logging
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
