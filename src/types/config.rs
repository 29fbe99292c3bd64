use std::time::Duration;

use tracing::warn;

/// Environment variable selecting the output format (`text` or `json`)
pub const ENV_OUTPUT: &str = "PTP_MGMT_OUTPUT";

/// Environment variable overriding the default timeout in seconds
pub const ENV_DEFAULT_TIMEOUT: &str = "PTP_MGMT_DEFAULT_TIMEOUT";

/// How much the client reports while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings only
    #[default]
    Brief,
    /// Every scanned option and the final request
    Verbose,
}

/// How the client engine renders its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Configuration carried alongside the request to the client engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Reporting level, set by `--verbose` / `--brief` (default: brief)
    pub verbosity: Verbosity,

    /// Timeout used when the request does not set one (default: 5 seconds)
    pub default_timeout: Duration,

    /// Output format of the client engine (default: text)
    pub output: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Brief,
            default_timeout: Duration::from_secs(5),
            output: OutputFormat::Text,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults overridden by the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for
    /// [`ENV_OUTPUT`] and [`ENV_DEFAULT_TIMEOUT`].
    ///
    /// Malformed values are logged and ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse::<OutputFormat>() {
                Ok(format) => builder = builder.output(format),
                Err(e) => warn!(variable = ENV_OUTPUT, "{e}"),
            }
        }

        if let Some(raw) = lookup(ENV_DEFAULT_TIMEOUT) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => builder = builder.default_timeout(Duration::from_secs(secs)),
                _ => warn!(variable = ENV_DEFAULT_TIMEOUT, value = %raw, "ignoring invalid timeout"),
            }
        }

        builder.build()
    }
}

/// Builder for `ClientConfig`
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set verbosity
    #[must_use]
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    /// Set the fallback timeout
    #[must_use]
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    /// Set output format
    #[must_use]
    pub fn output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
