use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Timeout for a single read-only call, in seconds
    ///
    /// Env: TKT_HTTP_TIMEOUT_SECS
    /// Default: 30
    pub timeout_secs: u64,

    /// Maximum number of read-only calls in flight when fanning out
    ///
    /// Env: TKT_HTTP_MAX_CONCURRENCY
    /// Default: 8
    pub max_concurrency: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_concurrency() -> usize {
    8
}

impl HttpConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "HTTP timeout cannot be 0".to_string(),
            ));
        }

        if self.max_concurrency == 0 {
            return Err(ConfigError::ValidateError(
                "HTTP max concurrency cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_concurrency: default_max_concurrency(),
        }
    }
}
