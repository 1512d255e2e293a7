mod args;
mod bns;
mod contract;
mod error;
mod http;
mod log;

pub use args::Args;
pub use bns::BnsConfig;
pub use contract::{ContractConfig, Network};
pub use error::ConfigError;
pub use http::HttpConfig;
pub use log::LogConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "TKT_";

#[derive(Debug, Clone, Default)]
pub struct TicketingConfig {
    pub contract: ContractConfig,
    pub http: HttpConfig,
    pub bns: BnsConfig,
    pub log: LogConfig,
}

/// Flat view of the `TKT_` environment, mapped onto the config sections
#[derive(Debug, Default, Deserialize)]
struct EnvConfig {
    contract_address: Option<String>,
    contract_name: Option<String>,
    network: Option<String>,
    api_url: Option<String>,
    bns_api_url: Option<String>,

    http_timeout_secs: Option<u64>,
    http_max_concurrency: Option<usize>,

    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,
}

impl TicketingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from_env_config(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load variables from `path` (if it exists) into the process
    /// environment, then read the configuration from it.
    ///
    /// Variables already set in the environment take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
                path: path.display().to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn from_env_config(env: EnvConfig) -> Result<Self, ConfigError> {
        let contract_defaults = ContractConfig::default();
        let network = match env.network {
            Some(raw) => Network::from_str(&raw).ok_or_else(|| {
                ConfigError::ValidateError(format!(
                    "Invalid network '{}'. Must be one of: testnet, mainnet",
                    raw
                ))
            })?,
            None => contract_defaults.network,
        };

        let contract = ContractConfig {
            address: env.contract_address.unwrap_or(contract_defaults.address),
            name: env.contract_name.unwrap_or(contract_defaults.name),
            network,
            api_url: env.api_url.filter(|url| !url.is_empty()),
        };

        let http_defaults = HttpConfig::default();
        let http = HttpConfig {
            timeout_secs: env.http_timeout_secs.unwrap_or(http_defaults.timeout_secs),
            max_concurrency: env
                .http_max_concurrency
                .unwrap_or(http_defaults.max_concurrency),
        };

        let bns = BnsConfig {
            api_url: env.bns_api_url.filter(|url| !url.is_empty()),
        };

        let log_defaults = LogConfig::default();
        let log = LogConfig {
            level: env.log_level.unwrap_or(log_defaults.level),
            json: env.log_json.unwrap_or(log_defaults.json),
            strip_ansi: env.log_strip_ansi.unwrap_or(log_defaults.strip_ansi),
            write: env.log_write.unwrap_or(log_defaults.write),
            write_path: env.log_write_path.unwrap_or(log_defaults.write_path),
            write_max_file_size: env
                .log_write_max_file_size
                .unwrap_or(log_defaults.write_max_file_size),
            write_max_files: env
                .log_write_max_files
                .unwrap_or(log_defaults.write_max_files),
        };

        Ok(Self {
            contract,
            http,
            bns,
            log,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.contract.validate()?;
        self.http.validate()?;
        self.bns.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
