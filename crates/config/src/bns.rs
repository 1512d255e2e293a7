use crate::ConfigError;
use crate::contract::{Network, validate_http_url};

/// Name service lookups (address to BNS name)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BnsConfig {
    /// Override for the BNS API base URL
    ///
    /// Env: TKT_BNS_API_URL
    /// Default: derived from the network
    pub api_url: Option<String>,
}

impl BnsConfig {
    /// API base URL with any trailing slash removed
    pub fn api_base<'a>(&'a self, network: &Network) -> &'a str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| network.default_bns_url())
            .trim_end_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match &self.api_url {
            Some(api_url) => validate_http_url("BNS API", api_url),
            None => Ok(()),
        }
    }
}
