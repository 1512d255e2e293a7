use crate::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Stacks network the contract is deployed on
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    #[default]
    Mainnet,
}

impl Network {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "testnet" => Some(Network::Testnet),
            "mainnet" => Some(Network::Mainnet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    /// Default Hiro API base URL for this network
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Network::Testnet => "https://api.testnet.hiro.so",
            Network::Mainnet => "https://api.hiro.so",
        }
    }

    /// Default BNS name API base URL for this network
    pub fn default_bns_url(&self) -> &'static str {
        match self {
            Network::Testnet => "https://api.bnsv2.com/testnet",
            Network::Mainnet => "https://api.bnsv2.com",
        }
    }

    /// Single-sig and multi-sig address version prefixes used on this network
    fn address_prefixes(&self) -> [&'static str; 2] {
        match self {
            Network::Testnet => ["ST", "SN"],
            Network::Mainnet => ["SP", "SM"],
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// Deployer address of the contract, without the contract name
    ///
    /// Env: TKT_CONTRACT_ADDRESS
    /// Default: SP3YGA4JT7289RWGB9SDXTNRCN2FQCRVFSTRRPN4F
    pub address: String,

    /// Contract name
    ///
    /// Env: TKT_CONTRACT_NAME
    /// Default: ticketing
    pub name: String,

    /// Network selector
    ///
    /// Env: TKT_NETWORK
    /// Valid values: testnet, mainnet
    /// Default: mainnet
    pub network: Network,

    /// Override for the read-only API base URL
    ///
    /// Env: TKT_API_URL
    /// Default: derived from the network
    pub api_url: Option<String>,
}

fn default_address() -> String {
    "SP3YGA4JT7289RWGB9SDXTNRCN2FQCRVFSTRRPN4F".to_string()
}

fn default_name() -> String {
    "ticketing".to_string()
}

impl ContractConfig {
    pub fn new(address: impl Into<String>, name: impl Into<String>, network: Network) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            network,
            api_url: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// `<address>.<name>`, the fully qualified contract identifier
    pub fn identifier(&self) -> String {
        format!("{}.{}", self.address, self.name)
    }

    /// API base URL with any trailing slash removed
    pub fn api_base(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_api_url())
            .trim_end_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.address.is_empty() {
            return Err(ConfigError::ValidateError(
                "Contract address cannot be empty".to_string(),
            ));
        }

        if self.address.contains('.') {
            return Err(ConfigError::ValidateError(format!(
                "Contract address '{}' must not include the contract name",
                self.address
            )));
        }

        if !self.address.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::ValidateError(format!(
                "Contract address '{}' contains invalid characters",
                self.address
            )));
        }

        let prefixes = self.network.address_prefixes();
        if !prefixes.iter().any(|p| self.address.starts_with(p)) {
            return Err(ConfigError::ValidateError(format!(
                "Contract address '{}' is not a {} address (expected prefix {})",
                self.address,
                self.network,
                prefixes.join(" or ")
            )));
        }

        Self::validate_name(&self.name)?;

        if let Some(api_url) = &self.api_url {
            validate_http_url("API", api_url)?;
        }

        Ok(())
    }

    /// Contract names start with a letter and use letters, digits, '-' or '_'
    fn validate_name(name: &str) -> Result<(), ConfigError> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphabetic()
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
            None => false,
        };

        if !valid || name.len() > 128 {
            return Err(ConfigError::ValidateError(format!(
                "Invalid contract name '{}'",
                name
            )));
        }

        Ok(())
    }
}

pub(crate) fn validate_http_url(label: &str, raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        ConfigError::ValidateError(format!("Invalid {} URL '{}': {}", label, raw, e))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::ValidateError(format!(
            "Invalid {} URL scheme '{}'. Must be http:// or https://",
            label, scheme
        ))),
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            name: default_name(),
            network: Network::default(),
            api_url: None,
        }
    }
}
