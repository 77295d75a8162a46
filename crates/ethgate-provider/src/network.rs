//! Network identity and project credentials.

/// Target chain environment. Selects the JSON-RPC base URL; nothing
/// else in the client varies by network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Goerli,
    Sepolia,
}

impl Network {
    /// Base URL for this network. Pure lookup, stable across calls.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Mainnet => "https://mainnet.infura.io",
            Self::Goerli => "https://goerli.infura.io",
            Self::Sepolia => "https://sepolia.infura.io",
        }
    }

    /// Parse a network name as accepted by the CLI.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mainnet" => Some(Self::Mainnet),
            "goerli" => Some(Self::Goerli),
            "sepolia" => Some(Self::Sepolia),
            _ => None,
        }
    }

    /// All supported networks.
    pub fn all() -> &'static [Network] {
        &[Self::Mainnet, Self::Goerli, Self::Sepolia]
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Goerli => write!(f, "goerli"),
            Self::Sepolia => write!(f, "sepolia"),
        }
    }
}

/// Project credentials: an opaque project identifier plus an optional
/// secret. When present, the secret is sent as the HTTP Basic-auth
/// password with an empty username. Immutable for the provider's
/// lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub project_id: String,
    pub secret: Option<String>,
}

impl Credentials {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Full endpoint URL for a network and project id.
pub fn endpoint_url(network: Network, project_id: &str) -> String {
    format!("{}/v3/{}", network.base_url(), project_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_endpoint() {
        assert_eq!(
            endpoint_url(Network::Mainnet, "proj123"),
            "https://mainnet.infura.io/v3/proj123"
        );
    }

    #[test]
    fn base_url_is_stable() {
        let first = Network::Sepolia.base_url();
        let second = Network::Sepolia.base_url();
        assert_eq!(first, second);
    }

    #[test]
    fn name_roundtrip() {
        for network in Network::all() {
            assert_eq!(Network::from_name(&network.to_string()), Some(*network));
        }
        assert_eq!(Network::from_name("ropsten"), None);
    }

    #[test]
    fn default_network_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
    }
}
