//! ethgate-provider — typed operations over an Infura-style JSON-RPC
//! endpoint.
//!
//! A [`Provider`] is bound to one (network, credentials, account address)
//! triple at construction and is immutable afterwards; it can be shared
//! across any number of concurrent calls. Each operation assembles its
//! positional parameters, issues exactly one transport call and decodes
//! the envelope into a typed result or a [`ProviderError`].
//!
//! # Quick start
//! ```rust,no_run
//! use ethgate_provider::{Credentials, Network, Provider};
//!
//! # async fn run() -> Result<(), ethgate_provider::ProviderError> {
//! let creds = Credentials::new("YOUR_PROJECT_ID");
//! let provider = Provider::new(
//!     Network::Mainnet,
//!     &creds,
//!     "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2",
//! );
//! let height = provider.last_block_height().await?;
//! println!("chain height: {height}");
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod error;
pub mod network;
pub mod provider;
pub mod types;

pub use error::ProviderError;
pub use network::{endpoint_url, Credentials, Network};
pub use provider::Provider;
pub use types::{Block, LogEntry, Topic, TransactionStatus};
