//! Authority configuration from environment variables.

use crate::domain::attestation::DEFAULT_DECLARATION;
use crate::domain::entities::Address;
use std::env;
use thiserror::Error;

/// Configuration for the authority core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityConfig {
    /// Address allowed to place new denoms under control
    pub authority: Address,

    /// Human-readable bech32 prefix of account addresses
    pub bech32_prefix: String,

    /// Module account holding coins between mint and send, or send and burn
    pub module_account: String,

    /// Declaration text signed in ownership attestations
    pub declaration: String,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            authority: Address::new(""),
            bech32_prefix: "noble".to_string(),
            module_account: "florin".to_string(),
            declaration: DEFAULT_DECLARATION.to_string(),
        }
    }
}

impl AuthorityConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FLORIN_AUTHORITY`: Registry authority address (no default)
    /// - `FLORIN_BECH32_PREFIX`: Address prefix (default: noble)
    /// - `FLORIN_MODULE_ACCOUNT`: Module account name (default: florin)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            authority: env::var("FLORIN_AUTHORITY")
                .map(Address::new)
                .unwrap_or(defaults.authority),

            bech32_prefix: env::var("FLORIN_BECH32_PREFIX").unwrap_or(defaults.bech32_prefix),

            module_account: env::var("FLORIN_MODULE_ACCOUNT").unwrap_or(defaults.module_account),

            declaration: defaults.declaration,
        }
    }

    /// Configuration with the given authority and default everything else.
    pub fn with_authority(authority: Address) -> Self {
        Self {
            authority,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bech32_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.module_account.is_empty() {
            return Err(ConfigError::EmptyModuleAccount);
        }
        if self.declaration.is_empty() {
            return Err(ConfigError::EmptyDeclaration);
        }
        if self.authority.as_str().is_empty() {
            return Err(ConfigError::MissingAuthority);
        }
        self.authority
            .to_raw(&self.bech32_prefix)
            .map_err(|e| ConfigError::InvalidAuthority {
                address: self.authority.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Authority address is not set. Set FLORIN_AUTHORITY or provide it in config.")]
    MissingAuthority,

    #[error("Invalid authority address ({address}): {reason}")]
    InvalidAuthority { address: String, reason: String },

    #[error("Bech32 prefix must not be empty")]
    EmptyPrefix,

    #[error("Module account name must not be empty")]
    EmptyModuleAccount,

    #[error("Attestation declaration must not be empty")]
    EmptyDeclaration,
}
