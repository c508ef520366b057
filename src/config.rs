/// Token data file loading
///
/// The input file lists one token address per network:
///
/// ```json
/// { "tokens": { "base": { "address": "0x..." }, "optimism": { "address": "0x..." } } }
/// ```
///
/// Keys other than `tokens` are ignored, as are extra fields inside each entry.
/// Only entries for supported networks are decoded; an unsupported network may
/// hold any value, while a supported one must carry an `address` string.
use crate::errors::CheckError;
use crate::logger::{self, LogTag};
use crate::networks;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    pub address: String,
}

/// Data file as written on disk, before network filtering
#[derive(Deserialize)]
struct RawTokensConfig {
    #[serde(default)]
    tokens: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct TokensConfig {
    /// Entries for supported networks, keyed by network name
    pub tokens: BTreeMap<String, TokenEntry>,
    /// Keys under `tokens` with no chain ID
    pub ignored: Vec<String>,
}

impl<'de> Deserialize<'de> for TokensConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTokensConfig::deserialize(deserializer)?;
        let mut config = TokensConfig::default();

        for (name, value) in raw.tokens {
            if networks::chain_id(&name).is_none() {
                config.ignored.push(name);
                continue;
            }

            let entry: TokenEntry = serde_json::from_value(value).map_err(|e| {
                <D::Error as serde::de::Error>::custom(format!("tokens.{}: {}", name, e))
            })?;
            config.tokens.insert(name, entry);
        }

        Ok(config)
    }
}

impl TokensConfig {
    /// Load the token data file from disk
    ///
    /// Fails with `FileNotFound` when the path does not exist and `Parse` when the
    /// content is not valid token data.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        if !path.exists() {
            return Err(CheckError::FileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: TokensConfig =
            serde_json::from_str(&contents).map_err(|source| CheckError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        logger::debug(
            LogTag::Config,
            &format!(
                "Loaded {} token entries from {}",
                config.tokens.len(),
                path.display()
            ),
        );

        let unknown = config.unknown_networks();
        if !unknown.is_empty() {
            logger::debug(
                LogTag::Config,
                &format!("Ignoring unsupported networks: {}", unknown.join(", ")),
            );
        }

        Ok(config)
    }

    /// Token address configured for a network, if any
    pub fn address_for(&self, network: &str) -> Option<&str> {
        self.tokens.get(network).map(|entry| entry.address.as_str())
    }

    /// Configured network keys that have no chain ID
    pub fn unknown_networks(&self) -> Vec<&str> {
        self.ignored.iter().map(String::as_str).collect()
    }
}
