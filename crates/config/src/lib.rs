//! Configuration management for abiscan
//!
//! This crate provides functionality for managing the abiscan configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use abiscan_common::{
    constants::DEFAULT_LOCAL_NETWORK_NAME,
    utils::{
        env::get_env,
        io::file::{delete_path, read_file, write_file},
    },
};
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable which, when set, overrides the configured `rpc_url`.
pub const RPC_URL_ENV_VAR: &str = "ABISCAN_RPC_URL";

/// The [`Configuration`] struct represents the on-disk configuration of abiscan. The endpoint
/// resolver reads its options from here when built with `EndpointResolver::from_config`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// The URL for the Ethereum RPC endpoint
    pub rpc_url: String,

    /// The network name reported in errors when none is given explicitly
    pub network_name: String,

    /// Refuse to resolve endpoints when the selected network is the local development network.
    /// Disabled by default so ABI lookups keep working against a local mainnet fork.
    pub reject_local_network: bool,

    /// The name of the local development network
    pub local_network_name: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            rpc_url: "".to_string(),
            network_name: "mainnet".to_string(),
            reject_local_network: false,
            local_network_name: DEFAULT_LOCAL_NETWORK_NAME.to_string(),
        }
    }
}

/// Returns the path of the configuration file, `$HOME/.abiscan/config.toml`.
#[allow(deprecated)]
pub fn config_path() -> Result<PathBuf, Error> {
    let mut home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".abiscan");
    home.push("config.toml");
    Ok(home)
}

impl Configuration {
    /// Returns the current configuration, creating `$HOME/.abiscan/config.toml` with the
    /// defaults if it does not exist yet.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&config_path()?)
    }

    /// Returns the configuration stored at `path`, creating it with the defaults if missing.
    ///
    /// The `rpc_url` is overridden by the MESC default endpoint when MESC is enabled, and by
    /// the `ABISCAN_RPC_URL` environment variable when it is set.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        // if the config file doesn't exist, create it
        if !path.exists() {
            debug!("creating default configuration at '{}'", path.display());
            Configuration::default().save_to(path)?;
        }

        let contents = read_file(path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        let mut config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        if mesc::is_mesc_enabled() {
            if let Some(endpoint) = mesc::get_default_endpoint(Some("abiscan"))? {
                debug!("overriding rpc_url with mesc endpoint");
                config.rpc_url = endpoint.url;
            }
        }

        if let Some(rpc_url) = get_env(RPC_URL_ENV_VAR) {
            debug!("overriding rpc_url with ${RPC_URL_ENV_VAR}");
            config.rpc_url = rpc_url;
        }

        Ok(config)
    }

    /// Saves the current configuration to `$HOME/.abiscan/config.toml`.
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&config_path()?)
    }

    /// Saves the current configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        let contents = toml::to_string(&self)
            .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?;

        write_file(path, &contents)
            .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))
    }

    /// Deletes the configuration file at `$HOME/.abiscan/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let path = config_path()?;
        if !delete_path(&path) {
            return Err(Error::Generic(format!(
                "failed to delete config file '{}'",
                path.display()
            )));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration. The caller is responsible for
    /// persisting the result with [`Configuration::save`].
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "rpc_url" => {
                self.rpc_url = value.to_string();
            }
            "network_name" => {
                self.network_name = value.to_string();
            }
            "reject_local_network" => {
                self.reject_local_network = value.trim().parse::<bool>().map_err(|_| {
                    Error::ParseError(format!(
                        "'{value}' is not a valid value for 'reject_local_network', expected 'true' or 'false'."
                    ))
                })?;
            }
            "local_network_name" => {
                self.local_network_name = value.to_string();
            }
            _ => return Err(Error::InvalidKey(key.to_string())),
        }

        debug!("updated configuration: set '{}' = '{}'", key, value);
        Ok(())
    }
}

/// Resolve an rpc url that may be a MESC endpoint name or chain query into a full url.
/// Returns `url` unchanged when MESC is disabled or has no matching endpoint.
pub fn resolve_rpc_alias(url: &str) -> String {
    if mesc::is_mesc_enabled() {
        if let Ok(Some(endpoint)) = mesc::get_endpoint_by_query(url, Some("abiscan")) {
            debug!("resolved rpc alias '{}' with mesc", url);
            return endpoint.url;
        }
    }
    url.to_string()
}
