//! Config resolution: a built-in default, or an override file.

use std::path::Path;

use triad_core::constants::network_name;
use triad_core::error::{GenesisError, LoadError};
use tracing::info;

use crate::config::{Config, UnparsedConfig};
use crate::defaults::default_config;
use crate::validate::validate_config;

/// Resolve and validate the config for `network_id`.
///
/// With no `override_path` the built-in config for the network is used. A
/// file that cannot be read or parsed fails with [`GenesisError::Load`]; the
/// cause stays attached as its source. Either way the result is validated
/// against `network_id` before it is returned. An empty path counts as no
/// override.
pub fn load_config(network_id: u32, override_path: Option<&Path>) -> Result<Config, GenesisError> {
    let override_path = override_path.filter(|p| !p.as_os_str().is_empty());
    let config = match override_path {
        Some(path) => {
            let config = read_config(path)?;
            info!(network = %network_name(network_id), path = %path.display(), "genesis config loaded from file");
            config
        }
        None => {
            let config = default_config(network_id)
                .ok_or(GenesisError::NoDefaultConfig(network_id))?
                .clone();
            info!(network = %network_name(network_id), "using built-in genesis config");
            config
        }
    };

    validate_config(network_id, &config)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, GenesisError> {
    let load_err = |source: LoadError| GenesisError::Load {
        path: path.to_path_buf(),
        source,
    };
    let text = std::fs::read_to_string(path).map_err(|e| load_err(e.into()))?;
    let raw: UnparsedConfig = serde_json::from_str(&text).map_err(|e| load_err(e.into()))?;
    Config::try_from(raw).map_err(|e| load_err(LoadError::Invalid(Box::new(e))))
}
