//! Built-in genesis configs for the standard deployments.
//!
//! The documents are compiled into the binary and parsed once on first use.
//! They are constants of the network: editing one changes that network's
//! genesis hash.

use once_cell::sync::Lazy;
use triad_core::constants::{FUJI_ID, LOCAL_ID, MAINNET_ID};

use crate::config::{Config, UnparsedConfig};

const MAINNET_JSON: &str = include_str!("../configs/mainnet.json");
const FUJI_JSON: &str = include_str!("../configs/fuji.json");
const LOCAL_JSON: &str = include_str!("../configs/local.json");

pub static MAINNET_CONFIG: Lazy<Config> = Lazy::new(|| parse_builtin(MAINNET_JSON));
pub static FUJI_CONFIG: Lazy<Config> = Lazy::new(|| parse_builtin(FUJI_JSON));
pub static LOCAL_CONFIG: Lazy<Config> = Lazy::new(|| parse_builtin(LOCAL_JSON));

fn parse_builtin(json: &str) -> Config {
    let raw: UnparsedConfig =
        serde_json::from_str(json).expect("built-in genesis config is valid JSON");
    Config::try_from(raw).expect("built-in genesis config has well-formed identifiers")
}

/// Network ids that ship with a built-in config.
pub const DEFAULT_NETWORK_IDS: [u32; 3] = [MAINNET_ID, FUJI_ID, LOCAL_ID];

/// The built-in config for `network_id`, if there is one.
pub fn default_config(network_id: u32) -> Option<&'static Config> {
    match network_id {
        MAINNET_ID => Some(&*MAINNET_CONFIG),
        FUJI_ID => Some(&*FUJI_CONFIG),
        LOCAL_ID => Some(&*LOCAL_CONFIG),
        _ => None,
    }
}
