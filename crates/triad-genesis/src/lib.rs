//! triad-genesis
//!
//! Builds the network's genesis from a declarative config and reads it back.
//!
//! Forward: [`load_config`] resolves the config (built-in or override file)
//! and validates it, [`build`] assembles the platform, asset and EVM chain
//! payloads into one [`GenesisArtifact`], and the codec turns that into the
//! canonical genesis bytes. [`genesis`] runs the whole pipeline.
//!
//! Reverse: [`aliases`] derives chain and VM naming tables from genesis bytes,
//! and [`vm_genesis`] hands one VM its own genesis payload.
//!
//! Every step is pure apart from the single config file read.

pub mod aliases;
pub mod artifact;
pub mod builder;
pub mod config;
pub mod defaults;
pub mod loader;
pub mod validate;

pub use aliases::{aliases, Aliases};
pub use artifact::{ChainGenesis, GenesisArtifact};
pub use builder::build;
pub use config::{Allocation, Config, Staker, UnparsedConfig};
pub use defaults::{default_config, DEFAULT_NETWORK_IDS};
pub use loader::load_config;
pub use validate::{validate_config, validate_config_at};

use std::path::Path;

use triad_core::error::GenesisError;
use triad_core::types::Id;
use tracing::info;

/// Genesis bytes and native asset id for `network_id`.
///
/// `config_path` overrides the built-in config for the network.
pub fn genesis(network_id: u32, config_path: Option<&Path>) -> Result<(Vec<u8>, Id), GenesisError> {
    let config = load_config(network_id, config_path)?;
    let (artifact, asset_id) = build(&config)?;
    let bytes = artifact.encode()?;
    info!(
        network_id,
        bytes = bytes.len(),
        hash = %triad_crypto::genesis_hash(&bytes),
        "genesis encoded"
    );
    Ok((bytes, asset_id))
}

/// The chain record run by `vm_id` inside `genesis_bytes`.
///
/// Its `genesis_data` is the VM's own payload, to be decoded by that VM.
pub fn vm_genesis(genesis_bytes: &[u8], vm_id: &Id) -> Result<ChainGenesis, GenesisError> {
    let artifact = GenesisArtifact::decode(genesis_bytes)?;
    artifact
        .chains
        .into_iter()
        .find(|chain| chain.vm_id == *vm_id)
        .ok_or(GenesisError::VmGenesisNotFound(*vm_id))
}
