//! Multi-chain genesis builder.
//!
//! Turns a validated [`Config`] into a [`GenesisArtifact`]:
//!
//! 1. Asset chain (X): the native asset, minting the whole supply. Every
//!    `initial_amount` is a spendable output here, and so is every unlock
//!    tranche of an allocation that is *not* staked, time-locked at its
//!    locktime.
//! 2. Platform chain (P): one bootstrap validator per staker. The tranches of
//!    the staked allocations are split evenly across them as locked stake.
//! 3. EVM chain (C): the config's document, embedded verbatim.
//!
//! The asset id is the content hash of the asset definition, so it is fixed
//! before the rest of genesis is assembled.

use triad_core::constants::{
    ASSET_CHAIN_ALIAS, EVM_CHAIN_ALIAS, NATIVE_ASSET_DENOMINATION, NATIVE_ASSET_NAME,
    NATIVE_ASSET_SYMBOL, PLATFORM_CHAIN_ALIAS,
};
use triad_core::error::GenesisError;
use triad_core::types::{Amount, Id};
use triad_timelock::{nonzero_tranches, split_tranches, stake_windows, AddressTranches};
use triad_vm::avm::{AssetDefinition, AvmGenesis, GenesisAsset};
use triad_vm::fx::{Owner, TransferOutput, SECP256K1_FX_ID};
use triad_vm::platformvm::{GenesisValidator, PlatformGenesis};
use triad_vm::{EvmGenesis, GenesisPayload};
use tracing::{debug, info};

use crate::artifact::{ChainGenesis, GenesisArtifact};
use crate::config::Config;

/// Build the genesis artifact and the native asset id for `config`.
///
/// `config` is expected to have passed validation; arithmetic is still
/// checked here and overflow is an error.
pub fn build(config: &Config) -> Result<(GenesisArtifact, Id), GenesisError> {
    let supply = config.total_supply()?;

    // ── 1. Asset chain ───────────────────────────────────────────────────────
    let asset = native_asset(config, supply);
    let asset_id = asset.id()?;
    let asset_outputs = asset.outputs_total().ok_or(GenesisError::Overflow {
        what: "asset chain outputs",
    })?;
    let avm = AvmGenesis {
        assets: vec![GenesisAsset {
            alias: NATIVE_ASSET_SYMBOL.to_string(),
            definition: asset,
        }],
    };
    info!(%asset_id, supply, "genesis: native asset defined");

    // ── 2. Platform chain ────────────────────────────────────────────────────
    let platform = platform_genesis(config, supply)?;
    let staked = platform.total_stake().ok_or(GenesisError::Overflow {
        what: "bootstrap stake",
    })?;
    info!(
        validators = platform.validators.len(),
        staked, "genesis: bootstrap validators registered"
    );

    verify_supply(supply, asset_outputs, staked)?;

    // ── 3. EVM chain ─────────────────────────────────────────────────────────
    let evm = EvmGenesis(config.c_chain_genesis.clone());

    let chains = vec![
        chain(config, PLATFORM_CHAIN_ALIAS, &platform, vec![SECP256K1_FX_ID])?,
        chain(config, ASSET_CHAIN_ALIAS, &avm, vec![SECP256K1_FX_ID])?,
        chain(config, EVM_CHAIN_ALIAS, &evm, Vec::new())?,
    ];

    let artifact = GenesisArtifact {
        network_id: config.network_id,
        timestamp: config.start_time,
        initial_supply: supply,
        chains,
        message: config.message.clone(),
    };
    debug!(chains = artifact.chains.len(), "genesis: artifact assembled");

    Ok((artifact, asset_id))
}

fn native_asset(config: &Config, supply: Amount) -> AssetDefinition {
    let mut outputs = Vec::new();
    for allocation in &config.allocations {
        if allocation.initial_amount > 0 {
            outputs.push(TransferOutput::to(
                allocation.avax_addr,
                allocation.initial_amount,
                0,
            ));
        }
        if config.is_staked(&allocation.avax_addr) {
            continue;
        }
        for tranche in nonzero_tranches(&allocation.unlock_schedule) {
            outputs.push(TransferOutput::to(
                allocation.avax_addr,
                tranche.amount,
                tranche.locktime,
            ));
        }
    }

    AssetDefinition {
        network_id: config.network_id,
        name: NATIVE_ASSET_NAME.to_string(),
        symbol: NATIVE_ASSET_SYMBOL.to_string(),
        denomination: NATIVE_ASSET_DENOMINATION,
        memo: config.message.as_bytes().to_vec(),
        initial_supply: supply,
        outputs,
    }
}

fn platform_genesis(config: &Config, supply: Amount) -> Result<PlatformGenesis, GenesisError> {
    let staked: Vec<AddressTranches> = config
        .allocations
        .iter()
        .filter(|a| config.is_staked(&a.avax_addr))
        .map(|a| AddressTranches {
            address: a.avax_addr,
            tranches: nonzero_tranches(&a.unlock_schedule).copied().collect(),
        })
        .collect();

    let count = config.initial_stakers.len();
    let shares = split_tranches(&staked, count)?;
    let windows = stake_windows(
        config.start_time,
        config.initial_stake_duration,
        config.initial_stake_duration_offset,
        count,
    )?;

    let validators = config
        .initial_stakers
        .iter()
        .zip(windows)
        .zip(shares)
        .map(|((staker, window), share)| GenesisValidator {
            node_id: staker.node_id,
            start_time: window.start,
            end_time: window.end,
            stake: share
                .iter()
                .flat_map(|owned| {
                    owned
                        .tranches
                        .iter()
                        .map(move |t| TransferOutput::to(owned.address, t.amount, t.locktime))
                })
                .collect(),
            reward_owner: Owner::single(staker.reward_address, 0),
            delegation_fee: staker.delegation_fee,
        })
        .collect();

    Ok(PlatformGenesis {
        network_id: config.network_id,
        timestamp: config.start_time,
        initial_supply: supply,
        validators,
    })
}

fn chain<P: GenesisPayload>(
    config: &Config,
    alias: &str,
    payload: &P,
    fx_ids: Vec<Id>,
) -> Result<ChainGenesis, GenesisError> {
    Ok(ChainGenesis {
        network_id: config.network_id,
        name: format!("{alias}-Chain"),
        vm_id: P::VM_ID,
        fx_ids,
        genesis_data: payload.to_genesis_bytes()?,
    })
}

/// Every unit of supply must land in exactly one output.
fn verify_supply(supply: Amount, asset_outputs: Amount, staked: Amount) -> Result<(), GenesisError> {
    let got = asset_outputs
        .checked_add(staked)
        .ok_or(GenesisError::Overflow {
            what: "genesis outputs",
        })?;
    if got != supply {
        return Err(GenesisError::SupplyMismatch {
            expected: supply,
            got,
        });
    }
    Ok(())
}
