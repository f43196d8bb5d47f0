//! Config validation.
//!
//! Rules run in a fixed order and the first failure is returned. Validation
//! reads the config and the clock, nothing else.

use std::collections::HashSet;

use triad_core::error::GenesisError;
use triad_core::types::{ShortId, Timestamp};
use triad_timelock::min_stake_duration;

use crate::config::{format_address, Config};

/// Validate `config` for `network_id` against the current wall-clock time.
pub fn validate_config(network_id: u32, config: &Config) -> Result<(), GenesisError> {
    let now = chrono::Utc::now().timestamp().max(0) as Timestamp;
    validate_config_at(network_id, config, now)
}

/// Validate `config` for `network_id` as of `now`.
pub fn validate_config_at(
    network_id: u32,
    config: &Config,
    now: Timestamp,
) -> Result<(), GenesisError> {
    if config.network_id != network_id {
        return Err(GenesisError::NetworkIdMismatch {
            expected: network_id,
            got: config.network_id,
        });
    }

    if config.start_time > now {
        return Err(GenesisError::StartTimeInFuture {
            start_time: config.start_time,
            now,
        });
    }

    if config.total_supply()? == 0 {
        return Err(GenesisError::ZeroInitialSupply);
    }

    if config.initial_stakers.is_empty() {
        return Err(GenesisError::NoInitialStakers);
    }

    if config.initial_stake_duration == 0 {
        return Err(GenesisError::ZeroStakeDuration);
    }

    let required = min_stake_duration(
        config.initial_stake_duration_offset,
        config.initial_stakers.len(),
    )?;
    if config.initial_stake_duration < required {
        return Err(GenesisError::StakeDurationTooShort {
            duration: config.initial_stake_duration,
            required,
            offset: config.initial_stake_duration_offset,
        });
    }

    if config.initial_staked_funds.is_empty() {
        return Err(GenesisError::EmptyStakedFunds);
    }

    let mut staked: HashSet<&ShortId> = HashSet::new();
    for address in &config.initial_staked_funds {
        if !staked.insert(address) {
            return Err(GenesisError::DuplicateStakedFund(format_address(address)));
        }
    }

    let allocated: HashSet<&ShortId> = config.allocations.iter().map(|a| &a.avax_addr).collect();
    for address in &config.initial_staked_funds {
        if !allocated.contains(address) {
            return Err(GenesisError::StakedFundWithoutAllocation(format_address(
                address,
            )));
        }
    }

    if config.c_chain_genesis.is_empty() {
        return Err(GenesisError::EmptyCChainGenesis);
    }

    if config.message.is_empty() {
        return Err(GenesisError::EmptyMessage);
    }

    Ok(())
}
