//! Genesis configuration.
//!
//! Two layers: [`UnparsedConfig`] is the JSON document exactly as written
//! (textual addresses and node ids), [`Config`] is the typed form the
//! validator and builder work on. Conversion fails on the first malformed
//! identifier and names the offending field.

use serde::{Deserialize, Serialize};
use triad_core::constants::ASSET_CHAIN_ALIAS;
use triad_core::error::GenesisError;
use triad_core::types::{Amount, LockedAmount, NodeId, ShortId, Timestamp};
use triad_timelock::checked_total;

// ── Wire form ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnparsedAllocation {
    pub eth_addr: String,
    pub avax_addr: String,
    pub initial_amount: Amount,
    #[serde(default)]
    pub unlock_schedule: Vec<LockedAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnparsedStaker {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub reward_address: String,
    pub delegation_fee: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnparsedConfig {
    #[serde(rename = "networkID")]
    pub network_id: u32,
    pub allocations: Vec<UnparsedAllocation>,
    pub start_time: Timestamp,
    pub initial_stake_duration: u64,
    pub initial_stake_duration_offset: u64,
    pub initial_staked_funds: Vec<String>,
    pub initial_stakers: Vec<UnparsedStaker>,
    pub c_chain_genesis: String,
    pub message: String,
}

// ── Typed form ───────────────────────────────────────────────────────────────

/// One funded address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// External (EVM) form of the funding source. Informational only.
    pub eth_addr: ShortId,
    /// Ledger address receiving the funds.
    pub avax_addr: ShortId,
    /// Spendable at genesis.
    pub initial_amount: Amount,
    pub unlock_schedule: Vec<LockedAmount>,
}

impl Allocation {
    /// `initial_amount` plus every tranche.
    pub fn total(&self) -> Result<Amount, GenesisError> {
        checked_total(
            std::iter::once(self.initial_amount)
                .chain(self.unlock_schedule.iter().map(|t| t.amount)),
            "allocation total",
        )
    }
}

/// One bootstrap validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staker {
    pub node_id: NodeId,
    pub reward_address: ShortId,
    /// Parts per million.
    pub delegation_fee: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub network_id: u32,
    pub allocations: Vec<Allocation>,
    pub start_time: Timestamp,
    pub initial_stake_duration: u64,
    pub initial_stake_duration_offset: u64,
    pub initial_staked_funds: Vec<ShortId>,
    pub initial_stakers: Vec<Staker>,
    /// The EVM chain's genesis document, carried verbatim.
    pub c_chain_genesis: String,
    pub message: String,
}

impl Config {
    /// Sum over all allocations of the initial amount and every tranche.
    pub fn total_supply(&self) -> Result<Amount, GenesisError> {
        self.allocations
            .iter()
            .map(Allocation::total)
            .try_fold(0u64, |acc, total| {
                acc.checked_add(total?).ok_or(GenesisError::Overflow {
                    what: "initial supply",
                })
            })
    }

    pub fn is_staked(&self, address: &ShortId) -> bool {
        self.initial_staked_funds.contains(address)
    }
}

/// Ledger address in its textual form, as it appears in config files.
pub fn format_address(address: &ShortId) -> String {
    address.to_address(ASSET_CHAIN_ALIAS)
}

// ── Conversion ───────────────────────────────────────────────────────────────

fn parse_address(field: String, value: &str) -> Result<ShortId, GenesisError> {
    ShortId::parse_address(value)
        .map(|(_, id)| id)
        .map_err(|reason| GenesisError::InvalidAddress {
            field,
            value: value.to_owned(),
            reason,
        })
}

fn parse_eth_address(field: String, value: &str) -> Result<ShortId, GenesisError> {
    ShortId::from_eth_hex(value).map_err(|reason| GenesisError::InvalidAddress {
        field,
        value: value.to_owned(),
        reason,
    })
}

fn parse_node_id(field: String, value: &str) -> Result<NodeId, GenesisError> {
    value
        .parse()
        .map_err(|reason| GenesisError::InvalidAddress {
            field,
            value: value.to_owned(),
            reason,
        })
}

impl TryFrom<UnparsedConfig> for Config {
    type Error = GenesisError;

    fn try_from(raw: UnparsedConfig) -> Result<Self, Self::Error> {
        let allocations = raw
            .allocations
            .into_iter()
            .enumerate()
            .map(|(i, a)| {
                Ok(Allocation {
                    eth_addr: parse_eth_address(format!("allocations[{i}].ethAddr"), &a.eth_addr)?,
                    avax_addr: parse_address(format!("allocations[{i}].avaxAddr"), &a.avax_addr)?,
                    initial_amount: a.initial_amount,
                    unlock_schedule: a.unlock_schedule,
                })
            })
            .collect::<Result<Vec<_>, GenesisError>>()?;

        let initial_staked_funds = raw
            .initial_staked_funds
            .iter()
            .enumerate()
            .map(|(i, addr)| parse_address(format!("initialStakedFunds[{i}]"), addr))
            .collect::<Result<Vec<_>, _>>()?;

        let initial_stakers = raw
            .initial_stakers
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Ok(Staker {
                    node_id: parse_node_id(format!("initialStakers[{i}].nodeID"), &s.node_id)?,
                    reward_address: parse_address(
                        format!("initialStakers[{i}].rewardAddress"),
                        &s.reward_address,
                    )?,
                    delegation_fee: s.delegation_fee,
                })
            })
            .collect::<Result<Vec<_>, GenesisError>>()?;

        Ok(Config {
            network_id: raw.network_id,
            allocations,
            start_time: raw.start_time,
            initial_stake_duration: raw.initial_stake_duration,
            initial_stake_duration_offset: raw.initial_stake_duration_offset,
            initial_staked_funds,
            initial_stakers,
            c_chain_genesis: raw.c_chain_genesis,
            message: raw.message,
        })
    }
}

impl From<&Config> for UnparsedConfig {
    fn from(config: &Config) -> Self {
        UnparsedConfig {
            network_id: config.network_id,
            allocations: config
                .allocations
                .iter()
                .map(|a| UnparsedAllocation {
                    eth_addr: a.eth_addr.to_eth_hex(),
                    avax_addr: format_address(&a.avax_addr),
                    initial_amount: a.initial_amount,
                    unlock_schedule: a.unlock_schedule.clone(),
                })
                .collect(),
            start_time: config.start_time,
            initial_stake_duration: config.initial_stake_duration,
            initial_stake_duration_offset: config.initial_stake_duration_offset,
            initial_staked_funds: config.initial_staked_funds.iter().map(format_address).collect(),
            initial_stakers: config
                .initial_stakers
                .iter()
                .map(|s| UnparsedStaker {
                    node_id: s.node_id.to_string(),
                    reward_address: format_address(&s.reward_address),
                    delegation_fee: s.delegation_fee,
                })
                .collect(),
            c_chain_genesis: config.c_chain_genesis.clone(),
            message: config.message.clone(),
        }
    }
}
