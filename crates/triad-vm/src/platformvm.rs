//! Platform VM genesis: bootstrap validators and their locked stake.

use serde::{Deserialize, Serialize};
use triad_core::codec;
use triad_core::error::CodecError;
use triad_core::types::{Amount, Id, NodeId, Timestamp};

use crate::fx::{Owner, TransferOutput};
use crate::GenesisPayload;

pub const ID: Id = Id::from_name(b"platformvm");
pub const NAME: &str = "platform";

/// A validator registered directly in genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub node_id: NodeId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Locked outputs backing this validator.
    pub stake: Vec<TransferOutput>,
    pub reward_owner: Owner,
    /// Parts per million of delegator rewards kept by the validator.
    pub delegation_fee: u32,
}

impl GenesisValidator {
    /// Stake weight, `None` on overflow.
    pub fn weight(&self) -> Option<Amount> {
        self.stake
            .iter()
            .try_fold(0u64, |acc, out| acc.checked_add(out.amount))
    }

    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformGenesis {
    pub network_id: u32,
    pub timestamp: Timestamp,
    pub initial_supply: Amount,
    pub validators: Vec<GenesisValidator>,
}

impl PlatformGenesis {
    /// Total stake across all bootstrap validators, `None` on overflow.
    pub fn total_stake(&self) -> Option<Amount> {
        self.validators
            .iter()
            .try_fold(0u64, |acc, v| acc.checked_add(v.weight()?))
    }
}

impl GenesisPayload for PlatformGenesis {
    const VM_ID: Id = ID;
    const VM_NAME: &'static str = NAME;

    fn to_genesis_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }

    fn from_genesis_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}
