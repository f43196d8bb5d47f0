//! Spend conditions shared by the asset and platform ledgers.

use serde::{Deserialize, Serialize};
use triad_core::types::{Amount, Id, ShortId, Timestamp};

/// Feature extension implementing single-key threshold ownership.
pub const SECP256K1_FX_ID: Id = Id::from_name(b"secp256k1fx");
pub const SECP256K1_FX_NAME: &str = "secp256k1fx";

/// Who may spend, and from when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Unix time before which nothing can be spent; 0 means immediately.
    pub locktime: Timestamp,
    pub threshold: u32,
    pub addresses: Vec<ShortId>,
}

impl Owner {
    /// Single-address owner, spendable from `locktime`.
    pub fn single(address: ShortId, locktime: Timestamp) -> Self {
        Self {
            locktime,
            threshold: 1,
            addresses: vec![address],
        }
    }
}

/// `amount` units of an asset held under `owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    pub amount: Amount,
    pub owner: Owner,
}

impl TransferOutput {
    pub fn to(address: ShortId, amount: Amount, locktime: Timestamp) -> Self {
        Self {
            amount,
            owner: Owner::single(address, locktime),
        }
    }

    pub fn is_locked_at(&self, now: Timestamp) -> bool {
        self.owner.locktime > now
    }
}
