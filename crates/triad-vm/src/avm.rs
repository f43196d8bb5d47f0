//! Asset VM genesis: the native asset definition and its initial outputs.

use serde::{Deserialize, Serialize};
use triad_core::codec;
use triad_core::error::CodecError;
use triad_core::types::{Amount, Id};
use triad_crypto::content_id;

use crate::fx::TransferOutput;
use crate::GenesisPayload;

pub const ID: Id = Id::from_name(b"avm");
pub const NAME: &str = "avm";

/// One asset minted at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDefinition {
    pub network_id: u32,
    pub name: String,
    pub symbol: String,
    pub denomination: u8,
    /// Free-form bytes recorded with the asset (the genesis message).
    pub memo: Vec<u8>,
    /// Total quantity ever minted, across every chain.
    pub initial_supply: Amount,
    /// Outputs held on the asset chain itself.
    pub outputs: Vec<TransferOutput>,
}

impl AssetDefinition {
    /// Content-addressed asset id: BLAKE3 of the canonical encoding.
    pub fn id(&self) -> Result<Id, CodecError> {
        content_id(self)
    }

    /// Sum of outputs held on this chain, `None` on overflow.
    pub fn outputs_total(&self) -> Option<Amount> {
        self.outputs
            .iter()
            .try_fold(0u64, |acc, out| acc.checked_add(out.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAsset {
    /// Short alias the chain registers for the asset, e.g. `TRD`.
    pub alias: String,
    pub definition: AssetDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvmGenesis {
    pub assets: Vec<GenesisAsset>,
}

impl AvmGenesis {
    pub fn asset(&self, alias: &str) -> Option<&AssetDefinition> {
        self.assets
            .iter()
            .find(|a| a.alias == alias)
            .map(|a| &a.definition)
    }
}

impl GenesisPayload for AvmGenesis {
    const VM_ID: Id = ID;
    const VM_NAME: &'static str = NAME;

    fn to_genesis_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }

    fn from_genesis_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}
