//! The assembled genesis and its canonical bytes.

use serde::{Deserialize, Serialize};
use triad_core::codec;
use triad_core::error::{CodecError, GenesisError};
use triad_core::types::{Amount, Id, Timestamp};
use triad_crypto::content_id;
use triad_vm::GenesisPayload;

/// One chain instantiated at genesis: which VM runs it and the VM's own
/// genesis bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainGenesis {
    pub network_id: u32,
    pub name: String,
    pub vm_id: Id,
    pub fx_ids: Vec<Id>,
    /// Opaque to everything but the owning VM.
    pub genesis_data: Vec<u8>,
}

impl ChainGenesis {
    /// Chain id: BLAKE3 of this record's canonical encoding.
    pub fn id(&self) -> Result<Id, CodecError> {
        content_id(self)
    }

    /// Decode `genesis_data` with the VM's own schema.
    pub fn payload<P: GenesisPayload>(&self) -> Result<P, GenesisError> {
        if self.vm_id != P::VM_ID {
            return Err(GenesisError::VmGenesisNotFound(P::VM_ID));
        }
        Ok(P::from_genesis_bytes(&self.genesis_data)?)
    }
}

/// Everything a node needs to agree on before consensus starts. Built once,
/// never mutated; its encoding is the genesis artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisArtifact {
    pub network_id: u32,
    pub timestamp: Timestamp,
    pub initial_supply: Amount,
    /// Platform, asset and EVM chains, in that order.
    pub chains: Vec<ChainGenesis>,
    pub message: String,
}

impl GenesisArtifact {
    pub fn encode(&self) -> Result<Vec<u8>, GenesisError> {
        Ok(codec::encode(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, GenesisError> {
        Ok(codec::decode(bytes)?)
    }

    /// The chain run by `vm_id`, if any.
    pub fn chain_for_vm(&self, vm_id: &Id) -> Option<&ChainGenesis> {
        self.chains.iter().find(|c| c.vm_id == *vm_id)
    }

    /// Decode the payload of the chain owned by `P`'s VM.
    pub fn payload<P: GenesisPayload>(&self) -> Result<P, GenesisError> {
        self.chain_for_vm(&P::VM_ID)
            .ok_or(GenesisError::VmGenesisNotFound(P::VM_ID))?
            .payload()
    }
}
