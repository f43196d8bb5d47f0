//! triad-vm
//!
//! The genesis payload schemas of the three virtual machines, at their
//! interface boundary only: each VM contributes a fixed VM id and the type
//! it decodes its genesis bytes into. Execution semantics live elsewhere.

pub mod avm;
pub mod evm;
pub mod fx;
pub mod platformvm;

use triad_core::constants::{ASSET_CHAIN_ALIAS, EVM_CHAIN_ALIAS, PLATFORM_CHAIN_ALIAS};
use triad_core::error::CodecError;
use triad_core::types::Id;

pub use avm::AvmGenesis;
pub use evm::EvmGenesis;
pub use fx::{Owner, TransferOutput};
pub use platformvm::PlatformGenesis;

/// A VM's own genesis payload, convertible to and from the opaque bytes the
/// genesis artifact carries for it.
pub trait GenesisPayload: Sized {
    const VM_ID: Id;
    const VM_NAME: &'static str;

    fn to_genesis_bytes(&self) -> Result<Vec<u8>, CodecError>;
    fn from_genesis_bytes(bytes: &[u8]) -> Result<Self, CodecError>;
}

/// One of the three VMs every genesis instantiates exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVm {
    pub id: Id,
    pub name: &'static str,
    pub chain_alias: &'static str,
}

/// Fixed VMs in artifact order: platform, asset, EVM.
pub static KNOWN_VMS: [KnownVm; 3] = [
    KnownVm {
        id: platformvm::ID,
        name: platformvm::NAME,
        chain_alias: PLATFORM_CHAIN_ALIAS,
    },
    KnownVm {
        id: avm::ID,
        name: avm::NAME,
        chain_alias: ASSET_CHAIN_ALIAS,
    },
    KnownVm {
        id: evm::ID,
        name: evm::NAME,
        chain_alias: EVM_CHAIN_ALIAS,
    },
];

pub fn known_vm(id: &Id) -> Option<&'static KnownVm> {
    KNOWN_VMS.iter().find(|vm| vm.id == *id)
}

/// Resolve a VM by its human name (`platformvm`, `avm`, `evm`).
pub fn known_vm_by_name(name: &str) -> Option<&'static KnownVm> {
    KNOWN_VMS.iter().find(|vm| vm.name == name)
}
