//! Alias tables derived from genesis bytes.
//!
//! Nothing here is stored in the artifact. The tables are rebuilt from the
//! decoded chains on every call.

use std::collections::BTreeMap;

use triad_core::error::GenesisError;
use triad_core::types::Id;
use triad_vm::fx::{SECP256K1_FX_ID, SECP256K1_FX_NAME};
use triad_vm::known_vm;

use crate::artifact::GenesisArtifact;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliases {
    /// Namespaced keys: `vm/<vm id>`, `vm/<vm name>`, `bc/<chain id>`.
    pub general: BTreeMap<String, Vec<String>>,
    /// Chain id to its short alias and VM name.
    pub chains: BTreeMap<Id, Vec<String>>,
    /// VM or fx id to its human name.
    pub vms: BTreeMap<Id, Vec<String>>,
}

/// Decode `genesis_bytes` and derive its alias tables.
pub fn aliases(genesis_bytes: &[u8]) -> Result<Aliases, GenesisError> {
    let artifact = GenesisArtifact::decode(genesis_bytes)?;
    let mut out = Aliases::default();

    for chain in &artifact.chains {
        let chain_id = chain.id()?;
        out.general
            .entry(format!("vm/{}", chain.vm_id))
            .or_default()
            .push(chain_id.to_string());

        // Chains of VMs this build doesn't know get no names.
        let Some(vm) = known_vm(&chain.vm_id) else {
            continue;
        };
        out.general.insert(
            format!("bc/{chain_id}"),
            vec![
                vm.chain_alias.to_string(),
                vm.name.to_string(),
                format!("bc/{}", vm.chain_alias),
                format!("bc/{}", vm.name),
            ],
        );
        out.general
            .insert(format!("vm/{}", vm.name), vec![format!("vm/{}", vm.id)]);
        out.chains.insert(
            chain_id,
            vec![vm.chain_alias.to_string(), vm.name.to_string()],
        );
        out.vms.insert(vm.id, vec![vm.name.to_string()]);
    }
    out.vms
        .insert(SECP256K1_FX_ID, vec![SECP256K1_FX_NAME.to_string()]);

    Ok(out)
}
