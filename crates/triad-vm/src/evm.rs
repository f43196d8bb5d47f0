//! EVM genesis: a JSON document owned entirely by the EVM. Genesis carries
//! it verbatim; this module only checks that it is JSON when decoding.

use triad_core::error::CodecError;
use triad_core::types::Id;

use crate::GenesisPayload;

pub const ID: Id = Id::from_name(b"evm");
pub const NAME: &str = "evm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmGenesis(pub String);

impl EvmGenesis {
    /// `config.chainId` of the embedded document, if present.
    pub fn chain_id(&self) -> Option<u64> {
        let doc: serde_json::Value = serde_json::from_str(&self.0).ok()?;
        doc.get("config")?.get("chainId")?.as_u64()
    }
}

impl GenesisPayload for EvmGenesis {
    const VM_ID: Id = ID;
    const VM_NAME: &'static str = NAME;

    fn to_genesis_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.0.as_bytes().to_vec())
    }

    fn from_genesis_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let text = std::str::from_utf8(bytes).map_err(|e| CodecError::Malformed(e.to_string()))?;
        serde_json::from_str::<serde_json::Value>(text)
            .map_err(|e| CodecError::Malformed(e.to_string()))?;
        Ok(Self(text.to_owned()))
    }
}
