use serde::Serialize;
use triad_core::codec;
use triad_core::error::CodecError;
use triad_core::types::Id;

/// Compute BLAKE3 hash of arbitrary bytes → 32-byte array.
pub fn blake3_hash(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// Content-addressed identifier of raw bytes.
pub fn id_from_bytes(bytes: &[u8]) -> Id {
    Id::from_bytes(blake3_hash(bytes))
}

/// Content-addressed identifier of a value: BLAKE3 of its canonical encoding.
pub fn content_id<T: Serialize>(value: &T) -> Result<Id, CodecError> {
    Ok(id_from_bytes(&codec::encode(value)?))
}

/// The network's root identifier: BLAKE3 of the full genesis bytes.
pub fn genesis_hash(genesis_bytes: &[u8]) -> Id {
    id_from_bytes(genesis_bytes)
}
