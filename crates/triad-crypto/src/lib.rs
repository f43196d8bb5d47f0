pub mod hash;

pub use hash::{blake3_hash, content_id, genesis_hash, id_from_bytes};
