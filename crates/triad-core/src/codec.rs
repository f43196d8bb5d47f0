//! Canonical binary codec for every genesis structure.
//!
//! Layout: a 2-byte big-endian format version, then the bincode body with
//! fixed-width big-endian integers and u64 length prefixes. Fields are written
//! in declaration order; encoded types never contain maps or sets, so the same
//! value always yields the same bytes. Trailing bytes are rejected on decode.

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

use crate::constants::{CODEC_VERSION, MAX_CODEC_SIZE};
use crate::error::CodecError;

const VERSION_LEN: usize = 2;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_big_endian()
        .with_limit(MAX_CODEC_SIZE)
        .reject_trailing_bytes()
}

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let body = options()
        .serialize(value)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    let mut out = Vec::with_capacity(VERSION_LEN + body.len());
    out.extend_from_slice(&CODEC_VERSION.to_be_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    if bytes.len() < VERSION_LEN {
        return Err(CodecError::Truncated {
            need: VERSION_LEN,
            got: bytes.len(),
        });
    }
    let (version, body) = bytes.split_at(VERSION_LEN);
    let version = u16::from_be_bytes([version[0], version[1]]);
    if version != CODEC_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    options()
        .deserialize(body)
        .map_err(|e| CodecError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Id, ShortId};
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: Id,
        owner: ShortId,
        amount: u64,
        fee: u32,
        memo: Vec<u8>,
        name: String,
        outputs: Vec<(u64, u64)>,
    }

    fn random_sample(rng: &mut StdRng) -> Sample {
        let mut id = [0u8; 32];
        let mut owner = [0u8; 20];
        rng.fill_bytes(&mut id);
        rng.fill_bytes(&mut owner);
        let memo_len = rng.gen_range(0..64);
        let outputs_len = rng.gen_range(0..8);
        Sample {
            id: Id(id),
            owner: ShortId(owner),
            amount: rng.gen(),
            fee: rng.gen(),
            memo: (0..memo_len).map(|_| rng.gen()).collect(),
            name: format!("chain-{}", rng.gen::<u16>()),
            outputs: (0..outputs_len).map(|_| (rng.gen(), rng.gen())).collect(),
        }
    }

    #[test]
    fn integers_are_fixed_width_big_endian() {
        let bytes = encode(&1u32).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 1]);
        let bytes = encode(&vec![0xabu8]).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0xab]);
    }

    #[test]
    fn random_values_survive_both_directions() {
        let mut rng = StdRng::seed_from_u64(0x7121_ad);
        for _ in 0..64 {
            let sample = random_sample(&mut rng);
            let bytes = encode(&sample).unwrap();
            let decoded: Sample = decode(&bytes).unwrap();
            assert_eq!(decoded, sample);
            assert_eq!(encode(&decoded).unwrap(), bytes);
        }
    }

    #[test]
    fn rejects_unknown_version() {
        let mut bytes = encode(&42u64).unwrap();
        bytes[1] = 1;
        assert_eq!(decode::<u64>(&bytes), Err(CodecError::UnsupportedVersion(1)));
    }

    #[test]
    fn rejects_short_input() {
        assert!(matches!(
            decode::<u64>(&[0]),
            Err(CodecError::Truncated { need: 2, got: 1 })
        ));
        let bytes = encode(&42u64).unwrap();
        assert!(matches!(
            decode::<u64>(&bytes[..bytes.len() - 1]),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let mut bytes = encode(&42u64).unwrap();
        bytes.push(0);
        assert!(matches!(decode::<u64>(&bytes), Err(CodecError::Malformed(_))));
    }
}
