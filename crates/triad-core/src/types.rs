use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdParseError;

/// Token quantity in base units (1 TRD = 1_000_000_000 base units).
pub type Amount = u64;

/// Unix timestamp (seconds, UTC).
pub type Timestamp = u64;

/// Prefix of the textual node identifier form.
pub const NODE_ID_PREFIX: &str = "NodeID-";

// ── CB58 ─────────────────────────────────────────────────────────────────────

/// Base-58 with a trailing 4-byte double-SHA256 checksum.
pub fn to_cb58(bytes: &[u8]) -> String {
    bs58::encode(bytes).with_check().into_string()
}

/// Decode a CB58 string, verifying and stripping the checksum.
pub fn from_cb58(s: &str) -> Result<Vec<u8>, IdParseError> {
    Ok(bs58::decode(s).with_check(None).into_vec()?)
}

fn fixed<const N: usize>(bytes: Vec<u8>) -> Result<[u8; N], IdParseError> {
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| IdParseError::Length {
        expected: N,
        got: bytes.len(),
    })
}

// ── Id ───────────────────────────────────────────────────────────────────────

/// 32-byte identifier: chain ids, asset ids, VM ids, genesis hashes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(pub [u8; 32]);

impl Id {
    pub const EMPTY: Id = Id([0u8; 32]);

    pub const fn from_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    /// Fixed identifier built from a short ASCII name, right-padded with zeros.
    /// Names longer than 32 bytes are truncated.
    pub const fn from_name(name: &[u8]) -> Self {
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < name.len() && i < 32 {
            out[i] = name[i];
            i += 1;
        }
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_cb58(&self) -> String {
        to_cb58(&self.0)
    }

    pub fn from_cb58(s: &str) -> Result<Self, IdParseError> {
        Ok(Self(fixed(from_cb58(s)?)?))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cb58())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.to_cb58())
    }
}

impl FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cb58(s)
    }
}

// ── ShortId ──────────────────────────────────────────────────────────────────

/// 20-byte identifier: ledger addresses and the body of node ids.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShortId(pub [u8; 20]);

impl ShortId {
    pub const fn from_bytes(b: [u8; 20]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_cb58(&self) -> String {
        to_cb58(&self.0)
    }

    pub fn from_cb58(s: &str) -> Result<Self, IdParseError> {
        Ok(Self(fixed(from_cb58(s)?)?))
    }

    /// Chain-qualified address form, e.g. `X-<cb58>`.
    pub fn to_address(&self, chain_alias: &str) -> String {
        format!("{chain_alias}-{}", self.to_cb58())
    }

    /// Parse a chain-qualified address, returning the chain alias and the id.
    pub fn parse_address(s: &str) -> Result<(&str, Self), IdParseError> {
        let (alias, body) = s
            .split_once('-')
            .ok_or(IdParseError::MissingPrefix("<chain>-"))?;
        if alias.is_empty() {
            return Err(IdParseError::MissingPrefix("<chain>-"));
        }
        Ok((alias, Self::from_cb58(body)?))
    }

    /// `0x`-prefixed lowercase hex, the external (EVM) address form.
    pub fn to_eth_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn from_eth_hex(s: &str) -> Result<Self, IdParseError> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(IdParseError::MissingPrefix("0x"))?;
        Ok(Self(fixed(hex::decode(body)?)?))
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cb58())
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", self.to_cb58())
    }
}

// ── NodeId ───────────────────────────────────────────────────────────────────

/// Validator identity. Textual form is `NodeID-<cb58>`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub ShortId);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NODE_ID_PREFIX}{}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl FromStr for NodeId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix(NODE_ID_PREFIX)
            .ok_or(IdParseError::MissingPrefix(NODE_ID_PREFIX))?;
        Ok(Self(ShortId::from_cb58(body)?))
    }
}

// ── LockedAmount ─────────────────────────────────────────────────────────────

/// One unlock tranche: `amount` becomes spendable at or after `locktime`.
/// A locktime of 0 means spendable at genesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedAmount {
    pub amount: Amount,
    #[serde(default)]
    pub locktime: Timestamp,
}
