use std::path::PathBuf;

use thiserror::Error;

use crate::types::Id;

/// Broad class of a [`GenesisError`], for callers that branch on the kind of
/// failure rather than on its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigMismatch,
    ConfigInvalid,
    ConfigLoadFailure,
    CodecFailure,
    NotFound,
    ArithmeticOverflow,
}

#[derive(Debug, Error)]
pub enum GenesisError {
    // ── Network identity ─────────────────────────────────────────────────────
    #[error("networkID {expected} specified but genesis config contains networkID {got}")]
    NetworkIdMismatch { expected: u32, got: u32 },

    // ── Config rules ─────────────────────────────────────────────────────────
    #[error("start time cannot be in the future: {start_time} > {now}")]
    StartTimeInFuture { start_time: u64, now: u64 },

    #[error("initial supply must be > 0")]
    ZeroInitialSupply,

    #[error("initial stakers must be > 0")]
    NoInitialStakers,

    #[error("initial stake duration must be > 0")]
    ZeroStakeDuration,

    #[error(
        "initial stake duration is {duration} but need at least {required} with offset of {offset}"
    )]
    StakeDurationTooShort {
        duration: u64,
        required: u64,
        offset: u64,
    },

    #[error("initial staked funds cannot be empty")]
    EmptyStakedFunds,

    #[error("address {0} is duplicated in initial staked funds")]
    DuplicateStakedFund(String),

    #[error("address {0} does not have an allocation to stake")]
    StakedFundWithoutAllocation(String),

    #[error("C-Chain genesis cannot be empty")]
    EmptyCChainGenesis,

    #[error("genesis message cannot be empty")]
    EmptyMessage,

    #[error("invalid {field} {value:?}: {reason}")]
    InvalidAddress {
        field: String,
        value: String,
        #[source]
        reason: IdParseError,
    },

    // ── Loading ──────────────────────────────────────────────────────────────
    #[error("unable to load provided genesis config {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("no default config for network {0}")]
    NoDefaultConfig(u32),

    // ── Encoding ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Codec(#[from] CodecError),

    // ── Lookup ───────────────────────────────────────────────────────────────
    #[error("no genesis found for VM {0}")]
    VmGenesisNotFound(Id),

    // ── Arithmetic ───────────────────────────────────────────────────────────
    #[error("arithmetic overflow computing {what}")]
    Overflow { what: &'static str },

    #[error("genesis supply mismatch: expected {expected}, got {got}")]
    SupplyMismatch { expected: u64, got: u64 },
}

impl GenesisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenesisError::NetworkIdMismatch { .. } => ErrorKind::ConfigMismatch,
            GenesisError::StartTimeInFuture { .. }
            | GenesisError::ZeroInitialSupply
            | GenesisError::NoInitialStakers
            | GenesisError::ZeroStakeDuration
            | GenesisError::StakeDurationTooShort { .. }
            | GenesisError::EmptyStakedFunds
            | GenesisError::DuplicateStakedFund(_)
            | GenesisError::StakedFundWithoutAllocation(_)
            | GenesisError::EmptyCChainGenesis
            | GenesisError::EmptyMessage
            | GenesisError::InvalidAddress { .. } => ErrorKind::ConfigInvalid,
            GenesisError::Load { .. } | GenesisError::NoDefaultConfig(_) => {
                ErrorKind::ConfigLoadFailure
            }
            GenesisError::Codec(_) => ErrorKind::CodecFailure,
            GenesisError::VmGenesisNotFound(_) => ErrorKind::NotFound,
            GenesisError::Overflow { .. } | GenesisError::SupplyMismatch { .. } => {
                ErrorKind::ArithmeticOverflow
            }
        }
    }
}

/// Underlying cause of a failed config load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[source] Box<GenesisError>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("unsupported genesis format version {0}")]
    UnsupportedVersion(u16),

    #[error("truncated input: need at least {need} bytes, got {got}")]
    Truncated { need: usize, got: usize },

    #[error("malformed genesis bytes: {0}")]
    Malformed(String),

    #[error("failed to encode genesis: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid cb58 encoding: {0}")]
    Cb58(#[from] bs58::decode::Error),

    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },

    #[error("missing {0:?} prefix")]
    MissingPrefix(&'static str),
}
