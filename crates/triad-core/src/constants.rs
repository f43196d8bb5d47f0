/// ─── Triad Network Constants ────────────────────────────────────────────────
///
/// Three chains, one genesis: the platform chain (P) holds the validator set,
/// the asset chain (X) holds the native token, and the EVM chain (C) carries
/// an opaque genesis document of its own.

// ── Network identifiers ──────────────────────────────────────────────────────

pub const MAINNET_ID: u32 = 1;
pub const FUJI_ID: u32 = 5;
pub const LOCAL_ID: u32 = 12345;

/// Human name of a network id. Unknown ids render as `network-<id>`.
pub fn network_name(network_id: u32) -> String {
    match network_id {
        MAINNET_ID => "mainnet".into(),
        FUJI_ID => "fuji".into(),
        LOCAL_ID => "local".into(),
        other => format!("network-{other}"),
    }
}

// ── Native asset ─────────────────────────────────────────────────────────────

pub const NATIVE_ASSET_NAME: &str = "Triad";
pub const NATIVE_ASSET_SYMBOL: &str = "TRD";
pub const NATIVE_ASSET_DENOMINATION: u8 = 9;

/// 1 TRD expressed in base units.
pub const UNITS_PER_TRD: u64 = 1_000_000_000;

// ── Chain aliases ────────────────────────────────────────────────────────────

pub const PLATFORM_CHAIN_ALIAS: &str = "P";
pub const ASSET_CHAIN_ALIAS: &str = "X";
pub const EVM_CHAIN_ALIAS: &str = "C";

// ── Codec ────────────────────────────────────────────────────────────────────

/// Leading format tag of every encoded genesis structure.
pub const CODEC_VERSION: u16 = 0;

/// Upper bound on a single encoded structure (64 MiB).
pub const MAX_CODEC_SIZE: u64 = 64 * 1024 * 1024;
