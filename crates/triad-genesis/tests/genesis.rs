//! End-to-end tests of the public genesis entry points.
//!
//! Custom configs are written to temp files and fed through `genesis` the
//! same way a node would pass `--genesis-config`.
//!
//! Run with:
//!   cargo test -p triad-genesis --test genesis

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use triad_core::constants::{FUJI_ID, LOCAL_ID, MAINNET_ID};
use triad_core::error::{ErrorKind, GenesisError};
use triad_core::types::Id;
use triad_crypto::genesis_hash;
use triad_genesis::defaults::{LOCAL_CONFIG, MAINNET_CONFIG};
use triad_genesis::{
    aliases, build, genesis, vm_genesis, GenesisArtifact, UnparsedConfig, DEFAULT_NETWORK_IDS,
};
use triad_vm::{avm, evm, platformvm, AvmGenesis, EvmGenesis, GenesisPayload, PlatformGenesis};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The local config re-targeted at `network_id`, edited, and written out.
fn custom_config(network_id: u32, edit: impl FnOnce(&mut UnparsedConfig)) -> NamedTempFile {
    let mut raw = UnparsedConfig::from(&*LOCAL_CONFIG);
    raw.network_id = network_id;
    edit(&mut raw);
    write_config(&raw)
}

/// The mainnet config, edited, and written out.
fn mainnet_with(edit: impl FnOnce(&mut UnparsedConfig)) -> NamedTempFile {
    let mut raw = UnparsedConfig::from(&*MAINNET_CONFIG);
    edit(&mut raw);
    write_config(&raw)
}

fn write_config(raw: &UnparsedConfig) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(&mut file, raw).unwrap();
    file.flush().unwrap();
    file
}

fn hash_of(network_id: u32, path: Option<&Path>) -> Id {
    genesis_hash(&genesis(network_id, path).unwrap().0)
}

fn write_raw(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn local_genesis() -> Vec<u8> {
    genesis(LOCAL_ID, None).unwrap().0
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn builtin_networks_build() {
    for id in DEFAULT_NETWORK_IDS {
        let (bytes, _) = genesis(id, None).unwrap();
        let artifact = GenesisArtifact::decode(&bytes).unwrap();
        assert_eq!(artifact.network_id, id);
    }
}

#[test]
fn builtin_networks_have_distinct_hashes() {
    let mainnet = genesis_hash(&genesis(MAINNET_ID, None).unwrap().0);
    let fuji = genesis_hash(&genesis(FUJI_ID, None).unwrap().0);
    let local = genesis_hash(&local_genesis());
    assert_ne!(mainnet, fuji);
    assert_ne!(fuji, local);
    assert_ne!(mainnet, local);
}

#[test]
fn override_for_wrong_network_is_rejected() {
    let file = custom_config(LOCAL_ID, |_| {});
    let err = genesis(9999, Some(file.path())).unwrap_err();
    assert!(matches!(
        err,
        GenesisError::NetworkIdMismatch {
            expected: 9999,
            got: LOCAL_ID
        }
    ));
    assert_eq!(err.kind(), ErrorKind::ConfigMismatch);
}

#[test]
fn invalid_json_and_missing_file_share_one_error() {
    let bad = write_raw("{ this is not json");
    let missing = Path::new("/nonexistent/triad/genesis.json");

    for path in [bad.path(), missing] {
        let err = genesis(9999, Some(path)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigLoadFailure);
        assert!(
            err.to_string().contains("unable to load provided genesis config"),
            "unexpected message: {err}"
        );
    }
}

#[test]
fn custom_network_builds() {
    let file = custom_config(9999, |_| {});
    let (bytes, asset_id) = genesis(9999, Some(file.path())).unwrap();
    let artifact = GenesisArtifact::decode(&bytes).unwrap();
    assert_eq!(artifact.network_id, 9999);
    assert!(artifact.chains.iter().all(|c| c.network_id == 9999));
    assert_ne!(asset_id, genesis(LOCAL_ID, None).unwrap().1);
}

#[test]
fn empty_override_path_means_builtin() {
    let (builtin, builtin_asset) = genesis(LOCAL_ID, None).unwrap();
    let (empty, empty_asset) = genesis(LOCAL_ID, Some(Path::new(""))).unwrap();
    assert_eq!(builtin, empty);
    assert_eq!(builtin_asset, empty_asset);
}

#[test]
fn malformed_address_in_override_is_a_load_failure() {
    let file = custom_config(9999, |raw| raw.allocations[0].avax_addr = "X-notcb58".into());
    let err = genesis(9999, Some(file.path())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigLoadFailure);
    assert!(err.to_string().contains("unable to load provided genesis config"));
    assert!(err.to_string().contains("allocations[0].avaxAddr"));
}

#[test]
fn override_is_validated() {
    let file = custom_config(9999, |raw| raw.message.clear());
    let err = genesis(9999, Some(file.path())).unwrap_err();
    assert!(matches!(err, GenesisError::EmptyMessage));
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn identical_input_gives_identical_bytes() {
    let (a, asset_a) = genesis(LOCAL_ID, None).unwrap();
    let (b, asset_b) = genesis(LOCAL_ID, None).unwrap();
    assert_eq!(a, b);
    assert_eq!(asset_a, asset_b);
    assert_eq!(genesis_hash(&a), genesis_hash(&b));
}

#[test]
fn message_is_part_of_the_hash() {
    let base = custom_config(9999, |_| {});
    let edited = custom_config(9999, |raw| raw.message = "another network".into());
    let (a, _) = genesis(9999, Some(base.path())).unwrap();
    let (b, _) = genesis(9999, Some(edited.path())).unwrap();
    assert_ne!(genesis_hash(&a), genesis_hash(&b));
}

#[test]
fn any_mainnet_field_is_part_of_the_hash() {
    let builtin = hash_of(MAINNET_ID, None);

    let same = mainnet_with(|_| {});
    assert_eq!(hash_of(MAINNET_ID, Some(same.path())), builtin);

    let amount = mainnet_with(|raw| raw.allocations[0].initial_amount += 1);
    let fee = mainnet_with(|raw| raw.initial_stakers[0].delegation_fee += 1);
    let offset = mainnet_with(|raw| raw.initial_stake_duration_offset += 1);
    for edited in [&amount, &fee, &offset] {
        assert_ne!(hash_of(MAINNET_ID, Some(edited.path())), builtin);
    }
}

#[test]
fn bytes_survive_decode_and_reencode() {
    let bytes = local_genesis();
    let artifact = GenesisArtifact::decode(&bytes).unwrap();
    assert_eq!(artifact.encode().unwrap(), bytes);

    let (built, _) = build(&LOCAL_CONFIG).unwrap();
    assert_eq!(artifact, built);
}

#[test]
fn corrupted_bytes_fail_to_decode() {
    let mut bytes = local_genesis();
    bytes.push(0);
    let err = GenesisArtifact::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CodecFailure);

    let mut bytes = local_genesis();
    bytes[1] = 9;
    let err = GenesisArtifact::decode(&bytes).unwrap_err();
    assert!(err.to_string().contains("unsupported genesis format version"));
}

// ── Known values ──────────────────────────────────────────────────────────────

struct Known {
    network_id: u32,
    hash: &'static str,
    asset_id: &'static str,
    platform_chain: &'static str,
    asset_chain: &'static str,
    evm_chain: &'static str,
}

const KNOWN: [Known; 3] = [
    Known {
        network_id: MAINNET_ID,
        hash: "DKdHeQ11W3dMC3egKni32dVarTHAmfwp6yjyvVo5xXQ7bSucN",
        asset_id: "xkkMH6M17tL14CKM3N1jEbxMV5PsZ9FN6fr2nn2qsFKbPYZT5",
        platform_chain: "22QnCHnhpzJh8sASWWb9UtWwnVKAbXTUMK5361iC4ivEzAzhCp",
        asset_chain: "2BvwbVoes9TK2hq34hy8ZsVU272M18jNHdnY7AfxmyyygLzqyJ",
        evm_chain: "J11Ubq5FqATTHGvm4eLZqBsnywnwydRCjZQyYnafvmvv8Byha",
    },
    Known {
        network_id: FUJI_ID,
        hash: "wJ1W29jWYDW61ScpDi8LGMUAqJC5FFk4dwrz6TcyNNQAreLLU",
        asset_id: "PPJ9iYddq6JUVy3SB5crnjioaHoz4AoDne2FrYEDmkkcSWvai",
        platform_chain: "2CCP1eZsfDRv8Y3SqFiN45Z935eRvnGaS7uYr6j8eFuHHmFoze",
        asset_chain: "8fWCKbmmo84yEWZ322H94STubRzQwiabeeWyRxv7yVJxFexwN",
        evm_chain: "2C4vyvBkRq3vGmXQGfZdgL274vaGciq47DtJF6rNhN37ZmGqJr",
    },
    Known {
        network_id: LOCAL_ID,
        hash: "2sqFpFER63JT2yRoYvsfSzAbmuLWWrREonjdAhdHwydmwcKQLe",
        asset_id: "2dCzHGJegkCCVCRfJmN8zCR4JsY5VeCy1XFgAc7QyUSM3HvkSQ",
        platform_chain: "W7pPVS9o68pjkRdac1BtTLLGbVBJVCnSczCPd14xmsMELNGRX",
        asset_chain: "2vCvUP5fBRKxgAL84DKvmiHixaSxgWiRxvpk7FC1dhqu5tmb6X",
        evm_chain: "2frECG1inn9WgDJEd8VHGnnRUBEWKjvS6MiWtccnPLcRLfW4oo",
    },
];

#[test]
fn genesis_hash_and_asset_id_are_pinned() {
    for known in &KNOWN {
        let (bytes, asset_id) = genesis(known.network_id, None).unwrap();
        assert_eq!(genesis_hash(&bytes).to_string(), known.hash, "network {}", known.network_id);
        assert_eq!(asset_id.to_string(), known.asset_id, "network {}", known.network_id);
    }
}

#[test]
fn chain_ids_are_pinned() {
    for known in &KNOWN {
        let (bytes, _) = genesis(known.network_id, None).unwrap();
        for (vm_id, expected) in [
            (platformvm::ID, known.platform_chain),
            (avm::ID, known.asset_chain),
            (evm::ID, known.evm_chain),
        ] {
            let chain = vm_genesis(&bytes, &vm_id).unwrap();
            assert_eq!(
                chain.id().unwrap().to_string(),
                expected,
                "network {} vm {vm_id}",
                known.network_id
            );
        }
    }
}

// ── Aliases ───────────────────────────────────────────────────────────────────

#[test]
fn aliases_cover_every_vm() {
    let tables = aliases(&local_genesis()).unwrap();
    for vm_id in [platformvm::ID, avm::ID, evm::ID] {
        let chains = &tables.general[&format!("vm/{vm_id}")];
        assert_eq!(chains.len(), 1);
        let chain_id: Id = chains[0].parse().unwrap();
        assert!(tables.chains.contains_key(&chain_id));
        assert!(tables.vms.contains_key(&vm_id));
    }
    assert_eq!(tables.chains.len(), 3);
}

#[test]
fn chain_aliases_match_extracted_chain_ids() {
    let bytes = local_genesis();
    let tables = aliases(&bytes).unwrap();
    let x = vm_genesis(&bytes, &avm::ID).unwrap();
    assert_eq!(tables.chains[&x.id().unwrap()], vec!["X", "avm"]);
}

// ── VM extraction ─────────────────────────────────────────────────────────────

#[test]
fn known_vms_decode_their_own_payload() {
    let bytes = local_genesis();

    let p = vm_genesis(&bytes, &platformvm::ID).unwrap();
    let platform = PlatformGenesis::from_genesis_bytes(&p.genesis_data).unwrap();
    assert_eq!(platform.validators.len(), LOCAL_CONFIG.initial_stakers.len());

    let x = vm_genesis(&bytes, &avm::ID).unwrap();
    let assets = AvmGenesis::from_genesis_bytes(&x.genesis_data).unwrap();
    assert_eq!(
        assets.assets[0].definition.initial_supply,
        LOCAL_CONFIG.total_supply().unwrap()
    );

    let c = vm_genesis(&bytes, &evm::ID).unwrap();
    let evm = EvmGenesis::from_genesis_bytes(&c.genesis_data).unwrap();
    assert_eq!(evm.0, LOCAL_CONFIG.c_chain_genesis);
}

#[test]
fn unknown_vm_is_not_found() {
    let unknown = Id::from_name(b"wasm");
    let err = vm_genesis(&local_genesis(), &unknown).unwrap_err();
    assert!(matches!(err, GenesisError::VmGenesisNotFound(id) if id == unknown));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

// ── Supply ────────────────────────────────────────────────────────────────────

#[test]
fn supply_is_conserved_across_chains() {
    let artifact = GenesisArtifact::decode(&local_genesis()).unwrap();
    let platform: PlatformGenesis = artifact.payload().unwrap();
    let assets: AvmGenesis = artifact.payload().unwrap();
    let on_x = assets.assets[0].definition.outputs_total().unwrap();
    let staked = platform.total_stake().unwrap();
    assert_eq!(on_x + staked, artifact.initial_supply);
    assert_eq!(artifact.initial_supply, LOCAL_CONFIG.total_supply().unwrap());
}
