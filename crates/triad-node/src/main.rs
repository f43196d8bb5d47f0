//! triad-node: genesis tooling for a Triad node.
//!
//! `build` resolves and validates the network's genesis config, builds and
//! encodes the genesis, and prints its hash and native asset id. `aliases` and
//! `vm-genesis` read genesis back, either rebuilt from config or from a hex
//! file written by `build --out`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;

use triad_core::constants::{network_name, LOCAL_ID};
use triad_core::types::Id;
use triad_crypto::genesis_hash;
use triad_genesis::{aliases, genesis, vm_genesis};
use triad_vm::known_vm_by_name;

#[derive(Parser, Debug)]
#[command(
    name = "triad-node",
    version,
    about = "Triad genesis tooling: three chains, one genesis"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build genesis and print its hash and native asset id.
    Build {
        #[command(flatten)]
        network: NetworkArgs,

        /// Write the genesis bytes, hex encoded, to this file.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the chain, VM and general alias tables as JSON.
    Aliases {
        #[command(flatten)]
        source: GenesisSource,
    },

    /// Print the chain id and hex payload of one VM's genesis.
    VmGenesis {
        #[command(flatten)]
        source: GenesisSource,

        /// VM name (`platform`, `avm`, `evm`) or CB58 VM id.
        #[arg(long)]
        vm: String,
    },
}

#[derive(ClapArgs, Debug)]
struct NetworkArgs {
    /// Network to build genesis for.
    #[arg(long, default_value_t = LOCAL_ID)]
    network_id: u32,

    /// Genesis config JSON overriding the network's built-in config.
    #[arg(long)]
    genesis_config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct GenesisSource {
    #[command(flatten)]
    network: NetworkArgs,

    /// Read hex genesis bytes from this file instead of building them.
    #[arg(long, conflicts_with = "genesis_config")]
    genesis_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,triad=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Build { network, out } => {
            let (bytes, asset_id) = build_genesis(&network)?;
            if let Some(path) = out {
                std::fs::write(&path, hex::encode(&bytes))
                    .with_context(|| format!("writing genesis to {}", path.display()))?;
                info!(path = %path.display(), "genesis written");
            }
            println!("network:      {}", network_name(network.network_id));
            println!("genesis hash: {}", genesis_hash(&bytes));
            println!("asset id:     {asset_id}");
            println!("size:         {} bytes", bytes.len());
        }

        Command::Aliases { source } => {
            let bytes = read_genesis(&source)?;
            let tables = aliases(&bytes).context("deriving aliases")?;
            let keyed = |map: BTreeMap<Id, Vec<String>>| -> BTreeMap<String, Vec<String>> {
                map.into_iter().map(|(id, names)| (id.to_string(), names)).collect()
            };
            let doc = serde_json::json!({
                "general": tables.general,
                "chains": keyed(tables.chains),
                "vms": keyed(tables.vms),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }

        Command::VmGenesis { source, vm } => {
            let vm_id = resolve_vm(&vm)?;
            let bytes = read_genesis(&source)?;
            let chain = vm_genesis(&bytes, &vm_id).context("extracting VM genesis")?;
            println!("chain:   {} ({})", chain.name, chain.id()?);
            println!("vm:      {vm_id}");
            println!("payload: {}", hex::encode(&chain.genesis_data));
        }
    }

    Ok(())
}

fn build_genesis(network: &NetworkArgs) -> anyhow::Result<(Vec<u8>, Id)> {
    genesis(network.network_id, network.genesis_config.as_deref())
        .with_context(|| format!("building genesis for network {}", network.network_id))
}

fn read_genesis(source: &GenesisSource) -> anyhow::Result<Vec<u8>> {
    match &source.genesis_file {
        Some(path) => read_hex_file(path),
        None => Ok(build_genesis(&source.network)?.0),
    }
}

fn read_hex_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading genesis from {}", path.display()))?;
    hex::decode(text.trim()).with_context(|| format!("decoding hex in {}", path.display()))
}

fn resolve_vm(vm: &str) -> anyhow::Result<Id> {
    if let Some(known) = known_vm_by_name(vm) {
        return Ok(known.id);
    }
    vm.parse::<Id>()
        .with_context(|| format!("{vm:?} is neither a known VM name nor a VM id"))
}
