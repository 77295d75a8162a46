//! ethgate CLI — query an Infura-style endpoint from the terminal.
//!
//! Usage:
//! ```bash
//! # Current chain height
//! ethgate height --project <PROJECT_ID>
//!
//! # Balance of an account on a test network
//! ethgate balance --project <PROJECT_ID> --network sepolia --address 0x...
//!
//! # Receipt status of a transaction
//! ethgate receipt --project <PROJECT_ID> --hash 0x...
//! ```

use std::env;
use std::process;

use ethgate_core::hex;
use ethgate_provider::{Credentials, Network, Provider, TransactionStatus};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "height" => cmd_height(&args[2..]).await,
        "balance" => cmd_balance(&args[2..]).await,
        "receipt" => cmd_receipt(&args[2..]).await,
        "networks" => {
            cmd_networks();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("ethgate {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("ethgate {}", env!("CARGO_PKG_VERSION"));
    println!("Query Infura-style JSON-RPC endpoints\n");
    println!("USAGE:");
    println!("    ethgate <COMMAND>\n");
    println!("COMMANDS:");
    println!("    height     Print the current chain height");
    println!("    balance    Print the balance of an account");
    println!("    receipt    Print the receipt status of a transaction");
    println!("    networks   List supported networks");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("COMMON FLAGS:");
    println!("    --project <ID>      project identifier  [required]");
    println!("    --secret <SECRET>   project secret for basic auth");
    println!("    --network <NAME>    mainnet | goerli | sepolia  [default: mainnet]");
}

async fn cmd_height(args: &[String]) -> Result<(), String> {
    let provider = build_provider(args, None)?;
    let height = provider
        .last_block_height()
        .await
        .map_err(|e| e.to_string())?;
    println!("{height}");
    Ok(())
}

async fn cmd_balance(args: &[String]) -> Result<(), String> {
    let address = parse_flag(args, "--address").ok_or("--address is required")?;
    let provider = build_provider(args, Some(&address))?;
    let balance = provider.balance().await.map_err(|e| e.to_string())?;
    println!("{balance} wei");
    Ok(())
}

async fn cmd_receipt(args: &[String]) -> Result<(), String> {
    let hash = parse_flag(args, "--hash").ok_or("--hash is required")?;
    let hash = hex::hex_to_bytes(&hash).map_err(|e| e.to_string())?;
    let provider = build_provider(args, None)?;
    let status = provider
        .transaction_receipt_status(&hash)
        .await
        .map_err(|e| e.to_string())?;
    match status {
        TransactionStatus::Success => println!("success"),
        TransactionStatus::Failed => println!("failed"),
        TransactionStatus::NotFound => println!("not found"),
    }
    Ok(())
}

fn cmd_networks() {
    println!("Supported networks:\n");
    for network in Network::all() {
        println!("  {:<10} {}", network.to_string(), network.base_url());
    }
}

fn build_provider(args: &[String], address: Option<&str>) -> Result<Provider, String> {
    let project = parse_flag(args, "--project").ok_or("--project is required")?;
    let network = match parse_flag(args, "--network") {
        Some(name) => Network::from_name(&name).ok_or(format!("unknown network: {name}"))?,
        None => Network::Mainnet,
    };
    let mut credentials = Credentials::new(project);
    if let Some(secret) = parse_flag(args, "--secret") {
        credentials = credentials.with_secret(secret);
    }
    Ok(Provider::new(
        network,
        &credentials,
        address.unwrap_or(ZERO_ADDRESS),
    ))
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}
