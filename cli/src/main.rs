//! Command-line crash-round fairness verifier.
//!
//! `crashproof round <id>` replays the full pipeline against a backend
//! and a ledger RPC endpoint; `crashproof compute` runs the calculator
//! on explicit hex inputs; `crashproof decode` runs the event codec
//! over raw log lines.

use std::env;
use std::io::{self, BufRead};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use crashproof_client::{fetch_round, BackendClient, FairnessData, LedgerRpcClient};
use crashproof_types::bytes::{bytes_to_hex, hex_to_bytes};
use crashproof_types::events::{decode_events_from_logs, FieldValue};
use crashproof_types::LedgerRecord;
use crashproof_verifier::{compute_crash_point, DEFAULT_EDGE_BPS};
use tracing::debug;

const BACKEND_URL_ENV: &str = "CRASHPROOF_BACKEND_URL";
const RPC_URL_ENV: &str = "CRASHPROOF_RPC_URL";

#[derive(Parser, Debug)]
#[command(name = "crashproof", about = "Verify crash-round fairness from on-chain records")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a round end-to-end against the backend and ledger RPC
    Round {
        round_id: String,

        /// Backend base URL (falls back to CRASHPROOF_BACKEND_URL)
        #[arg(long)]
        backend_url: Option<String>,

        /// Ledger RPC URL (falls back to CRASHPROOF_RPC_URL)
        #[arg(long)]
        rpc_url: Option<String>,

        /// House edge override in basis points
        #[arg(long)]
        edge_bps: Option<i64>,
    },
    /// Recompute a crash point from explicit 32-byte hex inputs
    Compute {
        /// Public random value, 64 hex characters
        #[arg(long)]
        public_random: String,

        /// Revealed local secret, 64 hex characters
        #[arg(long)]
        secret: String,

        /// House edge in basis points
        #[arg(long, default_value_t = DEFAULT_EDGE_BPS)]
        edge_bps: i64,
    },
    /// Decode events from raw log lines (arguments, or stdin if none)
    Decode { lines: Vec<String> },
}

fn resolve_url(flag: Option<String>, env_key: &str, what: &str) -> Result<String> {
    flag.or_else(|| env::var(env_key).ok().filter(|value| !value.trim().is_empty()))
        .ok_or_else(|| anyhow!("{what} not configured; pass the flag or set {env_key}"))
}

fn print_record(label: &str, record: Option<&LedgerRecord>) {
    match record {
        Some(record) => {
            let status = if record.err.is_some() { "error" } else { "ok" };
            let slot = record.slot.map_or_else(|| "-".to_string(), |s| s.to_string());
            let time = record
                .block_time
                .map_or_else(|| "-".to_string(), |t| t.to_string());
            println!(
                "  {label:<12} {status:<6} slot={slot:<12} time={time:<12} {}",
                record.signature
            );
        }
        None => println!("  {label:<12} missing"),
    }
}

fn print_report(data: &FairnessData) {
    println!(
        "round {} ({})",
        data.metadata.round_id,
        data.metadata.network.as_deref().unwrap_or("unknown network")
    );
    print_record("commit", data.commit.as_ref());
    print_record("randomness", data.randomness.as_ref());
    print_record("reveal", data.reveal.as_ref());

    if let Some(computation) = &data.report.computation {
        println!("  commit hash  {}", computation.commit_hash_hex());
        println!("  final hash   {}", computation.final_hash_hex());
        println!("  x            {}", computation.x);
        println!("  crash (bps)  {}", computation.crash_value_bps);
        println!("  multiplier   {:.4}x", computation.multiplier());
    }

    let tag = if data.report.verified() {
        "VERIFIED"
    } else {
        "NOT VERIFIED"
    };
    println!("{tag}: {}", data.report.message());
}

async fn run_round(
    round_id: &str,
    backend_url: Option<String>,
    rpc_url: Option<String>,
    edge_bps: Option<i64>,
) -> Result<()> {
    let backend_url = resolve_url(backend_url, BACKEND_URL_ENV, "backend URL")?;
    let rpc_url = resolve_url(rpc_url, RPC_URL_ENV, "RPC URL")?;
    let backend = BackendClient::new(&backend_url)?;
    let ledger = LedgerRpcClient::new(&rpc_url)?;

    let data = fetch_round(&backend, &ledger, round_id, edge_bps)
        .await
        .with_context(|| format!("failed to fetch round {round_id}"))?;
    debug!(round_id, verdict = ?data.report.verdict, "pipeline finished");
    print_report(&data);

    if !data.report.verified() {
        bail!("round {round_id} not verified: {}", data.report.message());
    }
    Ok(())
}

fn run_compute(public_random: &str, secret: &str, edge_bps: i64) -> Result<()> {
    let public = hex_to_bytes(public_random).context("invalid --public-random hex")?;
    let secret = hex_to_bytes(secret).context("invalid --secret hex")?;
    let computation = compute_crash_point(&public, &secret, edge_bps)?;

    println!("commit hash  {}", computation.commit_hash_hex());
    println!("final hash   {}", computation.final_hash_hex());
    println!("x            {}", computation.x);
    println!("crash (bps)  {}", computation.crash_value_bps);
    println!("multiplier   {:.4}x", computation.multiplier());
    Ok(())
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::U8(v) => v.to_string(),
        FieldValue::U64(v) => v.to_string(),
        FieldValue::Bytes(bytes) => bytes_to_hex(bytes),
        FieldValue::Absent => "-".to_string(),
    }
}

fn run_decode(lines: Vec<String>) -> Result<()> {
    let lines = if lines.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read log lines from stdin")?
    } else {
        lines
    };

    let mut count = 0usize;
    for event in decode_events_from_logs(&lines) {
        count += 1;
        println!("{}", event.schema);
        for (name, value) in event.fields() {
            println!("  {name:<20} {}", format_value(value));
        }
    }
    if count == 0 {
        println!("no events decoded");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match args.command {
        Command::Round {
            round_id,
            backend_url,
            rpc_url,
            edge_bps,
        } => run_round(&round_id, backend_url, rpc_url, edge_bps).await,
        Command::Compute {
            public_random,
            secret,
            edge_bps,
        } => run_compute(&public_random, &secret, edge_bps),
        Command::Decode { lines } => run_decode(lines),
    }
}
