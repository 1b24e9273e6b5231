//! # Guarantee Ledger Node
//!
//! Executes an invocation script against the chaincode.
//!
//! ```text
//! gl-node --state-file state.json script.jsonl
//! cat script.jsonl | gl-node
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gl_node::logging::init_tracing;
use gl_node::{Host, HostConfig};

#[derive(Parser, Debug)]
#[command(name = "gl-node")]
#[command(about = "Run guarantee ledger invocations, one JSON object per line")]
struct Args {
    /// Invocation script. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// World state snapshot (overrides GL_STATE_FILE)
    #[arg(short, long)]
    state_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `gl_chaincode=trace` (overrides GL_LOG)
    #[arg(short, long)]
    log: Option<String>,

    /// Prefix applied to every table name (overrides GL_TABLE_PREFIX)
    #[arg(long)]
    table_prefix: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = HostConfig::from_env();
    if let Some(path) = args.state_file {
        config.state_file = Some(path);
    }
    if let Some(level) = args.log {
        config.log_level = level;
    }
    if let Some(prefix) = args.table_prefix {
        config.chaincode = gl_chaincode::ChaincodeConfig::default().with_table_prefix(&prefix);
    }

    init_tracing(&config.log_level)?;
    info!(state_file = ?config.state_file, "starting guarantee ledger node");

    let mut host = Host::open(&config)?;

    let stdout = io::stdout();
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            host.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            host.run(io::stdin().lock(), stdout.lock())?;
        }
    }

    host.save()
}
