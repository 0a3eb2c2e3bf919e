//! chart-icons - check chart applications against an Iconify icon collection
//!
//! chart-icons:
//! - Collects application names from a <root>/<group>/<app> chart tree
//! - Looks each name up in the Iconify search API with bounded concurrency
//! - Reports which applications have a matching icon (text/jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli).await
}
