//! envflag: resolve a feature flag from environment variables.
//!
//! Usage:
//!   envflag new-checkout --type bool --default false
//!   ENVFLAG_PREFIX=SHOP envflag max-cart-items -t int -d 10 --json
//!
//! The value (or JSON details) goes to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use envflag_cli::{Args, run};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!(flag = %args.flag, kind = %args.kind, "Resolving flag");
    let output = run(&args)?;
    println!("{output}");
    Ok(())
}
