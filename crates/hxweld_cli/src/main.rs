//! hxweld: render JSON declaration trees into Haxe extern files

mod convert;

use anyhow::Result;
use std::env;

fn main() -> Result<()> {
    // Use HXWELD_LOG env var for log level configuration, default to "info"
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("HXWELD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        convert::usage();
        return Ok(());
    }

    convert::run(&args)
}
