mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

use crate::logging::{DEFAULT_LEVEL, LogArgs};

/// strkit - line oriented string transforms.
#[derive(clap::Parser, Debug)]
#[command(name = "strkit", version)]
pub struct Args {
    #[clap(flatten)]
    pub log: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(DEFAULT_LEVEL)?;

    args.command.run()
}
