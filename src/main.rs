use clap::Parser;

use stegbmp::{
    cli::{Cli, Commands},
    handler::{handle_decode, handle_encode},
};

/// Program entry point.
///
/// Parses the command line and dispatches to the handler for the chosen
/// subcommand (`encode` or `decode`).
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
    }
}
