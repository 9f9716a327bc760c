use clap::Parser;
use pixelveil_core::PixelveilError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, PixelveilError>;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Embed(args) => args.run(),
        Commands::Extract(args) => args.run(),
        Commands::ExtractRaw(args) => args.run(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(exit_code(&err));
    }
}

/// Exit status contract: 0 success, 2 the payload did not fit the carrier,
/// 3 the data did not authenticate or is corrupted, 1 everything else.
fn exit_code(err: &PixelveilError) -> i32 {
    match err {
        PixelveilError::Capacity { .. } => 2,
        PixelveilError::Authentication(_)
        | PixelveilError::Decompression { .. }
        | PixelveilError::ImplausibleLength { .. }
        | PixelveilError::Truncated { .. } => 3,
        _ => 1,
    }
}
