use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Extracts the raw sealed bytes from PNG images, without decryption
#[derive(Args, Debug)]
pub struct ExtractRawArgs {
    /// Stego image that contains the hidden data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Raw sealed data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl ExtractRawArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::extract_raw(&self.image, &self.output_file)
    }
}
