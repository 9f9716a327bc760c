use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Extracts hidden data from PNG images
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Password used to seal the data, will be prompted for when omitted
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Stego image that contains the hidden data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Recovered payload will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(false));

        pixelveil_core::commands::extract(&self.image, &self.output_file, password)
    }
}
