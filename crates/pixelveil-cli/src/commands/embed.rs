use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Embeds data in PNG images
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Password used to seal the data, will be prompted for when omitted
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier PNG image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(true));

        pixelveil_core::commands::embed(
            &self.image,
            &self.write_to_file,
            self.data_file,
            self.message,
            password,
        )
    }
}
