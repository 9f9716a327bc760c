use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Embed(embed::EmbedArgs),
    Extract(extract::ExtractArgs),
    ExtractRaw(extract_raw::ExtractRawArgs),
}

pub fn ask_for_password(confirmation: bool) -> Option<String> {
    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirmation {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt.interact().ok()
}
