use std::path::PathBuf;

use clap::Args;

pub mod scatter;
pub mod slab;

/// Arguments shared by every patch command.
#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// New value. Checked before the file is opened.
    #[arg(allow_negative_numbers = true)]
    pub value: String,
    /// File to patch instead of the configured default.
    #[arg(long)]
    pub file: Option<PathBuf>,
}
