use anyhow::Context as _;
use raman_patch::{ConfigPatcher, PatchReport, PatchValue, SlabPatch};

use crate::commands::PatchArgs;
use crate::config::Config;
use crate::print_info;

pub fn handle_command(args: PatchArgs, config: &Config) -> anyhow::Result<PatchReport> {
    let value: PatchValue = args.value.parse()?;
    let path = args.file.unwrap_or_else(|| config.slab.clone());

    print_info!("Moving slab to x = {}", value.get());
    ConfigPatcher::new(config.style)
        .apply(&path, &SlabPatch::new(value))
        .context("Failed to move slab")
}
