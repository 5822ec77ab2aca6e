use anyhow::Context as _;
use raman_patch::{
    ConfigPatcher, PatchReport, PatchValue, ScatterConstants, ScatterMode, ScatterPatch,
};

use crate::commands::PatchArgs;
use crate::config::Config;
use crate::{print_info, print_warn};

pub fn handle_command(
    args: PatchArgs,
    mode: ScatterMode,
    config: &Config,
) -> anyhow::Result<PatchReport> {
    let value: PatchValue = args.value.parse()?;
    let path = args.file.unwrap_or_else(|| config.material.clone());

    if config.scatter != ScatterConstants::default() {
        print_warn!(
            "Using non-default scatter constants: offset={}, laser={}, raman={}",
            config.scatter.offset,
            config.scatter.predicted_laser,
            config.scatter.predicted_raman
        );
    }

    let patch = ScatterPatch::new(mode, value).with_constants(config.scatter);
    let coeffs = patch.coefficients();
    print_info!(
        "Setting Bifurcation coefficients ({mode} mode): a = {}, b = {}",
        coeffs.a,
        coeffs.b
    );

    ConfigPatcher::new(config.style)
        .apply(&path, &patch)
        .with_context(|| format!("Failed to patch scattering coefficients ({mode} mode)"))
}
