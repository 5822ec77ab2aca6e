use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use raman_patch::{OutputStyle, PatchReport, ScatterMode};

use crate::commands::{self, PatchArgs};
use crate::config::Config;
use crate::logging::init_logger;
use crate::{print_debug, print_err, print_success};

#[derive(Parser, Debug)]
#[command(name = "raman-patch", author, version, about, long_about = None)]
pub struct CliArgs {
    /// TOML file overriding default paths, output style and scatter constants.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Write the patched document on a single line.
    #[arg(long, global = true)]
    pub compact: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set Bifurcation `a` to VALUE and `b` to VALUE minus the offset.
    ScatterOffset(PatchArgs),
    /// Set Bifurcation `a` to VALUE and `b` to VALUE / laser line * Raman line.
    ScatterRatio(PatchArgs),
    /// Set the first component of the slab translation to VALUE.
    SlabMove(PatchArgs),
}

pub fn cli_main() -> ExitCode {
    init_logger();
    let args = CliArgs::parse();

    match run(args) {
        Ok(report) => {
            print_success!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_err!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn run(args: CliArgs) -> anyhow::Result<PatchReport> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if args.compact {
        config.style = OutputStyle::Compact;
    }
    print_debug!("Using {config:?}");

    match args.command {
        Commands::ScatterOffset(patch_args) => {
            commands::scatter::handle_command(patch_args, ScatterMode::Offset, &config)
        }
        Commands::ScatterRatio(patch_args) => {
            commands::scatter::handle_command(patch_args, ScatterMode::Ratio, &config)
        }
        Commands::SlabMove(patch_args) => commands::slab::handle_command(patch_args, &config),
    }
}
