use std::process::ExitCode;

fn main() -> ExitCode {
    raman_patch_cli::cli::cli_main()
}
