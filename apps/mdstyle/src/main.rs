//! mdstyle CLI binary entry point.
//! Resolves config, runs the validator, and prints results.

use clap::Parser;
use mdstyle::cli::Cli;
use mdstyle::{config, lint, output, utils};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.output.as_deref(),
        cli.fix,
    );
    if let Some(err) = eff.config_error.as_ref() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            format!("Ignoring invalid config ({}); using defaults.", err)
        );
    }
    if !output::OUTPUT_MODES.contains(&eff.output.as_str()) {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!("Unknown output mode '{}' (expected human|json)", eff.output)
        );
        std::process::exit(2);
    }

    let result = match lint::run_lint(&cli.path, eff.fix) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    if eff.output != "json" && result.summary.files == 0 {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            format!("No markdown files found under {}", cli.path)
        );
    }
    output::print_lint(&result, &eff.output, &cli.path);

    if !eff.fix && result.summary.issues > 0 {
        std::process::exit(1);
    }
}
