//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mdstyle",
    version,
    about = "Validate markdown documentation formatting",
    long_about = "mdstyle — scan markdown files for list spacing and nested bullet indentation issues, and optionally fix them in place.\n\nConfiguration precedence: CLI > mdstyle.toml > defaults.",
    after_help = "Examples:\n  mdstyle docs/\n  mdstyle docs/ --fix\n  mdstyle docs/guide.md --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to markdown file or directory to validate")]
    pub path: String,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Automatically fix issues found")]
    pub fix: bool,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
    pub repo_root: Option<String>,
}
