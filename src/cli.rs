//! Command-line interface for rnt.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;

use crate::config::PackageManager;

/// Command-line arguments structure for rnt.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rnt: generate a ready-to-code Next.js project",
    long_about = None
)]
pub struct Args {
    /// Package name of the new project; asked interactively when omitted
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers (JSON object or YAML mapping) from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Skip the final confirmation and generate right away
    #[arg(short, long)]
    pub yes: bool,

    /// Print the commands, directories and files that would be produced, then exit
    #[arg(long)]
    pub dry_run: bool,

    /// Package manager used for scaffolding and installs
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
