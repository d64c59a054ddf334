use std::path::PathBuf;

use clap::Parser;

/// CLI arguments parser using `clap`
///
/// Help and version handling is disabled on the parser itself so that
/// `--help` and `--version` land in the parsed record as plain flags,
/// to be acted on after parameter resolution.
#[derive(Parser, Debug)]
#[command(name = "stencil", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Target directory for the new project
    pub path: Option<PathBuf>,

    /// Project name, defaults to the last segment of the target path
    #[arg(long)]
    pub name: Option<String>,

    /// Project author
    #[arg(long)]
    pub author: Option<String>,

    /// Author email address
    #[arg(long)]
    pub email: Option<String>,

    /// Prints version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Prints usage information
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Generates an async project skeleton
    #[arg(long = "async")]
    pub r#async: bool,

    /// Overwrites existing files in the target directory
    #[arg(short = 'f', long)]
    pub force: bool,
}
