use clap::Parser;
use colored::Colorize;

use stencil::cli::Cli;
use stencil::environment::Environment;
use stencil::{resolver, ResolvedParams, Result};

const USAGE: &str = "\
usage: stencil [path] [options]

options:
    --name <name>        project name, defaults to the last segment of path
    --author <author>    project author
    --email <email>      author email address
    --async              generate an async project skeleton
    -f, --force          overwrite existing files in the target directory
    -v, --version        print version information
    -h, --help           print this message";

// Main
fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "error:".red(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Environment::capture()?;
    let params = resolver::resolve(cli, &env)?;

    if params.version {
        println!("stencil {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if params.help {
        println!("{USAGE}");
        return Ok(());
    }

    show_resolved_params(&params);
    Ok(())
}

// Hand-off point for the scaffolding engine; for now the resolved
// parameters are echoed back to the user.
fn show_resolved_params(params: &ResolvedParams) {
    println!("{} {}", "scaffolding:".green(), params.name);
    println!("{} {} <{}>", "author:".blue(), params.author, params.email);
    println!("{} {}", "target:".blue(), params.path.display());

    if params.r#async {
        println!("{}", "async skeleton enabled".blue());
    }
    if params.force {
        println!("{}", "force enabled, existing files may be overwritten".yellow());
    }
}
