use std::path::Path;

use crate::cli::Cli;
use crate::environment::Environment;
use crate::error::Result;
use crate::gitconfig::{self, GitUserConfig};
use crate::params::ResolvedParams;

/// Final fallback when no source yields an author or email
const FALLBACK: &str = "unknown";

/// Resolves the scaffolding parameters from CLI arguments, the environment
/// snapshot and the local and global Git configs
///
/// Explicit flags win over every other source. The Git config files are
/// read here, once; a missing file contributes nothing while any other
/// read failure aborts resolution.
pub fn resolve(cli: Cli, env: &Environment) -> Result<ResolvedParams> {
    let local = gitconfig::extract_user_config(&env.local_git_config())?;
    let global = gitconfig::extract_user_config(&env.global_git_config())?;

    let path = cli.path.unwrap_or_else(|| env.cwd.clone());
    let name = cli.name.unwrap_or_else(|| basename(&path));
    let author = cli
        .author
        .unwrap_or_else(|| default_author(env, &local, &global));
    let email = cli
        .email
        .unwrap_or_else(|| default_email(env, &local, &global));

    Ok(ResolvedParams {
        name,
        author,
        email,
        path,
        version: cli.version,
        help: cli.help,
        r#async: cli.r#async,
        force: cli.force,
    })
}

/// Computes the default author by walking the candidate sources in order
pub fn default_author(
    env: &Environment,
    local: &GitUserConfig,
    global: &GitUserConfig,
) -> String {
    first_non_empty([
        env.var("CARGO_NAME"),
        env.var("GIT_AUTHOR_NAME"),
        env.var("GIT_COMMITTER_NAME"),
        local.author.as_deref(),
        global.author.as_deref(),
        env.var("USER"),
        env.var("USERNAME"),
        env.var("NAME"),
    ])
    .unwrap_or_else(|| FALLBACK.to_string())
}

/// Computes the default email by walking the candidate sources in order
pub fn default_email(
    env: &Environment,
    local: &GitUserConfig,
    global: &GitUserConfig,
) -> String {
    first_non_empty([
        env.var("CARGO_EMAIL"),
        env.var("GIT_AUTHOR_EMAIL"),
        env.var("GIT_COMMITTER_EMAIL"),
        local.email.as_deref(),
        global.email.as_deref(),
        env.var("EMAIL"),
    ])
    .unwrap_or_else(|| FALLBACK.to_string())
}

/// First candidate that is set and non-empty
fn first_non_empty<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Last segment of a path, falling back to the path itself for paths
/// without a final component (for example `/`)
fn basename(path: &Path) -> String {
    path.file_name()
        .map(|segment| segment.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
