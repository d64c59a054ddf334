use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Author identity extracted from the `[user]` section of a Git config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitUserConfig {
    /// Value of `user.name`
    pub author: Option<String>,
    /// Value of `user.email`
    pub email: Option<String>,
}

/// Parser state while scanning config sections
enum Section {
    Searching,
    InUser,
    Other,
}

/// Extracts `user.name` and `user.email` from a Git config file
///
/// A missing file is not an error: both fields come back unset and the
/// caller falls through to the next source. Any other read failure (for
/// example a permission fault) is fatal and propagates.
///
/// # Arguments
/// * `path` - Path to an INI-like Git config file
pub fn extract_user_config(path: &Path) -> Result<GitUserConfig> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(GitUserConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    Ok(parse_user_section(&String::from_utf8_lossy(&bytes)))
}

/// Best-effort scan of the `[user]` section
///
/// The section header is matched case-insensitively; only the first
/// `[user]` section is read, later ones are ignored. Blank lines and lines
/// starting with `#` or `;` are ignored. Inside the section, each line is
/// split on its first `=`; lines without one are skipped. Malformed input
/// never fails, it just yields unset fields.
fn parse_user_section(contents: &str) -> GitUserConfig {
    let mut state = Section::Searching;
    let mut seen_user_section = false;
    let mut config = GitUserConfig::default();

    for raw_line in contents.lines() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            state = if !seen_user_section && line.eq_ignore_ascii_case("[user]") {
                seen_user_section = true;
                Section::InUser
            } else {
                Section::Other
            };
            continue;
        }

        if let Section::InUser = state {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key.trim().to_ascii_lowercase().as_str() {
                "name" => config.author = Some(value.trim().to_string()),
                "email" => config.email = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    config
}
