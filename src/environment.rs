use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::error::Result;

/// Read-only snapshot of the process environment
///
/// Captured once at startup so parameter resolution never touches ambient
/// global state directly.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
    /// Working directory at capture time
    pub cwd: PathBuf,
    /// User home directory, if one could be determined
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Captures the environment of the running process
    pub fn capture() -> Result<Self> {
        Ok(Self {
            vars: env::vars().collect(),
            cwd: env::current_dir()?,
            home: dirs::home_dir(),
        })
    }

    /// Builds a snapshot from explicit parts, used by tests
    pub fn from_parts(
        vars: HashMap<String, String>,
        cwd: PathBuf,
        home: Option<PathBuf>,
    ) -> Self {
        Self { vars, cwd, home }
    }

    /// Returns the value of an environment variable, if set
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Path of the Git config inside the repository at the working directory
    pub fn local_git_config(&self) -> PathBuf {
        self.cwd.join(".git").join("config")
    }

    /// Path of the user-wide Git config
    pub fn global_git_config(&self) -> PathBuf {
        self.home
            .clone()
            .unwrap_or_else(|| PathBuf::from("/"))
            .join(".gitconfig")
    }
}
