use std::path::PathBuf;

use serde::Serialize;

/// Parameters handed to the scaffolding engine.
///
/// Built once at process start by [`crate::resolver::resolve`] and immutable
/// thereafter. Serializable so the templating engine can use it directly as
/// a template context.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    /// Project name, defaults to the last segment of `path`
    pub name: String,
    /// Project author, always non-empty
    pub author: String,
    /// Author email address, always non-empty
    pub email: String,
    /// Target directory for the new project
    pub path: PathBuf,
    /// Print version information instead of scaffolding
    pub version: bool,
    /// Print usage information instead of scaffolding
    pub help: bool,
    /// Generate an async project skeleton
    pub r#async: bool,
    /// Overwrite existing files in the target directory
    pub force: bool,
}
