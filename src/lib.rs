//! Parameter resolution for the `stencil` scaffolding CLI.
//!
//! Defaults for project name, author, email and target path are derived by
//! layering, in priority order: explicit CLI flags, environment variables,
//! the local repository Git config, the global Git config and finally a
//! literal `"unknown"` fallback.

pub mod cli;
pub mod environment;
pub mod error;
pub mod gitconfig;
pub mod params;
pub mod resolver;

pub use error::{AppError, Result};
pub use params::ResolvedParams;
