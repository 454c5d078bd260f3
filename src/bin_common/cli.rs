//! CLI utilities for binaries
//!
//! Resolves and loads the `.env` file holding the bot credentials.

use std::path::PathBuf;
use tracing::{debug, info};

/// Which env file to load
#[derive(Debug, Clone)]
pub enum EnvFile {
    /// `.env` in the working directory, unless overridden by `MOEX_BOT_ENV_FILE`
    Default,
    /// Explicit path
    Custom(String),
}

impl EnvFile {
    /// Path used when no override is set
    pub fn default_path(&self) -> &str {
        match self {
            EnvFile::Default => ".env",
            EnvFile::Custom(path) => path,
        }
    }

    /// Environment variable that overrides the path
    pub fn env_var_name(&self) -> &str {
        "MOEX_BOT_ENV_FILE"
    }

    /// Resolve the path to load
    ///
    /// A custom path always wins; otherwise the override variable, then `.env`.
    pub fn resolve(&self) -> PathBuf {
        match self {
            EnvFile::Custom(path) => PathBuf::from(path),
            EnvFile::Default => std::env::var(self.env_var_name())
                .unwrap_or_else(|_| self.default_path().to_string())
                .into(),
        }
    }
}

/// Load variables from the env file into the process environment
///
/// A missing file is not an error: variables may already be set by the
/// service manager. Variables already present are not overwritten.
/// Returns the path that was loaded, if any.
pub fn load_env_file(env_file: EnvFile) -> Option<PathBuf> {
    let path = env_file.resolve();
    match dotenv::from_path(&path) {
        Ok(()) => {
            info!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) => {
            debug!("No env file loaded from {}: {}", path.display(), e);
            None
        }
    }
}
