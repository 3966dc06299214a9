//! Runtime settings resolved from flags, environment and `.env`.

use log::debug;
use std::path::PathBuf;

use corretor_core::JsonRuleStore;

/// Name of the environment variable that points at the rules file.
pub const RULES_FILE_ENV: &str = "CORRETOR_RULES_FILE";

/// Loads `.env` from the working directory, if present. Existing variables win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Warning: ignoring malformed .env file: {}", e),
    }
}

/// The rules file to use: the explicit flag / env value, else the platform default.
pub fn resolve_rules_path(explicit: Option<PathBuf>) -> PathBuf {
    let path = explicit.unwrap_or_else(JsonRuleStore::default_path);
    debug!("Using rules file {}", path.display());
    path
}
