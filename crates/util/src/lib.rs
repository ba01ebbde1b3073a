pub mod config;

use std::{env, path::Path};

pub use config::{AppConfig, ConfigError, Environment};

/// Environment assumed when `APP_ENV` is not set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Loads environment variables from a dotenv file when available.
///
/// `APP_ENV_FILE` names an explicit file; otherwise `.env` is searched for
/// from the working directory upwards. Missing files are ignored so the
/// function is safe in production builds where dotenv files are not deployed.
/// Variables already present in the process environment are never overridden.
pub fn load_env_file() {
    match env::var_os("APP_ENV_FILE") {
        Some(path) => {
            let _ = load_env_file_from(path);
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }
}

/// Loads environment variables from the dotenv file at `path`.
pub fn load_env_file_from(path: impl AsRef<Path>) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

/// Process environment lock shared by every test that reads or writes env vars.
#[cfg(test)]
pub(crate) static ENV_GUARD: std::sync::LazyLock<std::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(()));
