// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--content`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_FOLIO_CONFIG_DIR`, `ICED_FOLIO_CONTENT`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.content_path);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFolio";

/// Portfolio content file looked up inside the config directory.
pub const CONTENT_FILE: &str = "portfolio.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

/// Environment variable pointing at a portfolio content file.
pub const ENV_CONTENT: &str = "ICED_FOLIO_CONTENT";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the content file (set once at startup).
static CLI_CONTENT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config directory and content file.
///
/// Later calls are ignored; the first initialization wins.
pub fn init_cli_overrides(config_dir: Option<String>, content: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("CLI config dir override already initialized");
    }
    if CLI_CONTENT.set(content.map(PathBuf::from)).is_err() {
        log::warn!("CLI content override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_content() -> Option<PathBuf> {
    CLI_CONTENT.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml` and, optionally, `portfolio.toml`.
///
/// - Linux: `~/.config/IcedFolio/`
/// - macOS: `~/Library/Application Support/IcedFolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedFolio\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the portfolio content file to load, if any.
///
/// Unlike the config directory, there is no platform default: `None` means
/// the embedded sample portfolio is used.
pub fn get_content_path() -> Option<PathBuf> {
    get_content_path_with_override(None)
}

/// Returns the portfolio content file with an optional override.
pub fn get_content_path_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_content() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONTENT) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    get_app_config_dir()
        .map(|dir| dir.join(CONTENT_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_selects_content_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONTENT, "/portfolio/site.toml");

        let result = get_content_path();
        assert_eq!(result, Some(PathBuf::from("/portfolio/site.toml")));

        std::env::remove_var(ENV_CONTENT);
    }

    #[test]
    fn missing_content_file_falls_back_to_embedded() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        std::env::remove_var(ENV_CONTENT);
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        assert_eq!(get_content_path(), None);

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
