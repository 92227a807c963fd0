//! Config loader — reads `~/.courier/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.courier/config.json`
//! 3. Environment variables `COURIER_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

/// Load config from a specific file path.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;

    std::fs::write(&config_path, json)
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `COURIER_<SECTION>__<FIELD>` (double underscore as delimiter).
///
/// Supported overrides:
/// - `COURIER_DISPATCH__DEFAULT_CHANNEL` → `dispatch.default_channel`
/// - `COURIER_CHANNELS__<NAME>__ENABLED` → `channels.<name>.enabled`
/// - `COURIER_CHANNELS__EMAIL__FROM_ADDRESS` → `channels.email.from_address`
/// - `COURIER_CHANNELS__SMS__FROM_NUMBER` → `channels.sms.from_number`
/// - `COURIER_CHANNELS__PUSH__APP_ID` → `channels.push.app_id`
/// - `COURIER_CHANNELS__PUSH__MAX_LENGTH` → `channels.push.max_length`
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(val) = std::env::var("COURIER_DISPATCH__DEFAULT_CHANNEL") {
        config.dispatch.default_channel = val;
    }

    // Email
    apply_enabled_env(&mut config.channels.email.enabled, "EMAIL");
    if let Ok(val) = std::env::var("COURIER_CHANNELS__EMAIL__FROM_ADDRESS") {
        config.channels.email.from_address = val;
    }

    // SMS
    apply_enabled_env(&mut config.channels.sms.enabled, "SMS");
    if let Ok(val) = std::env::var("COURIER_CHANNELS__SMS__FROM_NUMBER") {
        config.channels.sms.from_number = val;
    }

    // Push
    apply_enabled_env(&mut config.channels.push.enabled, "PUSH");
    if let Ok(val) = std::env::var("COURIER_CHANNELS__PUSH__APP_ID") {
        config.channels.push.app_id = val;
    }
    if let Ok(val) = std::env::var("COURIER_CHANNELS__PUSH__MAX_LENGTH") {
        if let Ok(n) = val.parse::<usize>() {
            config.channels.push.max_length = n;
        }
    }

    config
}

/// Apply the `ENABLED` override for a single channel family.
fn apply_enabled_env(enabled: &mut bool, name: &str) {
    if let Ok(val) = std::env::var(format!("COURIER_CHANNELS__{name}__ENABLED")) {
        *enabled = val == "true" || val == "1";
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
