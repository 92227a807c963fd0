//! Configuration schema — typed view of `~/.courier/config.json`.
//!
//! Hierarchy: `Config` → `ChannelsConfig` (`EmailConfig`, `SmsConfig`,
//! `PushConfig`), `DispatchConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

/// Origin address used by the email family unless overridden.
pub const DEFAULT_EMAIL_FROM: &str = "contato@correiodigital.com";

/// Origin number used by the SMS family unless overridden.
pub const DEFAULT_SMS_FROM: &str = "+5561999999999";

/// Origin app identifier used by the push family unless overridden.
pub const DEFAULT_PUSH_FROM: &str = "correiodigital";

/// Maximum characters in a push notification body.
pub const DEFAULT_PUSH_MAX_LENGTH: usize = 178;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.courier/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub channels: ChannelsConfig,
    pub dispatch: DispatchConfig,
}

// ─────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────

/// All channel family configurations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelsConfig {
    pub email: EmailConfig,
    pub sms: SmsConfig,
    pub push: PushConfig,
}

/// Email family config.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailConfig {
    /// When false, the email delivery service declines every message.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Origin address reported by the email sender.
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from_address: DEFAULT_EMAIL_FROM.to_string(),
        }
    }
}

/// SMS family config.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Origin phone number reported by the SMS sender.
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from_number: DEFAULT_SMS_FROM.to_string(),
        }
    }
}

/// Push notification family config.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// App identifier reported by the push sender.
    pub app_id: String,
    /// Rendered bodies longer than this are truncated with "...".
    pub max_length: usize,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            app_id: DEFAULT_PUSH_FROM.to_string(),
            max_length: DEFAULT_PUSH_MAX_LENGTH,
        }
    }
}

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────

/// Dispatch defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DispatchConfig {
    /// Channel used by `courier notify` when `--channel` is omitted.
    pub default_channel: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_channel: "email".to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.channels.email.enabled);
        assert_eq!(config.channels.email.from_address, DEFAULT_EMAIL_FROM);
        assert_eq!(config.channels.sms.from_number, DEFAULT_SMS_FROM);
        assert_eq!(config.channels.push.app_id, DEFAULT_PUSH_FROM);
        assert_eq!(config.channels.push.max_length, 178);
        assert_eq!(config.dispatch.default_channel, "email");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "channels": { "sms": { "enabled": false } } }"#,
        )
        .unwrap();
        assert!(!config.channels.sms.enabled);
        assert_eq!(config.channels.sms.from_number, DEFAULT_SMS_FROM);
        assert!(config.channels.email.enabled);
    }

    #[test]
    fn test_missing_channel_sections_use_defaults() {
        let config: Config = serde_json::from_str(r#"{ "channels": {} }"#).unwrap();
        assert_eq!(config.channels.email.from_address, DEFAULT_EMAIL_FROM);
        assert_eq!(config.channels.sms.from_number, DEFAULT_SMS_FROM);
        assert_eq!(config.channels.push.max_length, DEFAULT_PUSH_MAX_LENGTH);
    }

    #[test]
    fn test_serializes_camel_case() {
        let raw = serde_json::to_value(Config::default()).unwrap();
        assert!(raw["channels"]["email"].get("fromAddress").is_some());
        assert!(raw["channels"]["push"].get("maxLength").is_some());
        assert!(raw["dispatch"].get("defaultChannel").is_some());
        assert!(raw["dispatch"].get("default_channel").is_none());
    }
}
