//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use courier_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Default channel: {}", cfg.dispatch.default_channel);
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{get_config_path, load_config, save_config};
pub use schema::{ChannelsConfig, Config, EmailConfig, PushConfig, SmsConfig};
