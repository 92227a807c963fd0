//! Utility helpers — data directory resolution and string shortening.

use std::path::PathBuf;

/// Get the Courier data directory (e.g. `~/.courier/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".courier")
}

/// Truncate a string to `max_len` characters, adding "..." if truncated.
/// Unicode-safe. Limits below 3 cut without the suffix.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len < 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Mask a secret for display, keeping only its length visible.
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
