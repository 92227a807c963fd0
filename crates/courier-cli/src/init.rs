//! `courier init` — create `~/.courier/config.json` with defaults.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use courier_core::config::{get_config_path, save_config, Config};

/// Write the default config unless one already exists.
///
/// Returns `true` when a new file was written.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))?;
    Ok(true)
}

/// Run the init command. `path` overrides the default location.
pub fn run(path: Option<&Path>) -> Result<()> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    println!();
    if init_config(&config_path)? {
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    }
    println!();
    Ok(())
}
