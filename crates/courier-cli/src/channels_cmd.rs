//! `courier channels` — show every channel family with its origin identity.

use anyhow::Result;
use colored::Colorize;

use courier_channels::{factory_for, ChannelKind};
use courier_core::config::Config;

use crate::helpers;

/// Row for the status table.
struct ChannelRow {
    name: ChannelKind,
    enabled: bool,
    origin: String,
    is_default: bool,
}

fn rows(config: &Config) -> Vec<ChannelRow> {
    let ch = &config.channels;
    let default = config.dispatch.default_channel.parse::<ChannelKind>().ok();

    ChannelKind::ALL
        .iter()
        .map(|&kind| {
            let enabled = match kind {
                ChannelKind::Email => ch.email.enabled,
                ChannelKind::Sms => ch.sms.enabled,
                ChannelKind::Push => ch.push.enabled,
            };
            ChannelRow {
                name: kind,
                enabled,
                origin: factory_for(kind, ch).create_sender().from_address().to_string(),
                is_default: default == Some(kind),
            }
        })
        .collect()
}

/// `courier channels`
pub fn run(config: &Config) -> Result<()> {
    println!();
    println!("{}", "  Channel Families".cyan().bold());
    println!();

    // Header
    println!(
        "  {:<10} {:<10} {}",
        "Channel".bold(),
        "Enabled".bold(),
        "Origin".bold(),
    );
    println!("  {}", "─".repeat(50));

    for row in rows(config) {
        let origin = if row.is_default {
            format!("{} {}", row.origin, "(default)".dimmed())
        } else {
            row.origin
        };
        println!(
            "  {:<10} {:<10} {}",
            row.name.as_str(),
            helpers::flag(row.enabled),
            origin
        );
    }

    println!();
    Ok(())
}
