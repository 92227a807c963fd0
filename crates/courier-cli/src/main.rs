//! Courier CLI — entry point.
//!
//! # Commands
//!
//! - `courier notify [-c CHANNEL] -t RECIPIENT [-t RECIPIENT ...] CONTENT` — dispatch a notification
//! - `courier channels` — show channel families and their origin identities
//! - `courier user --name .. --email .. --password .. [--bio ..]` — build a user record
//! - `courier init` — write the default config file

mod channels_cmd;
mod helpers;
mod init;
mod notify_cmd;
mod user_cmd;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use courier_core::config::load_config;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Courier — send one notification through any channel family
#[derive(Parser)]
#[command(name = "courier", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a notification to one or more recipients
    Notify {
        /// Channel family (email, sms, push). Defaults to `dispatch.defaultChannel`.
        #[arg(short, long)]
        channel: Option<String>,

        /// Recipient address, number, or device id (repeat `--to` for more)
        #[arg(short = 't', long = "to", required = true, num_args = 1, action = ArgAction::Append)]
        recipients: Vec<String>,

        /// Raw message content
        content: String,

        /// Print one JSON report per line instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show channel families and their configuration
    Channels,

    /// Build a user record step by step and print it
    User {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        /// Print the user as JSON (password omitted)
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write the default configuration file
    Init,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    match cli.command {
        Commands::Notify {
            channel,
            recipients,
            content,
            json,
        } => {
            let config = load_config(None);
            notify_cmd::run(&config, channel.as_deref(), recipients, &content, json).await
        }
        Commands::Channels => channels_cmd::run(&load_config(None)),
        Commands::User {
            name,
            email,
            password,
            bio,
            json,
        } => user_cmd::run(
            user_cmd::UserArgs {
                name,
                email,
                password,
                bio,
            },
            json,
        ),
        Commands::Init => init::run(None),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("courier=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_notify_multiple_recipients() {
        let cli = Cli::try_parse_from([
            "courier", "notify", "-c", "sms", "--to", "+5561999999999", "-t", "+5561888888888",
            "Invoice ready",
        ])
        .unwrap();
        match cli.command {
            Commands::Notify {
                channel,
                recipients,
                content,
                json,
            } => {
                assert_eq!(channel.as_deref(), Some("sms"));
                assert_eq!(recipients, vec!["+5561999999999", "+5561888888888"]);
                assert_eq!(content, "Invoice ready");
                assert!(!json);
            }
            _ => panic!("expected notify"),
        }
    }

    #[test]
    fn test_parse_notify_content_after_recipient_is_not_a_recipient() {
        let cli = Cli::try_parse_from(["courier", "notify", "--to", "a", "Invoice ready"]).unwrap();
        match cli.command {
            Commands::Notify {
                recipients,
                content,
                ..
            } => {
                assert_eq!(recipients, vec!["a"]);
                assert_eq!(content, "Invoice ready");
            }
            _ => panic!("expected notify"),
        }
    }

    #[test]
    fn test_parse_notify_requires_recipient() {
        assert!(Cli::try_parse_from(["courier", "notify", "hello"]).is_err());
    }

    #[test]
    fn test_parse_global_logs_flag() {
        let cli = Cli::try_parse_from(["courier", "channels", "--logs"]).unwrap();
        assert!(cli.logs);
    }
}
