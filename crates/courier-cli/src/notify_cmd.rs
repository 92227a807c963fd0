//! `courier notify` — dispatch one notification per recipient.
//!
//! Each recipient gets an independent single attempt on a blocking task;
//! reports are printed in the order recipients were given.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use courier_channels::factory::dispatch_service_for;
use courier_channels::{ChannelKind, DispatchReport, DispatchService};
use courier_core::config::Config;

use crate::helpers;

/// Run the notify command. Fails if any delivery was declined.
pub async fn run(
    config: &Config,
    channel: Option<&str>,
    recipients: Vec<String>,
    content: &str,
    json: bool,
) -> Result<()> {
    let kind = resolve_kind(config, channel)?;
    let service = Arc::new(
        dispatch_service_for(kind, &config.channels)
            .with_context(|| format!("failed to set up the {kind} channel"))?,
    );

    info!(channel = %kind, recipients = recipients.len(), "dispatching");
    let reports = dispatch_all(service, recipients, content).await?;

    for report in &reports {
        if json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            helpers::print_report(report);
        }
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} notification(s) failed", reports.len());
    }
    Ok(())
}

/// Pick the channel from the flag, falling back to `dispatch.defaultChannel`.
fn resolve_kind(config: &Config, channel: Option<&str>) -> Result<ChannelKind> {
    let name = channel.unwrap_or(&config.dispatch.default_channel);
    name.parse::<ChannelKind>()
        .with_context(|| format!("invalid channel '{name}'"))
}

/// Notify every recipient concurrently, returning reports in input order.
///
/// Concurrent counterpart of `DispatchService::notify_many`: one blocking
/// task per recipient, each calling `notify` on the shared service.
async fn dispatch_all(
    service: Arc<DispatchService>,
    recipients: Vec<String>,
    content: &str,
) -> Result<Vec<DispatchReport>> {
    let mut handles = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        let svc = service.clone();
        let body = content.to_string();
        handles.push(tokio::task::spawn_blocking(move || svc.notify(&recipient, &body)));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await.context("dispatch task panicked")?);
    }
    Ok(reports)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
