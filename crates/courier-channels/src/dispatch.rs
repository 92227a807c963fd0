//! Dispatch Service — drives one delivery attempt through a channel factory.
//!
//! For each `notify` call the service:
//! 1. asks the factory for a `Message` built from the content
//! 2. asks for a `Sender` and logs its origin address
//! 3. asks for a `DeliveryService` and calls `send` once
//! 4. returns a `DispatchReport` carrying the outcome
//!
//! A declined send is reported as `DeliveryOutcome::Failed`; it is never
//! retried and never turned into an error.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::base::ChannelFactory;
use crate::error::DispatchError;

// ─────────────────────────────────────────────
// Report types
// ─────────────────────────────────────────────

/// Result of a single delivery attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
}

/// What happened on one `notify` call.
#[derive(Clone, Debug, Serialize)]
pub struct DispatchReport {
    /// Channel family that carried (or declined) the message.
    pub channel: String,
    pub recipient: String,
    /// Sender origin at the time of dispatch.
    pub from_address: String,
    /// Body as rendered by the channel's message.
    pub rendered: String,
    pub outcome: DeliveryOutcome,
    pub timestamp: DateTime<Utc>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.outcome == DeliveryOutcome::Delivered
    }
}

// ─────────────────────────────────────────────
// DispatchService
// ─────────────────────────────────────────────

/// Notification client bound to exactly one channel factory.
///
/// The factory is fixed at construction. The service holds no other state,
/// so a shared `Arc<DispatchService>` can serve concurrent callers.
pub struct DispatchService {
    factory: Arc<dyn ChannelFactory>,
}

impl DispatchService {
    /// Bind a service to `factory`.
    ///
    /// The factory is probed once: it must report a non-empty channel name
    /// and every product it builds must belong to that channel.
    pub fn new(factory: Arc<dyn ChannelFactory>) -> Result<Self, DispatchError> {
        let channel = factory.channel().to_string();
        if channel.is_empty() {
            return Err(DispatchError::EmptyChannelName);
        }

        check_family(&channel, "message", factory.create_message("").channel())?;
        check_family(&channel, "sender", factory.create_sender().channel())?;
        check_family(
            &channel,
            "delivery service",
            factory.create_delivery_service().channel(),
        )?;

        debug!(channel = %channel, "dispatch service ready");
        Ok(Self { factory })
    }

    /// Channel family of the bound factory.
    pub fn channel(&self) -> &str {
        self.factory.channel()
    }

    /// Render `content` and attempt a single delivery to `recipient`.
    pub fn notify(&self, recipient: &str, content: &str) -> DispatchReport {
        let channel = self.factory.channel();

        let message = self.factory.create_message(content);
        let sender = self.factory.create_sender();
        let delivery = self.factory.create_delivery_service();

        let from_address = sender.from_address().to_string();
        debug!(channel = %channel, from = %from_address, to = %recipient, "dispatching notification");

        let delivered = delivery.send(recipient, message.as_ref());
        let outcome = if delivered {
            info!(channel = %channel, to = %recipient, "notification delivered");
            DeliveryOutcome::Delivered
        } else {
            warn!(channel = %channel, to = %recipient, "notification delivery failed");
            DeliveryOutcome::Failed
        };

        DispatchReport {
            channel: channel.to_string(),
            recipient: recipient.to_string(),
            from_address,
            rendered: message.render(),
            outcome,
            timestamp: Utc::now(),
        }
    }

    /// Notify each recipient independently, in order, on the calling thread.
    ///
    /// Concurrent callers share the service behind an `Arc` and call
    /// [`notify`](Self::notify) per task instead.
    pub fn notify_many<I, S>(&self, recipients: I, content: &str) -> Vec<DispatchReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        recipients
            .into_iter()
            .map(|r| self.notify(r.as_ref(), content))
            .collect()
    }
}

impl fmt::Debug for DispatchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchService")
            .field("channel", &self.channel())
            .finish()
    }
}

fn check_family(channel: &str, product: &'static str, found: &str) -> Result<(), DispatchError> {
    if found == channel {
        Ok(())
    } else {
        Err(DispatchError::FamilyMismatch {
            factory: channel.to_string(),
            product,
            found: found.to_string(),
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
