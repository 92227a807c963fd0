//! Email channel family.
//!
//! - `EmailMessage` wraps content in the HTML envelope
//! - `EmailSender` reports the configured origin address
//! - `EmailDeliveryService` hands the rendered body to the mail transport
//!
//! The transport is modelled as a structured log event; no SMTP session is
//! opened.

use tracing::{info, warn};

use courier_core::config::schema::{EmailConfig, DEFAULT_EMAIL_FROM};

use crate::base::{same_family, ChannelFactory, DeliveryService, Message, Sender};
use crate::formatting::html_envelope;

/// Family name shared by the factory and its products.
pub const CHANNEL: &str = "email";

// ─────────────────────────────────────────────
// Factory
// ─────────────────────────────────────────────

/// Builds email messages, senders, and delivery services.
#[derive(Clone, Debug)]
pub struct EmailFactory {
    from_address: String,
    enabled: bool,
}

impl EmailFactory {
    /// Factory with the default origin address and delivery enabled.
    pub fn new() -> Self {
        Self::from_config(&EmailConfig::default())
    }

    /// Factory built from the `channels.email` config section.
    ///
    /// An empty `from_address` falls back to the default origin.
    pub fn from_config(config: &EmailConfig) -> Self {
        let from_address = if config.from_address.is_empty() {
            DEFAULT_EMAIL_FROM.to_string()
        } else {
            config.from_address.clone()
        };
        Self {
            from_address,
            enabled: config.enabled,
        }
    }
}

impl Default for EmailFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelFactory for EmailFactory {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn create_message(&self, content: &str) -> Box<dyn Message> {
        Box::new(EmailMessage {
            content: content.to_string(),
        })
    }

    fn create_sender(&self) -> Box<dyn Sender> {
        Box::new(EmailSender {
            from_address: self.from_address.clone(),
        })
    }

    fn create_delivery_service(&self) -> Box<dyn DeliveryService> {
        Box::new(EmailDeliveryService {
            enabled: self.enabled,
        })
    }
}

// ─────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────

struct EmailMessage {
    content: String,
}

impl Message for EmailMessage {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn render(&self) -> String {
        html_envelope(&self.content)
    }
}

struct EmailSender {
    from_address: String,
}

impl Sender for EmailSender {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn from_address(&self) -> &str {
        &self.from_address
    }
}

struct EmailDeliveryService {
    enabled: bool,
}

impl DeliveryService for EmailDeliveryService {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn send(&self, recipient: &str, message: &dyn Message) -> bool {
        if !self.enabled {
            warn!(to = %recipient, "email channel disabled, message declined");
            return false;
        }
        if !same_family(CHANNEL, message) {
            warn!(
                to = %recipient,
                message_channel = %message.channel(),
                "email delivery refused a message from another channel"
            );
            return false;
        }

        let body = message.render();
        info!(to = %recipient, body = %body, "email sent");
        true
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sms::SmsFactory;

    #[test]
    fn test_render_wraps_in_envelope() {
        let msg = EmailFactory::new().create_message("Invoice ready");
        assert_eq!(msg.render(), "<html><body>Invoice ready</body></html>");
    }

    #[test]
    fn test_render_is_idempotent() {
        let msg = EmailFactory::new().create_message("Sua fatura chegou!");
        assert_eq!(msg.render(), msg.render());
    }

    #[test]
    fn test_default_sender_address() {
        let sender = EmailFactory::new().create_sender();
        assert_eq!(sender.from_address(), "contato@correiodigital.com");
    }

    #[test]
    fn test_configured_sender_address() {
        let config = EmailConfig {
            enabled: true,
            from_address: "avisos@example.com".into(),
        };
        let sender = EmailFactory::from_config(&config).create_sender();
        assert_eq!(sender.from_address(), "avisos@example.com");
    }

    #[test]
    fn test_empty_configured_address_falls_back() {
        let config = EmailConfig {
            enabled: true,
            from_address: String::new(),
        };
        let sender = EmailFactory::from_config(&config).create_sender();
        assert_eq!(sender.from_address(), DEFAULT_EMAIL_FROM);
    }

    #[test]
    fn test_products_are_email_family() {
        let factory = EmailFactory::new();
        for _ in 0..3 {
            assert_eq!(factory.create_message("x").channel(), "email");
            assert_eq!(factory.create_sender().channel(), "email");
            assert_eq!(factory.create_delivery_service().channel(), "email");
        }
    }

    #[test]
    fn test_send_accepts_email_message() {
        let factory = EmailFactory::new();
        let msg = factory.create_message("hello");
        assert!(factory
            .create_delivery_service()
            .send("user@example.com", msg.as_ref()));
    }

    #[test]
    fn test_send_declines_when_disabled() {
        let config = EmailConfig {
            enabled: false,
            ..EmailConfig::default()
        };
        let factory = EmailFactory::from_config(&config);
        let msg = factory.create_message("hello");
        assert!(!factory
            .create_delivery_service()
            .send("user@example.com", msg.as_ref()));
    }

    #[test]
    fn test_send_refuses_sms_message() {
        let sms_msg = SmsFactory::new().create_message("hello");
        let delivery = EmailFactory::new().create_delivery_service();
        assert!(!delivery.send("user@example.com", sms_msg.as_ref()));
    }
}
