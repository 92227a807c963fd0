//! Push notification channel family.
//!
//! Push bodies are plain text cut to the payload limit (`maxLength`,
//! 178 characters by default).

use tracing::{info, warn};

use courier_core::config::schema::{PushConfig, DEFAULT_PUSH_FROM};

use crate::base::{same_family, ChannelFactory, DeliveryService, Message, Sender};
use crate::formatting::push_body;

/// Family name shared by the factory and its products.
pub const CHANNEL: &str = "push";

/// Builds push messages, senders, and delivery services.
#[derive(Clone, Debug)]
pub struct PushFactory {
    app_id: String,
    max_length: usize,
    enabled: bool,
}

impl PushFactory {
    pub fn new() -> Self {
        Self::from_config(&PushConfig::default())
    }

    /// Factory built from the `channels.push` config section.
    pub fn from_config(config: &PushConfig) -> Self {
        let app_id = if config.app_id.is_empty() {
            DEFAULT_PUSH_FROM.to_string()
        } else {
            config.app_id.clone()
        };
        Self {
            app_id,
            max_length: config.max_length,
            enabled: config.enabled,
        }
    }
}

impl Default for PushFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelFactory for PushFactory {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn create_message(&self, content: &str) -> Box<dyn Message> {
        Box::new(PushMessage {
            content: content.to_string(),
            max_length: self.max_length,
        })
    }

    fn create_sender(&self) -> Box<dyn Sender> {
        Box::new(PushSender {
            app_id: self.app_id.clone(),
        })
    }

    fn create_delivery_service(&self) -> Box<dyn DeliveryService> {
        Box::new(PushDeliveryService {
            enabled: self.enabled,
        })
    }
}

struct PushMessage {
    content: String,
    max_length: usize,
}

impl Message for PushMessage {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn render(&self) -> String {
        push_body(&self.content, self.max_length)
    }
}

struct PushSender {
    app_id: String,
}

impl Sender for PushSender {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn from_address(&self) -> &str {
        &self.app_id
    }
}

struct PushDeliveryService {
    enabled: bool,
}

impl DeliveryService for PushDeliveryService {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn send(&self, recipient: &str, message: &dyn Message) -> bool {
        if !self.enabled {
            warn!(device = %recipient, "push channel disabled, message declined");
            return false;
        }
        if !same_family(CHANNEL, message) {
            warn!(
                device = %recipient,
                message_channel = %message.channel(),
                "push delivery refused a message from another channel"
            );
            return false;
        }

        info!(device = %recipient, body = %message.render(), "push notification sent");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_verbatim() {
        let msg = PushFactory::new().create_message("Invoice ready");
        assert_eq!(msg.render(), "Invoice ready");
    }

    #[test]
    fn test_long_content_truncated() {
        let long = "x".repeat(500);
        let msg = PushFactory::new().create_message(&long);
        let rendered = msg.render();
        assert_eq!(rendered.chars().count(), 178);
        assert!(rendered.ends_with("..."));
        assert_eq!(rendered, msg.render());
    }

    #[test]
    fn test_configured_limit() {
        let factory = PushFactory::from_config(&PushConfig {
            max_length: 10,
            ..PushConfig::default()
        });
        assert_eq!(factory.create_message("0123456789abc").render(), "0123456...");
    }

    #[test]
    fn test_tiny_limits_never_exceeded() {
        for limit in 0..=2 {
            let factory = PushFactory::from_config(&PushConfig {
                max_length: limit,
                ..PushConfig::default()
            });
            let rendered = factory.create_message("hello").render();
            assert_eq!(rendered.chars().count(), limit);
            assert_eq!(rendered, &"hello"[..limit]);
        }
    }

    #[test]
    fn test_sender_app_id() {
        assert_eq!(PushFactory::new().create_sender().from_address(), "correiodigital");
    }

    #[test]
    fn test_products_are_push_family() {
        let factory = PushFactory::new();
        assert_eq!(factory.create_message("x").channel(), "push");
        assert_eq!(factory.create_sender().channel(), "push");
        assert_eq!(factory.create_delivery_service().channel(), "push");
    }

    #[test]
    fn test_send_and_disabled() {
        let factory = PushFactory::new();
        let msg = factory.create_message("ping");
        assert!(factory.create_delivery_service().send("device-1", msg.as_ref()));

        let disabled = PushFactory::from_config(&PushConfig {
            enabled: false,
            ..PushConfig::default()
        });
        let msg = disabled.create_message("ping");
        assert!(!disabled.create_delivery_service().send("device-1", msg.as_ref()));
    }
}
