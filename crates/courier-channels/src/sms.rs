//! SMS channel family.
//!
//! SMS bodies are plain text: the message renders its content unchanged.

use tracing::{info, warn};

use courier_core::config::schema::{SmsConfig, DEFAULT_SMS_FROM};

use crate::base::{same_family, ChannelFactory, DeliveryService, Message, Sender};

/// Family name shared by the factory and its products.
pub const CHANNEL: &str = "sms";

/// Builds SMS messages, senders, and delivery services.
#[derive(Clone, Debug)]
pub struct SmsFactory {
    from_number: String,
    enabled: bool,
}

impl SmsFactory {
    pub fn new() -> Self {
        Self::from_config(&SmsConfig::default())
    }

    /// Factory built from the `channels.sms` config section.
    pub fn from_config(config: &SmsConfig) -> Self {
        let from_number = if config.from_number.is_empty() {
            DEFAULT_SMS_FROM.to_string()
        } else {
            config.from_number.clone()
        };
        Self {
            from_number,
            enabled: config.enabled,
        }
    }
}

impl Default for SmsFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelFactory for SmsFactory {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn create_message(&self, content: &str) -> Box<dyn Message> {
        Box::new(SmsMessage {
            content: content.to_string(),
        })
    }

    fn create_sender(&self) -> Box<dyn Sender> {
        Box::new(SmsSender {
            from_number: self.from_number.clone(),
        })
    }

    fn create_delivery_service(&self) -> Box<dyn DeliveryService> {
        Box::new(SmsDeliveryService {
            enabled: self.enabled,
        })
    }
}

struct SmsMessage {
    content: String,
}

impl Message for SmsMessage {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

struct SmsSender {
    from_number: String,
}

impl Sender for SmsSender {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn from_address(&self) -> &str {
        &self.from_number
    }
}

struct SmsDeliveryService {
    enabled: bool,
}

impl DeliveryService for SmsDeliveryService {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn send(&self, recipient: &str, message: &dyn Message) -> bool {
        if !self.enabled {
            warn!(to = %recipient, "sms channel disabled, message declined");
            return false;
        }
        if !same_family(CHANNEL, message) {
            warn!(
                to = %recipient,
                message_channel = %message.channel(),
                "sms delivery refused a message from another channel"
            );
            return false;
        }

        let body = message.render();
        info!(to = %recipient, chars = body.chars().count(), body = %body, "sms sent");
        true
    }
}
