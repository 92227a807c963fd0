//! Capability traits — the contracts every channel family must satisfy.
//!
//! A channel family is one `ChannelFactory` plus the three products it builds:
//! - `Message` — renders raw content in the channel's format
//! - `Sender` — the channel's fixed origin identity
//! - `DeliveryService` — hands a rendered message to the transport
//!
//! Every product reports the family it belongs to via `channel()`, which must
//! equal the `channel()` of the factory that built it. Product types keep
//! their constructors private to the family module, so the factory is the
//! only way to obtain them.

/// Channel-specific rendering of caller-supplied content.
///
/// `render()` is pure: calling it twice on the same instance yields the same
/// string.
pub trait Message: Send + Sync {
    /// Name of the channel family this message belongs to.
    fn channel(&self) -> &str;

    /// Render the content in the channel's wire format.
    fn render(&self) -> String;
}

/// The outbound identity of a channel (address, number, app id).
///
/// Used for observability only; it never gates delivery.
pub trait Sender: Send + Sync {
    fn channel(&self) -> &str;

    /// Origin address, constant for the lifetime of the factory.
    fn from_address(&self) -> &str;
}

/// Hands a message to the channel's transport.
pub trait DeliveryService: Send + Sync {
    fn channel(&self) -> &str;

    /// Attempt a single delivery to `recipient`.
    ///
    /// Returns `true` when the transport accepted the message and `false`
    /// when this attempt was declined. Never retries.
    fn send(&self, recipient: &str, message: &dyn Message) -> bool;
}

/// Builds a matched `Message` / `Sender` / `DeliveryService` trio for one
/// channel family.
///
/// The `DispatchService` holds an `Arc<dyn ChannelFactory>` and never learns
/// which concrete family it is driving.
pub trait ChannelFactory: Send + Sync {
    /// Unique family name (e.g. "email", "sms", "push").
    fn channel(&self) -> &str;

    fn create_message(&self, content: &str) -> Box<dyn Message>;

    fn create_sender(&self) -> Box<dyn Sender>;

    fn create_delivery_service(&self) -> Box<dyn DeliveryService>;
}

/// Whether a delivery service of family `channel` may carry `message`.
///
/// Shipped delivery services call this before sending and decline messages
/// rendered by another family.
pub fn same_family(channel: &str, message: &dyn Message) -> bool {
    message.channel() == channel
}
