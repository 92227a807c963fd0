//! Misconfiguration errors raised before any dispatch happens.
//!
//! A declined delivery is not an error; it is reported through
//! `DeliveryOutcome::Failed`.

/// Errors from constructing a dispatch pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The factory reported an empty family name.
    #[error("channel factory reports an empty channel name")]
    EmptyChannelName,

    /// A factory built a product belonging to another family.
    #[error("factory for '{factory}' produced a {product} of channel '{found}'")]
    FamilyMismatch {
        factory: String,
        product: &'static str,
        found: String,
    },

    /// A channel name that no shipped family answers to.
    #[error("unknown channel: {0} (expected one of: email, sms, push)")]
    UnknownChannel(String),
}
