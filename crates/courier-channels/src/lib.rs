//! Courier Channels — channel families and the dispatch client.
//!
//! This crate provides:
//! - **base**: the `Message`, `Sender`, `DeliveryService` and `ChannelFactory` traits
//! - **email**, **sms**, **push**: one factory plus three products per channel family
//! - **factory**: `ChannelKind` and the config-driven factory selector
//! - **dispatch**: `DispatchService`, which drives delivery through any factory
//!
//! Adding a channel means adding one factory and its three products; the
//! dispatch service never names a concrete family.

pub mod base;
pub mod dispatch;
pub mod email;
pub mod error;
pub mod factory;
pub mod formatting;
pub mod push;
pub mod sms;

pub use base::{ChannelFactory, DeliveryService, Message, Sender};
pub use dispatch::{DeliveryOutcome, DispatchReport, DispatchService};
pub use email::EmailFactory;
pub use error::DispatchError;
pub use factory::{factory_for, ChannelKind};
pub use push::PushFactory;
pub use sms::SmsFactory;
