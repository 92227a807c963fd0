//! Factory selection — the one place that maps a channel name to a concrete
//! family.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use courier_core::config::ChannelsConfig;

use crate::base::ChannelFactory;
use crate::dispatch::DispatchService;
use crate::email::EmailFactory;
use crate::error::DispatchError;
use crate::push::PushFactory;
use crate::sms::SmsFactory;

/// The channel families shipped with Courier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
}

impl ChannelKind {
    /// All shipped families, in display order.
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Email, ChannelKind::Sms, ChannelKind::Push];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => crate::email::CHANNEL,
            ChannelKind::Sms => crate::sms::CHANNEL,
            ChannelKind::Push => crate::push::CHANNEL,
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelKind {
    type Err = DispatchError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ChannelKind::Email),
            "sms" => Ok(ChannelKind::Sms),
            "push" => Ok(ChannelKind::Push),
            other => Err(DispatchError::UnknownChannel(other.to_string())),
        }
    }
}

/// Build the factory for `kind` from the `channels` config section.
pub fn factory_for(kind: ChannelKind, config: &ChannelsConfig) -> Arc<dyn ChannelFactory> {
    match kind {
        ChannelKind::Email => Arc::new(EmailFactory::from_config(&config.email)),
        ChannelKind::Sms => Arc::new(SmsFactory::from_config(&config.sms)),
        ChannelKind::Push => Arc::new(PushFactory::from_config(&config.push)),
    }
}

/// Build a ready `DispatchService` for `kind`.
pub fn dispatch_service_for(
    kind: ChannelKind,
    config: &ChannelsConfig,
) -> Result<DispatchService, DispatchError> {
    DispatchService::new(factory_for(kind, config))
}
