//! Sharing channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The mechanism used to perform a share.
///
/// Each channel accepts a different subset of content and applies its
/// own rules to photos.
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::ShareChannel;
///
/// let channel: ShareChannel = "web".parse().expect("known channel");
/// assert_eq!(channel, ShareChannel::Web);
/// assert_eq!(ShareChannel::Api.to_string(), "api");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareChannel {
    /// In-app message dialog.
    Message,
    /// The platform's native application.
    Native,
    /// Web share dialog.
    Web,
    /// Direct call to the platform API.
    Api,
}

impl ShareChannel {
    /// All channels, in declaration order.
    pub const ALL: [Self; 4] = [Self::Message, Self::Native, Self::Web, Self::Api];

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Native => "native",
            Self::Web => "web",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for ShareChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ShareChannel {
    type Error = ParseShareChannelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "message" => Ok(Self::Message),
            "native" => Ok(Self::Native),
            "web" => Ok(Self::Web),
            "api" => Ok(Self::Api),
            _ => Err(ParseShareChannelError(value.to_owned())),
        }
    }
}

impl FromStr for ShareChannel {
    type Err = ParseShareChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Error returned while parsing a channel name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown share channel: {0}")]
pub struct ParseShareChannelError(pub String);
