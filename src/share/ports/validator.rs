//! Validator port for share content.
//!
//! Defines the abstract interface for checking share content against the
//! rules of a sharing channel.

use crate::share::{
    domain::{ShareChannel, ShareContent},
    error::ValidationError,
};
use serde::{Deserialize, Serialize};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for share content validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Fail fast, reporting the first rule the content breaks
/// - Treat absent content as an error on every channel
/// - Be stateless and thread-safe
pub trait ShareContentValidator: Send + Sync {
    /// Returns the channel whose rules this validator applies.
    fn channel(&self) -> ShareChannel;

    /// Validates content for the channel.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingContent`] when `content` is `None`,
    /// or the error for the first rule the content breaks.
    fn validate(&self, content: Option<&ShareContent>) -> ValidationResult<()>;
}

/// Configuration for validation limits.
///
/// Deserialisation fills missing fields from [`ValidationConfig::default`].
///
/// # Examples
///
/// ```
/// use sharecheck::share::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_photo_count, 6);
///
/// let loaded = ValidationConfig::from_json(r#"{ "max_media_count": 3 }"#)
///     .expect("valid config");
/// assert_eq!(loaded.max_photo_count, 6);
/// assert_eq!(loaded.max_media_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum number of photos in photo content.
    pub max_photo_count: usize,
    /// Maximum number of items in media content.
    pub max_media_count: usize,
}

/// Photo and media limit applied by the platform.
pub const MAXIMUM_PHOTO_COUNT: usize = 6;

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_photo_count: MAXIMUM_PHOTO_COUNT,
            max_media_count: MAXIMUM_PHOTO_COUNT,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that allows a single photo or medium.
    ///
    /// Useful for channels that render only one attachment.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_photo_count: 1,
            max_media_count: 1,
        }
    }

    /// Creates a configuration with raised limits.
    ///
    /// Useful for testing or when the receiving platform accepts albums.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_photo_count: 50,
            max_media_count: 50,
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `json` is not a valid configuration
    /// object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
