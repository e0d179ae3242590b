//! Validation service implementation.
//!
//! Provides [`ChannelValidator`], the default implementation of the
//! [`ShareContentValidator`] port, and one entry point per sharing channel.

use crate::share::{
    domain::{ShareChannel, ShareContent},
    error::ValidationError,
    ports::validator::{ShareContentValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Validator applying the rules of a single sharing channel.
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::{ShareChannel, ShareContent, SharePhoto, SharePhotoContent};
/// use sharecheck::share::ports::validator::ShareContentValidator;
/// use sharecheck::share::validation::ChannelValidator;
/// use url::Url;
///
/// let photo = SharePhoto::from_url(Url::parse("https://example.com/a.gif").expect("valid url"));
/// let content: ShareContent = SharePhotoContent::builder().add_photo(photo).build().into();
///
/// let validator = ChannelValidator::new(ShareChannel::Web);
/// assert!(validator.validate(Some(&content)).is_ok());
/// assert!(validator.validate(None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChannelValidator {
    channel: ShareChannel,
    config: ValidationConfig,
}

impl ChannelValidator {
    /// Creates a validator for `channel` with default limits.
    #[must_use]
    pub fn new(channel: ShareChannel) -> Self {
        Self {
            channel,
            config: ValidationConfig::default(),
        }
    }

    /// Creates a validator for `channel` with custom limits.
    #[must_use]
    pub const fn with_config(channel: ShareChannel, config: ValidationConfig) -> Self {
        Self { channel, config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl ShareContentValidator for ChannelValidator {
    fn channel(&self) -> ShareChannel {
        self.channel
    }

    fn validate(&self, content: Option<&ShareContent>) -> ValidationResult<()> {
        let result = content
            .ok_or(ValidationError::MissingContent)
            .and_then(|share| rules::validate_content(share, self.channel, &self.config));

        if let Err(error) = &result {
            tracing::debug!(
                channel = %self.channel,
                kind = content.map(|share| share.kind().as_str()),
                %error,
                "share content rejected"
            );
        }

        result
    }
}

/// Validates content for the channel named by `channel` with default limits.
///
/// # Errors
///
/// Returns [`ValidationError`] for absent content or the first broken rule.
pub fn validate_for_channel(
    content: Option<&ShareContent>,
    channel: ShareChannel,
) -> ValidationResult<()> {
    ChannelValidator::new(channel).validate(content)
}

/// Validates content for sharing through an in-app message.
///
/// # Errors
///
/// Returns [`ValidationError`] for absent content or the first broken rule.
pub fn validate_for_message(content: Option<&ShareContent>) -> ValidationResult<()> {
    validate_for_channel(content, ShareChannel::Message)
}

/// Validates content for sharing through the native application.
///
/// # Errors
///
/// Returns [`ValidationError`] for absent content or the first broken rule.
pub fn validate_for_native_share(content: Option<&ShareContent>) -> ValidationResult<()> {
    validate_for_channel(content, ShareChannel::Native)
}

/// Validates content for sharing through the web dialog.
///
/// # Errors
///
/// Returns [`ValidationError`] for absent content or the first broken rule.
pub fn validate_for_web_share(content: Option<&ShareContent>) -> ValidationResult<()> {
    validate_for_channel(content, ShareChannel::Web)
}

/// Validates content for sharing through the platform API.
///
/// # Errors
///
/// Returns [`ValidationError`] for absent content or the first broken rule.
pub fn validate_for_api_share(content: Option<&ShareContent>) -> ValidationResult<()> {
    validate_for_channel(content, ShareChannel::Api)
}

// Channel-level tests live in src/share/tests/validation_tests.rs.
