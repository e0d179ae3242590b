//! Open graph actions, objects, and the content that publishes them.
//!
//! An open graph action is a typed record (`"books.reads"`,
//! `"fitness.runs"`, ...) whose named properties may hold scalars, photos,
//! nested objects, or lists of those. One property is designated the
//! preview property and is rendered when the action is shared.

use super::SharePhoto;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A property value held by an open graph action or object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OpenGraphValue {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Double(f64),
    /// A string.
    String(String),
    /// A photo.
    Photo(SharePhoto),
    /// A nested object.
    Object(ShareOpenGraphObject),
    /// A list of values.
    List(Vec<Self>),
}

impl From<bool> for OpenGraphValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OpenGraphValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for OpenGraphValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for OpenGraphValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OpenGraphValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<SharePhoto> for OpenGraphValue {
    fn from(value: SharePhoto) -> Self {
        Self::Photo(value)
    }
}

impl From<ShareOpenGraphObject> for OpenGraphValue {
    fn from(value: ShareOpenGraphObject) -> Self {
        Self::Object(value)
    }
}

/// Named property values, ordered by key.
pub type OpenGraphProperties = BTreeMap<String, OpenGraphValue>;

/// An open graph object embedded as a property value.
///
/// Object keys must be namespaced (`"og:title"`, `"books:isbn"`).
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::ShareOpenGraphObject;
///
/// let book = ShareOpenGraphObject::new()
///     .with_property("og:type", "books.book")
///     .with_property("og:title", "A Game of Thrones");
/// assert!(book.get("og:title").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareOpenGraphObject {
    properties: OpenGraphProperties,
}

impl ShareOpenGraphObject {
    /// Creates an object with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `key` set to `value`.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<OpenGraphValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OpenGraphValue> {
        self.properties.get(key)
    }

    /// Returns all properties.
    #[must_use]
    pub const fn properties(&self) -> &OpenGraphProperties {
        &self.properties
    }
}

/// A semantic action to publish, such as a user reading a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareOpenGraphAction {
    action_type: Option<String>,
    properties: OpenGraphProperties,
}

impl ShareOpenGraphAction {
    /// Returns a builder with no action type and no properties.
    #[must_use]
    pub fn builder() -> ShareOpenGraphActionBuilder {
        ShareOpenGraphActionBuilder::default()
    }

    /// Returns the action type, if any.
    #[must_use]
    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OpenGraphValue> {
        self.properties.get(key)
    }

    /// Returns all properties.
    #[must_use]
    pub const fn properties(&self) -> &OpenGraphProperties {
        &self.properties
    }
}

/// Builder for [`ShareOpenGraphAction`].
#[derive(Debug, Clone, Default)]
pub struct ShareOpenGraphActionBuilder {
    action_type: Option<String>,
    properties: OpenGraphProperties,
}

impl ShareOpenGraphActionBuilder {
    /// Sets the action type.
    #[must_use]
    pub fn with_action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = Some(action_type.into());
        self
    }

    /// Replaces the action type, clearing it when `None`.
    #[must_use]
    pub fn action_type(mut self, action_type: Option<String>) -> Self {
        self.action_type = action_type;
        self
    }

    /// Sets a property value.
    #[must_use]
    pub fn put(mut self, key: impl Into<String>, value: impl Into<OpenGraphValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets a string property.
    #[must_use]
    pub fn put_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key, OpenGraphValue::String(value.into()))
    }

    /// Builds the action.
    #[must_use]
    pub fn build(self) -> ShareOpenGraphAction {
        ShareOpenGraphAction {
            action_type: self.action_type,
            properties: self.properties,
        }
    }
}

/// Content that publishes an open graph action.
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::{ShareOpenGraphAction, ShareOpenGraphContent};
///
/// let action = ShareOpenGraphAction::builder()
///     .with_action_type("books.reads")
///     .put_string("book", "https://example.com/books/1")
///     .build();
/// let content = ShareOpenGraphContent::builder()
///     .with_action(action)
///     .with_preview_property_name("book")
///     .build();
/// assert_eq!(content.preview_property_name(), Some("book"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareOpenGraphContent {
    action: Option<ShareOpenGraphAction>,
    preview_property_name: Option<String>,
}

impl ShareOpenGraphContent {
    /// Returns a builder with no action.
    #[must_use]
    pub fn builder() -> ShareOpenGraphContentBuilder {
        ShareOpenGraphContentBuilder::default()
    }

    /// Returns the action, if any.
    #[must_use]
    pub const fn action(&self) -> Option<&ShareOpenGraphAction> {
        self.action.as_ref()
    }

    /// Returns the name of the action property rendered as the preview.
    #[must_use]
    pub fn preview_property_name(&self) -> Option<&str> {
        self.preview_property_name.as_deref()
    }
}

/// Builder for [`ShareOpenGraphContent`].
#[derive(Debug, Clone, Default)]
pub struct ShareOpenGraphContentBuilder {
    action: Option<ShareOpenGraphAction>,
    preview_property_name: Option<String>,
}

impl ShareOpenGraphContentBuilder {
    /// Sets the action.
    #[must_use]
    pub fn with_action(mut self, action: ShareOpenGraphAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Replaces the action, clearing it when `None`.
    #[must_use]
    pub fn action(mut self, action: Option<ShareOpenGraphAction>) -> Self {
        self.action = action;
        self
    }

    /// Sets the preview property name.
    #[must_use]
    pub fn with_preview_property_name(mut self, name: impl Into<String>) -> Self {
        self.preview_property_name = Some(name.into());
        self
    }

    /// Replaces the preview property name, clearing it when `None`.
    #[must_use]
    pub fn preview_property_name(mut self, name: Option<String>) -> Self {
        self.preview_property_name = name;
        self
    }

    /// Builds the open graph content.
    #[must_use]
    pub fn build(self) -> ShareOpenGraphContent {
        ShareOpenGraphContent {
            action: self.action,
            preview_property_name: self.preview_property_name,
        }
    }
}
