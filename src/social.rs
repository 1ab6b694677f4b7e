//! Shared-item value types and the social entry capability
//!
//! A [`SharedItem`] carries the metadata a social platform needs to render a
//! link preview: title, description, images, publish date and locale. Entry
//! types generated with the social behaviour implement [`SocialEntry`] to
//! fill one from their own state.

/// One image attached to a shared item, as a (value, alt-text) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedImage {
    value: String,
    alt: Option<String>,
}

impl SharedImage {
    /// Create a shared image from its value and optional alt text
    pub fn new(value: impl Into<String>, alt: Option<String>) -> Self {
        SharedImage {
            value: value.into(),
            alt,
        }
    }

    /// Underlying image value (path or upload reference)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Alternative text, when the source carried one
    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }
}

/// Value of an entry's social image accessor
///
/// Depending on how the schema was augmented, the image is either a bare
/// value or a structured asset reference carrying its own alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageValue {
    /// Bare image value without metadata
    Plain(String),
    /// Structured asset reference
    Asset {
        /// Underlying image value of the asset
        value: String,
        /// Alt text declared on the asset
        alt: Option<String>,
    },
}

impl ImageValue {
    /// Underlying image value, for either variant
    pub fn value(&self) -> &str {
        match self {
            ImageValue::Plain(value) => value,
            ImageValue::Asset { value, .. } => value,
        }
    }

    /// Alt text; always absent for bare values
    pub fn alt(&self) -> Option<&str> {
        match self {
            ImageValue::Plain(_) => None,
            ImageValue::Asset { alt, .. } => alt.as_deref(),
        }
    }
}

/// Metadata for a social-media link preview
///
/// Consumers must treat an unset date as "unknown", not as an error: entries
/// without any publish-date field simply never set one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedItem {
    title: Option<String>,
    description: Option<String>,
    images: Vec<SharedImage>,
    date_published: Option<i64>,
    locale: Option<String>,
}

impl SharedItem {
    /// Create an empty shared item
    pub fn new() -> Self {
        SharedItem::default()
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Title, when set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Description, when set
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Attach an image
    pub fn add_image(&mut self, image: SharedImage) {
        self.images.push(image);
    }

    /// Attached images, in the order they were added
    pub fn images(&self) -> &[SharedImage] {
        &self.images
    }

    /// Set the publish date as a Unix timestamp
    pub fn set_date_published(&mut self, timestamp: i64) {
        self.date_published = Some(timestamp);
    }

    /// Publish date as a Unix timestamp, when known
    pub fn date_published(&self) -> Option<i64> {
        self.date_published
    }

    /// Set the locale code
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    /// Locale code, when set
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

/// Capability of an entry with social sharing support
///
/// The accessors mirror the fields the schema augmentation injects; the
/// generated entry class implements [`SocialEntry::populate_shared_item`]
/// with a body synthesized from the schema.
pub trait SocialEntry {
    /// Title for the shared item; empty when unset
    fn social_title(&self) -> &str;

    /// Description for the shared item; empty when unset
    fn social_description(&self) -> &str;

    /// Image for the shared item
    fn social_image(&self) -> Option<ImageValue>;

    /// Populate the shared item with data from this entry
    fn populate_shared_item(&self, shared_item: &mut SharedItem);
}
