//! Schema augmentation for the social behaviour
//!
//! When a model opts in through the `behaviour.social` option, the augmenter
//! injects the three social sharing fields into its schema: a title string, a
//! description text and an image. The image field becomes a reference to the
//! asset model when asset support is configured, a plain image attribute
//! otherwise.

use crate::options;
use crate::schema::{FieldDescriptor, FieldType, ModelSchema};
use once_cell::sync::Lazy;

/// Name of the injected title field
pub const SOCIAL_TITLE: &str = "socialTitle";

/// Name of the injected description field
pub const SOCIAL_DESCRIPTION: &str = "socialDescription";

/// Name of the injected image field
pub const SOCIAL_IMAGE: &str = "socialImage";

/// Form tab the injected fields render under when tabs are in use
const SOCIAL_TAB: &str = "social";

/// Widget hint for asset-backed image fields
const ASSETS_WIDGET: &str = "assets";

/// Blueprint for one injected field
struct SocialFieldSpec {
    /// Schema field name
    name: &'static str,
    /// Attribute type when created as a plain property
    field_type: FieldType,
    /// Label fragment for the translation keys (`label.<fragment>.social`)
    label: &'static str,
}

/// The three candidate fields, in injection order
static SOCIAL_FIELDS: Lazy<Vec<SocialFieldSpec>> = Lazy::new(|| {
    vec![
        SocialFieldSpec {
            name: SOCIAL_TITLE,
            field_type: FieldType::String,
            label: "title",
        },
        SocialFieldSpec {
            name: SOCIAL_DESCRIPTION,
            field_type: FieldType::Text,
            label: "description",
        },
        SocialFieldSpec {
            name: SOCIAL_IMAGE,
            field_type: FieldType::Image,
            label: "image",
        },
    ]
});

/// Injects the social sharing fields into an opted-in model schema
///
/// Asset support is injected at construction rather than probed from the
/// environment, so both image policies are reachable in tests.
#[derive(Debug, Clone, Default)]
pub struct FieldAugmenter {
    asset_model: Option<String>,
}

impl FieldAugmenter {
    /// Create an augmenter without asset support
    ///
    /// The image field is created as a plain image attribute.
    pub fn new() -> Self {
        FieldAugmenter { asset_model: None }
    }

    /// Create an augmenter with asset support
    ///
    /// The image field is created as a reference to the given asset model and
    /// tagged with the `assets` widget hint.
    pub fn with_assets(asset_model: impl Into<String>) -> Self {
        FieldAugmenter {
            asset_model: Some(asset_model.into()),
        }
    }

    /// Add the social sharing fields to the schema
    ///
    /// A no-op when `behaviour.social` is off. Idempotent: existing fields
    /// and an already-present `social` tab are left alone.
    pub fn augment(&self, schema: &mut ModelSchema) {
        if !options::is_truthy(schema.option(options::BEHAVIOUR_SOCIAL)) {
            return;
        }

        let localized = schema.is_localized();
        let tab = self.inject_tab(schema);

        for spec in SOCIAL_FIELDS.iter() {
            if schema.has_field(spec.name) {
                continue;
            }

            let mut field = if spec.name == SOCIAL_IMAGE {
                self.image_field()
            } else {
                FieldDescriptor::property(spec.name, spec.field_type)
            };

            field.set_localized(localized);
            field.set_option(options::LABEL_NAME, format!("label.{}.social", spec.label));
            field.set_option(
                options::LABEL_DESCRIPTION,
                format!("label.{}.social.description", spec.label),
            );
            if tab {
                field.set_option(options::FORM_TAB, SOCIAL_TAB);
            }

            schema.add_field(field);
        }
    }

    /// Append the `social` tab to the form tab list when tabs are in use
    ///
    /// Returns whether the injected fields should be assigned to the tab.
    /// The rewritten list is normalized: comma-separated, no padding.
    fn inject_tab(&self, schema: &mut ModelSchema) -> bool {
        let raw = match schema.option(options::FORM_TABS) {
            Some(raw) => raw.to_owned(),
            None => return false,
        };

        let mut tabs = options::parse_tabs(&raw);
        if tabs.is_empty() {
            return false;
        }

        if !tabs.iter().any(|tab| tab == SOCIAL_TAB) {
            tabs.push(SOCIAL_TAB.to_owned());
        }
        schema.set_option(options::FORM_TABS, options::format_tabs(&tabs));

        true
    }

    /// Build the image field according to the asset policy
    fn image_field(&self) -> FieldDescriptor {
        match &self.asset_model {
            Some(model) => {
                let mut field = FieldDescriptor::belongs_to(SOCIAL_IMAGE, model.clone());
                field.set_option(options::FORM_TYPE, ASSETS_WIDGET);
                field
            }
            None => FieldDescriptor::property(SOCIAL_IMAGE, FieldType::Image),
        }
    }
}
