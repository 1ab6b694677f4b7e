//! In-memory model schema definitions
//!
//! This module holds the mutable schema a behaviour initializer works on: an
//! ordered field table, a bag of named options, and a localization flag. The
//! host framework constructs the schema from its model definitions and hands
//! it to each initializer during the build phase.

use std::collections::HashMap;

/// Primitive type of a plain attribute field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Short single-line string value
    String,
    /// Long multi-line text value
    Text,
    /// Image value (path or upload reference)
    Image,
    /// Calendar date value
    Date,
    /// Date and time value
    DateTime,
}

/// Kind of a schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain attribute stored on the model itself
    Property(FieldType),
    /// Reference to another model (foreign key), naming the target model
    BelongsTo(String),
}

/// A single field in a model schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the schema (e.g. "socialTitle")
    pub name: String,
    /// Plain attribute or reference field
    pub kind: FieldKind,
    /// Whether the field value is stored per locale
    pub localized: bool,
    /// UI and scaffolding options (labels, form tab, widget hints)
    pub options: HashMap<String, String>,
}

impl FieldDescriptor {
    /// Create a plain attribute field
    pub fn property(name: impl Into<String>, field_type: FieldType) -> Self {
        FieldDescriptor {
            name: name.into(),
            kind: FieldKind::Property(field_type),
            localized: false,
            options: HashMap::new(),
        }
    }

    /// Create a reference field pointing at another model
    pub fn belongs_to(name: impl Into<String>, model: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            kind: FieldKind::BelongsTo(model.into()),
            localized: false,
            options: HashMap::new(),
        }
    }

    /// Set the localized flag
    pub fn set_localized(&mut self, localized: bool) {
        self.localized = localized;
    }

    /// Set a single option value
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Look up an option value
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

/// A mutable model schema: ordered field table plus option bag
///
/// Field order is declaration order; iteration and generated output stay
/// deterministic across runs. Field names are unique: [`ModelSchema::add_field`]
/// refuses duplicates, which makes schema augmentation idempotent.
#[derive(Debug, Clone, Default)]
pub struct ModelSchema {
    name: String,
    localized: bool,
    fields: Vec<FieldDescriptor>,
    options: HashMap<String, String>,
}

impl ModelSchema {
    /// Create an empty schema for the named model
    pub fn new(name: impl Into<String>) -> Self {
        ModelSchema {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether entries of this model are stored per locale
    pub fn is_localized(&self) -> bool {
        self.localized
    }

    /// Set the localization flag
    pub fn set_localized(&mut self, localized: bool) {
        self.localized = localized;
    }

    /// Look up a schema option
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Set a schema option
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Check whether a field with the given name exists
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Add a field to the schema
    ///
    /// Returns false (and leaves the schema untouched) when a field with the
    /// same name already exists.
    pub fn add_field(&mut self, field: FieldDescriptor) -> bool {
        if self.has_field(&field.name) {
            return false;
        }
        self.fields.push(field);
        true
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}
