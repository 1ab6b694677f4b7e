//! modelgen-social library
//!
//! This crate is a behaviour plugin for a model code-generation framework.
//! It adds social sharing metadata fields (title, description, image) to
//! opted-in model schemas and synthesizes the method that copies those
//! fields into a shared item used for link previews and social cards.
//!
//! The host invokes two hooks per model during its build phase:
//! [`FieldAugmenter::augment`](augment::FieldAugmenter::augment) mutates the
//! schema, and
//! [`MethodSynthesizer::contribute`](codegen::MethodSynthesizer::contribute)
//! attaches the generated `populate_shared_item` method to the entry class.
//! [`SocialBehaviour`] bundles both behind the host's
//! [`BehaviourInitializer`] contract.

#![deny(missing_docs)]

pub mod augment;
pub mod behaviour;
pub mod codegen;
pub mod options;
pub mod schema;
pub mod social;

use thiserror::Error;

/// Errors that can occur during code generation
///
/// Schema augmentation never fails; these surface only from method synthesis
/// and rendering.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The schema lacks a field the generated code would read
    #[error("Missing schema field: {0}")]
    MissingField(String),

    /// A field exists but has a type the generated code cannot use
    #[error("Unsupported type for field {field}: expected {expected}")]
    UnsupportedFieldType {
        /// Name of the offending field
        field: String,
        /// What the synthesizer expected
        expected: String,
    },

    /// General code generation failure
    #[error("Code generation failed: {0}")]
    CodeGenError(String),
}

pub use augment::FieldAugmenter;
pub use behaviour::{BehaviourInitializer, SocialBehaviour};
pub use codegen::{
    BodyStep, CodeGenerator, EntryClass, GeneratedMethodSpec, MethodParam, MethodSynthesizer,
};
pub use schema::{FieldDescriptor, FieldKind, FieldType, ModelSchema};
pub use social::{ImageValue, SharedImage, SharedItem, SocialEntry};
