//! Behaviour initializer contract and the social behaviour
//!
//! The host framework runs every registered [`BehaviourInitializer`] against
//! each model: once at configuration time to adjust the schema, once at
//! generation time to contribute code to the entry class.

use crate::augment::FieldAugmenter;
use crate::codegen::{CodeGenerator, EntryClass, MethodSynthesizer};
use crate::schema::ModelSchema;
use crate::GeneratorError;

/// Build-time hook customizing a model's schema and its generated entry class
pub trait BehaviourInitializer {
    /// Adjust the model schema at configuration time
    fn initialize_schema(&self, schema: &mut ModelSchema);

    /// Contribute generated code to the model's entry class
    fn generate_entry_class(
        &self,
        schema: &ModelSchema,
        generator: &CodeGenerator,
        class: &mut EntryClass,
    ) -> Result<(), GeneratorError>;
}

/// The social sharing behaviour
///
/// Combines the field augmenter and the method synthesizer. Both hooks gate
/// on the `behaviour.social` schema option and do nothing for models that
/// have not opted in.
#[derive(Debug, Clone, Default)]
pub struct SocialBehaviour {
    augmenter: FieldAugmenter,
    synthesizer: MethodSynthesizer,
}

impl SocialBehaviour {
    /// Create the behaviour without asset support
    pub fn new() -> Self {
        SocialBehaviour {
            augmenter: FieldAugmenter::new(),
            synthesizer: MethodSynthesizer::new(),
        }
    }

    /// Create the behaviour with asset support
    ///
    /// The social image field becomes a reference to the given asset model.
    pub fn with_assets(asset_model: impl Into<String>) -> Self {
        SocialBehaviour {
            augmenter: FieldAugmenter::with_assets(asset_model),
            synthesizer: MethodSynthesizer::new(),
        }
    }
}

impl BehaviourInitializer for SocialBehaviour {
    fn initialize_schema(&self, schema: &mut ModelSchema) {
        self.augmenter.augment(schema);
    }

    fn generate_entry_class(
        &self,
        schema: &ModelSchema,
        generator: &CodeGenerator,
        class: &mut EntryClass,
    ) -> Result<(), GeneratorError> {
        self.synthesizer.contribute(schema, generator, class)
    }
}
