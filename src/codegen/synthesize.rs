//! Method synthesis for the social behaviour
//!
//! Builds the `populate_shared_item` method for an opted-in model: copy the
//! social fields into the shared item, pick the most specific publish-date
//! field the schema carries, and propagate the locale for localized models.

use crate::augment::{SOCIAL_DESCRIPTION, SOCIAL_IMAGE, SOCIAL_TITLE};
use crate::codegen::{BodyStep, CodeGenerator, EntryClass, GeneratedMethodSpec};
use crate::options;
use crate::schema::{FieldKind, FieldType, ModelSchema};
use crate::GeneratorError;
use heck::ToSnakeCase;

/// Name of the synthesized method
pub const POPULATE_METHOD: &str = "populate_shared_item";

/// Capability trait the generated entry class implements
const SOCIAL_ENTRY_TRAIT: &str = "modelgen_social::SocialEntry";

/// Dependencies the synthesized body needs in scope
const DEPENDENCIES: [&str; 3] = [
    "modelgen_social::ImageValue",
    "modelgen_social::SharedImage",
    "modelgen_social::SharedItem",
];

/// Publish-date candidates, most semantically specific first
///
/// Entries model "published" differently: a scheduled publish date, an
/// immediate publish date, or a mere creation date. The first field the
/// schema carries wins; without any, the shared item never gets a date.
const DATE_PRECEDENCE: [&str; 3] = ["datePublishedFrom", "datePublished", "dateAdded"];

/// Fixed description of the synthesized method
const METHOD_DESCRIPTION: &str = "Populates the shared item with data from this entry";

/// Synthesizes the shared-item population method from a model schema
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodSynthesizer;

impl MethodSynthesizer {
    /// Create a new synthesizer
    pub fn new() -> Self {
        MethodSynthesizer
    }

    /// Synthesize the population method for the schema
    ///
    /// Returns `Ok(None)` when the model has not opted into the social
    /// behaviour. When it has, the schema must carry the three social fields
    /// (augmentation must have run first): the generated body calls their
    /// accessors, and emitting code against missing fields is refused here
    /// rather than discovered when the generated class fails to compile.
    pub fn synthesize(
        &self,
        schema: &ModelSchema,
        generator: &CodeGenerator,
    ) -> Result<Option<GeneratedMethodSpec>, GeneratorError> {
        if !options::is_truthy(schema.option(options::BEHAVIOUR_SOCIAL)) {
            return Ok(None);
        }

        self.check_accessor_contract(schema)?;

        let mut body = vec![
            BodyStep::CopyText {
                getter: SOCIAL_TITLE.to_snake_case(),
                setter: "set_title".to_string(),
            },
            BodyStep::CopyText {
                getter: SOCIAL_DESCRIPTION.to_snake_case(),
                setter: "set_description".to_string(),
            },
            BodyStep::CopyImage {
                getter: SOCIAL_IMAGE.to_snake_case(),
            },
        ];

        if let Some(field) = self.pick_date_field(schema)? {
            body.push(BodyStep::CopyDate {
                getter: field.to_snake_case(),
            });
        }

        if schema.is_localized() {
            body.push(BodyStep::CopyLocale {
                getter: "locale".to_string(),
            });
        }

        let shared_item = generator.create_variable("shared_item", "&mut SharedItem");
        let mut method = generator.create_method(POPULATE_METHOD, vec![shared_item], body);
        method.set_description(METHOD_DESCRIPTION);

        Ok(Some(method))
    }

    /// Contribute the social capability to a generated entry class
    ///
    /// A no-op for models without the behaviour. Otherwise declares the
    /// capability trait, records the value-type dependencies and attaches
    /// the synthesized method.
    pub fn contribute(
        &self,
        schema: &ModelSchema,
        generator: &CodeGenerator,
        class: &mut EntryClass,
    ) -> Result<(), GeneratorError> {
        let method = match self.synthesize(schema, generator)? {
            Some(method) => method,
            None => return Ok(()),
        };

        class.add_implements(SOCIAL_ENTRY_TRAIT);
        for dep in DEPENDENCIES {
            class.add_dependency(dep);
        }
        class.add_method(method);

        Ok(())
    }

    /// Verify the schema carries the fields the generated body reads
    fn check_accessor_contract(&self, schema: &ModelSchema) -> Result<(), GeneratorError> {
        for name in [SOCIAL_TITLE, SOCIAL_DESCRIPTION, SOCIAL_IMAGE] {
            if !schema.has_field(name) {
                return Err(GeneratorError::MissingField(name.to_string()));
            }
        }
        Ok(())
    }

    /// Pick the publish-date source field, first precedence match wins
    ///
    /// A candidate that exists but is not date-typed would make the generated
    /// setter call nonsense, so it is rejected instead of shadowed.
    fn pick_date_field(&self, schema: &ModelSchema) -> Result<Option<&'static str>, GeneratorError> {
        for name in DATE_PRECEDENCE {
            let field = match schema.field(name) {
                Some(field) => field,
                None => continue,
            };

            match field.kind {
                FieldKind::Property(FieldType::Date) | FieldKind::Property(FieldType::DateTime) => {
                    return Ok(Some(name));
                }
                _ => {
                    return Err(GeneratorError::UnsupportedFieldType {
                        field: name.to_string(),
                        expected: "date or datetime".to_string(),
                    });
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augment::FieldAugmenter;
    use crate::schema::FieldDescriptor;

    fn augmented_schema() -> ModelSchema {
        let mut schema = ModelSchema::new("Article");
        schema.set_option(options::BEHAVIOUR_SOCIAL, "1");
        FieldAugmenter::new().augment(&mut schema);
        schema
    }

    fn synthesize(schema: &ModelSchema) -> Option<GeneratedMethodSpec> {
        MethodSynthesizer::new()
            .synthesize(schema, &CodeGenerator::new())
            .expect("synthesis should succeed")
    }

    #[test]
    fn test_disabled_behaviour_synthesizes_nothing() {
        let schema = ModelSchema::new("Article");
        assert!(synthesize(&schema).is_none());
    }

    #[test]
    fn test_method_shape() {
        let method = synthesize(&augmented_schema()).expect("method");
        assert_eq!(method.name, POPULATE_METHOD);
        assert_eq!(method.params.len(), 1);
        assert_eq!(method.params[0].name, "shared_item");
        assert_eq!(method.description, METHOD_DESCRIPTION);
    }

    #[test]
    fn test_body_reads_snake_case_accessors() {
        let method = synthesize(&augmented_schema()).expect("method");
        assert_eq!(
            method.body[0],
            BodyStep::CopyText {
                getter: "social_title".to_string(),
                setter: "set_title".to_string(),
            }
        );
        assert_eq!(
            method.body[2],
            BodyStep::CopyImage {
                getter: "social_image".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_social_field_is_refused() {
        let mut schema = ModelSchema::new("Article");
        schema.set_option(options::BEHAVIOUR_SOCIAL, "1");

        let result = MethodSynthesizer::new().synthesize(&schema, &CodeGenerator::new());
        assert!(matches!(
            result,
            Err(GeneratorError::MissingField(name)) if name == SOCIAL_TITLE
        ));
    }

    #[test]
    fn test_date_precedence_prefers_publish_from() {
        let mut schema = augmented_schema();
        schema.add_field(FieldDescriptor::property("dateAdded", FieldType::DateTime));
        schema.add_field(FieldDescriptor::property(
            "datePublishedFrom",
            FieldType::DateTime,
        ));

        let method = synthesize(&schema).expect("method");
        let dates: Vec<&BodyStep> = method
            .body
            .iter()
            .filter(|step| matches!(step, BodyStep::CopyDate { .. }))
            .collect();
        assert_eq!(
            dates,
            vec![&BodyStep::CopyDate {
                getter: "date_published_from".to_string(),
            }]
        );
    }

    #[test]
    fn test_date_fallback_to_date_added() {
        let mut schema = augmented_schema();
        schema.add_field(FieldDescriptor::property("dateAdded", FieldType::DateTime));

        let method = synthesize(&schema).expect("method");
        assert!(method.body.contains(&BodyStep::CopyDate {
            getter: "date_added".to_string(),
        }));
    }

    #[test]
    fn test_no_date_field_omits_date_step() {
        let method = synthesize(&augmented_schema()).expect("method");
        assert!(!method
            .body
            .iter()
            .any(|step| matches!(step, BodyStep::CopyDate { .. })));
    }

    #[test]
    fn test_non_date_candidate_is_rejected() {
        let mut schema = augmented_schema();
        schema.add_field(FieldDescriptor::property("datePublished", FieldType::String));

        let result = MethodSynthesizer::new().synthesize(&schema, &CodeGenerator::new());
        assert!(matches!(
            result,
            Err(GeneratorError::UnsupportedFieldType { field, .. }) if field == "datePublished"
        ));
    }

    #[test]
    fn test_locale_step_only_for_localized_schemas() {
        let mut schema = ModelSchema::new("Article");
        schema.set_option(options::BEHAVIOUR_SOCIAL, "1");
        schema.set_localized(true);
        FieldAugmenter::new().augment(&mut schema);

        let method = synthesize(&schema).expect("method");
        assert!(method.body.contains(&BodyStep::CopyLocale {
            getter: "locale".to_string(),
        }));

        let method = synthesize(&augmented_schema()).expect("method");
        assert!(!method
            .body
            .iter()
            .any(|step| matches!(step, BodyStep::CopyLocale { .. })));
    }

    #[test]
    fn test_contribute_wires_the_class() {
        let schema = augmented_schema();
        let mut class = EntryClass::new("ArticleEntry");
        MethodSynthesizer::new()
            .contribute(&schema, &CodeGenerator::new(), &mut class)
            .expect("contribution should succeed");

        assert_eq!(class.implements(), &[SOCIAL_ENTRY_TRAIT.to_string()]);
        assert!(class
            .dependencies()
            .contains(&"modelgen_social::SharedImage".to_string()));
        assert_eq!(class.methods().len(), 1);
    }

    #[test]
    fn test_contribute_skips_disabled_models() {
        let schema = ModelSchema::new("Article");
        let mut class = EntryClass::new("ArticleEntry");
        MethodSynthesizer::new()
            .contribute(&schema, &CodeGenerator::new(), &mut class)
            .expect("no-op contribution should succeed");

        assert!(class.implements().is_empty());
        assert!(class.methods().is_empty());
    }
}
