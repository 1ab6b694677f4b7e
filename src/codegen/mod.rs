//! Code generation for social entry classes
//!
//! This module contains the generator facade the host hands to behaviour
//! initializers, the entry-class builder they contribute to, and the method
//! synthesis logic for the social behaviour.

pub mod method;
pub mod synthesize;

pub use method::{BodyStep, GeneratedMethodSpec, MethodParam};
pub use synthesize::MethodSynthesizer;

use crate::GeneratorError;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Construction facade for generated code artifacts
///
/// Mirrors the primitives the host generator exposes to behaviour
/// initializers: variables (method parameters) and methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    /// Create a new generator facade
    pub fn new() -> Self {
        CodeGenerator
    }

    /// Create a method parameter from a name and a type
    pub fn create_variable(
        &self,
        name: impl Into<String>,
        ty: impl Into<String>,
    ) -> MethodParam {
        MethodParam {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Create a method specification from its name, parameters and body
    pub fn create_method(
        &self,
        name: impl Into<String>,
        params: Vec<MethodParam>,
        body: Vec<BodyStep>,
    ) -> GeneratedMethodSpec {
        GeneratedMethodSpec {
            name: name.into(),
            params,
            body,
            description: String::new(),
        }
    }
}

/// Builder for a generated entry class
///
/// Behaviour initializers record the capabilities the class implements, the
/// dependencies its body needs, and the methods woven into it. [`EntryClass::render`]
/// turns the accumulated contributions into formatted source for the host to
/// merge into the final class file.
#[derive(Debug, Clone)]
pub struct EntryClass {
    name: String,
    implements: Vec<String>,
    dependencies: Vec<String>,
    methods: Vec<GeneratedMethodSpec>,
}

impl EntryClass {
    /// Create a builder for the named entry type
    pub fn new(name: impl Into<String>) -> Self {
        EntryClass {
            name: name.into(),
            implements: Vec::new(),
            dependencies: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Entry type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare that the generated class implements a capability trait
    pub fn add_implements(&mut self, trait_path: impl Into<String>) {
        let trait_path = trait_path.into();
        if !self.implements.contains(&trait_path) {
            self.implements.push(trait_path);
        }
    }

    /// Record a dependency the generated code needs in scope
    pub fn add_dependency(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.dependencies.contains(&path) {
            self.dependencies.push(path);
        }
    }

    /// Attach a synthesized method
    pub fn add_method(&mut self, method: GeneratedMethodSpec) {
        self.methods.push(method);
    }

    /// Implemented capability trait paths
    pub fn implements(&self) -> &[String] {
        &self.implements
    }

    /// Recorded dependency paths
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Attached methods
    pub fn methods(&self) -> &[GeneratedMethodSpec] {
        &self.methods
    }

    /// Render the contributions as formatted Rust source
    ///
    /// Methods land in the impl block of the first implemented capability;
    /// without one they form an inherent impl. The output is a fragment for
    /// the host to merge, not a standalone compilation unit.
    pub fn render(&self) -> Result<String, GeneratorError> {
        let mut items = TokenStream::new();

        for dep in &self.dependencies {
            let path = parse_path(dep)?;
            items.extend(quote! { use #path; });
        }

        let class = format_ident!("{}", self.name);
        let methods = self
            .methods
            .iter()
            .map(|m| m.method_tokens())
            .collect::<Result<Vec<_>, _>>()?;

        match self.implements.split_first() {
            None => {
                items.extend(quote! {
                    impl #class {
                        #(#methods)*
                    }
                });
            }
            Some((first, rest)) => {
                let trait_path = parse_path(first)?;
                items.extend(quote! {
                    impl #trait_path for #class {
                        #(#methods)*
                    }
                });
                for extra in rest {
                    let trait_path = parse_path(extra)?;
                    items.extend(quote! {
                        impl #trait_path for #class {}
                    });
                }
            }
        }

        let file: syn::File = syn::parse2(items)
            .map_err(|e| GeneratorError::CodeGenError(format!("rendering {}: {}", self.name, e)))?;

        Ok(prettyplease::unparse(&file))
    }
}

/// Parse a path string into a syn path
fn parse_path(path: &str) -> Result<syn::Path, GeneratorError> {
    syn::parse_str(path)
        .map_err(|e| GeneratorError::CodeGenError(format!("invalid path `{}`: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_inherent_impl_when_no_capability() {
        let generator = CodeGenerator::new();
        let mut class = EntryClass::new("ArticleEntry");
        let param = generator.create_variable("shared_item", "&mut SharedItem");
        class.add_method(generator.create_method("populate_shared_item", vec![param], vec![]));

        let source = class.render().expect("render should succeed");
        assert!(source.contains("impl ArticleEntry"));
        assert!(source.contains("fn populate_shared_item(&self, shared_item: &mut SharedItem)"));
    }

    #[test]
    fn test_dependencies_render_as_use_items() {
        let mut class = EntryClass::new("ArticleEntry");
        class.add_dependency("modelgen_social::SharedImage");
        class.add_dependency("modelgen_social::SharedImage");

        let source = class.render().expect("render should succeed");
        assert_eq!(source.matches("use modelgen_social::SharedImage;").count(), 1);
    }

    #[test]
    fn test_invalid_path_is_a_codegen_error() {
        let mut class = EntryClass::new("ArticleEntry");
        class.add_dependency("not a path");
        assert!(class.render().is_err());
    }
}
