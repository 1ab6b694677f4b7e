//! Method specifications and the body intermediate representation
//!
//! A synthesized method body is a list of tagged steps, each "read an
//! accessor, conditionally write to the destination". Keeping the body
//! structured lets tests inspect what was synthesized without string
//! matching; rendering to source happens in one place, at the end.

use crate::GeneratorError;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// One step of a synthesized method body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyStep {
    /// Read a text accessor; copy to the destination when non-empty
    CopyText {
        /// Accessor method on the entry (e.g. "social_title")
        getter: String,
        /// Setter method on the destination (e.g. "set_title")
        setter: String,
    },
    /// Read the image accessor; unwrap asset references into a value and alt
    /// text and attach a shared image when the value is non-empty
    CopyImage {
        /// Accessor method on the entry
        getter: String,
    },
    /// Read a date accessor; set the publish date when present
    CopyDate {
        /// Accessor method on the entry (e.g. "date_published_from")
        getter: String,
    },
    /// Read the entry locale; set it on the destination when present
    CopyLocale {
        /// Accessor method on the entry
        getter: String,
    },
}

impl BodyStep {
    /// Render this step against the named destination
    pub fn step_tokens(&self, target: &Ident) -> TokenStream {
        match self {
            BodyStep::CopyText { getter, setter } => {
                let binding = format_ident!("{}", setter.strip_prefix("set_").unwrap_or(setter));
                let getter = format_ident!("{}", getter);
                let setter = format_ident!("{}", setter);
                quote! {
                    let #binding = self.#getter();
                    if !#binding.is_empty() {
                        #target.#setter(#binding);
                    }
                }
            }
            BodyStep::CopyImage { getter } => {
                let getter = format_ident!("{}", getter);
                quote! {
                    if let Some(image) = self.#getter() {
                        let (value, alt) = match image {
                            ImageValue::Asset { value, alt } => (value, alt),
                            ImageValue::Plain(value) => (value, None),
                        };
                        if !value.is_empty() {
                            #target.add_image(SharedImage::new(value, alt));
                        }
                    }
                }
            }
            BodyStep::CopyDate { getter } => {
                let getter = format_ident!("{}", getter);
                quote! {
                    if let Some(date) = self.#getter() {
                        #target.set_date_published(date);
                    }
                }
            }
            BodyStep::CopyLocale { getter } => {
                let getter = format_ident!("{}", getter);
                quote! {
                    if let Some(locale) = self.#getter() {
                        #target.set_locale(locale);
                    }
                }
            }
        }
    }
}

/// A method parameter: name and type, both as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParam {
    /// Parameter name
    pub name: String,
    /// Parameter type (e.g. "&mut SharedItem")
    pub ty: String,
}

/// Specification of a synthesized method
///
/// Constructed fresh per schema at generation time, attached to an entry
/// class, rendered, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethodSpec {
    /// Method name
    pub name: String,
    /// Ordered parameter list; the first parameter is the destination the
    /// body steps write to
    pub params: Vec<MethodParam>,
    /// Body as structured steps
    pub body: Vec<BodyStep>,
    /// Human-readable description, rendered as a doc comment
    pub description: String,
}

impl GeneratedMethodSpec {
    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Render the method as tokens, receiver included
    pub fn method_tokens(&self) -> Result<TokenStream, GeneratorError> {
        let target = match self.params.first() {
            Some(param) => format_ident!("{}", param.name),
            None => {
                return Err(GeneratorError::CodeGenError(format!(
                    "method `{}` has no destination parameter",
                    self.name
                )))
            }
        };

        let mut params = Vec::with_capacity(self.params.len());
        for param in &self.params {
            let ident = format_ident!("{}", param.name);
            let ty: syn::Type = syn::parse_str(&param.ty).map_err(|e| {
                GeneratorError::CodeGenError(format!(
                    "invalid type `{}` for parameter `{}`: {}",
                    param.ty, param.name, e
                ))
            })?;
            params.push(quote! { #ident: #ty });
        }

        let name = format_ident!("{}", self.name);
        let steps = self.body.iter().map(|step| step.step_tokens(&target));
        let doc = if self.description.is_empty() {
            TokenStream::new()
        } else {
            let description = &self.description;
            quote! { #[doc = #description] }
        };

        Ok(quote! {
            #doc
            fn #name(&self, #(#params),*) {
                #(#steps)*
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_text_step_guards_on_empty() {
        let step = BodyStep::CopyText {
            getter: "social_title".to_string(),
            setter: "set_title".to_string(),
        };
        let target = format_ident!("shared_item");
        let tokens = step.step_tokens(&target).to_string();

        assert!(tokens.contains("self . social_title ()"));
        assert!(tokens.contains("! title . is_empty ()"));
        assert!(tokens.contains("shared_item . set_title (title)"));
    }

    #[test]
    fn test_copy_image_step_unwraps_asset() {
        let step = BodyStep::CopyImage {
            getter: "social_image".to_string(),
        };
        let target = format_ident!("shared_item");
        let tokens = step.step_tokens(&target).to_string();

        assert!(tokens.contains("ImageValue :: Asset"));
        assert!(tokens.contains("ImageValue :: Plain"));
        assert!(tokens.contains("SharedImage :: new"));
    }

    #[test]
    fn test_method_without_destination_is_an_error() {
        let method = GeneratedMethodSpec {
            name: "populate_shared_item".to_string(),
            params: vec![],
            body: vec![],
            description: String::new(),
        };
        assert!(method.method_tokens().is_err());
    }

    #[test]
    fn test_description_renders_as_doc() {
        let method = GeneratedMethodSpec {
            name: "populate_shared_item".to_string(),
            params: vec![MethodParam {
                name: "shared_item".to_string(),
                ty: "&mut SharedItem".to_string(),
            }],
            body: vec![],
            description: "Populates the shared item".to_string(),
        };
        let tokens = method.method_tokens().expect("tokens").to_string();
        assert!(tokens.contains("Populates the shared item"));
    }
}
