//! Schema option keys and parsing helpers
//!
//! Behaviour initializers are driven entirely by string options on the model
//! schema. This module collects the option keys consumed or written by the
//! social behaviour and the small helpers for interpreting their values.

/// Option gating the social behaviour, opt-in per model
pub const BEHAVIOUR_SOCIAL: &str = "behaviour.social";

/// Option holding the comma-separated list of scaffolded form tabs
pub const FORM_TABS: &str = "scaffold.form.tabs";

/// Field option assigning the field to a form tab
pub const FORM_TAB: &str = "scaffold.form.tab";

/// Field option selecting a widget for the scaffolded form
pub const FORM_TYPE: &str = "scaffold.form.type";

/// Field option holding the display label translation key
pub const LABEL_NAME: &str = "label.name";

/// Field option holding the description label translation key
pub const LABEL_DESCRIPTION: &str = "label.description";

/// Interpret an option value as a boolean flag
///
/// Follows the host convention: an absent or empty value, "0" and "false" are
/// off; anything else is on.
pub fn is_truthy(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => {
            let v = v.trim();
            !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
        }
    }
}

/// Parse a comma-separated tab list, stripping whitespace and empty entries
///
/// A malformed value (only separators or whitespace) parses to an empty list,
/// which callers treat as "no tabs".
pub fn parse_tabs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tab| tab.trim())
        .filter(|tab| !tab.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render a tab list back to its option form, comma-separated without padding
pub fn format_tabs(tabs: &[String]) -> String {
    tabs.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some("")));
        assert!(!is_truthy(Some("0")));
        assert!(!is_truthy(Some("false")));
        assert!(!is_truthy(Some("  ")));
        assert!(is_truthy(Some("1")));
        assert!(is_truthy(Some("true")));
        assert!(is_truthy(Some("yes")));
    }

    #[test]
    fn test_parse_tabs_strips_whitespace() {
        assert_eq!(parse_tabs("general, seo"), vec!["general", "seo"]);
        assert_eq!(parse_tabs(" general ,seo , "), vec!["general", "seo"]);
    }

    #[test]
    fn test_parse_tabs_malformed_is_empty() {
        assert!(parse_tabs("").is_empty());
        assert!(parse_tabs(" , ,").is_empty());
    }

    #[test]
    fn test_format_tabs() {
        let tabs = vec!["general".to_string(), "seo".to_string()];
        assert_eq!(format_tabs(&tabs), "general,seo");
    }
}
