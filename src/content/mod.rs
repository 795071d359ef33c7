//! Content module - poems and singleton documents, read and written as files

pub mod frontmatter;
mod pages;
mod poem;
pub mod reader;
mod settings;
pub mod writer;

pub use pages::{About, Homepage};
pub use poem::{is_valid_slug, slugify, Poem, PoemInput, Theme};
pub use reader::ContentReader;
pub use settings::{NavItem, Settings};
pub use writer::ContentWriter;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Loosely-typed record fields, as supplied by a request body or a front-matter block
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Overlay `fields` on top of `defaults`. Null values count as omitted.
pub(crate) fn overlay<T>(defaults: &T, fields: FieldMap) -> serde_json::Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = match serde_json::to_value(defaults)? {
        serde_json::Value::Object(map) => map,
        _ => FieldMap::new(),
    };
    for (key, value) in fields {
        if !value.is_null() {
            merged.insert(key, value);
        }
    }
    serde_json::from_value(serde_json::Value::Object(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> FieldMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_overlay_keeps_defaults_for_missing_fields() {
        let about = overlay(&About::default(), fields(json!({"writerName": "Asha"}))).unwrap();
        assert_eq!(about.writer_name, "Asha");
        assert_eq!(about.title, "About");
        assert_eq!(about.tagline, "Poet & Observer");
    }

    #[test]
    fn test_overlay_ignores_nulls() {
        let home = overlay(&Homepage::default(), fields(json!({"ctaText": null}))).unwrap();
        assert_eq!(home.cta_text, "Explore the Collection");
    }

    #[test]
    fn test_overlay_rejects_wrong_types() {
        let result = overlay(&Settings::default(), fields(json!({"showAdminLink": "yes"})));
        assert!(result.is_err());
    }
}
