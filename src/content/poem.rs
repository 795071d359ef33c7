//! Poem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme a poem page is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Theme {
    #[default]
    Classic,
    Light,
    Dark,
    Vintage,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Classic, Theme::Light, Theme::Dark, Theme::Vintage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Vintage => "Vintage",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown theme {:?}, expected one of Classic, Light, Dark, Vintage",
                    s
                )
            })
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Theme, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse::<Theme>()
            .map_err(serde::de::Error::custom)
    }
}

/// A poem, as read from `<slug>.md`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    /// Filename stem
    pub slug: String,

    pub title: String,

    /// Verse body, surrounding whitespace trimmed
    pub content: String,

    pub excerpt: String,

    /// Publication date
    pub date: DateTime<Utc>,

    pub category: String,

    pub theme: Theme,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Background style reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Front-matter block of a poem document
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PoemFrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Poem payload supplied by the admin UI or the CLI.
///
/// Every field is optional; the writer validates and fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoemInput {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub theme: Option<String>,
    pub featured_image: Option<String>,
    pub background: Option<String>,
}

impl From<&Poem> for PoemInput {
    fn from(poem: &Poem) -> Self {
        Self {
            slug: Some(poem.slug.clone()),
            title: Some(poem.title.clone()),
            content: Some(poem.content.clone()),
            excerpt: Some(poem.excerpt.clone()),
            date: Some(super::frontmatter::format_date(&poem.date)),
            category: Some(poem.category.clone()),
            theme: Some(poem.theme.to_string()),
            featured_image: poem.featured_image.clone(),
            background: poem.background.clone(),
        }
    }
}

/// Derive a slug: lower-cased, non-alphanumeric runs collapsed to one hyphen,
/// no leading or trailing hyphen.
pub fn slugify(s: &str) -> String {
    slug::slugify(s)
}

/// Whether `s` can name a poem file
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Treat empty strings as absent
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Echoes of Autumn!!"), "echoes-of-autumn");
        assert_eq!(slugify("  --The Rain,  the River--  "), "the-rain-the-river");
        assert_eq!(slugify("Poem #42"), "poem-42");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("echoes-of-autumn"));
        assert!(is_valid_slug("poem-42"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("../secret"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Vintage".parse::<Theme>().unwrap(), Theme::Vintage);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" LIGHT ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serde() {
        let theme: Theme = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(theme, Theme::Classic);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"Dark\"");
        assert!(serde_yaml::from_str::<Theme>("Neon").is_err());
    }

    #[test]
    fn test_poem_json_keys() {
        let poem = Poem {
            slug: "first-light".to_string(),
            title: "First Light".to_string(),
            content: "dawn".to_string(),
            excerpt: String::new(),
            date: chrono::DateTime::parse_from_rfc3339("2024-05-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            category: "Nature".to_string(),
            theme: Theme::Light,
            featured_image: Some("/images/dawn.jpg".to_string()),
            background: None,
        };
        let value = serde_json::to_value(&poem).unwrap();
        assert_eq!(value["featuredImage"], "/images/dawn.jpg");
        assert_eq!(value["theme"], "Light");
        assert!(value.get("background").is_none());
    }
}
