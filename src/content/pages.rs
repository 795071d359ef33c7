//! About and Homepage singleton documents

use serde::{Deserialize, Serialize};

/// About page content. `bio` is the markdown body of `about.md`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub writer_name: String,
    pub tagline: String,
    pub writer_photo: String,
    pub location: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Signature markup shown under the biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            title: "About".to_string(),
            writer_name: "Vaishnavi".to_string(),
            tagline: "Poet & Observer".to_string(),
            writer_photo: "/images/placeholder-photo.jpg".to_string(),
            location: "New Delhi, India".to_string(),
            bio: "Welcome to my poetry portfolio.".to_string(),
            quote: None,
            signature: None,
        }
    }
}

/// Homepage hero content. `body` is the optional markdown body of `homepage.md`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Homepage {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub featured_quote: String,
    pub cta_text: String,
    pub author_byline: String,
    pub body: String,
}

impl Default for Homepage {
    fn default() -> Self {
        Self {
            hero_title: "The Tactile Verse".to_string(),
            hero_subtitle:
                "Nature distilled into words. An unbleached, minimalist collection of tactile poetry."
                    .to_string(),
            featured_quote:
                "The river carries ancient songs\nOf mountain springs and rights and wrongs"
                    .to_string(),
            cta_text: "Explore the Collection".to_string(),
            author_byline: "By Vaishnavi".to_string(),
            body: String::new(),
        }
    }
}

/// Name of the field each document keeps in its markdown body
pub(crate) const ABOUT_BODY_FIELD: &str = "bio";
pub(crate) const HOMEPAGE_BODY_FIELD: &str = "body";
