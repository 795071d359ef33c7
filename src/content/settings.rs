//! Site chrome settings

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl NavItem {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            enabled: true,
        }
    }
}

/// Site-wide settings stored as a JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    // Site
    pub site_name: String,
    pub site_url: String,
    pub site_description: String,
    pub site_keywords: String,
    pub author_name: String,

    // Header
    pub header_logo: String,
    pub header_logo_text: String,
    pub show_admin_link: bool,

    // Footer
    pub footer_text: String,
    pub footer_copyright: String,

    // Social
    pub social_twitter: String,
    pub social_instagram: String,
    pub social_email: String,

    pub nav_items: Vec<NavItem>,

    /// Keys this version does not know about, kept as-is
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Vaishnavi Poetry".to_string(),
            site_url: "https://vaishnavipoetry.me".to_string(),
            site_description: "Explore poetry celebrating nature, memory, and the human condition through thoughtful verse and observation.".to_string(),
            site_keywords: "poetry, nature poetry, original poetry, literature, creative writing".to_string(),
            author_name: "Vaishnavi".to_string(),
            header_logo: String::new(),
            header_logo_text: "Vaishnavi".to_string(),
            show_admin_link: true,
            footer_text: "A quiet space for poetry and reflection.".to_string(),
            footer_copyright: "© 2026 Vaishnavi Poetry. All rights reserved.".to_string(),
            social_twitter: String::new(),
            social_instagram: String::new(),
            social_email: String::new(),
            nav_items: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Poems", "/poems"),
                NavItem::new("About", "/about"),
                NavItem::new("Admin", "/admin"),
            ],
            extra: IndexMap::new(),
        }
    }
}

impl Settings {
    /// Navigation entries that are switched on, in order
    pub fn enabled_nav_items(&self) -> impl Iterator<Item = &NavItem> {
        self.nav_items.iter().filter(|item| item.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nav_order() {
        let settings = Settings::default();
        let labels: Vec<_> = settings.nav_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Poems", "About", "Admin"]);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let json = r##"{"siteName": "Verses", "accentColor": "#aa3300"}"##;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.site_name, "Verses");
        assert_eq!(settings.author_name, "Vaishnavi");
        assert_eq!(settings.extra["accentColor"], "#aa3300");

        let out = serde_json::to_value(&settings).unwrap();
        assert_eq!(out["accentColor"], "#aa3300");
        assert_eq!(out["siteName"], "Verses");
    }

    #[test]
    fn test_enabled_nav_items() {
        let mut settings = Settings::default();
        settings.nav_items[3].enabled = false;
        let hrefs: Vec<_> = settings.enabled_nav_items().map(|i| i.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/", "/poems", "/about"]);
    }

    #[test]
    fn test_nav_item_enabled_defaults_true() {
        let item: NavItem = serde_json::from_str(r#"{"label": "Poems", "href": "/poems"}"#).unwrap();
        assert!(item.enabled);
    }
}
