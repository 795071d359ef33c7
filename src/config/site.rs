//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::{About, Homepage, Settings, Theme};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    /// Poem collection, relative to `content_dir`
    pub poems_dir: String,
    /// About document, relative to `content_dir`
    pub about_file: String,
    /// Homepage document, relative to `content_dir`
    pub homepage_file: String,
    /// Settings document, relative to the site root
    pub settings_file: String,

    #[serde(default)]
    pub server: ServerConfig,

    /// Values substituted for absent fields on read and omitted fields on write
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            poems_dir: "poems".to_string(),
            about_file: "about.md".to_string(),
            homepage_file: "homepage.md".to_string(),
            settings_file: "data/siteConfig.json".to_string(),
            server: ServerConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

/// Default records for every content type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub poem: PoemDefaults,
    pub about: About,
    pub homepage: Homepage,
    pub settings: Settings,
}

/// Per-field poem defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemDefaults {
    pub title: String,
    pub category: String,
    pub theme: Theme,
}

impl Default for PoemDefaults {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            category: "Nature".to_string(),
            theme: Theme::Classic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.poems_dir, "poems");
        assert_eq!(config.settings_file, "data/siteConfig.json");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.defaults.poem.category, "Nature");
        assert_eq!(config.defaults.poem.theme, Theme::Classic);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: site-content
server:
  port: 8080
defaults:
  poem:
    category: Love
    theme: vintage
  about:
    writerName: Someone Else
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_dir, "site-content");
        assert_eq!(config.poems_dir, "poems");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.defaults.poem.category, "Love");
        assert_eq!(config.defaults.poem.title, "Untitled");
        assert_eq!(config.defaults.poem.theme, Theme::Vintage);
        assert_eq!(config.defaults.about.writer_name, "Someone Else");
        assert_eq!(config.defaults.about.title, "About");
        assert_eq!(config.defaults.homepage.cta_text, "Explore the Collection");
    }
}
