//! verse-folio: markdown-backed content store for a poetry portfolio
//!
//! Poems live as `<slug>.md` files with YAML front-matter; the About page,
//! Homepage and site settings are singleton documents. The [`ContentReader`]
//! re-reads the files on every call and the [`ContentWriter`] rewrites them
//! whole. Both are served over HTTP by [`server`].

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{ContentReader, ContentWriter};
pub use error::ContentError;

/// Name of the site configuration file inside the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A poetry site rooted at a directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Directory holding one markdown file per poem
    pub poems_dir: PathBuf,
    /// About page document
    pub about_path: PathBuf,
    /// Homepage document
    pub homepage_path: PathBuf,
    /// Settings document
    pub settings_path: PathBuf,
}

impl Folio {
    /// Open a site, loading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let poems_dir = content_dir.join(&config.poems_dir);
        let about_path = content_dir.join(&config.about_file);
        let homepage_path = content_dir.join(&config.homepage_file);
        let settings_path = base_dir.join(&config.settings_file);

        Self {
            config,
            base_dir,
            content_dir,
            poems_dir,
            about_path,
            homepage_path,
            settings_path,
        }
    }

    /// Read access to the site's content
    pub fn reader(&self) -> ContentReader<'_> {
        ContentReader::new(self)
    }

    /// Write access to the site's content
    pub fn writer(&self) -> ContentWriter<'_> {
        ContentWriter::new(self)
    }

    /// Path of the markdown file backing `slug`
    pub fn poem_path(&self, slug: &str) -> PathBuf {
        self.poems_dir.join(format!("{}.md", slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.poems_dir, dir.path().join("content/poems"));
        assert_eq!(folio.about_path, dir.path().join("content/about.md"));
        assert_eq!(folio.homepage_path, dir.path().join("content/homepage.md"));
        assert_eq!(folio.settings_path, dir.path().join("data/siteConfig.json"));
        assert_eq!(folio.poem_path("dusk"), dir.path().join("content/poems/dusk.md"));
    }

    #[test]
    fn test_layout_from_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "content_dir: site\npoems_dir: verses\nsettings_file: site/settings.json\n",
        )
        .unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.poems_dir, dir.path().join("site/verses"));
        assert_eq!(folio.settings_path, dir.path().join("site/settings.json"));
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "server: [not, a, map]\n").unwrap();
        assert!(Folio::new(dir.path()).is_err());
    }
}
