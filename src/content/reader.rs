//! Content reader - loads poems and singleton documents from the content directory
//!
//! Nothing is cached: every call goes back to the filesystem. Missing files and
//! directories are not errors; they yield empty listings or default records.
//! A poem that is not UTF-8 or whose front-matter cannot be parsed is skipped
//! (with a warning) while listing, and reported as [`ContentError::Parse`]
//! when fetched directly.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use super::frontmatter;
use super::pages::{ABOUT_BODY_FIELD, HOMEPAGE_BODY_FIELD};
use super::poem::{is_valid_slug, non_empty, PoemFrontMatter};
use super::{overlay, About, FieldMap, Homepage, Poem, Settings};
use crate::error::{ContentError, Result};
use crate::Folio;

/// Loads content from the site's content directory
pub struct ContentReader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentReader<'a> {
    /// Create a new content reader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load every poem, newest first. Poems sharing a date are ordered by slug.
    pub fn list_poems(&self) -> Result<Vec<Poem>> {
        let poems_dir = &self.folio.poems_dir;
        if !poems_dir.exists() {
            tracing::debug!("Poems directory not found: {:?}", poems_dir);
            return Ok(Vec::new());
        }

        let mut poems = Vec::new();

        for entry in WalkDir::new(poems_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {:?}: {}", poems_dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_valid_slug(slug) {
                tracing::warn!("Skipping poem with unusable file name {:?}", path);
                continue;
            }

            match self.load_poem(path, slug) {
                Ok(poem) => poems.push(poem),
                Err(e @ ContentError::Parse { .. }) => {
                    tracing::warn!("Skipping malformed poem: {}", e);
                }
                // Removed between the directory scan and the read
                Err(ContentError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        // Sort by date descending (newest first)
        poems.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(poems)
    }

    /// Load a single poem by slug
    pub fn get_poem(&self, slug: &str) -> Result<Poem> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        let path = self.folio.poem_path(slug);
        if !path.is_file() {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        self.load_poem(&path, slug)
    }

    /// Slugs of every poem that loads
    pub fn list_slugs(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .list_poems()?
            .into_iter()
            .map(|poem| poem.slug)
            .collect())
    }

    /// Load the About page, or its defaults when `about.md` is absent
    pub fn get_about(&self) -> Result<About> {
        let defaults = &self.folio.config.defaults.about;
        self.load_singleton(&self.folio.about_path, defaults, ABOUT_BODY_FIELD)
    }

    /// Load the Homepage, or its defaults when `homepage.md` is absent
    pub fn get_homepage(&self) -> Result<Homepage> {
        let defaults = &self.folio.config.defaults.homepage;
        self.load_singleton(&self.folio.homepage_path, defaults, HOMEPAGE_BODY_FIELD)
    }

    /// Load the site settings, overlaid on the defaults
    pub fn get_settings(&self) -> Result<Settings> {
        let path = &self.folio.settings_path;
        let defaults = &self.folio.config.defaults.settings;

        let Some(content) = read_optional(path)? else {
            return Ok(defaults.clone());
        };

        let fields: FieldMap =
            serde_json::from_str(&content).map_err(|e| ContentError::parse(path, e))?;
        overlay(defaults, fields).map_err(|e| ContentError::parse(path, e))
    }

    /// Load a single poem from a file
    fn load_poem(&self, path: &Path, slug: &str) -> Result<Poem> {
        let bytes = fs::read(path).map_err(|e| ContentError::io(path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| ContentError::parse(path, e))?;
        let (fm, body) = frontmatter::parse::<PoemFrontMatter>(&content)
            .map_err(|e| ContentError::parse(path, e))?;

        let defaults = &self.folio.config.defaults.poem;

        let date = match non_empty(fm.date.as_deref()) {
            Some(raw) => frontmatter::parse_date(raw)
                .ok_or_else(|| ContentError::parse(path, format!("invalid date {:?}", raw)))?,
            None => file_modified(path).unwrap_or_else(Utc::now),
        };

        Ok(Poem {
            slug: slug.to_string(),
            title: non_empty(fm.title.as_deref())
                .unwrap_or(defaults.title.as_str())
                .to_string(),
            content: body.trim().to_string(),
            excerpt: fm.excerpt.unwrap_or_default(),
            date,
            category: non_empty(fm.category.as_deref())
                .unwrap_or(defaults.category.as_str())
                .to_string(),
            theme: fm.theme.unwrap_or(defaults.theme),
            featured_image: non_empty(fm.featured_image.as_deref()).map(str::to_string),
            background: non_empty(fm.background.as_deref()).map(str::to_string),
        })
    }

    /// Load a markdown singleton: front-matter fields plus the body stored under `body_field`
    fn load_singleton<T>(&self, path: &Path, defaults: &T, body_field: &str) -> Result<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Clone,
    {
        let Some(content) = read_optional(path)? else {
            return Ok(defaults.clone());
        };

        let (mut fields, body) =
            frontmatter::parse_fields(&content).map_err(|e| ContentError::parse(path, e))?;
        fields.insert(
            body_field.to_string(),
            serde_json::Value::String(body.trim().to_string()),
        );

        overlay(defaults, fields).map_err(|e| ContentError::parse(path, e))
    }
}

/// Read a file, mapping "not found" to `None`
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| ContentError::parse(path, e)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ContentError::io(path, e)),
    }
}

fn file_modified(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
