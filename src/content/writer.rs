//! Content writer - serializes records back to the content directory
//!
//! Every write replaces the whole file. Files are written to a temporary
//! sibling and renamed into place, so a reader or a concurrent writer never
//! observes a mix of two payloads; the last rename wins.

use chrono::Utc;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::frontmatter;
use super::pages::{ABOUT_BODY_FIELD, HOMEPAGE_BODY_FIELD};
use super::poem::{is_valid_slug, non_empty, slugify, PoemFrontMatter};
use super::{overlay, About, FieldMap, Homepage, Poem, PoemInput, Settings, Theme};
use crate::error::{ContentError, Result};
use crate::Folio;

/// Writes content into the site's content directory
pub struct ContentWriter<'a> {
    folio: &'a Folio,
}

impl<'a> ContentWriter<'a> {
    /// Create a new content writer
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Create a poem, returning its slug.
    ///
    /// The slug is taken from `input.slug` when given, otherwise derived from
    /// the title. Both are normalized with [`slugify`].
    pub fn create_poem(&self, input: &PoemInput) -> Result<String> {
        let title = required_title(input)?;

        let source = non_empty(input.slug.as_deref()).unwrap_or(title);
        let slug = slugify(source);
        if slug.is_empty() {
            return Err(ContentError::Validation(format!(
                "cannot derive a slug from {:?}",
                source
            )));
        }

        let path = self.folio.poem_path(&slug);
        if path.exists() {
            return Err(ContentError::Validation(format!(
                "a poem with slug {:?} already exists",
                slug
            )));
        }

        let poem = self.resolve_poem(&slug, input)?;
        let document = self.render_poem(&poem)?;
        create_file(&path, &document).map_err(|e| match e {
            ContentError::Io { source, .. } if source.kind() == io::ErrorKind::AlreadyExists => {
                ContentError::Validation(format!("a poem with slug {:?} already exists", slug))
            }
            e => e,
        })?;

        tracing::info!("Created poem {:?}", slug);
        Ok(slug)
    }

    /// Replace the poem stored under `slug`. `input.slug` is ignored.
    pub fn update_poem(&self, slug: &str, input: &PoemInput) -> Result<()> {
        self.existing_poem_path(slug)?;

        let poem = self.resolve_poem(slug, input)?;
        let document = self.render_poem(&poem)?;
        write_file(&self.folio.poem_path(slug), &document)?;

        tracing::info!("Updated poem {:?}", slug);
        Ok(())
    }

    /// Delete the poem stored under `slug`
    pub fn delete_poem(&self, slug: &str) -> Result<()> {
        let path = self.existing_poem_path(slug)?;

        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound(slug.to_string()),
            _ => ContentError::io(&path, e),
        })?;

        tracing::info!("Deleted poem {:?}", slug);
        Ok(())
    }

    /// Save the About page. Omitted fields take their defaults.
    pub fn save_about(&self, fields: FieldMap) -> Result<About> {
        let mut about: About = overlay(&self.folio.config.defaults.about, fields)
            .map_err(|e| ContentError::Validation(e.to_string()))?;
        about.bio = about.bio.trim().to_string();
        write_markdown_singleton(&self.folio.about_path, &about, ABOUT_BODY_FIELD)?;

        tracing::info!("Saved about page");
        Ok(about)
    }

    /// Save the Homepage. Omitted fields take their defaults.
    pub fn save_homepage(&self, fields: FieldMap) -> Result<Homepage> {
        let mut homepage: Homepage = overlay(&self.folio.config.defaults.homepage, fields)
            .map_err(|e| ContentError::Validation(e.to_string()))?;
        homepage.body = homepage.body.trim().to_string();
        write_markdown_singleton(&self.folio.homepage_path, &homepage, HOMEPAGE_BODY_FIELD)?;

        tracing::info!("Saved homepage");
        Ok(homepage)
    }

    /// Save the site settings. Omitted fields take their defaults.
    pub fn save_settings(&self, fields: FieldMap) -> Result<Settings> {
        let path = &self.folio.settings_path;
        let settings: Settings = overlay(&self.folio.config.defaults.settings, fields)
            .map_err(|e| ContentError::Validation(e.to_string()))?;

        let json =
            serde_json::to_string_pretty(&settings).map_err(|e| ContentError::parse(path, e))?;
        write_file(path, &json)?;

        tracing::info!("Saved settings");
        Ok(settings)
    }

    /// Fill in defaults and validate a poem payload
    fn resolve_poem(&self, slug: &str, input: &PoemInput) -> Result<Poem> {
        let defaults = &self.folio.config.defaults.poem;
        let title = required_title(input)?;

        let date = match non_empty(input.date.as_deref()) {
            Some(raw) => frontmatter::parse_date(raw)
                .ok_or_else(|| ContentError::Validation(format!("invalid date {:?}", raw)))?,
            None => Utc::now(),
        };

        let theme = match non_empty(input.theme.as_deref()) {
            Some(raw) => raw.parse::<Theme>().map_err(ContentError::Validation)?,
            None => defaults.theme,
        };

        Ok(Poem {
            slug: slug.to_string(),
            title: title.to_string(),
            content: input.content.as_deref().unwrap_or_default().trim().to_string(),
            excerpt: input.excerpt.clone().unwrap_or_default(),
            date,
            category: non_empty(input.category.as_deref())
                .unwrap_or(defaults.category.as_str())
                .to_string(),
            theme,
            featured_image: non_empty(input.featured_image.as_deref()).map(str::to_string),
            background: non_empty(input.background.as_deref()).map(str::to_string),
        })
    }

    /// Serialize a poem as a markdown document
    fn render_poem(&self, poem: &Poem) -> Result<String> {
        let path = self.folio.poem_path(&poem.slug);
        let fm = PoemFrontMatter {
            title: Some(poem.title.clone()),
            date: Some(frontmatter::format_date(&poem.date)),
            category: Some(poem.category.clone()),
            excerpt: Some(poem.excerpt.clone()),
            theme: Some(poem.theme),
            featured_image: poem.featured_image.clone(),
            background: poem.background.clone(),
        };

        frontmatter::stringify(&fm, &poem.content).map_err(|e| ContentError::parse(&path, e))
    }

    /// Path of an existing poem file, or `NotFound`
    fn existing_poem_path(&self, slug: &str) -> Result<PathBuf> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }
        let path = self.folio.poem_path(slug);
        if !path.is_file() {
            return Err(ContentError::NotFound(slug.to_string()));
        }
        Ok(path)
    }
}

fn required_title(input: &PoemInput) -> Result<&str> {
    non_empty(input.title.as_deref())
        .ok_or_else(|| ContentError::Validation("title is required".to_string()))
}

/// Write `record` as front-matter, moving `body_field` into the markdown body
fn write_markdown_singleton<T: serde::Serialize>(
    path: &Path,
    record: &T,
    body_field: &str,
) -> Result<()> {
    let mut fields = match serde_json::to_value(record).map_err(|e| ContentError::parse(path, e))? {
        serde_json::Value::Object(map) => map,
        _ => FieldMap::new(),
    };
    let body = match fields.shift_remove(body_field) {
        Some(serde_json::Value::String(body)) => body,
        _ => String::new(),
    };

    let document =
        frontmatter::stringify(&fields, &body).map_err(|e| ContentError::parse(path, e))?;
    write_file(path, &document)
}

/// Replace `path` with `contents`, creating parent directories as needed
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let tmp = staged_file(path, contents)?;
    tmp.persist(path).map_err(|e| ContentError::io(path, e.error))?;

    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

/// Like [`write_file`], but fails with `AlreadyExists` instead of replacing
fn create_file(path: &Path, contents: &str) -> Result<()> {
    let tmp = staged_file(path, contents)?;
    tmp.persist_noclobber(path)
        .map_err(|e| ContentError::io(path, e.error))?;

    tracing::debug!("Created {:?}", path);
    Ok(())
}

/// Write `contents` to a temporary file next to `path`
fn staged_file(path: &Path, contents: &str) -> Result<NamedTempFile> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ContentError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ContentError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| ContentError::io(tmp.path(), e))?;
    Ok(tmp)
}
