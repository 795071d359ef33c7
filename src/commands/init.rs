//! Initialize a new poetry site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::content::PoemInput;
use crate::{Folio, CONFIG_FILE};

const CONFIG_TEMPLATE: &str = r#"# verse-folio configuration

# Directory
content_dir: content
poems_dir: poems
about_file: about.md
homepage_file: homepage.md
settings_file: data/siteConfig.json

# Server
server:
  ip: localhost
  port: 4000

# Values used when a document leaves a field out
defaults:
  poem:
    title: Untitled
    category: Nature
    theme: Classic
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir)?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let folio = Folio::new(target_dir)?;
    fs::create_dir_all(&folio.poems_dir)?;
    if let Some(dir) = folio.settings_path.parent() {
        fs::create_dir_all(dir)?;
    }

    // Create a sample poem
    let sample = PoemInput {
        title: Some("First Light".to_string()),
        excerpt: Some("The morning opens like a hand".to_string()),
        content: Some(
            "The morning opens like a hand,\nand sets the sparrows loose.\n\nI keep the quiet it leaves behind."
                .to_string(),
        ),
        ..Default::default()
    };
    folio.writer().create_poem(&sample)?;

    Ok(())
}
