//! List site content

use anyhow::Result;

use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let reader = folio.reader();

    match content_type {
        "poem" | "poems" => {
            let poems = reader.list_poems()?;
            println!("Poems ({}):", poems.len());
            for poem in poems {
                println!(
                    "  {} - {} [{}, {}] ({})",
                    poem.date.format("%Y-%m-%d"),
                    poem.title,
                    poem.category,
                    poem.theme,
                    poem.slug
                );
            }
        }
        "slug" | "slugs" => {
            for slug in reader.list_slugs()? {
                println!("{}", slug);
            }
        }
        "about" => {
            println!("{}", serde_yaml::to_string(&reader.get_about()?)?);
        }
        "home" | "homepage" => {
            println!("{}", serde_yaml::to_string(&reader.get_homepage()?)?);
        }
        "settings" => {
            println!("{}", serde_json::to_string_pretty(&reader.get_settings()?)?);
        }
        "nav" => {
            let settings = reader.get_settings()?;
            for item in settings.enabled_nav_items() {
                println!("  {} -> {}", item.label, item.href);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: poems, slugs, about, homepage, settings, nav",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_types() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        for content_type in ["poems", "slugs", "about", "homepage", "settings", "nav"] {
            assert!(run(&folio, content_type).is_ok(), "{}", content_type);
        }
        assert!(run(&folio, "drafts").is_err());
    }
}
