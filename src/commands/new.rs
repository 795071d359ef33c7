//! Create a new poem

use anyhow::Result;

use crate::content::PoemInput;
use crate::Folio;

/// Options for a poem created from the command line
#[derive(Debug, Default)]
pub struct NewPoem<'a> {
    pub title: &'a str,
    pub slug: Option<&'a str>,
    pub category: Option<&'a str>,
    pub theme: Option<&'a str>,
    pub excerpt: Option<&'a str>,
}

/// Create a poem with an empty body, returning its slug
pub fn create_poem(folio: &Folio, poem: &NewPoem<'_>) -> Result<String> {
    let input = PoemInput {
        title: Some(poem.title.to_string()),
        slug: poem.slug.map(str::to_string),
        category: poem.category.map(str::to_string),
        theme: poem.theme.map(str::to_string),
        excerpt: poem.excerpt.map(str::to_string),
        ..Default::default()
    };

    let slug = folio.writer().create_poem(&input)?;
    println!("Created: {:?}", folio.poem_path(&slug));

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_new_poem() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let slug = create_poem(
            &folio,
            &NewPoem {
                title: "Salt Wind",
                theme: Some("dark"),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(slug, "salt-wind");

        let poem = folio.reader().get_poem(&slug).unwrap();
        assert_eq!(poem.theme, Theme::Dark);
        assert_eq!(poem.category, "Nature");
    }

    #[test]
    fn test_new_poem_rejects_duplicate() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let poem = NewPoem {
            title: "Salt Wind",
            ..Default::default()
        };
        create_poem(&folio, &poem).unwrap();
        assert!(create_poem(&folio, &poem).is_err());
    }
}
