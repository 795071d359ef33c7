//! Delete a poem

use anyhow::Result;

use crate::Folio;

/// Run the delete command
pub fn run(folio: &Folio, slug: &str) -> Result<()> {
    folio.writer().delete_poem(slug)?;
    println!("Deleted: {}", slug);
    Ok(())
}
