//! CLI entry point for verse-folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verse_folio::commands::new::NewPoem;
use verse_folio::Folio;

#[derive(Parser)]
#[command(name = "verse-folio")]
#[command(version)]
#[command(about = "Markdown-backed content store and admin API for a poetry portfolio", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new poem
    New {
        /// Title of the new poem
        title: String,

        /// Slug to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,

        /// Category of the poem
        #[arg(long)]
        category: Option<String>,

        /// Visual theme (Classic, Light, Dark, Vintage)
        #[arg(short, long)]
        theme: Option<String>,

        /// Short excerpt shown in listings
        #[arg(short, long)]
        excerpt: Option<String>,
    },

    /// Delete a poem
    Delete {
        /// Slug of the poem to delete
        slug: String,
    },

    /// Serve the content API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List site content
    List {
        /// Type of content to list (poems, slugs, about, homepage, settings, nav)
        #[arg(default_value = "poems")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "verse_folio=debug,tower_http=debug,info"
    } else {
        "verse_folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            verse_folio::commands::init::init_site(&target_dir)?;
            println!("Initialized poetry site in {:?}", target_dir);
        }

        Commands::New {
            title,
            slug,
            category,
            theme,
            excerpt,
        } => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Creating new poem with title: {}", title);
            verse_folio::commands::new::create_poem(
                &folio,
                &NewPoem {
                    title: &title,
                    slug: slug.as_deref(),
                    category: category.as_deref(),
                    theme: theme.as_deref(),
                    excerpt: excerpt.as_deref(),
                },
            )?;
        }

        Commands::Delete { slug } => {
            let folio = Folio::new(&base_dir)?;
            verse_folio::commands::delete::run(&folio, &slug)?;
        }

        Commands::Serve { port, ip } => {
            let folio = Folio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| folio.config.server.ip.clone());
            let port = port.unwrap_or(folio.config.server.port);

            tracing::info!("Serving content from {:?}", folio.content_dir);
            verse_folio::server::start(folio, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let folio = Folio::new(&base_dir)?;
            verse_folio::commands::list::run(&folio, &r#type)?;
        }

        Commands::Version => {
            println!("verse-folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
