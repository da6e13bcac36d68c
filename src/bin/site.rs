//! Command-line front end for the site content engine.
//!
//! `site build` renders every page into a directory; the other subcommands
//! expose catalog lookups (`slugs`, `resolve`, `related`, `icon`) and a
//! `validate` check for content edits. The catalog is loaded once per run
//! from `--content` or the repository's `content/site_content.json`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use congruity_site::{
    ContentCatalog, PageResolver, SiteBuilder, find_repo_root, icon_for, logging,
    resolve_content_path,
};
use std::path::{Path, PathBuf};

// Distinct from the generic failure code so scripts can tell "no such page"
// apart from a broken catalog.
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "site", version, about = "Build and query the marketing site content")]
struct Cli {
    /// Content document to load (relative paths resolve against the repo root).
    #[arg(long, global = true, env = "CONGRUITY_CONTENT")]
    content: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render every page into an output directory.
    Build {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print every service slug, one per line, in catalog order.
    Slugs,
    /// Print the service record for a slug as JSON.
    Resolve { slug: String },
    /// Print the slugs of every other service.
    Related { slug: String },
    /// Print the icon a name resolves to.
    Icon { name: String },
    /// Load the content and report what it contains.
    Validate,
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let content = cli.content.as_deref();
    match cli.command {
        Command::Icon { name } => {
            println!("{}", icon_for(&name).name.as_str());
        }
        Command::Build { out } => {
            let catalog = load_catalog(content)?;
            let report = SiteBuilder::new(&catalog).write_to(&out)?;
            println!("wrote {} pages to {}", report.pages, out.display());
        }
        Command::Slugs => {
            let catalog = load_catalog(content)?;
            for slug in PageResolver::new(&catalog).enumerate_slugs() {
                println!("{slug}");
            }
        }
        Command::Resolve { slug } => {
            let catalog = load_catalog(content)?;
            match PageResolver::new(&catalog).resolve(&slug) {
                Ok(service) => {
                    let json = serde_json::to_string_pretty(service)
                        .context("serializing service record")?;
                    println!("{json}");
                }
                Err(err) => {
                    eprintln!("site: {err}");
                    std::process::exit(EXIT_NOT_FOUND);
                }
            }
        }
        Command::Related { slug } => {
            let catalog = load_catalog(content)?;
            for service in PageResolver::new(&catalog).related_services(&slug) {
                println!("{}", service.slug);
            }
        }
        Command::Validate => {
            let catalog = load_catalog(content)?;
            println!(
                "ok: {} services, {} leadership, {} board, {} footer columns",
                catalog.all_services().len(),
                catalog.leadership().len(),
                catalog.board().len(),
                catalog.footer_links().len()
            );
        }
    }
    Ok(())
}

fn load_catalog(content: Option<&Path>) -> Result<ContentCatalog> {
    let path = match content {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        other => {
            let repo_root = find_repo_root()?;
            resolve_content_path(&repo_root, other)
        }
    };
    tracing::debug!(path = %path.display(), "loading content");
    ContentCatalog::load(&path)
}
