use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::models::BookmarkRoots;
use crate::parsers::parse_bookmarks_file;
use crate::tree::{Bookmark, BookmarkNode, Folder};
use crate::utils::{format_path_with_tilde, resolve_bookmarks_path};

#[derive(Parser)]
#[command(name = "bookmark-parser")]
#[command(version)]
#[command(about = "Browse Chromium-family browser bookmarks", long_about = None)]
pub struct Cli {
    /// Browser to read (selects the default bookmark file and the folder URL scheme)
    #[arg(short, long, global = true, default_value = "chrome")]
    pub browser: String,

    /// Read this bookmark file instead of the browser's default location
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show url and folder counts for each root
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a summary of a folder or link (default: the bookmark bar)
    Show {
        /// Path such as `bookmark_bar/Work` or `Bookmarks bar/Work`
        path: Option<String>,
    },
    /// List the links of a folder
    Urls {
        path: Option<String>,
        /// Include links from every nested folder
        #[arg(long)]
        nested: bool,
    },
    /// List the folders of a folder
    Folders {
        path: Option<String>,
        /// Include every nested subfolder
        #[arg(long)]
        nested: bool,
    },
}

#[derive(Debug, Serialize)]
struct RootStats<'a> {
    section: &'static str,
    name: &'a str,
    urls: usize,
    folders: usize,
    subfolders: usize,
}

pub fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let path = resolve_bookmarks_path(&cli.browser, cli.file.as_deref())?;
    let roots = parse_bookmarks_file(&path, &cli.browser)
        .with_context(|| format!("Failed to parse bookmark file: {}", path.display()))?;

    match command {
        Commands::Stats { json } => show_stats(&roots, &path, *json)?,
        Commands::Show { path } => {
            println!("{}", lookup(&roots, path.as_deref())?);
        }
        Commands::Urls { path, nested } => {
            let folder = lookup_folder(&roots, path.as_deref())?;
            let links = if *nested { folder.nested_urls() } else { folder.urls() };
            for link in links {
                println!("{}\t{}", link.name(), link.url());
            }
        }
        Commands::Folders { path, nested } => {
            let folder = lookup_folder(&roots, path.as_deref())?;
            let folders = if *nested { folder.subfolders() } else { folder.folders() };
            for sub in folders {
                println!("{}", sub.path());
            }
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn lookup<'r>(roots: &'r BookmarkRoots, path: Option<&str>) -> Result<Bookmark<'r>> {
    match path {
        Some(path) => Ok(roots.find(path)?),
        None => Ok(Bookmark::Folder(roots.bookmark_bar())),
    }
}

fn lookup_folder<'r>(roots: &'r BookmarkRoots, path: Option<&str>) -> Result<Folder<'r>> {
    match lookup(roots, path)? {
        Bookmark::Folder(folder) => Ok(folder),
        Bookmark::Link(link) => bail!("'{}' is a link, not a folder", link.path()),
    }
}

fn show_stats(roots: &BookmarkRoots, path: &std::path::Path, json: bool) -> Result<()> {
    let stats: Vec<RootStats<'_>> = roots
        .iter()
        .map(|(section, root)| RootStats {
            section,
            name: root.name(),
            urls: root.num_urls(),
            folders: root.num_folders(),
            subfolders: root.num_subfolders(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let total_folders: usize = stats.iter().map(|s| s.subfolders).sum();

    println!("Bookmark Statistics");
    println!("===================");
    println!("Total urls: {}", roots.num_urls());
    println!("Total folders: {}", total_folders);
    for s in &stats {
        println!(
            "  {} ({}): {} urls, {} folders, {} subfolders",
            s.section, s.name, s.urls, s.folders, s.subfolders
        );
    }
    println!();
    println!("Browser: {}", roots.browser());
    println!("Bookmark file: {}", format_path_with_tilde(path));

    Ok(())
}
