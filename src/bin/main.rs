use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use revved_finder::{FinderConfig, GlobExpander, RevMapping, RevvedFinder};

/// Print the revved version of each asset reference.
#[derive(Debug, Parser)]
#[command(name = "revved-finder", version, about)]
struct Cli {
    /// References to resolve, as written in the referencing asset.
    #[arg(required = true)]
    references: Vec<String>,

    /// Directory to look references up under; repeat to search several in order.
    #[arg(short = 'd', long = "search-dir", value_name = "DIR")]
    search_dirs: Vec<String>,

    /// Rename mapping (JSON or YAML) to consult instead of searching the filesystem.
    #[arg(short, long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// Configuration file; defaults to revved.config.json in the current directory.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (config, config_dir) = load_config(cli.config.as_deref())?;

    let search_dirs = if cli.search_dirs.is_empty() {
        config.search_dirs.clone()
    } else {
        cli.search_dirs
    };

    let mapping_path = cli.mapping.or_else(|| config.mapping_path(&config_dir));
    let finder = match mapping_path {
        Some(path) => {
            let mapping = RevMapping::load(&path)
                .with_context(|| format!("failed to load mapping {}", path.display()))?;
            RevvedFinder::from_mapping(mapping)
        }
        None => RevvedFinder::from_expander(GlobExpander::new()),
    };

    for reference in &cli.references {
        println!("{}", finder.find(reference, &search_dirs));
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<(FinderConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let config = FinderConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok((config, dir))
        }
        None => {
            let dir = std::env::current_dir().context("failed to read current directory")?;
            Ok((FinderConfig::discover(&dir), dir))
        }
    }
}
