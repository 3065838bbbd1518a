//! ashvanta - Storefront header tooling

mod cli;

use anyhow::{Context, Result};
use ashvanta_core::HeaderConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ashvanta",
    version,
    about = "Inspect storefront menus and replay header behavior",
    long_about = "Runs the storefront header core outside the browser.\n\
                  \n\
                  Examples:\n\
                    ashvanta resolve header.json                    # Resolve a header/menu payload\n\
                    ashvanta resolve menu.json --host ashvanta.com  # Extra internal host\n\
                    ashvanta resolve menu.json --tree --json        # Nested entries as JSON\n\
                    ashvanta scroll 0 60 200 180                    # Replay a scroll trace\n\
                    ashvanta search \"silver rings\"                  # Print the results path\n\
                    ashvanta config                                 # Show effective config\n\
                  \n\
                  Environment Variables:\n\
                    ASHVANTA_CONFIG                  # Path to header.toml / header.json\n\
                    ASHVANTA_NO_COLOR                # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Header config file (default: <config dir>/ashvanta/header.toml)
    #[arg(long, global = true, env = "ASHVANTA_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "ASHVANTA_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a menu or header payload into header links
    Resolve {
        /// JSON file: a menu object, or a header query with `menu` and `shop`
        payload: PathBuf,
        /// Additional internal host (repeatable)
        #[arg(long = "host")]
        hosts: Vec<String>,
        /// Shop primary domain URL (overrides the payload's)
        #[arg(long)]
        primary_domain: Option<String>,
        /// Public storefront domain
        #[arg(long)]
        public_domain: Option<String>,
        /// Keep nested sub-menus
        #[arg(long)]
        tree: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay scroll offsets through the visibility tracker
    Scroll {
        /// Vertical offsets in event order
        #[arg(required = true, allow_negative_numbers = true)]
        offsets: Vec<f64>,
        /// Override top threshold
        #[arg(long)]
        top: Option<f64>,
        /// Override hide threshold
        #[arg(long)]
        hide: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the results path a search submit would navigate to
    Search {
        /// Raw input value
        term: String,
    },
    /// Print the effective header configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let no_color = args.no_color;

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref())?;

    let output = match args.command {
        Command::Resolve {
            payload,
            hosts,
            primary_domain,
            public_domain,
            tree,
            json,
        } => {
            let options = cli::ResolveOptions {
                hosts,
                primary_domain,
                public_domain,
                tree,
                json,
                no_color,
            };
            cli::run_resolve(&config, &payload, &options)?
        }
        Command::Scroll {
            offsets,
            top,
            hide,
            json,
        } => cli::run_scroll(&config, &offsets, top, hide, json, no_color)?,
        Command::Search { term } => cli::run_search(&config, &term)?,
        Command::Config { json } => cli::run_config(&config, json)?,
    };

    println!("{}", output);
    Ok(())
}

/// Explicit path must load; the default location may be absent
fn load_config(path: Option<&std::path::Path>) -> Result<HeaderConfig> {
    match path {
        Some(path) => HeaderConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(HeaderConfig::default_path()
            .map(|path| HeaderConfig::load_or_default(&path))
            .unwrap_or_default()),
    }
}
