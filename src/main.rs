//! Shelf-Crawler main entry point
//!
//! Running the binary with no arguments crawls the first five catalog pages,
//! prints the number of books found and writes them to
//! `data/books_data.json`.

use anyhow::Context;
use clap::Parser;
use shelf_crawler::config::Config;
use shelf_crawler::crawler::Coordinator;
use shelf_crawler::output::save_books;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shelf-Crawler: a book catalog harvester
///
/// Walks the paginated catalog, visits every book's detail page and saves
/// the extracted records as a JSON array.
#[derive(Parser, Debug)]
#[command(name = "shelf-crawler")]
#[command(version)]
#[command(about = "A book catalog harvester", long_about = None)]
struct Cli {
    /// Optional TOML configuration file overriding the built-in defaults
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let coordinator = match &cli.config {
        Some(path) => Coordinator::from_config_file(path)
            .with_context(|| format!("failed to start from {}", path.display()))?,
        None => Coordinator::new(Config::default()).context("failed to build HTTP client")?,
    };
    let books = coordinator.run().await.context("crawl failed")?;

    println!("{}", books.len());

    let output = &coordinator.config().output;
    save_books(&books, &output.directory, &output.filename).context("failed to save books")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`/`-q`. Logs go to
/// stderr so stdout carries only the record count.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("shelf_crawler=info,warn"),
                1 => EnvFilter::new("shelf_crawler=debug,info"),
                2 => EnvFilter::new("shelf_crawler=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
