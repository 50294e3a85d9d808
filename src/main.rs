//! book-catalog - command line driver for the book catalog.
//!
//! Every subcommand loads the catalog file, applies one operation and,
//! when something changed, writes it back in the same format. `shell`
//! starts the interactive numbered menu instead.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use book_catalog::{BookId, Catalog, CatalogError, Format, Query};

mod shell;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "book-catalog", about = "Manage a catalog of books", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Catalog file to read and update
    #[clap(long, default_value = "library.json", global = true)]
    catalog: PathBuf,

    /// File format (json or text). Inferred from the file extension when omitted
    #[clap(long, global = true)]
    format: Option<Format>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a book; it starts out available
    Add {
        title: String,
        author: String,
        #[clap(allow_negative_numbers = true)]
        year: i64,
    },
    /// Remove a book by id
    Remove { id: u64 },
    /// Search books; every given criterion must match exactly
    Find {
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        author: Option<String>,
        #[clap(long, allow_negative_numbers = true)]
        year: Option<i64>,
    },
    /// Show all books
    List,
    /// Switch a book between available and checked out
    Toggle { id: u64 },
    /// Write the catalog to another file, by default in the other format
    Convert {
        dest: PathBuf,
        #[clap(long)]
        to: Option<Format>,
    },
    /// Interactive menu
    Shell,
}

fn initialize_tracing(level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let format = cli
        .format
        .unwrap_or_else(|| Format::from_path(&cli.catalog));
    let mut catalog = open_or_empty(&cli.catalog, format)?;

    match cli.command {
        Command::Add {
            title,
            author,
            year,
        } => {
            let book = catalog.add(title, author, year)?;
            println!(
                "Added '{}' by {} ({}) with id {}",
                book.title(),
                book.author(),
                book.year(),
                book.id()
            );
            save(&catalog, &cli.catalog, format)?;
        }
        Command::Remove { id } => {
            if !catalog.remove(BookId::new(id)) {
                bail!("no book with id {id}");
            }
            println!("Removed book {id}");
            save(&catalog, &cli.catalog, format)?;
        }
        Command::Find {
            title,
            author,
            year,
        } => {
            let query = Query {
                title,
                author,
                year,
            };
            let books = catalog.find(&query);
            if books.is_empty() {
                println!("No books match");
            }
            for (idx, book) in books.iter().enumerate() {
                println!("{}. {}", idx + 1, book);
            }
        }
        Command::List => {
            for line in catalog.display() {
                println!("{line}");
            }
        }
        Command::Toggle { id } => {
            let id = BookId::new(id);
            if !catalog.toggle_status(id) {
                bail!("no book with id {id}");
            }
            if let Some(book) = catalog.get(id) {
                println!("Book {} is now {}", id, book.status());
            }
            save(&catalog, &cli.catalog, format)?;
        }
        Command::Convert { dest, to } => {
            let target = to.unwrap_or(match format {
                Format::Json => Format::Text,
                Format::Text => Format::Json,
            });
            save(&catalog, &dest, target)?;
            println!("Wrote {} books to {} ({})", catalog.len(), dest.display(), target);
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::Shell::new(catalog, stdin.lock(), io::stdout()).run()?;
        }
    }

    Ok(())
}

/// A catalog file that does not exist yet is an empty catalog.
fn open_or_empty(path: &Path, format: Format) -> Result<Catalog> {
    match Catalog::open(path, format) {
        Ok(catalog) => Ok(catalog),
        Err(CatalogError::NotFound { .. }) => {
            debug!(path = %path.display(), "no catalog file yet, starting empty");
            Ok(Catalog::new())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to load catalog from {}", path.display()))
        }
    }
}

fn save(catalog: &Catalog, path: &Path, format: Format) -> Result<()> {
    catalog
        .save_to(path, format)
        .with_context(|| format!("failed to save catalog to {}", path.display()))
}
