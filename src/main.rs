use std::{fs::File, io::IsTerminal, path::PathBuf, sync::Mutex};

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexitrie::{
    source::{FileSource, Format, StdinSource, WordSource},
    Trie,
};
use tracing::{debug, info, Level};

mod list;
mod search;
mod suggest;

use list::{execute_list, ListArgs};
use search::{execute_search, SearchArgs};
use suggest::{execute_suggest, SuggestArgs};

#[derive(Parser, Debug)]
#[command(version, about = "Look up and complete words from word lists.")]
struct Cli {
    /// Word list to load. May be repeated; piped stdin is read as well.
    #[arg(short, long = "words", value_name = "FILE", global = true)]
    words: Vec<PathBuf>,
    /// Layout of the word lists. Guessed from the file extension when omitted.
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether words are stored.
    Search(SearchArgs),
    /// List the stored words beginning with a prefix.
    Suggest(SuggestArgs),
    /// List every stored word.
    List(ListArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref(), cli.verbose)?;

    let mut sources: Vec<Box<dyn WordSource + Send + Sync>> = cli
        .words
        .iter()
        .map(|path| -> Box<dyn WordSource + Send + Sync> {
            match cli.format {
                Some(format) => Box::new(FileSource::with_format(path, format)),
                None => Box::new(FileSource::new(path)),
            }
        })
        .collect();
    if !std::io::stdin().is_terminal() {
        sources.push(Box::new(StdinSource::new(
            cli.format.unwrap_or(Format::Lines),
        )));
    }

    let trie = load_trie(&sources).await?;

    match cli.command {
        Command::Search(args) => execute_search(args, &trie, cli.json).await,
        Command::Suggest(args) => execute_suggest(args, &trie, cli.json).await,
        Command::List(args) => execute_list(args, &trie, cli.json).await,
    }
}

fn init_logging(log_file: Option<&PathBuf>, verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init(),
    }

    Ok(())
}

/// Loads every source into a fresh trie. Each source is inserted as one
/// batch, so a list with a non-string entry is rejected as a whole.
async fn load_trie(sources: &[Box<dyn WordSource + Send + Sync>]) -> anyhow::Result<Trie> {
    let mut trie = Trie::new();

    for source in sources {
        let name = source.describe();
        let values = source
            .load()
            .await
            .with_context(|| format!("failed to read word list {}", name))?;
        debug!("Inserting {} values from {}", values.len(), name);
        trie.try_add_values(&values)
            .with_context(|| format!("invalid word list {}", name))?;
    }

    info!("Loaded {} word list(s)", sources.len());
    Ok(trie)
}
