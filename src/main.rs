//! Mauka Autocomplete - Main entrypoint.
//!
//! Loads configuration, fills a prefix tree from a word list and any words
//! given on the command line, then answers a single query.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mauka_autocomplete_lib::config::{
    AutocompleteConfig, CompletionConfig, ConfigLoader, LogConfig, Validate, ENV_PREFIX,
};
use mauka_autocomplete_lib::data_structures::PrefixTree;
use mauka_autocomplete_lib::dictionary::load_dictionary_file;
use mauka_autocomplete_lib::error::{AutocompleteError, AutocompleteResult};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Autocomplete.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Autocomplete", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Extra word to add after the word list (repeatable)
    #[clap(short = 'w', long = "word", value_parser)]
    words: Vec<String>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word starting with a prefix
    Complete {
        /// Prefix to complete (may be empty)
        prefix: String,

        /// Maximum number of suggestions
        #[clap(short, long, value_parser)]
        limit: Option<usize>,

        /// Print suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Check whether a word was added
    Contains {
        /// Word to look up
        word: String,
    },

    /// Print word and node counts
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that stdout carries only query results.
fn init_logging(config: &LogConfig) -> AutocompleteResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        AutocompleteError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Builds the tree from the word list and the extra words.
fn build_tree(
    config: &AutocompleteConfig,
    dictionary: Option<&Path>,
    words: &[String],
) -> AutocompleteResult<PrefixTree> {
    let mut tree = PrefixTree::new();

    if let Some(path) = dictionary.or(config.dictionary.path.as_deref()) {
        load_dictionary_file(&mut tree, path, &config.dictionary)?;
    }
    tree.extend(words);

    debug!(
        words = tree.size(),
        nodes = tree.node_count(),
        "Prefix tree ready"
    );
    Ok(tree)
}

/// Applies a `--limit` override on top of the configured completion settings.
fn resolve_completion(
    config: &CompletionConfig,
    limit: Option<usize>,
) -> AutocompleteResult<CompletionConfig> {
    let mut completion = config.clone();
    if limit.is_some() {
        completion.limit = limit;
    }
    completion.validate()?;
    Ok(completion)
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> AutocompleteResult<()> {
    let default_config = AutocompleteConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| AutocompleteError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    println!("Default configuration written to {}", output.display());
    Ok(())
}

/// Main entry point for the application.
fn main() -> AutocompleteResult<()> {
    let args = Args::parse();

    // Generating a config must work even when the current one is broken
    if let Command::GenConfig { output } = &args.command {
        return gen_config(output);
    }

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load()?;
    init_logging(&config.log)?;

    if let Command::Validate = args.command {
        info!("Configuration validated successfully");
        println!("Configuration is valid");
        return Ok(());
    }

    let tree = build_tree(&config, args.dictionary.as_deref(), &args.words)?;

    match args.command {
        Command::Complete {
            prefix,
            limit,
            json,
        } => {
            let completion = resolve_completion(&config.completion, limit)?;

            let suggestions = completion.apply(tree.words_for_prefix(&prefix));
            info!(prefix = %prefix, count = suggestions.len(), "Completed prefix");

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for word in suggestions {
                    println!("{word}");
                }
            }
        }
        Command::Contains { word } => {
            println!("{}", tree.contains(&word));
        }
        Command::Stats => {
            println!("words: {}", tree.size());
            println!("nodes: {}", tree.node_count());
        }
        Command::Validate | Command::GenConfig { .. } => {}
    }

    Ok(())
}
