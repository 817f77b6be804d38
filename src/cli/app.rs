//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::output::{Output, OutputFormat};
use super::reading::{self, ReadingArgs};
use crate::domain::{CastMethod, Line, LineKind, LineTexts};
use crate::storage::{Config, Corpus};

#[derive(Parser)]
#[command(name = "liuyao")]
#[command(author, version, about = "Six-line divination: cast, annotate and read hexagrams")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, global = true, env = "LIUYAO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Line-text corpus (JSON), replacing the configured or built-in one
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cast by tossing three coins for each line
    Coins {
        #[command(flatten)]
        reading: ReadingArgs,
    },

    /// Cast from the current time, or from a given date and hour
    Time {
        /// Date as Y-M-D
        #[arg(long)]
        date: Option<String>,

        /// Hour of the day (0-23), used with --date
        #[arg(long, requires = "date")]
        hour: Option<u32>,

        /// The date is a lunar date (recorded only; no conversion is done)
        #[arg(long, requires = "date")]
        lunar: bool,

        #[command(flatten)]
        reading: ReadingArgs,
    },

    /// Cast from six explicit lines, bottom first (0-3 or yang, yin, old-yang, old-yin)
    Manual {
        /// Line values
        #[arg(required = true, num_args = 1..)]
        lines: Vec<String>,

        #[command(flatten)]
        reading: ReadingArgs,
    },

    /// Cast with the configured default method
    Cast {
        #[command(flatten)]
        reading: ReadingArgs,
    },

    /// Look up the text of one line
    Text {
        /// Hexagram index (0-63)
        index: u8,

        /// Line position (1-6, bottom first)
        position: u8,

        /// Describe the line as yin when no text is stored
        #[arg(long)]
        yin: bool,
    },
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the level
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Loads the corpus from the first configured path, else the built-in one
fn load_corpus(path: Option<&Path>) -> Result<Corpus> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading corpus");
            Corpus::load(path).with_context(|| format!("Cannot use corpus {}", path.display()))
        }
        None => Corpus::builtin().context("Built-in corpus is invalid"),
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    let corpus_path = cli.corpus.as_deref().or(config.corpus.as_deref());
    let corpus = load_corpus(corpus_path)?;
    output.verbose_ctx("corpus", &format!("{} hexagrams with line texts", corpus.len()));

    let with_derived = |args: &ReadingArgs| config.show_derived && !args.primary_only;

    match cli.command {
        Commands::Coins { reading: args } => {
            reading::coins(&output, &corpus, with_derived(&args))?
        }

        Commands::Time { date, hour, lunar, reading: args } => reading::time(
            &output,
            &corpus,
            date.as_deref(),
            hour,
            lunar,
            with_derived(&args),
        )?,

        Commands::Manual { lines, reading: args } => {
            reading::manual(&output, &corpus, &lines, with_derived(&args))?
        }

        Commands::Cast { reading: args } => {
            output.verbose_ctx("cast", &format!("Default method: {}", config.default_method.as_str()));
            match config.default_method {
                CastMethod::Coins => reading::coins(&output, &corpus, with_derived(&args))?,
                _ => reading::time(&output, &corpus, None, None, false, with_derived(&args))?,
            }
        }

        Commands::Text { index, position, yin } => {
            text(&output, &corpus, index, position, yin)?
        }
    }

    output.verbose_ctx("done", "Command completed successfully");
    Ok(())
}

/// Prints the text of one line
fn text(output: &Output, corpus: &Corpus, index: u8, position: u8, yin: bool) -> Result<()> {
    if index > 63 {
        anyhow::bail!("Hexagram index must be 0-63, got {}", index);
    }
    if !(1..=6).contains(&position) {
        anyhow::bail!("Line position must be 1-6, got {}", position);
    }

    let kind = if yin { LineKind::YoungYin } else { LineKind::YoungYang };
    let line = Line::new(kind, position);
    let text = corpus.lookup(&line, index);

    if output.is_json() {
        output.data(&serde_json::json!({
            "index": index,
            "position": position,
            "text": text,
        }));
    } else {
        println!("{}", text);
    }

    Ok(())
}
