//! relay - handwritten note chunking CLI
//!
//! Reads OCR output captured from a handwritten note and turns it into chunks
//! for semantic interpretation.
//!
//! Usage:
//!   relay chunk <INPUT>                   Print the chunks of a capture
//!   relay prompt <INPUT>                  Print the language-model prompts
//!   relay classify <INPUT> -r <RESPONSE>  Replay a recorded classification
//!
//! `<INPUT>` is either plain OCR text or a layout capture (JSON array of
//! `{"text", "indent", "page"}` records). Files ending in `.json` are read as
//! layout captures unless `--format` says otherwise.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use relay_core::{
    build_prompt, chunk_capture, parse_layout, Chunk, ChunkingOptions, Classifier, Item,
    OcrOutput, ReplayClassifier, SYSTEM_PROMPT,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;

use config::{default_config_path, load_config};

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Relay - turn handwritten-note OCR captures into chunks")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Minimum indent gap between nesting levels (overrides the config file)
    #[arg(long, global = true, value_name = "N")]
    indent_threshold: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

/// Captured OCR output to read
#[derive(Args, Clone)]
struct InputArgs {
    /// Path to the captured OCR output
    input: PathBuf,

    /// How to read the input (defaults to layout for .json files, text otherwise)
    #[arg(long, value_enum)]
    format: Option<InputFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum InputFormat {
    /// Plain newline-delimited OCR text
    Text,
    /// JSON array of lines with indents
    Layout,
}

impl InputFormat {
    fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::Layout
        } else {
            Self::Text
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the chunks of a capture
    Chunk {
        #[command(flatten)]
        input: InputArgs,

        /// Output chunks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the system and user prompts for the language model
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Classify chunks by replaying a recorded language-model response
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// File holding the model's raw response
        #[arg(short, long, value_name = "FILE")]
        response: PathBuf,

        /// Output items as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;
    let options = config.chunking_options(cli.indent_threshold);
    tracing::debug!(
        "Using indent threshold {} (config: {})",
        options.indent_threshold,
        config_path.display()
    );

    match cli.command {
        Commands::Chunk { input, json } => cmd_chunk(&input, &options, json),
        Commands::Prompt { input } => cmd_prompt(&input, &options),
        Commands::Classify {
            input,
            response,
            json,
        } => cmd_classify(&input, &response, &options, json),
    }
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn read_capture(args: &InputArgs) -> Result<OcrOutput> {
    let path = &args.input;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read OCR capture: {}", path.display()))?;

    let format = args
        .format
        .unwrap_or_else(|| InputFormat::from_path(path));

    let output = match format {
        InputFormat::Layout => OcrOutput::LayoutAware(
            parse_layout(&contents)
                .with_context(|| format!("Failed to parse layout capture: {}", path.display()))?,
        ),
        InputFormat::Text => OcrOutput::Flat(contents),
    };
    Ok(output)
}

fn capture_chunks(args: &InputArgs, options: &ChunkingOptions) -> Result<Vec<Chunk>> {
    let capture = read_capture(args)?;
    let chunks = chunk_capture(&capture, options);
    tracing::info!(
        "Extracted {} chunks from {} ({} OCR)",
        chunks.len(),
        args.input.display(),
        capture.path_name()
    );
    Ok(chunks)
}

fn cmd_chunk(args: &InputArgs, options: &ChunkingOptions, json: bool) -> Result<()> {
    let chunks = capture_chunks(args, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    for (idx, chunk) in chunks.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("[{}]", chunk.id);
        println!("{}", chunk.text);
    }
    Ok(())
}

fn cmd_prompt(args: &InputArgs, options: &ChunkingOptions) -> Result<()> {
    let chunks = capture_chunks(args, options)?;

    println!("# System\n\n{SYSTEM_PROMPT}\n");
    println!("# User\n\n{}", build_prompt(&chunks));
    Ok(())
}

fn cmd_classify(
    args: &InputArgs,
    response: &Path,
    options: &ChunkingOptions,
    json: bool,
) -> Result<()> {
    let chunks = capture_chunks(args, options)?;

    let raw = std::fs::read_to_string(response)
        .with_context(|| format!("Failed to read model response: {}", response.display()))?;
    let classifier = ReplayClassifier::new(raw);
    let items = classifier
        .classify(&chunks)
        .context("Failed to classify chunks")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{}", format_item(item));
        }
    }
    Ok(())
}

fn format_item(item: &Item) -> String {
    format!(
        "{}{:<8} {:.2}  {}",
        "  ".repeat(item.level),
        item.item_type.as_str(),
        item.confidence,
        item.text
    )
}
