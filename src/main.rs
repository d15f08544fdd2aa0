// src/main.rs
mod extractors;
mod storage;
mod suggestion;
mod utils;

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use extractors::section::{SectionExtractor, SectionKey};
use storage::StorageManager;
use suggestion::{client, SuggestionClient, SuggestionRequest};
use utils::AppError;

const BASE_URL_ENV: &str = "SUGGESTION_BASE_URL";
const DEFAULT_DEBUG_DIR: &str = "./output";

/// Splits AI-generated clothing suggestions into structured sections
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory to save the extracted record, raw text and metadata (optional)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// File stem used for everything written to the output directory
    #[arg(short, long, default_value = "suggestion", global = true)]
    name: String,

    /// Debug mode - save the raw text annotated with located section spans
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract sections from text in a file, or from stdin
    Extract {
        /// Input file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Request a suggestion from the generation service, then extract it
    Suggest {
        #[arg(long)]
        age: String,

        #[arg(long)]
        height: String,

        #[arg(long)]
        skin_tone: String,

        #[arg(long)]
        color_preferences: String,

        /// Service base URL (falls back to SUGGESTION_BASE_URL, then the local default)
        #[arg(long)]
        base_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = client::DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Obtain the raw suggestion text
    let raw = match &args.command {
        Command::Extract { input } => read_input(input.as_ref())?,
        Command::Suggest { age, height, skin_tone, color_preferences, base_url, timeout_secs } => {
            let base_url = resolve_base_url(base_url.clone(), std::env::var(BASE_URL_ENV).ok())?;
            tracing::debug!("Using suggestion service at {}", base_url);

            let suggestion_client = SuggestionClient::new(&base_url, Duration::from_secs(*timeout_secs))?;
            let request = SuggestionRequest {
                age: age.clone(),
                height: height.clone(),
                skin_tone: skin_tone.clone(),
                color_preferences: color_preferences.clone(),
            };
            suggestion_client.fetch_suggestion(&request).await?
        }
    };
    tracing::info!("Received {} bytes of suggestion text", raw.len());
    if raw.trim().is_empty() {
        tracing::warn!("Suggestion text is empty; every section will be absent");
    }

    // 4. Extract sections
    let extractor = SectionExtractor::new()?;
    let (record, spans) = extractor.extract_with_spans(&raw);
    if record.is_empty() {
        tracing::warn!("No recognizable sections in suggestion text");
    }

    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| AppError::Processing(format!("Failed to serialize record: {}", e)))?;
    println!("{}", json);

    // 5. Persist results if requested
    if let Some(dir) = &args.output_dir {
        let storage = StorageManager::new(dir)?;
        let located: Vec<SectionKey> = spans.iter().map(|(key, _)| *key).collect();

        match storage.save_record(&args.name, &record) {
            Ok(path) => tracing::info!("Saved record to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save record: {}", e),
        }
        match storage.save_raw_text(&args.name, &raw) {
            Ok(path) => tracing::info!("Saved raw text to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save raw text: {}", e),
        }
        match storage.save_metadata(&args.name, &record, &located, &raw) {
            Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save metadata: {}", e),
        }
    }

    // 6. Debug annotations
    if args.debug {
        let debug_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEBUG_DIR))
            .join("debug");
        std::fs::create_dir_all(&debug_dir)?;
        let debug_path = debug_dir.join(format!("{}_annotated.txt", args.name));
        if let Err(e) = utils::span_debug::save_span_debug(&raw, &debug_path, &spans) {
            tracing::warn!("Failed to create span debug file: {}", e);
        }
    }

    Ok(())
}

/// Picks the service URL: the flag, then the environment, then the local default.
fn resolve_base_url(flag: Option<String>, env: Option<String>) -> Result<String, AppError> {
    let base_url = flag
        .or(env)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| client::DEFAULT_BASE_URL.to_string());

    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "Suggestion service URL '{}' must start with http:// or https:// (set --base-url or {})",
            base_url, BASE_URL_ENV
        )));
    }
    Ok(base_url)
}

fn read_input(input: Option<&PathBuf>) -> Result<String, AppError> {
    match input {
        Some(path) => {
            tracing::info!("Reading suggestion text from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::info!("Reading suggestion text from stdin");
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
