use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use taskmine::extract::LlmClient;
use taskmine::{ActionItemExtractor, ExtractError, ExtractionStrategy, ExtractorConfig, OllamaClient};

#[derive(Parser)]
#[command(name = "taskmine", version, about = "Extract action items from free-form notes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract action items from a note file (stdin when omitted)
    Extract {
        file: Option<PathBuf>,

        /// Extraction strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Heuristic)]
        strategy: StrategyArg,

        /// Model identifier (overrides OLLAMA_MODEL / the default)
        #[arg(long)]
        model: Option<String>,

        /// Ollama base URL (overrides OLLAMA_URL / the default)
        #[arg(long)]
        ollama_url: Option<String>,

        /// Collaborator call timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Emit {id, text} objects instead of bare strings
        #[arg(long)]
        ids: bool,
    },
    /// List models available on the Ollama instance
    Models {
        /// Ollama base URL (overrides OLLAMA_URL / the default)
        #[arg(long)]
        ollama_url: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    /// Pattern/keyword classification, no network
    Heuristic,
    /// Model only; failures abort
    Model,
    /// Model first, heuristic on call failure
    ModelFallback,
}

impl From<StrategyArg> for ExtractionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Heuristic => ExtractionStrategy::Heuristic,
            StrategyArg::Model => ExtractionStrategy::Model,
            StrategyArg::ModelFallback => ExtractionStrategy::ModelWithFallback,
        }
    }
}

/// Caller-side output shape; the engine itself only deals in strings.
#[derive(Serialize)]
struct ExtractedItem {
    id: Uuid,
    text: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ExtractError> {
    match cli.command {
        Command::Extract {
            file,
            strategy,
            model,
            ollama_url,
            timeout,
            ids,
        } => {
            let mut config = ExtractorConfig::from_env();
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(url) = ollama_url {
                config.base_url = url.trim_end_matches('/').to_string();
            }
            if let Some(secs) = timeout {
                config.timeout_secs = secs;
            }

            let text = read_input(file.as_deref())?;
            let client = OllamaClient::new(&config.base_url, Duration::from_secs(config.timeout_secs));
            let extractor =
                ActionItemExtractor::new(Arc::new(config), Box::new(client), strategy.into());

            let items = extractor.extract(&text)?;
            tracing::info!(items = items.len(), "extraction finished");

            let json = if ids {
                let items: Vec<ExtractedItem> = items
                    .into_iter()
                    .map(|text| ExtractedItem {
                        id: Uuid::new_v4(),
                        text,
                    })
                    .collect();
                serde_json::to_string_pretty(&items)
            } else {
                serde_json::to_string_pretty(&items)
            }
            .expect("serializing extraction output cannot fail");
            println!("{json}");
            Ok(())
        }
        Command::Models { ollama_url } => {
            let mut config = ExtractorConfig::from_env();
            if let Some(url) = ollama_url {
                config.base_url = url.trim_end_matches('/').to_string();
            }
            let client =
                OllamaClient::new(&config.base_url, Duration::from_secs(config.timeout_secs));
            for model in client.list_models()? {
                println!("{model}");
            }
            Ok(())
        }
    }
}

fn read_input(file: Option<&std::path::Path>) -> Result<String, ExtractError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
