//! Lesewert CLI binary.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use lesewert::core::{Analyzer, AnalyzerConfig};
use lesewert::types::AnalysisResult;

/// CLI enum for the analysis output format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Parser)]
#[command(name = "lesewert")]
#[command(version)]
#[command(about = "SEO and readability analysis for English text", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text from a file or stdin
    Analyze {
        /// File to read; stdin is used when omitted
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Configuration file (defaults to discovering lesewert.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Start the API server
    Serve {
        /// Host address to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on (defaults to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Configuration file (defaults to discovering lesewert.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AnalyzerConfig> {
    let config = match path {
        Some(path) => AnalyzerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AnalyzerConfig::discover()
            .context("config discovery failed")?
            .unwrap_or_default(),
    };

    Ok(config.apply_env())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Listen port when `--port` is omitted: `$PORT` if set, else 3000.
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(lesewert::api::DEFAULT_PORT)
}

fn print_text_summary(result: &AnalysisResult) {
    println!("Readability:  {} ({})", result.readability, result.difficulty());
    println!("Title score:  {}", result.title_score);
    println!("Words:        {}", result.word_count);
    println!("Sentences:    {}", result.sentence_count);
    println!("Method:       {}", result.analysis_method);

    if !result.keywords.is_empty() {
        println!("Keywords:     {}", result.keywords.join(", "));
    }
    if !result.entities.is_empty() {
        println!("Entities:     {}", result.entities.join(", "));
    }

    if !result.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &result.suggestions {
            println!("  - {suggestion}");
        }
    }

    println!();
    println!("Optimized text:");
    println!("{}", result.optimized_text);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { file, format, config } => {
            let config = load_config(config.as_ref())?;
            let text = read_input(file.as_ref())?;

            let analyzer = Analyzer::new(config)?;
            let result = analyzer.analyze(&text).await?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => print_text_summary(&result),
            }

            Ok(())
        }

        Commands::Serve { host, port, config } => {
            let port = port.unwrap_or_else(default_port);

            match config {
                Some(path) => {
                    let config = load_config(Some(&path))?;
                    lesewert::api::serve_with_config(&host, port, config).await?;
                }
                None => {
                    lesewert::api::serve(&host, port).await?;
                }
            }

            Ok(())
        }
    }
}
