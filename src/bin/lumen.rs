//! CLI binary for lumen.

use clap::{Parser, Subcommand};
use lumen::{LumenConfig, SearchResult, SearchSession};
use std::io::Write as _;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lumen: answer questions from the web.
#[derive(Parser)]
#[command(name = "lumen", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true, env = "LUMEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single query.
    Ask {
        /// The question to answer.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Read queries interactively from stdin.
    Repl,

    /// Print the effective configuration (keys redacted).
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for answers and JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lumen=info,lumen_search=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Ask { query, json } => run_ask(&config, &query.join(" "), json).await,
        Command::Repl => run_repl(&config).await,
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config.redacted())?);
            Ok(())
        }
    }
}

/// Explicit path, else the default path if it exists, else defaults.
/// Environment keys are applied last.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<LumenConfig> {
    let mut config = match path {
        Some(path) => LumenConfig::from_file(path)?,
        None => {
            let default_path = LumenConfig::default_config_path();
            if default_path.is_file() {
                LumenConfig::from_file(&default_path)?
            } else {
                LumenConfig::default()
            }
        }
    };
    config.apply_env();
    Ok(config)
}

async fn run_ask(config: &LumenConfig, query: &str, json: bool) -> anyhow::Result<()> {
    let mut session = SearchSession::from_config(config)?;

    let Some(result) = session.perform_search(query).await else {
        let message = session.last_error().unwrap_or("query is empty").to_owned();
        anyhow::bail!(message);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

async fn run_repl(config: &LumenConfig) -> anyhow::Result<()> {
    let mut session = SearchSession::from_config(config)?;
    println!("Lumen v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a question, :history, :clear or :quit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("received Ctrl+C, shutting down...");
                None
            }
        };
        let Some(line) = line else { break };

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => {
                if session.history().is_empty() {
                    println!("(no history)");
                }
                for (i, entry) in session.history().iter().enumerate() {
                    println!(
                        "{:>2}. {}  [{}]",
                        i + 1,
                        entry.query,
                        entry.timestamp.format("%H:%M:%S")
                    );
                }
            }
            ":clear" => {
                session.clear_history();
                session.clear_current_result();
                println!("History cleared.");
            }
            query => match session.perform_search(query).await {
                Some(result) => print_result(&result),
                None => {
                    if let Some(error) = session.last_error() {
                        eprintln!("Search failed: {error}");
                    }
                }
            },
        }
        println!();
    }

    Ok(())
}

fn print_result(result: &SearchResult) {
    println!("{}\n", result.answer);

    if !result.follow_up_questions.is_empty() {
        println!("Follow-up questions:");
        for question in &result.follow_up_questions {
            println!("  - {question}");
        }
        println!();
    }

    if !result.sources.is_empty() {
        println!("Sources:");
        for (i, source) in result.sources.iter().enumerate() {
            println!("  [{}] {} ({})", i + 1, source.title, source.domain);
            println!("      {}", source.url);
        }
        println!();
    }

    println!(
        "Confidence: {:.0}%  |  {} ms",
        result.confidence * 100.0,
        result.search_time
    );
}
