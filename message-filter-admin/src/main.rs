use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use message_filter::{normalize, FilterConfig, MessageFilter};

#[derive(Parser, Debug)]
#[command(
    name = "message-filter-admin",
    about = "Inspect and exercise a homoglyph-aware banned-word list"
)]
struct Cli {
    /// Config file (defaults to ./filter.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Extra word to ban on top of the config (repeatable)
    #[arg(long = "word", global = true)]
    words: Vec<String>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the normalized form of TEXT
    Normalize { text: String },
    /// Check MESSAGE and print the verdict as JSON; exits 1 when flagged
    Check { message: String },
    /// Print the banned words as a JSON array
    List,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    match &cli.cmd {
        Cmd::Normalize { text } => {
            println!("{}", normalize(text));
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Check { message } => {
            let filter = build_filter(&cli)?;
            let verdict = filter.evaluate(message);
            println!("{}", serde_json::to_string(&verdict).context("serialize verdict")?);
            Ok(if verdict.flagged {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Cmd::List => {
            let filter = build_filter(&cli)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&filter.banned_words()).context("serialize word list")?
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_filter(cli: &Cli) -> Result<MessageFilter> {
    let cfg = match &cli.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("resolve current directory")?;
            FilterConfig::load(&cwd)?
        }
    };
    let mut filter = MessageFilter::from_config(&cfg)?;
    for word in &cli.words {
        filter
            .ban(word)
            .with_context(|| format!("--word {word:?}"))?;
    }
    tracing::debug!(count = filter.len(), "filter ready");
    Ok(filter)
}
