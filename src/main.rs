use std::io::{self, IsTerminal, Read};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod lexicon;
mod models;
mod mood;
mod prompts;
mod reflect;
mod report;
mod safety;
mod search;
mod store;
mod streak;

use config::Config;
use error::JournalError;
use models::ReflectionResult;
use reflect::{GeminiProvider, ReflectionGenerator};
use search::Limit;
use store::EntryStore;

#[derive(Parser)]
#[command(name = "memora")]
#[command(about = "Personal journal with AI reflections and mood tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save today's entry and reflect on it (reads stdin when TEXT is omitted)
    Write { text: Option<String> },
    /// Reflect on text or a stored entry without saving
    #[command(group(
        ArgGroup::new("source")
            .args(["text", "date"])
            .multiple(false)
    ))]
    Reflect {
        text: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show totals, streaks and the weekly mood trend
    Dashboard,
    /// Show mood scores for the last 7 days
    Trends,
    /// List past entries, newest first
    History {
        #[arg(long)]
        search: Option<String>,
        /// Number of entries to show, or "All"
        #[arg(long, default_value = "5")]
        show: Limit,
    },
    /// Word and character counts for one entry (defaults to today)
    Stats {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Suggest something to write about
    Prompt,
    /// Write every entry to a markdown file
    Export,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    if let Err(err) = app_main().await {
        tracing::error!(?err, "command failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn app_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    let store = EntryStore::new(&config.data_path);

    match cli.command {
        Commands::Write { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let date = store.save(&text)?;
            println!("Entry saved for {date}.");
            println!();

            let generator = reflection_generator(&config)?;
            print_reflection(&generator.reflect(&text).await);
        }
        Commands::Reflect { text, date } => {
            let text = match (text, date) {
                (Some(text), _) => text,
                (None, Some(date)) => match store.get(date) {
                    Some(text) => text,
                    None => {
                        println!("No entry for {date}.");
                        return Ok(());
                    }
                },
                (None, None) => read_stdin()?,
            };
            if text.trim().is_empty() {
                return Err(JournalError::EmptyEntry.into());
            }

            let generator = reflection_generator(&config)?;
            print_reflection(&generator.reflect(&text).await);
        }
        Commands::Dashboard => {
            let entries = store.load();
            let dashboard = report::build_dashboard(&entries, models::today());
            print!("{}", report::render_dashboard(&dashboard));
        }
        Commands::Trends => {
            let entries = store.load();
            let points = report::mood_points(&entries, models::today());
            print!("{}", report::render_trend(points.as_deref()));
        }
        Commands::History { search: term, show } => {
            let entries = store.load();
            if entries.is_empty() {
                println!("Start your journaling journey by writing your first entry.");
                return Ok(());
            }
            let filtered = search::filter(&entries, term.as_deref().unwrap_or_default());
            let selected = search::limit(&filtered, show);
            print!("{}", report::render_history(&selected));
        }
        Commands::Stats { date } => {
            let date = date.unwrap_or_else(models::today);
            match store.get(date) {
                Some(text) => {
                    let stats = report::entry_stats(&text);
                    println!(
                        "{date}: {} words, {} characters",
                        stats.word_count, stats.char_count
                    );
                }
                None => println!("No entry for {date}."),
            }
        }
        Commands::Prompt => {
            println!("{}", prompts::random_prompt());
        }
        Commands::Export => {
            let entries = store.load();
            match report::export_entries(&entries, &config.export_dir, models::today())? {
                Some(path) => println!("Journal exported to {}.", path.display()),
                None => println!("Nothing to export yet."),
            }
        }
    }

    Ok(())
}

fn reflection_generator(config: &Config) -> anyhow::Result<ReflectionGenerator<GeminiProvider>> {
    let provider = GeminiProvider::from_config(config)?;
    Ok(ReflectionGenerator::new(provider, config.provider_timeout))
}

fn print_reflection(result: &ReflectionResult) {
    match result {
        ReflectionResult::SafetyConcern(message) => {
            println!("!! {message}");
        }
        ReflectionResult::Reflection(body) => {
            println!("## Reflection");
            println!();
            println!("{body}");
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("How was your day? Finish with Ctrl-D.");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read entry from stdin")?;
    Ok(text)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
