//! GX - people and kanban boards from the command line
//!
//! Thin driver over the gx_core library. Nothing is persisted between runs.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use gx_core::{explode, BoardConfig, KanbanBoard, Person, LOG_ENV};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gx")]
#[command(version)]
#[command(about = "People with mutual friendships and kanban boards", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a full name into first, middle and last name
    Person {
        /// Full name (e.g., Madonna Louise Cicone)
        #[arg(num_args = 0..)]
        full_name: Vec<String>,
        /// Output format (table, json, yaml)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Make two people friends and show both friend lists
    Friends {
        /// First person's full name
        first: String,
        /// Second person's full name
        second: String,
    },
    /// Inspect and change a board (show, add, remove)
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
    /// Run a function that always fails
    Explode,
}

#[derive(Subcommand)]
enum BoardCommands {
    /// Show a board's statuses
    Show {
        #[command(flatten)]
        source: BoardSource,
        /// Output format (table, json, yaml)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Append a status and show the result
    Add {
        /// Status label
        status: String,
        #[command(flatten)]
        source: BoardSource,
    },
    /// Remove a status and print how many remain
    Remove {
        /// Status label
        status: String,
        #[command(flatten)]
        source: BoardSource,
    },
}

#[derive(clap::Args)]
struct BoardSource {
    /// Board definition file (YAML)
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Board name when no config file is given
    #[arg(long, default_value = "Things to Do")]
    name: String,
}

impl BoardSource {
    fn open(&self) -> anyhow::Result<KanbanBoard> {
        match &self.config {
            Some(path) => {
                let config = BoardConfig::load(path)
                    .with_context(|| format!("Failed to load board from {}", path.display()))?;
                Ok(KanbanBoard::from_config(&config))
            }
            None => Ok(KanbanBoard::new(&self.name)),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_formatted<T: Serialize>(value: &T, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(value)?),
        "yaml" => print!("{}", serde_yaml::to_string(value)?),
        other => bail!("Unknown format: {} (expected table, json or yaml)", other),
    }
    Ok(())
}

fn print_board(board: &KanbanBoard) {
    println!("Board: {}", board.name());
    for (index, status) in board.statuses().iter().enumerate() {
        println!("  {:>2}. {}", index + 1, status);
    }
}

fn print_friends(person: &Person) {
    let friends: Vec<String> = person.friends().iter().map(|f| f.to_string()).collect();
    if friends.is_empty() {
        println!("{}: (no friends)", person);
    } else {
        println!("{}: {}", person, friends.join(", "));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Person { full_name, format } => {
            let person = Person::new(&full_name.join(" "))?;

            if format == "table" {
                println!("First:  {}", person.first_name());
                println!("Middle: {}", person.middle_name().unwrap_or("-"));
                println!("Last:   {}", person.last_name().unwrap_or("-"));
            } else {
                print_formatted(person.name(), &format)?;
            }
        }

        Commands::Friends { first, second } => {
            let a = Person::new(&first)?;
            let b = Person::new(&second)?;
            a.add_friend(&b);

            print_friends(&a);
            print_friends(&b);
        }

        Commands::Board { command } => match command {
            BoardCommands::Show { source, format } => {
                let board = source.open()?;
                if format == "table" {
                    print_board(&board);
                } else {
                    print_formatted(&board, &format)?;
                }
            }

            BoardCommands::Add { status, source } => {
                let mut board = source.open()?;
                board.add_status(status);
                print_board(&board);
            }

            BoardCommands::Remove { status, source } => {
                let mut board = source.open()?;
                let remaining = board.remove_status(&status).await;
                println!("✓ {} statuses remain on '{}'", remaining, board.name());
            }
        },

        Commands::Explode => {
            explode().context("explode")?;
        }
    }

    Ok(())
}
