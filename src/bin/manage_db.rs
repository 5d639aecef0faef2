//! CLI tool to manage the catalog database.
//!
//! Usage:
//!   cargo run --bin manage-db -- migrate
//!   cargo run --bin manage-db -- setup
//!   cargo run --bin manage-db -- list --json

use std::env;

use tracing::info;

use video_catalog_lib::config::Config;
use video_catalog_lib::db::{DbPool, videos};
use video_catalog_lib::error::AppResult;
use video_catalog_lib::logging;
use video_catalog_lib::services::{self, SeedPlan};

/// A parsed `manage-db` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Migrate,
    Status,
    Seed,
    Setup,
    Reset,
    List { json: bool },
    Help,
}

impl Command {
    /// Parse the arguments following the program name.
    fn parse(args: &[String]) -> Result<Self, String> {
        let Some(command) = args.first() else {
            return Err("Missing command".to_string());
        };

        match command.as_str() {
            "migrate" => Ok(Self::Migrate),
            "status" => Ok(Self::Status),
            "seed" => Ok(Self::Seed),
            "setup" => Ok(Self::Setup),
            "reset" => Ok(Self::Reset),
            "list" | "ls" => Ok(Self::List {
                json: args[1..].iter().any(|a| a == "--json"),
            }),
            "help" | "--help" | "-h" => Ok(Self::Help),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    logging::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match DbPool::new(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    match command {
        Command::Migrate => {
            migrate(&pool).await;
            println!("Migrations complete.");
        }
        Command::Status => status(&pool).await,
        Command::Seed => seed(&pool, &config).await,
        Command::Setup => {
            migrate(&pool).await;
            info!("Migrations complete");
            seed(&pool, &config).await;
        }
        Command::Reset => reset(&pool, &config).await,
        Command::List { json } => {
            if let Err(e) = list(&pool, json).await {
                eprintln!("Error listing catalog: {}", e);
                std::process::exit(1);
            }
        }
        Command::Help => print_usage(),
    }
}

async fn migrate(pool: &DbPool) {
    if let Err(e) = pool.run_migrations().await {
        eprintln!("Error running migrations: {}", e);
        std::process::exit(1);
    }
}

async fn status(pool: &DbPool) {
    let pending = match pool.pending_migrations().await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error reading migration status: {}", e);
            std::process::exit(1);
        }
    };

    if pending.is_empty() {
        println!("Schema is up to date.");
        return;
    }

    println!("{} pending migration(s):", pending.len());
    for name in pending {
        println!("  {}", name);
    }
}

async fn seed(pool: &DbPool, config: &Config) {
    if let Err(e) = services::ensure_seed_permitted(config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match services::run_seed(pool, &SeedPlan::catalog()).await {
        Ok(_) => println!("{}", services::COMPLETION_MESSAGE),
        Err(e) => {
            eprintln!("Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn reset(pool: &DbPool, config: &Config) {
    match services::reset_and_seed(pool, config, &SeedPlan::catalog()).await {
        Ok(_) => println!("{}", services::COMPLETION_MESSAGE),
        Err(e) => {
            eprintln!("Error resetting database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn list(pool: &DbPool, json: bool) -> AppResult<()> {
    let entries = videos::list_with_categories(pool.connection()).await?;

    if json {
        println!("{}", services::catalog_json(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No videos found.");
        return Ok(());
    }

    println!();
    println!("{:<8} {:<32} {:<20}", "ID", "TITLE", "CATEGORY");
    println!("{}", "─".repeat(62));

    for entry in entries {
        // Truncate title if too long
        let title = if entry.title.chars().count() > 30 {
            format!("{}...", entry.title.chars().take(27).collect::<String>())
        } else {
            entry.title.clone()
        };
        let category = entry.category_name.as_deref().unwrap_or("(missing)");

        println!("{:<8} {:<32} {:<20}", entry.video_id, title, category);
    }
    println!();

    Ok(())
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: manage-db <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  migrate               Apply pending migrations");
    eprintln!("  status                Show pending migrations");
    eprintln!("  seed                  Replace catalog rows with the sample data");
    eprintln!("  setup                 Migrate, then seed");
    eprintln!("  reset                 Drop and recreate the schema, then seed");
    eprintln!("  list, ls [--json]     List videos with their categories");
    eprintln!("  help                  Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  manage-db setup");
    eprintln!("  manage-db list --json");
    eprintln!();
}
