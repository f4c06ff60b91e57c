//! CLI administration tool for the classifieds backend.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the tables if they are absent
//! cargo run --bin admin -- db init
//!
//! # Create a user (prompts for the name when omitted)
//! cargo run --bin admin -- user create --username alice
//!
//! # Row counts
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL`, or `POSTGRES_USER` / `POSTGRES_PASSWORD` / `POSTGRES_DB`
//! with optional `POSTGRES_HOST` / `POSTGRES_PORT`.

use classifieds::config::{database_url_from_env, mask_connection_string};
use classifieds::domain::entities::NewUser;
use classifieds::domain::session::SessionFactory;
use classifieds::infrastructure::persistence::PgSessionFactory;
use classifieds::infrastructure::persistence::bootstrap::ensure_schema;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;

/// CLI tool for managing the classifieds backend.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show row counts
    Stats,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the users and advertisements tables if absent
    Init,
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Username (prompted for when omitted)
        #[arg(short, long)]
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;

    let result = match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await,
        Commands::User { action } => handle_user_action(action, &pool).await,
        Commands::Stats => handle_stats(&pool).await,
    };

    pool.close().await;
    result
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            let mut session = PgSessionFactory::new(pool.clone()).open_session();
            session
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("{}", "✓ Database connection OK".green().bold());
            println!("  {}", mask_connection_string(database_url).dimmed());
        }
        DbAction::Init => {
            ensure_schema(pool)
                .await
                .context("Failed to create database schema")?;

            println!("{}", "✓ Tables users and advertisements are ready".green().bold());
        }
    }

    Ok(())
}

/// Dispatches user commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    match action {
        UserAction::Create { username } => {
            let username = match username {
                Some(name) => name,
                None => Input::new().with_prompt("Username").interact_text()?,
            };

            if username.is_empty() {
                anyhow::bail!("Username must not be empty");
            }

            let mut session = PgSessionFactory::new(pool.clone()).open_session();
            let user = session
                .add_user(NewUser { username })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;
            session
                .commit()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to commit: {}", e))?;

            println!("{}", "✓ User created".green().bold());
            println!("  {} {}", "ID:".bold(), user.id);
            println!("  {} {}", "Username:".bold(), user.username);
        }
    }

    Ok(())
}

/// Prints the number of users and advertisements.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .context("Failed to count users")?;
    let advertisements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM advertisements")
        .fetch_one(pool)
        .await
        .context("Failed to count advertisements")?;

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!("  {} {}", "Users:".bold(), users.to_string().cyan());
    println!(
        "  {} {}",
        "Advertisements:".bold(),
        advertisements.to_string().cyan()
    );

    Ok(())
}
