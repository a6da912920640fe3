//! Register a user and print the API key to send as
//! `Authorization: Bearer <key>`.

use anyhow::Context;
use clap::Parser;
use storage::{Database, repository::user::UserRepository};

#[derive(Parser)]
#[command(name = "create-user")]
#[command(about = "Create an API user and print its key", long_about = None)]
struct Cli {
    /// Unique username
    #[arg(short, long)]
    username: String,

    /// Grant admin capability
    #[arg(long)]
    admin: bool,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let db = Database::new(&cli.database_url, 1)
        .await
        .context("Failed to connect to database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let user = UserRepository::new(db.pool())
        .create(&cli.username, cli.admin)
        .await
        .with_context(|| format!("Failed to create user {}", cli.username))?;

    tracing::info!(user_id = user.user_id, is_admin = user.is_admin, "User created");
    println!("{}", user.api_key);

    Ok(())
}
