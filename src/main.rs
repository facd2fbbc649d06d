//! Rolodex CLI - Contact book GraphQL service over SQLite

use clap::{Parser, Subcommand};
use rolodex::config;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(version = "0.1.0")]
#[command(about = "Contact book GraphQL service backed by SQLite")]
#[command(long_about = r#"
Rolodex exposes one contacts table through a GraphQL API:
  • contacts / contact(id) queries
  • createContact / updateContact / deleteContact mutations
  • GraphiQL IDE on GET /graphql

Example usage:
  rolodex serve
  rolodex serve --port 4000 --database contacts.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to a rolodex.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve {
            port,
            database,
            config: config_path,
        } => {
            // CLI flags win over config file values, which win over defaults
            let config = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let port = port.or(config.port).unwrap_or(4000);
            let database = database
                .or_else(|| config.database.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("rolodex.db"));

            config::ensure_db_dir(&database)?;
            rolodex::server::start_server(port, database).await?;
        }
    }

    Ok(())
}
