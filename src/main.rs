use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use libris::app::AppContext;
use libris::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Trending => {
            let ctx = AppContext::new(config_path)?;
            commands::trending(&ctx).await?;
        }
        Commands::Search { query, limit } => {
            let ctx = AppContext::new(config_path)?;
            commands::search(&ctx, &query, limit).await?;
        }
        Commands::Discover { rounds } => {
            let ctx = AppContext::new(config_path)?;
            commands::discover(&ctx, rounds).await?;
        }
        Commands::Detail { key, open_cover } => {
            let ctx = AppContext::new(config_path)?;
            commands::detail(&ctx, &key, open_cover).await?;
        }
        // Only touches the local preference file
        Commands::Theme { action } => {
            commands::theme(action)?;
        }
    }

    Ok(())
}
