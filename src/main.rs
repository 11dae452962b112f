use anyhow::Context;
use bookstore_api::domain::ports::ConfigProvider;
use bookstore_api::utils::logger;
use bookstore_api::{load_catalog, AppState, CliConfig, MemoryUserRegistry, ServerConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting bookstore-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ServerConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let catalog = load_catalog(config.books_file()).context("failed to load the book catalog")?;
    tracing::info!("📚 Catalog loaded with {} books", catalog.len().await);

    let state = AppState::new(catalog, MemoryUserRegistry::new());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    bookstore_api::server::serve(listener, state)
        .await
        .context("server exited with an error")?;

    Ok(())
}
