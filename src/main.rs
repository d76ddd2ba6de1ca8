use clap::Parser;
use cocktail_rag::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    retriever::Retriever,
    tools::ToolService,
    Error, Result,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cocktail_rag=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(dataset) = cli.dataset {
        settings.dataset.path = dataset.into();
    }
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Recipe { name } => {
            commands::recipe(&load_tools(&settings)?, &name)?;
        }
        Commands::Ingredients { ingredients } => {
            commands::ingredients(&load_tools(&settings)?, &ingredients)?;
        }
        Commands::Tags { tags } => {
            commands::tags(&load_tools(&settings)?, &tags)?;
        }
        Commands::Check => {
            commands::check(&settings.dataset.path)?;
        }
    }

    Ok(())
}

fn load_tools(settings: &Settings) -> Result<ToolService> {
    let retriever = Retriever::load(&settings.dataset.path)?;
    Ok(ToolService::new(
        Arc::new(retriever),
        settings.limits.max_list_items,
    ))
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting Cocktail RAG tool server");
    info!("Dataset: {}", settings.dataset.path.display());

    let tools = load_tools(&settings)?;
    if !tools.retriever().is_loaded() {
        warn!("Server is starting, but the cocktail database was not loaded. Tools will not work.");
    }

    let state = AppState {
        tools,
        settings: settings.clone(),
    };
    let app = routes::create_router(state, &settings)?;

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);
    info!("  POST /mcp (JSON-RPC: initialize, tools/list, tools/call)");
    info!("  GET  /api/recipes?name=");
    info!("  POST /api/suggest/ingredients");
    info!("  POST /api/suggest/preferences");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
