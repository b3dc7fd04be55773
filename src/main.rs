use astrobio_gateway::api::routes::create_router;
use astrobio_gateway::config::AppConfig;
use astrobio_gateway::upstream::HttpUpstream;
use axum::serve;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress reqwest debug logs
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .init();

    println!("AstroBio Gateway: Space Biology Aggregation Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let upstream = Arc::new(HttpUpstream::new(&config)?);

    run_server(create_router().with_state(upstream), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("AstroBio Gateway running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
