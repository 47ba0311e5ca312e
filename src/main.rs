use lexicon_gate::app::{build_router, AppState};
use lexicon_gate::config::AppConfig;
use lexicon_gate::store::client::AirtableClient;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut config = AppConfig::from_env()?;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let addr = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires <addr:port>"))?;
                config.bind_addr = addr.parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    if config.allowlist.is_empty() {
        tracing::warn!("Access allowlist is empty: every /api/ request will be denied");
    } else {
        tracing::info!("Access allowlist has {} entries", config.allowlist.len());
    }

    let store = AirtableClient::new(
        &config.api_url,
        &config.base_id,
        &config.table,
        &config.access_token,
    );
    tracing::info!("Lexicon table: {}", store.table_url());

    let state = Arc::new(AppState::from_config(&config, Arc::new(store)));
    let app = build_router(state);

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
