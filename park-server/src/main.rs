use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use park_server::cache::{CacheConfig, CachedParkFeed};
use park_server::config::ServerConfig;
use park_server::domain::parc_asterix;
use park_server::queue_times::{MockParkFeed, QueueTimesClient, QueueTimesConfig};
use park_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("park_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let cache_config = CacheConfig::default();

    // Category lookup is built once and shared by every request
    let categories = parc_asterix();
    info!(rides = categories.len(), "loaded ride categories");

    let app = match &config.mock_file {
        Some(path) => {
            info!(path = %path.display(), "serving park data from mock file");
            let feed = MockParkFeed::from_file(path)?;
            let state = AppState::new(CachedParkFeed::new(feed, &cache_config), categories);
            create_router(state, &config.static_dir)
        }
        None => {
            let client = QueueTimesClient::new(QueueTimesConfig::default())?;
            info!(url = %client.park_url(cache_config.park_id), "serving live park data");
            let state = AppState::new(CachedParkFeed::new(client, &cache_config), categories);
            create_router(state, &config.static_dir)
        }
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Parc Astérix wait times listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
