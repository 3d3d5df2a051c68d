mod error;
mod page;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use env_logger::{Builder, Env};

use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/cards", get(routes::cards))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let browser = match ygoprodeck_browser::AsyncSetBrowser::builder().build().await {
        Ok(browser) => browser,
        Err(e) => {
            log::error!("Failed to initialize the set browser: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState { browser });

    let app = app(state);

    let addr = "0.0.0.0:3000";
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    log::info!("Listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
    }
}
