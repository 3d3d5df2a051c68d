/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Dispatches the blocking API calls to tokio's blocking thread pool.
    pub browser: ygoprodeck_browser::AsyncSetBrowser,
}
