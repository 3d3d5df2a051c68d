//! Async wrapper around [`SetBrowser`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every blocking fetch on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Each
//! awaited call still performs exactly one request flow; nothing is fetched
//! in parallel on the caller's behalf.
//!
//! # Example
//!
//! ```no_run
//! use ygoprodeck_browser::{AsyncSetBrowser, CardsView};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let browser = AsyncSetBrowser::builder().build().await.unwrap();
//!
//!     let start = browser.start_view().await.unwrap();
//!     let view = browser.cards_view("Metal Raiders").await.unwrap();
//!     if let CardsView::Grid(markup) = view {
//!         println!("{markup}");
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::browser::{CardsView, StartView};
use crate::config;
use crate::error::{Result, YgoError};
use crate::SetBrowser;

// ---------------------------------------------------------------------------
// AsyncSetBrowserBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSetBrowser`] instance.
pub struct AsyncSetBrowserBuilder {
    api_base: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for AsyncSetBrowserBuilder {
    fn default() -> Self {
        Self {
            api_base: config::API_BASE.to_string(),
            timeout: None,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl AsyncSetBrowserBuilder {
    /// Point the browser at a different API root.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the async browser.
    ///
    /// The blocking HTTP client is created on the blocking thread pool,
    /// since it must not be built from within the async context.
    pub async fn build(self) -> Result<AsyncSetBrowser> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SetBrowser::builder()
                .api_base(self.api_base)
                .user_agent(self.user_agent);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            let browser = builder.build()?;
            Ok(AsyncSetBrowser {
                inner: Arc::new(browser),
            })
        })
        .await
        .map_err(|e| YgoError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSetBrowser
// ---------------------------------------------------------------------------

/// Async wrapper around [`SetBrowser`].
///
/// The HTTP-backed browser is `Send + Sync`, so it is shared through an
/// [`Arc`] without a lock.
pub struct AsyncSetBrowser {
    inner: Arc<SetBrowser>,
}

impl AsyncSetBrowser {
    /// Create a new builder for configuring the async browser.
    pub fn builder() -> AsyncSetBrowserBuilder {
        AsyncSetBrowserBuilder::default()
    }

    /// Run a sync browser operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ygoprodeck_browser::AsyncSetBrowser;
    /// # async fn example() -> ygoprodeck_browser::Result<()> {
    /// # let browser = AsyncSetBrowser::builder().build().await?;
    /// let names = browser.run(|b| Ok(b.set_names())).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SetBrowser) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let browser = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&browser))
            .await
            .map_err(|e| YgoError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the set list and compute the startup view.
    pub async fn start_view(&self) -> Result<StartView> {
        self.run(|b| Ok(b.start_view())).await
    }

    /// Fetch the cards of `selected` and compute the output markup.
    pub async fn cards_view(&self, selected: &str) -> Result<CardsView> {
        let selected = selected.to_string();
        self.run(move |b| Ok(b.cards_view(&selected))).await
    }

    /// Release the browser and its HTTP client off the async event loop.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| YgoError::InvalidArgument(format!("Task join error: {e}")))
    }
}
