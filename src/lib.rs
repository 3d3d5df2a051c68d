//! Yu-Gi-Oh! card set browser for Rust.
//!
//! Fetches the list of card sets from the YGOPRODeck API, offers it as a
//! sorted selector, and renders the cards of a chosen set as an HTML grid of
//! thumbnails. Display is delegated to a host [`Surface`].
//!
//! # Quick start
//!
//! ```no_run
//! use ygoprodeck_browser::SetBrowser;
//!
//! let browser = SetBrowser::builder().build().unwrap();
//!
//! // Sorted set names for a selection control
//! let names = browser.set_names().unwrap_or_default();
//!
//! // Markup for one set
//! let view = browser.cards_view("Legend of Blue Eyes White Dragon");
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod browser;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod render;
pub mod surface;

#[cfg(feature = "async")]
pub use async_client::AsyncSetBrowser;
pub use browser::{CardsView, SetSelector, StartView};
pub use error::{Result, YgoError};
pub use fetch::{Fetcher, HttpFetcher};
pub use models::{Card, CardImage, CardSetInfo};
pub use render::render_card_grid;
pub use surface::Surface;

use std::fmt;
use std::time::Duration;

use serde_json::Value;

// ---------------------------------------------------------------------------
// SetBrowserBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SetBrowser`] over HTTP.
///
/// Use [`SetBrowser::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SetBrowserBuilder::build).
pub struct SetBrowserBuilder {
    api_base: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for SetBrowserBuilder {
    fn default() -> Self {
        Self {
            api_base: config::API_BASE.to_string(),
            timeout: None,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl SetBrowserBuilder {
    /// Point the browser at a different API root.
    ///
    /// Defaults to `https://db.ygoprodeck.com/api/v7`.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the HTTP request timeout. reqwest's default applies when unset.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the browser and its HTTP client. No request is made yet.
    pub fn build(self) -> Result<SetBrowser> {
        let fetcher = HttpFetcher::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        SetBrowser::with_fetcher(&self.api_base, fetcher)
    }
}

// ---------------------------------------------------------------------------
// SetBrowser
// ---------------------------------------------------------------------------

/// The interaction controller.
///
/// [`load()`](Self::load) runs the startup transition and
/// [`show_cards()`](Self::show_cards) the action transition, both against a
/// host [`Surface`]. Every call re-queries the API; nothing is cached.
pub struct SetBrowser<F = HttpFetcher> {
    api_base: String,
    fetcher: F,
}

impl SetBrowser<HttpFetcher> {
    /// Create a new builder for an HTTP-backed browser.
    pub fn builder() -> SetBrowserBuilder {
        SetBrowserBuilder::default()
    }
}

impl<F: Fetcher> SetBrowser<F> {
    /// Create a browser over any [`Fetcher`].
    ///
    /// Fails if `api_base` is not an http(s) URL.
    pub fn with_fetcher(api_base: &str, fetcher: F) -> Result<Self> {
        Ok(Self {
            api_base: config::normalize_api_base(api_base)?,
            fetcher,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    // -- Raw fetches -------------------------------------------------------

    /// Fetch the raw card-sets response.
    pub fn fetch_sets(&self) -> Option<Value> {
        self.fetcher.get_json(&config::cardsets_url(&self.api_base))
    }

    /// Fetch the raw card-info response for one set.
    pub fn fetch_card_info(&self, set_name: &str) -> Option<Value> {
        self.fetcher
            .get_json(&config::cardinfo_url(&self.api_base, set_name))
    }

    // -- Typed accessors ---------------------------------------------------

    /// Parsed set descriptors, in API order. `None` if the fetch failed.
    pub fn card_sets(&self) -> Option<Vec<CardSetInfo>> {
        self.fetch_sets().map(|v| models::parse_set_list(&v))
    }

    /// Sorted set names. `None` if the fetch failed.
    pub fn set_names(&self) -> Option<Vec<String>> {
        self.card_sets().map(|sets| models::sorted_set_names(&sets))
    }

    /// Cards of one set, in API order. `None` if the fetch failed or the
    /// response carried no `data`.
    pub fn cards_in_set(&self, set_name: &str) -> Option<Vec<Card>> {
        self.fetch_card_info(set_name)
            .and_then(|v| models::parse_card_info(&v))
    }

    // -- Transitions -------------------------------------------------------

    /// Fetch the set list and compute the startup view.
    pub fn start_view(&self) -> StartView {
        browser::start_view(self.fetch_sets().as_ref())
    }

    /// Fetch the cards of `selected` and compute the output markup.
    pub fn cards_view(&self, selected: &str) -> CardsView {
        browser::cards_view(selected, self.fetch_card_info(selected).as_ref())
    }

    /// Startup transition: show the selector, or the failure message.
    ///
    /// Returns the selector that was shown, if any.
    pub fn load<S: Surface>(&self, mut surface: S) -> Option<SetSelector> {
        surface.message(config::LOADING_SETS_MESSAGE);
        match self.start_view() {
            StartView::Ready(selector) => {
                surface.selector(&selector);
                Some(selector)
            }
            StartView::Failed(msg) => {
                surface.message(&msg);
                None
            }
        }
    }

    /// Action transition for the set the user has selected.
    ///
    /// Clears the output region first, then renders the grid or the per-set
    /// failure message.
    pub fn show_cards<S: Surface>(&self, selected: &str, mut surface: S) {
        surface.clear_output();
        surface.message(&config::fetching_cards_message(selected));
        match self.cards_view(selected) {
            CardsView::Grid(markup) => surface.html(&markup),
            CardsView::Failed(msg) => surface.message(&msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<F> fmt::Display for SetBrowser<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetBrowser(api_base={})", self.api_base)
    }
}
