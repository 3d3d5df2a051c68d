//! Controller transitions as pure functions of their inputs.
//!
//! The selected set name is passed in explicitly and the fetch result is an
//! argument, so each transition can be exercised without a network or a
//! widget toolkit. [`SetBrowser`](crate::SetBrowser) wires them to a
//! [`Fetcher`](crate::fetch::Fetcher) and a [`Surface`](crate::surface::Surface).

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::models::{parse_card_info, parse_set_list, sorted_set_names};
use crate::render::render_card_grid;

/// The selection control and its action button, ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetSelector {
    pub label: String,
    pub options: Vec<String>,
    pub button_label: String,
}

impl SetSelector {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            label: config::SELECTOR_LABEL.to_string(),
            options,
            button_label: config::BUTTON_LABEL.to_string(),
        }
    }

    /// The option a fresh selector starts on.
    pub fn default_selection(&self) -> Option<&str> {
        self.options.first().map(String::as_str)
    }

    /// Resolve user input as an exact option name or, failing that, a
    /// 1-based option number.
    pub fn pick(&self, input: &str) -> Option<&str> {
        if let Some(option) = self.options.iter().find(|o| o.as_str() == input) {
            return Some(option.as_str());
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// Result of the startup transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartView {
    Ready(SetSelector),
    Failed(String),
}

/// Result of the "show cards" transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardsView {
    /// Markup for the output region: the grid, or the "no cards" notice.
    Grid(String),
    Failed(String),
}

/// Startup: turn the card-sets response into a selector.
///
/// An absent response, an empty array, or one with no usable set names
/// produces the failure message and no selector.
pub fn start_view(sets: Option<&Value>) -> StartView {
    let names = sets
        .map(|value| sorted_set_names(&parse_set_list(value)))
        .unwrap_or_default();

    if names.is_empty() {
        StartView::Failed(config::SETS_FAILED_MESSAGE.to_string())
    } else {
        StartView::Ready(SetSelector::new(names))
    }
}

/// Action: turn the card-info response for `selected` into output markup.
pub fn cards_view(selected: &str, info: Option<&Value>) -> CardsView {
    let Some(cards) = info.and_then(parse_card_info) else {
        return CardsView::Failed(config::cards_failed_message(selected));
    };
    match render_card_grid(Some(cards.as_slice())) {
        Ok(markup) => CardsView::Grid(markup),
        Err(e) => {
            log::error!("Failed to render cards of '{}': {}", selected, e);
            CardsView::Failed(config::cards_failed_message(selected))
        }
    }
}
