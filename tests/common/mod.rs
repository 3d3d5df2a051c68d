//! Shared test fixtures: an in-memory fetcher, a recording surface, and
//! canned API responses.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};
use ygoprodeck_browser::{Fetcher, SetBrowser, SetSelector, Surface};

pub const API_BASE: &str = "http://api.test/v7";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// FakeFetcher
// ---------------------------------------------------------------------------

/// Serves canned JSON per URL and records every requested URL.
/// Unknown URLs behave like a failed fetch.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, Value>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), body);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for FakeFetcher {
    fn get_json(&self, url: &str) -> Option<Value> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses.get(url).cloned()
    }
}

pub fn browser(fetcher: FakeFetcher) -> SetBrowser<FakeFetcher> {
    SetBrowser::with_fetcher(API_BASE, fetcher).unwrap()
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// Everything a controller did to a surface, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Message(String),
    Html(String),
    Selector(SetSelector),
    Clear,
}

#[derive(Default)]
pub struct Transcript {
    pub events: Vec<Event>,
}

impl Transcript {
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Message(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn html(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Html(h) => Some(h.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn selectors(&self) -> Vec<&SetSelector> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Selector(s) => Some(s),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Transcript {
    fn message(&mut self, text: &str) {
        self.events.push(Event::Message(text.to_string()));
    }

    fn html(&mut self, markup: &str) {
        self.events.push(Event::Html(markup.to_string()));
    }

    fn selector(&mut self, selector: &SetSelector) {
        self.events.push(Event::Selector(selector.clone()));
    }

    fn clear_output(&mut self) {
        self.events.push(Event::Clear);
    }
}

// ---------------------------------------------------------------------------
// Canned responses
// ---------------------------------------------------------------------------

pub fn sample_sets() -> Value {
    json!([
        {
            "set_name": "Metal Raiders",
            "set_code": "MRD",
            "num_of_cards": 144,
            "tcg_date": "2002-06-26",
            "set_image": "https://images.ygoprodeck.com/images/sets/MRD.jpg"
        },
        {
            "set_name": "Legend of Blue Eyes White Dragon",
            "set_code": "LOB",
            "num_of_cards": 126,
            "tcg_date": "2002-03-08"
        },
        {
            "set_name": "Dark Beginning 1",
            "set_code": "DB1",
            "num_of_cards": 250
        }
    ])
}

pub fn sample_cards() -> Value {
    json!({
        "data": [
            {
                "id": 89631139,
                "name": "Blue-Eyes White Dragon",
                "type": "Normal Monster",
                "frameType": "normal",
                "desc": "This legendary dragon is a powerful engine of destruction.",
                "atk": 3000,
                "def": 2500,
                "level": 8,
                "race": "Dragon",
                "attribute": "LIGHT",
                "card_images": [
                    {
                        "id": 89631139,
                        "image_url": "https://images.ygoprodeck.com/images/cards/89631139.jpg",
                        "image_url_small": "https://images.ygoprodeck.com/images/cards_small/89631139.jpg",
                        "image_url_cropped": "https://images.ygoprodeck.com/images/cards_cropped/89631139.jpg"
                    }
                ]
            },
            {
                "id": 1,
                "name": "Token Without Art"
            },
            {
                "id": 46986414,
                "name": "Dark Magician",
                "type": "Normal Monster",
                "card_images": [
                    {
                        "id": 46986414,
                        "image_url_small": "https://images.ygoprodeck.com/images/cards_small/46986414.jpg"
                    },
                    {
                        "id": 46986415,
                        "image_url_small": "https://images.ygoprodeck.com/images/cards_small/46986415.jpg"
                    }
                ]
            }
        ]
    })
}
