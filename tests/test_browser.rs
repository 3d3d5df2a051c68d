//! Controller transitions, both pure and driven through a surface.

mod common;

use common::{Event, FakeFetcher, Transcript, API_BASE};
use serde_json::json;
use ygoprodeck_browser::browser::{cards_view, start_view};
use ygoprodeck_browser::{config, CardsView, SetBrowser, SetSelector, StartView};

fn cardsets_url() -> String {
    format!("{API_BASE}/cardsets.php")
}

fn cardinfo_url(encoded: &str) -> String {
    format!("{API_BASE}/cardinfo.php?cardset={encoded}")
}

// ---------------------------------------------------------------------------
// start_view
// ---------------------------------------------------------------------------

#[test]
fn start_view_sorts_options() {
    let sets = json!([{"set_name": "Set B"}, {"set_name": "Set A"}]);
    match start_view(Some(&sets)) {
        StartView::Ready(selector) => {
            assert_eq!(selector.options, vec!["Set A", "Set B"]);
            assert_eq!(selector.label, "Select a Set:");
            assert_eq!(selector.button_label, "Show Cards");
            assert_eq!(selector.default_selection(), Some("Set A"));
        }
        other => panic!("expected a selector, got {:?}", other),
    }
}

#[test]
fn start_view_keeps_sets_with_mistyped_extra_fields() {
    let sets = json!([
        {"set_name": "Set B", "num_of_cards": "12"},
        {"set_name": "Set A", "tcg_date": 20020308}
    ]);
    assert_eq!(
        start_view(Some(&sets)),
        StartView::Ready(SetSelector::new(vec!["Set A".into(), "Set B".into()]))
    );
}

#[test]
fn start_view_fails_on_missing_or_empty_response() {
    let failed = StartView::Failed(config::SETS_FAILED_MESSAGE.to_string());
    assert_eq!(start_view(None), failed);
    assert_eq!(start_view(Some(&json!([]))), failed);
    assert_eq!(start_view(Some(&json!({"error": "down"}))), failed);
}

// ---------------------------------------------------------------------------
// cards_view
// ---------------------------------------------------------------------------

#[test]
fn cards_view_renders_grid_for_data() {
    let info = json!({
        "data": [{"name": "Blue-Eyes", "card_images": [{"image_url_small": "http://x/img.jpg"}]}]
    });
    match cards_view("Set A", Some(&info)) {
        CardsView::Grid(html) => {
            assert!(html.contains("http://x/img.jpg"));
            assert!(html.contains("Blue-Eyes"));
        }
        other => panic!("expected a grid, got {:?}", other),
    }
}

#[test]
fn cards_view_keeps_cards_with_mistyped_extra_fields() {
    let info = json!({
        "data": [{"name": "Blue-Eyes", "level": "8", "card_images": [{"image_url_small": "http://x/img.jpg"}]}]
    });
    match cards_view("S", Some(&info)) {
        CardsView::Grid(html) => {
            assert!(html.contains("http://x/img.jpg"));
            assert!(html.contains("Blue-Eyes"));
        }
        other => panic!("expected a grid, got {:?}", other),
    }
}

#[test]
fn cards_view_with_empty_data_shows_no_cards_notice() {
    match cards_view("Set A", Some(&json!({"data": []}))) {
        CardsView::Grid(html) => assert!(html.contains("No cards found for this set.")),
        other => panic!("expected a grid, got {:?}", other),
    }
}

#[test]
fn cards_view_fails_without_data() {
    let expected = CardsView::Failed("Could not retrieve card information for 'Set A'.".into());
    assert_eq!(cards_view("Set A", None), expected);
    assert_eq!(cards_view("Set A", Some(&json!({"error": "nope"}))), expected);
}

#[test]
fn cards_view_is_idempotent() {
    let info = common::sample_cards();
    assert_eq!(cards_view("LOB", Some(&info)), cards_view("LOB", Some(&info)));
}

// ---------------------------------------------------------------------------
// SetBrowser::load
// ---------------------------------------------------------------------------

#[test]
fn load_shows_selector() {
    let b = common::browser(FakeFetcher::new().with(&cardsets_url(), common::sample_sets()));
    let mut surface = Transcript::default();

    let selector = b.load(&mut surface).unwrap();
    assert_eq!(selector.options.len(), 3);
    assert_eq!(
        surface.events,
        vec![
            Event::Message("Fetching list of Yu-Gi-Oh! card sets...".into()),
            Event::Selector(selector.clone()),
        ]
    );
    assert_eq!(b.fetcher().requested(), vec![cardsets_url()]);
}

#[test]
fn load_failure_shows_message_and_no_selector() {
    let b = common::browser(FakeFetcher::new());
    let mut surface = Transcript::default();

    assert!(b.load(&mut surface).is_none());
    assert!(surface.selectors().is_empty());
    assert_eq!(
        surface.messages().last().copied(),
        Some(config::SETS_FAILED_MESSAGE)
    );
}

#[test]
fn load_with_empty_set_list_shows_no_selector() {
    let b = common::browser(FakeFetcher::new().with(&cardsets_url(), json!([])));
    let mut surface = Transcript::default();

    assert!(b.load(&mut surface).is_none());
    assert!(surface.selectors().is_empty());
}

// ---------------------------------------------------------------------------
// SetBrowser::show_cards
// ---------------------------------------------------------------------------

#[test]
fn show_cards_clears_then_renders() {
    let b = common::browser(
        FakeFetcher::new().with(&cardinfo_url("Metal%20Raiders"), common::sample_cards()),
    );
    let mut surface = Transcript::default();

    b.show_cards("Metal Raiders", &mut surface);
    assert_eq!(surface.events[0], Event::Clear);
    assert_eq!(
        surface.events[1],
        Event::Message("Fetching cards from 'Metal Raiders'...".into())
    );
    let html = surface.html();
    assert_eq!(html.len(), 1);
    assert!(html[0].contains("Blue-Eyes White Dragon"));
    assert!(html[0].contains("Dark Magician"));
    assert!(!html[0].contains("Token Without Art"));
}

#[test]
fn show_cards_failure_reports_the_set() {
    let b = common::browser(FakeFetcher::new());
    let mut surface = Transcript::default();

    b.show_cards("Missing Set", &mut surface);
    assert!(surface.html().is_empty());
    assert_eq!(
        surface.messages().last().copied(),
        Some("Could not retrieve card information for 'Missing Set'.")
    );
}

#[test]
fn show_cards_refetches_every_time() {
    let url = cardinfo_url("Metal%20Raiders");
    let b = common::browser(FakeFetcher::new().with(&url, common::sample_cards()));
    let mut surface = Transcript::default();

    b.show_cards("Metal Raiders", &mut surface);
    b.show_cards("Metal Raiders", &mut surface);
    assert_eq!(b.fetcher().requested(), vec![url.clone(), url]);

    let html = surface.html();
    assert_eq!(html.len(), 2);
    assert_eq!(html[0], html[1]);
    assert_eq!(
        surface.events.iter().filter(|e| **e == Event::Clear).count(),
        2
    );
}

#[test]
fn selected_set_name_is_percent_encoded() {
    let b = common::browser(FakeFetcher::new());
    let mut surface = Transcript::default();

    b.show_cards("Duelist Pack: Jaden & Yuki", &mut surface);
    assert_eq!(
        b.fetcher().requested(),
        vec![cardinfo_url("Duelist%20Pack%3A%20Jaden%20%26%20Yuki")]
    );
}

// ---------------------------------------------------------------------------
// Accessors and construction
// ---------------------------------------------------------------------------

#[test]
fn set_names_and_cards_in_set() {
    let b = common::browser(
        FakeFetcher::new()
            .with(&cardsets_url(), common::sample_sets())
            .with(&cardinfo_url("LOB"), common::sample_cards()),
    );

    assert_eq!(
        b.set_names().unwrap(),
        vec![
            "Dark Beginning 1",
            "Legend of Blue Eyes White Dragon",
            "Metal Raiders"
        ]
    );
    assert_eq!(b.card_sets().unwrap()[0].set_code.as_deref(), Some("MRD"));
    assert_eq!(b.cards_in_set("LOB").unwrap().len(), 3);
    assert!(b.cards_in_set("Unknown").is_none());
}

#[test]
fn api_base_is_normalized() {
    let b = SetBrowser::with_fetcher("http://api.test/v7/", FakeFetcher::new()).unwrap();
    assert_eq!(b.api_base(), "http://api.test/v7");
    assert_eq!(b.to_string(), "SetBrowser(api_base=http://api.test/v7)");
}

#[test]
fn api_base_without_scheme_is_rejected() {
    assert!(SetBrowser::with_fetcher("db.ygoprodeck.com/api/v7", FakeFetcher::new()).is_err());
}

// ---------------------------------------------------------------------------
// SetSelector::pick
// ---------------------------------------------------------------------------

#[test]
fn pick_by_number_or_name() {
    let selector = SetSelector::new(vec!["Set A".into(), "Set B".into()]);
    assert_eq!(selector.pick("2"), Some("Set B"));
    assert_eq!(selector.pick("Set A"), Some("Set A"));
    assert_eq!(selector.pick("0"), None);
    assert_eq!(selector.pick("3"), None);
    assert_eq!(selector.pick("set a"), None);
}

#[test]
fn pick_prefers_an_exact_name_over_a_number() {
    let selector = SetSelector::new(vec!["1".into(), "2002".into(), "Set A".into()]);
    assert_eq!(selector.pick("2002"), Some("2002"));
    assert_eq!(selector.pick("1"), Some("1"));
    assert_eq!(selector.pick("3"), Some("Set A"));
}

#[test]
fn selector_serializes_for_hosts() {
    let selector = SetSelector::new(vec!["A".into()]);
    let value = serde_json::to_value(&selector).unwrap();
    assert_eq!(value["options"], json!(["A"]));
    assert_eq!(value["label"], "Select a Set:");
}
