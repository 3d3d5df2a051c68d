//! HTML rendering of card thumbnail grids and pages.
//!
//! Markup comes from embedded tera templates with autoescaping on, so every
//! value taken from card records is escaped before it reaches the output.

use once_cell::sync::OnceCell;
use serde::Serialize;
use tera::{Context, Tera};

use crate::browser::SetSelector;
use crate::config;
use crate::error::Result;
use crate::models::Card;

const GRID_STYLE: &str = "display: flex; flex-wrap: wrap; gap: 10px;";
const CELL_STYLE: &str = "text-align: center; width: 120px;";
const IMAGE_STYLE: &str = "width: 100px; height: auto;";
const CAPTION_STYLE: &str = "font-size: 0.8em; margin-top: 5px;";

const NOTICE_TEMPLATE: &str = "<p>{{ text }}</p>";
const CELL_TEMPLATE: &str = r#"<div style="{{ cell_style }}"><img src="{{ src }}" alt="{{ name }}" style="{{ image_style }}"><p style="{{ caption_style }}">{{ name }}</p></div>"#;
const GRID_TEMPLATE: &str =
    r#"<div style="{{ grid_style }}">{% for cell in cells %}{{ cell | safe }}{% endfor %}</div>"#;
const FORM_TEMPLATE: &str = r#"<form method="get" action="{{ action }}"><label for="set">{{ label }}</label> <select id="set" name="set">{% for option in options %}<option value="{{ option }}"{% if option == selected %} selected{% endif %}>{{ option }}</option>{% endfor %}</select> <button type="submit">{{ button_label }}</button></form>"#;
const DOCUMENT_TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{{ title }}</title>\n</head>\n<body>\n{{ body | safe }}\n</body>\n</html>\n";

static TEMPLATES: OnceCell<Tera> = OnceCell::new();

fn templates() -> Result<&'static Tera> {
    TEMPLATES.get_or_try_init(|| {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("notice.html", NOTICE_TEMPLATE),
            ("cell.html", CELL_TEMPLATE),
            ("grid.html", GRID_TEMPLATE),
            ("form.html", FORM_TEMPLATE),
            ("document.html", DOCUMENT_TEMPLATE),
        ])?;
        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(escape_html);
        Ok(tera)
    })
}

fn render(template: &str, context: &Context) -> Result<String> {
    Ok(templates()?.render(template, context)?)
}

/// Escape `&`, `<`, `>`, `"` and `'` so the result is safe in both text
/// content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    html_escape::encode_quoted_attribute(input).into_owned()
}

/// A paragraph holding plain (escaped) text.
pub fn render_notice(text: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("text", text);
    render("notice.html", &context)
}

/// Render one grid cell, or `None` if the card has no usable thumbnail.
pub fn render_card_cell(card: &Card) -> Result<Option<String>> {
    let Some(src) = card.thumbnail_url() else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("cell_style", CELL_STYLE);
    context.insert("image_style", IMAGE_STYLE);
    context.insert("caption_style", CAPTION_STYLE);
    context.insert("src", src);
    context.insert("name", &card.name);
    render("cell.html", &context).map(Some)
}

/// Render `cards` as a flex-wrapped grid of thumbnails, in the given order.
///
/// Cards without a thumbnail are dropped silently. An empty or absent
/// sequence yields the "no cards" notice instead of a grid.
pub fn render_card_grid(cards: Option<&[Card]>) -> Result<String> {
    let cards = match cards {
        Some(cards) if !cards.is_empty() => cards,
        _ => return render_notice(config::NO_CARDS_MESSAGE),
    };

    let mut cells = Vec::with_capacity(cards.len());
    for card in cards {
        if let Some(cell) = render_card_cell(card)? {
            cells.push(cell);
        }
    }

    let mut context = Context::new();
    context.insert("grid_style", GRID_STYLE);
    context.insert("cells", &cells);
    render("grid.html", &context)
}

#[derive(Serialize)]
struct FormContext<'a> {
    action: &'a str,
    label: &'a str,
    options: &'a [String],
    selected: Option<&'a str>,
    button_label: &'a str,
}

/// Render the selector as a GET form submitting `set` to `action`, with
/// `selected` preselected when it is one of the options.
pub fn render_selector_form(
    selector: &SetSelector,
    action: &str,
    selected: Option<&str>,
) -> Result<String> {
    let context = Context::from_serialize(FormContext {
        action,
        label: &selector.label,
        options: &selector.options,
        selected,
        button_label: &selector.button_label,
    })?;
    render("form.html", &context)
}

/// Wrap a fragment in a minimal standalone HTML document.
///
/// `body` is inserted as-is; `title` is escaped.
pub fn html_document(title: &str, body: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("body", body);
    render("document.html", &context)
}
