use ygoprodeck_browser::render::{html_document, render_notice, render_selector_form};
use ygoprodeck_browser::{Result, SetSelector, Surface};

/// Collects what the controller shows into one HTML page: the selector form
/// followed by the output region (messages, then markup).
pub struct WebPage {
    selected: Option<String>,
    selector: Option<SetSelector>,
    messages: Vec<String>,
    output: Vec<String>,
}

impl WebPage {
    /// `selected` is preselected in the dropdown when present.
    pub fn new(selected: Option<String>) -> Self {
        Self {
            selected,
            selector: None,
            messages: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn into_html(self) -> Result<String> {
        let mut body = String::new();
        if let Some(selector) = &self.selector {
            body.push_str(&render_selector_form(
                selector,
                "/cards",
                self.selected.as_deref(),
            )?);
        }
        body.push_str("<div id=\"output\">");
        for msg in &self.messages {
            body.push_str(&render_notice(msg)?);
        }
        body.push_str(&self.output.join("\n"));
        body.push_str("</div>");
        html_document("Yu-Gi-Oh! card sets", &body)
    }
}

impl Surface for WebPage {
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn html(&mut self, markup: &str) {
        self.output.push(markup.to_string());
    }

    fn selector(&mut self, selector: &SetSelector) {
        self.selector = Some(selector.clone());
    }

    fn clear_output(&mut self) {
        self.messages.clear();
        self.output.clear();
    }
}
