//! Display primitives a host environment provides to the controller.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::browser::SetSelector;
use crate::error::Result;
use crate::render::html_document;

/// The host's output surface: a message log, a markup region that can be
/// cleared, and a place to show the set selector with its action button.
///
/// The controller only calls these primitives. Reading the user's
/// selection and wiring the button to
/// [`SetBrowser::show_cards`](crate::SetBrowser::show_cards) are the
/// host's job.
pub trait Surface {
    /// Show a plain informational line.
    fn message(&mut self, text: &str);

    /// Render an HTML fragment into the output region.
    fn html(&mut self, markup: &str);

    /// Show the selection control and its action button.
    fn selector(&mut self, selector: &SetSelector);

    /// Clear everything previously written to the output region.
    fn clear_output(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn message(&mut self, text: &str) {
        (**self).message(text)
    }

    fn html(&mut self, markup: &str) {
        (**self).html(markup)
    }

    fn selector(&mut self, selector: &SetSelector) {
        (**self).selector(selector)
    }

    fn clear_output(&mut self) {
        (**self).clear_output()
    }
}

// ---------------------------------------------------------------------------
// PageSurface
// ---------------------------------------------------------------------------

/// A terminal-style surface: messages and the selector go to a text writer,
/// markup goes to a standalone HTML page on disk.
///
/// The page is rewritten on every change to the output region, so a browser
/// pointed at it shows the latest grid after a reload.
pub struct PageSurface<W: Write> {
    out: W,
    page_path: PathBuf,
    title: String,
    fragments: Vec<String>,
}

impl<W: Write> PageSurface<W> {
    pub fn new<P: AsRef<Path>>(out: W, page_path: P) -> Self {
        Self {
            out,
            page_path: page_path.as_ref().to_path_buf(),
            title: "Yu-Gi-Oh! card sets".to_string(),
            fragments: Vec::new(),
        }
    }

    /// Set the `<title>` of the written page.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn page_path(&self) -> &Path {
        &self.page_path
    }

    /// Markup fragments currently in the output region.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_page(&self) -> Result<()> {
        let page = html_document(&self.title, &self.fragments.join("\n"))?;
        fs::write(&self.page_path, page)?;
        Ok(())
    }
}

impl<W: Write> Surface for PageSurface<W> {
    fn message(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::error!("Failed to write message: {}", e);
        }
    }

    fn html(&mut self, markup: &str) {
        self.fragments.push(markup.to_string());
        match self.write_page() {
            Ok(()) => self.message(&format!("Wrote {}", self.page_path.display())),
            Err(e) => log::error!("Failed to write {}: {}", self.page_path.display(), e),
        }
    }

    fn selector(&mut self, selector: &SetSelector) {
        let mut listing = format!("{}\n", selector.label);
        for (i, option) in selector.options.iter().enumerate() {
            listing.push_str(&format!("{:>5}. {}\n", i + 1, option));
        }
        listing.push_str(&format!("[{}]", selector.button_label));
        self.message(&listing);
    }

    fn clear_output(&mut self) {
        self.fragments.clear();
        if self.page_path.exists() {
            if let Err(e) = self.write_page() {
                log::error!("Failed to clear {}: {}", self.page_path.display(), e);
            }
        }
    }
}
