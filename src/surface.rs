//! Presentation surface driven by the list loader.
//!
//! [`Surface`] is the narrow slice of a document the front end touches:
//! element display state, element content, a blocking error dialog, scrolling
//! and navigation. [`DocumentSurface`] keeps all of it in memory.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use serde::Serialize;

/// CSS `display` values the front end switches between.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    None,
    #[default]
    Block,
    Table,
}

impl Display {
    pub const fn is_visible(self) -> bool {
        !matches!(self, Display::None)
    }
}

pub trait Navigator {
    /// Replaces the current location.
    fn navigate(&self, location: &str);
}

pub trait Surface: Navigator {
    fn set_display(&self, id: &str, display: Display);

    /// Replaces the element content; the previous children are discarded.
    fn set_inner_html(&self, id: &str, html: &str);

    /// Shows a blocking, user-dismissable error dialog.
    fn show_error(&self, message: &str);

    fn scroll_to_top(&self);

    fn hide(&self, id: &str) {
        self.set_display(id, Display::None);
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Element {
    pub display: Display,
    pub html: String,
}

/// In-memory document used by the command-line front end and tests.
#[derive(Debug, Default)]
pub struct DocumentSurface {
    elements: RefCell<BTreeMap<String, Element>>,
    errors: RefCell<Vec<String>>,
    location: RefCell<Option<String>>,
    scrolls: Cell<usize>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.elements.borrow().get(id).map(|element| element.display)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.display(id).is_some_and(Display::is_visible)
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|element| element.html.clone())
    }

    /// Error messages shown so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }

    /// Copy of every element touched so far, keyed by id.
    pub fn elements(&self) -> BTreeMap<String, Element> {
        self.elements.borrow().clone()
    }
}

impl Navigator for DocumentSurface {
    fn navigate(&self, location: &str) {
        self.location.replace(Some(location.to_string()));
    }
}

impl Surface for DocumentSurface {
    fn set_display(&self, id: &str, display: Display) {
        self.elements
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .display = display;
    }

    fn set_inner_html(&self, id: &str, html: &str) {
        self.elements
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .html = html.to_string();
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_replaced_not_appended() {
        let surface = DocumentSurface::new();
        surface.set_inner_html("gamesList", "<tr>1</tr>");
        surface.set_inner_html("gamesList", "<tr>2</tr>");

        assert_eq!(surface.inner_html("gamesList").as_deref(), Some("<tr>2</tr>"));
    }

    #[test]
    fn display_tracks_last_call() {
        let surface = DocumentSurface::new();
        assert_eq!(surface.display("loading"), None);

        surface.set_display("loading", Display::Block);
        surface.hide("loading");

        assert_eq!(surface.display("loading"), Some(Display::None));
        assert!(!surface.is_visible("loading"));
    }
}
