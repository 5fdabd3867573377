//! The content region presenters render into.
//!
//! On a page this would be two fixed DOM nodes (a title and a content
//! element). Here the region is an explicit dependency handed to every
//! presenter call, so presenters stay constructible without any global
//! page state.

/// Somewhere rendered titles and content can go.
pub trait ContentRegion {
    /// Replaces the whole region: title and content together.
    fn update(&mut self, title: &str, content: &str);
}

/// The main article region: a title slot and a content slot.
///
/// This is the in-process stand-in for the page's `article` element; it
/// just holds the last strings written to it.
#[derive(Debug, Default, Clone)]
pub struct Article {
    title: String,
    content: String,
}

impl Article {
    pub fn new() -> Self {
        Article::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

impl ContentRegion for Article {
    fn update(&mut self, title: &str, content: &str) {
        self.title = title.to_string();
        self.content = content.to_string();
    }
}
