#![forbid(unsafe_code)]

//! Navigation: active-link highlighting and the mobile menu toggle.

/// Class marking the nav link for the current page.
pub const ACTIVE_CLASS: &str = "active";
/// Class that reveals the dashboard's collapsed nav menu.
pub const MENU_SHOW_CLASS: &str = "show";

/// Resolve the page name from a location path.
///
/// The page is the last `/`-separated segment; an empty segment (`/`, `""`,
/// `/app/`) resolves to `index_page`.
#[must_use]
pub fn current_page<'a>(path: &'a str, index_page: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => index_page,
    }
}

/// Whether a link with `href` should be highlighted on `page`.
#[must_use]
pub fn is_active_link(href: Option<&str>, page: &str) -> bool {
    href.is_some_and(|href| href == page)
}

/// Open/closed state of a collapsible menu.
///
/// The DOM class is authoritative; construct from it before toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_last_segment() {
        assert_eq!(current_page("/static/upload.html", "index.html"), "upload.html");
        assert_eq!(current_page("dashboard", "index.html"), "dashboard");
    }

    #[test]
    fn empty_segment_falls_back_to_index() {
        assert_eq!(current_page("/", "index.html"), "index.html");
        assert_eq!(current_page("", "index.html"), "index.html");
        assert_eq!(current_page("/app/", "home.html"), "home.html");
    }

    #[test]
    fn only_exact_href_matches() {
        assert!(is_active_link(Some("upload.html"), "upload.html"));
        assert!(!is_active_link(Some("/upload.html"), "upload.html"));
        assert!(!is_active_link(Some("index.html"), "upload.html"));
        assert!(!is_active_link(None, "index.html"));
    }

    #[test]
    fn menu_toggle_tracks_aria() {
        let mut menu = MenuState::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn close_reports_previous_state() {
        let mut menu = MenuState::new(true);
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }
}
