const SHOW_LABEL: &str = "Show detailed analysis";
const HIDE_LABEL: &str = "Hide detailed analysis";

/// Show/hide state of a section's details block.
#[derive(Debug, Clone, Default)]
pub struct Disclosure {
    expanded: bool,
    scroll_pending: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        // Newly opened details are brought into view on the next frame.
        self.scroll_pending = self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn label(&self) -> &'static str {
        if self.expanded { HIDE_LABEL } else { SHOW_LABEL }
    }

    /// Value of the expanded attribute exposed to assistive tooling.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let details = Disclosure::default();
        assert!(!details.is_expanded());
        assert_eq!(details.label(), SHOW_LABEL);
        assert_eq!(details.aria_expanded(), "false");
    }

    #[test]
    fn test_expand_requests_scroll_once() {
        let mut details = Disclosure::default();
        details.toggle();
        assert!(details.is_expanded());
        assert_eq!(details.label(), HIDE_LABEL);
        assert_eq!(details.aria_expanded(), "true");
        assert!(details.take_scroll_request());
        assert!(!details.take_scroll_request());
    }

    #[test]
    fn test_collapse_does_not_scroll() {
        let mut details = Disclosure::default();
        details.toggle();
        details.toggle();
        assert!(!details.is_expanded());
        assert!(!details.take_scroll_request());
    }
}
