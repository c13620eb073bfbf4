/// Windows wider than this show the pills inline and never the mobile menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// The hamburger menu shown on narrow windows.
///
/// Hamburger and menu share one `open` flag, so they can never disagree.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Mobile menu toggled");
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The page underneath does not scroll while the menu is open.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    /// Close after an in-page link was followed.
    pub fn on_link_click(&mut self) {
        if self.open {
            self.toggle();
        }
    }

    /// A click landed somewhere. Closes the menu when it hit neither the
    /// menu nor the hamburger. Returns whether the menu closed.
    pub fn on_click(&mut self, inside_menu: bool, inside_hamburger: bool) -> bool {
        if self.open && !inside_menu && !inside_hamburger {
            self.toggle();
            return true;
        }
        false
    }

    /// The window was resized. Growing past the breakpoint closes the menu.
    pub fn on_resize(&mut self, width: f32) -> bool {
        if self.open && width > MOBILE_BREAKPOINT {
            self.toggle();
            return true;
        }
        false
    }
}

pub fn is_narrow(width: f32) -> bool {
    width <= MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> MobileMenu {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu
    }

    #[test]
    fn test_toggle_locks_scroll() {
        let mut menu = MobileMenu::default();
        assert!(!menu.locks_scroll());
        menu.toggle();
        assert!(menu.is_open() && menu.locks_scroll());
        menu.toggle();
        assert!(!menu.is_open() && !menu.locks_scroll());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = opened();
        assert!(!menu.on_click(true, false), "Click inside the menu keeps it");
        assert!(!menu.on_click(false, true), "Hamburger handles its own click");
        assert!(menu.is_open());
        assert!(menu.on_click(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_while_closed_does_nothing() {
        let mut menu = MobileMenu::default();
        assert!(!menu.on_click(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_past_breakpoint_closes() {
        let mut menu = opened();
        assert!(!menu.on_resize(MOBILE_BREAKPOINT));
        assert!(menu.is_open());
        assert!(menu.on_resize(1024.0));
        assert!(!menu.is_open());
        assert!(!menu.on_resize(1024.0));
    }

    #[test]
    fn test_link_click_closes_only_when_open() {
        let mut menu = opened();
        menu.on_link_click();
        assert!(!menu.is_open());
        menu.on_link_click();
        assert!(!menu.is_open(), "Link click must not reopen the menu");
    }

    #[test]
    fn test_is_narrow() {
        assert!(is_narrow(400.0));
        assert!(is_narrow(768.0));
        assert!(!is_narrow(769.0));
    }
}
