use std::collections::HashSet;

use eframe::egui;

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.06;
/// Bottom of the viewport ignored by the reveal check, as a fraction of its
/// height.
pub const REVEAL_BOTTOM_MARGIN: f32 = 0.10;
/// Fade-in elements show once their top is this far above the viewport bottom.
pub const FADE_IN_OFFSET: f32 = 150.0;

/// Share of `element`'s height inside `root`, in `0.0..=1.0`.
pub fn visible_fraction(element: egui::Rect, root: egui::Rect) -> f32 {
    let height = element.height();
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = element.bottom().min(root.bottom()) - element.top().max(root.top());
    (overlap / height).clamp(0.0, 1.0)
}

fn reveal_root(viewport: egui::Rect) -> egui::Rect {
    let mut root = viewport;
    root.max.y -= viewport.height() * REVEAL_BOTTOM_MARGIN;
    root
}

/// One-shot reveal of elements entering the viewport.
///
/// Elements are observed until first seen, then dropped from observation;
/// a revealed element never hides again.
#[derive(Debug, Default)]
pub struct IntersectionReveal {
    observed: HashSet<egui::Id>,
    revealed: HashSet<egui::Id>,
}

impl IntersectionReveal {
    pub fn observe(&mut self, id: egui::Id) {
        if !self.revealed.contains(&id) {
            self.observed.insert(id);
        }
    }

    #[cfg(test)]
    pub fn is_observing(&self, id: egui::Id) -> bool {
        self.observed.contains(&id)
    }

    pub fn is_revealed(&self, id: egui::Id) -> bool {
        self.revealed.contains(&id)
    }

    /// Check an observed element against the viewport. Returns true on the
    /// update that reveals it.
    pub fn update(&mut self, id: egui::Id, bounds: egui::Rect, viewport: egui::Rect) -> bool {
        if !self.observed.contains(&id) {
            return false;
        }
        let fraction = visible_fraction(bounds, reveal_root(viewport));
        if fraction > 0.0 && fraction >= REVEAL_THRESHOLD {
            self.observed.remove(&id);
            self.revealed.insert(id);
            return true;
        }
        false
    }
}

/// Fade-in marking driven by scroll position.
#[derive(Debug, Default)]
pub struct FadeIn {
    visible: HashSet<egui::Id>,
}

impl FadeIn {
    /// Mark `id` visible once its top clears the offset. Never unmarks.
    pub fn update(&mut self, id: egui::Id, top: f32, viewport: egui::Rect) -> bool {
        if top < viewport.bottom() - FADE_IN_OFFSET {
            self.visible.insert(id);
        }
        self.is_visible(id)
    }

    pub fn is_visible(&self, id: egui::Id) -> bool {
        self.visible.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Rect, pos2};

    fn viewport() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 1000.0))
    }

    fn band(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(800.0, bottom))
    }

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(band(0.0, 100.0), viewport()), 1.0);
        assert_eq!(visible_fraction(band(950.0, 1050.0), viewport()), 0.5);
        assert_eq!(visible_fraction(band(1200.0, 1300.0), viewport()), 0.0);
        assert_eq!(visible_fraction(band(10.0, 10.0), viewport()), 0.0);
    }

    #[test]
    fn test_reveal_ignores_bottom_margin() {
        let mut reveal = IntersectionReveal::default();
        let id = egui::Id::new("section");
        reveal.observe(id);
        // Entirely inside the bottom 10% of the viewport.
        assert!(!reveal.update(id, band(920.0, 1100.0), viewport()));
        assert!(reveal.is_observing(id));
    }

    #[test]
    fn test_reveal_needs_threshold() {
        let mut reveal = IntersectionReveal::default();
        let id = egui::Id::new("tall");
        reveal.observe(id);
        // 1000px tall, 40px above the margin line: 4% visible.
        assert!(!reveal.update(id, band(860.0, 1860.0), viewport()));
        // 100px visible: 10%.
        assert!(reveal.update(id, band(800.0, 1800.0), viewport()));
        assert!(reveal.is_revealed(id));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = IntersectionReveal::default();
        let id = egui::Id::new("card");
        reveal.observe(id);
        assert!(reveal.update(id, band(100.0, 300.0), viewport()));
        assert!(!reveal.is_observing(id), "Revealed elements are unobserved");
        assert!(!reveal.update(id, band(5000.0, 5200.0), viewport()));
        assert!(reveal.is_revealed(id));
        reveal.observe(id);
        assert!(!reveal.is_observing(id), "Revealed elements are not re-observed");
    }

    #[test]
    fn test_unobserved_elements_are_ignored() {
        let mut reveal = IntersectionReveal::default();
        let id = egui::Id::new("stray");
        assert!(!reveal.update(id, band(0.0, 100.0), viewport()));
        assert!(!reveal.is_revealed(id));
    }

    #[test]
    fn test_fade_in_threshold() {
        let mut fade = FadeIn::default();
        let id = egui::Id::new("header");
        assert!(!fade.update(id, 850.0, viewport()));
        assert!(fade.update(id, 849.0, viewport()));
        // Stays visible after scrolling away.
        assert!(fade.update(id, 4000.0, viewport()));
    }
}
