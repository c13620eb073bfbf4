/// Scroll distance after which the header switches to its compact look.
pub const HEADER_SCROLLED_AFTER: f32 = 50.0;
/// How far below the header a section must reach to count as current.
const ACTIVE_LOOKAHEAD: f32 = 100.0;

/// Where a section sits in page (content) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// A section on this page, by id.
    Section(&'a str),
    /// Leaves the app (web or mail).
    External(&'a str),
}

pub fn classify_href(href: &str) -> LinkTarget<'_> {
    if href.starts_with("http") || href.starts_with("mailto") {
        LinkTarget::External(href)
    } else {
        LinkTarget::Section(href.trim_start_matches('#'))
    }
}

/// Scroll offset that puts a section's top just under the header.
pub fn scroll_target(section_top: f32, header_height: f32) -> f32 {
    (section_top - header_height).max(0.0)
}

/// Section containing the lookahead point, last match winning.
pub fn section_at<'a>(
    scroll_y: f32,
    header_height: f32,
    sections: &'a [SectionSpan],
) -> Option<&'a str> {
    let position = scroll_y + header_height + ACTIVE_LOOKAHEAD;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

/// Active pill and header state.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    active: Option<String>,
    scrolled: bool,
}

impl NavState {
    /// Recompute from the current scroll position. Between sections the
    /// previous pill stays active.
    pub fn on_scroll(&mut self, scroll_y: f32, header_height: f32, sections: &[SectionSpan]) {
        self.scrolled = scroll_y > HEADER_SCROLLED_AFTER;
        if let Some(id) = section_at(scroll_y, header_height, sections) {
            self.set_active(id);
        }
    }

    pub fn set_active(&mut self, id: &str) {
        if self.active.as_deref() != Some(id) {
            tracing::trace!(section = id, "Active section");
            self.active = Some(id.to_string());
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Eases the page scroll offset toward a target, a fixed fraction per frame.
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    target: Option<f32>,
}

impl SmoothScroll {
    pub fn scroll_to(&mut self, target: f32) {
        self.target = Some(target.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    /// Next offset to apply, or `None` when idle. Snaps and stops once
    /// within half a point of the target.
    pub fn step(&mut self, current: f32) -> Option<f32> {
        let target = self.target?;
        let diff = target - current;
        if diff.abs() < 0.5 {
            self.target = None;
            Some(target)
        } else {
            Some(current + diff * 0.15)
        }
    }
}
