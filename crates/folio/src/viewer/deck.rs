/// Side effects of moving through a deck. The viewer implements this over its
/// control surfaces; tests implement it to record what was asked for.
pub trait DeckSurface {
    /// Move the track so the current slide is the one showing.
    fn reposition(&mut self, deck: &Deck);

    /// Bring counters and button states in line with the current slide.
    fn refresh(&mut self, deck: &Deck);
}

/// Cursor over a fixed number of slides.
///
/// `current` stays in `0..count` for a non-empty deck. An empty deck keeps
/// `current == 0`, reports itself as both first and last, and ignores every
/// navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    count: usize,
    current: usize,
}

impl Deck {
    pub fn new(count: usize) -> Self {
        Self { count, current: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 >= self.count
    }

    /// Step back one slide. Returns false, without touching the surface, at
    /// the first slide.
    pub fn previous(&mut self, surface: &mut impl DeckSurface) -> bool {
        if self.at_first() {
            return false;
        }
        self.current -= 1;
        self.settle(surface);
        true
    }

    /// Step forward one slide. Returns false at the last slide.
    pub fn next(&mut self, surface: &mut impl DeckSurface) -> bool {
        if self.at_last() {
            return false;
        }
        self.current += 1;
        self.settle(surface);
        true
    }

    /// Jump straight to `index`. Out-of-range and same-slide requests are
    /// ignored.
    pub fn go_to(&mut self, index: usize, surface: &mut impl DeckSurface) -> bool {
        if index >= self.count || index == self.current {
            return false;
        }
        self.current = index;
        self.settle(surface);
        true
    }

    /// Push the current state to a freshly bound surface.
    pub fn sync(&self, surface: &mut impl DeckSurface) {
        surface.reposition(self);
        surface.refresh(self);
    }

    fn settle(&self, surface: &mut impl DeckSurface) {
        tracing::debug!(slide = self.current + 1, of = self.count, "Slide changed");
        surface.reposition(self);
        surface.refresh(self);
    }

    /// Horizontal track offset as a percentage of one slide's width.
    pub fn track_offset_percent(&self) -> f32 {
        -(self.current as f32) * 100.0
    }

    pub fn counter_text(&self) -> String {
        if self.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.current + 1, self.count)
        }
    }
}
