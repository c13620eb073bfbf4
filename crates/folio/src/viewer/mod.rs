//! The embedded slide-deck viewer.
//!
//! [`PresentationViewer`] pairs a pure [`Deck`] cursor with the control
//! surfaces that were bound at construction. Every surface is optional; a
//! missing one switches off only its own behavior.

pub mod deck;
pub mod stage;

use eframe::egui;

use crate::content::{Controls, Slide};
pub use deck::{Deck, DeckSurface};
pub use stage::{EguiStage, Presentation, Stage, Target};

/// One materialized slide on the track, tagged with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideFrame {
    pub index: usize,
    pub slide: Slide,
}

/// The horizontal strip holding every slide. Frames are built once; moving
/// through the deck only changes `offset_percent`.
#[derive(Debug, Clone)]
pub struct Track {
    frames: Vec<SlideFrame>,
    offset_percent: f32,
    bounds: Option<egui::Rect>,
}

impl Track {
    fn materialize(slides: &[Slide]) -> Self {
        let frames = slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideFrame {
                index,
                slide: slide.clone(),
            })
            .collect();
        Self {
            frames,
            offset_percent: 0.0,
            bounds: None,
        }
    }

    pub fn frames(&self) -> &[SlideFrame] {
        &self.frames
    }

    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    /// Screen rect of the track as last drawn.
    pub fn bounds(&self) -> Option<egui::Rect> {
        self.bounds
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavButton {
    pub disabled: bool,
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the key must not reach anything else (e.g. page scrolling).
    Consumed,
    /// Not ours, or handled without suppressing the default.
    Passed,
}

#[derive(Debug, Default)]
struct Surfaces {
    track: Option<Track>,
    counter: Option<Counter>,
    previous: Option<NavButton>,
    next: Option<NavButton>,
}

impl DeckSurface for Surfaces {
    fn reposition(&mut self, deck: &Deck) {
        if let Some(track) = self.track.as_mut() {
            track.offset_percent = deck.track_offset_percent();
        }
    }

    fn refresh(&mut self, deck: &Deck) {
        if let Some(counter) = self.counter.as_mut() {
            counter.text = deck.counter_text();
        }
        if let Some(previous) = self.previous.as_mut() {
            previous.disabled = deck.at_first();
        }
        if let Some(next) = self.next.as_mut() {
            next.disabled = deck.at_last();
        }
    }
}

#[derive(Debug)]
pub struct PresentationViewer {
    deck: Deck,
    surfaces: Surfaces,
    fullscreen_toggle: bool,
    root: Option<Target>,
}

impl PresentationViewer {
    pub fn new(slides: &[Slide], controls: Controls) -> Self {
        let surfaces = Surfaces {
            track: controls.track.then(|| Track::materialize(slides)),
            counter: controls.counter.then(Counter::default),
            previous: controls.previous.then(NavButton::default),
            next: controls.next.then(NavButton::default),
        };
        let mut viewer = Self {
            deck: Deck::new(slides.len()),
            surfaces,
            fullscreen_toggle: controls.fullscreen,
            root: controls.root.then_some(Target::Viewer),
        };
        viewer.deck.sync(&mut viewer.surfaces);
        tracing::debug!(slides = slides.len(), "Presentation viewer ready");
        viewer
    }

    pub fn current_index(&self) -> usize {
        self.deck.current()
    }

    pub fn slide_count(&self) -> usize {
        self.deck.count()
    }

    pub fn previous_slide(&mut self) -> bool {
        self.deck.previous(&mut self.surfaces)
    }

    pub fn next_slide(&mut self) -> bool {
        self.deck.next(&mut self.surfaces)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.deck.go_to(index, &mut self.surfaces)
    }

    pub fn track(&self) -> Option<&Track> {
        self.surfaces.track.as_ref()
    }

    pub fn counter(&self) -> Option<&Counter> {
        self.surfaces.counter.as_ref()
    }

    pub fn previous_button(&self) -> Option<NavButton> {
        self.surfaces.previous
    }

    pub fn next_button(&self) -> Option<NavButton> {
        self.surfaces.next
    }

    pub fn has_fullscreen_toggle(&self) -> bool {
        self.fullscreen_toggle
    }

    /// Record where the track was drawn this frame.
    pub fn place_track(&mut self, rect: egui::Rect) {
        if let Some(track) = self.surfaces.track.as_mut() {
            track.bounds = Some(rect);
        }
    }

    /// Whether the track overlaps `viewport` vertically. Without a track
    /// there is nothing on screen to navigate.
    pub fn is_in_viewport(&self, viewport: egui::Rect) -> bool {
        self.track()
            .and_then(Track::bounds)
            .is_some_and(|rect| rect.top() < viewport.bottom() && rect.bottom() > viewport.top())
    }

    /// Enter fullscreen on the viewer root, or leave whatever is fullscreen.
    /// A refused request is logged and otherwise ignored.
    pub fn toggle_fullscreen(&self, stage: &mut impl Stage) {
        let Some(root) = self.root else {
            return;
        };
        if stage.fullscreen_element().is_none() {
            if let Err(e) = stage.request_fullscreen(root) {
                tracing::warn!("Fullscreen error: {e}");
            }
        } else {
            stage.exit_fullscreen();
        }
    }

    /// Keyboard navigation, active only while the track is on screen.
    pub fn handle_key(
        &mut self,
        key: egui::Key,
        viewport: egui::Rect,
        stage: &mut impl Stage,
    ) -> KeyOutcome {
        if !self.is_in_viewport(viewport) {
            return KeyOutcome::Passed;
        }
        match key {
            egui::Key::ArrowLeft => {
                self.previous_slide();
                KeyOutcome::Consumed
            }
            egui::Key::ArrowRight => {
                self.next_slide();
                KeyOutcome::Consumed
            }
            egui::Key::Escape => {
                if stage.fullscreen_element().is_some() {
                    stage.exit_fullscreen();
                }
                KeyOutcome::Passed
            }
            _ => KeyOutcome::Passed,
        }
    }
}
