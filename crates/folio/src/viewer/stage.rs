use eframe::egui;

use crate::error::FullscreenError;

/// Something that can hold the fullscreen slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The whole page, e.g. when launched with `--fullscreen`.
    Page,
    /// The presentation viewer alone.
    Viewer,
}

/// Fullscreen capabilities of the display.
///
/// Callers must treat `fullscreen_element` as the only source of truth and
/// ask again before every decision. Fullscreen can change behind the app's
/// back (window manager shortcuts, OS gestures).
pub trait Stage {
    fn fullscreen_element(&self) -> Option<Target>;

    fn request_fullscreen(&mut self, target: Target) -> Result<(), FullscreenError>;

    fn exit_fullscreen(&mut self);
}

/// Frames a fullscreen request may stay unconfirmed before it is dropped.
pub const REQUEST_GRACE_FRAMES: u8 = 3;

/// Which target holds, or has just asked for, the fullscreen slot.
///
/// The window is fullscreen or not; the target is only remembered so the page
/// knows what to draw. A request the backend never honors expires after
/// [`REQUEST_GRACE_FRAMES`], and any windowed frame outside that window clears
/// the target.
#[derive(Debug, Default)]
pub struct Presentation {
    target: Option<Target>,
    pending: u8,
}

impl Presentation {
    /// Reconcile with the live flag. Call once per frame, before any query.
    pub fn observe(&mut self, live: Option<bool>) {
        if live == Some(true) {
            self.pending = 0;
            return;
        }
        if self.pending > 0 {
            self.pending -= 1;
            if self.pending > 0 {
                return;
            }
            tracing::debug!("Fullscreen request was not honored");
        }
        self.target = None;
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// A request is out and the backend has not confirmed it yet.
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }
}

/// [`Stage`] over an egui viewport. The fullscreen flag always comes from the
/// live viewport info.
pub struct EguiStage<'a> {
    ctx: &'a egui::Context,
    presentation: &'a mut Presentation,
}

impl<'a> EguiStage<'a> {
    pub fn new(ctx: &'a egui::Context, presentation: &'a mut Presentation) -> Self {
        Self { ctx, presentation }
    }

    fn live_fullscreen(&self) -> Option<bool> {
        self.ctx.input(|i| i.viewport().fullscreen)
    }
}

impl Stage for EguiStage<'_> {
    fn fullscreen_element(&self) -> Option<Target> {
        match self.live_fullscreen() {
            Some(true) => Some(self.presentation.target.unwrap_or(Target::Page)),
            _ => None,
        }
    }

    fn request_fullscreen(&mut self, target: Target) -> Result<(), FullscreenError> {
        // Backends that cannot report fullscreen cannot be trusted to honor it.
        match self.live_fullscreen() {
            None => return Err(FullscreenError::Unsupported),
            // The slot is already held; only its holder may give it up.
            Some(true) if self.presentation.target != Some(target) => {
                return Err(FullscreenError::Denied);
            }
            Some(_) => {}
        }
        // Send outside any ctx.input() closure (RwLock).
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        self.presentation.target = Some(target);
        self.presentation.pending = REQUEST_GRACE_FRAMES;
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        self.presentation.target = None;
        self.presentation.pending = 0;
    }
}
