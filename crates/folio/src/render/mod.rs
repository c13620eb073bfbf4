pub mod text;
pub mod track;

use eframe::egui::{self, Pos2};

use crate::content::Slide;
use crate::theme::Theme;

/// Reference slide size the slide typography is designed for.
const REFERENCE_SIZE: egui::Vec2 = egui::vec2(960.0, 540.0);

/// Scale factor fitting reference-sized slide content into `rect`.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / REFERENCE_SIZE.x).min(rect.height() / REFERENCE_SIZE.y)
}

/// Render a single slide: optional subtitle above the title, then the body.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 48.0 * scale;
    let content_rect = rect.shrink(padding);
    let width = content_rect.width();
    let mut y = content_rect.top();

    if let Some(subtitle) = &slide.subtitle {
        let accent = Theme::with_opacity(theme.accent, opacity);
        y += text::draw_text(
            ui,
            subtitle,
            Pos2::new(content_rect.left(), y),
            theme.h3_size * scale,
            accent,
            width,
        );
        y += 8.0 * scale;
    }

    y += text::draw_heading(
        ui,
        &slide.title,
        2,
        theme,
        Pos2::new(content_rect.left(), y),
        width,
        opacity,
        scale,
    );
    y += 24.0 * scale;

    text::draw_blocks(
        ui,
        &slide.content,
        theme,
        Pos2::new(content_rect.left(), y),
        width,
        opacity,
        scale,
    );
}
