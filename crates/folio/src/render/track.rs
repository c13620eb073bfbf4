use eframe::egui;

use crate::render;
use crate::theme::Theme;
use crate::viewer::Track;

/// Seconds the track takes to glide to a new offset.
const TRACK_GLIDE: f32 = 0.4;

/// Screen rect of slide `index` when the track sits at `offset_percent`.
pub fn frame_rect(rect: egui::Rect, index: usize, offset_percent: f32) -> egui::Rect {
    let x = rect.left() + (index as f32 + offset_percent / 100.0) * rect.width();
    egui::Rect::from_min_size(egui::pos2(x, rect.top()), rect.size())
}

/// Draw the track clipped to `rect`. Only frames overlapping the window are
/// painted; frames themselves are never rebuilt here.
pub fn draw_track(ui: &mut egui::Ui, track: &Track, theme: &Theme, rect: egui::Rect) {
    let offset = ui.ctx().animate_value_with_time(
        ui.id().with("track_offset"),
        track.offset_percent(),
        TRACK_GLIDE,
    );

    ui.painter().rect_filled(rect, 16.0, theme.card_background);

    let mut clip = ui.new_child(egui::UiBuilder::new().max_rect(rect).id_salt("track_clip"));
    clip.set_clip_rect(rect.intersect(ui.clip_rect()));

    let scale = render::compute_scale(rect);
    for frame in track.frames() {
        let slide_rect = frame_rect(rect, frame.index, offset);
        if !slide_rect.intersects(rect) {
            continue;
        }
        render::render_slide(&clip, &frame.slide, theme, slide_rect, 1.0, scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Rect, pos2, vec2};

    #[test]
    fn test_current_frame_fills_rect() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), vec2(800.0, 450.0));
        for i in 0..5 {
            let r = frame_rect(rect, i, -(i as f32) * 100.0);
            assert_eq!(r, rect, "Slide {i} should sit exactly on the track window");
        }
    }

    #[test]
    fn test_neighbors_sit_one_width_apart() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 450.0));
        let next = frame_rect(rect, 3, -200.0);
        assert_eq!(next.left(), 800.0);
        let prev = frame_rect(rect, 1, -200.0);
        assert_eq!(prev.left(), -800.0);
    }

    #[test]
    fn test_draw_track_inside_a_pass() {
        let portfolio = crate::content::builtin().unwrap();
        let viewer = crate::viewer::PresentationViewer::new(
            &portfolio.presentation.slides,
            crate::content::Controls::default(),
        );
        let track = viewer.track().expect("default controls include the track");
        let theme = Theme::light();

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = Rect::from_min_size(ui.max_rect().min, vec2(480.0, 270.0));
                draw_track(ui, track, &theme, rect);
            });
        });
        assert!(!output.shapes.is_empty(), "Track should paint something");
    }
}
