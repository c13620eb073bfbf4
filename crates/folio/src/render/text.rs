use crate::content::{Block, Card, ListItem, TimelineEntry};
use crate::theme::Theme;
use eframe::egui::{self, Color32, FontFamily, FontId, Pos2};

/// Layout and paint plain text, returning the height used.
pub fn draw_text(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font_size: f32,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui.painter().layout(
        text.to_string(),
        FontId::proportional(font_size),
        color,
        max_width.max(1.0),
    );
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw a heading. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_heading(
    ui: &egui::Ui,
    text: &str,
    level: u8,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let size = theme.heading_size(level) * scale;
    let color = Theme::with_opacity(theme.heading_color, opacity);
    draw_text(ui, text, pos, size, color, max_width)
}

/// Draw a paragraph. Returns height used.
pub fn draw_paragraph(
    ui: &egui::Ui,
    text: &str,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let color = Theme::with_opacity(theme.foreground, opacity);
    draw_text(ui, text, pos, theme.body_size * scale, color, max_width)
}

fn list_item_job(
    item: &ListItem,
    font_size: f32,
    color: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    if let Some(label) = &item.label {
        let strong = egui::text::TextFormat {
            font_id: FontId::new(font_size + 1.0, FontFamily::Proportional),
            color,
            ..Default::default()
        };
        job.append(&format!("{label}: "), 0.0, strong);
    }
    let plain = egui::text::TextFormat {
        font_id: FontId::new(font_size, FontFamily::Proportional),
        color,
        ..Default::default()
    };
    job.append(&item.text, 0.0, plain);
    job
}

/// Draw a bulleted list. Labeled items render as `label: text`. Returns
/// height used.
pub fn draw_list(
    ui: &egui::Ui,
    items: &[ListItem],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let color = Theme::with_opacity(theme.foreground, opacity);
    let accent = Theme::with_opacity(theme.accent, opacity);
    let marker_width = 28.0 * scale;
    let item_spacing = 8.0 * scale;
    let font_size = theme.body_size * scale;
    let mut y_offset = 0.0;

    for item in items {
        let marker_pos = Pos2::new(pos.x, pos.y + y_offset);
        let marker_galley = ui.painter().layout_no_wrap(
            "\u{2022}".to_string(),
            FontId::proportional(font_size),
            accent,
        );
        ui.painter().galley(marker_pos, marker_galley, accent);

        let job = list_item_job(item, font_size, color, max_width - marker_width);
        let galley = ui.painter().layout_job(job);
        let height = galley.rect.height();
        ui.painter()
            .galley(Pos2::new(pos.x + marker_width, pos.y + y_offset), galley, color);

        y_offset += height + item_spacing;
    }

    y_offset
}

/// Draw cards in a grid, two or three per row depending on width. Returns
/// height used.
pub fn draw_cards(
    ui: &egui::Ui,
    cards: &[Card],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    if cards.is_empty() {
        return 0.0;
    }
    let cols = (if max_width > 720.0 * scale { 3 } else { 2 }).min(cards.len());
    let gap = 12.0 * scale;
    let padding = 14.0 * scale;
    let cell_width = (max_width - gap * (cols as f32 - 1.0)) / cols as f32;
    let text_width = cell_width - padding * 2.0;

    let title_color = Theme::with_opacity(theme.heading_color, opacity);
    let text_color = Theme::with_opacity(theme.muted, opacity);
    let bg = Theme::with_opacity(theme.card_background, opacity);

    let mut y = pos.y;
    for row in cards.chunks(cols) {
        // Lay out first so every card in the row gets the same height.
        let laid_out: Vec<_> = row
            .iter()
            .map(|card| {
                let title = ui.painter().layout(
                    card.title.clone(),
                    FontId::proportional(theme.body_size * 1.05 * scale),
                    title_color,
                    text_width,
                );
                let text = ui.painter().layout(
                    card.text.clone(),
                    FontId::proportional(theme.small_size * scale),
                    text_color,
                    text_width,
                );
                (title, text)
            })
            .collect();
        let row_height = laid_out
            .iter()
            .map(|(t, b)| t.rect.height() + b.rect.height() + 6.0 * scale)
            .fold(0.0, f32::max)
            + padding * 2.0;

        for (col, (title, text)) in laid_out.into_iter().enumerate() {
            let x = pos.x + col as f32 * (cell_width + gap);
            let cell = egui::Rect::from_min_size(
                Pos2::new(x, y),
                egui::vec2(cell_width, row_height),
            );
            ui.painter().rect_filled(cell, 10.0 * scale, bg);
            let title_height = title.rect.height();
            ui.painter()
                .galley(Pos2::new(x + padding, y + padding), title, title_color);
            ui.painter().galley(
                Pos2::new(x + padding, y + padding + title_height + 6.0 * scale),
                text,
                text_color,
            );
        }
        y += row_height + gap;
    }

    y - pos.y - gap
}

/// Draw a vertical timeline with an accent rule on the left. Returns height
/// used.
pub fn draw_timeline(
    ui: &egui::Ui,
    entries: &[TimelineEntry],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let accent = Theme::with_opacity(theme.accent, opacity);
    let title_color = Theme::with_opacity(theme.heading_color, opacity);
    let body_color = Theme::with_opacity(theme.foreground, opacity);
    let bar_width = 3.0 * scale;
    let indent = bar_width + 18.0 * scale;
    let text_width = max_width - indent;
    let entry_spacing = 18.0 * scale;

    let mut y = pos.y;
    for entry in entries {
        let top = y;
        let x = pos.x + indent;
        y += draw_text(
            ui,
            &entry.period,
            Pos2::new(x, y),
            theme.small_size * scale,
            accent,
            text_width,
        );
        y += 4.0 * scale;
        y += draw_text(
            ui,
            &entry.title,
            Pos2::new(x, y),
            theme.body_size * 1.1 * scale,
            title_color,
            text_width,
        );
        y += 4.0 * scale;
        y += draw_text(
            ui,
            &entry.text,
            Pos2::new(x, y),
            theme.body_size * scale,
            body_color,
            text_width,
        );

        let bar = egui::Rect::from_min_max(Pos2::new(pos.x, top), Pos2::new(pos.x + bar_width, y));
        ui.painter().rect_filled(bar, 2.0, accent);

        y += entry_spacing;
    }

    (y - pos.y - entry_spacing).max(0.0)
}

/// Draw emphasized closing text on an accent-tinted panel. Returns height
/// used.
pub fn draw_callout(
    ui: &egui::Ui,
    text: &str,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let padding = 18.0 * scale;
    let color = Theme::with_opacity(theme.heading_color, opacity);
    let galley = ui.painter().layout(
        text.to_string(),
        FontId::proportional(theme.body_size * 1.1 * scale),
        color,
        max_width - padding * 2.0,
    );
    let height = galley.rect.height() + padding * 2.0;
    let panel = egui::Rect::from_min_size(pos, egui::vec2(max_width, height));
    ui.painter()
        .rect_filled(panel, 12.0 * scale, Theme::with_opacity(theme.accent, opacity * 0.12));
    ui.painter()
        .galley(Pos2::new(pos.x + padding, pos.y + padding), galley, color);
    height
}

/// Draw a single block. Returns height used.
pub fn draw_block(
    ui: &egui::Ui,
    block: &Block,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    match block {
        Block::Heading { text } => draw_heading(ui, text, 3, theme, pos, max_width, opacity, scale),
        Block::Paragraph { text } => {
            draw_paragraph(ui, text, theme, pos, max_width, opacity, scale)
        }
        Block::List { items } => draw_list(ui, items, theme, pos, max_width, opacity, scale),
        Block::Cards { items } => draw_cards(ui, items, theme, pos, max_width, opacity, scale),
        Block::Timeline { entries } => {
            draw_timeline(ui, entries, theme, pos, max_width, opacity, scale)
        }
        Block::Callout { text } => draw_callout(ui, text, theme, pos, max_width, opacity, scale),
        Block::Columns { columns } => {
            draw_columns(ui, columns, theme, pos, max_width, opacity, scale)
        }
    }
}

/// Draw blocks side by side in equal-width columns. Returns the height of
/// the tallest column.
pub fn draw_columns(
    ui: &egui::Ui,
    columns: &[Vec<Block>],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    if columns.is_empty() {
        return 0.0;
    }
    let gap = 40.0 * scale;
    let count = columns.len() as f32;
    let col_width = (max_width - gap * (count - 1.0)) / count;

    columns
        .iter()
        .enumerate()
        .map(|(i, blocks)| {
            let x = pos.x + i as f32 * (col_width + gap);
            draw_blocks(ui, blocks, theme, Pos2::new(x, pos.y), col_width, opacity, scale)
        })
        .fold(0.0, f32::max)
}

/// Draw all blocks sequentially. Returns total height used.
pub fn draw_blocks(
    ui: &egui::Ui,
    blocks: &[Block],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let block_spacing = 16.0 * scale;
    let mut y_offset = 0.0;

    for (i, block) in blocks.iter().enumerate() {
        let block_pos = Pos2::new(pos.x, pos.y + y_offset);
        y_offset += draw_block(ui, block, theme, block_pos, max_width, opacity, scale);
        if i + 1 < blocks.len() {
            y_offset += block_spacing;
        }
    }

    y_offset
}
