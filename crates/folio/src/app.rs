use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use eframe::egui;

use crate::config::Config;
use crate::content::{self, Block, Portfolio, Section};
use crate::page::details::Disclosure;
use crate::page::menu::{self, MobileMenu};
use crate::page::nav::{self, LinkTarget, NavState, SectionSpan, SmoothScroll};
use crate::page::reveal::{FadeIn, IntersectionReveal};
use crate::render::{text, track};
use crate::theme::Theme;
use crate::throttle::{self, Throttle};
use crate::viewer::{EguiStage, KeyOutcome, Presentation, PresentationViewer, Stage, Target};

const CONTENT_MAX_WIDTH: f32 = 980.0;
const PAGE_MARGIN: f32 = 24.0;
const SECTION_SPACING: f32 = 72.0;
const TRACK_ASPECT: f32 = 9.0 / 16.0;
const REVEAL_DURATION: f32 = 0.6;
const VIEWER_KEYS: [egui::Key; 3] = [
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::Escape,
];

pub struct LaunchOptions {
    pub file: Option<PathBuf>,
    pub fullscreen: bool,
    pub slide: Option<usize>,
    pub theme: Option<&'static str>,
}

/// UI interactions collected while drawing, applied once the frame's
/// closures have released their borrows.
enum Action {
    Follow(String),
    ToggleMenu,
    ToggleTheme,
    PreviousSlide,
    NextSlide,
    ToggleFullscreen,
    ToggleDetails(String),
}

struct PortfolioApp {
    portfolio: Arc<Portfolio>,
    theme: Theme,
    viewer: Option<PresentationViewer>,
    /// Which target asked for fullscreen; the on/off flag lives in the viewport.
    presentation: Presentation,
    /// Live answer for this frame: the viewer holds fullscreen.
    viewer_presented: bool,
    nav: NavState,
    menu: MobileMenu,
    reveal: IntersectionReveal,
    fade_in: FadeIn,
    details: HashMap<String, Disclosure>,
    scroll_throttle: Throttle,
    resize_throttle: Throttle,
    smooth_scroll: SmoothScroll,
    scroll_offset: f32,
    handled_offset: Option<f32>,
    last_width: Option<f32>,
    /// Section spans in page coordinates, from the last drawn frame.
    sections: Vec<SectionSpan>,
    /// Fade-in targets and their tops in page coordinates.
    fade_targets: Vec<(egui::Id, f32)>,
    header_height: f32,
    viewport: egui::Rect,
    menu_rect: Option<egui::Rect>,
    hamburger_rect: Option<egui::Rect>,
    started: Instant,
    booted: bool,
}

impl PortfolioApp {
    fn new(portfolio: Portfolio, theme: Theme, start_slide: usize, started: Instant) -> Self {
        let viewer = if portfolio.presentation_section().is_some() {
            let mut viewer = PresentationViewer::new(
                &portfolio.presentation.slides,
                portfolio.presentation.controls,
            );
            if start_slide > 0 && !viewer.go_to(start_slide) {
                tracing::warn!(
                    "Slide {} does not exist ({} slides); starting at 1",
                    start_slide + 1,
                    viewer.slide_count()
                );
            }
            Some(viewer)
        } else {
            tracing::debug!("No section hosts the presentation; viewer disabled");
            None
        };

        Self {
            portfolio: Arc::new(portfolio),
            theme,
            viewer,
            presentation: Presentation::default(),
            viewer_presented: false,
            nav: NavState::default(),
            menu: MobileMenu::default(),
            reveal: IntersectionReveal::default(),
            fade_in: FadeIn::default(),
            details: HashMap::new(),
            scroll_throttle: Throttle::new(throttle::SCROLL_LIMIT),
            resize_throttle: Throttle::new(throttle::RESIZE_LIMIT),
            smooth_scroll: SmoothScroll::default(),
            scroll_offset: 0.0,
            handled_offset: None,
            last_width: None,
            sections: Vec::new(),
            fade_targets: Vec::new(),
            header_height: 0.0,
            viewport: egui::Rect::ZERO,
            menu_rect: None,
            hamburger_rect: None,
            started,
            booted: false,
        }
    }

    fn boot(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(self.theme.visuals());
        tracing::info!(
            title = %self.portfolio.title,
            sections = self.portfolio.sections.len(),
            slides = self.viewer.as_ref().map_or(0, PresentationViewer::slide_count),
            "Portfolio loaded"
        );
        tracing::info!(
            "Page ready in {:.2}ms",
            self.started.elapsed().as_secs_f64() * 1000.0
        );
        self.booted = true;
    }

    /// Scroll handler: header state, active pill and fade-in marking.
    fn on_scroll(&mut self) {
        self.nav
            .on_scroll(self.scroll_offset, self.header_height, &self.sections);
        for (id, top) in &self.fade_targets {
            let screen_top = self.viewport.top() + top - self.scroll_offset;
            self.fade_in.update(*id, screen_top, self.viewport);
        }
    }

    fn on_resize(&mut self, width: f32) {
        if self.menu.on_resize(width) {
            tracing::debug!(width, "Closed mobile menu on resize");
        }
    }

    fn follow_link(&mut self, ctx: &egui::Context, href: &str) {
        match nav::classify_href(href) {
            LinkTarget::External(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
            LinkTarget::Section(id) => {
                self.menu.on_link_click();
                match self.sections.iter().find(|s| s.id == id) {
                    Some(span) => {
                        self.smooth_scroll
                            .scroll_to(nav::scroll_target(span.top, self.header_height));
                        self.nav.set_active(id);
                    }
                    None => tracing::debug!(section = id, "Link to unknown section"),
                }
            }
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: Action) {
        match action {
            Action::Follow(href) => self.follow_link(ctx, &href),
            Action::ToggleMenu => self.menu.toggle(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                ctx.set_visuals(self.theme.visuals());
            }
            Action::PreviousSlide => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.previous_slide();
                }
            }
            Action::NextSlide => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.next_slide();
                }
            }
            Action::ToggleFullscreen => {
                if let Some(viewer) = self.viewer.as_ref() {
                    let mut stage = EguiStage::new(ctx, &mut self.presentation);
                    viewer.toggle_fullscreen(&mut stage);
                    ctx.request_repaint();
                }
            }
            Action::ToggleDetails(id) => {
                if let Some(details) = self.details.get_mut(&id) {
                    details.toggle();
                    tracing::debug!(
                        section = %id,
                        expanded = details.aria_expanded(),
                        "Details toggled"
                    );
                }
            }
        }
    }

    fn draw_header(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let screen = ctx.available_rect();
        let narrow = menu::is_narrow(screen.width());
        let fill = if self.nav.is_scrolled() {
            Theme::with_opacity(self.theme.surface, 0.94)
        } else {
            Theme::with_opacity(self.theme.background, 0.8)
        };

        let portfolio = Arc::clone(&self.portfolio);
        let theme_label = if self.theme.is_dark() { "Light" } else { "Dark" };
        let menu_open = self.menu.is_open();
        let nav = &self.nav;
        let is_active = |href: &str| nav.is_active(href.trim_start_matches('#'));
        let mut hamburger_rect = None;
        let mut menu_rect = None;

        let response = egui::Area::new(egui::Id::new("header"))
            .fixed_pos(screen.min)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(24, 12))
                    .show(ui, |ui| {
                        ui.set_width(screen.width() - 48.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&portfolio.title)
                                    .strong()
                                    .size(20.0)
                                    .color(self.theme.heading_color),
                            );
                            let layout = egui::Layout::right_to_left(egui::Align::Center);
                            ui.with_layout(layout, |ui| {
                                if ui.button(theme_label).clicked() {
                                    actions.push(Action::ToggleTheme);
                                }
                                if narrow {
                                    let hamburger = ui.selectable_label(menu_open, "Menu");
                                    if hamburger.clicked() {
                                        actions.push(Action::ToggleMenu);
                                    }
                                    hamburger_rect = Some(hamburger.rect);
                                } else {
                                    // Right-to-left: push pills in reverse so they read in order.
                                    for (label, href) in pills(&portfolio).into_iter().rev() {
                                        let active = is_active(&href);
                                        if ui.selectable_label(active, label).clicked() {
                                            actions.push(Action::Follow(href));
                                        }
                                    }
                                }
                            });
                        });

                        if narrow && menu_open {
                            let inner = ui.vertical(|ui| {
                                ui.add_space(8.0);
                                for (label, href) in pills(&portfolio) {
                                    if ui.selectable_label(is_active(&href), label).clicked() {
                                        actions.push(Action::Follow(href));
                                    }
                                }
                            });
                            menu_rect = Some(inner.response.rect);
                        }
                    });
            });

        self.header_height = response.response.rect.height();
        self.hamburger_rect = hamburger_rect;
        self.menu_rect = menu_rect;
    }

    fn draw_page(&mut self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let portfolio = Arc::clone(&self.portfolio);
        let origin_y = ui.cursor().top();
        let full_width = ui.available_width();
        let column = (full_width - PAGE_MARGIN * 2.0).min(CONTENT_MAX_WIDTH).max(1.0);
        let margin = (full_width - column) / 2.0;

        let mut spans = Vec::with_capacity(portfolio.sections.len());
        let mut fade_targets = Vec::with_capacity(portfolio.sections.len());

        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(column);
                ui.add_space(self.header_height + 48.0);
                self.draw_hero(ui, &portfolio, column);

                for section in &portfolio.sections {
                    ui.add_space(SECTION_SPACING);
                    let top = ui.cursor().top();
                    let heading_id = self.draw_section(ui, section, column, actions);
                    let bottom = ui.cursor().top();
                    spans.push(SectionSpan::new(&section.id, top - origin_y, bottom - top));
                    if let Some(id) = heading_id {
                        fade_targets.push((id, top - origin_y));
                    }
                }
                ui.add_space(SECTION_SPACING);
            });
        });

        self.sections = spans;
        self.fade_targets = fade_targets;
    }

    fn draw_hero(&self, ui: &mut egui::Ui, portfolio: &Portfolio, width: f32) {
        let pos = ui.cursor().min;
        let mut height =
            text::draw_heading(ui, &portfolio.title, 1, &self.theme, pos, width, 1.0, 1.0);
        if let Some(tagline) = &portfolio.tagline {
            height += 12.0;
            height += text::draw_text(
                ui,
                tagline,
                egui::pos2(pos.x, pos.y + height),
                self.theme.h3_size,
                self.theme.muted,
                width,
            );
        }
        ui.allocate_space(egui::vec2(width, height));
    }

    /// Draw one section. Returns the fade-in id of its heading, if it has one.
    fn draw_section(
        &mut self,
        ui: &mut egui::Ui,
        section: &Section,
        width: f32,
        actions: &mut Vec<Action>,
    ) -> Option<egui::Id> {
        let id = egui::Id::new(("section", section.id.as_str()));
        self.reveal.observe(id);
        let revealed = self.reveal.is_revealed(id);
        let opacity =
            ui.ctx()
                .animate_bool_with_time(id.with("reveal"), revealed, REVEAL_DURATION);

        let top = ui.cursor().top();
        let mut heading_id = None;

        ui.scope(|ui| {
            ui.set_opacity(opacity);

            if let Some(heading) = &section.heading {
                let hid = id.with("heading");
                let heading_opacity = ui.ctx().animate_bool_with_time(
                    hid.with("fade"),
                    self.fade_in.is_visible(hid),
                    REVEAL_DURATION,
                );
                let h = text::draw_heading(
                    ui,
                    heading,
                    2,
                    &self.theme,
                    ui.cursor().min,
                    width,
                    heading_opacity,
                    1.0,
                );
                ui.allocate_space(egui::vec2(width, h));
                ui.add_space(20.0);
                heading_id = Some(hid);
            }

            paint_blocks(ui, &section.blocks, &self.theme, width);

            if let Some(details) = &section.details {
                self.draw_details(ui, &section.id, details, width, actions);
            }

            if section.presentation {
                if let Some(viewer) = self.viewer.as_mut() {
                    ui.add_space(24.0);
                    draw_viewer(
                        ui,
                        viewer,
                        &self.theme,
                        width,
                        None,
                        self.viewer_presented,
                        actions,
                    );
                }
            }
        });

        let bounds = egui::Rect::from_min_max(
            egui::pos2(ui.cursor().left(), top),
            egui::pos2(ui.cursor().left() + width, ui.cursor().top()),
        );
        if self.reveal.update(id, bounds, self.viewport) {
            tracing::trace!(section = %section.id, "Section revealed");
        }
        heading_id
    }

    fn draw_details(
        &mut self,
        ui: &mut egui::Ui,
        section_id: &str,
        blocks: &[Block],
        width: f32,
        actions: &mut Vec<Action>,
    ) {
        let state = self.details.entry(section_id.to_string()).or_default();
        ui.add_space(16.0);
        let button = egui::Button::new(state.label()).selected(state.is_expanded());
        if ui.add(button).clicked() {
            actions.push(Action::ToggleDetails(section_id.to_string()));
        }
        if state.is_expanded() {
            ui.add_space(16.0);
            let top = ui.cursor().min;
            let height = paint_blocks(ui, blocks, &self.theme, width);
            if state.take_scroll_request() {
                let rect = egui::Rect::from_min_size(top, egui::vec2(width, height));
                ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            }
        }
    }
}

/// Pill labels and hrefs: one per section, then the outbound links.
fn pills(portfolio: &Portfolio) -> Vec<(String, String)> {
    portfolio
        .sections
        .iter()
        .map(|s| (s.label.clone(), format!("#{}", s.id)))
        .chain(portfolio.links.iter().map(|l| (l.label.clone(), l.href.clone())))
        .collect()
}

/// Paint blocks at the cursor and reserve their space. Returns the height.
fn paint_blocks(ui: &mut egui::Ui, blocks: &[Block], theme: &Theme, width: f32) -> f32 {
    if blocks.is_empty() {
        return 0.0;
    }
    let height = text::draw_blocks(ui, blocks, theme, ui.cursor().min, width, 1.0, 1.0);
    ui.allocate_space(egui::vec2(width, height));
    height
}

/// Track plus control row. Each control is drawn only if the viewer has it.
fn draw_viewer(
    ui: &mut egui::Ui,
    viewer: &mut PresentationViewer,
    theme: &Theme,
    width: f32,
    height: Option<f32>,
    presented: bool,
    actions: &mut Vec<Action>,
) {
    if viewer.track().is_some() {
        let track_height = height.unwrap_or(width * TRACK_ASPECT);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, track_height), egui::Sense::hover());
        viewer.place_track(rect);
        if let Some(track) = viewer.track() {
            track::draw_track(ui, track, theme, rect);
        }
        ui.add_space(12.0);
    }

    ui.horizontal(|ui| {
        if let Some(previous) = viewer.previous_button() {
            let button = egui::Button::new("\u{2190} Previous");
            if ui.add_enabled(!previous.disabled, button).clicked() {
                actions.push(Action::PreviousSlide);
            }
        }
        if let Some(counter) = viewer.counter() {
            ui.label(
                egui::RichText::new(&counter.text)
                    .monospace()
                    .color(theme.muted),
            );
        }
        if let Some(next) = viewer.next_button() {
            let button = egui::Button::new("Next \u{2192}");
            if ui.add_enabled(!next.disabled, button).clicked() {
                actions.push(Action::NextSlide);
            }
        }
        if viewer.has_fullscreen_toggle() {
            let label = if presented {
                "Exit fullscreen"
            } else {
                "Fullscreen"
            };
            if ui.button(label).clicked() {
                actions.push(Action::ToggleFullscreen);
            }
        }
    });
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.booted {
            self.boot(ctx);
        }

        // Fullscreen may change behind our back (window manager, OS gesture).
        self.presentation.observe(ctx.input(|i| i.viewport().fullscreen));
        if self.presentation.is_pending() {
            ctx.request_repaint();
        }

        // Collect input first; viewport commands must be sent outside
        // ctx.input() (RwLock).
        let (keys, click, wheel) = ctx.input(|i| {
            let keys: Vec<egui::Key> = VIEWER_KEYS
                .into_iter()
                .filter(|k| i.key_pressed(*k))
                .collect();
            let click = if i.pointer.any_click() {
                i.pointer.interact_pos()
            } else {
                None
            };
            (keys, click, i.smooth_scroll_delta.y != 0.0)
        });

        if let Some(viewer) = self.viewer.as_mut() {
            let mut stage = EguiStage::new(ctx, &mut self.presentation);
            for key in keys {
                if viewer.handle_key(key, self.viewport, &mut stage) == KeyOutcome::Consumed {
                    ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));
                }
            }
        }

        if let Some(pos) = click {
            let inside_menu = self.menu_rect.is_some_and(|r| r.contains(pos));
            let inside_hamburger = self.hamburger_rect.is_some_and(|r| r.contains(pos));
            if self.menu.on_click(inside_menu, inside_hamburger) {
                tracing::debug!("Closed mobile menu on outside click");
            }
        }

        if wheel {
            self.smooth_scroll.cancel();
        }

        let mut actions = Vec::new();
        let holder = EguiStage::new(ctx, &mut self.presentation).fullscreen_element();
        self.viewer_presented = holder == Some(Target::Viewer);

        if self.viewer_presented {
            let bg = self.theme.background;
            egui::CentralPanel::default()
                .frame(egui::Frame::new().fill(bg).inner_margin(24.0))
                .show(ctx, |ui| {
                    self.viewport = ui.max_rect();
                    if let Some(viewer) = self.viewer.as_mut() {
                        let width = ui.available_width();
                        let height = (ui.available_height() - 56.0).max(1.0);
                        draw_viewer(
                            ui,
                            viewer,
                            &self.theme,
                            width,
                            Some(height),
                            self.viewer_presented,
                            &mut actions,
                        );
                    }
                });
        } else {
            self.draw_header(ctx, &mut actions);

            let bg = self.theme.background;
            egui::CentralPanel::default()
                .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
                .show(ctx, |ui| {
                    self.viewport = ui.max_rect();

                    let mut area = egui::ScrollArea::vertical()
                        .id_salt("page")
                        .auto_shrink([false, false])
                        .scroll_source(if self.menu.locks_scroll() {
                            egui::scroll_area::ScrollSource::NONE
                        } else {
                            egui::scroll_area::ScrollSource::ALL
                        });
                    if let Some(offset) = self.smooth_scroll.step(self.scroll_offset) {
                        area = area.vertical_scroll_offset(offset);
                        ctx.request_repaint();
                    }
                    let output = area.show(ui, |ui| self.draw_page(ui, &mut actions));
                    self.scroll_offset = output.state.offset.y;
                });

            if self.handled_offset != Some(self.scroll_offset) {
                if self.scroll_throttle.ready() {
                    self.on_scroll();
                    self.handled_offset = Some(self.scroll_offset);
                } else {
                    ctx.request_repaint_after(self.scroll_throttle.limit());
                }
            }
        }

        let width = self.viewport.width();
        if self.last_width != Some(width) {
            if self.resize_throttle.ready() {
                self.on_resize(width);
                self.last_width = Some(width);
            } else {
                ctx.request_repaint_after(self.resize_throttle.limit());
            }
        }

        for action in actions {
            self.apply(ctx, action);
        }
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let started = Instant::now();
    let config = Config::load_or_default();

    let portfolio = match options.file.as_deref().or(config.content()) {
        Some(path) => content::load(path)
            .with_context(|| format!("Failed to load portfolio from {}", path.display()))?,
        None => content::builtin().context("Built-in portfolio is invalid")?,
    };

    if portfolio.presentation.slides.is_empty() {
        tracing::warn!("Presentation has no slides");
    }

    let theme = Theme::from_name(options.theme.or(config.theme()).unwrap_or("light"));
    let start_slide = options
        .slide
        .or(config.start_slide())
        .map(|s| s.saturating_sub(1))
        .unwrap_or(0);
    let fullscreen = options.fullscreen || config.fullscreen();

    let title = portfolio.title.clone();
    let viewport = if fullscreen {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(&title)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(PortfolioApp::new(
                portfolio,
                theme,
                start_slide,
                started,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PortfolioApp {
        let portfolio = content::builtin().unwrap();
        PortfolioApp::new(portfolio, Theme::light(), 0, Instant::now())
    }

    #[test]
    fn test_pills_list_sections_then_links() {
        let portfolio = content::builtin().unwrap();
        let pills = pills(&portfolio);
        assert_eq!(pills.len(), portfolio.sections.len() + portfolio.links.len());
        assert_eq!(pills[0].1, format!("#{}", portfolio.sections[0].id));
        assert!(pills.last().unwrap().1.starts_with("http"));
    }

    #[test]
    fn test_viewer_built_when_a_section_hosts_it() {
        let app = app();
        let viewer = app.viewer.as_ref().expect("built-in document hosts the deck");
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn test_no_viewer_without_host_section() {
        let mut portfolio = content::builtin().unwrap();
        for section in &mut portfolio.sections {
            section.presentation = false;
        }
        let app = PortfolioApp::new(portfolio, Theme::light(), 0, Instant::now());
        assert!(app.viewer.is_none());
    }

    #[test]
    fn test_start_slide_out_of_range_falls_back() {
        let portfolio = content::builtin().unwrap();
        let count = portfolio.presentation.slides.len();
        let app = PortfolioApp::new(portfolio, Theme::light(), count + 5, Instant::now());
        assert_eq!(app.viewer.as_ref().unwrap().current_index(), 0);

        let portfolio = content::builtin().unwrap();
        let app = PortfolioApp::new(portfolio, Theme::light(), 2, Instant::now());
        assert_eq!(app.viewer.as_ref().unwrap().current_index(), 2);
    }

    #[test]
    fn test_scroll_handler_tracks_sections() {
        let mut app = app();
        app.header_height = 60.0;
        app.viewport = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1280.0, 800.0));
        app.sections = vec![
            SectionSpan::new("profile", 0.0, 900.0),
            SectionSpan::new("career", 900.0, 700.0),
        ];
        let hid = egui::Id::new("career-heading");
        app.fade_targets = vec![(hid, 900.0)];

        app.scroll_offset = 0.0;
        app.on_scroll();
        assert!(app.nav.is_active("profile"));
        assert!(!app.nav.is_scrolled());
        assert!(!app.fade_in.is_visible(hid));

        app.scroll_offset = 800.0;
        app.on_scroll();
        assert!(app.nav.is_active("career"));
        assert!(app.nav.is_scrolled());
        assert!(app.fade_in.is_visible(hid));
    }

    /// One frame of fullscreen bookkeeping. Returns the live holder.
    fn pass(
        ctx: &egui::Context,
        app: &mut PortfolioApp,
        live: Option<bool>,
        action: Option<Action>,
    ) -> Option<Target> {
        let mut raw = egui::RawInput::default();
        raw.viewports
            .entry(egui::ViewportId::ROOT)
            .or_default()
            .fullscreen = live;
        ctx.begin_pass(raw);
        app.presentation.observe(ctx.input(|i| i.viewport().fullscreen));
        if let Some(action) = action {
            app.apply(ctx, action);
        }
        let holder = EguiStage::new(ctx, &mut app.presentation).fullscreen_element();
        let _ = ctx.end_pass();
        holder
    }

    #[test]
    fn test_ignored_fullscreen_toggle_does_not_stick() {
        let mut app = app();
        let ctx = egui::Context::default();

        pass(&ctx, &mut app, Some(false), Some(Action::ToggleFullscreen));
        assert_eq!(app.presentation.target(), Some(Target::Viewer));
        assert!(app.presentation.is_pending());

        for _ in 0..crate::viewer::stage::REQUEST_GRACE_FRAMES {
            pass(&ctx, &mut app, Some(false), None);
        }
        assert_eq!(app.presentation.target(), None);

        // Fullscreen from the window manager now belongs to the page.
        assert_eq!(pass(&ctx, &mut app, Some(true), None), Some(Target::Page));
    }
}
