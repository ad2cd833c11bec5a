use std::time::{Duration, Instant};

use chrono::Local;
use eframe::egui;
use section_core::{
    CanvasSize, ControllerEvent, PageEvent, Point, PortfolioPage, QueuedViewport, Settings,
};
use shared::{
    content::{nav_items, Portfolio},
    domain::{SectionAnchor, ShapeKind},
    error::ControllerError,
};

use crate::controller::{
    events::{UiError, UiEvent},
    orchestration::dispatch_ui_event,
};
use crate::ui::sections::{visible_ratio, PageView, ACCENT, HERO_HEIGHT};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const NARROW_LAYOUT: f32 = 768.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub settings: Settings,
    pub seed: u64,
}

pub struct PortfolioApp {
    page: PortfolioPage,
    content: Portfolio,
    started: Instant,
    status: Option<UiError>,
    scroll_target: Option<SectionAnchor>,
    carousel_sync: Option<f64>,
    hero_rect: Option<egui::Rect>,
    year: String,
}

impl PortfolioApp {
    pub fn new(startup: StartupConfig) -> Result<Self, ControllerError> {
        let content = Portfolio::default();
        let canvas = CanvasSize {
            width: 1280.0,
            height: HERO_HEIGHT,
        };
        let mut page = PortfolioPage::new(
            &startup.settings,
            &content,
            QueuedViewport::new(),
            startup.seed,
            canvas,
        )?;
        page.mount(Duration::ZERO);

        let triangles = page
            .hero()
            .shapes()
            .shapes()
            .iter()
            .filter(|shape| shape.kind == ShapeKind::Triangle)
            .count();
        tracing::debug!(triangles, "hero: shape field ready");

        Ok(Self {
            page,
            content,
            started: Instant::now(),
            status: None,
            scroll_target: None,
            carousel_sync: None,
            hero_rect: None,
            year: Local::now().format("%Y").to_string(),
        })
    }

    fn log_page_events(&mut self, events: &[PageEvent]) {
        for event in events {
            match event {
                PageEvent::Section {
                    event: ControllerEvent::CarouselMoved { scroll_offset, .. },
                    ..
                } => {
                    self.carousel_sync = Some(*scroll_offset);
                }
                PageEvent::Section { anchor, event } => {
                    tracing::debug!(section = %anchor, ?event, "page event");
                }
                PageEvent::HeaderScrolled(scrolled) => {
                    tracing::debug!(scrolled, "header: style changed");
                }
                PageEvent::HeroIntroRevealed => {
                    tracing::debug!("hero: intro shown");
                }
            }
        }
    }

    fn hero_cursor(&mut self, ctx: &egui::Context) -> Option<Point> {
        let rect = self.hero_rect?;
        let (width, height) = self.page.hero().shapes().size();
        if (rect.width() - width).abs() > 1.0 || (rect.height() - height).abs() > 1.0 {
            self.page.resize_canvas(CanvasSize {
                width: rect.width(),
                height: rect.height(),
            });
        }
        let pointer = ctx.input(|i| i.pointer.hover_pos())?;
        rect.contains(pointer)
            .then(|| Point::new(pointer.x - rect.min.x, pointer.y - rect.min.y))
    }

    fn header(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let header = self.page.header();
        let fill = if header.is_scrolled() {
            egui::Color32::from_rgba_unmultiplied(15, 23, 42, 240)
        } else {
            egui::Color32::from_rgb(15, 23, 42)
        };
        let mut frame = egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(24, 12));
        if header.is_scrolled() {
            frame = frame.stroke(egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.4)));
        }

        egui::TopBottomPanel::top("portfolio_header")
            .frame(frame)
            .show(ctx, |ui| {
                let narrow = ui.available_width() < NARROW_LAYOUT;
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.content.profile.name)
                            .size(20.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if narrow {
                            let icon = if header.is_menu_open() { "✕" } else { "☰" };
                            if ui.button(icon).clicked() {
                                events.push(UiEvent::ToggleMenu);
                            }
                        } else {
                            for item in nav_items().iter().rev() {
                                if ui.button(&item.label).clicked() {
                                    events.push(UiEvent::Navigate(item.anchor));
                                }
                            }
                        }
                    });
                });
                if narrow && header.is_menu_open() {
                    ui.add_space(8.0);
                    for item in nav_items() {
                        if ui.button(&item.label).clicked() {
                            events.push(UiEvent::Navigate(item.anchor));
                        }
                    }
                }
                if let Some(status) = &self.status {
                    ui.label(
                        egui::RichText::new(status.message())
                            .color(egui::Color32::from_rgb(248, 113, 113)),
                    );
                }
            });
    }

    fn apply(&mut self, events: Vec<UiEvent>) {
        for event in events {
            let dispatched = dispatch_ui_event(&mut self.page, event, &mut self.status);
            if let Some(fragment) = dispatched.scroll_to {
                self.scroll_target = SectionAnchor::from_fragment(fragment);
            }
            self.log_page_events(&dispatched.page_events);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let ticked = self.page.advance_to(self.started.elapsed());
        self.log_page_events(&ticked);

        let cursor = self.hero_cursor(ctx);
        let frames = self.page.hero_frame(cursor);

        let mut events = Vec::new();
        self.header(ctx, &mut events);

        let scroll_target = self.scroll_target.take();
        let carousel_sync = self.carousel_sync.take();
        let mut view = PageView::new(&self.page, &self.content, scroll_target);

        let output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(15, 23, 42)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("portfolio_page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        view.hero(ui, &frames);
                        egui::Frame::new()
                            .inner_margin(egui::Margin::symmetric(48, 0))
                            .show(ui, |ui| {
                                view.skills(ui);
                                view.projects(ui, carousel_sync);
                                view.experience(ui);
                                view.contact(ui);
                                view.footer(ui, &self.year);
                            });
                    })
            })
            .inner;

        let PageView {
            events: view_events,
            tracked,
            hero_rect,
            ..
        } = view;
        events.extend(view_events);
        self.hero_rect = hero_rect;

        let scrolled = self.page.on_scroll(output.state.offset.y);
        self.log_page_events(&scrolled);
        for (element, rect) in tracked {
            let ratio = visible_ratio(rect, output.inner_rect);
            let revealed = self.page.report_visibility(&element, ratio);
            self.log_page_events(&revealed);
        }

        self.apply(events);
        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.page.unmount_all();
        tracing::info!("portfolio: page unmounted");
    }
}
