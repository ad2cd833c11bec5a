//! Per-section views. Views only read the page; every interaction is queued as
//! a [`UiEvent`] and applied after the frame is laid out.

use eframe::egui;
use section_core::{Direction, PortfolioPage, ShapeFrame};
use shared::{
    content::{ExperienceKind, Portfolio},
    domain::{ContactField, ElementId, Rgb, SectionAnchor, SubmissionState},
};

use crate::controller::events::UiEvent;

pub const HERO_HEIGHT: f32 = 560.0;
const PLACEHOLDER_HEIGHT: f32 = 240.0;
const CARD_GAP: f32 = 20.0;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(6, 182, 212);
const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);

pub fn rgba(color: Rgb, opacity: f32) -> egui::Color32 {
    let Rgb(r, g, b) = color;
    egui::Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Fraction of `rect` that lies inside `clip`, in `[0, 1]`.
pub fn visible_ratio(rect: egui::Rect, clip: egui::Rect) -> f32 {
    let area = rect.area();
    if !rect.is_positive() || area <= 0.0 {
        return 0.0;
    }
    let overlap = rect.intersect(clip);
    if !overlap.is_positive() {
        return 0.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(ACCENT.gamma_multiply(0.15))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(ACCENT));
        });
}

pub struct PageView<'a> {
    page: &'a PortfolioPage,
    content: &'a Portfolio,
    scroll_target: Option<SectionAnchor>,
    pub events: Vec<UiEvent>,
    /// Tracked element rects in screen space, measured this frame.
    pub tracked: Vec<(ElementId, egui::Rect)>,
    pub hero_rect: Option<egui::Rect>,
}

impl<'a> PageView<'a> {
    pub fn new(
        page: &'a PortfolioPage,
        content: &'a Portfolio,
        scroll_target: Option<SectionAnchor>,
    ) -> Self {
        Self {
            page,
            content,
            scroll_target,
            events: Vec::new(),
            tracked: Vec::new(),
            hero_rect: None,
        }
    }

    fn section(
        &mut self,
        ui: &mut egui::Ui,
        anchor: SectionAnchor,
        add: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let rect = ui
            .scope(|ui| {
                ui.add_space(48.0);
                ui.label(
                    egui::RichText::new(anchor.label())
                        .size(30.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(16.0);
                add(self, ui);
                ui.add_space(48.0);
            })
            .response
            .rect;
        if anchor != SectionAnchor::Contact {
            self.tracked.push((anchor.element_id(), rect));
        }
        if self.scroll_target == Some(anchor) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
        }
    }

    fn revealed(&self, anchor: SectionAnchor) -> bool {
        self.page.is_revealed(&anchor.element_id())
    }

    pub fn hero(&mut self, ui: &mut egui::Ui, frames: &[ShapeFrame]) {
        let size = egui::vec2(ui.available_width(), HERO_HEIGHT);
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_rgb(15, 23, 42));
        for frame in frames {
            let points = frame
                .vertices
                .iter()
                .map(|p| rect.min + egui::vec2(p.x, p.y))
                .collect();
            painter.add(egui::Shape::convex_polygon(
                points,
                rgba(frame.color, frame.fill_opacity),
                egui::Stroke::new(1.0, rgba(frame.color, frame.stroke_opacity)),
            ));
        }
        self.hero_rect = Some(rect);

        if self.scroll_target == Some(SectionAnchor::Home) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
        }
        if !self.page.hero().is_intro_revealed() {
            return;
        }

        let profile = &self.content.profile;
        let intro = egui::Rect::from_center_size(rect.center(), egui::vec2(720.0, 260.0));
        let mut child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(intro)
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        child.label(
            egui::RichText::new(&profile.name)
                .size(48.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
        child.label(egui::RichText::new(&profile.headline).size(22.0).color(ACCENT));
        child.add_space(8.0);
        child.label(egui::RichText::new(&profile.about).color(MUTED));
        child.add_space(16.0);
        child.horizontal(|ui| {
            if ui.button("View Projects").clicked() {
                self.events.push(UiEvent::Navigate(SectionAnchor::Projects));
            }
            if ui.button("Get in Touch").clicked() {
                self.events.push(UiEvent::Navigate(SectionAnchor::Contact));
            }
        });
    }

    pub fn skills(&mut self, ui: &mut egui::Ui) {
        self.section(ui, SectionAnchor::Skills, |view, ui| {
            if !view.revealed(SectionAnchor::Skills) {
                ui.allocate_space(egui::vec2(ui.available_width(), PLACEHOLDER_HEIGHT));
                return;
            }
            let active = view.page.active_category().unwrap_or(0);
            ui.horizontal_wrapped(|ui| {
                for (index, category) in view.content.skill_categories.iter().enumerate() {
                    if ui
                        .selectable_label(index == active, &category.title)
                        .clicked()
                    {
                        view.events.push(UiEvent::SelectCategory(index));
                    }
                }
            });
            ui.add_space(12.0);

            let Some(category) = view.content.skill_categories.get(active) else {
                return;
            };
            ui.horizontal(|ui| {
                card_frame().show(ui, |ui| {
                    ui.set_width(420.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "{} · average {}%",
                            category.title,
                            category.average_level()
                        ))
                        .strong(),
                    );
                    ui.add_space(8.0);
                    for skill in &category.skills {
                        ui.label(&skill.name);
                        ui.add(
                            egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                                .desired_width(380.0)
                                .text(format!("{}%", skill.level)),
                        );
                        if !skill.frameworks.is_empty() {
                            ui.horizontal_wrapped(|ui| {
                                for framework in &skill.frameworks {
                                    chip(ui, framework);
                                }
                            });
                        }
                        ui.add_space(6.0);
                    }
                });

                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(300.0, 300.0), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                let center = rect.center();
                for ring in [40.0, 80.0, 120.0] {
                    painter.circle_stroke(center, ring, egui::Stroke::new(1.0, CARD_STROKE));
                }
                painter.circle_filled(center, 6.0, ACCENT);
                for (skill, position) in category.skills.iter().zip(category.orbit_positions()) {
                    let at = center + egui::vec2(position.x, position.y);
                    painter.line_segment(
                        [center, at],
                        egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.3)),
                    );
                    painter.circle_filled(at, 5.0, ACCENT);
                    painter.text(
                        at + egui::vec2(0.0, -12.0),
                        egui::Align2::CENTER_BOTTOM,
                        &skill.name,
                        egui::FontId::proportional(11.0),
                        MUTED,
                    );
                }
            });
        });
    }

    /// `sync_offset` forces the strip to a button-driven offset this frame.
    pub fn projects(&mut self, ui: &mut egui::Ui, sync_offset: Option<f64>) {
        self.section(ui, SectionAnchor::Projects, |view, ui| {
            if !view.revealed(SectionAnchor::Projects) {
                ui.allocate_space(egui::vec2(ui.available_width(), PLACEHOLDER_HEIGHT));
                return;
            }
            let Some(carousel) = view.page.carousel() else {
                return;
            };
            let item_width = carousel.item_width() as f32;
            let viewport_width = ui.available_width();

            let mut area = egui::ScrollArea::horizontal()
                .id_salt("projects_carousel")
                .max_width(viewport_width);
            if let Some(offset) = sync_offset {
                area = area.horizontal_scroll_offset(offset as f32);
            }
            let output = area.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = CARD_GAP;
                    for project in &view.content.projects {
                        card_frame().show(ui, |ui| {
                            ui.set_width(item_width - CARD_GAP - 32.0);
                            ui.set_min_height(320.0);
                            ui.vertical(|ui| {
                                let title = format!("{}  {}", project.icon, project.title);
                                ui.label(egui::RichText::new(title).size(18.0).strong());
                                if project.featured {
                                    chip(ui, "Featured");
                                }
                                ui.add_space(6.0);
                                ui.label(egui::RichText::new(&project.description).color(MUTED));
                                ui.add_space(6.0);
                                ui.horizontal(|ui| {
                                    for metric in &project.metrics {
                                        ui.vertical(|ui| {
                                            ui.label(
                                                egui::RichText::new(&metric.value)
                                                    .strong()
                                                    .color(ACCENT),
                                            );
                                            ui.label(egui::RichText::new(&metric.label).size(11.0));
                                        });
                                    }
                                });
                                for highlight in &project.highlights {
                                    ui.label(format!("• {highlight}"));
                                }
                                ui.horizontal_wrapped(|ui| {
                                    for tech in &project.tech_stack {
                                        chip(ui, tech);
                                    }
                                });
                            });
                        });
                    }
                    // Lets the last card scroll fully to the left edge.
                    let tail = viewport_width - item_width;
                    if tail > 0.0 {
                        ui.add_space(tail);
                    }
                });
            });

            let offset = f64::from(output.state.offset.x);
            if sync_offset.is_none() && (offset - carousel.scroll_offset()).abs() > 0.5 {
                view.events.push(UiEvent::CarouselScrolled(offset));
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(carousel.can_go(Direction::Previous), egui::Button::new("‹"))
                    .clicked()
                {
                    view.events.push(UiEvent::CarouselStep(Direction::Previous));
                }
                for index in 0..carousel.item_count() {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
                    let color = if index == carousel.current_index() {
                        ACCENT
                    } else {
                        CARD_STROKE
                    };
                    ui.painter().circle_filled(rect.center(), 5.0, color);
                    if response.clicked() {
                        view.events.push(UiEvent::CarouselJump(index));
                    }
                }
                if ui
                    .add_enabled(carousel.can_go(Direction::Next), egui::Button::new("›"))
                    .clicked()
                {
                    view.events.push(UiEvent::CarouselStep(Direction::Next));
                }
            });
        });
    }

    pub fn experience(&mut self, ui: &mut egui::Ui) {
        self.section(ui, SectionAnchor::Experience, |view, ui| {
            let section_id = SectionAnchor::Experience.element_id();
            for (index, experience) in view.content.experiences.iter().enumerate() {
                let item_id = ElementId::item(&section_id, index);
                let revealed = view.page.is_revealed(&item_id);
                let rect = ui
                    .scope(|ui| {
                        if !revealed {
                            ui.allocate_space(egui::vec2(ui.available_width(), 140.0));
                            return;
                        }
                        card_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            let kind = match experience.kind {
                                ExperienceKind::Work => "Work",
                                ExperienceKind::Education => "Education",
                            };
                            ui.horizontal(|ui| {
                                chip(ui, kind);
                                if experience.is_current {
                                    chip(ui, "Current");
                                }
                                if experience.is_freelance {
                                    chip(ui, "Freelance");
                                }
                            });
                            ui.label(egui::RichText::new(&experience.title).size(18.0).strong());
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} · {} · {}",
                                    experience.organization, experience.period, experience.location
                                ))
                                .color(MUTED),
                            );
                            ui.add_space(6.0);
                            ui.label(&experience.description);
                            for achievement in &experience.achievements {
                                ui.label(format!("• {achievement}"));
                            }
                            ui.horizontal_wrapped(|ui| {
                                for tech in &experience.technologies {
                                    chip(ui, tech);
                                }
                            });
                        });
                    })
                    .response
                    .rect;
                view.tracked.push((item_id, rect));
                ui.add_space(16.0);
            }
        });
    }

    pub fn contact(&mut self, ui: &mut egui::Ui) {
        self.section(ui, SectionAnchor::Contact, |view, ui| {
            let Some(lifecycle) = view.page.submission() else {
                return;
            };
            let state = lifecycle.state();
            let profile = &view.content.profile;

            ui.horizontal_top(|ui| {
                card_frame().show(ui, |ui| {
                    ui.set_width(300.0);
                    ui.label(egui::RichText::new("Let's talk").size(18.0).strong());
                    ui.label(egui::RichText::new(&profile.email).color(ACCENT));
                    ui.label(&profile.phone_display);
                    ui.add_space(8.0);
                    for link in &view.content.social_links {
                        ui.hyperlink_to(&link.name, &link.url);
                    }
                });

                card_frame().show(ui, |ui| {
                    ui.set_width(460.0);
                    let form = lifecycle.form();
                    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
                        let label = match field {
                            ContactField::Name => "Name",
                            ContactField::Email => "Email",
                            ContactField::Message => "Message",
                        };
                        let focused = lifecycle.focused() == Some(field);
                        ui.label(egui::RichText::new(label).color(if focused {
                            ACCENT
                        } else {
                            MUTED
                        }));
                        let mut value = form.field(field).to_string();
                        let edit = if field == ContactField::Message {
                            egui::TextEdit::multiline(&mut value).desired_rows(5)
                        } else {
                            egui::TextEdit::singleline(&mut value)
                        };
                        let response = ui.add_enabled(
                            state == SubmissionState::Idle,
                            edit.desired_width(f32::INFINITY),
                        );
                        if response.changed() {
                            view.events
                                .push(UiEvent::ContactFieldChanged { field, value });
                        }
                        if response.gained_focus() {
                            view.events.push(UiEvent::ContactFocus(Some(field)));
                        }
                        if response.lost_focus() {
                            view.events.push(UiEvent::ContactFocus(None));
                        }
                        ui.add_space(6.0);
                    }

                    let caption = match state {
                        SubmissionState::Idle => "Send Message",
                        SubmissionState::Pending => "Sending...",
                        SubmissionState::Succeeded => "Message Sent!",
                    };
                    if ui
                        .add_enabled(state == SubmissionState::Idle, egui::Button::new(caption))
                        .clicked()
                    {
                        view.events.push(UiEvent::SubmitContact);
                    }
                    if state == SubmissionState::Succeeded {
                        ui.label(
                            egui::RichText::new("Thanks! I'll get back to you soon.")
                                .color(egui::Color32::from_rgb(34, 197, 94)),
                        );
                    }
                });
            });
        });
    }

    pub fn footer(&mut self, ui: &mut egui::Ui, year: &str) {
        ui.separator();
        ui.horizontal(|ui| {
            let notice = format!("© {year} {}", self.content.profile.name);
            ui.label(egui::RichText::new(notice).color(MUTED));
            for link in &self.content.social_links {
                ui.hyperlink_to(&link.name, &link.url);
            }
        });
        ui.add_space(24.0);
    }
}
