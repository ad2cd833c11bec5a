//! The whole scrolling page: header, hero and the four content sections,
//! driven from one clock.

use std::time::Duration;

use shared::{
    content::Portfolio,
    domain::{ContactField, ElementId, SectionAnchor},
    error::ControllerError,
};
use tracing::{debug, info};

use crate::{
    carousel::{CarouselNav, Direction},
    config::Settings,
    controller::{ControllerEvent, Section, SectionController},
    header::HeaderState,
    hero::{HeroState, Point, ShapeField, ShapeFrame},
    rotation::RotationTimer,
    submission::{ContactForm, SubmissionLifecycle, SubmitOutcome},
    viewport::{QueuedViewport, ViewportObserver},
};

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Section {
        anchor: SectionAnchor,
        event: ControllerEvent,
    },
    HeaderScrolled(bool),
    HeroIntroRevealed,
}

impl PageEvent {
    fn section(anchor: SectionAnchor, event: ControllerEvent) -> Self {
        PageEvent::Section { anchor, event }
    }
}

/// Canvas dimensions used to scatter the hero shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

pub struct PortfolioPage<V: ViewportObserver = QueuedViewport> {
    viewport: V,
    now: Duration,
    header: HeaderState,
    hero: HeroState,
    hero_mounted: bool,
    sections: Vec<Section>,
}

impl<V: ViewportObserver> PortfolioPage<V> {
    /// Builds every section from `content` and `settings`. Nothing runs until
    /// [`PortfolioPage::mount`].
    pub fn new(
        settings: &Settings,
        content: &Portfolio,
        viewport: V,
        seed: u64,
        canvas: CanvasSize,
    ) -> Result<Self, ControllerError> {
        settings.validate()?;
        let section_threshold = settings.section_threshold()?;
        let item_threshold = settings.item_threshold()?;

        let skills = Section::new(SectionAnchor::Skills)
            .with_reveal(vec![(SectionAnchor::Skills.element_id(), section_threshold)])
            .with(SectionController::Rotation(RotationTimer::new(
                content.skill_categories.len(),
                settings.rotation_interval(),
            )?));

        let projects = Section::new(SectionAnchor::Projects)
            .with_reveal(vec![(
                SectionAnchor::Projects.element_id(),
                section_threshold,
            )])
            .with(SectionController::Carousel(CarouselNav::new(
                content.projects.len(),
                settings.carousel_item_width,
            )?));

        let experience_id = SectionAnchor::Experience.element_id();
        let mut timeline = vec![(experience_id.clone(), section_threshold)];
        timeline.extend(
            (0..content.experiences.len())
                .map(|index| (ElementId::item(&experience_id, index), item_threshold)),
        );
        let experience = Section::new(SectionAnchor::Experience).with_reveal(timeline);

        let contact = Section::new(SectionAnchor::Contact).with(SectionController::Submission(
            SubmissionLifecycle::new(
                settings.submission_pending_delay(),
                settings.submission_reset_delay(),
            ),
        ));

        let shapes = ShapeField::seeded(
            seed,
            settings.hero_shape_count,
            canvas.width,
            canvas.height,
        );

        Ok(Self {
            viewport,
            now: Duration::ZERO,
            header: HeaderState::new(settings.header_scroll_threshold),
            hero: HeroState::new(shapes, settings.hero_intro_delay()),
            hero_mounted: false,
            sections: vec![skills, projects, experience, contact],
        })
    }

    /// Mounts every section at `now`, starting timers and visibility tracking.
    pub fn mount(&mut self, now: Duration) -> Vec<PageEvent> {
        self.now = self.now.max(now);
        info!(
            hero_shapes = self.hero.shapes().shapes().len(),
            sections = self.sections.len(),
            "page: mounting"
        );
        if !self.hero_mounted {
            self.hero.mount(self.now);
            self.hero_mounted = true;
        }
        let mut events = Vec::new();
        for section in &mut self.sections {
            let anchor = section.anchor();
            events.extend(
                section
                    .mount(self.now, &mut self.viewport)
                    .into_iter()
                    .map(|event| PageEvent::section(anchor, event)),
            );
        }
        events.extend(self.pump_viewport());
        events
    }

    /// Tears down one section. Its state stays readable but never changes again
    /// until it is mounted anew.
    pub fn unmount_section(&mut self, anchor: SectionAnchor) {
        if anchor == SectionAnchor::Home {
            self.hero.teardown();
            self.hero_mounted = false;
            info!(section = %anchor, "section: unmounted");
            return;
        }
        if let Some(section) = self.sections.iter_mut().find(|s| s.anchor() == anchor) {
            section.unmount(&mut self.viewport);
        }
    }

    pub fn unmount_all(&mut self) {
        for anchor in SectionAnchor::ALL {
            self.unmount_section(anchor);
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        let hero = self
            .hero_mounted
            .then(|| self.hero.next_deadline())
            .flatten();
        self.sections
            .iter()
            .filter_map(Section::next_deadline)
            .chain(hero)
            .min()
    }

    /// Moves the page clock forward to `now`, firing every deadline on the way
    /// in chronological order, then delivers pending viewport reports. The
    /// clock never moves backwards.
    pub fn advance_to(&mut self, now: Duration) -> Vec<PageEvent> {
        let target = now.max(self.now);
        let mut events = Vec::new();

        while let Some(deadline) = self.next_deadline().filter(|deadline| *deadline <= target) {
            self.now = self.now.max(deadline);
            if self.hero_mounted && self.hero.fire_due(deadline) {
                events.push(PageEvent::HeroIntroRevealed);
            }
            for section in &mut self.sections {
                let anchor = section.anchor();
                events.extend(
                    section
                        .fire_due(deadline)
                        .into_iter()
                        .map(|event| PageEvent::section(anchor, event)),
                );
            }
        }

        self.now = target;
        events.extend(self.pump_viewport());
        events
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<PageEvent> {
        self.advance_to(self.now + delta)
    }

    /// Delivers queued intersection reports to the sections.
    pub fn pump_viewport(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        for entry in self.viewport.drain_entries() {
            for section in &mut self.sections {
                let anchor = section.anchor();
                events.extend(
                    section
                        .on_intersection(&entry)
                        .into_iter()
                        .map(|event| PageEvent::section(anchor, event)),
                );
            }
        }
        events
    }

    fn mounted_section_mut(&mut self, anchor: SectionAnchor) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.anchor() == anchor && section.is_mounted())
    }

    /// Manual skill-category pick. A no-op once the skills section is gone.
    pub fn select_category(&mut self, index: usize) -> Result<Vec<PageEvent>, ControllerError> {
        let Some(timer) = self
            .mounted_section_mut(SectionAnchor::Skills)
            .and_then(Section::rotation_mut)
        else {
            return Ok(Vec::new());
        };
        timer.select(index)?;
        Ok(vec![PageEvent::section(
            SectionAnchor::Skills,
            ControllerEvent::Selected {
                active_index: index,
            },
        )])
    }

    fn with_carousel(
        &mut self,
        apply: impl FnOnce(&mut CarouselNav) -> Result<(), ControllerError>,
    ) -> Result<Vec<PageEvent>, ControllerError> {
        let Some(carousel) = self
            .mounted_section_mut(SectionAnchor::Projects)
            .and_then(Section::carousel_mut)
        else {
            return Ok(Vec::new());
        };
        apply(carousel)?;
        Ok(vec![PageEvent::section(
            SectionAnchor::Projects,
            ControllerEvent::CarouselMoved {
                current_index: carousel.current_index(),
                scroll_offset: carousel.scroll_offset(),
            },
        )])
    }

    pub fn carousel_step(&mut self, direction: Direction) -> Vec<PageEvent> {
        self.with_carousel(|carousel| {
            carousel.step(direction);
            Ok(())
        })
        .unwrap_or_default()
    }

    pub fn carousel_jump(&mut self, index: usize) -> Result<Vec<PageEvent>, ControllerError> {
        self.with_carousel(|carousel| carousel.jump_to(index))
    }

    /// Reports a scroll offset reached by dragging or swiping.
    pub fn carousel_scroll_to(&mut self, offset: f64) -> Vec<PageEvent> {
        self.with_carousel(|carousel| {
            carousel.scroll_to(offset);
            Ok(())
        })
        .unwrap_or_default()
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        if let Some(lifecycle) = self
            .mounted_section_mut(SectionAnchor::Contact)
            .and_then(Section::submission_mut)
        {
            lifecycle.set_field(field, value);
        }
    }

    pub fn focus_contact_field(&mut self, field: Option<ContactField>) {
        if let Some(lifecycle) = self
            .mounted_section_mut(SectionAnchor::Contact)
            .and_then(Section::submission_mut)
        {
            match field {
                Some(field) => lifecycle.focus(field),
                None => lifecycle.blur(),
            }
        }
    }

    /// Submits `payload`, or the form as currently typed when `None`.
    pub fn submit_contact(
        &mut self,
        payload: Option<ContactForm>,
    ) -> (SubmitOutcome, Vec<PageEvent>) {
        let now = self.now;
        let Some(lifecycle) = self
            .mounted_section_mut(SectionAnchor::Contact)
            .and_then(Section::submission_mut)
        else {
            return (SubmitOutcome::Ignored, Vec::new());
        };
        let outcome = match payload {
            Some(payload) => lifecycle.submit(now, payload),
            None => lifecycle.submit_current(now),
        };
        let events = match outcome {
            SubmitOutcome::Accepted => vec![PageEvent::section(
                SectionAnchor::Contact,
                ControllerEvent::Submission(lifecycle.state()),
            )],
            SubmitOutcome::Ignored => Vec::new(),
        };
        (outcome, events)
    }

    pub fn on_scroll(&mut self, scroll_y: f32) -> Vec<PageEvent> {
        if self.header.on_scroll(scroll_y) {
            vec![PageEvent::HeaderScrolled(self.header.is_scrolled())]
        } else {
            Vec::new()
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.header.toggle_menu()
    }

    pub fn navigate(&mut self, anchor: SectionAnchor) -> &'static str {
        debug!(section = %anchor, "page: navigate");
        self.header.navigate(anchor)
    }

    /// Advances the hero animation one frame and returns what to draw.
    pub fn hero_frame(&mut self, cursor: Option<Point>) -> Vec<ShapeFrame> {
        if self.hero_mounted {
            self.hero.shapes_mut().step();
        }
        self.hero.shapes().frame(cursor)
    }

    pub fn resize_canvas(&mut self, canvas: CanvasSize) {
        self.hero.shapes_mut().resize(canvas.width, canvas.height);
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn hero(&self) -> &HeroState {
        &self.hero
    }

    pub fn section(&self, anchor: SectionAnchor) -> Option<&Section> {
        self.sections.iter().find(|section| section.anchor() == anchor)
    }

    pub fn active_category(&self) -> Option<usize> {
        self.section(SectionAnchor::Skills)
            .and_then(Section::rotation)
            .map(RotationTimer::active_index)
    }

    pub fn carousel(&self) -> Option<&CarouselNav> {
        self.section(SectionAnchor::Projects)
            .and_then(Section::carousel)
    }

    pub fn submission(&self) -> Option<&SubmissionLifecycle> {
        self.section(SectionAnchor::Contact)
            .and_then(Section::submission)
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.sections.iter().any(|section| {
            section
                .reveal()
                .is_some_and(|tracker| tracker.is_revealed(element))
        })
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

impl PortfolioPage<QueuedViewport> {
    /// Feeds a measured visibility ratio and delivers it straight away.
    pub fn report_visibility(&mut self, element: &ElementId, ratio: f32) -> Vec<PageEvent> {
        self.viewport.report(element, ratio);
        self.pump_viewport()
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
