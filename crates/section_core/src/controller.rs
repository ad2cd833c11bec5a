//! The one controller shape shared by every page section, and the section
//! that owns a set of them.

use std::time::Duration;

use shared::domain::{ElementId, SectionAnchor, SubmissionState};
use tracing::info;

use crate::{
    carousel::CarouselNav,
    reveal::RevealTracker,
    rotation::RotationTimer,
    submission::SubmissionLifecycle,
    viewport::{IntersectionEntry, ViewportObserver, VisibilityThreshold},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    Reveal,
    Rotation,
    Carousel,
    Submission,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    Revealed(ElementId),
    /// Automatic rotation tick.
    Rotated { active_index: usize },
    /// Manual selection.
    Selected { active_index: usize },
    CarouselMoved {
        current_index: usize,
        scroll_offset: f64,
    },
    Submission(SubmissionState),
}

#[derive(Debug)]
pub enum SectionController {
    Reveal(RevealTracker),
    Rotation(RotationTimer),
    Carousel(CarouselNav),
    Submission(SubmissionLifecycle),
}

impl SectionController {
    pub fn kind(&self) -> ControllerKind {
        match self {
            SectionController::Reveal(_) => ControllerKind::Reveal,
            SectionController::Rotation(_) => ControllerKind::Rotation,
            SectionController::Carousel(_) => ControllerKind::Carousel,
            SectionController::Submission(_) => ControllerKind::Submission,
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        match self {
            SectionController::Rotation(timer) => timer.next_deadline(),
            SectionController::Submission(lifecycle) => lifecycle.next_deadline(),
            SectionController::Reveal(_) | SectionController::Carousel(_) => None,
        }
    }

    pub fn fire_due(&mut self, now: Duration) -> Option<ControllerEvent> {
        match self {
            SectionController::Rotation(timer) => timer
                .fire_due(now)
                .map(|active_index| ControllerEvent::Rotated { active_index }),
            SectionController::Submission(lifecycle) => {
                lifecycle.fire_due(now).map(ControllerEvent::Submission)
            }
            SectionController::Reveal(_) | SectionController::Carousel(_) => None,
        }
    }

    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> Option<ControllerEvent> {
        match self {
            SectionController::Reveal(tracker) => {
                tracker.on_intersection(entry).map(ControllerEvent::Revealed)
            }
            _ => None,
        }
    }

    /// Releases everything that could keep mutating this controller.
    pub fn teardown(&mut self, viewport: &mut dyn ViewportObserver) {
        match self {
            SectionController::Reveal(tracker) => tracker.teardown(viewport),
            SectionController::Rotation(timer) => timer.stop(),
            SectionController::Submission(lifecycle) => lifecycle.cancel(),
            SectionController::Carousel(_) => {}
        }
    }
}

#[derive(Debug)]
pub struct Section {
    anchor: SectionAnchor,
    watched: Vec<(ElementId, VisibilityThreshold)>,
    controllers: Vec<SectionController>,
    mounted: bool,
}

impl Section {
    pub fn new(anchor: SectionAnchor) -> Self {
        Self {
            anchor,
            watched: Vec::new(),
            controllers: Vec::new(),
            mounted: false,
        }
    }

    /// Adds a reveal controller watching `elements`.
    pub fn with_reveal(mut self, elements: Vec<(ElementId, VisibilityThreshold)>) -> Self {
        self.watched = elements;
        self.controllers
            .push(SectionController::Reveal(RevealTracker::new()));
        self
    }

    pub fn with(mut self, controller: SectionController) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Starts timers and visibility tracking. Elements revealed on the spot
    /// (no viewport adapter) come back as events.
    pub fn mount(
        &mut self,
        now: Duration,
        viewport: &mut dyn ViewportObserver,
    ) -> Vec<ControllerEvent> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        info!(
            section = %self.anchor,
            controllers = self.controllers.len(),
            "section: mounted"
        );

        let mut events = Vec::new();
        for controller in &mut self.controllers {
            match controller {
                SectionController::Reveal(tracker) => {
                    tracker.resume();
                    for (element, threshold) in &self.watched {
                        let revealed = tracker.observe(viewport, element.clone(), *threshold);
                        if let Some(revealed) = revealed {
                            events.push(ControllerEvent::Revealed(revealed));
                        }
                    }
                }
                SectionController::Rotation(timer) => timer.start(now),
                SectionController::Submission(lifecycle) => lifecycle.reset(),
                SectionController::Carousel(_) => {}
            }
        }
        events
    }

    pub fn unmount(&mut self, viewport: &mut dyn ViewportObserver) {
        if !self.mounted {
            return;
        }
        for controller in &mut self.controllers {
            controller.teardown(viewport);
        }
        self.mounted = false;
        info!(section = %self.anchor, "section: unmounted");
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        if !self.mounted {
            return None;
        }
        self.controllers
            .iter()
            .filter_map(SectionController::next_deadline)
            .min()
    }

    pub fn fire_due(&mut self, now: Duration) -> Vec<ControllerEvent> {
        if !self.mounted {
            return Vec::new();
        }
        self.controllers
            .iter_mut()
            .filter_map(|controller| controller.fire_due(now))
            .collect()
    }

    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> Vec<ControllerEvent> {
        if !self.mounted {
            return Vec::new();
        }
        self.controllers
            .iter_mut()
            .filter_map(|controller| controller.on_intersection(entry))
            .collect()
    }

    pub fn anchor(&self) -> SectionAnchor {
        self.anchor
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn controller_kinds(&self) -> Vec<ControllerKind> {
        self.controllers.iter().map(SectionController::kind).collect()
    }

    pub fn reveal(&self) -> Option<&RevealTracker> {
        self.controllers.iter().find_map(|controller| match controller {
            SectionController::Reveal(tracker) => Some(tracker),
            _ => None,
        })
    }

    pub fn rotation(&self) -> Option<&RotationTimer> {
        self.controllers.iter().find_map(|controller| match controller {
            SectionController::Rotation(timer) => Some(timer),
            _ => None,
        })
    }

    pub fn carousel(&self) -> Option<&CarouselNav> {
        self.controllers.iter().find_map(|controller| match controller {
            SectionController::Carousel(carousel) => Some(carousel),
            _ => None,
        })
    }

    pub fn submission(&self) -> Option<&SubmissionLifecycle> {
        self.controllers.iter().find_map(|controller| match controller {
            SectionController::Submission(lifecycle) => Some(lifecycle),
            _ => None,
        })
    }

    pub(crate) fn rotation_mut(&mut self) -> Option<&mut RotationTimer> {
        self.controllers
            .iter_mut()
            .find_map(|controller| match controller {
                SectionController::Rotation(timer) => Some(timer),
                _ => None,
            })
    }

    pub(crate) fn carousel_mut(&mut self) -> Option<&mut CarouselNav> {
        self.controllers
            .iter_mut()
            .find_map(|controller| match controller {
                SectionController::Carousel(carousel) => Some(carousel),
                _ => None,
            })
    }

    pub(crate) fn submission_mut(&mut self) -> Option<&mut SubmissionLifecycle> {
        self.controllers
            .iter_mut()
            .find_map(|controller| match controller {
                SectionController::Submission(lifecycle) => Some(lifecycle),
                _ => None,
            })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
