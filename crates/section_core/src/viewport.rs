//! Seam between page controllers and whatever reports element visibility.

use std::collections::{HashMap, VecDeque};

use shared::{domain::ElementId, error::ControllerError};

/// Fraction of an element's area that must be inside the viewport before it
/// counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    pub const SECTION: VisibilityThreshold = VisibilityThreshold(0.3);
    pub const ITEM: VisibilityThreshold = VisibilityThreshold(0.6);

    pub fn new(fraction: f32) -> Result<Self, ControllerError> {
        if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(ControllerError::invalid_setting(
                "threshold",
                format!("{fraction} is not in (0, 1]"),
            ))
        }
    }

    pub fn fraction(self) -> f32 {
        self.0
    }

    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio >= self.0
    }
}

/// Intersection change delivered by an adapter after the fact.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    pub ratio: f32,
}

pub trait ViewportObserver {
    fn observe(
        &mut self,
        element: &ElementId,
        threshold: VisibilityThreshold,
    ) -> Result<(), ControllerError>;

    fn unobserve(&mut self, element: &ElementId);

    /// Takes every entry queued since the previous call, oldest first.
    fn drain_entries(&mut self) -> Vec<IntersectionEntry>;
}

/// Adapter fed by the host with measured visibility ratios. Reports for
/// elements that are not observed are dropped.
#[derive(Debug, Default)]
pub struct QueuedViewport {
    observed: HashMap<ElementId, VisibilityThreshold>,
    pending: VecDeque<IntersectionEntry>,
}

impl QueuedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, element: &ElementId, ratio: f32) {
        if !self.observed.contains_key(element) {
            return;
        }
        self.pending.push_back(IntersectionEntry {
            element: element.clone(),
            ratio: ratio.clamp(0.0, 1.0),
        });
    }

    pub fn is_observing(&self, element: &ElementId) -> bool {
        self.observed.contains_key(element)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

impl ViewportObserver for QueuedViewport {
    fn observe(
        &mut self,
        element: &ElementId,
        threshold: VisibilityThreshold,
    ) -> Result<(), ControllerError> {
        self.observed.insert(element.clone(), threshold);
        Ok(())
    }

    fn unobserve(&mut self, element: &ElementId) {
        self.observed.remove(element);
        self.pending.retain(|entry| &entry.element != element);
    }

    fn drain_entries(&mut self) -> Vec<IntersectionEntry> {
        self.pending.drain(..).collect()
    }
}

/// Stand-in for environments without intersection reporting.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedViewport;

impl ViewportObserver for UnsupportedViewport {
    fn observe(
        &mut self,
        _element: &ElementId,
        _threshold: VisibilityThreshold,
    ) -> Result<(), ControllerError> {
        Err(ControllerError::AdapterUnavailable)
    }

    fn unobserve(&mut self, _element: &ElementId) {}

    fn drain_entries(&mut self) -> Vec<IntersectionEntry> {
        Vec::new()
    }
}
