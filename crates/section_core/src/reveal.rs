//! One-shot "has this element been seen" bookkeeping.

use std::collections::{BTreeMap, BTreeSet};

use shared::{domain::ElementId, error::ControllerError};
use tracing::{debug, warn};

use crate::viewport::{IntersectionEntry, ViewportObserver, VisibilityThreshold};

#[derive(Debug, Default)]
pub struct RevealTracker {
    tracked: BTreeMap<ElementId, VisibilityThreshold>,
    revealed: BTreeSet<ElementId>,
    active: bool,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Starts tracking `element`. Returns the element when it is revealed on
    /// the spot, which happens when the adapter cannot observe anything.
    pub fn observe(
        &mut self,
        viewport: &mut dyn ViewportObserver,
        element: ElementId,
        threshold: VisibilityThreshold,
    ) -> Option<ElementId> {
        if !self.active || self.revealed.contains(&element) {
            return None;
        }

        match viewport.observe(&element, threshold) {
            Ok(()) => {
                debug!(%element, threshold = threshold.fraction(), "reveal: observing");
                self.tracked.insert(element, threshold);
                None
            }
            Err(ControllerError::AdapterUnavailable) => {
                warn!(
                    %element,
                    "reveal: viewport observer unavailable, showing element statically"
                );
                self.mark_revealed(element)
            }
            Err(err) => {
                warn!(%element, "reveal: observe failed, showing element statically: {err}");
                self.mark_revealed(element)
            }
        }
    }

    /// Applies an intersection report. Returns the element the first time it
    /// crosses its threshold and never again afterwards.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> Option<ElementId> {
        if !self.active {
            return None;
        }
        let threshold = *self.tracked.get(&entry.element)?;
        if !threshold.is_met_by(entry.ratio) {
            return None;
        }
        self.mark_revealed(entry.element.clone())
    }

    fn mark_revealed(&mut self, element: ElementId) -> Option<ElementId> {
        if self.revealed.insert(element.clone()) {
            debug!(%element, "reveal: element became visible");
            Some(element)
        } else {
            None
        }
    }

    /// Stops observing every tracked element. Revealed state is kept for
    /// rendering but no longer changes.
    pub fn teardown(&mut self, viewport: &mut dyn ViewportObserver) {
        for element in self.tracked.keys() {
            viewport.unobserve(element);
        }
        self.tracked.clear();
        self.active = false;
    }

    /// Re-enables observation after a teardown. Revealed elements stay
    /// revealed.
    pub fn resume(&mut self) {
        self.active = true;
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.revealed.contains(element)
    }

    pub fn is_tracking(&self, element: &ElementId) -> bool {
        self.tracked.contains_key(element)
    }

    /// Elements under observation, revealed or not.
    pub fn tracked(&self) -> impl Iterator<Item = &ElementId> {
        self.tracked.keys()
    }

    pub fn revealed(&self) -> impl Iterator<Item = &ElementId> {
        self.revealed.iter()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
