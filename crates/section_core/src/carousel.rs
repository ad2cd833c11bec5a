//! Horizontal carousel navigation kept in sync with the physical scroll offset.

use shared::error::{check_index, ControllerError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone)]
pub struct CarouselNav {
    item_count: usize,
    item_width: f64,
    current_index: usize,
    scroll_offset: f64,
}

impl CarouselNav {
    pub fn new(item_count: usize, item_width: f64) -> Result<Self, ControllerError> {
        if item_count == 0 {
            return Err(ControllerError::EmptyCollection { what: "carousel" });
        }
        if !(item_width.is_finite() && item_width > 0.0) {
            return Err(ControllerError::invalid_setting(
                "carousel_item_width",
                format!("{item_width} is not a positive width"),
            ));
        }
        Ok(Self {
            item_count,
            item_width,
            current_index: 0,
            scroll_offset: 0.0,
        })
    }

    pub fn next(&mut self) -> usize {
        self.step(Direction::Next)
    }

    pub fn previous(&mut self) -> usize {
        self.step(Direction::Previous)
    }

    /// Moves one item width in `direction` and returns the resulting index.
    pub fn step(&mut self, direction: Direction) -> usize {
        let delta = match direction {
            Direction::Previous => -self.item_width,
            Direction::Next => self.item_width,
        };
        self.scroll_to(self.scroll_offset + delta)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), ControllerError> {
        check_index(index, self.item_count)?;
        self.scroll_offset = index as f64 * self.item_width;
        self.current_index = index;
        debug!(current_index = index, offset = self.scroll_offset, "carousel: jump");
        Ok(())
    }

    /// Records a scroll position reached by any means (buttons, drag, swipe)
    /// and snaps the index to the nearest item.
    pub fn scroll_to(&mut self, offset: f64) -> usize {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.scroll_offset = offset.clamp(0.0, self.max_offset());
        self.current_index = self.nearest_index(self.scroll_offset);
        debug!(
            current_index = self.current_index,
            offset = self.scroll_offset,
            "carousel: scrolled"
        );
        self.current_index
    }

    fn nearest_index(&self, offset: f64) -> usize {
        let raw = (offset / self.item_width).round();
        raw.clamp(0.0, (self.item_count - 1) as f64) as usize
    }

    pub fn max_offset(&self) -> f64 {
        (self.item_count - 1) as f64 * self.item_width
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn can_go(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.scroll_offset > 0.0,
            Direction::Next => self.scroll_offset < self.max_offset(),
        }
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
