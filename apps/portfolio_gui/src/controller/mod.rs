//! Controller layer: UI events and how they reach the page controllers.

pub mod events;
pub mod orchestration;
