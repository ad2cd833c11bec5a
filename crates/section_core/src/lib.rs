//! Page-section state for the portfolio: one-shot reveals, timed rotation,
//! carousel navigation, the mock contact submission, header scroll state and
//! the hero shape field, all driven by an explicit clock.

pub mod carousel;
pub mod config;
pub mod controller;
pub mod header;
pub mod hero;
pub mod page;
pub mod reveal;
pub mod rotation;
pub mod submission;
pub mod viewport;

pub use carousel::{CarouselNav, Direction};
pub use config::{load_settings, Settings};
pub use controller::{ControllerEvent, ControllerKind, Section, SectionController};
pub use header::HeaderState;
pub use hero::{HeroState, Point, ShapeField, ShapeFrame};
pub use page::{CanvasSize, PageEvent, PortfolioPage};
pub use reveal::RevealTracker;
pub use rotation::RotationTimer;
pub use submission::{ContactForm, SubmissionLifecycle, SubmitOutcome};
pub use viewport::{
    IntersectionEntry, QueuedViewport, UnsupportedViewport, ViewportObserver, VisibilityThreshold,
};
