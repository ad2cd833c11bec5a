//! UI events raised by widgets and error modeling for the status banner.

use section_core::Direction;
use shared::{
    domain::{ContactField, SectionAnchor},
    error::{ControllerError, ErrorCode},
};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Navigate(SectionAnchor),
    ToggleMenu,
    SelectCategory(usize),
    CarouselStep(Direction),
    CarouselJump(usize),
    /// The project strip was dragged or wheel-scrolled to this offset.
    CarouselScrolled(f64),
    ContactFieldChanged {
        field: ContactField,
        value: String,
    },
    ContactFocus(Option<ContactField>),
    SubmitContact,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Navigate(_) => "navigate",
            UiEvent::ToggleMenu => "toggle_menu",
            UiEvent::SelectCategory(_) => "select_category",
            UiEvent::CarouselStep(_) => "carousel_step",
            UiEvent::CarouselJump(_) => "carousel_jump",
            UiEvent::CarouselScrolled(_) => "carousel_scrolled",
            UiEvent::ContactFieldChanged { .. } => "contact_field_changed",
            UiEvent::ContactFocus(_) => "contact_focus",
            UiEvent::SubmitContact => "submit_contact",
        }
    }

    pub fn context(&self) -> UiErrorContext {
        match self {
            UiEvent::Navigate(_) | UiEvent::ToggleMenu => UiErrorContext::Navigation,
            UiEvent::SelectCategory(_) => UiErrorContext::Skills,
            UiEvent::CarouselStep(_) | UiEvent::CarouselJump(_) | UiEvent::CarouselScrolled(_) => {
                UiErrorContext::Projects
            }
            UiEvent::ContactFieldChanged { .. }
            | UiEvent::ContactFocus(_)
            | UiEvent::SubmitContact => UiErrorContext::Contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Selection,
    Environment,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Navigation,
    Skills,
    Projects,
    Contact,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_controller(context: UiErrorContext, err: &ControllerError) -> Self {
        let category = match err.code() {
            ErrorCode::OutOfRange => UiErrorCategory::Selection,
            ErrorCode::AdapterUnavailable => UiErrorCategory::Environment,
            ErrorCode::EmptyCollection | ErrorCode::InvalidSetting => {
                UiErrorCategory::Configuration
            }
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    /// Selection errors are user slips and vanish on the next valid action.
    pub fn is_transient(&self) -> bool {
        self.category == UiErrorCategory::Selection
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_a_transient_selection_error() {
        let err = UiError::from_controller(
            UiErrorContext::Projects,
            &ControllerError::OutOfRange { index: 5, len: 3 },
        );
        assert_eq!(err.category(), UiErrorCategory::Selection);
        assert_eq!(err.context(), UiErrorContext::Projects);
        assert!(err.is_transient());
        assert_eq!(err.message(), "index 5 is outside 0..3");
    }

    #[test]
    fn carousel_events_report_in_projects_context() {
        assert_eq!(
            UiEvent::CarouselScrolled(12.0).context(),
            UiErrorContext::Projects
        );
        assert_eq!(UiEvent::SubmitContact.name(), "submit_contact");
    }
}
