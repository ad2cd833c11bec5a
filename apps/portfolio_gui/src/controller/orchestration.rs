//! Applies UI events to the page controllers.

use section_core::{PageEvent, PortfolioPage, SubmitOutcome};

use crate::controller::events::{UiError, UiEvent};

/// Outcome of one dispatched event as the view needs it.
#[derive(Debug, Default)]
pub struct Dispatched {
    pub page_events: Vec<PageEvent>,
    /// Fragment to scroll to after a navigation click.
    pub scroll_to: Option<&'static str>,
}

pub fn dispatch_ui_event(
    page: &mut PortfolioPage,
    event: UiEvent,
    status: &mut Option<UiError>,
) -> Dispatched {
    let name = event.name();
    let context = event.context();
    let mut dispatched = Dispatched::default();

    let result = match event {
        UiEvent::Navigate(anchor) => {
            dispatched.scroll_to = Some(page.navigate(anchor));
            Ok(Vec::new())
        }
        UiEvent::ToggleMenu => {
            page.toggle_menu();
            Ok(Vec::new())
        }
        UiEvent::SelectCategory(index) => page.select_category(index),
        UiEvent::CarouselStep(direction) => Ok(page.carousel_step(direction)),
        UiEvent::CarouselJump(index) => page.carousel_jump(index),
        UiEvent::CarouselScrolled(offset) => Ok(page.carousel_scroll_to(offset)),
        UiEvent::ContactFieldChanged { field, value } => {
            page.set_contact_field(field, value);
            Ok(Vec::new())
        }
        UiEvent::ContactFocus(field) => {
            page.focus_contact_field(field);
            Ok(Vec::new())
        }
        UiEvent::SubmitContact => {
            let (outcome, events) = page.submit_contact(None);
            if outcome == SubmitOutcome::Ignored {
                tracing::debug!("contact submit ignored while a submission is in flight");
            }
            Ok(events)
        }
    };

    match result {
        Ok(events) => {
            tracing::debug!(event = name, changes = events.len(), "applied ui event");
            if status.as_ref().is_some_and(UiError::is_transient) {
                *status = None;
            }
            dispatched.page_events = events;
        }
        Err(err) => {
            tracing::warn!(event = name, "ui event rejected: {err}");
            *status = Some(UiError::from_controller(context, &err));
        }
    }
    dispatched
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use section_core::{CanvasSize, QueuedViewport, Settings};
    use shared::{content::Portfolio, domain::SectionAnchor};

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn page() -> PortfolioPage {
        let mut page = PortfolioPage::new(
            &Settings::default(),
            &Portfolio::default(),
            QueuedViewport::new(),
            5,
            CanvasSize::default(),
        )
        .expect("page");
        page.mount(Duration::ZERO);
        page
    }

    #[test]
    fn rejected_jump_sets_status_and_valid_jump_clears_it() {
        let mut page = page();
        let mut status = None;

        dispatch_ui_event(&mut page, UiEvent::CarouselJump(9), &mut status);
        assert_eq!(
            status.as_ref().map(UiError::category),
            Some(UiErrorCategory::Selection)
        );

        let dispatched = dispatch_ui_event(&mut page, UiEvent::CarouselJump(1), &mut status);
        assert!(status.is_none());
        assert_eq!(dispatched.page_events.len(), 1);
    }

    #[test]
    fn navigation_yields_fragment_to_scroll_to() {
        let mut page = page();
        let mut status = None;
        let dispatched = dispatch_ui_event(
            &mut page,
            UiEvent::Navigate(SectionAnchor::Experience),
            &mut status,
        );
        assert_eq!(dispatched.scroll_to, Some("#experience"));
    }
}
