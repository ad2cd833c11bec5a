use std::time::Duration;

use section_core::{
    CanvasSize, ContactForm, ControllerEvent, PageEvent, PortfolioPage, QueuedViewport, Settings,
    SubmitOutcome,
};
use shared::{
    content::Portfolio,
    domain::{SectionAnchor, SubmissionState},
};

fn page_with(settings: Settings) -> PortfolioPage {
    let mut page = PortfolioPage::new(
        &settings,
        &Portfolio::default(),
        QueuedViewport::new(),
        2024,
        CanvasSize::default(),
    )
    .expect("page");
    page.mount(Duration::ZERO);
    page
}

#[test]
fn page_view_from_landing_to_contact_confirmation() {
    let mut page = page_with(Settings::default());

    // Landing: hero intro appears after its delay.
    let events = page.advance_by(Duration::from_millis(800));
    assert_eq!(events, vec![PageEvent::HeroIntroRevealed]);

    // Scrolling down: header switches style, skills come into view.
    assert_eq!(page.on_scroll(600.0), vec![PageEvent::HeaderScrolled(true)]);
    let skills = SectionAnchor::Skills.element_id();
    assert_eq!(page.report_visibility(&skills, 0.4).len(), 1);

    // Skills rotate on their own every five seconds.
    page.advance_to(Duration::from_millis(15_000));
    assert_eq!(page.active_category(), Some(3));

    // Projects: flip to the last card.
    page.carousel_jump(2).expect("jump");
    assert_eq!(
        page.carousel().map(|c| (c.current_index(), c.scroll_offset())),
        Some((2, 840.0))
    );

    // Contact: submit, see confirmation, return to idle.
    let (outcome, _) = page.submit_contact(Some(ContactForm::new("A", "a@x.com", "hi")));
    assert_eq!(outcome, SubmitOutcome::Accepted);
    page.advance_by(Duration::from_millis(2000));
    let lifecycle = page.submission().expect("contact section");
    assert_eq!(lifecycle.state(), SubmissionState::Succeeded);
    assert!(lifecycle.form().is_empty());
    page.advance_by(Duration::from_millis(3000));
    assert_eq!(
        page.submission().map(|s| s.state()),
        Some(SubmissionState::Idle)
    );
}

#[test]
fn configured_timings_flow_through_to_controllers() {
    let settings = Settings {
        rotation_interval_ms: 1000,
        submission_pending_ms: 10,
        submission_reset_ms: 20,
        ..Settings::default()
    };
    let mut page = page_with(settings);

    page.advance_to(Duration::from_millis(3000));
    assert_eq!(page.active_category(), Some(3));

    page.submit_contact(Some(ContactForm::new("A", "a@x.com", "hi")));
    let events = page.advance_by(Duration::from_millis(30));
    let states: Vec<SubmissionState> = events
        .into_iter()
        .filter_map(|event| match event {
            PageEvent::Section {
                event: ControllerEvent::Submission(state),
                ..
            } => Some(state),
            _ => None,
        })
        .collect();
    assert_eq!(
        states,
        vec![SubmissionState::Succeeded, SubmissionState::Idle]
    );
}

#[test]
fn nothing_mutates_after_full_unmount() {
    let mut page = page_with(Settings::default());
    page.advance_to(Duration::from_millis(5000));
    page.submit_contact(Some(ContactForm::new("A", "a@x.com", "hi")));

    page.unmount_all();
    assert_eq!(page.next_deadline(), None);

    let events = page.advance_to(Duration::from_secs(120));
    assert!(events.is_empty());
    assert_eq!(page.active_category(), Some(1));
    assert_eq!(
        page.submission().map(|s| s.state()),
        Some(SubmissionState::Pending)
    );
    assert_eq!(page.viewport().observed_count(), 0);
    assert!(page
        .report_visibility(&SectionAnchor::Projects.element_id(), 1.0)
        .is_empty());
}

#[test]
fn invalid_settings_are_rejected_up_front() {
    let settings = Settings {
        section_threshold: 0.0,
        ..Settings::default()
    };
    let result = PortfolioPage::new(
        &settings,
        &Portfolio::default(),
        QueuedViewport::new(),
        1,
        CanvasSize::default(),
    );
    assert!(result.is_err());
}
