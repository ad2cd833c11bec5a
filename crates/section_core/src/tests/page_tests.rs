use super::*;
use crate::viewport::UnsupportedViewport;
use shared::domain::SubmissionState;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn mounted_page() -> PortfolioPage {
    let mut page = PortfolioPage::new(
        &Settings::default(),
        &Portfolio::default(),
        QueuedViewport::new(),
        11,
        CanvasSize::default(),
    )
    .expect("page");
    page.mount(Duration::ZERO);
    page
}

fn section_events(events: &[PageEvent], wanted: SectionAnchor) -> Vec<ControllerEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            PageEvent::Section { anchor, event } if *anchor == wanted => Some(event.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn builds_one_controller_set_per_section() {
    let page = mounted_page();
    assert_eq!(page.active_category(), Some(0));
    assert_eq!(page.carousel().map(CarouselNav::item_count), Some(3));
    assert_eq!(
        page.submission().map(SubmissionLifecycle::state),
        Some(SubmissionState::Idle)
    );
    // Section plus five timeline entries.
    assert_eq!(page.viewport().observed_count(), 3 + 5);
}

#[test]
fn hero_intro_and_rotation_fire_in_time_order() {
    let mut page = mounted_page();
    let events = page.advance_to(ms(10_000));
    assert_eq!(
        events,
        vec![
            PageEvent::HeroIntroRevealed,
            PageEvent::section(
                SectionAnchor::Skills,
                ControllerEvent::Rotated { active_index: 1 }
            ),
            PageEvent::section(
                SectionAnchor::Skills,
                ControllerEvent::Rotated { active_index: 2 }
            ),
        ]
    );
    assert_eq!(page.now(), ms(10_000));
    assert!(page.hero().is_intro_revealed());
}

#[test]
fn rotation_and_submission_interleave_across_sections() {
    let mut page = mounted_page();
    page.advance_to(ms(4000));
    let (outcome, events) = page.submit_contact(Some(ContactForm::new("A", "a@x.com", "hi")));
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        section_events(&events, SectionAnchor::Contact),
        vec![ControllerEvent::Submission(SubmissionState::Pending)]
    );

    // Rotation ticks at 5000 and 10000; submission succeeds at 6000, resets at 9000.
    let events = page.advance_to(ms(10_000));
    let order: Vec<&PageEvent> = events
        .iter()
        .filter(|event| matches!(event, PageEvent::Section { .. }))
        .collect();
    assert_eq!(
        order,
        vec![
            &PageEvent::section(
                SectionAnchor::Skills,
                ControllerEvent::Rotated { active_index: 1 }
            ),
            &PageEvent::section(
                SectionAnchor::Contact,
                ControllerEvent::Submission(SubmissionState::Succeeded)
            ),
            &PageEvent::section(
                SectionAnchor::Contact,
                ControllerEvent::Submission(SubmissionState::Idle)
            ),
            &PageEvent::section(
                SectionAnchor::Skills,
                ControllerEvent::Rotated { active_index: 2 }
            ),
        ]
    );
}

#[test]
fn visibility_reports_reveal_once() {
    let mut page = mounted_page();
    let skills = SectionAnchor::Skills.element_id();

    let first = page.report_visibility(&skills, 0.35);
    assert_eq!(
        first,
        vec![PageEvent::section(
            SectionAnchor::Skills,
            ControllerEvent::Revealed(skills.clone())
        )]
    );
    assert!(page.report_visibility(&skills, 0.0).is_empty());
    assert!(page.report_visibility(&skills, 1.0).is_empty());
    assert!(page.is_revealed(&skills));
}

#[test]
fn timeline_items_need_item_threshold() {
    let mut page = mounted_page();
    let item = ElementId::item(&SectionAnchor::Experience.element_id(), 2);
    assert!(page.report_visibility(&item, 0.5).is_empty());
    assert_eq!(page.report_visibility(&item, 0.6).len(), 1);
}

#[test]
fn missing_viewport_reveals_everything_at_mount() {
    let mut page = PortfolioPage::new(
        &Settings::default(),
        &Portfolio::default(),
        UnsupportedViewport,
        11,
        CanvasSize::default(),
    )
    .expect("page");
    let events = page.mount(Duration::ZERO);
    assert_eq!(events.len(), 3 + 5);
    assert!(page.is_revealed(&SectionAnchor::Projects.element_id()));
}

#[test]
fn manual_category_selection_and_bounds() {
    let mut page = mounted_page();
    let events = page.select_category(3).expect("select 3");
    assert_eq!(
        events,
        vec![PageEvent::section(
            SectionAnchor::Skills,
            ControllerEvent::Selected { active_index: 3 }
        )]
    );
    assert_eq!(
        page.select_category(4),
        Err(ControllerError::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(page.active_category(), Some(3));
    page.advance_to(ms(5000));
    assert_eq!(page.active_category(), Some(0));
}

#[test]
fn carousel_commands_update_index_synchronously() {
    let mut page = mounted_page();
    let events = page.carousel_jump(2).expect("jump");
    assert_eq!(
        events,
        vec![PageEvent::section(
            SectionAnchor::Projects,
            ControllerEvent::CarouselMoved {
                current_index: 2,
                scroll_offset: 840.0
            }
        )]
    );
    assert!(page.carousel_jump(5).is_err());
    page.carousel_step(Direction::Previous);
    assert_eq!(page.carousel().map(CarouselNav::current_index), Some(1));
    page.carousel_scroll_to(10.0);
    assert_eq!(page.carousel().map(CarouselNav::current_index), Some(0));
}

#[test]
fn header_scroll_events_only_on_change() {
    let mut page = mounted_page();
    assert!(page.on_scroll(10.0).is_empty());
    assert_eq!(page.on_scroll(80.0), vec![PageEvent::HeaderScrolled(true)]);
    assert!(page.on_scroll(120.0).is_empty());
    assert!(page.toggle_menu());
    assert_eq!(page.navigate(SectionAnchor::Contact), "#contact");
    assert!(!page.header().is_menu_open());
}

#[test]
fn contact_fields_feed_current_submission() {
    let mut page = mounted_page();
    page.focus_contact_field(Some(ContactField::Name));
    page.set_contact_field(ContactField::Name, "Grace");
    page.set_contact_field(ContactField::Email, "grace@example.com");
    page.set_contact_field(ContactField::Message, "hello");

    let (outcome, _) = page.submit_contact(None);
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        page.submission().map(|s| s.form().name.clone()),
        Some("Grace".to_string())
    );
    let (again, events) = page.submit_contact(None);
    assert_eq!(again, SubmitOutcome::Ignored);
    assert!(events.is_empty());
}

#[test]
fn unmounted_skills_stop_rotating_and_ignore_commands() {
    let mut page = mounted_page();
    page.advance_to(ms(5000));
    assert_eq!(page.active_category(), Some(1));

    page.unmount_section(SectionAnchor::Skills);
    page.advance_to(ms(60_000));
    assert_eq!(page.active_category(), Some(1));
    assert_eq!(page.select_category(2), Ok(Vec::new()));
    assert_eq!(page.active_category(), Some(1));
    assert!(!page
        .viewport()
        .is_observing(&SectionAnchor::Skills.element_id()));
}

#[test]
fn unmount_cancels_pending_submission() {
    let mut page = mounted_page();
    page.submit_contact(Some(ContactForm::new("A", "a@x.com", "hi")));
    page.unmount_section(SectionAnchor::Contact);
    let events = page.advance_to(ms(10_000));
    assert!(section_events(&events, SectionAnchor::Contact).is_empty());
    assert_eq!(
        page.submission().map(SubmissionLifecycle::state),
        Some(SubmissionState::Pending)
    );
}

#[test]
fn remounted_contact_starts_idle_and_accepts_new_submissions() {
    let mut page = mounted_page();
    page.submit_contact(Some(ContactForm::new("A", "a@x.com", "hi")));
    page.unmount_section(SectionAnchor::Contact);

    page.mount(ms(1000));
    let lifecycle = page.submission().expect("contact section");
    assert_eq!(lifecycle.state(), SubmissionState::Idle);
    assert!(lifecycle.form().is_empty());

    let events = page.advance_by(ms(60_000));
    assert!(section_events(&events, SectionAnchor::Contact).is_empty());
    let (outcome, _) = page.submit_contact(Some(ContactForm::new("B", "b@x.com", "again")));
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[test]
fn remounted_reveal_resumes_unrevealed_elements_only() {
    let mut page = mounted_page();
    let experience = SectionAnchor::Experience.element_id();
    let first_item = ElementId::item(&experience, 0);
    assert_eq!(page.report_visibility(&first_item, 1.0).len(), 1);

    page.unmount_section(SectionAnchor::Experience);
    assert!(!page.viewport().is_observing(&experience));
    page.mount(ms(500));

    assert!(page.viewport().is_observing(&experience));
    assert!(!page.viewport().is_observing(&first_item));
    assert!(page.is_revealed(&first_item));
    assert_eq!(
        section_events(
            &page.report_visibility(&experience, 1.0),
            SectionAnchor::Experience
        ),
        vec![ControllerEvent::Revealed(experience.clone())]
    );
    assert!(page.report_visibility(&first_item, 1.0).is_empty());
}

#[test]
fn clock_never_runs_backwards() {
    let mut page = mounted_page();
    page.advance_to(ms(3000));
    page.advance_to(ms(1000));
    assert_eq!(page.now(), ms(3000));
    page.advance_by(ms(500));
    assert_eq!(page.now(), ms(3500));
}

#[test]
fn hero_frames_match_configured_shape_count() {
    let mut page = mounted_page();
    let frame = page.hero_frame(Some(Point::new(10.0, 10.0)));
    assert_eq!(frame.len(), 50);
    page.resize_canvas(CanvasSize {
        width: 640.0,
        height: 480.0,
    });
    assert_eq!(page.hero().shapes().size(), (640.0, 480.0));
}
