use super::*;
use crate::viewport::{QueuedViewport, UnsupportedViewport};

fn skills_section() -> Section {
    Section::new(SectionAnchor::Skills)
        .with_reveal(vec![(
            SectionAnchor::Skills.element_id(),
            VisibilityThreshold::SECTION,
        )])
        .with(SectionController::Rotation(
            RotationTimer::new(4, Duration::from_millis(5000)).expect("timer"),
        ))
}

#[test]
fn mount_starts_rotation_and_observes_watched_elements() {
    let mut viewport = QueuedViewport::new();
    let mut section = skills_section();
    assert_eq!(section.next_deadline(), None);

    let events = section.mount(Duration::from_millis(100), &mut viewport);
    assert!(events.is_empty());
    assert!(viewport.is_observing(&SectionAnchor::Skills.element_id()));
    assert_eq!(section.next_deadline(), Some(Duration::from_millis(5100)));
    assert_eq!(
        section.controller_kinds(),
        vec![ControllerKind::Reveal, ControllerKind::Rotation]
    );
}

#[test]
fn fallback_viewport_reveals_during_mount() {
    let mut viewport = UnsupportedViewport;
    let mut section = skills_section();
    let events = section.mount(Duration::ZERO, &mut viewport);
    assert_eq!(
        events,
        vec![ControllerEvent::Revealed(SectionAnchor::Skills.element_id())]
    );
}

#[test]
fn unmounted_section_ignores_deadlines_and_intersections() {
    let mut viewport = QueuedViewport::new();
    let mut section = skills_section();
    section.mount(Duration::ZERO, &mut viewport);
    section.unmount(&mut viewport);

    assert!(!section.is_mounted());
    assert_eq!(section.next_deadline(), None);
    assert!(section.fire_due(Duration::from_secs(60)).is_empty());
    let entry = IntersectionEntry {
        element: SectionAnchor::Skills.element_id(),
        ratio: 1.0,
    };
    assert!(section.on_intersection(&entry).is_empty());
    assert_eq!(section.rotation().map(RotationTimer::active_index), Some(0));
    assert_eq!(viewport.observed_count(), 0);
}

#[test]
fn remount_rearms_rotation_and_observation() {
    let mut viewport = QueuedViewport::new();
    let mut section = skills_section();
    section.mount(Duration::ZERO, &mut viewport);
    section.unmount(&mut viewport);

    section.mount(Duration::from_millis(7000), &mut viewport);
    assert!(section.is_mounted());
    assert!(viewport.is_observing(&SectionAnchor::Skills.element_id()));
    assert_eq!(section.next_deadline(), Some(Duration::from_millis(12_000)));
    let entry = IntersectionEntry {
        element: SectionAnchor::Skills.element_id(),
        ratio: 1.0,
    };
    assert_eq!(
        section.on_intersection(&entry),
        vec![ControllerEvent::Revealed(SectionAnchor::Skills.element_id())]
    );
}

#[test]
fn controller_dispatch_maps_ticks_to_events() {
    let mut controller = SectionController::Rotation(
        RotationTimer::new(2, Duration::from_millis(10)).expect("timer"),
    );
    if let SectionController::Rotation(timer) = &mut controller {
        timer.start(Duration::ZERO);
    }
    assert_eq!(controller.next_deadline(), Some(Duration::from_millis(10)));
    assert_eq!(
        controller.fire_due(Duration::from_millis(10)),
        Some(ControllerEvent::Rotated { active_index: 1 })
    );

    let mut viewport = QueuedViewport::new();
    controller.teardown(&mut viewport);
    assert_eq!(controller.next_deadline(), None);
}
