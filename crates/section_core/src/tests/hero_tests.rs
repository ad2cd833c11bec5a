use super::*;

fn lone_shape(kind: ShapeKind) -> Shape {
    Shape {
        center: Point::new(100.0, 100.0),
        size: 40.0,
        rotation: 0.0,
        rotation_speed: 0.01,
        opacity: 0.2,
        kind,
        color: Rgb(6, 182, 212),
    }
}

#[test]
fn same_seed_produces_same_field() {
    let a = ShapeField::seeded(7, 50, 1280.0, 800.0);
    let b = ShapeField::seeded(7, 50, 1280.0, 800.0);
    let c = ShapeField::seeded(8, 50, 1280.0, 800.0);
    assert_eq!(a.shapes(), b.shapes());
    assert_ne!(a.shapes(), c.shapes());
    assert_eq!(a.shapes().len(), 50);
}

#[test]
fn seeded_shapes_stay_within_documented_ranges() {
    let field = ShapeField::seeded(42, 200, 640.0, 480.0);
    let palette: Vec<Rgb> = PALETTE.iter().filter_map(|hex| Rgb::from_hex(hex)).collect();
    for shape in field.shapes() {
        assert!((0.0..640.0).contains(&shape.center.x));
        assert!((0.0..480.0).contains(&shape.center.y));
        assert!((20.0..60.0).contains(&shape.size));
        assert!((0.1..0.3).contains(&shape.opacity));
        assert!(shape.rotation_speed.abs() <= 0.01);
        assert!(palette.contains(&shape.color));
    }
}

#[test]
fn cursor_far_away_leaves_shape_unchanged() {
    let shape = lone_shape(ShapeKind::Square);
    assert_eq!(proximity_boost(&shape, None), (0.2, 40.0));
    assert_eq!(
        proximity_boost(&shape, Some(Point::new(250.0, 100.0))),
        (0.2, 40.0)
    );
}

#[test]
fn cursor_nearby_boosts_opacity_and_size() {
    let shape = lone_shape(ShapeKind::Square);
    let (opacity, size) = proximity_boost(&shape, Some(Point::new(160.0, 100.0)));
    // distance 60 -> boost (150 - 60) / 300 = 0.3
    assert!((opacity - 0.5).abs() < 1e-5);
    assert!((size - 52.0).abs() < 1e-4);

    let (capped, grown) = proximity_boost(&shape, Some(Point::new(100.0, 100.0)));
    assert_eq!(capped, 0.6);
    assert!((grown - 60.0).abs() < 1e-4);
}

#[test]
fn frames_carry_polygon_vertices_per_kind() {
    let mut field = ShapeField::seeded(1, 0, 100.0, 100.0);
    assert!(field.frame(None).is_empty());

    for (kind, corners) in [
        (ShapeKind::Triangle, 3),
        (ShapeKind::Square, 4),
        (ShapeKind::Hexagon, 6),
    ] {
        let frame = shape_frame(&lone_shape(kind), None);
        assert_eq!(frame.vertices.len(), corners);
        assert!((frame.stroke_opacity - 0.1).abs() < 1e-6);
    }

    field.resize(300.0, 200.0);
    assert_eq!(field.size(), (300.0, 200.0));
}

#[test]
fn step_rotates_by_speed() {
    let mut field = ShapeField::seeded(3, 5, 100.0, 100.0);
    let before: Vec<f32> = field.shapes().iter().map(|s| s.rotation).collect();
    field.step();
    for (shape, previous) in field.shapes().iter().zip(before) {
        let expected = (previous + shape.rotation_speed).rem_euclid(TAU);
        assert!((shape.rotation - expected).abs() < 1e-5);
    }
}

#[test]
fn intro_reveals_once_after_delay() {
    let mut hero = HeroState::new(
        ShapeField::seeded(1, 3, 100.0, 100.0),
        Duration::from_millis(800),
    );
    hero.mount(Duration::ZERO);
    assert!(!hero.fire_due(Duration::from_millis(799)));
    assert!(hero.fire_due(Duration::from_millis(800)));
    assert!(hero.is_intro_revealed());
    assert!(!hero.fire_due(Duration::from_millis(5000)));
    assert_eq!(hero.next_deadline(), None);
}

#[test]
fn teardown_cancels_pending_intro() {
    let mut hero = HeroState::new(
        ShapeField::seeded(1, 3, 100.0, 100.0),
        Duration::from_millis(800),
    );
    hero.mount(Duration::ZERO);
    hero.teardown();
    assert!(!hero.fire_due(Duration::from_secs(10)));
    assert!(!hero.is_intro_revealed());
}
