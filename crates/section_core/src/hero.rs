//! Decorative hero banner: a field of slowly rotating shapes that brighten
//! and grow near the cursor, plus the delayed intro text reveal.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::domain::{Rgb, ShapeKind};
use tracing::debug;

pub const PALETTE: [&str; 4] = ["#06B6D4", "#3B82F6", "#8B5CF6", "#EC4899"];

/// Cursor distance inside which shapes react.
pub const PROXIMITY_RADIUS: f32 = 150.0;
const PROXIMITY_FALLOFF: f32 = 300.0;
const MAX_OPACITY: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub center: Point,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
    pub kind: ShapeKind,
    pub color: Rgb,
}

/// A shape as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFrame {
    pub kind: ShapeKind,
    pub color: Rgb,
    pub fill_opacity: f32,
    pub stroke_opacity: f32,
    pub size: f32,
    /// Polygon corners in canvas coordinates, already rotated.
    pub vertices: Vec<Point>,
}

#[derive(Debug, Clone)]
pub struct ShapeField {
    width: f32,
    height: f32,
    shapes: Vec<Shape>,
}

impl ShapeField {
    /// Scatters `count` shapes over a `width` x `height` canvas. The same seed
    /// always yields the same field.
    pub fn seeded(seed: u64, count: usize, width: f32, height: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette: Vec<Rgb> = PALETTE.iter().filter_map(|hex| Rgb::from_hex(hex)).collect();
        let shapes = (0..count)
            .map(|_| Shape {
                center: Point::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                size: 20.0 + rng.gen::<f32>() * 40.0,
                rotation: rng.gen::<f32>() * TAU,
                rotation_speed: (rng.gen::<f32>() - 0.5) * 0.02,
                opacity: 0.1 + rng.gen::<f32>() * 0.2,
                kind: match rng.gen_range(0..3) {
                    0 => ShapeKind::Triangle,
                    1 => ShapeKind::Square,
                    _ => ShapeKind::Hexagon,
                },
                color: palette[rng.gen_range(0..palette.len())],
            })
            .collect();
        Self {
            width,
            height,
            shapes,
        }
    }

    /// Shapes keep their positions; only the canvas bounds change.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advances every shape's rotation by one animation frame.
    pub fn step(&mut self) {
        for shape in &mut self.shapes {
            shape.rotation = (shape.rotation + shape.rotation_speed).rem_euclid(TAU);
        }
    }

    pub fn frame(&self, cursor: Option<Point>) -> Vec<ShapeFrame> {
        self.shapes
            .iter()
            .map(|shape| shape_frame(shape, cursor))
            .collect()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Effective `(opacity, size)` of a shape given the cursor position.
pub fn proximity_boost(shape: &Shape, cursor: Option<Point>) -> (f32, f32) {
    let Some(cursor) = cursor else {
        return (shape.opacity, shape.size);
    };
    let distance = shape.center.distance(cursor);
    if distance >= PROXIMITY_RADIUS {
        return (shape.opacity, shape.size);
    }
    let boost = (PROXIMITY_RADIUS - distance) / PROXIMITY_FALLOFF;
    (
        (shape.opacity + boost).min(MAX_OPACITY),
        shape.size * (1.0 + boost),
    )
}

fn shape_frame(shape: &Shape, cursor: Option<Point>) -> ShapeFrame {
    let (opacity, size) = proximity_boost(shape, cursor);
    let half = size / 2.0;
    let local: Vec<Point> = match shape.kind {
        ShapeKind::Triangle => vec![
            Point::new(0.0, -half),
            Point::new(-half, half),
            Point::new(half, half),
        ],
        ShapeKind::Square => vec![
            Point::new(-half, -half),
            Point::new(half, -half),
            Point::new(half, half),
            Point::new(-half, half),
        ],
        ShapeKind::Hexagon => (0..6)
            .map(|i| {
                let angle = i as f32 * PI / 3.0;
                Point::new(angle.cos() * half, angle.sin() * half)
            })
            .collect(),
    };
    let (sin, cos) = shape.rotation.sin_cos();
    let vertices = local
        .into_iter()
        .map(|p| {
            Point::new(
                shape.center.x + p.x * cos - p.y * sin,
                shape.center.y + p.x * sin + p.y * cos,
            )
        })
        .collect();
    ShapeFrame {
        kind: shape.kind,
        color: shape.color,
        fill_opacity: opacity,
        stroke_opacity: opacity * 0.5,
        size,
        vertices,
    }
}

#[derive(Debug, Clone)]
pub struct HeroState {
    shapes: ShapeField,
    intro_delay: Duration,
    intro_at: Option<Duration>,
    intro_revealed: bool,
}

impl HeroState {
    pub fn new(shapes: ShapeField, intro_delay: Duration) -> Self {
        Self {
            shapes,
            intro_delay,
            intro_at: None,
            intro_revealed: false,
        }
    }

    pub fn mount(&mut self, now: Duration) {
        if !self.intro_revealed {
            self.intro_at = Some(now + self.intro_delay);
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.intro_at
    }

    /// Returns true when the intro text is revealed by this call.
    pub fn fire_due(&mut self, now: Duration) -> bool {
        if self.intro_at.is_some_and(|deadline| deadline <= now) {
            self.intro_at = None;
            self.intro_revealed = true;
            debug!("hero: intro text revealed");
            return true;
        }
        false
    }

    pub fn teardown(&mut self) {
        self.intro_at = None;
    }

    pub fn is_intro_revealed(&self) -> bool {
        self.intro_revealed
    }

    pub fn shapes(&self) -> &ShapeField {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut ShapeField {
        &mut self.shapes
    }
}

#[cfg(test)]
#[path = "tests/hero_tests.rs"]
mod tests;
