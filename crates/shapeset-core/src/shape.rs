use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{IntBounds, Point, Polygon};

/// Smallest accepted shape size / bounding extent, in pixels.
pub const MIN_SHAPE_SIZE: i32 = 25;
/// Largest accepted shape size / bounding extent, in pixels.
pub const MAX_SHAPE_SIZE: i32 = 150;

/// The four supported shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Triangle,
    Rhombus,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Rhombus,
        ShapeKind::Hexagon,
    ];

    /// Draw a kind uniformly.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Wire name used in annotation records.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

/// A shape kind together with its kind-specific random inputs.
///
/// Sampling happens here so the geometry builder stays a pure function
/// of its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeParams {
    Circle,
    /// Vertex angles in radians on the circumscribed circle. Independent
    /// draws, so the triangle is irregular by construction.
    Triangle { angles: [f64; 3] },
    /// Full diagonal lengths, each drawn from `[25, size]`.
    Rhombus { vertical: f64, horizontal: f64 },
    Hexagon,
}

impl ShapeParams {
    pub fn sample<R: Rng + ?Sized>(kind: ShapeKind, size: f64, rng: &mut R) -> Self {
        match kind {
            ShapeKind::Circle => ShapeParams::Circle,
            ShapeKind::Triangle => ShapeParams::Triangle {
                angles: [
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..TAU),
                ],
            },
            ShapeKind::Rhombus => ShapeParams::Rhombus {
                vertical: rng.gen_range(MIN_SHAPE_SIZE..=size as i32) as f64,
                horizontal: rng.gen_range(MIN_SHAPE_SIZE..=size as i32) as f64,
            },
            ShapeKind::Hexagon => ShapeParams::Hexagon,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Circle => ShapeKind::Circle,
            ShapeParams::Triangle { .. } => ShapeKind::Triangle,
            ShapeParams::Rhombus { .. } => ShapeKind::Rhombus,
            ShapeParams::Hexagon => ShapeKind::Hexagon,
        }
    }
}

/// An accepted shape placement. Immutable once accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    pub kind: ShapeKind,
    pub center: Point,
    /// Diameter-equivalent size the shape was drawn with.
    pub size: f64,
    /// Rotation applied about the center, in degrees.
    pub rotation: f64,
    pub color: Color,
    pub polygon: Polygon,
    pub bounds: IntBounds,
}
