use std::f64::consts::TAU;

use crate::geometry::{Point, Polygon};
use crate::shape::ShapeParams;

/// Number of sides used to approximate a circle. Keeps bounding-box and
/// intersection math within a small tolerance of a true disk.
pub const CIRCLE_SIDES: usize = 64;

/// Build the polygon for a shape, before any validation.
///
/// Pure and deterministic: all randomness (triangle vertex angles,
/// rhombus diagonals) arrives through `params`. The unrotated vertex
/// ring is constructed around `center`, then every vertex is rotated
/// rigidly about it by `rotation_deg` degrees.
pub fn build_polygon(params: &ShapeParams, size: f64, center: Point, rotation_deg: f64) -> Polygon {
    let radius = size / 2.0;
    let vertices = match params {
        ShapeParams::Circle => ring_vertices(center, radius, CIRCLE_SIDES),
        ShapeParams::Triangle { angles } => angles
            .iter()
            .map(|a| {
                Point::new(
                    center.x + radius * a.cos(),
                    center.y + radius * a.sin(),
                )
            })
            .collect(),
        ShapeParams::Rhombus {
            vertical,
            horizontal,
        } => vec![
            Point::new(center.x, center.y + vertical / 2.0),
            Point::new(center.x + horizontal / 2.0, center.y),
            Point::new(center.x, center.y - vertical / 2.0),
            Point::new(center.x - horizontal / 2.0, center.y),
        ],
        ShapeParams::Hexagon => ring_vertices(center, radius, 6),
    };
    Polygon::new(vertices).rotated_around(&center, rotation_deg)
}

/// Vertices evenly spaced on the circle of `radius` around `center`.
fn ring_vertices(center: Point, radius: f64, sides: usize) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_is_deterministic() {
        let params = ShapeParams::Triangle {
            angles: [0.3, 2.1, 4.9],
        };
        let a = build_polygon(&params, 80.0, Point::new(100.0, 100.0), 33.0);
        let b = build_polygon(&params, 80.0, Point::new(100.0, 100.0), 33.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_bounds() {
        // size 50 at (128,128), no rotation: bounds should be 50x50 at (103,103).
        let poly = build_polygon(&ShapeParams::Circle, 50.0, Point::new(128.0, 128.0), 0.0);
        assert_eq!(poly.vertex_count(), CIRCLE_SIDES);
        let bounds = poly.bbox().unwrap().to_int_bounds();
        assert_eq!(bounds.x, 103);
        assert_eq!(bounds.y, 103);
        assert_eq!(bounds.width, 50);
        assert_eq!(bounds.height, 50);
    }

    #[test]
    fn test_triangle_vertices_on_circumscribed_circle() {
        let center = Point::new(50.0, 60.0);
        let poly = build_polygon(
            &ShapeParams::Triangle {
                angles: [0.0, 2.0, 4.0],
            },
            60.0,
            center,
            0.0,
        );
        assert_eq!(poly.vertex_count(), 3);
        for v in &poly.vertices {
            assert!((v.distance_to(&center) - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rhombus_vertices() {
        let poly = build_polygon(
            &ShapeParams::Rhombus {
                vertical: 30.0,
                horizontal: 40.0,
            },
            100.0,
            Point::new(100.0, 100.0),
            0.0,
        );
        let expected = [
            Point::new(100.0, 115.0),
            Point::new(120.0, 100.0),
            Point::new(100.0, 85.0),
            Point::new(80.0, 100.0),
        ];
        assert_eq!(poly.vertex_count(), 4);
        for (v, e) in poly.vertices.iter().zip(expected.iter()) {
            assert!(v.distance_to(e) < 1e-9);
        }
    }

    #[test]
    fn test_hexagon_sixfold_symmetry() {
        // Rotating a regular hexagon by 60 degrees about its center must
        // reproduce its vertex set (as a set).
        let center = Point::new(40.0, 40.0);
        let hexagon = build_polygon(&ShapeParams::Hexagon, 90.0, center, 0.0);
        let rotated = hexagon.rotated_around(&center, 60.0);
        for v in &rotated.vertices {
            assert!(
                hexagon.vertices.iter().any(|h| h.distance_to(v) < 1e-9),
                "rotated vertex {:?} not found in original hexagon",
                v
            );
        }
    }

    #[test]
    fn test_rotation_preserves_center_distance() {
        let center = Point::new(0.0, 0.0);
        let plain = build_polygon(&ShapeParams::Hexagon, 50.0, center, 0.0);
        let turned = build_polygon(&ShapeParams::Hexagon, 50.0, center, 17.5);
        for (a, b) in plain.vertices.iter().zip(turned.vertices.iter()) {
            assert!((a.distance_to(&center) - b.distance_to(&center)).abs() < 1e-9);
        }
    }
}
