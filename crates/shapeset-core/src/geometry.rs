use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Rotate this point rigidly about `center` by `degrees`,
    /// counter-clockwise in the mathematical (y-up) convention.
    pub fn rotate_around(&self, center: &Point, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        let (sin_r, cos_r) = rad.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self {
            x: center.x + dx * cos_r - dy * sin_r,
            y: center.y + dx * sin_r + dy * cos_r,
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn intersects(&self, other: &BBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Integer-rounded projection of this box: origin and extent are
    /// rounded independently, matching how annotation regions are stored.
    pub fn to_int_bounds(&self) -> IntBounds {
        IntBounds {
            x: self.min.x.round() as i32,
            y: self.min.y.round() as i32,
            width: self.width().round() as i32,
            height: self.height().round() as i32,
        }
    }
}

/// Integer bounding region, as persisted in annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A polygon defined by an open vertex ring (the first vertex is not
/// repeated; the ring is implicitly closed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Rotate every vertex about `center` by `degrees`.
    pub fn rotated_around(&self, center: &Point, degrees: f64) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.rotate_around(center, degrees))
                .collect(),
        }
    }

    /// Convert into a `geo` polygon for exact intersection and distance
    /// predicates. The ring is closed by `geo` on construction.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let coords: Vec<(f64, f64)> = self.vertices.iter().map(|p| (p.x, p.y)).collect();
        geo::Polygon::new(geo::LineString::from(coords), vec![])
    }
}
