use geo::{EuclideanDistance, Intersects};
use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::{BBox, Polygon};

/// Minimum separation enforced between any two accepted shapes, in pixels.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// An entry in the R-tree, referencing an accepted polygon by index.
#[derive(Debug, Clone)]
struct OccupiedEntry {
    /// Index into the occupied polygon vector.
    polygon_index: usize,
    /// Bounding box of the polygon.
    bbox: BBox,
}

impl RTreeObject for OccupiedEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min.x, self.bbox.min.y],
            [self.bbox.max.x, self.bbox.max.y],
        )
    }
}

/// Append-only index of the polygons accepted so far for one image.
///
/// A candidate is vacant when every occupied polygon keeps at least
/// `margin` units of clearance from it — equivalent to expanding the
/// candidate outward by the margin before a raw intersection test.
/// Bounding boxes are held in an R-tree so only occupied polygons whose
/// boxes can come within the margin pay the exact predicate.
pub struct CollisionIndex {
    tree: RTree<OccupiedEntry>,
    polygons: Vec<geo::Polygon<f64>>,
    margin: f64,
}

impl CollisionIndex {
    pub fn new(margin: f64) -> Self {
        Self {
            tree: RTree::new(),
            polygons: Vec::new(),
            margin,
        }
    }

    /// Does the candidate keep the required clearance from every
    /// occupied polygon?
    pub fn is_vacant(&self, candidate: &Polygon) -> bool {
        let bbox = match candidate.bbox() {
            Some(b) => b,
            None => return false,
        };
        let query = AABB::from_corners(
            [bbox.min.x - self.margin, bbox.min.y - self.margin],
            [bbox.max.x + self.margin, bbox.max.y + self.margin],
        );
        let geo_candidate = candidate.to_geo();
        for entry in self.tree.locate_in_envelope_intersecting(&query) {
            let occupied = &self.polygons[entry.polygon_index];
            if geo_candidate.intersects(occupied)
                || geo_candidate.euclidean_distance(occupied) < self.margin
            {
                return false;
            }
        }
        true
    }

    /// Register an accepted polygon. There is no removal: the index is
    /// append-only for the lifetime of one image.
    pub fn mark_occupied(&mut self, polygon: &Polygon) {
        let bbox = match polygon.bbox() {
            Some(b) => b,
            None => {
                log::debug!("ignoring degenerate polygon with no extent");
                return;
            }
        };
        let polygon_index = self.polygons.len();
        self.polygons.push(polygon.to_geo());
        self.tree.insert(OccupiedEntry {
            polygon_index,
            bbox,
        });
    }

    /// Number of occupied polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl Default for CollisionIndex {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN)
    }
}
