use serde::{Deserialize, Serialize};

use shapeset_core::{PlacedShape, Scene};

/// Persisted bounding-region description for one accepted shape.
///
/// The fill color is deliberately not part of the record: it only
/// matters for rasterization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// 1-based sequence number in acceptance order, as a string.
    pub id: String,
    /// Shape kind wire name (`circle`, `triangle`, `rhombus`, `hexagon`).
    pub name: String,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub origin: RegionOrigin,
    pub size: RegionSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOrigin {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSize {
    pub width: i32,
    pub height: i32,
}

impl AnnotationRecord {
    fn from_shape(index: usize, shape: &PlacedShape) -> Self {
        Self {
            id: index.to_string(),
            name: shape.kind.name().to_string(),
            region: Region {
                origin: RegionOrigin {
                    x: shape.bounds.x,
                    y: shape.bounds.y,
                },
                size: RegionSize {
                    width: shape.bounds.width,
                    height: shape.bounds.height,
                },
            },
        }
    }

    /// One record per accepted shape, ordered and numbered by acceptance.
    pub fn from_scene(scene: &Scene) -> Vec<AnnotationRecord> {
        scene
            .shapes()
            .iter()
            .enumerate()
            .map(|(i, shape)| Self::from_shape(i + 1, shape))
            .collect()
    }
}
