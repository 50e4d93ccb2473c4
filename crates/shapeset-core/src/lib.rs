//! # Shapeset Core
//!
//! Shape placement engine for synthetic detection datasets: geometry
//! construction for the four supported shape kinds, an append-only
//! collision index enforcing a minimum separation margin, and the
//! per-image scene context that samples, validates, and accepts shape
//! placements.
//!
//! This crate is the heart of the Shapeset generator.

pub mod builder;
pub mod collision;
pub mod color;
pub mod geometry;
pub mod scene;
pub mod shape;

pub use collision::CollisionIndex;
pub use color::Color;
pub use geometry::{BBox, IntBounds, Point, Polygon};
pub use scene::{PlacementConfig, PlacementError, Scene};
pub use shape::{PlacedShape, ShapeKind, ShapeParams};
