//! # Shapeset Raster
//!
//! CPU rasterizer for placed shapes: fills a fixed-size RGB canvas with
//! the image's background color and flat-fills each accepted polygon in
//! acceptance order, with no outline.

pub mod canvas;

pub use canvas::{render_scene, Canvas};
