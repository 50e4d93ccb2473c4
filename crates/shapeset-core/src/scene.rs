use rand::Rng;
use thiserror::Error;

use crate::builder::build_polygon;
use crate::collision::{CollisionIndex, DEFAULT_MARGIN};
use crate::color::Color;
use crate::geometry::Point;
use crate::shape::{PlacedShape, ShapeKind, ShapeParams, MAX_SHAPE_SIZE, MIN_SHAPE_SIZE};

/// Default number of placement attempts per shape before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Tunables for one image's placement run.
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig {
    /// Canvas width and height in pixels.
    pub canvas_size: u32,
    /// Minimum separation between accepted shapes.
    pub margin: f64,
    /// Attempt budget per shape slot.
    pub max_attempts: u32,
}

impl PlacementConfig {
    pub fn new(canvas_size: u32) -> Self {
        Self {
            canvas_size,
            margin: DEFAULT_MARGIN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Placement failure.
#[derive(Error, Debug)]
pub enum PlacementError {
    #[error(
        "no vacant placement for shape {shape_index} on a \
         {canvas_size}x{canvas_size} canvas after {attempts} attempts"
    )]
    Exhausted {
        /// 1-based index of the shape slot that could not be filled.
        shape_index: usize,
        canvas_size: u32,
        attempts: u32,
    },
}

/// Per-image placement context.
///
/// Owns the background color, the collision index, and the ordered list
/// of accepted shapes for one image. Created fresh per image and
/// discarded after the image's artifacts are emitted; nothing leaks
/// across images.
pub struct Scene {
    config: PlacementConfig,
    background: Color,
    index: CollisionIndex,
    shapes: Vec<PlacedShape>,
}

impl Scene {
    /// Start a new image: draws the background color, everything else
    /// empty.
    pub fn new<R: Rng + ?Sized>(config: PlacementConfig, rng: &mut R) -> Self {
        Self {
            config,
            background: Color::sample(rng),
            index: CollisionIndex::new(config.margin),
            shapes: Vec::new(),
        }
    }

    /// Draw the number of shapes to attempt for one image, uniform over
    /// `{1..5}`.
    pub fn sample_shape_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
        rng.gen_range(1..=5)
    }

    /// Place `count` shapes, stopping at the first exhausted slot.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), PlacementError> {
        for _ in 0..count {
            self.place_shape(rng)?;
        }
        Ok(())
    }

    /// Sample, build, and validate candidates until one is accepted or
    /// the attempt budget runs out.
    ///
    /// Each attempt draws every parameter fresh: kind, size, center,
    /// rotation, color, and the kind-specific inputs. A candidate is
    /// rejected when its rounded bounding extent leaves
    /// `[MIN_SHAPE_SIZE, MAX_SHAPE_SIZE]` or the collision index reports
    /// the spot taken.
    pub fn place_shape<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        let canvas = self.config.canvas_size as i32;

        for attempt in 1..=self.config.max_attempts {
            let kind = ShapeKind::sample(rng);
            let size = rng.gen_range(MIN_SHAPE_SIZE..=MAX_SHAPE_SIZE);

            // Center sampling keeps the unrotated axis-aligned estimate
            // inside the canvas; rotation can still push the true polygon
            // past the edge. Reproduced sampling policy, not corrected.
            let half = (size as f64 * 0.5).round() as i32;
            let limit = canvas - half;
            if limit < half {
                log::debug!("attempt {attempt}: size {size} does not fit a {canvas} canvas");
                continue;
            }
            let center = Point::new(
                rng.gen_range(half..=limit) as f64,
                rng.gen_range(half..=limit) as f64,
            );
            let rotation = rng.gen_range(0.0..360.0);
            let color = Color::sample_distinct(rng, self.background);
            let params = ShapeParams::sample(kind, size as f64, rng);

            let polygon = build_polygon(&params, size as f64, center, rotation);
            let bounds = match polygon.bbox() {
                Some(b) => b.to_int_bounds(),
                None => continue,
            };

            if bounds.width < MIN_SHAPE_SIZE
                || bounds.width > MAX_SHAPE_SIZE
                || bounds.height < MIN_SHAPE_SIZE
                || bounds.height > MAX_SHAPE_SIZE
            {
                log::debug!(
                    "attempt {attempt}: {} bounds {}x{} outside [{MIN_SHAPE_SIZE},{MAX_SHAPE_SIZE}]",
                    kind.name(),
                    bounds.width,
                    bounds.height
                );
                continue;
            }

            if !self.index.is_vacant(&polygon) {
                log::debug!("attempt {attempt}: {} at {:?} overlaps", kind.name(), center);
                continue;
            }

            self.index.mark_occupied(&polygon);
            log::debug!(
                "placed {} size {size} at {:?} after {attempt} attempts",
                kind.name(),
                center
            );
            self.shapes.push(PlacedShape {
                kind,
                center,
                size: size as f64,
                rotation,
                color,
                polygon,
                bounds,
            });
            return Ok(());
        }

        let shape_index = self.shapes.len() + 1;
        log::warn!(
            "placement exhausted for shape {shape_index} after {} attempts",
            self.config.max_attempts
        );
        Err(PlacementError::Exhausted {
            shape_index,
            canvas_size: self.config.canvas_size,
            attempts: self.config.max_attempts,
        })
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn canvas_size(&self) -> u32 {
        self.config.canvas_size
    }

    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}
