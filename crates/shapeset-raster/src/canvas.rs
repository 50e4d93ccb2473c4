use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;

use shapeset_core::{Color, Polygon, Scene};

/// A square RGB pixel buffer with a flat background color.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(size: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, to_pixel(background)),
        }
    }

    /// Flat-fill a polygon, no outline. Vertices are rounded to integer
    /// pixel coordinates.
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: Color) {
        let points = pixel_ring(polygon);
        let fill = to_pixel(color);
        match points.len() {
            0 | 1 => {
                log::debug!("skipping polygon that collapses to {} pixels", points.len());
            }
            // A sliver whose vertices round onto a line still gets drawn.
            2 => draw_line_segment_mut(
                &mut self.image,
                (points[0].x as f32, points[0].y as f32),
                (points[1].x as f32, points[1].y as f32),
                fill,
            ),
            _ => draw_polygon_mut(&mut self.image, &points, fill),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Rasterize a scene: background first, then every accepted shape in
/// acceptance order.
pub fn render_scene(scene: &Scene) -> RgbImage {
    let mut canvas = Canvas::new(scene.canvas_size(), scene.background());
    for shape in scene.shapes() {
        canvas.fill_polygon(&shape.polygon, shape.color);
    }
    canvas.into_image()
}

fn to_pixel(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

/// Round the vertex ring to pixel coordinates, dropping consecutive
/// duplicates and an equal closing point: the polygon drawing routine
/// rejects rings whose first and last points coincide.
fn pixel_ring(polygon: &Polygon) -> Vec<PixelPoint<i32>> {
    let mut points: Vec<PixelPoint<i32>> = Vec::with_capacity(polygon.vertex_count());
    for v in &polygon.vertices {
        let p = PixelPoint::new(v.x.round() as i32, v.y.round() as i32);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shapeset_core::{PlacementConfig, Point};

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn test_canvas_background_fill() {
        let canvas = Canvas::new(8, Color::new(10, 20, 30));
        assert_eq!(canvas.image().dimensions(), (8, 8));
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgb([10, 20, 30]));
        assert_eq!(*canvas.image().get_pixel(7, 7), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_fill_polygon_covers_interior_only() {
        let background = Color::new(0, 0, 0);
        let mut canvas = Canvas::new(16, background);
        canvas.fill_polygon(&square(4.0, 4.0, 12.0, 12.0), Color::new(200, 0, 0));

        assert_eq!(*canvas.image().get_pixel(8, 8), Rgb([200, 0, 0]));
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.image().get_pixel(15, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_closing_duplicate_vertex_is_tolerated() {
        // A ring that repeats its first vertex must not panic the fill.
        let mut canvas = Canvas::new(16, Color::new(0, 0, 0));
        let closed = Polygon::new(vec![
            Point::new(2.0, 2.0),
            Point::new(10.0, 2.0),
            Point::new(10.0, 10.0),
            Point::new(2.0, 10.0),
            Point::new(2.0, 2.0),
        ]);
        canvas.fill_polygon(&closed, Color::new(0, 200, 0));
        assert_eq!(*canvas.image().get_pixel(6, 6), Rgb([0, 200, 0]));
    }

    #[test]
    fn test_render_scene_paints_shapes() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut scene = Scene::new(PlacementConfig::new(512), &mut rng);
        scene.populate(&mut rng, 2).unwrap();

        let image = render_scene(&scene);
        assert_eq!(image.dimensions(), (512, 512));

        let background = to_pixel(scene.background());
        let painted = image.pixels().filter(|p| **p != background).count();
        // Every accepted shape spans at least 25 pixels per axis.
        assert!(painted > 0, "no shape pixels were painted");
    }
}
