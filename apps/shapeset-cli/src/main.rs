use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shapeset_core::{PlacementConfig, Scene};
use shapeset_io::{AnnotationRecord, DatasetWriter};
use shapeset_raster::render_scene;

/// Generate labeled images of randomly placed, non-overlapping shapes.
///
/// Each image is emitted as a PNG together with a JSON document listing
/// every shape's bounding region in acceptance order.
#[derive(Parser, Debug)]
#[command(name = "shapeset", version, about)]
struct Args {
    /// Directory the PNG/JSON pairs are written into.
    #[arg(short, long, default_value = "dataset")]
    output: PathBuf,

    /// Number of images to generate.
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Canvas width and height in pixels.
    #[arg(long, default_value_t = 256)]
    canvas_size: u32,

    /// Pin the number of shapes per image (1-5 at random when omitted).
    #[arg(long)]
    shapes: Option<usize>,

    /// Placement attempts per shape before the image is abandoned.
    #[arg(long, default_value_t = 1000)]
    max_attempts: u32,

    /// RNG seed for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = PlacementConfig::new(args.canvas_size).with_max_attempts(args.max_attempts);
    let writer = DatasetWriter::create(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    for index in 1..=args.count {
        let mut scene = Scene::new(config, &mut rng);
        let requested = args
            .shapes
            .unwrap_or_else(|| Scene::sample_shape_count(&mut rng));
        scene
            .populate(&mut rng, requested)
            .with_context(|| format!("placing shapes for image {index}"))?;

        let image = render_scene(&scene);
        let records = AnnotationRecord::from_scene(&scene);
        writer
            .write_pair(index, &image, &records)
            .with_context(|| format!("writing artifacts for image {index}"))?;

        log::info!(
            "image {index}/{}: {} shapes placed",
            args.count,
            scene.shape_count()
        );
    }

    Ok(())
}
