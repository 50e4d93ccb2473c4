use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;

use crate::annotation::AnnotationRecord;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("annotation serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes one PNG/JSON pair per image into an output directory.
///
/// Files are named by zero-padded 3-digit 1-based index: `001.png`
/// alongside `001.json`. Any failure is fatal for that image; nothing
/// is skipped silently.
pub struct DatasetWriter {
    root: PathBuf,
}

impl DatasetWriter {
    /// Create the writer, creating the output directory if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist the rendered image and its annotation list under `index`.
    /// Returns the two paths written.
    pub fn write_pair(
        &self,
        index: usize,
        image: &RgbImage,
        records: &[AnnotationRecord],
    ) -> Result<(PathBuf, PathBuf), ExportError> {
        let stem = format!("{:03}", index);

        let image_path = self.root.join(format!("{stem}.png"));
        image.save(&image_path)?;

        let json_path = self.root.join(format!("{stem}.json"));
        let mut writer = BufWriter::new(File::create(&json_path)?);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;

        log::info!(
            "wrote {} and {} ({} shapes)",
            image_path.display(),
            json_path.display(),
            records.len()
        );
        Ok((image_path, json_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Region, RegionOrigin, RegionSize};

    fn sample_records() -> Vec<AnnotationRecord> {
        vec![AnnotationRecord {
            id: "1".to_string(),
            name: "hexagon".to_string(),
            region: Region {
                origin: RegionOrigin { x: 10, y: 12 },
                size: RegionSize {
                    width: 40,
                    height: 38,
                },
            },
        }]
    }

    #[test]
    fn test_write_pair_creates_zero_padded_files() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::create(dir.path().join("dataset")).unwrap();

        let image = RgbImage::new(16, 16);
        let (image_path, json_path) = writer.write_pair(7, &image, &sample_records()).unwrap();

        assert!(image_path.ends_with("007.png"));
        assert!(json_path.ends_with("007.json"));
        assert!(image_path.exists());
        assert!(json_path.exists());
    }

    #[test]
    fn test_written_annotations_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::create(dir.path()).unwrap();

        let records = sample_records();
        let image = RgbImage::new(16, 16);
        let (_, json_path) = writer.write_pair(1, &image, &records).unwrap();

        let text = fs::read_to_string(json_path).unwrap();
        let parsed: Vec<AnnotationRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_create_nested_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let writer = DatasetWriter::create(&nested).unwrap();
        assert!(writer.root().is_dir());
    }
}
