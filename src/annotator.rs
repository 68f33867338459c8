use crate::classes::ClassRegistry;
use crate::config::{DatasetSettings, RenderSettings};
use crate::draw::draw_box_outline;
use crate::labels::{read_labels, LabelError};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("failed to list images in {path}: {source}")]
    ListImages {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no images found in {0}")]
    NoImages(PathBuf),
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to read labels: {0}")]
    Labels(#[from] LabelError),
    #[error("image file name is not valid UTF-8: {0:?}")]
    BadFileName(PathBuf),
    #[error("failed to create output file: {0}")]
    Create(std::io::Error),
    #[error("failed to encode output image: {0}")]
    Encode(image::ImageError),
}

#[derive(Debug)]
struct ItemReport {
    boxes: usize,
    class_names: Vec<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub boxes_drawn: usize,
}

/// Walks every image under `images/`, renders its annotations and writes
/// the result to `visualized/`. One failing item is logged and skipped;
/// it never stops the batch.
pub struct DatasetAnnotator {
    images_dir: PathBuf,
    labels_dir: PathBuf,
    output_dir: PathBuf,
    registry: ClassRegistry,
    thickness: u32,
    jpeg_quality: u8,
}

impl DatasetAnnotator {
    pub fn new(
        dataset: &DatasetSettings,
        render: &RenderSettings,
        registry: ClassRegistry,
    ) -> Self {
        Self {
            images_dir: dataset.images_dir(),
            labels_dir: dataset.labels_dir(),
            output_dir: dataset.visualized_dir(),
            registry,
            thickness: render.thickness,
            jpeg_quality: render.jpeg_quality,
        }
    }

    pub fn run(&self) -> Result<RunSummary, AnnotateError> {
        let images = self.list_images()?;
        if images.is_empty() {
            return Err(AnnotateError::NoImages(self.images_dir.clone()));
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| AnnotateError::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        tracing::info!("found {} images", images.len());

        let mut summary = RunSummary::default();
        for image_path in images {
            // Lossy here is fine, the name is only used for logging.
            let file_name = image_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match self.annotate_one(&image_path) {
                Ok(report) => {
                    summary.processed += 1;
                    summary.boxes_drawn += report.boxes;
                    tracing::info!(
                        image = %file_name,
                        boxes = report.boxes,
                        classes = ?report.class_names,
                        "annotated"
                    );
                }
                Err(err) => {
                    summary.failed += 1;
                    tracing::error!(image = %file_name, error = %err, "skipping image");
                }
            }
        }

        tracing::info!(
            processed = summary.processed,
            failed = summary.failed,
            boxes = summary.boxes_drawn,
            "annotation run complete"
        );

        Ok(summary)
    }

    // Filesystem enumeration order; items are independent, so no sort.
    fn list_images(&self) -> Result<Vec<PathBuf>, AnnotateError> {
        let entries =
            fs::read_dir(&self.images_dir).map_err(|source| AnnotateError::ListImages {
                path: self.images_dir.clone(),
                source,
            })?;

        let mut images = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| AnnotateError::ListImages {
                path: self.images_dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_jpg = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("jpg"));
            if is_jpg {
                images.push(path);
            }
        }

        Ok(images)
    }

    fn annotate_one(&self, image_path: &Path) -> Result<ItemReport, ItemError> {
        let stem = image_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ItemError::BadFileName(image_path.to_path_buf()))?;
        let label_path = self.labels_dir.join(format!("{stem}.txt"));

        let mut img = image::open(image_path)?.to_rgb8();
        let boxes = read_labels(&label_path)?;

        let mut class_names = Vec::with_capacity(boxes.len());
        for bbox in &boxes {
            let color = self.registry.color_for(bbox.class_id);
            draw_box_outline(
                &mut img,
                bbox.x,
                bbox.y,
                bbox.width,
                bbox.height,
                color,
                self.thickness,
            );
            class_names.push(self.registry.name_for(bbox.class_id).to_string());
        }

        let file_name = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ItemError::BadFileName(image_path.to_path_buf()))?;
        self.save_jpeg(&img, &self.output_dir.join(file_name))?;

        Ok(ItemReport {
            boxes: boxes.len(),
            class_names,
        })
    }

    fn save_jpeg(&self, img: &RgbImage, path: &Path) -> Result<(), ItemError> {
        let file = fs::File::create(path).map_err(ItemError::Create)?;
        let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), self.jpeg_quality);
        encoder.encode_image(img).map_err(ItemError::Encode)?;

        Ok(())
    }
}
