use super::IntensitySource;
use crate::segmentation::{Channel, IntensityField, Preprocessor};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Reads an image file and extracts one channel
pub struct ImageFileSource {
    path: PathBuf,
    preprocessor: Preprocessor,
    width: u32,
    height: u32,
}

impl ImageFileSource {
    pub fn new<P: AsRef<Path>>(path: P, channel: Channel) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            preprocessor: Preprocessor::new(channel),
            width: 0,
            height: 0,
        }
    }
}

impl IntensitySource for ImageFileSource {
    fn load(&mut self) -> Result<IntensityField> {
        tracing::info!(
            "Loading {} ({:?} channel)",
            self.path.display(),
            self.preprocessor.channel()
        );

        let decoded = image::open(&self.path)
            .with_context(|| format!("Failed to decode image at {}", self.path.display()))?
            .to_rgb8();

        (self.width, self.height) = decoded.dimensions();
        tracing::info!("Image loaded: {}x{}", self.width, self.height);

        Ok(self.preprocessor.intensity_from_rgb(&decoded))
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
