use super::CutSink;
use crate::segmentation::{field_to_gray, side_by_side, IntensityField};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Writes the cut as an 8-bit grayscale image
///
/// With a comparison path set, also writes original and cut side by side.
/// The encoder is picked from each path's extension.
pub struct PngSink {
    cut_path: PathBuf,
    comparison_path: Option<PathBuf>,
}

impl PngSink {
    pub fn new<P: AsRef<Path>>(cut_path: P) -> Self {
        Self {
            cut_path: cut_path.as_ref().to_path_buf(),
            comparison_path: None,
        }
    }

    pub fn with_comparison<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.comparison_path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl CutSink for PngSink {
    fn write_cut(&mut self, original: &IntensityField, cut: &IntensityField) -> Result<()> {
        field_to_gray(cut)
            .save(&self.cut_path)
            .with_context(|| format!("Failed to write cut to {}", self.cut_path.display()))?;
        tracing::info!("Cut written to {}", self.cut_path.display());

        if let Some(path) = &self.comparison_path {
            side_by_side(original, cut)
                .save(path)
                .with_context(|| format!("Failed to write comparison to {}", path.display()))?;
            tracing::info!("Comparison written to {}", path.display());
        }

        Ok(())
    }
}
