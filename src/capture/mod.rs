mod file_source;

pub use file_source::ImageFileSource;

use crate::segmentation::IntensityField;
use anyhow::Result;

/// Trait for intensity field sources
pub trait IntensitySource {
    /// Load a normalized single-channel intensity field
    fn load(&mut self) -> Result<IntensityField>;

    /// Get the resolution of the loaded image as (width, height)
    /// Returns (0, 0) before the first load
    fn resolution(&self) -> (u32, u32);
}
