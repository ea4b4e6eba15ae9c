mod png_sink;

pub use png_sink::PngSink;

use crate::segmentation::IntensityField;
use anyhow::Result;

/// Trait for cut result destinations
pub trait CutSink {
    /// Write the cut, with the original field available for comparison
    fn write_cut(&mut self, original: &IntensityField, cut: &IntensityField) -> Result<()>;
}
