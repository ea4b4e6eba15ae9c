mod cut;
pub mod energy;
mod error;
mod graph;
mod markov;
mod preprocess;
mod propagate;
mod seeds;
pub mod types;

pub use cut::cut;
pub use error::SegmentError;
pub use graph::{Edge, GridGraph, Node, MAX_NEIGHBORS};
pub use markov::MarkovFieldSegmenter;
pub use preprocess::{field_to_gray, intensity_from_gray, side_by_side, Channel, Preprocessor};
pub use propagate::{propagate, Propagation};
pub use seeds::{SeedBinding, SeedSelection};
pub use types::{
    CutMode, IntensityField, Label, PixelCoord, Segmentation, SegmentationConfig, Segmenter,
};

/// Create the default segmenter (thresholded Markov field)
pub fn create_default_segmenter(
    config: SegmentationConfig,
    mode: CutMode,
) -> Result<Box<dyn Segmenter>, SegmentError> {
    let segmenter = MarkovFieldSegmenter::new(config, mode)?;
    Ok(Box::new(segmenter))
}
