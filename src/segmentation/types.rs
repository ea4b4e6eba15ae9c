use super::error::SegmentError;
use super::propagate::Propagation;
use super::seeds::SeedBinding;
use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

/// Single-channel intensity field indexed `[row, col]`
/// Values are normalized to [0, 1]
pub type IntensityField = Array2<f32>;

/// Binary pixel class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    Foreground,
    #[default]
    Background,
}

/// Pixel position as (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub row: usize,
    pub col: usize,
}

impl PixelCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for PixelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for PixelCoord {
    type Err = String;

    /// Parses `ROW,COL`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|e| format!("invalid row '{row}': {e}"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| format!("invalid column '{col}': {e}"))?;
        Ok(Self { row, col })
    }
}

/// Which class the cut suppresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    /// Zero pixels labeled foreground, keep the background
    #[default]
    SuppressForeground,
    /// Zero pixels labeled background, keep the foreground object
    SuppressBackground,
}

/// Energy bandwidths and labeling thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentationConfig {
    /// Bandwidth of the unary term; small for tight intensity matching
    pub sigma_unary: f32,
    /// Bandwidth of the pairwise term; large for looser neighborhood matching
    pub sigma_pairwise: f32,
    /// A node whose energy against the source is below this becomes foreground
    pub foreground_threshold: f32,
    /// A node whose energy against the sink is below this becomes background.
    /// Tuned independently of `foreground_threshold`.
    pub background_threshold: f32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            sigma_unary: 0.5,
            sigma_pairwise: 5.0,
            foreground_threshold: 0.5,
            background_threshold: 0.2,
        }
    }
}

impl SegmentationConfig {
    pub fn validate(&self) -> Result<(), SegmentError> {
        for (name, sigma) in [
            ("sigma_unary", self.sigma_unary),
            ("sigma_pairwise", self.sigma_pairwise),
        ] {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(SegmentError::InvalidInput(format!(
                    "{name} must be positive and finite, got {sigma}"
                )));
            }
        }
        for (name, threshold) in [
            ("foreground_threshold", self.foreground_threshold),
            ("background_threshold", self.background_threshold),
        ] {
            if !threshold.is_finite() {
                return Err(SegmentError::InvalidInput(format!(
                    "{name} must be finite, got {threshold}"
                )));
            }
        }
        Ok(())
    }
}

/// Result of one segmentation run
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// The input field with the suppressed class zeroed
    pub cut: IntensityField,
    pub propagation: Propagation,
    pub foreground_pixels: usize,
}

/// Trait for two-class seeded segmenters
/// Allows swapping the labeling heuristic without touching the pipeline
pub trait Segmenter {
    /// Segment a field given the user's seeds
    ///
    /// # Arguments
    /// * `field` - Normalized intensity field
    /// * `seeds` - Source/sink binding; an incomplete binding leaves the field unsegmented
    fn segment(
        &mut self,
        field: &IntensityField,
        seeds: &SeedBinding,
    ) -> Result<Segmentation, SegmentError>;

    /// Drop any labels carried over from a previous run
    fn reset_labels(&mut self) {}

    fn config(&self) -> &SegmentationConfig;
}
