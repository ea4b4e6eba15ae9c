use thiserror::Error;

/// Failures raised by the segmentation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("node ({row}, {col}) has no neighbors")]
    DegenerateNode { row: usize, col: usize },

    #[error("dimension mismatch: graph is {}x{}, image is {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
