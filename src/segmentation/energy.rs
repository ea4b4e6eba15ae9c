//! Per-node energy against a seed.
//!
//! Both terms are Gaussian-kernel *costs*, not likelihoods: they are near 0
//! when a node resembles the seed and approach 1 as it diverges. Lower total
//! energy means the node is more consistent with the seed's class.

use super::error::SegmentError;
use super::graph::Node;
use super::types::{PixelCoord, SegmentationConfig};

/// `1 - exp(-d² / sigma)`, in [0, 1)
fn dissimilarity(difference: f32, sigma: f32) -> f32 {
    1.0 - (-(difference * difference) / sigma).exp()
}

/// Unary term: intensity dissimilarity between a node and a seed
pub fn unary(node: &Node, seed: &Node, sigma: f32) -> f32 {
    dissimilarity(node.intensity() - seed.intensity(), sigma)
}

/// Pairwise term: dissimilarity between the node's mean edge weight and the
/// seed's intensity
///
/// `at` is the node's position, used only to report a degenerate node.
pub fn smoothness(
    node: &Node,
    at: PixelCoord,
    seed: &Node,
    sigma: f32,
) -> Result<f32, SegmentError> {
    let roughness = node.average_weight(at)?;
    Ok(dissimilarity(roughness - seed.intensity(), sigma))
}

/// Unary plus pairwise energy of `node` against `seed`
pub fn energy(
    node: &Node,
    at: PixelCoord,
    seed: &Node,
    config: &SegmentationConfig,
) -> Result<f32, SegmentError> {
    Ok(unary(node, seed, config.sigma_unary)
        + smoothness(node, at, seed, config.sigma_pairwise)?)
}
