use super::error::SegmentError;
use super::graph::GridGraph;
use super::types::{CutMode, IntensityField, Label};

/// Zero every pixel of `image` whose label is suppressed by `mode`
///
/// Pixels of the other class are left untouched. Returns the mutated buffer.
pub fn cut(
    graph: &GridGraph,
    mut image: IntensityField,
    mode: CutMode,
) -> Result<IntensityField, SegmentError> {
    let _span = tracing::debug_span!("cut").entered();

    if image.dim() != graph.dim() {
        return Err(SegmentError::DimensionMismatch {
            expected: graph.dim(),
            actual: image.dim(),
        });
    }

    let suppressed = match mode {
        CutMode::SuppressForeground => Label::Foreground,
        CutMode::SuppressBackground => Label::Background,
    };

    ndarray::Zip::from(&mut image)
        .and(graph.nodes())
        .for_each(|pixel, node| {
            if node.label == suppressed {
                *pixel = 0.0;
            }
        });

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::types::PixelCoord;
    use ndarray::array;

    fn labeled() -> (GridGraph, IntensityField) {
        let field = array![[0.2, 0.4], [0.6, 0.8]];
        let mut graph = GridGraph::build(&field).unwrap();
        graph.node_mut(PixelCoord::new(0, 1)).unwrap().label = Label::Foreground;
        graph.node_mut(PixelCoord::new(1, 0)).unwrap().label = Label::Foreground;
        (graph, field)
    }

    #[test]
    fn zeroes_foreground_by_default() {
        let (graph, field) = labeled();
        let out = cut(&graph, field, CutMode::default()).unwrap();
        assert_eq!(out, array![[0.2, 0.0], [0.0, 0.8]]);
    }

    #[test]
    fn can_keep_foreground_instead() {
        let (graph, field) = labeled();
        let out = cut(&graph, field, CutMode::SuppressBackground).unwrap();
        assert_eq!(out, array![[0.0, 0.4], [0.6, 0.0]]);
    }

    #[test]
    fn all_background_leaves_image_unchanged() {
        let field = array![[0.1, 0.2, 0.3]];
        let graph = GridGraph::build(&field).unwrap();
        let out = cut(&graph, field.clone(), CutMode::SuppressForeground).unwrap();
        assert_eq!(out, field);
    }

    #[test]
    fn rejects_mismatched_image() {
        let (graph, _) = labeled();
        let wrong = IntensityField::zeros((2, 3));
        assert_eq!(
            cut(&graph, wrong, CutMode::default()),
            Err(SegmentError::DimensionMismatch {
                expected: (2, 2),
                actual: (2, 3)
            })
        );
    }
}
