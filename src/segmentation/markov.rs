use super::cut::cut;
use super::error::SegmentError;
use super::graph::GridGraph;
use super::propagate::{propagate, Propagation};
use super::seeds::SeedBinding;
use super::types::{CutMode, IntensityField, Label, Segmentation, SegmentationConfig, Segmenter};
use ndarray::Array2;

/// Seeded segmenter over a 4-connected Markov random field
///
/// Labels come from a single thresholded pass against the two seeds, not
/// from a min-cut. The labeled graph of the last run is kept for
/// inspection until `reset_labels`.
pub struct MarkovFieldSegmenter {
    config: SegmentationConfig,
    mode: CutMode,
    graph: Option<GridGraph>,
}

impl MarkovFieldSegmenter {
    pub fn new(config: SegmentationConfig, mode: CutMode) -> Result<Self, SegmentError> {
        config.validate()?;
        tracing::debug!("Segmenter configured: {:?}, {:?}", config, mode);
        Ok(Self {
            config,
            mode,
            graph: None,
        })
    }

    /// Labels assigned by the last run
    pub fn labels(&self) -> Option<Array2<Label>> {
        self.graph.as_ref().map(GridGraph::label_map)
    }

    pub fn mode(&self) -> CutMode {
        self.mode
    }
}

impl Segmenter for MarkovFieldSegmenter {
    fn segment(
        &mut self,
        field: &IntensityField,
        seeds: &SeedBinding,
    ) -> Result<Segmentation, SegmentError> {
        let _span = tracing::debug_span!("markov_segment").entered();

        let mut graph = GridGraph::build(field)?;
        let propagation = propagate(&mut graph, seeds, &self.config)?;

        // Without seeds nothing was labeled, so the image passes through whole
        let output = match propagation {
            Propagation::Completed { .. } => cut(&graph, field.clone(), self.mode)?,
            Propagation::Skipped => field.clone(),
        };
        let foreground_pixels = graph.count(Label::Foreground);
        self.graph = Some(graph);

        Ok(Segmentation {
            cut: output,
            propagation,
            foreground_pixels,
        })
    }

    fn reset_labels(&mut self) {
        tracing::info!("Discarding labels from previous run");
        self.graph = None;
    }

    fn config(&self) -> &SegmentationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::types::PixelCoord;
    use ndarray::array;

    #[test]
    fn missing_seeds_pass_image_through() {
        let mut segmenter =
            MarkovFieldSegmenter::new(SegmentationConfig::default(), CutMode::SuppressBackground)
                .unwrap();
        let field = array![[0.0, 0.5], [0.5, 1.0]];
        let result = segmenter.segment(&field, &SeedBinding::new()).unwrap();
        assert_eq!(result.propagation, Propagation::Skipped);
        assert_eq!(result.cut, field);
        assert_eq!(result.foreground_pixels, 0);
    }

    #[test]
    fn keeps_labels_until_reset() {
        let mut segmenter =
            MarkovFieldSegmenter::new(SegmentationConfig::default(), CutMode::default()).unwrap();
        assert!(segmenter.labels().is_none());

        let field = array![[0.0, 1.0]];
        let seeds = SeedBinding::with_seeds(PixelCoord::new(0, 0), PixelCoord::new(0, 1));
        let result = segmenter.segment(&field, &seeds).unwrap();
        assert_eq!(result.foreground_pixels, 1);
        assert_eq!(
            segmenter.labels(),
            Some(array![[Label::Foreground, Label::Background]])
        );

        segmenter.reset_labels();
        assert!(segmenter.labels().is_none());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SegmentationConfig {
            sigma_unary: -1.0,
            ..Default::default()
        };
        assert!(MarkovFieldSegmenter::new(config, CutMode::default()).is_err());
    }
}
