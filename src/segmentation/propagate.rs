use super::energy::energy;
use super::error::SegmentError;
use super::graph::{GridGraph, Node};
use super::seeds::SeedBinding;
use super::types::{Label, PixelCoord, SegmentationConfig};

/// What a propagation pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Completed { foreground: usize, background: usize },
    /// A seed was unbound, labels were left untouched
    Skipped,
}

/// Single labeling pass over every node
///
/// For each node, the energy against the source is compared with
/// `foreground_threshold` and may set the node to foreground. The energy
/// against the sink is then compared with `background_threshold` and may
/// set it back to background, so the sink wins when both pass. Nodes that
/// pass neither keep their current label.
///
/// An incomplete seed binding makes this a no-op.
pub fn propagate(
    graph: &mut GridGraph,
    seeds: &SeedBinding,
    config: &SegmentationConfig,
) -> Result<Propagation, SegmentError> {
    let _span = tracing::debug_span!("propagate").entered();

    let Some((source_at, sink_at)) = seeds.pair() else {
        tracing::warn!(
            "Skipping propagation: source={:?}, sink={:?}",
            seeds.source(),
            seeds.sink()
        );
        return Ok(Propagation::Skipped);
    };

    config.validate()?;
    let source = seed_node(graph, source_at, "source")?;
    let sink = seed_node(graph, sink_at, "sink")?;

    for ((row, col), node) in graph.nodes_mut().indexed_iter_mut() {
        let at = PixelCoord::new(row, col);
        if energy(node, at, &source, config)? < config.foreground_threshold {
            node.label = Label::Foreground;
        }
        if energy(node, at, &sink, config)? < config.background_threshold {
            node.label = Label::Background;
        }
    }

    let foreground = graph.count(Label::Foreground);
    let background = graph.count(Label::Background);
    tracing::debug!(
        "Propagation finished: {} foreground, {} background",
        foreground,
        background
    );

    Ok(Propagation::Completed {
        foreground,
        background,
    })
}

fn seed_node(graph: &GridGraph, at: PixelCoord, role: &str) -> Result<Node, SegmentError> {
    let (rows, cols) = graph.dim();
    graph.node(at).cloned().ok_or_else(|| {
        SegmentError::InvalidInput(format!(
            "{role} seed {at} is outside the {rows}x{cols} grid"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::types::IntensityField;
    use ndarray::array;

    fn two_tone() -> IntensityField {
        array![
            [0.1, 0.1, 0.9, 0.9],
            [0.1, 0.1, 0.9, 0.9],
            [0.1, 0.1, 0.9, 0.9]
        ]
    }

    #[test]
    fn unbound_seeds_leave_labels_alone() {
        let mut graph = GridGraph::build(&two_tone()).unwrap();
        let config = SegmentationConfig::default();

        let outcome = propagate(&mut graph, &SeedBinding::new(), &config).unwrap();
        assert_eq!(outcome, Propagation::Skipped);
        assert_eq!(graph.count(Label::Background), 12);

        let mut half = SeedBinding::new();
        half.bind_source(PixelCoord::new(0, 0));
        let outcome = propagate(&mut graph, &half, &config).unwrap();
        assert_eq!(outcome, Propagation::Skipped);
        assert_eq!(graph.count(Label::Foreground), 0);
    }

    #[test]
    fn sink_check_wins_when_both_pass() {
        let field = IntensityField::from_elem((3, 3), 0.5);
        let mut graph = GridGraph::build(&field).unwrap();
        let seeds = SeedBinding::with_seeds(PixelCoord::new(0, 0), PixelCoord::new(2, 2));

        let outcome = propagate(&mut graph, &seeds, &SegmentationConfig::default()).unwrap();
        assert_eq!(
            outcome,
            Propagation::Completed {
                foreground: 0,
                background: 9
            }
        );
    }

    #[test]
    fn lenient_sink_threshold_overrides_foreground() {
        let mut graph = GridGraph::build(&two_tone()).unwrap();
        let seeds = SeedBinding::with_seeds(PixelCoord::new(0, 0), PixelCoord::new(0, 3));
        let config = SegmentationConfig {
            background_threshold: 10.0,
            ..Default::default()
        };
        propagate(&mut graph, &seeds, &config).unwrap();
        assert_eq!(graph.count(Label::Foreground), 0);
    }

    #[test]
    fn source_region_becomes_foreground() {
        let mut graph = GridGraph::build(&two_tone()).unwrap();
        let seeds = SeedBinding::with_seeds(PixelCoord::new(1, 0), PixelCoord::new(1, 3));
        propagate(&mut graph, &seeds, &SegmentationConfig::default()).unwrap();

        let labels = graph.label_map();
        for ((_, col), label) in labels.indexed_iter() {
            let expected = if col < 2 {
                Label::Foreground
            } else {
                Label::Background
            };
            assert_eq!(*label, expected, "column {col}");
        }
    }

    #[test]
    fn repeated_passes_are_identical() {
        let field = array![[0.0, 0.3, 0.8], [0.2, 0.5, 1.0], [0.4, 0.6, 0.1]];
        let seeds = SeedBinding::with_seeds(PixelCoord::new(0, 0), PixelCoord::new(1, 2));
        let config = SegmentationConfig::default();

        let mut graph = GridGraph::build(&field).unwrap();
        let first = propagate(&mut graph, &seeds, &config).unwrap();
        let first_labels = graph.label_map();
        let second = propagate(&mut graph, &seeds, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_labels, graph.label_map());

        let mut fresh = GridGraph::build(&field).unwrap();
        propagate(&mut fresh, &seeds, &config).unwrap();
        assert_eq!(first_labels, fresh.label_map());
    }

    #[test]
    fn seed_outside_grid_is_rejected() {
        let mut graph = GridGraph::build(&two_tone()).unwrap();
        let seeds = SeedBinding::with_seeds(PixelCoord::new(0, 0), PixelCoord::new(3, 0));
        assert!(matches!(
            propagate(&mut graph, &seeds, &SegmentationConfig::default()),
            Err(SegmentError::InvalidInput(_))
        ));
    }

    #[test]
    fn single_pixel_graph_is_degenerate() {
        let mut graph = GridGraph::build(&array![[0.5]]).unwrap();
        let at = PixelCoord::new(0, 0);
        let seeds = SeedBinding::with_seeds(at, at);
        assert_eq!(
            propagate(&mut graph, &seeds, &SegmentationConfig::default()),
            Err(SegmentError::DegenerateNode { row: 0, col: 0 })
        );
    }
}
