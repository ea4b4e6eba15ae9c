use super::error::SegmentError;
use super::types::{IntensityField, Label, PixelCoord};
use ndarray::Array2;

/// Upper bound on neighbors in a 4-connected grid
pub const MAX_NEIGHBORS: usize = 4;

/// Weighted link to an adjacent pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: PixelCoord,
    /// Absolute intensity difference between the two endpoints
    pub weight: f32,
}

/// One pixel of the grid graph
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub label: Label,
    intensity: f32,
    edges: [Option<Edge>; MAX_NEIGHBORS],
    degree: usize,
}

impl Node {
    fn new(intensity: f32) -> Self {
        Self {
            label: Label::Background,
            intensity,
            edges: [None; MAX_NEIGHBORS],
            degree: 0,
        }
    }

    fn push_edge(&mut self, edge: Edge) {
        self.edges[self.degree] = Some(edge);
        self.degree += 1;
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten()
    }

    /// Weight of the edge to `to`, if the two pixels are adjacent
    pub fn weight_to(&self, to: PixelCoord) -> Option<f32> {
        self.edges().find(|e| e.to == to).map(|e| e.weight)
    }

    /// Mean of the stored edge weights
    ///
    /// This is the mean absolute intensity step to the immediate neighbors,
    /// a local roughness measure. It is fixed at build time and does not
    /// depend on labels.
    pub fn average_weight(&self, at: PixelCoord) -> Result<f32, SegmentError> {
        if self.degree == 0 {
            return Err(SegmentError::DegenerateNode {
                row: at.row,
                col: at.col,
            });
        }
        let sum: f32 = self.edges().map(|e| e.weight).sum();
        Ok(sum / self.degree as f32)
    }
}

/// 4-connected pixel graph, one node per pixel
///
/// The graph owns every node; adjacency is stored as coordinates, so nodes
/// never reference each other directly. Dimensions are fixed at build time.
#[derive(Debug, Clone)]
pub struct GridGraph {
    nodes: Array2<Node>,
}

impl GridGraph {
    /// Build the graph for a normalized intensity field
    ///
    /// Every node starts labeled background. Each in-bounds axis-aligned
    /// neighbor gets an edge weighted by `|a - b|`, evaluated from both ends.
    pub fn build(field: &IntensityField) -> Result<Self, SegmentError> {
        let _span = tracing::debug_span!("build_graph").entered();

        let (rows, cols) = field.dim();
        if rows == 0 || cols == 0 {
            return Err(SegmentError::InvalidInput(format!(
                "intensity field is empty ({rows}x{cols})"
            )));
        }
        if let Some(((row, col), value)) = field
            .indexed_iter()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(SegmentError::InvalidInput(format!(
                "intensity {value} at ({row}, {col}) is outside [0, 1]"
            )));
        }

        let mut nodes = field.map(|&v| Node::new(v));

        for row in 0..rows {
            for col in 0..cols {
                let here = field[[row, col]];
                let mut neighbors = [None; MAX_NEIGHBORS];
                if row > 0 {
                    neighbors[0] = Some(PixelCoord::new(row - 1, col));
                }
                if row + 1 < rows {
                    neighbors[1] = Some(PixelCoord::new(row + 1, col));
                }
                if col > 0 {
                    neighbors[2] = Some(PixelCoord::new(row, col - 1));
                }
                if col + 1 < cols {
                    neighbors[3] = Some(PixelCoord::new(row, col + 1));
                }

                let node = &mut nodes[[row, col]];
                for to in neighbors.into_iter().flatten() {
                    let there = field[[to.row, to.col]];
                    node.push_edge(Edge {
                        to,
                        weight: (here - there).abs(),
                    });
                }
            }
        }

        tracing::debug!("Built {}x{} grid graph", rows, cols);

        Ok(Self { nodes })
    }

    /// Returns (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.nodes.dim()
    }

    pub fn node(&self, at: PixelCoord) -> Option<&Node> {
        self.nodes.get([at.row, at.col])
    }

    pub fn node_mut(&mut self, at: PixelCoord) -> Option<&mut Node> {
        self.nodes.get_mut([at.row, at.col])
    }

    pub fn nodes(&self) -> &Array2<Node> {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Array2<Node> {
        &mut self.nodes
    }

    pub fn label_map(&self) -> Array2<Label> {
        self.nodes.map(|n| n.label)
    }

    pub fn count(&self, label: Label) -> usize {
        self.nodes.iter().filter(|n| n.label == label).count()
    }

    /// Put every node back to background
    pub fn reset_labels(&mut self) {
        self.nodes.iter_mut().for_each(|n| n.label = Label::Background);
    }
}
