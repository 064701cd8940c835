use crate::graph::GraphId;

use geo::Point;

/// A graph node: a position plus the contiguous range of outbound
/// directed edges within the owning tile.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NodeInfo {
    pub position: Point<f64>,

    /// Index of the first outbound edge within the owning tile.
    pub edge_index: u32,

    /// Number of outbound edges.
    pub edge_count: u32,
}

impl NodeInfo {
    pub fn new(position: Point<f64>, edge_index: u32, edge_count: u32) -> Self {
        NodeInfo {
            position,
            edge_index,
            edge_count,
        }
    }

    /// Identifiers of the node's outbound edges, in tile-native order.
    /// `node` supplies the owning tile and level.
    pub fn edges(&self, node: &GraphId) -> impl Iterator<Item = GraphId> + '_ {
        let node = *node;
        (self.edge_index..self.edge_index + self.edge_count).map(move |index| node.with_index(index))
    }

    /// Whether an edge index falls within this node's outbound range.
    #[inline]
    pub fn owns_edge(&self, index: u32) -> bool {
        index >= self.edge_index && index < self.edge_index + self.edge_count
    }
}
