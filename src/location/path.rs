use crate::graph::GraphId;

use serde::{Deserialize, Serialize};

/// One candidate edge of a correlated location.
///
/// `offset` is the fractional position of the snapped point along the
/// directed edge: `0.0` at the edge's start node, `1.0` at its end
/// node.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEdge {
    pub id: GraphId,
    pub offset: f64,
}

impl PathEdge {
    pub fn new(id: GraphId, offset: f64) -> Self {
        PathEdge {
            id,
            offset: offset.clamp(0.0, 1.0),
        }
    }

    /// The snap lies exactly on the edge's start node. Such an edge
    /// would have to be entered at its far end, so it is useless as a
    /// termination point.
    #[inline]
    pub fn begins_at_node(&self) -> bool {
        self.offset <= 0.0
    }

    /// The snap lies exactly on the edge's end node.
    #[inline]
    pub fn ends_at_node(&self) -> bool {
        self.offset >= 1.0
    }
}

/// A correlated input location: the ordered candidate edges produced
/// by snapping one requested point onto the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathLocation {
    pub edges: Vec<PathEdge>,
}

impl PathLocation {
    pub fn new(edges: Vec<PathEdge>) -> Self {
        PathLocation { edges }
    }

    /// A location with a single candidate edge.
    pub fn single(id: GraphId, offset: f64) -> Self {
        PathLocation {
            edges: vec![PathEdge::new(id, offset)],
        }
    }
}

impl FromIterator<PathEdge> for PathLocation {
    fn from_iter<T: IntoIterator<Item = PathEdge>>(iter: T) -> Self {
        PathLocation {
            edges: iter.into_iter().collect(),
        }
    }
}
