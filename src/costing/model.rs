use crate::costing::TravelMode;
use crate::graph::{DirectedEdge, GraphId, NodeInfo};

use std::ops::{Add, AddAssign};

/// Price of traversing an edge or an inter-edge transition.
///
/// `secs` feeds the elapsed-time accumulator; `cost` is the model's
/// own unit-less weighting, carried for callers that rank paths.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Cost {
    pub secs: f64,
    pub cost: f64,
}

impl Cost {
    pub fn new(secs: f64, cost: f64) -> Self {
        Cost { secs, cost }
    }

    /// Uniform cost where the weighting equals the traversal seconds.
    pub fn seconds(secs: f64) -> Self {
        Cost { secs, cost: secs }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost {
            secs: self.secs + rhs.secs,
            cost: self.cost + rhs.cost,
        }
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        self.secs += rhs.secs;
        self.cost += rhs.cost;
    }
}

/// Context of the previously committed edge, supplied to
/// [`CostModel::transition_cost`] when pricing the move onto the next
/// edge. Ephemeral: recreated every time an edge is committed, never
/// persisted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeLabel {
    pub edge_id: GraphId,
    pub edge: DirectedEdge,
    pub mode: TravelMode,
}

impl EdgeLabel {
    pub fn new(edge_id: GraphId, edge: DirectedEdge, mode: TravelMode) -> Self {
        EdgeLabel {
            edge_id,
            edge,
            mode,
        }
    }
}

/// Per-mode pricing of edge traversals and inter-edge transitions.
///
/// Both methods are pure from the matcher's perspective: no observable
/// side effects flow back into the walk.
pub trait CostModel: Send + Sync {
    /// Cost of traversing the full edge.
    fn edge_cost(&self, edge: &DirectedEdge) -> Cost;

    /// Cost of moving from the previously committed edge onto `edge`
    /// through the node joining them.
    fn transition_cost(&self, edge: &DirectedEdge, node: &NodeInfo, previous: &EdgeLabel) -> Cost;
}
