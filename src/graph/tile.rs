use crate::graph::{DirectedEdge, GraphId, NodeInfo};

use std::fmt::{Debug, Formatter};

/// An immutable page of graph data for one (tile id, level) pair.
///
/// Nodes and directed edges are stored in parallel index spaces;
/// a node's outbound edges occupy a contiguous run of the edge array.
/// Tiles are owned by the storage collaborator and only ever borrowed
/// by the matcher for the duration of one call.
pub struct GraphTile {
    id: GraphId,
    nodes: Vec<NodeInfo>,
    edges: Vec<DirectedEdge>,
}

impl Debug for GraphTile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraphTile {} with {} nodes, {} edges",
            self.id,
            self.nodes.len(),
            self.edges.len()
        )
    }
}

impl GraphTile {
    pub fn new(id: GraphId, nodes: Vec<NodeInfo>, edges: Vec<DirectedEdge>) -> Self {
        GraphTile {
            id: id.tile_base(),
            nodes,
            edges,
        }
    }

    /// The tile's base identifier (index zero).
    #[inline]
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Node record by the index carried in `id`.
    #[inline]
    pub fn node(&self, id: &GraphId) -> Option<&NodeInfo> {
        self.nodes.get(id.index() as usize)
    }

    /// Directed edge record by the index carried in `id`.
    #[inline]
    pub fn directed_edge(&self, id: &GraphId) -> Option<&DirectedEdge> {
        self.edges.get(id.index() as usize)
    }

    pub fn nodes(&self) -> &[NodeInfo] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    /// The node owning the outbound edge at `index`, as (id, record).
    pub fn edge_source(&self, index: u32) -> Option<(GraphId, &NodeInfo)> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.owns_edge(index))
            .map(|(position, node)| (self.id.with_index(position as u32), node))
    }
}
