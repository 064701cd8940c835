use crate::graph::{DirectedEdge, GraphId, GraphTile};

use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

/// Read-only boundary to tiled graph storage.
///
/// Implementations may page tiles from an LRU cache, a mmap, or hold a
/// pre-loaded region in memory; the matcher never assumes presence.
/// `None` from either accessor is an ordinary outcome for ids outside
/// the paged region.
pub trait TileReader {
    /// The tile owning `id`, if paged in.
    fn tile(&self, id: &GraphId) -> Option<&GraphTile>;

    /// The reverse counterpart of a directed edge: the edge leaving the
    /// end node that returns along the same way. Needed to find the
    /// start node of an edge, which tiles do not record directly.
    fn opposing_edge(&self, id: &GraphId) -> Option<&DirectedEdge>;
}

/// In-memory [`TileReader`] over a fixed set of tiles, keyed by tile
/// base id. The natural container for pre-paged regions and fixtures.
#[derive(Default)]
pub struct TileSet {
    tiles: FxHashMap<GraphId, GraphTile>,
}

impl Debug for TileSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TileSet with {} tiles", self.tiles.len())
    }
}

impl TileSet {
    pub fn new() -> Self {
        TileSet::default()
    }

    /// Inserts a tile, replacing any previous page with the same base.
    pub fn insert(&mut self, tile: GraphTile) {
        self.tiles.insert(tile.id(), tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileReader for TileSet {
    #[inline]
    fn tile(&self, id: &GraphId) -> Option<&GraphTile> {
        self.tiles.get(&id.tile_base())
    }

    fn opposing_edge(&self, id: &GraphId) -> Option<&DirectedEdge> {
        let tile = self.tile(id)?;
        let edge = tile.directed_edge(id)?;
        let (source, _) = tile.edge_source(id.index())?;

        // The opposing edge leaves the end node, returns to the source
        // and covers the same way.
        let end_tile = self.tile(&edge.end_node)?;
        let end_node = end_tile.node(&edge.end_node)?;
        end_node
            .edges(&edge.end_node)
            .find_map(|candidate_id| {
                let candidate = end_tile.directed_edge(&candidate_id)?;
                (candidate.end_node == source
                    && candidate.use_class == edge.use_class
                    && (candidate.length - edge.length).abs() <= 1e-6)
                    .then_some(candidate)
            })
    }
}
