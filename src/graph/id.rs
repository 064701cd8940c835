use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const LEVEL_BITS: u64 = 3;
const TILE_BITS: u64 = 22;
const INDEX_BITS: u64 = 21;

const LEVEL_MASK: u64 = (1 << LEVEL_BITS) - 1;
const TILE_MASK: u64 = (1 << TILE_BITS) - 1;
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;

/// The all-ones bit pattern, reserved as the invalid identifier.
const INVALID: u64 = (1 << (LEVEL_BITS + TILE_BITS + INDEX_BITS)) - 1;

/// Packed identifier addressing tiles, nodes and directed edges.
///
/// Composed of a hierarchy level, a tile id and an index within the
/// owning tile. Nodes and edges are indexed in separate spaces, so the
/// same `GraphId` value may name a node or an edge depending on where
/// it is resolved.
///
/// [`GraphId::is_valid`] is a purely syntactic predicate: a valid id
/// may still resolve to nothing when the backing tile is not paged in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(u64);

impl Default for GraphId {
    fn default() -> Self {
        GraphId::invalid()
    }
}

impl GraphId {
    pub fn new(level: u8, tile: u32, index: u32) -> Self {
        GraphId(
            (level as u64 & LEVEL_MASK)
                | ((tile as u64 & TILE_MASK) << LEVEL_BITS)
                | ((index as u64 & INDEX_MASK) << (LEVEL_BITS + TILE_BITS)),
        )
    }

    /// The invalid sentinel identifier.
    pub fn invalid() -> Self {
        GraphId(INVALID)
    }

    /// Hierarchy level of the owning tile.
    #[inline]
    pub fn level(&self) -> u8 {
        (self.0 & LEVEL_MASK) as u8
    }

    /// Tile id within the level.
    #[inline]
    pub fn tile(&self) -> u32 {
        ((self.0 >> LEVEL_BITS) & TILE_MASK) as u32
    }

    /// Index of the node or edge within the owning tile.
    #[inline]
    pub fn index(&self) -> u32 {
        ((self.0 >> (LEVEL_BITS + TILE_BITS)) & INDEX_MASK) as u32
    }

    /// Whether the identifier is syntactically well-formed. Distinct
    /// from tile presence.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != INVALID
    }

    /// The id of the owning tile page: same level and tile, index zero.
    #[inline]
    pub fn tile_base(&self) -> GraphId {
        GraphId(self.0 & !(INDEX_MASK << (LEVEL_BITS + TILE_BITS)))
    }

    /// An id within the same tile at a different index. Used to walk a
    /// node's contiguous outbound edge range.
    #[inline]
    pub fn with_index(&self, index: u32) -> GraphId {
        GraphId(self.tile_base().0 | ((index as u64 & INDEX_MASK) << (LEVEL_BITS + TILE_BITS)))
    }
}

impl Display for GraphId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.level(), self.tile(), self.index())
    }
}
