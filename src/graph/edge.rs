use crate::graph::GraphId;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification of a directed edge's use.
///
/// Transition edges link the same physical location across two
/// hierarchy levels and carry no geometry of their own; transit
/// connections join the road network to transit stops. Neither is a
/// valid shape-following step.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum EdgeUse {
    #[default]
    Road,
    TransitConnection,
    TransitionUp,
    TransitionDown,
}

/// One directed, traversable edge within a tile.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// Node the edge leads into. May live in another tile.
    pub end_node: GraphId,

    /// Edge length in metres.
    pub length: f64,

    /// Typical traversal speed in km/h. Opaque to the matcher; read
    /// only by cost models when pricing the edge.
    pub speed: f64,

    pub use_class: EdgeUse,

    /// Precomputed multi-edge shortcut, never a unit of shape matching.
    pub shortcut: bool,
}

impl DirectedEdge {
    pub fn new(end_node: GraphId, length: f64, speed: f64) -> Self {
        DirectedEdge {
            end_node,
            length,
            speed,
            use_class: EdgeUse::Road,
            shortcut: false,
        }
    }

    pub fn with_use(mut self, use_class: EdgeUse) -> Self {
        self.use_class = use_class;
        self
    }

    pub fn as_shortcut(mut self) -> Self {
        self.shortcut = true;
        self
    }

    #[inline]
    pub fn is_shortcut(&self) -> bool {
        self.shortcut
    }

    /// Whether the edge hops between hierarchy levels.
    #[inline]
    pub fn is_transition(&self) -> bool {
        matches!(
            self.use_class,
            EdgeUse::TransitionUp | EdgeUse::TransitionDown
        )
    }
}
