use crate::costing::TravelMode;
use crate::graph::GraphId;

use serde::{Deserialize, Serialize};

/// One committed step of a matched path.
///
/// Entries are ordered origin to destination; `elapsed_secs` is the
/// cumulative traversal time up to and including this edge, rounded to
/// whole seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInfo {
    pub mode: TravelMode,
    pub elapsed_secs: u32,
    pub edge_id: GraphId,

    /// Reserved restriction slot, always zero.
    pub restriction: u8,
}

impl PathInfo {
    pub(crate) fn new(mode: TravelMode, elapsed: f64, edge_id: GraphId) -> Self {
        PathInfo {
            mode,
            elapsed_secs: elapsed.round() as u32,
            edge_id,
            restriction: 0,
        }
    }
}
