use crate::costing::TravelMode;
use crate::graph::GraphId;

use std::fmt::{Display, Formatter};

/// Hard failures of a match call.
///
/// Every variant indicates a violated precondition or unavailable
/// storage, never an ordinary "the shape did not match": that outcome
/// is the `Ok(None)` return of
/// [`RouteMatcher::form_path`](crate::matcher::RouteMatcher::form_path).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The destination has no structurally usable candidate edge.
    NoValidEndEdge,

    /// A destination candidate ends partway along its edge and the
    /// opposing edge needed to locate its start node could not be
    /// resolved.
    OpposingEdgeLookupFailed(GraphId),

    /// An origin candidate carries an invalid or unresolvable edge id.
    InvalidBeginEdge(GraphId),

    /// A tile required to resolve a start or end edge is not paged in.
    MissingTile(GraphId),

    /// No cost model is registered for the requested travel mode.
    UnsupportedMode(TravelMode),
}

impl Display for MatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::NoValidEndEdge => write!(f, "no valid end edges found"),
            MatchError::OpposingEdgeLookupFailed(id) => {
                write!(f, "could not resolve the opposing edge of {id}")
            }
            MatchError::InvalidBeginEdge(id) => write!(f, "invalid begin edge {id}"),
            MatchError::MissingTile(id) => write!(f, "tile for {id} is not available"),
            MatchError::UnsupportedMode(mode) => {
                write!(f, "no cost model registered for mode {mode}")
            }
        }
    }
}

impl std::error::Error for MatchError {}
