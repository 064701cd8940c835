use crate::graph::{GraphId, TileReader};
use crate::location::{PathEdge, PathLocation};
use crate::matcher::MatchError;

use log::trace;
use rustc_hash::FxHashMap;

/// Nodes at which the edge walk must stop, each mapped to the
/// destination candidate edge completed once the node is reached.
pub(crate) type TerminationSet = FxHashMap<GraphId, PathEdge>;

/// Builds the termination set from the destination's candidate edges.
///
/// The walk approaches a destination edge through its *start* node:
/// for a candidate ending partway along its edge that node is found
/// through the opposing edge, while a candidate snapped exactly onto
/// its end node terminates there directly. Candidates snapped onto
/// their start node would have to be entered backwards and are skipped.
pub(crate) fn build_termination_set<R>(
    reader: &R,
    destination: &PathLocation,
) -> Result<TerminationSet, MatchError>
where
    R: TileReader,
{
    let mut end_nodes = TerminationSet::default();

    for edge in &destination.edges {
        if edge.begins_at_node() || !edge.id.is_valid() {
            continue;
        }

        if edge.ends_at_node() {
            let tile = reader
                .tile(&edge.id)
                .ok_or(MatchError::MissingTile(edge.id))?;

            let Some(directed_edge) = tile.directed_edge(&edge.id) else {
                trace!("Destination candidate {} not present in its tile", edge.id);
                continue;
            };

            end_nodes.insert(directed_edge.end_node, *edge);
        } else {
            let opposing = reader
                .opposing_edge(&edge.id)
                .ok_or(MatchError::OpposingEdgeLookupFailed(edge.id))?;

            // The opposing edge's end node is the candidate's start node.
            end_nodes.insert(opposing.end_node, *edge);
        }
    }

    if end_nodes.is_empty() {
        return Err(MatchError::NoValidEndEdge);
    }

    Ok(end_nodes)
}
