use crate::costing::{CostModel, EdgeLabel, TravelMode};
use crate::graph::{EdgeUse, GraphId, GraphTile, TileReader};
use crate::location::{approx_equal, Shape};
use crate::matcher::termination::TerminationSet;
use crate::matcher::{length_comparison, PathInfo};

use log::trace;
use smallvec::SmallVec;

/// Result of a successful walk: the termination node reached, plus the
/// elapsed time and previous-edge context the orchestrator needs to
/// finish the destination edge.
pub(crate) struct Walk {
    pub end_node: GraphId,
    pub elapsed: f64,
    pub label: EdgeLabel,
}

/// The recursive, backtracking edge expander.
///
/// Holds the per-call read-only context; all mutable walk state (the
/// committed path prefix, elapsed time, previous-edge label) travels
/// through [`EdgeWalker::expand`] so that sibling branches always see
/// fully-undone state: elapsed time and label are passed by value, and
/// the one committed `PathInfo` per frame is popped on failure.
pub(crate) struct EdgeWalker<'a, R>
where
    R: TileReader,
{
    reader: &'a R,
    model: &'a dyn CostModel,
    mode: TravelMode,
    shape: &'a Shape,
    end_nodes: &'a TerminationSet,
}

impl<'a, R> EdgeWalker<'a, R>
where
    R: TileReader,
{
    pub fn new(
        reader: &'a R,
        model: &'a dyn CostModel,
        mode: TravelMode,
        shape: &'a Shape,
        end_nodes: &'a TerminationSet,
    ) -> Self {
        EdgeWalker {
            reader,
            model,
            mode,
            shape,
            end_nodes,
        }
    }

    /// Expands outgoing edges of `node`, keeping pace with the shape
    /// from `shape_index`. Returns the walk on reaching a termination
    /// node, or `None` once every candidate edge is exhausted.
    ///
    /// `from_transition` marks that the previous hop was a hierarchy
    /// transition; transitions may not chain without an intervening
    /// real edge.
    #[allow(clippy::too_many_arguments)]
    pub fn expand(
        &self,
        tile: &GraphTile,
        node: GraphId,
        shape_index: usize,
        elapsed: f64,
        previous: EdgeLabel,
        from_transition: bool,
        path: &mut Vec<PathInfo>,
    ) -> Option<Walk> {
        // Reaching a termination node ends the walk without consuming
        // further shape.
        if self.end_nodes.contains_key(&node) {
            return Some(Walk {
                end_node: node,
                elapsed,
                label: previous,
            });
        }

        let node_info = tile.node(&node)?;

        // Edges shorter than the coordinate tolerance would let the
        // walk oscillate across a micro-loop; refuse to re-commit
        // either of the last two edges.
        let recent: SmallVec<[GraphId; 2]> =
            path.iter().rev().take(2).map(|info| info.edge_id).collect();

        for edge_id in node_info.edges(&node) {
            let Some(edge) = tile.directed_edge(&edge_id) else {
                continue;
            };

            // Shortcuts and transit connections never follow the shape.
            if edge.is_shortcut() || edge.use_class == EdgeUse::TransitConnection {
                continue;
            }

            if recent.contains(&edge_id) {
                continue;
            }

            // Hierarchy transitions hop levels in place: recurse at the
            // same shape position, unless the previous hop already was
            // a transition.
            if edge.is_transition() {
                if from_transition {
                    continue;
                }

                let Some(end_tile) = self.reader.tile(&edge.end_node) else {
                    continue;
                };

                match self.expand(
                    end_tile,
                    edge.end_node,
                    shape_index,
                    elapsed,
                    previous,
                    true,
                    path,
                ) {
                    Some(walk) => return Some(walk),
                    None => continue,
                }
            }

            // A tile miss here only rules this candidate out; the
            // walk itself continues.
            let Some(end_tile) = self.reader.tile(&edge.end_node) else {
                trace!("Tile for {} absent, skipping candidate", edge.end_node);
                continue;
            };
            let Some(end_info) = end_tile.node(&edge.end_node) else {
                continue;
            };

            let window = length_comparison(edge.length, true);

            // Scan shape points until the edge's end node is met, or
            // the shape has travelled farther than the edge plausibly
            // covers.
            let mut length = 0.0;
            let mut index = shape_index + 1;
            while index < self.shape.len() {
                length += self.shape.distance(index);
                if length > window {
                    break;
                }

                if approx_equal(self.shape.point(index), &end_info.position) {
                    let transition = self.model.transition_cost(edge, node_info, &previous);
                    let traversal = self.model.edge_cost(edge);
                    let elapsed = elapsed + transition.secs + traversal.secs;

                    path.push(PathInfo::new(self.mode, elapsed, edge_id));
                    let label = EdgeLabel::new(edge_id, *edge, self.mode);

                    match self.expand(end_tile, edge.end_node, index, elapsed, label, false, path)
                    {
                        Some(walk) => return Some(walk),
                        None => {
                            // Dead end past a matched end node: undo
                            // the commit and move to the next candidate
                            // edge rather than a later shape point.
                            path.pop();
                            break;
                        }
                    }
                }

                index += 1;
            }
        }

        None
    }
}
