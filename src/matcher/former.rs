use crate::costing::{CostModel, EdgeLabel, ModeCosting, TravelMode};
use crate::graph::TileReader;
use crate::location::{approx_equal, PathLocation, Shape};
use crate::matcher::termination::{build_termination_set, TerminationSet};
use crate::matcher::walker::{EdgeWalker, Walk};
use crate::matcher::{length_comparison, MatchError, PathInfo};

use log::{debug, info};
#[cfg(feature = "tracing")]
use tracing::Level;

/// Matches a trusted route shape to the exact edge sequence that
/// produced it.
///
/// Borrows the tiled storage and the costing registry for its
/// lifetime; each [`RouteMatcher::form_path`] call is independent,
/// synchronous and shares no mutable state, so one matcher may serve
/// concurrent calls freely.
pub struct RouteMatcher<'a, R>
where
    R: TileReader,
{
    reader: &'a R,
    costing: &'a ModeCosting,
    mode: TravelMode,
}

impl<'a, R> RouteMatcher<'a, R>
where
    R: TileReader,
{
    pub fn new(reader: &'a R, costing: &'a ModeCosting, mode: TravelMode) -> Self {
        RouteMatcher {
            reader,
            costing,
            mode,
        }
    }

    /// Walks the graph along `shape` from the origin candidates until a
    /// destination candidate is completed.
    ///
    /// Returns the ordered path on success and `Ok(None)` when no start
    /// candidate leads to a full walk; the caller is expected to fall
    /// back to a tolerant matching strategy on `None`. `Err` is
    /// reserved for the hard precondition and storage failures of
    /// [`MatchError`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn form_path(
        &self,
        shape: impl Into<Shape>,
        origin: &PathLocation,
        destination: &PathLocation,
    ) -> Result<Option<Vec<PathInfo>>, MatchError> {
        let model = self
            .costing
            .model(self.mode)
            .ok_or(MatchError::UnsupportedMode(self.mode))?;

        // Consecutive point distances are computed once per call.
        let shape: Shape = shape.into();
        info!("Matching shape of {} positions", shape.len());

        let end_nodes = build_termination_set(self.reader, destination)?;
        let walker = EdgeWalker::new(self.reader, model, self.mode, &shape, &end_nodes);

        for edge in &origin.edges {
            // The origin must be entered partway along its edge; an
            // inbound-only candidate cannot begin a walk.
            if edge.ends_at_node() {
                continue;
            }

            if !edge.id.is_valid() {
                return Err(MatchError::InvalidBeginEdge(edge.id));
            }

            let tile = self
                .reader
                .tile(&edge.id)
                .ok_or(MatchError::MissingTile(edge.id))?;
            let begin_edge = tile
                .directed_edge(&edge.id)
                .ok_or(MatchError::InvalidBeginEdge(edge.id))?;

            let end_tile = self
                .reader
                .tile(&begin_edge.end_node)
                .ok_or(MatchError::MissingTile(begin_edge.end_node))?;
            let end_info = end_tile
                .node(&begin_edge.end_node)
                .ok_or(MatchError::MissingTile(begin_edge.end_node))?;

            // Only the remaining (1 - offset) span of the begin edge
            // has to be covered by the shape.
            let window = length_comparison(begin_edge.length * (1.0 - edge.offset), true);

            let mut path: Vec<PathInfo> = Vec::new();
            let mut length = 0.0;
            let mut index = 0;
            while index < shape.len() {
                length += shape.distance(index);
                if length > window {
                    break;
                }

                if approx_equal(shape.point(index), &end_info.position) {
                    let elapsed = model.edge_cost(begin_edge).secs * (1.0 - edge.offset);
                    path.push(PathInfo::new(self.mode, elapsed, edge.id));
                    let label = EdgeLabel::new(edge.id, *begin_edge, self.mode);

                    let Some(walk) = walker.expand(
                        end_tile,
                        begin_edge.end_node,
                        index,
                        elapsed,
                        label,
                        false,
                        &mut path,
                    ) else {
                        // A begin-edge match commits: a failed walk past
                        // it fails the call, it is not retried from
                        // another start candidate.
                        debug!("Walk from begin edge {} found no end edge", edge.id);
                        return Ok(None);
                    };

                    return self.complete(model, &end_nodes, walk, path);
                }

                index += 1;
            }

            // The shape never reached the begin edge's end node: the
            // destination may lie on this same edge, with no
            // intervening node.
            for end in end_nodes.values() {
                if end.id == edge.id {
                    let elapsed = model.edge_cost(begin_edge).secs * (end.offset - edge.offset);
                    path.push(PathInfo::new(self.mode, elapsed, edge.id));
                    return Ok(Some(path));
                }
            }
        }

        debug!("No start candidate matched the shape");
        Ok(None)
    }

    /// Finishes a successful walk by pricing and appending the partial
    /// destination edge, unless the destination sits exactly on the
    /// termination node.
    fn complete(
        &self,
        model: &dyn CostModel,
        end_nodes: &TerminationSet,
        walk: Walk,
        mut path: Vec<PathInfo>,
    ) -> Result<Option<Vec<PathInfo>>, MatchError> {
        let Some(end) = end_nodes.get(&walk.end_node) else {
            return Ok(None);
        };

        if end.ends_at_node() {
            return Ok(Some(path));
        }

        let tile = self
            .reader
            .tile(&end.id)
            .ok_or(MatchError::MissingTile(end.id))?;
        let end_edge = tile
            .directed_edge(&end.id)
            .ok_or(MatchError::MissingTile(end.id))?;
        let node_info = tile
            .node(&walk.end_node)
            .ok_or(MatchError::MissingTile(walk.end_node))?;

        let transition = model.transition_cost(end_edge, node_info, &walk.label);
        let traversal = model.edge_cost(end_edge);
        let elapsed = walk.elapsed + transition.secs + traversal.secs * end.offset;

        path.push(PathInfo::new(self.mode, elapsed, end.id));
        Ok(Some(path))
    }
}
