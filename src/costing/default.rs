use crate::costing::{Cost, CostModel, EdgeLabel, TravelMode};
use crate::graph::{DirectedEdge, NodeInfo};

use rustc_hash::FxHashMap;

const KPH_TO_MPS: f64 = 1.0 / 3.6;

/// Drives at the edge's typical speed, with a fixed per-junction
/// penalty.
pub struct CarCost {
    turn_penalty: f64,
}

impl Default for CarCost {
    fn default() -> Self {
        CarCost { turn_penalty: 2.0 }
    }
}

impl CostModel for CarCost {
    fn edge_cost(&self, edge: &DirectedEdge) -> Cost {
        Cost::seconds(edge.length / (edge.speed * KPH_TO_MPS))
    }

    fn transition_cost(&self, _edge: &DirectedEdge, _node: &NodeInfo, _previous: &EdgeLabel) -> Cost {
        Cost::seconds(self.turn_penalty)
    }
}

/// Rides at the edge speed capped to a cruising speed.
pub struct BicycleCost {
    cruising_kph: f64,
}

impl Default for BicycleCost {
    fn default() -> Self {
        BicycleCost { cruising_kph: 18.0 }
    }
}

impl CostModel for BicycleCost {
    fn edge_cost(&self, edge: &DirectedEdge) -> Cost {
        let speed = edge.speed.min(self.cruising_kph);
        Cost::seconds(edge.length / (speed * KPH_TO_MPS))
    }

    fn transition_cost(&self, _edge: &DirectedEdge, _node: &NodeInfo, _previous: &EdgeLabel) -> Cost {
        Cost::seconds(1.0)
    }
}

/// Walks at a fixed speed, junctions are free.
pub struct PedestrianCost {
    walking_kph: f64,
}

impl Default for PedestrianCost {
    fn default() -> Self {
        PedestrianCost { walking_kph: 5.1 }
    }
}

impl CostModel for PedestrianCost {
    fn edge_cost(&self, edge: &DirectedEdge) -> Cost {
        Cost::seconds(edge.length / (self.walking_kph * KPH_TO_MPS))
    }

    fn transition_cost(&self, _edge: &DirectedEdge, _node: &NodeInfo, _previous: &EdgeLabel) -> Cost {
        Cost::default()
    }
}

/// Registry of cost models, one per [`TravelMode`].
///
/// Models are injected by mode rather than positionally indexed, so a
/// caller may register any subset of modes, or override a default with
/// its own [`CostModel`].
pub struct ModeCosting {
    models: FxHashMap<TravelMode, Box<dyn CostModel>>,
}

impl ModeCosting {
    /// An empty registry with no modes wired.
    pub fn empty() -> Self {
        ModeCosting {
            models: FxHashMap::default(),
        }
    }

    /// Registers (or replaces) the model for a mode.
    pub fn with(mut self, mode: TravelMode, model: impl CostModel + 'static) -> Self {
        self.models.insert(mode, Box::new(model));
        self
    }

    /// The model registered for `mode`, if any.
    pub fn model(&self, mode: TravelMode) -> Option<&dyn CostModel> {
        self.models.get(&mode).map(|model| model.as_ref())
    }
}

impl Default for ModeCosting {
    fn default() -> Self {
        ModeCosting::empty()
            .with(TravelMode::Car, CarCost::default())
            .with(TravelMode::Bicycle, BicycleCost::default())
            .with(TravelMode::Pedestrian, PedestrianCost::default())
    }
}
