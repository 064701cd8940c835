use crate::costing::{
    BicycleCost, CarCost, Cost, CostModel, EdgeLabel, ModeCosting, PedestrianCost, TravelMode,
};
use crate::graph::{DirectedEdge, GraphId, NodeInfo};

use approx::assert_relative_eq;
use geo::Point;

fn edge(length: f64, speed: f64) -> DirectedEdge {
    DirectedEdge::new(GraphId::new(0, 1, 1), length, speed)
}

#[test]
fn car_prices_at_edge_speed() {
    // 100m at 36km/h is 10s.
    let cost = CarCost::default().edge_cost(&edge(100.0, 36.0));
    assert_relative_eq!(cost.secs, 10.0);
    assert_relative_eq!(cost.cost, 10.0);
}

#[test]
fn bicycle_caps_edge_speed() {
    let model = BicycleCost::default();

    // 100m at min(100, 18)km/h = 5m/s is 20s.
    assert_relative_eq!(model.edge_cost(&edge(100.0, 100.0)).secs, 20.0);
    // Slower edges price at their own speed.
    assert_relative_eq!(model.edge_cost(&edge(100.0, 9.0)).secs, 40.0);
}

#[test]
fn pedestrian_junctions_are_free() {
    let model = PedestrianCost::default();
    let label = EdgeLabel::new(GraphId::new(0, 1, 0), edge(10.0, 50.0), TravelMode::Pedestrian);
    let node = NodeInfo::new(Point::new(0.0, 0.0), 0, 1);

    let transition = model.transition_cost(&edge(10.0, 50.0), &node, &label);
    assert_relative_eq!(transition.secs, 0.0);
}

#[test]
fn cost_accumulates() {
    let mut total = Cost::seconds(2.5);
    total += Cost::new(1.5, 3.0);

    assert_relative_eq!(total.secs, 4.0);
    assert_relative_eq!(total.cost, 5.5);
    assert_relative_eq!((total + Cost::seconds(1.0)).secs, 5.0);
}

#[test]
fn default_registry_covers_all_modes() {
    let costing = ModeCosting::default();

    for mode in [TravelMode::Car, TravelMode::Bicycle, TravelMode::Pedestrian] {
        assert!(costing.model(mode).is_some(), "no model for {mode}");
    }
}

#[test]
fn empty_registry_has_no_models() {
    assert!(ModeCosting::empty().model(TravelMode::Car).is_none());
}

#[test]
fn registry_overrides_replace() {
    struct FreeCost;

    impl CostModel for FreeCost {
        fn edge_cost(&self, _edge: &DirectedEdge) -> Cost {
            Cost::default()
        }

        fn transition_cost(
            &self,
            _edge: &DirectedEdge,
            _node: &NodeInfo,
            _previous: &EdgeLabel,
        ) -> Cost {
            Cost::default()
        }
    }

    let costing = ModeCosting::default().with(TravelMode::Car, FreeCost);
    let model = costing.model(TravelMode::Car).expect("car model");

    assert_relative_eq!(model.edge_cost(&edge(100.0, 36.0)).secs, 0.0);
}
