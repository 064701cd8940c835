use crate::graph::{DirectedEdge, EdgeUse, GraphId, GraphTile, NodeInfo, TileReader, TileSet};

use geo::Point;

#[test]
fn id_packs_and_unpacks() {
    let id = GraphId::new(2, 719_528, 41);

    assert_eq!(id.level(), 2);
    assert_eq!(id.tile(), 719_528);
    assert_eq!(id.index(), 41);
    assert!(id.is_valid());
}

#[test]
fn id_tile_base_strips_index() {
    let id = GraphId::new(1, 12, 9);
    let base = id.tile_base();

    assert_eq!(base.level(), 1);
    assert_eq!(base.tile(), 12);
    assert_eq!(base.index(), 0);
    assert_eq!(id.with_index(0), base);
    assert_eq!(base.with_index(9), id);
}

#[test]
fn invalid_id_is_not_valid() {
    assert!(!GraphId::invalid().is_valid());
    assert!(!GraphId::default().is_valid());
    assert!(GraphId::new(0, 0, 0).is_valid());
}

#[test]
fn ids_on_distinct_levels_differ() {
    // Tiles with the same tile id on two levels must page separately.
    let lower = GraphId::new(0, 7, 0);
    let upper = GraphId::new(1, 7, 0);

    assert_ne!(lower.tile_base(), upper.tile_base());
}

/// Two nodes joined by a forward/reverse edge pair.
fn paired_tile(tile_id: GraphId) -> GraphTile {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.001, 0.0);

    GraphTile::new(
        tile_id,
        vec![NodeInfo::new(a, 0, 1), NodeInfo::new(b, 1, 1)],
        vec![
            DirectedEdge::new(tile_id.with_index(1), 110.0, 50.0),
            DirectedEdge::new(tile_id.with_index(0), 110.0, 50.0),
        ],
    )
}

#[test]
fn tile_resolves_nodes_and_edges_by_index() {
    let tile_id = GraphId::new(0, 1, 0);
    let tile = paired_tile(tile_id);

    let node = tile.node(&tile_id.with_index(1)).expect("node b");
    assert_eq!(node.edge_index, 1);

    let edge = tile.directed_edge(&tile_id.with_index(0)).expect("edge a->b");
    assert_eq!(edge.end_node, tile_id.with_index(1));

    assert!(tile.node(&tile_id.with_index(2)).is_none());
    assert!(tile.directed_edge(&tile_id.with_index(2)).is_none());
}

#[test]
fn tile_finds_edge_source() {
    let tile_id = GraphId::new(0, 1, 0);
    let tile = paired_tile(tile_id);

    let (source, info) = tile.edge_source(1).expect("owner of edge 1");
    assert_eq!(source, tile_id.with_index(1));
    assert_eq!(info.edge_index, 1);
}

#[test]
fn tileset_pages_by_tile_base() {
    let tile_id = GraphId::new(0, 1, 0);
    let mut tiles = TileSet::new();
    tiles.insert(paired_tile(tile_id));

    // Any id within the tile resolves the same page.
    assert!(tiles.tile(&tile_id.with_index(7)).is_some());
    assert!(tiles.tile(&GraphId::new(0, 2, 0)).is_none());
    assert!(tiles.tile(&GraphId::new(1, 1, 0)).is_none());
}

#[test]
fn opposing_edge_resolves_reverse_pair() {
    let tile_id = GraphId::new(0, 1, 0);
    let mut tiles = TileSet::new();
    tiles.insert(paired_tile(tile_id));

    let forward = tile_id.with_index(0);
    let opposing = tiles.opposing_edge(&forward).expect("reverse edge");
    assert_eq!(opposing.end_node, tile_id.with_index(0));
}

#[test]
fn opposing_edge_absent_for_oneway() {
    let tile_id = GraphId::new(0, 1, 0);
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.001, 0.0);

    let mut tiles = TileSet::new();
    tiles.insert(GraphTile::new(
        tile_id,
        vec![NodeInfo::new(a, 0, 1), NodeInfo::new(b, 1, 0)],
        vec![DirectedEdge::new(tile_id.with_index(1), 110.0, 50.0)],
    ));

    assert!(tiles.opposing_edge(&tile_id.with_index(0)).is_none());
}

#[test]
fn transition_edges_classify() {
    let up = DirectedEdge::new(GraphId::new(1, 1, 0), 0.0, 0.0).with_use(EdgeUse::TransitionUp);
    let road = DirectedEdge::new(GraphId::new(0, 1, 0), 12.0, 30.0);

    assert!(up.is_transition());
    assert!(!road.is_transition());
    assert!(!road.is_shortcut());
    assert!(road.as_shortcut().is_shortcut());
}
