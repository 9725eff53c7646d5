use mw_core::GeoPoint;
use mw_graph::{HopGraph, TowerSighting};

fn sighting(lat: f64, lon: f64) -> TowerSighting {
    TowerSighting::new(GeoPoint::new(lat, lon), "300.5")
}

#[test]
fn repeated_coordinates_resolve_to_one_node() {
    let mut graph = HopGraph::new();
    let (a1, b1) = graph.add_hop(
        sighting(41.38511, -81.32581),
        sighting(41.41264, -81.70786),
        vec!["6093.45".into()],
    );
    let (b2, c1) = graph.add_hop(
        sighting(41.41264, -81.70786),
        sighting(41.49932, -81.69436),
        vec!["6034.15".into()],
    );
    assert_eq!(b1, b2);
    assert_ne!(a1, c1);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn node_count_equals_distinct_coordinate_pairs() {
    let coords = [
        (41.0, -81.0),
        (41.5, -81.5),
        (41.0, -81.0), // repeat of the first tower
        (42.0, -82.0),
    ];
    let mut graph = HopGraph::new();
    for window in coords.windows(2) {
        graph.add_hop(
            sighting(window[0].0, window[0].1),
            sighting(window[1].0, window[1].1),
            vec![],
        );
    }
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn ids_are_assigned_in_sighting_order() {
    let mut graph = HopGraph::new();
    let (tx, rx) = graph.add_hop(sighting(41.0, -81.0), sighting(41.5, -81.5), vec![]);
    assert_eq!(tx.as_raw(), 0);
    assert_eq!(rx.as_raw(), 1);
    let tower = graph.tower(tx).unwrap();
    assert_eq!(tower.point.lat_deg, 41.0);
    assert_eq!(tower.elevation, "300.5");
}

#[test]
fn lookup_by_key_finds_interned_tower() {
    let mut graph = HopGraph::new();
    let point = GeoPoint::new(41.38511, -81.32581);
    let (tx, _) = graph.add_hop(
        TowerSighting::new(point, ""),
        sighting(41.5, -81.5),
        vec![],
    );
    assert_eq!(graph.lookup(&point.key()), Some(tx));
    assert_eq!(graph.lookup(&GeoPoint::new(0.0, 0.0).key()), None);
}

#[test]
fn unknown_node_lookup_is_a_graph_error() {
    let graph = HopGraph::new();
    let err = graph.tower(mw_core::NodeId::from_raw(7)).unwrap_err();
    assert_eq!(err.info().code, "unknown-node");
    assert_eq!(err.info().context.get("node"), Some(&"7".to_string()));
}
