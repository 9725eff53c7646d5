use mw_core::{chord_distance_km, GeoPoint, EARTH_RADIUS_KM};

#[test]
fn zero_for_identical_points() {
    let p = GeoPoint::new(41.7965645, -88.243012);
    assert_eq!(chord_distance_km(&p, &p), 0.0);
}

#[test]
fn symmetric() {
    let a = GeoPoint::new(41.7965645, -88.243012);
    let b = GeoPoint::new(40.7772608, -74.071748);
    let ab = chord_distance_km(&a, &b);
    let ba = chord_distance_km(&b, &a);
    assert!((ab - ba).abs() < 1e-9);
}

#[test]
fn matches_chord_formula_on_equator() {
    // One degree of longitude on the equator: chord = 2 R sin(0.5 deg).
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.0, 1.0);
    let expected = 2.0 * EARTH_RADIUS_KM * (0.5f64.to_radians()).sin();
    let got = chord_distance_km(&a, &b);
    assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
}

#[test]
fn corridor_scale_distance_is_plausible() {
    // Chicago suburb to northern New Jersey, roughly 1180 km on the ground.
    let cme = GeoPoint::new(41.7965645, -88.243012);
    let ny4 = GeoPoint::new(40.7772608, -74.071748);
    let dist = chord_distance_km(&cme, &ny4);
    assert!(dist > 1100.0 && dist < 1250.0, "unexpected corridor distance {dist}");
}
