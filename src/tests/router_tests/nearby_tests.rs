use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, test_app, try_get};
use serde_json::Value;

fn nearby(uri: &str) -> Vec<Value> {
    let app = test_app("nearby");
    let resp = get(&app, uri);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn nearby_uses_default_radius_and_sorts_by_distance() {
    let rows = nearby("/api/hostels/nearby?lat=-0.3982&long=36.9598");
    let ids: Vec<i64> = rows.iter().filter_map(|r| r["id"].as_i64()).collect();
    assert_eq!(ids, vec![2, 1]);

    let first = &rows[0];
    assert_eq!(first["name"], "Paradise Hostels");
    assert_eq!(first["price"], 7200);
    assert!(first["image_url"].is_string());
    assert!(first["amenities"].is_array());
    assert!(first["distance_meters"].as_f64().unwrap() < 1.0);
}

#[test]
fn wider_radius_reaches_every_hostel() {
    let rows = nearby("/api/hostels/nearby?lat=-0.3982&long=36.9598&radius=10000");
    assert_eq!(rows.len(), 3);
}

#[test]
fn zero_radius_far_away_is_empty() {
    let rows = nearby("/api/hostels/nearby?lat=-1.2921&long=36.8219&radius=0");
    assert!(rows.is_empty());
}

#[test]
fn bad_coordinates_are_rejected() {
    let app = test_app("nearby_bad");
    for uri in [
        "/api/hostels/nearby",
        "/api/hostels/nearby?lat=-0.39",
        "/api/hostels/nearby?lat=north&long=36.9",
        "/api/hostels/nearby?lat=95&long=36.9",
        "/api/hostels/nearby?lat=-0.39&long=36.9&radius=far",
        "/api/hostels/nearby?lat=-0.39&long=36.9&radius=-5",
    ] {
        let err = try_get(&app, uri).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)), "{uri}");
    }
}
