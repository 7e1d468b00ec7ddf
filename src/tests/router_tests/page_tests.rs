use crate::app::App;
use crate::catalog::CatalogState;
use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, location, temp_db, test_app, test_config, try_get};

#[test]
fn home_page_links_popular_locations() {
    let app = test_app("page_home");
    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Popular locations"));
    assert!(body.contains(r#"href="/hostels?q=Gate+A""#));
}

#[test]
fn hero_search_runs_the_search_event() {
    let app = test_app("page_home_search");
    let body = body_string(get(&app, "/"));

    assert!(body.contains(r#"action="/hostels/action""#));
    assert!(body.contains(r#"name="event" value="search""#));
    assert!(body.contains(r#"name="term""#));

    // A one-letter term from the hero form leaves the listing unfiltered.
    let resp = get(&app, "/hostels/action?event=search&term=G");
    assert_eq!(location(&resp), "/hostels");
}

#[test]
fn detail_page_shows_full_record() {
    let app = test_app("page_detail");
    let resp = get(&app, "/hostels/2");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Paradise Hostels"));
    assert!(body.contains("Sarah Wambui"));
    assert!(body.contains("TV Room"));
    assert!(body.contains("15% off"));
}

#[test]
fn unknown_routes_and_ids_are_not_found() {
    let app = test_app("page_404");
    for uri in ["/hostels/99", "/hostels/abc", "/nope", "/hostels/1/pay"] {
        assert!(matches!(try_get(&app, uri), Err(ServerError::NotFound)), "{uri}");
    }
}

#[test]
fn offline_catalog_shows_notice() {
    let app = App::new(
        temp_db("page_offline"),
        test_config(),
        CatalogState::Unavailable("connection refused".into()),
    );

    let resp = get(&app, "/hostels?q=gate");
    assert_eq!(resp.status(), 503);
    assert!(body_string(resp).contains("Server is offline. Please try again."));

    let err = try_get(&app, "/hostels/action?event=reset").unwrap_err();
    assert!(matches!(err, ServerError::CatalogError(_)));
}
