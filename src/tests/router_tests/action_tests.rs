use crate::errors::ServerError;
use crate::tests::utils::{get, get_with_cookie, location, test_app, try_get};

fn redirect_of(uri: &str) -> String {
    let app = test_app("action");
    let resp = get(&app, uri);
    assert_eq!(resp.status(), 303, "{uri}");
    location(&resp).to_string()
}

#[test]
fn filter_event_redirects_to_filtered_listing() {
    assert_eq!(
        redirect_of("/hostels/action?event=filter&price=6500&room=any"),
        "/hostels?max_price=6500"
    );
    assert_eq!(
        redirect_of("/hostels/action?event=filter&price=20000&room=share"),
        "/hostels?roommate=share"
    );
}

#[test]
fn search_event_needs_two_characters() {
    assert_eq!(redirect_of("/hostels/action?event=search&term=g"), "/hostels");
    assert_eq!(
        redirect_of("/hostels/action?q=gate&event=search&term=g"),
        "/hostels?q=gate"
    );
    assert_eq!(
        redirect_of("/hostels/action?event=search&term=Gate"),
        "/hostels?q=Gate"
    );
    assert_eq!(
        redirect_of("/hostels/action?q=gate&event=search&term="),
        "/hostels"
    );
}

#[test]
fn sort_event_keeps_filters() {
    assert_eq!(
        redirect_of("/hostels/action?max_price=6500&event=sort&to=price-high"),
        "/hostels?max_price=6500&sort=price-high"
    );
}

#[test]
fn rating_event_sets_minimum() {
    assert_eq!(
        redirect_of("/hostels/action?event=rating&stars=4.5"),
        "/hostels?min_rating=4.5"
    );
}

#[test]
fn reset_event_clears_everything() {
    assert_eq!(
        redirect_of("/hostels/action?q=gate&sort=rating&min_rating=3&event=reset"),
        "/hostels"
    );
}

#[test]
fn page_event_clamps_on_a_single_page() {
    assert_eq!(redirect_of("/hostels/action?event=page&nav=next"), "/hostels");
    assert_eq!(redirect_of("/hostels/action?event=page&nav=7"), "/hostels");
}

#[test]
fn book_event_without_login_goes_to_login() {
    assert_eq!(
        redirect_of("/hostels/action?event=book&hostel=2"),
        "/login?redirect=booking&hostel=2"
    );
}

#[test]
fn book_event_with_login_goes_to_booking() {
    let app = test_app("action_book");
    let resp = get_with_cookie(&app, "/hostels/action?event=book&hostel=2", "unistay_user=tok");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/hostels/2/book");

    // Unknown hostel: no hand-off, back to the same listing.
    let resp = get_with_cookie(
        &app,
        "/hostels/action?q=gate&event=book&hostel=99",
        "unistay_user=tok",
    );
    assert_eq!(location(&resp), "/hostels?q=gate");
}

#[test]
fn malformed_events_are_bad_requests() {
    let app = test_app("action_bad");
    for uri in [
        "/hostels/action",
        "/hostels/action?event=dance",
        "/hostels/action?event=book",
        "/hostels/action?event=page&nav=last",
    ] {
        let err = try_get(&app, uri).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)), "{uri}");
    }
}
