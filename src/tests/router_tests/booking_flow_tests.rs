use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, get_with_cookie, location, post_form, test_app};
use astra::Body;
use http::{Method, Request};

const COOKIE: &str = "unistay_user=test-token";

#[test]
fn booking_page_requires_sign_in() {
    let app = test_app("booking_login");
    let resp = get(&app, "/hostels/1/book");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?redirect=booking&hostel=1");
}

#[test]
fn login_page_carries_booking_target() {
    let app = test_app("booking_login_page");
    let resp = get(&app, "/login?redirect=booking&hostel=1");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains(r#"name="hostel" value="1""#));
}

#[test]
fn login_sets_cookie_and_returns_to_booking() {
    let app = test_app("booking_login_post");
    let resp = post_form(
        &app,
        "/login",
        None,
        "email=student%40dkut.ac.ke&redirect=booking&hostel=1",
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/hostels/1/book");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.starts_with("unistay_user="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn plain_login_returns_to_listing() {
    let app = test_app("booking_login_plain");
    let resp = post_form(&app, "/login", None, "email=a%40b.ke");
    assert_eq!(location(&resp), "/hostels");
}

#[test]
fn login_without_email_is_rejected() {
    let app = test_app("booking_login_empty");
    let req = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .body(Body::from("email=".to_string()))
        .unwrap();
    let err = crate::router::handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn booking_form_shows_summary() {
    let app = test_app("booking_form");
    let resp = get_with_cookie(&app, "/hostels/1/book", COOKIE);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Maisha Hostel"));
    assert!(body.contains("Monthly Rent:"));
    assert!(body.contains("KES 6,000"));
    assert!(body.contains(r#"name="move_in""#));
    assert!(body.contains(r#"<option value="12">"#));
}

#[test]
fn booking_submission_records_intent_and_confirms() {
    let app = test_app("booking_submit");
    let resp = post_form(
        &app,
        "/hostels/2/book",
        Some(COOKIE),
        "move_in=2099-01-15&duration=3",
    );
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Booking confirmed for Paradise Hostels! Redirecting to payment..."));
    assert!(body.contains("UNI-"));

    let (count, rent, token): (i64, i64, String) = app
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select count(*), max(monthly_rent), max(user_token) from booking_intents where hostel_id = 2",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(rent, 7200);
    assert_eq!(token, "test-token");
}

#[test]
fn invalid_booking_form_is_shown_again() {
    let app = test_app("booking_invalid");
    let resp = post_form(
        &app,
        "/hostels/1/book",
        Some(COOKIE),
        "move_in=2099-01-15&duration=2",
    );
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("form-error"));
}

#[test]
fn booking_unknown_hostel_is_not_found() {
    let app = test_app("booking_404");
    let req = Request::builder()
        .uri("/hostels/99/book")
        .header("Cookie", COOKIE)
        .body(Body::empty())
        .unwrap();
    let err = crate::router::handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
