use crate::auth::identity::login_cookie;
use crate::auth::token::generate_token_default;
use crate::errors::ServerError;
use crate::params::{parse_query, read_form_body, Params};
use crate::responses::{html_response, see_other_with_cookie, ResultResp};
use crate::templates::pages::login_page;
use astra::Request;
use tracing::info;

/// Hostel id when the user was sent here from a booking (`redirect=booking&hostel=<id>`).
fn booking_target(params: &Params) -> Option<i64> {
    if params.get("redirect").map(String::as_str) != Some("booking") {
        return None;
    }
    params.get("hostel").and_then(|s| s.trim().parse().ok())
}

pub fn login_form(req: &Request) -> ResultResp {
    html_response(login_page(booking_target(&parse_query(req))))
}

/// Issues an opaque token cookie. Nothing is verified.
pub fn login_submit(req: Request) -> ResultResp {
    let form = read_form_body(req)?;

    let email = form.get("email").map(|s| s.trim()).unwrap_or_default();
    if email.is_empty() || !email.contains('@') {
        return Err(ServerError::BadRequest("Please enter a valid email address".into()));
    }

    let token = generate_token_default();
    let destination = match booking_target(&form) {
        Some(id) => format!("/hostels/{id}/book"),
        None => "/hostels".to_string(),
    };

    info!("User signed in, continuing to {destination}");
    see_other_with_cookie(&destination, &login_cookie(&token))
}
