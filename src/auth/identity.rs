// src/auth/identity.rs

//! Stand-in identity: a user counts as signed in when the browser holds the
//! `unistay_user` cookie. The token is opaque and never validated.

use astra::Request;

pub const USER_COOKIE: &str = "unistay_user";

/// Value of the named cookie, if present and non-empty.
pub fn cookie<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

pub fn user_token(req: &Request) -> Option<&str> {
    cookie(req, USER_COOKIE)
}

pub fn is_logged_in(req: &Request) -> bool {
    user_token(req).is_some()
}

/// `Set-Cookie` value that signs the browser in.
pub fn login_cookie(token: &str) -> String {
    format!("{USER_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Where the login page sends users who tried to book `hostel_id`.
pub fn login_redirect_for_booking(hostel_id: i64) -> String {
    format!("/login?redirect=booking&hostel={hostel_id}")
}
