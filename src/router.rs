use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{booking, hostels, login, nearby};
use crate::responses::ResultResp;
use astra::Request;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => hostels::home(&req),

        ("GET", ["hostels"]) => hostels::listing(&req, app),
        ("GET", ["hostels", "action"]) => hostels::action(&req, app),
        ("GET", ["hostels", id]) => hostels::detail(&req, app, parse_id(id)?),
        ("GET", ["hostels", id, "book"]) => booking::booking_form(&req, app, parse_id(id)?),
        ("POST", ["hostels", id, "book"]) => {
            let id = parse_id(id)?;
            booking::submit_booking(req, app, id)
        }

        ("GET", ["login"]) => login::login_form(&req),
        ("POST", ["login"]) => login::login_submit(req),

        ("GET", ["api", "hostels", "nearby"]) => nearby::nearby(&req, app),

        _ => Err(ServerError::NotFound),
    }
}

/// Whether errors on this path should be answered with JSON.
pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}
