use crate::app::App;
use crate::db::hostels::nearby_hostels;
use crate::errors::ServerError;
use crate::params::{parse_query, Params};
use crate::responses::{json_response, ResultResp};
use astra::Request;

pub const DEFAULT_RADIUS_M: f64 = 2000.0;

fn number(params: &Params, key: &str) -> Result<Option<f64>, ServerError> {
    match params.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| ServerError::BadRequest(format!("{key} must be a number"))),
    }
}

/// `GET /api/hostels/nearby?lat=&long=&radius=`
pub fn nearby(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);

    let lat = number(&params, "lat")?
        .filter(|v| (-90.0..=90.0).contains(v))
        .ok_or_else(|| ServerError::BadRequest("lat is required (-90 to 90)".into()))?;
    let long = number(&params, "long")?
        .filter(|v| (-180.0..=180.0).contains(v))
        .ok_or_else(|| ServerError::BadRequest("long is required (-180 to 180)".into()))?;
    let radius = number(&params, "radius")?.unwrap_or(DEFAULT_RADIUS_M);
    if radius < 0.0 {
        return Err(ServerError::BadRequest("radius must not be negative".into()));
    }

    let rows = app
        .db
        .with_conn(|conn| nearby_hostels(conn, lat, long, radius))?;
    json_response(&rows)
}
