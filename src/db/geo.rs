// src/db/geo.rs
use crate::errors::ServerError;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Sphere radius used by MySQL's `ST_Distance_Sphere`, in metres.
pub const EARTH_RADIUS_M: f64 = 6_370_986.0;

/// Great-circle distance in metres between two (longitude, latitude) points.
pub fn distance_sphere(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Registers `st_distance_sphere(lon1, lat1, lon2, lat2)` on the connection.
/// Any NULL argument yields NULL.
pub fn register_functions(conn: &Connection) -> Result<(), ServerError> {
    conn.create_scalar_function(
        "st_distance_sphere",
        4,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lon1 = ctx.get::<Option<f64>>(0)?;
            let lat1 = ctx.get::<Option<f64>>(1)?;
            let lon2 = ctx.get::<Option<f64>>(2)?;
            let lat2 = ctx.get::<Option<f64>>(3)?;

            Ok(match (lon1, lat1, lon2, lat2) {
                (Some(lon1), Some(lat1), Some(lon2), Some(lat2)) => {
                    Some(distance_sphere(lon1, lat1, lon2, lat2))
                }
                _ => None,
            })
        },
    )
    .map_err(|e| ServerError::DbError(format!("Register st_distance_sphere failed: {e}")))
}
