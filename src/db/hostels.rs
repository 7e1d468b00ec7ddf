use crate::catalog::Catalog;
use crate::db::connection::Database;
use crate::domain::hostel::string_list_from_value;
use crate::domain::{Coordinates, HostelRecord, RoommatePreference};
use crate::errors::ServerError;
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

const SELECT_HOSTELS: &str = r#"
    select id, name, location, description, price, original_price, discount_percent,
           roommate_option, rating, review_count, amenities, images, landlord,
           verified, available, latitude, longitude
    from hostels
    order by position, id
"#;

// Distance is computed by the database; see db::geo for the function.
const SELECT_NEARBY: &str = r#"
    select id, name, price, json_extract(images, '$[0]') as image_url, amenities,
           latitude, longitude,
           st_distance_sphere(longitude, latitude, ?1, ?2) as distance_meters
    from hostels
    where st_distance_sphere(longitude, latitude, ?1, ?2) <= ?3
    order by distance_meters asc
"#;

/// One row of the nearby-hostels response.
#[derive(Debug, Serialize, PartialEq)]
pub struct NearbyHostel {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub amenities: Vec<String>,
    pub lat: f64,
    pub long: f64,
    pub distance_meters: f64,
}

pub fn count_hostels(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from hostels", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count hostels failed: {e}")))
}

fn to_json_array(items: &[String]) -> Result<String, ServerError> {
    serde_json::to_string(items).map_err(|e| ServerError::DbError(format!("encode list: {e}")))
}

/// Writes one hostel at catalog `position`, replacing any row with the same id.
pub fn upsert_hostel(
    conn: &Connection,
    h: &HostelRecord,
    position: usize,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into hostels (
            id, name, location, description, price, original_price, discount_percent,
            roommate_option, rating, review_count, amenities, images, landlord,
            verified, available, latitude, longitude, position
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
        on conflict(id) do update set
            name = excluded.name,
            location = excluded.location,
            description = excluded.description,
            price = excluded.price,
            original_price = excluded.original_price,
            discount_percent = excluded.discount_percent,
            roommate_option = excluded.roommate_option,
            rating = excluded.rating,
            review_count = excluded.review_count,
            amenities = excluded.amenities,
            images = excluded.images,
            landlord = excluded.landlord,
            verified = excluded.verified,
            available = excluded.available,
            latitude = excluded.latitude,
            longitude = excluded.longitude,
            position = excluded.position
        "#,
        params![
            h.id,
            h.name,
            h.location,
            h.description,
            h.price,
            h.original_price,
            h.discount_percent,
            h.roommate.as_str(),
            h.rating,
            h.review_count,
            to_json_array(&h.amenities)?,
            to_json_array(&h.images)?,
            h.landlord,
            h.verified,
            h.available,
            h.coordinates.map(|c| c.lat),
            h.coordinates.map(|c| c.long),
            i64::try_from(position).unwrap_or(i64::MAX),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("upsert hostel {} failed: {e}", h.id)))?;
    Ok(())
}

fn write_catalog(conn: &mut Connection, catalog: &Catalog) -> Result<usize, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    for (position, record) in catalog.records().iter().enumerate() {
        upsert_hostel(&tx, record, position)?;
    }
    tx.commit()
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(catalog.len())
}

/// Inserts `seed` when the hostels table is empty. Returns how many rows were added.
pub fn seed_if_empty(db: &Database, seed: &Catalog) -> Result<usize, ServerError> {
    db.with_conn(|conn| {
        if count_hostels(conn)? > 0 {
            return Ok(0);
        }

        let inserted = write_catalog(conn, seed)?;
        info!("Seeded {inserted} hostels");
        Ok(inserted)
    })
}

/// Brings the table in line with a fetched catalog: every fetched hostel is
/// inserted or updated. Rows missing from the catalog stay, since booking
/// intents may still point at them.
pub fn mirror_catalog(db: &Database, catalog: &Catalog) -> Result<usize, ServerError> {
    let mirrored = db.with_conn(|conn| write_catalog(conn, catalog))?;
    info!("Mirrored {mirrored} fetched hostels");
    Ok(mirrored)
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Result<HostelRecord, String>> {
    let id: i64 = row.get(0)?;
    let price: i64 = row.get(4)?;
    let original_price: Option<i64> = row.get(5)?;
    let discount_percent: Option<i64> = row.get(6)?;
    let roommate_raw: String = row.get(7)?;
    let review_count: i64 = row.get(9)?;
    let amenities: String = row.get(10)?;
    let images: String = row.get(11)?;
    let latitude: Option<f64> = row.get(15)?;
    let longitude: Option<f64> = row.get(16)?;

    let Some(roommate) = RoommatePreference::parse(&roommate_raw) else {
        return Ok(Err(format!(
            "hostel {id} has unknown roommate option {roommate_raw:?}"
        )));
    };

    let original_price = original_price.unwrap_or(price);

    Ok(Ok(HostelRecord {
        id,
        name: row.get(1)?,
        location: row.get(2)?,
        description: row.get(3)?,
        price,
        original_price,
        discount_percent: discount_percent.unwrap_or_else(|| {
            crate::domain::hostel::derive_discount_percent(price, original_price)
        }),
        roommate,
        rating: row.get(8)?,
        review_count: review_count.clamp(0, u32::MAX as i64) as u32,
        amenities: string_list_from_value(Some(Value::String(amenities))),
        images: string_list_from_value(Some(Value::String(images))),
        landlord: row.get(12)?,
        verified: row.get(13)?,
        available: row.get(14)?,
        coordinates: latitude
            .zip(longitude)
            .map(|(lat, long)| Coordinates { lat, long }),
    }))
}

/// Reads every hostel into a catalog, in the order it was authored.
pub fn load_catalog(db: &Database) -> Result<Catalog, ServerError> {
    let records = db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(SELECT_HOSTELS)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_record)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            match r.map_err(|e| ServerError::DbError(e.to_string()))? {
                Ok(record) => out.push(record),
                Err(msg) => warn!("Skipping record: {msg}"),
            }
        }
        Ok(out)
    })?;

    Ok(Catalog::from_records(records)?)
}

/// Hostels within `radius_m` metres of (`lat`, `long`), nearest first.
pub fn nearby_hostels(
    conn: &Connection,
    lat: f64,
    long: f64,
    radius_m: f64,
) -> Result<Vec<NearbyHostel>, ServerError> {
    let mut stmt = conn
        .prepare(SELECT_NEARBY)
        .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

    let rows = stmt
        .query_map(params![long, lat, radius_m], |row| {
            let amenities: String = row.get(4)?;
            Ok(NearbyHostel {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
                image_url: row.get(3)?,
                amenities: string_list_from_value(Some(Value::String(amenities))),
                lat: row.get(5)?,
                long: row.get(6)?,
                distance_meters: row.get(7)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
