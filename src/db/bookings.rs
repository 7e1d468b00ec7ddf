use crate::auth::token::generate_reference;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

pub const ALLOWED_DURATIONS: [u32; 4] = [1, 3, 6, 12];

/// A booking request handed off to the payment side. Nothing is charged here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingIntent<'a> {
    pub hostel_id: i64,
    pub user_token: &'a str,
    pub move_in: NaiveDate,
    pub duration_months: u32,
    pub monthly_rent: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingIntent {
    pub reference: String,
    pub hostel_id: i64,
    pub move_in: NaiveDate,
    pub duration_months: u32,
    pub monthly_rent: i64,
    pub created_at: i64,
}

pub fn record_booking_intent(
    conn: &Connection,
    intent: &NewBookingIntent<'_>,
    now: i64,
) -> Result<BookingIntent, ServerError> {
    if !ALLOWED_DURATIONS.contains(&intent.duration_months) {
        return Err(ServerError::BadRequest(format!(
            "Unsupported duration: {} months",
            intent.duration_months
        )));
    }

    let reference = generate_reference();

    conn.execute(
        r#"
        insert into booking_intents
            (reference, hostel_id, user_token, move_in, duration_months, monthly_rent, created_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            reference,
            intent.hostel_id,
            intent.user_token,
            intent.move_in,
            intent.duration_months,
            intent.monthly_rent,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("record booking intent failed: {e}")))?;

    Ok(BookingIntent {
        reference,
        hostel_id: intent.hostel_id,
        move_in: intent.move_in,
        duration_months: intent.duration_months,
        monthly_rent: intent.monthly_rent,
        created_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::db::connection::init_db;
    use crate::db::hostels::seed_if_empty;
    use crate::tests::utils::temp_db;
    use rusqlite::OptionalExtension;

    fn find_booking_intent(
        conn: &Connection,
        reference: &str,
    ) -> Result<Option<BookingIntent>, ServerError> {
        conn.query_row(
            r#"
            select reference, hostel_id, move_in, duration_months, monthly_rent, created_at
            from booking_intents
            where reference = ?
            "#,
            params![reference],
            |row| {
                Ok(BookingIntent {
                    reference: row.get(0)?,
                    hostel_id: row.get(1)?,
                    move_in: row.get(2)?,
                    duration_months: row.get(3)?,
                    monthly_rent: row.get(4)?,
                    created_at: row.get(5)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("booking lookup failed: {e}")))
    }


    fn intent(duration_months: u32) -> NewBookingIntent<'static> {
        NewBookingIntent {
            hostel_id: 1,
            user_token: "opaque",
            move_in: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            duration_months,
            monthly_rent: 6000,
        }
    }

    #[test]
    fn intent_is_stored_and_found_by_reference() {
        let db = temp_db("bookings");
        init_db(&db, "sql/schema.sql").unwrap();
        let seed = Catalog::from_json(include_str!("../../data/hostels.json")).unwrap();
        seed_if_empty(&db, &seed).unwrap();

        let stored = db
            .with_conn(|conn| record_booking_intent(conn, &intent(3), 1_700_000_000))
            .unwrap();
        assert!(stored.reference.starts_with("UNI-"));

        let found = db
            .with_conn(|conn| find_booking_intent(conn, &stored.reference))
            .unwrap();
        assert_eq!(found, Some(stored));
    }

    #[test]
    fn odd_durations_are_rejected() {
        let db = temp_db("bookings_duration");
        init_db(&db, "sql/schema.sql").unwrap();

        let err = db
            .with_conn(|conn| record_booking_intent(conn, &intent(2), 0))
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn unknown_hostel_violates_foreign_key() {
        let db = temp_db("bookings_fk");
        init_db(&db, "sql/schema.sql").unwrap();

        let err = db
            .with_conn(|conn| {
                record_booking_intent(
                    conn,
                    &NewBookingIntent {
                        hostel_id: 999,
                        ..intent(1)
                    },
                    0,
                )
            })
            .unwrap_err();
        assert!(matches!(err, ServerError::DbError(_)));
    }
}
