use crate::app::App;
use crate::auth::identity::{is_logged_in, login_redirect_for_booking, user_token};
use crate::db::bookings::{record_booking_intent, NewBookingIntent, ALLOWED_DURATIONS};
use crate::domain::HostelRecord;
use crate::errors::ServerError;
use crate::params::{read_form_body, Params};
use crate::responses::{html_response, html_response_with_status, see_other, ResultResp};
use crate::templates::pages::{booking_confirmed_page, booking_page};
use astra::Request;
use chrono::{Local, NaiveDate, Utc};
use tracing::info;

pub fn booking_form(req: &Request, app: &App, hostel_id: i64) -> ResultResp {
    if !is_logged_in(req) {
        return see_other(&login_redirect_for_booking(hostel_id));
    }
    let record = app.catalog()?.get(hostel_id).ok_or(ServerError::NotFound)?;
    html_response(booking_page(record, None))
}

pub fn submit_booking(req: Request, app: &App, hostel_id: i64) -> ResultResp {
    let Some(token) = user_token(&req).map(str::to_owned) else {
        return see_other(&login_redirect_for_booking(hostel_id));
    };
    let record = app.catalog()?.get(hostel_id).ok_or(ServerError::NotFound)?;
    let form = read_form_body(req)?;

    let (move_in, duration_months) = match validate(record, &form, Local::now().date_naive()) {
        Ok(fields) => fields,
        Err(msg) => return html_response_with_status(400, booking_page(record, Some(msg))),
    };

    let intent = app.db.with_conn(|conn| {
        record_booking_intent(
            conn,
            &NewBookingIntent {
                hostel_id,
                user_token: &token,
                move_in,
                duration_months,
                monthly_rent: record.price,
            },
            Utc::now().timestamp(),
        )
    })?;

    info!(
        reference = %intent.reference,
        hostel_id,
        duration_months,
        "booking intent recorded"
    );
    html_response(booking_confirmed_page(record, &intent))
}

/// Checks the submitted form; the error is shown above the form.
fn validate(
    record: &HostelRecord,
    form: &Params,
    today: NaiveDate,
) -> Result<(NaiveDate, u32), &'static str> {
    if !record.available {
        return Err("This hostel is fully booked.");
    }

    let move_in = form
        .get("move_in")
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .ok_or("Please choose a move-in date.")?;
    if move_in < today {
        return Err("Move-in date cannot be in the past.");
    }

    let duration = form
        .get("duration")
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|d| ALLOWED_DURATIONS.contains(d))
        .ok_or("Please choose a duration of 1, 3, 6 or 12 months.")?;

    Ok((move_in, duration))
}
