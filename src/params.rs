// src/params.rs

//! The listing's view state lives in the URL. This module reads it back out of
//! a query string and writes it into one, and decodes coordinator events from
//! the `/hostels/action` parameters.

use crate::domain::{QueryCriteria, RoommateFilter, SortKey};
use crate::engine::{Event, PageNav, ViewSettings};
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub type Params = HashMap<String, String>;

pub fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| parse_form(q.as_bytes()))
        .unwrap_or_default()
}

/// Decodes an `application/x-www-form-urlencoded` body. Later keys win.
pub fn parse_form(body: &[u8]) -> Params {
    form_urlencoded::parse(body).into_owned().collect()
}

/// Consumes the request and decodes its form body.
pub fn read_form_body(req: Request) -> Result<Params, ServerError> {
    let mut buf = Vec::new();
    let mut body = req.into_body();
    body.reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(parse_form(&buf))
}

fn get<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn parse_price(raw: Option<&str>, price_ceiling: i64) -> i64 {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .map(|p| p.round() as i64)
        .unwrap_or(price_ceiling)
}

fn parse_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|r| r.is_finite())
        .unwrap_or(0.0)
}

fn parse_roommate(raw: Option<&str>) -> RoommateFilter {
    raw.and_then(RoommateFilter::parse).unwrap_or_default()
}

fn parse_sort(raw: Option<&str>) -> SortKey {
    raw.and_then(SortKey::parse).unwrap_or_default()
}

/// Criteria and requested page encoded in `q`, `max_price`, `roommate`,
/// `min_rating`, `sort` and `page`. Bad values fall back to the defaults.
pub fn criteria_from_params(params: &Params, settings: &ViewSettings) -> (QueryCriteria, i64) {
    let criteria = QueryCriteria {
        search_term: get(params, "q").unwrap_or_default().to_string(),
        max_price: parse_price(get(params, "max_price"), settings.price_ceiling),
        roommate: parse_roommate(get(params, "roommate")),
        min_rating: parse_rating(get(params, "min_rating")),
        sort_key: parse_sort(get(params, "sort")),
    };
    let page = get(params, "page")
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(1);

    (criteria, page)
}

/// Query string for a view state; default values are left out.
pub fn state_query(criteria: &QueryCriteria, page: usize, settings: &ViewSettings) -> String {
    let mut q = form_urlencoded::Serializer::new(String::new());

    if !criteria.search_term.is_empty() {
        q.append_pair("q", &criteria.search_term);
    }
    if criteria.max_price != settings.price_ceiling {
        q.append_pair("max_price", &criteria.max_price.to_string());
    }
    if criteria.roommate != RoommateFilter::Any {
        q.append_pair("roommate", criteria.roommate.as_str());
    }
    if criteria.min_rating != 0.0 {
        q.append_pair("min_rating", &criteria.min_rating.to_string());
    }
    if criteria.sort_key != SortKey::Featured {
        q.append_pair("sort", criteria.sort_key.as_str());
    }
    if page > 1 {
        q.append_pair("page", &page.to_string());
    }

    q.finish()
}

pub fn listing_url(criteria: &QueryCriteria, page: usize, settings: &ViewSettings) -> String {
    match state_query(criteria, page, settings) {
        q if q.is_empty() => "/hostels".to_string(),
        q => format!("/hostels?{q}"),
    }
}

/// Link that runs one coordinator event against the state in `state_q`.
pub fn action_href(state_q: &str, event: &[(&str, &str)]) -> String {
    let mut q = form_urlencoded::Serializer::new(String::new());
    q.extend_pairs(event);
    let event = q.finish();

    if state_q.is_empty() {
        format!("/hostels/action?{event}")
    } else {
        format!("/hostels/action?{state_q}&{event}")
    }
}

/// Reads the `event` parameter and its arguments.
///
/// | event  | arguments                      |
/// |--------|--------------------------------|
/// | search | `term`                         |
/// | filter | `price`, `room`                |
/// | rating | `stars`                        |
/// | sort   | `to`                           |
/// | page   | `nav` = `prev`, `next` or N    |
/// | reset  |                                |
/// | book   | `hostel`                       |
pub fn event_from_params(
    params: &Params,
    logged_in: bool,
    settings: &ViewSettings,
) -> Result<Event, ServerError> {
    let event = get(params, "event")
        .ok_or_else(|| ServerError::BadRequest("Missing event".into()))?;

    match event {
        "search" => Ok(Event::SearchInput(
            params
                .get("term")
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        )),
        "filter" => Ok(Event::FilterApply {
            max_price: parse_price(get(params, "price"), settings.price_ceiling),
            roommate: parse_roommate(get(params, "room")),
        }),
        "rating" => Ok(Event::RatingFilterClick(parse_rating(get(params, "stars")))),
        "sort" => Ok(Event::SortChange(parse_sort(get(params, "to")))),
        "page" => {
            let nav = match get(params, "nav") {
                Some("prev") => PageNav::Previous,
                Some("next") => PageNav::Next,
                Some(n) => n
                    .parse::<i64>()
                    .map(PageNav::To)
                    .map_err(|_| ServerError::BadRequest(format!("Invalid page: {n}")))?,
                None => return Err(ServerError::BadRequest("Missing nav".into())),
            };
            Ok(Event::PageNav(nav))
        }
        "reset" => Ok(Event::ResetFilters),
        "book" => {
            let hostel_id = get(params, "hostel")
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| ServerError::BadRequest("Missing or invalid hostel".into()))?;
            Ok(Event::BookRequest {
                hostel_id,
                logged_in,
            })
        }
        other => Err(ServerError::BadRequest(format!("Unknown event: {other}"))),
    }
}
