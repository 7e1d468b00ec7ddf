use crate::app::App;
use crate::auth::identity::{is_logged_in, login_redirect_for_booking};
use crate::engine::{to_view_model, Effect};
use crate::errors::ServerError;
use crate::params::{criteria_from_params, event_from_params, listing_url, parse_query, state_query};
use crate::responses::{html_response, html_response_with_status, see_other, ResultResp};
use crate::templates::pages::{detail_page, home_page, hostels_page, HostelsVm, Listing};
use astra::Request;
use tracing::info;

pub fn home(req: &Request) -> ResultResp {
    html_response(home_page(is_logged_in(req)))
}

/// Renders the view state encoded in the query string.
pub fn listing(req: &Request, app: &App) -> ResultResp {
    let settings = app.settings();
    let (criteria, page) = criteria_from_params(&parse_query(req), &settings);
    let logged_in = is_logged_in(req);

    let Some(coord) = app.coordinator() else {
        let vm = HostelsVm {
            logged_in,
            state_q: state_query(&criteria, usize::try_from(page).unwrap_or(1), &settings),
            criteria,
            settings,
            listing: Listing::Offline,
        };
        return html_response_with_status(503, hostels_page(&vm));
    };

    let state = coord.restore(criteria, page);
    let view = coord.render(&state);

    let vm = HostelsVm {
        logged_in,
        state_q: state_query(&state.criteria, state.pagination.current_page, &settings),
        criteria: state.criteria,
        settings,
        listing: Listing::Ready(view),
    };
    html_response(hostels_page(&vm))
}

/// Runs one event against the encoded state and redirects to wherever it leads.
pub fn action(req: &Request, app: &App) -> ResultResp {
    let coord = app.coordinator().ok_or_else(|| {
        ServerError::CatalogError("catalog unavailable".into())
    })?;
    let settings = app.settings();
    let params = parse_query(req);

    let (criteria, page) = criteria_from_params(&params, &settings);
    let event = event_from_params(&params, is_logged_in(req), &settings)?;

    let transition = coord.handle(coord.restore(criteria, page), event);

    match transition.effect {
        Some(Effect::LoginRequired { hostel_id }) => {
            info!(hostel_id, "booking needs sign-in");
            see_other(&login_redirect_for_booking(hostel_id))
        }
        Some(Effect::BookingIntent { hostel_id }) => {
            info!(hostel_id, "booking requested");
            see_other(&format!("/hostels/{hostel_id}/book"))
        }
        None => {
            let state = transition.state;
            see_other(&listing_url(
                &state.criteria,
                state.pagination.current_page,
                &settings,
            ))
        }
    }
}

pub fn detail(req: &Request, app: &App, id: i64) -> ResultResp {
    let record = app.catalog()?.get(id).ok_or(ServerError::NotFound)?;
    html_response(detail_page(is_logged_in(req), record, &to_view_model(record)))
}
