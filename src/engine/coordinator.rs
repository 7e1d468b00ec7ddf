// src/engine/coordinator.rs

//! Turns user events into new view states.
//!
//! `Coordinator::handle` takes the current `ViewState` by value and returns the
//! next one, so criteria, results and page position always change together.
//! Nothing here touches the network, the clock or a UI toolkit.

use crate::catalog::Catalog;
use crate::domain::{HostelRecord, QueryCriteria, RoommateFilter, SortKey};
use crate::engine::pagination::{paginate, PageNav, PaginationState};
use crate::engine::presentation::{to_view_model, DisplayRecord};
use crate::engine::query::{self, ResultSet};
use tracing::debug;

/// Search terms shorter than this (but not empty) are ignored.
pub const MIN_SEARCH_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub page_size: usize,
    /// Upper bound of the price slider; `max_price` resets to this.
    pub price_ceiling: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub criteria: QueryCriteria,
    pub pagination: PaginationState,
    pub results: ResultSet,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SearchInput(String),
    FilterApply {
        max_price: i64,
        roommate: RoommateFilter,
    },
    RatingFilterClick(f64),
    SortChange(SortKey),
    PageNav(PageNav),
    ResetFilters,
    BookRequest {
        hostel_id: i64,
        logged_in: bool,
    },
}

/// Hand-offs to collaborators outside the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A logged-in user asked to book an existing hostel.
    BookingIntent { hostel_id: i64 },
    /// The user must sign in before booking.
    LoginRequired { hostel_id: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn quiet(state: ViewState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// One rendered page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub cards: Vec<DisplayRecord>,
    pub result_count: usize,
    pub catalog_count: usize,
    pub pagination: PaginationState,
}

pub struct Coordinator<'a> {
    catalog: &'a Catalog,
    settings: ViewSettings,
}

impl<'a> Coordinator<'a> {
    pub fn new(catalog: &'a Catalog, settings: ViewSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn initial_state(&self) -> ViewState {
        self.restore(QueryCriteria::defaults(self.settings.price_ceiling), 1)
    }

    /// Rebuilds a state from criteria and a requested page, clamping the page.
    pub fn restore(&self, criteria: QueryCriteria, page: i64) -> ViewState {
        let results = query::filter(self.catalog, &criteria);
        let pagination = PaginationState::new(results.len(), self.settings.page_size, page);
        ViewState {
            criteria,
            pagination,
            results,
        }
    }

    pub fn handle(&self, state: ViewState, event: Event) -> Transition {
        debug!(?event, page = state.pagination.current_page, "view event");

        match event {
            Event::SearchInput(term) => match term.chars().count() {
                0 => Transition::quiet(self.refilter(state.criteria, |c| c.search_term.clear())),
                n if n >= MIN_SEARCH_LEN => {
                    Transition::quiet(self.refilter(state.criteria, |c| c.search_term = term))
                }
                _ => Transition::quiet(state),
            },

            Event::FilterApply {
                max_price,
                roommate,
            } => Transition::quiet(self.refilter(state.criteria, |c| {
                c.max_price = max_price;
                c.roommate = roommate;
            })),

            Event::RatingFilterClick(rating) => {
                Transition::quiet(self.refilter(state.criteria, |c| c.min_rating = rating))
            }

            // Re-sorts what is already on screen; page position is kept.
            Event::SortChange(key) => {
                let results = query::sort(self.catalog, &state.results, key);
                let criteria = QueryCriteria {
                    sort_key: key,
                    ..state.criteria
                };
                Transition::quiet(ViewState {
                    criteria,
                    results,
                    pagination: state.pagination,
                })
            }

            Event::PageNav(nav) => Transition::quiet(ViewState {
                pagination: state.pagination.navigate(nav),
                ..state
            }),

            Event::ResetFilters => Transition::quiet(self.initial_state()),

            Event::BookRequest {
                hostel_id,
                logged_in,
            } => {
                let effect = if !logged_in {
                    Some(Effect::LoginRequired { hostel_id })
                } else if self.catalog.get(hostel_id).is_some() {
                    Some(Effect::BookingIntent { hostel_id })
                } else {
                    None
                };
                Transition { state, effect }
            }
        }
    }

    /// Records on the current page, in result order.
    pub fn page_records(&self, state: &ViewState) -> Vec<&'a HostelRecord> {
        let page = paginate(
            state.results.positions(),
            state.pagination.page_size,
            state.pagination.current_page as i64,
        );
        page.items
            .iter()
            .filter_map(|&pos| self.catalog.at(pos))
            .collect()
    }

    pub fn render(&self, state: &ViewState) -> ResultsView {
        ResultsView {
            cards: self
                .page_records(state)
                .into_iter()
                .map(to_view_model)
                .collect(),
            result_count: state.results.len(),
            catalog_count: self.catalog.len(),
            pagination: state.pagination,
        }
    }

    fn refilter<F>(&self, mut criteria: QueryCriteria, update: F) -> ViewState
    where
        F: FnOnce(&mut QueryCriteria),
    {
        update(&mut criteria);
        self.restore(criteria, 1)
    }
}
