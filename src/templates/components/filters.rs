use crate::domain::{QueryCriteria, RoommateFilter, RoommatePreference, SortKey};
use crate::engine::presentation::group_thousands;
use crate::engine::ViewSettings;
use crate::params::action_href;
use maud::{html, Markup};
use url::form_urlencoded;

const RATING_STEPS: [f64; 4] = [4.5, 4.0, 3.5, 3.0];
const PRICE_STEP: i64 = 500;

/// Hidden inputs carrying the current view state through a GET form.
pub fn state_inputs(state_q: &str) -> Markup {
    html! {
        @for (name, value) in form_urlencoded::parse(state_q.as_bytes()) {
            input type="hidden" name=(name) value=(value);
        }
    }
}

pub fn search_form(criteria: &QueryCriteria, state_q: &str) -> Markup {
    html! {
        form class="search-form" method="get" action="/hostels/action" {
            (state_inputs(state_q))
            input type="hidden" name="event" value="search";
            input
                type="search"
                id="locationSearch"
                name="term"
                value=(criteria.search_term)
                placeholder="Search by hostel name or location";
            button type="submit" class="btn btn-primary" { i class="fas fa-search" {} " Search" }
        }
    }
}

pub fn sort_form(criteria: &QueryCriteria, state_q: &str) -> Markup {
    html! {
        form class="sort-form" method="get" action="/hostels/action" {
            (state_inputs(state_q))
            input type="hidden" name="event" value="sort";
            label for="sortBy" { "Sort by" }
            select id="sortBy" name="to" {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[key == criteria.sort_key] { (key.label()) }
                }
            }
            button type="submit" class="btn btn-outline" { "Sort" }
        }
    }
}

pub fn filter_sidebar(criteria: &QueryCriteria, settings: &ViewSettings, state_q: &str) -> Markup {
    let roommate_options = [
        (RoommateFilter::Any, "Any"),
        (RoommateFilter::Only(RoommatePreference::Alone), "Stay Alone"),
        (RoommateFilter::Only(RoommatePreference::Share), "Share Room"),
    ];

    html! {
        aside class="filters-sidebar" {
            h3 { "Filters" }

            form class="filter-form" method="get" action="/hostels/action" {
                (state_inputs(state_q))
                input type="hidden" name="event" value="filter";

                div class="filter-group" {
                    label for="priceRange" { "Max price (KES)" }
                    input
                        type="range"
                        id="priceRange"
                        name="price"
                        min="0"
                        max=(settings.price_ceiling)
                        step=(PRICE_STEP)
                        value=(criteria.max_price);
                    span id="maxPrice" { (group_thousands(criteria.max_price)) }
                }

                div class="filter-group" {
                    span class="filter-label" { "Roommate" }
                    @for (filter, label) in roommate_options {
                        label class="radio" {
                            input
                                type="radio"
                                name="room"
                                value=(filter.as_str())
                                checked[filter == criteria.roommate];
                            " " (label)
                        }
                    }
                }

                button type="submit" class="btn btn-primary" { "Apply Filters" }
            }

            div class="filter-group rating-filter" {
                span class="filter-label" { "Minimum rating" }
                ul {
                    @for stars in RATING_STEPS {
                        @let value = stars.to_string();
                        li {
                            a
                                class=[(criteria.min_rating == stars).then_some("active")]
                                href=(action_href(state_q, &[("event", "rating"), ("stars", value.as_str())]))
                            { (value) "+ stars" }
                        }
                    }
                    li {
                        a href=(action_href(state_q, &[("event", "rating"), ("stars", "0")])) { "Any rating" }
                    }
                }
            }

            a class="btn btn-link reset-filters" href=(action_href(state_q, &[("event", "reset")])) {
                "Reset filters"
            }
        }
    }
}
