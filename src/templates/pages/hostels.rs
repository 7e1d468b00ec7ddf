// templates/pages/hostels.rs

use crate::domain::QueryCriteria;
use crate::engine::{ResultsView, ViewSettings};
use crate::params::action_href;
use crate::templates::components::{
    filter_sidebar, hostel_card, pagination_nav, search_form, sort_form,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub enum Listing {
    Ready(ResultsView),
    /// The catalog could not be loaded.
    Offline,
}

pub struct HostelsVm {
    pub logged_in: bool,
    pub criteria: QueryCriteria,
    pub settings: ViewSettings,
    /// Current state as a query string; every form and link carries it.
    pub state_q: String,
    pub listing: Listing,
}

pub fn hostels_page(vm: &HostelsVm) -> Markup {
    desktop_layout(
        "Hostels",
        vm.logged_in,
        html! {
            main class="container hostels-layout" {
                section class="search-bar" {
                    (search_form(&vm.criteria, &vm.state_q))
                }

                (filter_sidebar(&vm.criteria, &vm.settings, &vm.state_q))

                section class="results" {
                    @match &vm.listing {
                        Listing::Ready(view) => (results(vm, view)),
                        Listing::Offline => (offline()),
                    }
                }
            }
        },
    )
}

fn results(vm: &HostelsVm, view: &ResultsView) -> Markup {
    html! {
        div class="results-header" {
            p class="results-count" {
                "Showing "
                span id="resultsCount" { (view.result_count) }
                " of "
                span id="totalHostels" { (view.catalog_count) }
                " hostels"
            }
            (sort_form(&vm.criteria, &vm.state_q))
        }

        @if view.cards.is_empty() {
            div id="noResults" class="no-results" {
                i class="fas fa-search" {}
                h3 { "No hostels found" }
                p { "Try adjusting your search or filters." }
                a class="btn btn-outline" href=(action_href(&vm.state_q, &[("event", "reset")])) {
                    "Reset filters"
                }
            }
        } @else {
            div id="hostelsGrid" class="hostels-grid" {
                @for card in &view.cards {
                    @let id = card.id.to_string();
                    (hostel_card(card, &action_href(&vm.state_q, &[("event", "book"), ("hostel", id.as_str())])))
                }
            }
        }

        (pagination_nav(&view.pagination, &vm.state_q))
    }
}

fn offline() -> Markup {
    html! {
        div class="offline" {
            i class="fas fa-plug" {}
            p { "Server is offline. Please try again." }
        }
    }
}
