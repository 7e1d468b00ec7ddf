use crate::engine::PaginationState;
use crate::params::action_href;
use maud::{html, Markup};

/// Previous / numbered / next links. Nothing is rendered for a single page.
pub fn pagination_nav(p: &PaginationState, state_q: &str) -> Markup {
    html! {
        @if p.total_pages > 1 {
            nav class="pagination" aria-label="Results pages" {
                @if p.has_previous() {
                    a class="page-btn prev" href=(action_href(state_q, &[("event", "page"), ("nav", "prev")])) {
                        i class="fas fa-chevron-left" {}
                    }
                }

                @for n in 1..=p.total_pages {
                    @let num = n.to_string();
                    @if n == p.current_page {
                        span class="page-number active" aria-current="page" { (n) }
                    } @else {
                        a class="page-number" href=(action_href(state_q, &[("event", "page"), ("nav", num.as_str())])) { (n) }
                    }
                }

                @if p.has_next() {
                    a class="page-btn next" href=(action_href(state_q, &[("event", "page"), ("nav", "next")])) {
                        i class="fas fa-chevron-right" {}
                    }
                }
            }
        }
    }
}
