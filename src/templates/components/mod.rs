use maud::{html, Markup};

pub mod error;
pub mod filters;
pub mod hostel_card;
pub mod pagination;

pub use error::html_error_response;
pub use filters::{filter_sidebar, search_form, sort_form};
pub use hostel_card::{hostel_card, savings_class, star_rating};
pub use pagination::pagination_nav;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
