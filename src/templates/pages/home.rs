// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};
use url::form_urlencoded;

const POPULAR_LOCATIONS: [&str; 4] = ["Gate A", "Gate B", "Boma", "Nyeri View"];

pub fn home_page(logged_in: bool) -> Markup {
    desktop_layout(
        "Home",
        logged_in,
        html! {
            section class="hero" {
                h1 { "Find your student home near campus" }
                p class="lead" { "Verified hostels around Dedan Kimathi University, filtered your way." }

                form class="hero-search" method="get" action="/hostels/action" {
                    input type="hidden" name="event" value="search";
                    input
                        type="search"
                        name="term"
                        placeholder="Search by hostel name or location";
                    button type="submit" class="btn btn-primary" { i class="fas fa-search" {} " Search" }
                }

                div class="popular-locations" {
                    span { "Popular locations:" }
                    @for place in POPULAR_LOCATIONS {
                        @let q: String = form_urlencoded::Serializer::new(String::new())
                            .append_pair("q", place)
                            .finish();
                        a class="location-tag" href={ "/hostels?" (q) } { (place) }
                    }
                }
            }
        },
    )
}
