use crate::domain::HostelRecord;
use crate::engine::DisplayRecord;
use crate::params::action_href;
use crate::templates::components::{card, savings_class, star_rating};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn detail_page(logged_in: bool, record: &HostelRecord, view: &DisplayRecord) -> Markup {
    let id = record.id.to_string();

    desktop_layout(
        &record.name,
        logged_in,
        html! {
            main class="container hostel-detail" {
                a href="/hostels" class="back-link" { i class="fas fa-arrow-left" {} " Back to hostels" }

                div class="gallery" {
                    @for (i, src) in record.images.iter().enumerate() {
                        img src=(src) alt={ (record.name) " photo " (i + 1) };
                    }
                }

                header class="detail-header" {
                    h1 {
                        (record.name)
                        @if record.verified {
                            span class="verified-badge" { i class="fas fa-check-circle" {} " Verified" }
                        }
                    }
                    p class="hostel-location" { i class="fas fa-map-marker-alt" {} " " (record.location) }
                    p class="rating" { (star_rating(&view.stars)) " " (view.rating_label) " reviews" }
                }

                div class="detail-price" {
                    span class="price" { (view.price_label) small { "/month" } }
                    span class="original-price" { s { (view.original_price_label) } }
                    span class="discount-badge" { (view.discount_badge) }
                    span class=(savings_class(view.savings)) { (view.savings_label) }
                }

                p class="roommate" { i class={ "fas " (view.roommate_icon) } {} " " (view.roommate_label) }

                (card("About this hostel", html! {
                    p { (record.description) }
                    @if let Some(landlord) = &record.landlord {
                        p class="landlord" { "Landlord: " strong { (landlord) } }
                    }
                }))

                (card("Amenities", html! {
                    ul class="amenity-list" {
                        @for amenity in &record.amenities {
                            li { i class="fas fa-check" {} " " (amenity) }
                        }
                    }
                }))

                @if let Some(at) = record.coordinates {
                    (card("Location", html! {
                        p class="coordinates" { (format!("{:.4}, {:.4}", at.lat, at.long)) }
                    }))
                }

                @if record.available {
                    a class="btn btn-primary btn-lg book-btn" href=(action_href("", &[("event", "book"), ("hostel", id.as_str())])) {
                        "Book Now"
                    }
                } @else {
                    p class="unavailable" { "This hostel is fully booked." }
                }
            }
        },
    )
}
