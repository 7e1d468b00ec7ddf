use crate::engine::{DisplayRecord, StarRating};
use maud::{html, Markup};

const PLACEHOLDER_IMAGE: &str = "/static/img/hostel-placeholder.jpg";

pub fn star_rating(stars: &StarRating) -> Markup {
    html! {
        span class="stars" {
            @for glyph in stars.glyphs() {
                i class=(glyph.css_class()) {}
            }
        }
    }
}

/// A listing priced above its original price keeps its savings line, marked.
pub fn savings_class(savings: i64) -> &'static str {
    if savings < 0 {
        "savings savings-negative"
    } else {
        "savings"
    }
}

/// One result card. `book_href` runs the booking event for this hostel.
pub fn hostel_card(card: &DisplayRecord, book_href: &str) -> Markup {
    let cover = card
        .images
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        article class="hostel-card" data-id=(card.id) {
            div class="hostel-image" {
                img src=(cover) alt=(card.name) loading="lazy";
                span class="discount-badge" { (card.discount_badge) }
                @if card.verified {
                    span class="verified-badge" { i class="fas fa-check-circle" {} " Verified" }
                }
            }

            div class="hostel-info" {
                h3 class="hostel-name" {
                    a href={ "/hostels/" (card.id) } { (card.name) }
                }
                p class="hostel-location" {
                    i class="fas fa-map-marker-alt" {}
                    " " (card.location)
                }

                div class="hostel-meta" {
                    span class="roommate" {
                        i class={ "fas " (card.roommate_icon) } {}
                        " " (card.roommate_label)
                    }
                    span class="rating" {
                        (star_rating(&card.stars))
                        " " (card.rating_label)
                    }
                }

                div class="amenities" {
                    @for amenity in &card.amenity_preview {
                        span class="amenity-tag" { i class="fas fa-check" {} " " (amenity) }
                    }
                    @if let Some(more) = &card.more_amenities {
                        span class="amenity-tag" { (more) }
                    }
                }

                div class="hostel-price" {
                    span class="price" { (card.price_label) small { "/month" } }
                    span class="original-price" { s { (card.original_price_label) } }
                    span class=(savings_class(card.savings)) { (card.savings_label) }
                }

                div class="hostel-actions" {
                    a class="btn btn-outline" href={ "/hostels/" (card.id) } { "View Details" }
                    @if card.available {
                        a class="btn btn-primary book-btn" href=(book_href) { "Book Now" }
                    } @else {
                        span class="btn btn-disabled" { "Fully Booked" }
                    }
                }
            }
        }
    }
}
