use crate::db::bookings::{BookingIntent, ALLOWED_DURATIONS};
use crate::domain::HostelRecord;
use crate::engine::presentation::format_kes;
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn summary(record: &HostelRecord) -> Markup {
    html! {
        div class="booking-summary" {
            h2 { (record.name) }
            p { i class="fas fa-map-marker-alt" {} " " (record.location) }
            div class="price-breakdown" {
                div class="price-item" {
                    span { "Monthly Rent:" }
                    span { (format_kes(record.price)) }
                }
                div class="price-item total" {
                    span { "First Month Total:" }
                    span { (format_kes(record.price)) }
                }
            }
        }
    }
}

pub fn booking_page(record: &HostelRecord, error: Option<&str>) -> Markup {
    desktop_layout(
        "Book",
        true,
        html! {
            main class="container narrow booking" {
                (summary(record))

                @if let Some(msg) = error {
                    p class="form-error" role="alert" { (msg) }
                }

                form method="post" action={ "/hostels/" (record.id) "/book" } id="quickBookingForm" {
                    div class="form-group" {
                        label for="moveInDate" { "Move-in Date" }
                        input type="date" id="moveInDate" name="move_in" class="form-control" required;
                    }

                    div class="form-group" {
                        label for="duration" { "Duration" }
                        select id="duration" name="duration" class="form-control" {
                            @for months in ALLOWED_DURATIONS {
                                option value=(months) {
                                    (months) @if months == 1 { " Month" } @else { " Months" }
                                }
                            }
                        }
                    }

                    button type="submit" class="btn btn-primary btn-lg" {
                        i class="fas fa-lock" {} " Confirm Booking"
                    }
                }
            }
        },
    )
}

pub fn booking_confirmed_page(record: &HostelRecord, intent: &BookingIntent) -> Markup {
    desktop_layout(
        "Booking confirmed",
        true,
        html! {
            main class="container narrow booking" {
                div class="booking-confirmed" role="status" {
                    i class="fas fa-check-circle" {}
                    p class="confirmation" {
                        "Booking confirmed for " (record.name) "! Redirecting to payment..."
                    }
                }

                dl class="booking-details" {
                    dt { "Reference" }
                    dd class="reference" { (intent.reference) }
                    dt { "Move-in date" }
                    dd { (intent.move_in.format("%d %b %Y").to_string()) }
                    dt { "Duration" }
                    dd { (intent.duration_months) " month(s)" }
                    dt { "Monthly rent" }
                    dd { (format_kes(intent.monthly_rent)) }
                }

                a class="btn btn-outline" href="/hostels" { "Back to hostels" }
            }
        },
    )
}
