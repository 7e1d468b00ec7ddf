use crate::templates::desktop_layout;
use maud::{html, Markup};

/// `booking_for` is the hostel the user was trying to book, if any.
pub fn login_page(booking_for: Option<i64>) -> Markup {
    desktop_layout(
        "Sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                @if booking_for.is_some() {
                    p class="notice" { "Please sign in to continue with your booking." }
                }

                form method="post" action="/login" class="login-form" {
                    @if let Some(id) = booking_for {
                        input type="hidden" name="redirect" value="booking";
                        input type="hidden" name="hostel" value=(id);
                    }

                    label for="email" { "Email address" }
                    input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="you@students.dkut.ac.ke"
                        autocomplete="email"
                        required;

                    button type="submit" class="btn btn-primary" { "Sign in" }
                }
            }
        },
    )
}
