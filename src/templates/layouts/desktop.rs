use maud::{html, Markup, DOCTYPE};

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

pub fn desktop_layout(title: &str, logged_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | UniStay" }
                link rel="stylesheet" href=(FONT_AWESOME);
            }
            body {
                header class="navbar" {
                    a href="/" class="logo" {
                        i class="fas fa-home" {}
                        " UniStay"
                    }
                    nav {
                        ul class="nav-menu" {
                            li { a href="/" { "Home" } }
                            li { a href="/hostels" { "Hostels" } }
                        }
                    }

                    @if logged_in {
                        span class="nav-user" { i class="fas fa-user-circle" {} " Signed in" }
                    } @else {
                        a href="/login" class="btn btn-outline" { "Login" }
                    }
                }
                (content)
                footer class="footer" {
                    p { "Student accommodation around Dedan Kimathi University." }
                }
            }
        }
    }
}
