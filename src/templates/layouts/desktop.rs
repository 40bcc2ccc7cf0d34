use crate::auth::accounts::UserAccount;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user: Option<&UserAccount>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Apetments" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site" {
                    a href="/" { h3 { "🐾 Apetments" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/listings" { "Listings" } }
                        }
                    }
                    @if let Some(user) = user {
                        span {
                            (user.display_name())
                            " · "
                            a href="/auth/logout" { "Logout" }
                        }
                    } @else {
                        a href="/login" { "Login / Register" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
