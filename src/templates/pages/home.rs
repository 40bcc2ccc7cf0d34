// templates/pages/home.rs

use crate::auth::accounts::UserAccount;
use crate::catalog::Listing;
use crate::templates::pages::AMENITY_OPTIONS;
use crate::templates::{desktop_layout, error_box, listing_card};
use maud::{html, Markup};

pub fn home_page(
    featured: &[Listing],
    load_error: Option<&str>,
    user: Option<&UserAccount>,
) -> Markup {
    desktop_layout(
        "Home",
        user,
        html! {
            h1 { "Find a place your pets will love" }

            (search_form())

            section {
                h2 { "Featured listings" }
                @if let Some(message) = load_error {
                    (error_box(message))
                }
                p class="muted" { "Showing " (featured.len()) " featured" }
                div class="grid" {
                    @for listing in featured {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}

fn search_form() -> Markup {
    html! {
        form class="filters" action="/listings" method="get" {
            div {
                label for="location" { "Location" }
                input type="text" id="location" name="location" placeholder="City, state, or name";
            }

            fieldset {
                legend { "Listing type" }
                label class="check" {
                    input type="radio" name="listingType" value="rental";
                    " Rental"
                }
                label class="check" {
                    input type="radio" name="listingType" value="vacation";
                    " Vacation"
                }
                label class="check" {
                    input type="radio" name="listingType" value="both" checked;
                    " Both"
                }
            }

            fieldset {
                legend { "Pets" }
                label for="petType" { "Pet type" }
                select id="petType" name="petType" {
                    option value="any" { "Any" }
                    option value="dog" { "Dog" }
                    option value="cat" { "Cat" }
                    option value="exotics" { "Exotics" }
                    option value="barn" { "Barn animals" }
                }
                label for="petWeight" { "Pet weight (lbs)" }
                input type="number" id="petWeight" name="petWeight" min="1";
            }

            fieldset {
                legend { "Amenities" }
                @for amenity in AMENITY_OPTIONS {
                    label class="check" {
                        input type="checkbox" name="amenity" value=(amenity);
                        " " (amenity)
                    }
                }
            }

            button class="btn" type="submit" { "Search" }
        }
    }
}
