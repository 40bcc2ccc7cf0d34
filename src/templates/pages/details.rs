use crate::auth::accounts::UserAccount;
use crate::catalog::{DogWeightCap, Listing, PetPolicy};
use crate::templates::components::{format_number, format_pricing, format_usd};
use crate::templates::{desktop_layout, error_box};
use maud::{html, Markup};

pub fn details_page(listing: &Listing, user: Option<&UserAccount>) -> Markup {
    let title = listing.title.as_deref().unwrap_or("Untitled listing");
    let city = listing.city.as_deref().unwrap_or("");
    let state = listing.state.as_deref().unwrap_or("");

    desktop_layout(
        title,
        user,
        html! {
            h1 { (title) }
            p class="muted" {
                (city)
                @if !city.is_empty() && !state.is_empty() { ", " }
                (state)
            }
            p class="price" { (format_pricing(listing.pricing.as_ref())) }
            @if let Some(kind) = listing.kind {
                span class="badge kind" { (kind.as_str().to_uppercase()) }
            }

            (gallery(listing, title))

            section {
                h2 { "Overview" }
                p { (overview_line(listing)) }
            }

            section {
                h2 { "Pet policy" }
                (pet_policy_rows(listing.pet_policy.as_ref()))
            }

            section {
                h2 { "Amenities" }
                @if listing.amenities.is_empty() {
                    p class="muted" { "No amenities listed." }
                } @else {
                    ul {
                        @for amenity in &listing.amenities {
                            li { (amenity) }
                        }
                    }
                }
            }

            section {
                h2 { "Description" }
                p { (listing.description.as_deref().unwrap_or("No description provided.")) }
            }
        },
    )
}

/// Error rendition of the detail page: missing id, unknown id, or a
/// failed catalog load. Keeps the page interactive.
pub fn details_error_page(message: &str, user: Option<&UserAccount>) -> Markup {
    desktop_layout(
        "Listing not found",
        user,
        html! {
            h1 { "Listing not found" }
            (error_box(message))
            p { a class="btn ghost" href="/listings" { "Back to listings" } }
        },
    )
}

fn gallery(listing: &Listing, title: &str) -> Markup {
    html! {
        div class="gallery-main" {
            @if let Some(cover) = listing.images.first() {
                img src=(cover) alt=(title);
            } @else {
                div class="no-image" { span { "No image available" } }
            }
        }
        @if listing.images.len() > 1 {
            div class="thumbs" {
                @for (idx, src) in listing.images.iter().enumerate().skip(1) {
                    img src=(src) alt={ (title) " thumbnail " (idx + 1) };
                }
            }
        }
    }
}

fn overview_line(listing: &Listing) -> String {
    let beds = listing
        .bedrooms
        .map(|n| format!("{} bedrooms", format_number(n)))
        .unwrap_or_else(|| "— bedrooms".to_string());
    let baths = listing
        .bathrooms
        .map(|n| format!("{} bathrooms", format_number(n)))
        .unwrap_or_else(|| "— bathrooms".to_string());
    let sqft = listing
        .sqft
        .map(|n| format!("{} sq ft", format_number(n)))
        .unwrap_or_else(|| "— sq ft".to_string());

    format!("{beds} • {baths} • {sqft}")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn policy_row(label: &str, value: &str) -> Markup {
    html! {
        div class="policy-row" {
            span class="muted" { (label) }
            span { (value) }
        }
    }
}

fn pet_policy_rows(policy: Option<&PetPolicy>) -> Markup {
    let default_policy = PetPolicy::default();
    let policy = policy.unwrap_or(&default_policy);

    let dog_sizes = if policy.dog_sizes_allowed.is_empty() {
        "—".to_string()
    } else {
        policy
            .dog_sizes_allowed
            .iter()
            .map(|size| size.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let dog_max = match policy.dog_max_weight {
        Some(DogWeightCap::NoLimit) => "No limit".to_string(),
        Some(DogWeightCap::Max(w)) => format!("{} lbs", format_number(w)),
        None => "—".to_string(),
    };

    let exotics_types = if policy.exotics_types_allowed.is_empty() {
        "—".to_string()
    } else {
        policy
            .exotics_types_allowed
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    let deposit = policy
        .pet_deposit
        .map(format_usd)
        .unwrap_or_else(|| "—".to_string());
    let pet_rent = policy
        .monthly_pet_rent
        .map(|fee| format!("{}/mo", format_usd(fee)))
        .unwrap_or_else(|| "—".to_string());

    html! {
        (policy_row("Dogs allowed", yes_no(policy.dogs_allowed)))
        (policy_row("Dog sizes", if policy.dogs_allowed { dog_sizes.as_str() } else { "N/A" }))
        (policy_row("Dog max weight", if policy.dogs_allowed { dog_max.as_str() } else { "N/A" }))
        (policy_row("Cats allowed", yes_no(policy.cats_allowed)))
        (policy_row("Exotics allowed", yes_no(policy.exotics_allowed)))
        (policy_row("Exotics types", if policy.exotics_allowed { exotics_types.as_str() } else { "N/A" }))
        (policy_row("Barn animals allowed", yes_no(policy.barn_animals_allowed)))
        (policy_row("Pet deposit", &deposit))
        (policy_row("Monthly pet rent", &pet_rent))
    }
}
