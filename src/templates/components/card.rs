use crate::catalog::{Listing, PetPolicy};
use crate::templates::components::{format_number, format_pricing};
use maud::{html, Markup};

/// One listing card for the home and browse grids.
pub fn listing_card(listing: &Listing) -> Markup {
    let title = listing.title.as_deref().unwrap_or("Untitled listing");
    let city = listing.city.as_deref().unwrap_or("");
    let state = listing.state.as_deref().unwrap_or("");

    let beds = listing.bedrooms.map(|n| format!("{} bd", format_number(n)));
    let baths = listing.bathrooms.map(|n| format!("{} ba", format_number(n)));
    let meta = [beds, baths]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" • ");

    html! {
        div class="card" {
            @if let Some(cover) = listing.images.first() {
                img class="cover" src=(cover) alt=(title);
            } @else {
                div class="no-image" { span { "No image" } }
            }
            div class="card-body" {
                h3 { (title) }
                @if let Some(kind) = listing.kind {
                    span class="badge kind" { (kind.as_str()) }
                }
                div class="muted" {
                    (city)
                    @if !city.is_empty() && !state.is_empty() { ", " }
                    (state)
                    @if !meta.is_empty() { " • " (meta) }
                }
                div class="price" { (format_pricing(listing.pricing.as_ref())) }
                div { (pet_badges(listing.pet_policy.as_ref())) }
                @if let Some(id) = listing.id {
                    a class="btn ghost" href={ "/details?id=" (id) } { "View details" }
                }
            }
        }
    }
}

/// Which animals a listing welcomes, or a single "No pets" badge.
pub fn pet_badges(policy: Option<&PetPolicy>) -> Markup {
    let default_policy = PetPolicy::default();
    let policy = policy.unwrap_or(&default_policy);

    let none = !policy.dogs_allowed
        && !policy.cats_allowed
        && !policy.exotics_allowed
        && !policy.barn_animals_allowed;

    html! {
        @if none {
            span class="badge off" { "No pets" }
        } @else {
            @if policy.dogs_allowed { span class="badge ok" { "Dogs" } }
            @if policy.cats_allowed { span class="badge ok" { "Cats" } }
            @if policy.exotics_allowed { span class="badge ok" { "Exotics" } }
            @if policy.barn_animals_allowed { span class="badge ok" { "Barn" } }
        }
    }
}
