use crate::auth::accounts::UserAccount;
use crate::catalog::{DogSize, Listing, PropertyKind};
use crate::filter::FilterCriteria;
use crate::templates::components::format_number;
use crate::templates::pages::{AMENITY_OPTIONS, EXOTICS_OPTIONS};
use crate::templates::{desktop_layout, error_box, listing_card};
use maud::{html, Markup};

pub fn listings_page(
    results: &[Listing],
    criteria: &FilterCriteria,
    load_error: Option<&str>,
    user: Option<&UserAccount>,
) -> Markup {
    desktop_layout(
        "Listings",
        user,
        html! {
            h1 { "Browse listings" }

            div class="browse" {
                (filters_form(criteria))

                section {
                    @if let Some(message) = load_error {
                        (error_box(message))
                    }
                    p class="muted" {
                        "Showing " (results.len())
                        @if results.len() == 1 { " result" } @else { " results" }
                    }
                    div class="grid" {
                        @for listing in results {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}

fn kind_label(kind: PropertyKind) -> &'static str {
    match kind {
        PropertyKind::Apartment => "Apartment",
        PropertyKind::House => "House",
        PropertyKind::Townhome => "Townhome",
        PropertyKind::Vacation => "Vacation",
    }
}

fn size_label(size: DogSize) -> &'static str {
    match size {
        DogSize::Small => "Small",
        DogSize::Medium => "Medium",
        DogSize::Large => "Large",
    }
}

fn filters_form(criteria: &FilterCriteria) -> Markup {
    html! {
        form class="filters" action="/listings" method="get" {
            div {
                label for="location" { "Location" }
                input type="text" id="location" name="location" value=(criteria.location);
            }

            fieldset {
                legend { "Property type" }
                @for kind in PropertyKind::ALL {
                    label class="check" {
                        input type="checkbox" name="type" value=(kind.as_str())
                            checked[criteria.kinds.contains(&kind)];
                        " " (kind_label(kind))
                    }
                }
            }

            fieldset {
                legend { "Pets" }
                label class="check" {
                    input type="checkbox" name="dogs" checked[criteria.dogs];
                    " Dogs"
                }
                label class="check" {
                    input type="checkbox" name="cats" checked[criteria.cats];
                    " Cats"
                }
                label class="check" {
                    input type="checkbox" name="exotics" checked[criteria.exotics];
                    " Exotics"
                }
                label class="check" {
                    input type="checkbox" name="barn" checked[criteria.barn];
                    " Barn animals"
                }
            }

            fieldset {
                legend { "Dogs" }
                @for size in DogSize::ALL {
                    label class="check" {
                        input type="checkbox" name="dogSize" value=(size.as_str())
                            checked[criteria.dog_sizes.contains(&size)];
                        " " (size_label(size))
                    }
                }
                label for="dogWeight" { "Dog weight (lbs)" }
                input type="number" id="dogWeight" name="dogWeight" min="1"
                    value=[criteria.dog_weight.map(format_number)];
            }

            fieldset {
                legend { "Exotics types" }
                @for (value, label) in EXOTICS_OPTIONS {
                    label class="check" {
                        input type="checkbox" name="exoticsType" value=(value)
                            checked[criteria.exotics_types.contains(value)];
                        " " (label)
                    }
                }
            }

            fieldset {
                legend { "Amenities" }
                @for amenity in AMENITY_OPTIONS {
                    label class="check" {
                        input type="checkbox" name="amenity" value=(amenity)
                            checked[criteria.amenities.contains(amenity)];
                        " " (amenity)
                    }
                }
            }

            fieldset {
                legend { "HOA" }
                label class="check" {
                    input type="checkbox" name="hoa" value="yes" checked[criteria.hoa.contains(&true)];
                    " HOA"
                }
                label class="check" {
                    input type="checkbox" name="hoa" value="no" checked[criteria.hoa.contains(&false)];
                    " No HOA"
                }
            }

            fieldset {
                legend { "Pet fees" }
                label for="maxPetFee" { "Max monthly pet rent ($)" }
                input type="number" id="maxPetFee" name="maxPetFee" min="1"
                    value=[criteria.max_pet_fee.map(format_number)];
            }

            button class="btn" type="submit" { "Apply filters" }
            " "
            a class="btn ghost" href="/listings" { "Clear" }
        }
    }
}
