// src/filter/evaluate.rs

use crate::catalog::{DogWeightCap, Listing, PetPolicy};
use crate::filter::FilterCriteria;

/// Decide whether one listing satisfies every active criterion.
///
/// Each gate is an independent AND-ed predicate; the first failing gate
/// excludes the listing. The gate order matters because of the dog-weight
/// no-limit short-circuit below. Never panics, whatever shape the listing
/// data arrived in.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    // Location: query must be a substring of "title city state", both
    // sides case-folded. Missing fields count as empty.
    if !criteria.location.is_empty() {
        let haystack = format!(
            "{} {} {}",
            listing.title.as_deref().unwrap_or(""),
            listing.city.as_deref().unwrap_or(""),
            listing.state.as_deref().unwrap_or("")
        )
        .to_lowercase();

        if !haystack.contains(&criteria.location.to_lowercase()) {
            return false;
        }
    }

    // Property kind.
    if !criteria.kinds.is_empty() {
        match listing.kind {
            Some(kind) if criteria.kinds.contains(&kind) => {}
            _ => return false,
        }
    }

    let default_policy = PetPolicy::default();
    let policy = listing.pet_policy.as_ref().unwrap_or(&default_policy);

    // Pet-category toggles are one-directional: an unchecked criterion
    // never excludes anything.
    if criteria.dogs && !policy.dogs_allowed {
        return false;
    }
    if criteria.cats && !policy.cats_allowed {
        return false;
    }
    if criteria.exotics && !policy.exotics_allowed {
        return false;
    }
    if criteria.barn && !policy.barn_animals_allowed {
        return false;
    }

    // Dog sizes: the listing must allow at least one selected size.
    if !criteria.dog_sizes.is_empty()
        && criteria
            .dog_sizes
            .intersection(&policy.dog_sizes_allowed)
            .next()
            .is_none()
    {
        return false;
    }

    // Exotics types: same shape as the size gate.
    if !criteria.exotics_types.is_empty()
        && criteria
            .exotics_types
            .intersection(&policy.exotics_types_allowed)
            .next()
            .is_none()
    {
        return false;
    }

    // Dog weight: the listing's cap must cover the requested weight.
    if let Some(min_weight) = criteria.dog_weight {
        match policy.dog_max_weight {
            // An explicit no-limit cap accepts the listing outright,
            // skipping the amenity, HOA, and pet-fee gates below.
            Some(DogWeightCap::NoLimit) => return true,
            Some(DogWeightCap::Max(cap)) => {
                if cap < min_weight {
                    return false;
                }
            }
            // Unknown cap with an active weight criterion excludes.
            None => return false,
        }
    }

    // Amenities: every required amenity must appear, exact string match.
    if !criteria.amenities.is_empty()
        && !criteria
            .amenities
            .iter()
            .all(|wanted| listing.amenities.iter().any(|have| have == wanted))
    {
        return false;
    }

    // HOA: the listing's answer must be one of the accepted values.
    // A listing with no HOA information matches neither answer.
    if !criteria.hoa.is_empty() {
        match listing.hoa {
            Some(answer) if criteria.hoa.contains(&answer) => {}
            _ => return false,
        }
    }

    // Pet-fee ceiling: only a numeric fee above the ceiling excludes.
    if let Some(max_fee) = criteria.max_pet_fee {
        if let Some(fee) = policy.monthly_pet_rent {
            if fee > max_fee {
                return false;
            }
        }
    }

    true
}

/// Select the listings that satisfy `criteria`, preserving catalog order.
/// A stable filter, never a sort or a score.
pub fn apply(catalog: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    catalog
        .iter()
        .filter(|listing| matches(listing, criteria))
        .cloned()
        .collect()
}
