use crate::catalog::{DogSize, PropertyKind};
use std::collections::BTreeSet;
use url::form_urlencoded;

/// The user's active filter selections, built once per filter action.
/// Every field defaults to "inactive", and an inactive field always
/// passes its gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub location: String,
    pub kinds: BTreeSet<PropertyKind>,

    pub dogs: bool,
    pub cats: bool,
    pub exotics: bool,
    pub barn: bool,

    pub dog_sizes: BTreeSet<DogSize>,
    /// Minimum tolerable dog-weight cap, kept only when positive.
    pub dog_weight: Option<f64>,
    pub exotics_types: BTreeSet<String>,

    /// Required amenities, matched exactly against the listing's list.
    pub amenities: BTreeSet<String>,
    /// Accepted HOA answers; may hold true, false, or both.
    pub hoa: BTreeSet<bool>,
    pub max_pet_fee: Option<f64>,
}

impl FilterCriteria {
    /// Build criteria from a request query string. Understands both the
    /// filter form's parameters (`type`, `dogs`, `dogSize`, `dogWeight`,
    /// `exoticsType`, `amenity`, `hoa`, `maxPetFee`) and the hero-search
    /// shared-link parameters (`listingType`, `petType`, `petWeight`,
    /// comma-joined `amenities`). Unknown parameters are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = FilterCriteria::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "location" => criteria.location = value.trim().to_string(),
                "type" => {
                    if let Some(kind) = PropertyKind::parse(&value) {
                        criteria.kinds.insert(kind);
                    }
                }

                "dogs" => criteria.dogs = is_on(&value),
                "cats" => criteria.cats = is_on(&value),
                "exotics" => criteria.exotics = is_on(&value),
                "barn" => criteria.barn = is_on(&value),

                "dogSize" => {
                    if let Some(size) = DogSize::parse(&value) {
                        criteria.dog_sizes.insert(size);
                    }
                }
                "dogWeight" | "petWeight" => criteria.dog_weight = positive_number(&value),
                "exoticsType" => {
                    let wanted = value.trim();
                    if !wanted.is_empty() {
                        criteria.exotics_types.insert(wanted.to_string());
                    }
                }

                "amenity" => {
                    let wanted = value.trim();
                    if !wanted.is_empty() {
                        criteria.amenities.insert(wanted.to_string());
                    }
                }
                "amenities" => {
                    for part in value.split(',') {
                        let wanted = part.trim();
                        if !wanted.is_empty() {
                            criteria.amenities.insert(wanted.to_string());
                        }
                    }
                }

                "hoa" => match value.as_ref() {
                    "yes" | "true" => {
                        criteria.hoa.insert(true);
                    }
                    "no" | "false" => {
                        criteria.hoa.insert(false);
                    }
                    _ => {}
                },
                "maxPetFee" => criteria.max_pet_fee = positive_number(&value),

                // Shared-link parameters from the hero search form.
                "listingType" => match value.as_ref() {
                    "rental" => {
                        criteria.kinds.insert(PropertyKind::Apartment);
                        criteria.kinds.insert(PropertyKind::House);
                        criteria.kinds.insert(PropertyKind::Townhome);
                    }
                    "vacation" => {
                        criteria.kinds.insert(PropertyKind::Vacation);
                    }
                    // "both" and anything else leave the type gate inactive.
                    _ => {}
                },
                "petType" => match value.as_ref() {
                    "dog" => criteria.dogs = true,
                    "cat" => criteria.cats = true,
                    "exotics" => criteria.exotics = true,
                    "barn" => criteria.barn = true,
                    _ => {}
                },

                _ => {}
            }
        }

        criteria
    }
}

fn is_on(value: &str) -> bool {
    matches!(value, "on" | "true" | "1" | "yes")
}

fn positive_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
