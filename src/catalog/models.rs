use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeSet;

// listing
//  ├── id, title, city, state, type
//  ├── bedrooms / bathrooms / sqft
//  ├── pricing { amount, type }
//  ├── petPolicy
//  │    ├── dogsAllowed / catsAllowed / exoticsAllowed / barnAnimalsAllowed
//  │    ├── dogSizesAllowed, dogMaxWeight (null = no limit)
//  │    ├── exoticsTypesAllowed
//  │    └── petDeposit / monthlyPetRent
//  ├── amenities, hoa
//  └── images, description
//
// The catalog comes from a hand-edited JSON file, so every field decodes
// leniently: a wrong shape degrades to its absent representation instead
// of failing the record or the load.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Listing {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<PropertyKind>,

    #[serde(deserialize_with = "finite_number")]
    pub bedrooms: Option<f64>,
    #[serde(deserialize_with = "finite_number")]
    pub bathrooms: Option<f64>,
    #[serde(deserialize_with = "finite_number")]
    pub sqft: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub pricing: Option<Pricing>,
    #[serde(deserialize_with = "lenient")]
    pub pet_policy: Option<PetPolicy>,

    #[serde(deserialize_with = "string_list")]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub hoa: Option<bool>,

    #[serde(deserialize_with = "string_list")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Closed set of property kinds. Unknown type strings decode as `None`
/// and therefore never satisfy an active type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Townhome,
    Vacation,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::Apartment,
        PropertyKind::House,
        PropertyKind::Townhome,
        PropertyKind::Vacation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Apartment => "apartment",
            PropertyKind::House => "house",
            PropertyKind::Townhome => "townhome",
            PropertyKind::Vacation => "vacation",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "apartment" => Some(PropertyKind::Apartment),
            "house" => Some(PropertyKind::House),
            "townhome" => Some(PropertyKind::Townhome),
            "vacation" => Some(PropertyKind::Vacation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pricing {
    pub amount: f64,
    #[serde(rename = "type")]
    pub period: PricePeriod,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PricePeriod {
    Monthly,
    Nightly,
    Other(String),
}

impl PricePeriod {
    /// Label used after the amount, e.g. "$1,500 / month".
    pub fn label(&self) -> &str {
        match self {
            PricePeriod::Monthly => "month",
            PricePeriod::Nightly => "night",
            PricePeriod::Other(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for PricePeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "monthly" => PricePeriod::Monthly,
            "nightly" => PricePeriod::Nightly,
            _ => PricePeriod::Other(raw),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetPolicy {
    #[serde(deserialize_with = "lenient_bool")]
    pub dogs_allowed: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub cats_allowed: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub exotics_allowed: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub barn_animals_allowed: bool,

    #[serde(deserialize_with = "dog_size_set")]
    pub dog_sizes_allowed: BTreeSet<DogSize>,
    #[serde(deserialize_with = "weight_cap")]
    pub dog_max_weight: Option<DogWeightCap>,

    #[serde(deserialize_with = "string_set")]
    pub exotics_types_allowed: BTreeSet<String>,

    #[serde(deserialize_with = "finite_number")]
    pub pet_deposit: Option<f64>,
    #[serde(deserialize_with = "finite_number")]
    pub monthly_pet_rent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSize {
    Small,
    Medium,
    Large,
}

impl DogSize {
    pub const ALL: [DogSize; 3] = [DogSize::Small, DogSize::Medium, DogSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            DogSize::Small => "small",
            DogSize::Medium => "medium",
            DogSize::Large => "large",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "small" => Some(DogSize::Small),
            "medium" => Some(DogSize::Medium),
            "large" => Some(DogSize::Large),
            _ => None,
        }
    }
}

/// The dog-weight cap is tri-state on the wire: an explicit `null` means
/// the listing imposes no limit, a number is the limit in pounds, and an
/// absent or malformed value means the cap is simply unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DogWeightCap {
    NoLimit,
    Max(f64),
}

/// Decode a value of type `T`, mapping any shape mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Booleans default to false on any shape mismatch.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

fn finite_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()))
}

/// Keep string entries, drop anything else; a non-array becomes empty.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn string_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    string_list(deserializer).map(|items| items.into_iter().collect())
}

fn dog_size_set<'de, D>(deserializer: D) -> Result<BTreeSet<DogSize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => BTreeSet::new(),
    })
}

fn weight_cap<'de, D>(deserializer: D) -> Result<Option<DogWeightCap>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Some(DogWeightCap::NoLimit),
        Value::Number(n) => n
            .as_f64()
            .filter(|w| w.is_finite())
            .map(DogWeightCap::Max),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn well_formed_record_decodes_fully() {
        let listing = decode(json!({
            "id": 7,
            "title": "Maple Apartments",
            "city": "Austin",
            "state": "TX",
            "type": "apartment",
            "bedrooms": 2,
            "bathrooms": 1.5,
            "sqft": 900,
            "pricing": { "amount": 1500, "type": "monthly" },
            "petPolicy": {
                "dogsAllowed": true,
                "dogSizesAllowed": ["small", "medium"],
                "dogMaxWeight": 40,
                "monthlyPetRent": 35
            },
            "amenities": ["Pool", "Garage"],
            "hoa": true,
            "images": ["a.jpg", "b.jpg"],
            "description": "Near the park."
        }));

        assert_eq!(listing.id, Some(7));
        assert_eq!(listing.kind, Some(PropertyKind::Apartment));
        assert_eq!(listing.bathrooms, Some(1.5));
        assert_eq!(
            listing.pricing,
            Some(Pricing {
                amount: 1500.0,
                period: PricePeriod::Monthly
            })
        );
        let policy = listing.pet_policy.unwrap();
        assert!(policy.dogs_allowed);
        assert!(!policy.cats_allowed);
        assert_eq!(policy.dog_max_weight, Some(DogWeightCap::Max(40.0)));
        assert_eq!(policy.monthly_pet_rent, Some(35.0));
        assert_eq!(listing.amenities, vec!["Pool", "Garage"]);
        assert_eq!(listing.hoa, Some(true));
        assert_eq!(listing.images[0], "a.jpg");
    }

    #[test]
    fn malformed_fields_degrade_to_absent() {
        let listing = decode(json!({
            "id": "seven",
            "title": 5,
            "type": "castle",
            "bedrooms": "three",
            "pricing": "call us",
            "petPolicy": 12,
            "amenities": "Pool",
            "hoa": "yes",
            "images": ["a.jpg", 9, "b.jpg"]
        }));

        assert_eq!(listing.id, None);
        assert_eq!(listing.title, None);
        assert_eq!(listing.kind, None);
        assert_eq!(listing.bedrooms, None);
        assert_eq!(listing.pricing, None);
        assert_eq!(listing.pet_policy, None);
        assert!(listing.amenities.is_empty());
        assert_eq!(listing.hoa, None);
        assert_eq!(listing.images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn empty_record_decodes_to_defaults() {
        let listing = decode(json!({}));
        assert_eq!(listing, Listing::default());
    }

    #[test]
    fn dog_max_weight_distinguishes_null_number_and_garbage() {
        let null_cap = decode(json!({ "petPolicy": { "dogMaxWeight": null } }));
        assert_eq!(
            null_cap.pet_policy.unwrap().dog_max_weight,
            Some(DogWeightCap::NoLimit)
        );

        let numeric = decode(json!({ "petPolicy": { "dogMaxWeight": 55 } }));
        assert_eq!(
            numeric.pet_policy.unwrap().dog_max_weight,
            Some(DogWeightCap::Max(55.0))
        );

        let garbage = decode(json!({ "petPolicy": { "dogMaxWeight": "heavy" } }));
        assert_eq!(garbage.pet_policy.unwrap().dog_max_weight, None);

        let absent = decode(json!({ "petPolicy": {} }));
        assert_eq!(absent.pet_policy.unwrap().dog_max_weight, None);
    }

    #[test]
    fn unknown_dog_sizes_are_dropped() {
        let listing = decode(json!({
            "petPolicy": { "dogSizesAllowed": ["small", "giant", "large"] }
        }));
        let policy = listing.pet_policy.unwrap();
        assert_eq!(
            policy.dog_sizes_allowed,
            BTreeSet::from([DogSize::Small, DogSize::Large])
        );
    }

    #[test]
    fn price_period_keeps_unrecognized_labels() {
        let listing = decode(json!({
            "pricing": { "amount": 900, "type": "weekly" }
        }));
        let pricing = listing.pricing.unwrap();
        assert_eq!(pricing.period, PricePeriod::Other("weekly".into()));
        assert_eq!(pricing.period.label(), "weekly");
        assert_eq!(PricePeriod::Monthly.label(), "month");
        assert_eq!(PricePeriod::Nightly.label(), "night");
    }
}
