mod loader;
mod models;

pub use loader::{decode_catalog, CatalogError, CatalogLoader};
pub use models::{DogSize, DogWeightCap, Listing, PetPolicy, PricePeriod, Pricing, PropertyKind};
