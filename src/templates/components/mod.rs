pub mod card;
pub mod error;
pub mod format;

pub use card::{listing_card, pet_badges};
pub use error::error_box;
pub use format::{format_number, format_pricing, format_usd};
