pub mod details;
pub mod home;
pub mod listings;
pub mod login;

pub use details::{details_error_page, details_page};
pub use home::home_page;
pub use listings::listings_page;
pub use login::{login_page, verify_page};

/// Amenity display names offered by the search forms. Matching against
/// listing data is exact, so forms and data share these strings.
pub const AMENITY_OPTIONS: [&str; 5] = ["Fenced yard", "Washer/Dryer", "Garage", "Gym", "Pool"];

/// Exotics categories offered by the filter form.
pub const EXOTICS_OPTIONS: [(&str, &str); 5] = [
    ("birds", "Birds"),
    ("ferrets", "Ferrets"),
    ("rabbits", "Rabbits"),
    ("reptiles", "Reptiles"),
    ("insects", "Insects"),
];
