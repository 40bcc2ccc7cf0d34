pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{error_box, listing_card, pet_badges};
pub use layouts::desktop::desktop_layout;
