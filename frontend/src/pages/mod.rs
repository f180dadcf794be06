//! Routed pages.

pub mod articles_page;
pub mod evaluations_page;
pub mod home_page;
pub mod list_page;
pub mod schools_page;
