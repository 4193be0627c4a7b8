//! Application pages module
//!
//! - Homepage
//! - Not found (404) page

mod home;
mod not_found;

pub use home::{HomeContent, HomePage};
pub use not_found::NotFoundPage;
