//! Content, navigation and animation models for the public pages

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod motion;
pub mod routes;

pub use content::{Event, Feature, Partner, SectionHeading, Stat, Testimonial};
pub use motion::{Entrance, Motion, Trigger};
pub use routes::Route;
