//! Navigation targets linked from the public pages.
//!
//! The pages behind these paths live outside this crate; the homepage only
//! needs to point at them.

use derive_more::Display;

/// An in-app path the homepage links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Route {
    #[display("/")]
    Home,
    #[display("/register")]
    Register,
    #[display("/login")]
    Login,
    #[display("/events")]
    Events,
    #[display("/events/{_0}")]
    EventDetail(u32),
}

impl Route {
    /// The literal path, suitable for an `href`.
    pub fn path(&self) -> String {
        self.to_string()
    }
}
