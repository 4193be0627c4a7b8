pub mod icon;
pub mod motion;
pub mod pages;

pub use icon::{Icon, icons};
pub use motion::{MotionStyles, Reveal, RevealScript};
pub use pages::{HomeContent, HomePage, NotFoundPage};
