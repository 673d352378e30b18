//! Player character

mod you;

pub use you::Player;
