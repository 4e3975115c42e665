pub mod action;
pub use action::*;

pub mod advisor;
pub use advisor::*;

pub mod odds;
pub use odds::*;

pub mod range;
pub use range::*;

pub mod strength;
