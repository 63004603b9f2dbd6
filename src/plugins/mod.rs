pub mod core;
pub mod flower;
pub mod garden;
pub mod physics;
