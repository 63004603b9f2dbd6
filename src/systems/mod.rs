pub mod flower;
pub mod garden;

pub use flower::*;
pub use garden::*;
