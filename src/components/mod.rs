pub mod flower;
pub mod parts;
pub mod regrowth;

pub use flower::*;
pub use parts::*;
pub use regrowth::*;
