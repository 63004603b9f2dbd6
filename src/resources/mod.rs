pub mod cli;
pub mod garden_config;
pub mod nectar_index;

pub use cli::*;
pub use garden_config::*;
pub use nectar_index::*;
