pub mod integrity;
pub mod model;

pub use model::*;
