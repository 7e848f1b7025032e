pub mod canon;
pub mod emit;
pub mod model;

pub use canon::*;
pub use emit::*;
pub use model::*;
