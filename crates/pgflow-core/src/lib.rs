pub mod assemble;
pub mod component;
pub mod error;
pub mod tag;

pub use assemble::*;
pub use component::*;
pub use error::*;
pub use tag::*;
