pub mod compute;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod input;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use compute::{compute, Computation};
pub use error::{Result, SolidumError};
