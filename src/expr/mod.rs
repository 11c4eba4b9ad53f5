mod constant;
mod format;
mod quantity;

pub use constant::{ConstantMode, Constants};
pub use format::{format_decimal, DisplayValue};
pub use quantity::Quantity;
