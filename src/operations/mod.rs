mod evaluate_base;
mod evaluate_solid;

pub use evaluate_base::{BaseMetrics, EvaluateBase};
pub use evaluate_solid::{EvaluateSolid, ResultSet};
