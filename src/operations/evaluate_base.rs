use crate::error::Result;
use crate::expr::{Constants, Quantity};
use crate::geometry::BaseKind;

/// Metrics of a base shape: area, perimeter and apothem.
///
/// The apothem is always a plain number (it never involves π or √3) but is
/// carried as a [`Quantity`] so the solid formulas compose uniformly. For a
/// rectangle it is zero and unused downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMetrics {
    pub area: Quantity,
    pub perimeter: Quantity,
    pub apothem: Quantity,
}

/// Evaluates area, perimeter and apothem of a base shape.
///
/// `r` is the radius for a circle, the apothem for a regular polygon and
/// the length for a rectangle; `w` is consulted only for rectangles.
/// Values are applied as given, without sign validation — the input layer
/// is responsible for rejecting negative dimensions.
pub struct EvaluateBase {
    kind: BaseKind,
    r: f64,
    w: f64,
}

impl EvaluateBase {
    /// Creates a new base evaluation.
    #[must_use]
    pub fn new(kind: BaseKind, r: f64, w: f64) -> Self {
        Self { kind, r, w }
    }

    /// Executes the evaluation under the given constant resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if √3 was resolved to zero (the hexagon side
    /// divides by it).
    pub fn execute(&self, constants: &Constants) -> Result<BaseMetrics> {
        let r = self.r;
        let metrics = match self.kind {
            BaseKind::Rectangle => BaseMetrics {
                area: Quantity::num(r * self.w),
                perimeter: Quantity::num(2.0 * r + 2.0 * self.w),
                apothem: Quantity::zero(),
            },
            BaseKind::Square => {
                let side = 2.0 * r;
                BaseMetrics {
                    area: Quantity::num(side * side),
                    perimeter: Quantity::num(4.0 * side),
                    apothem: Quantity::num(r),
                }
            }
            BaseKind::Triangle => {
                // Equilateral with apothem r: side = 2r·√3.
                let side = Quantity::sqrt3(constants).scale(2.0 * r);
                BaseMetrics {
                    area: (side.powi(2) * Quantity::sqrt3(constants)).scale(0.25),
                    perimeter: side.scale(3.0),
                    apothem: Quantity::num(r),
                }
            }
            BaseKind::Hexagon => {
                // Regular with apothem r: side = 2r/√3.
                let side = Quantity::sqrt3(constants).recip()?.scale(2.0 * r);
                BaseMetrics {
                    area: (side.powi(2) * Quantity::sqrt3(constants)).scale(1.5),
                    perimeter: side.scale(6.0),
                    apothem: Quantity::num(r),
                }
            }
            BaseKind::Circle => BaseMetrics {
                area: Quantity::pi(constants).scale(r * r),
                perimeter: Quantity::pi(constants).scale(2.0 * r),
                apothem: Quantity::num(r),
            },
        };
        Ok(metrics)
    }
}
