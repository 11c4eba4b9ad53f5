use crate::error::Result;
use crate::expr::{Constants, Quantity};
use crate::geometry::{BaseKind, Dimensions, SolidKind};

use super::{BaseMetrics, EvaluateBase};

/// The four derived results of a solid evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Area of the (bottom) base.
    pub base_area: Quantity,
    /// Area of the side surface, excluding top/bottom bases.
    pub lateral_area: Quantity,
    /// Total surface area.
    pub total_area: Quantity,
    /// Enclosed volume.
    pub volume: Quantity,
}

/// Evaluates base area, lateral area, total area and volume of a solid.
///
/// Round solids (sphere, cone, cylinder) ignore the requested base kind and
/// stand on a circle. A height of zero collapses lateral area and volume to
/// zero with no special casing; none of the formulas divides by a dimension.
pub struct EvaluateSolid {
    solid: SolidKind,
    base: BaseKind,
    dims: Dimensions,
}

impl EvaluateSolid {
    /// Creates a new solid evaluation.
    #[must_use]
    pub fn new(solid: SolidKind, base: BaseKind, dims: Dimensions) -> Self {
        Self { solid, base, dims }
    }

    /// The base kind actually used: round solids force a circle.
    #[must_use]
    pub fn effective_base(&self) -> BaseKind {
        if self.solid.uses_polygonal_base() {
            self.base
        } else {
            BaseKind::Circle
        }
    }

    /// Executes the evaluation under the given constant resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if a constant resolved to a value the formulas
    /// cannot divide or take roots by (e.g. √3 defined as zero).
    pub fn execute(&self, constants: &Constants) -> Result<ResultSet> {
        let Dimensions { r1, r2, w, h } = self.dims;
        let base = self.effective_base();

        match self.solid {
            SolidKind::Sphere => {
                let area = Quantity::pi(constants).scale(4.0 * r1 * r1);
                Ok(ResultSet {
                    base_area: Quantity::pi(constants).scale(r1 * r1),
                    lateral_area: area.clone(),
                    total_area: area,
                    volume: Quantity::pi(constants).scale(4.0 / 3.0 * r1.powi(3)),
                })
            }
            SolidKind::Cone | SolidKind::Pyramid => {
                let metrics = EvaluateBase::new(base, r1, w).execute(constants)?;
                let lateral_area = if self.solid == SolidKind::Pyramid
                    && base == BaseKind::Rectangle
                {
                    // Two slant heights, one per base-edge pair.
                    let slant_l = Quantity::num(h * h + (w / 2.0).powi(2)).sqrt()?;
                    let slant_w = Quantity::num(h * h + (r1 / 2.0).powi(2)).sqrt()?;
                    slant_l.scale(r1) + slant_w.scale(w)
                } else {
                    let slant = (metrics.apothem.powi(2) + Quantity::num(h * h)).sqrt()?;
                    (metrics.perimeter.clone() * slant).scale(0.5)
                };
                Ok(ResultSet {
                    total_area: metrics.area.clone() + lateral_area.clone(),
                    volume: metrics.area.scale(h / 3.0),
                    base_area: metrics.area,
                    lateral_area,
                })
            }
            SolidKind::Cylinder | SolidKind::Prism => {
                let metrics = EvaluateBase::new(base, r1, w).execute(constants)?;
                let lateral_area = metrics.perimeter.scale(h);
                Ok(ResultSet {
                    total_area: metrics.area.scale(2.0) + lateral_area.clone(),
                    volume: metrics.area.scale(h),
                    base_area: metrics.area,
                    lateral_area,
                })
            }
            SolidKind::Frustum => {
                // The top base reuses the bottom width for rectangles; only
                // the length scales through r2. Inherited behavior, kept
                // deliberately rather than generalized.
                let bottom = EvaluateBase::new(base, r1, w).execute(constants)?;
                let top = EvaluateBase::new(base, r2, w).execute(constants)?;
                frustum(&bottom, &top, h)
            }
        }
    }
}

fn frustum(bottom: &BaseMetrics, top: &BaseMetrics, h: f64) -> Result<ResultSet> {
    let mean = bottom.area.geometric_mean(&top.area)?;
    let volume = (bottom.area.clone() + top.area.clone() + mean).scale(h / 3.0);

    let apothem_drop = bottom.apothem.clone() - top.apothem.clone();
    let slant = (apothem_drop.powi(2) + Quantity::num(h * h)).sqrt()?;
    let lateral_area = ((bottom.perimeter.clone() + top.perimeter.clone()) * slant).scale(0.5);

    Ok(ResultSet {
        base_area: bottom.area.clone(),
        total_area: bottom.area.clone() + top.area.clone() + lateral_area.clone(),
        lateral_area,
        volume,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::expr::ConstantMode;
    use approx::assert_relative_eq;

    fn exact() -> Constants {
        Constants::exact()
    }

    fn decimal_pi(value: f64) -> Constants {
        Constants {
            pi: ConstantMode::Decimal(value),
            sqrt3: ConstantMode::Exact,
        }
    }

    fn pi_times(c: &Constants, factor: f64) -> Quantity {
        Quantity::pi(c).scale(factor)
    }

    #[test]
    fn cylinder_r5_h10_exact() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Cylinder,
            BaseKind::Circle,
            Dimensions::new(5.0, 10.0),
        )
        .execute(&c)
        .unwrap();
        assert_eq!(r.base_area, pi_times(&c, 25.0));
        assert_eq!(r.lateral_area, pi_times(&c, 100.0));
        assert_eq!(r.total_area, pi_times(&c, 150.0));
        assert_eq!(r.volume, pi_times(&c, 250.0));
    }

    #[test]
    fn sphere_r3_exact() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Sphere,
            BaseKind::Circle,
            Dimensions::new(3.0, 0.0),
        )
        .execute(&c)
        .unwrap();
        assert_eq!(r.lateral_area, pi_times(&c, 36.0));
        assert_eq!(r.total_area, pi_times(&c, 36.0));
        assert_eq!(r.volume, pi_times(&c, 36.0));
    }

    #[test]
    fn sphere_ignores_base_kind() {
        let c = exact();
        let dims = Dimensions::new(3.0, 0.0);
        let circle = EvaluateSolid::new(SolidKind::Sphere, BaseKind::Circle, dims)
            .execute(&c)
            .unwrap();
        let hexagon = EvaluateSolid::new(SolidKind::Sphere, BaseKind::Hexagon, dims)
            .execute(&c)
            .unwrap();
        assert_eq!(circle, hexagon);
    }

    #[test]
    fn cone_3_4_5_exact() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Cone,
            BaseKind::Circle,
            Dimensions::new(3.0, 4.0),
        )
        .execute(&c)
        .unwrap();
        // slant = 5
        assert_eq!(r.base_area, pi_times(&c, 9.0));
        assert_eq!(r.lateral_area, pi_times(&c, 15.0));
        assert_eq!(r.total_area, pi_times(&c, 24.0));
        assert_eq!(r.volume, pi_times(&c, 12.0));
    }

    #[test]
    fn square_pyramid() {
        let r = EvaluateSolid::new(
            SolidKind::Pyramid,
            BaseKind::Square,
            Dimensions::new(3.0, 4.0),
        )
        .execute(&exact())
        .unwrap();
        // side 6, slant 5: base 36, lateral 24·5/2 = 60, volume 48
        assert_relative_eq!(r.base_area.as_number().unwrap(), 36.0);
        assert_relative_eq!(r.lateral_area.as_number().unwrap(), 60.0);
        assert_relative_eq!(r.total_area.as_number().unwrap(), 96.0);
        assert_relative_eq!(r.volume.as_number().unwrap(), 48.0);
    }

    #[test]
    fn rectangular_pyramid_uses_two_slants() {
        let r = EvaluateSolid::new(
            SolidKind::Pyramid,
            BaseKind::Rectangle,
            Dimensions::new(6.0, 4.0).with_w(8.0),
        )
        .execute(&exact())
        .unwrap();
        // slant_l = sqrt(16 + 16) , slant_w = sqrt(16 + 9) = 5
        let slant_l = 32.0_f64.sqrt();
        assert_relative_eq!(r.base_area.as_number().unwrap(), 48.0);
        assert_relative_eq!(
            r.lateral_area.as_number().unwrap(),
            6.0 * slant_l + 8.0 * 5.0
        );
        assert_relative_eq!(r.volume.as_number().unwrap(), 64.0);
    }

    #[test]
    fn triangular_prism_stays_symbolic() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Prism,
            BaseKind::Triangle,
            Dimensions::new(2.0, 5.0),
        )
        .execute(&c)
        .unwrap();
        // base 12·√3, perimeter 12·√3
        assert_eq!(r.base_area, Quantity::sqrt3(&c).scale(12.0));
        assert_eq!(r.lateral_area, Quantity::sqrt3(&c).scale(60.0));
        assert_eq!(r.total_area, Quantity::sqrt3(&c).scale(84.0));
        assert_eq!(r.volume, Quantity::sqrt3(&c).scale(60.0));
    }

    #[test]
    fn circular_frustum_exact() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Frustum,
            BaseKind::Circle,
            Dimensions::new(5.0, 6.0).with_r2(2.0),
        )
        .execute(&c)
        .unwrap();
        // √(25π·4π) = 10π, volume = 2·(25+4+10)π = 78π
        assert_eq!(r.volume, pi_times(&c, 78.0));
        // slant = √(36 + 9) = √45
        let slant = 45.0_f64.sqrt();
        assert_eq!(r.lateral_area, pi_times(&c, 7.0 * slant));
        assert_eq!(r.base_area, pi_times(&c, 25.0));
        assert_eq!(r.total_area, pi_times(&c, 29.0 + 7.0 * slant));
    }

    #[test]
    fn circular_frustum_decimal_pi() {
        let pi = 3.14;
        let r = EvaluateSolid::new(
            SolidKind::Frustum,
            BaseKind::Circle,
            Dimensions::new(5.0, 6.0).with_r2(2.0),
        )
        .execute(&decimal_pi(pi))
        .unwrap();
        let a1 = pi * 25.0;
        let a2 = pi * 4.0;
        assert_relative_eq!(r.base_area.as_number().unwrap(), a1, epsilon = 1e-9);
        assert_relative_eq!(
            r.volume.as_number().unwrap(),
            2.0 * (a1 + a2 + (a1 * a2).sqrt()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn rectangular_frustum_keeps_bottom_width() {
        let r = EvaluateSolid::new(
            SolidKind::Frustum,
            BaseKind::Rectangle,
            Dimensions::new(6.0, 2.0).with_r2(3.0).with_w(4.0),
        )
        .execute(&exact())
        .unwrap();
        // top area = r2·w = 12, not an independently scaled rectangle
        let a1 = 24.0_f64;
        let a2 = 12.0_f64;
        let mean = (a1 * a2).sqrt();
        assert_relative_eq!(
            r.volume.as_number().unwrap(),
            2.0 / 3.0 * (a1 + a2 + mean)
        );
        // both apothems are zero, so the slant is just h
        let lateral = (20.0 + 14.0) / 2.0 * 2.0;
        assert_relative_eq!(r.lateral_area.as_number().unwrap(), lateral);
        assert_relative_eq!(r.total_area.as_number().unwrap(), a1 + a2 + lateral);
    }

    #[test]
    fn zero_height_collapses_lateral_and_volume() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Cone,
            BaseKind::Circle,
            Dimensions::new(3.0, 0.0),
        )
        .execute(&c)
        .unwrap();
        // slant = apothem = 3, lateral = π·3·3
        assert_eq!(r.lateral_area, pi_times(&c, 9.0));
        assert_eq!(r.volume, Quantity::zero());
    }

    #[test]
    fn hexagonal_frustum_root_stays_symbolic() {
        let r = EvaluateSolid::new(
            SolidKind::Frustum,
            BaseKind::Hexagon,
            Dimensions::new(3.0, 4.0).with_r2(1.0),
        )
        .execute(&exact())
        .unwrap();
        // √(18·√3 · 2·√3) = 6·√3, keeping the volume in a single closed form
        assert!(r.volume.has_symbols());
        let rendered = r.volume.to_string();
        assert!(rendered.ends_with("\u{221a}3"));
        assert!(!rendered.contains(" + "));
    }

    #[test]
    fn triangular_frustum_mean_keeps_one_exact_term() {
        let c = exact();
        let r = EvaluateSolid::new(
            SolidKind::Frustum,
            BaseKind::Triangle,
            Dimensions::new(2.0, 3.0).with_r2(1.0),
        )
        .execute(&c)
        .unwrap();
        // √(12·√3 · 3·√3) = 6·√3, volume = 3/3·(12 + 3 + 6)·√3
        assert_eq!(r.volume, Quantity::sqrt3(&c).scale(21.0));
        assert_eq!(r.volume.to_string(), "21\u{b7}\u{221a}3");
    }

    #[test]
    fn hexagonal_frustum_matches_numeric_substitution() {
        let sqrt3 = 3f64.sqrt();
        let c = Constants {
            pi: ConstantMode::Exact,
            sqrt3: ConstantMode::Decimal(sqrt3),
        };
        let r = EvaluateSolid::new(
            SolidKind::Frustum,
            BaseKind::Hexagon,
            Dimensions::new(3.0, 4.0).with_r2(1.0),
        )
        .execute(&c)
        .unwrap();
        // volume = 4/3·(18 + 2 + 6)·√3
        assert_relative_eq!(
            r.volume.as_number().unwrap(),
            104.0 / 3.0 * sqrt3,
            epsilon = 1e-9
        );
    }
}
