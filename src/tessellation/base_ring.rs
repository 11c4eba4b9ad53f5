use std::f64::consts::TAU;

use crate::geometry::BaseKind;

/// 2D outline of a base shape, counter-clockwise in the XY plane.
///
/// `r` follows the evaluator convention: radius for a circle, apothem for a
/// regular polygon, length for a rectangle (with `w` as the width).
/// Polygons are emitted with their exact vertices; circles as a
/// `segments`-gon.
pub(crate) fn base_ring(kind: BaseKind, r: f64, w: f64, segments: usize) -> Vec<(f64, f64)> {
    match kind {
        BaseKind::Circle => regular_ring(r, segments, 0.0),
        // circumradius of a square with apothem r is r·√2, corners at 45°
        BaseKind::Square => vec![(r, r), (-r, r), (-r, -r), (r, -r)],
        BaseKind::Rectangle => {
            let hx = r / 2.0;
            let hy = w / 2.0;
            vec![(hx, hy), (-hx, hy), (-hx, -hy), (hx, -hy)]
        }
        // equilateral triangle with apothem r has circumradius 2r
        BaseKind::Triangle => regular_ring(2.0 * r, 3, TAU / 4.0),
        // regular hexagon with apothem r has circumradius 2r/√3
        BaseKind::Hexagon => regular_ring(2.0 * r / 3f64.sqrt(), 6, TAU / 12.0),
    }
}

#[allow(clippy::cast_precision_loss)]
fn regular_ring(circumradius: f64, sides: usize, phase: f64) -> Vec<(f64, f64)> {
    (0..sides)
        .map(|i| {
            let angle = phase + TAU * i as f64 / sides as f64;
            (circumradius * angle.cos(), circumradius * angle.sin())
        })
        .collect()
}
