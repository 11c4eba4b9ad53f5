use crate::error::Result;
use crate::geometry::{BaseKind, Dimensions, SolidKind};
use crate::math::{Point3, TOLERANCE};

use super::base_ring::base_ring;
use super::{validate_dimensions, Polyline, TessellationParams};

/// Extracts the characteristic outline rings of a solid as closed polylines
/// for a wireframe overlay: the bottom base, plus the top base for extruded
/// and truncated solids, plus the equator for spheres.
pub struct TessellateProfile {
    solid: SolidKind,
    base: BaseKind,
    dims: Dimensions,
    params: TessellationParams,
}

impl TessellateProfile {
    /// Creates a new profile extraction with default parameters.
    #[must_use]
    pub fn new(solid: SolidKind, base: BaseKind, dims: Dimensions) -> Self {
        Self {
            solid,
            base,
            dims,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom resolution parameters.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns an error for unusable parameters or degenerate dimensions.
    pub fn execute(&self) -> Result<Vec<Polyline>> {
        self.params.validate()?;

        let base = if self.solid.uses_polygonal_base() {
            self.base
        } else {
            BaseKind::Circle
        };
        validate_dimensions(self.solid, base, &self.dims)?;

        let Dimensions { r1, r2, w, h } = self.dims;
        let segments = self.params.circle_segments;

        let mut outlines = Vec::new();
        match self.solid {
            SolidKind::Sphere => {
                // equator, at the resting height of the center
                outlines.push(closed_ring(&base_ring(base, r1, 0.0, segments), r1));
            }
            SolidKind::Cone | SolidKind::Pyramid => {
                outlines.push(closed_ring(&base_ring(base, r1, w, segments), 0.0));
            }
            SolidKind::Cylinder | SolidKind::Prism => {
                let ring = base_ring(base, r1, w, segments);
                outlines.push(closed_ring(&ring, 0.0));
                outlines.push(closed_ring(&ring, h));
            }
            SolidKind::Frustum => {
                outlines.push(closed_ring(&base_ring(base, r1, w, segments), 0.0));
                if r2 > TOLERANCE {
                    outlines.push(closed_ring(&base_ring(base, r2, w, segments), h));
                }
            }
        }
        Ok(outlines)
    }
}

/// Lifts a 2D ring to a closed polyline at the given height.
fn closed_ring(ring: &[(f64, f64)], z: f64) -> Polyline {
    let mut points: Vec<Point3> = ring.iter().map(|&(x, y)| Point3::new(x, y, z)).collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    Polyline { points }
}
