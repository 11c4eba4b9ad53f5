use std::f64::consts::PI;

use tracing::trace;

use crate::error::Result;
use crate::geometry::{BaseKind, Dimensions, SolidKind};
use crate::math::{Point3, TOLERANCE};

use super::base_ring::base_ring;
use super::{validate_dimensions, TessellationParams, TriangleMesh};

/// Tessellates a solid into a triangle mesh for the 3D preview.
///
/// Solids stand on the z = 0 plane: extruded and tapered solids span
/// `[0, h]`, spheres rest on the plane with their center at `z = r`.
pub struct TessellateSolid {
    solid: SolidKind,
    base: BaseKind,
    dims: Dimensions,
    params: TessellationParams,
}

impl TessellateSolid {
    /// Creates a new tessellation with default parameters.
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

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error for unusable parameters or degenerate dimensions
    /// (zero radius, zero height where one is required).
    pub fn execute(&self) -> Result<TriangleMesh> {
        self.params.validate()?;

        let base = if self.solid.uses_polygonal_base() {
            self.base
        } else {
            BaseKind::Circle
        };
        validate_dimensions(self.solid, base, &self.dims)?;

        let Dimensions { r1, r2, w, h } = self.dims;
        let mut mesh = match self.solid {
            SolidKind::Sphere => self.sphere(r1),
            SolidKind::Cone | SolidKind::Pyramid => self.tapered(base, r1, 0.0, w, h, true),
            SolidKind::Cylinder | SolidKind::Prism => self.extruded(base, r1, w, h),
            SolidKind::Frustum => self.tapered(base, r1, r2, w, h, false),
        };

        mesh.recompute_normals();
        trace!(
            solid = %self.solid,
            vertices = mesh.vertices.len(),
            triangles = mesh.indices.len(),
            "tessellated preview mesh"
        );
        Ok(mesh)
    }

    /// Latitude/longitude grid, resting on z = 0.
    #[allow(clippy::cast_precision_loss)]
    fn sphere(&self, r: f64) -> TriangleMesh {
        let steps = self.params.latitude_steps;
        // south pole first: rows must ascend in z for the stitching winding
        let rows: Vec<Vec<Point3>> = (0..=steps)
            .map(|i| {
                let polar = PI * (steps - i) as f64 / steps as f64;
                let ring = base_ring(
                    BaseKind::Circle,
                    r * polar.sin(),
                    0.0,
                    self.params.circle_segments,
                );
                lift(&ring, r + r * polar.cos())
            })
            .collect();

        let mut mesh = TriangleMesh::default();
        stitch_rows(&mut mesh, &rows);
        mesh
    }

    /// Side surface shrinking linearly from the bottom ring toward the top,
    /// with caps on every non-degenerate base. Covers cones and pyramids
    /// (`top_scale` down to a point) as well as frustums.
    #[allow(clippy::cast_precision_loss)]
    fn tapered(
        &self,
        base: BaseKind,
        r1: f64,
        r2: f64,
        w: f64,
        h: f64,
        to_apex: bool,
    ) -> TriangleMesh {
        let steps = self.params.height_steps;
        let rows: Vec<Vec<Point3>> = (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let r = r1 + (r2 - r1) * t;
                // a pyramid apex shrinks the width too; a rectangular
                // frustum keeps the bottom width all the way up
                let width = if to_apex { w * (1.0 - t) } else { w };
                lift(&base_ring(base, r, width, self.params.circle_segments), t * h)
            })
            .collect();

        let mut mesh = TriangleMesh::default();
        stitch_rows(&mut mesh, &rows);
        if let Some(bottom) = rows.first() {
            fan_cap(&mut mesh, bottom, false);
        }
        if !to_apex && r2 > TOLERANCE {
            if let Some(top) = rows.last() {
                fan_cap(&mut mesh, top, true);
            }
        }
        mesh
    }

    /// Straight side walls between z = 0 and z = h, with both caps.
    fn extruded(&self, base: BaseKind, r1: f64, w: f64, h: f64) -> TriangleMesh {
        let ring = base_ring(base, r1, w, self.params.circle_segments);
        let rows = vec![lift(&ring, 0.0), lift(&ring, h)];

        let mut mesh = TriangleMesh::default();
        stitch_rows(&mut mesh, &rows);
        fan_cap(&mut mesh, &rows[0], false);
        fan_cap(&mut mesh, &rows[1], true);
        mesh
    }
}

/// Places a 2D ring at the given height.
fn lift(ring: &[(f64, f64)], z: f64) -> Vec<Point3> {
    ring.iter().map(|&(x, y)| Point3::new(x, y, z)).collect()
}

/// Stitches consecutive rings of equal length into side-surface quads,
/// wrapping around in the ring direction. Rings are counter-clockwise seen
/// from above, so this winding faces outward.
#[allow(clippy::cast_possible_truncation)]
fn stitch_rows(mesh: &mut TriangleMesh, rows: &[Vec<Point3>]) {
    let Some(first) = rows.first() else {
        return;
    };
    let cols = first.len();

    let offset = mesh.vertices.len();
    for row in rows {
        mesh.vertices.extend_from_slice(row);
    }

    for ir in 0..rows.len().saturating_sub(1) {
        for ic in 0..cols {
            let next = (ic + 1) % cols;
            let i00 = (offset + ir * cols + ic) as u32;
            let i10 = (offset + ir * cols + next) as u32;
            let i01 = (offset + (ir + 1) * cols + ic) as u32;
            let i11 = (offset + (ir + 1) * cols + next) as u32;
            mesh.indices.push([i00, i10, i11]);
            mesh.indices.push([i00, i11, i01]);
        }
    }
}

/// Triangulates a convex cap as a fan around its centroid.
///
/// `facing_up` selects the winding: up for top caps, down for bottom caps.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn fan_cap(mesh: &mut TriangleMesh, ring: &[Point3], facing_up: bool) {
    if ring.len() < 3 {
        return;
    }
    let centroid = ring
        .iter()
        .fold(Point3::origin(), |acc, p| acc + p.coords)
        / ring.len() as f64;

    let center_idx = mesh.vertices.len() as u32;
    mesh.vertices.push(centroid);
    let ring_start = mesh.vertices.len() as u32;
    mesh.vertices.extend_from_slice(ring);

    let n = ring.len() as u32;
    for i in 0..n {
        let j = (i + 1) % n;
        if facing_up {
            mesh.indices.push([center_idx, ring_start + i, ring_start + j]);
        } else {
            mesh.indices.push([center_idx, ring_start + j, ring_start + i]);
        }
    }
}
