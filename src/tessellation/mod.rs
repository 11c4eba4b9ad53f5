mod base_ring;
mod tessellate_profile;
mod tessellate_solid;

pub use tessellate_profile::TessellateProfile;
pub use tessellate_solid::TessellateSolid;

use crate::error::{Result, TessellationError};
use crate::geometry::{BaseKind, Dimensions, SolidKind};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Parameters controlling preview mesh resolution.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Segments for circular rings.
    pub circle_segments: usize,
    /// Latitude rows for spheres.
    pub latitude_steps: usize,
    /// Height rows for tapered side surfaces.
    pub height_steps: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            circle_segments: 60,
            latitude_steps: 30,
            height_steps: 15,
        }
    }
}

impl TessellationParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.circle_segments < 3 {
            return Err(TessellationError::InvalidParameters(format!(
                "circle_segments = {} (need at least 3)",
                self.circle_segments
            ))
            .into());
        }
        if self.latitude_steps < 2 {
            return Err(TessellationError::InvalidParameters(format!(
                "latitude_steps = {} (need at least 2)",
                self.latitude_steps
            ))
            .into());
        }
        if self.height_steps < 1 {
            return Err(
                TessellationError::InvalidParameters("height_steps = 0".into()).into(),
            );
        }
        Ok(())
    }
}

/// A polyline approximation of a curve or outline.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

/// A triangle mesh approximation of a solid's surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns `true` if the mesh carries no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Rebuilds per-vertex normals by averaging incident triangle normals.
    pub(crate) fn recompute_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let face = (v1 - v0).cross(&(v2 - v0));
            for &i in tri {
                accumulated[i as usize] += face;
            }
        }
        self.normals = accumulated
            .into_iter()
            .map(|n| {
                let len = n.norm();
                if len < TOLERANCE {
                    Vector3::z()
                } else {
                    n / len
                }
            })
            .collect();
    }
}

/// Rejects dimensions no preview can be built from.
///
/// The numeric results tolerate these inputs; the mesh does not, and the
/// caller is expected to drop the preview rather than the computation.
pub(crate) fn validate_dimensions(
    solid: SolidKind,
    base: BaseKind,
    dims: &Dimensions,
) -> Result<()> {
    if dims.r1 <= TOLERANCE {
        return Err(TessellationError::Degenerate("zero primary radius".into()).into());
    }
    if solid.requires_height() && dims.h <= TOLERANCE {
        return Err(TessellationError::Degenerate("zero height".into()).into());
    }
    if solid.uses_polygonal_base() && base == BaseKind::Rectangle && dims.w <= TOLERANCE {
        return Err(TessellationError::Degenerate("zero rectangle width".into()).into());
    }
    Ok(())
}
