use tracing::{debug, trace};

use crate::error::Result;
use crate::expr::DisplayValue;
use crate::input::{Inputs, Request};
use crate::operations::{EvaluateSolid, ResultSet};
use crate::tessellation::{TessellateSolid, TessellationParams, TriangleMesh};

/// The four results rendered for the two-row display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDisplay {
    pub base_area: DisplayValue,
    pub lateral_area: DisplayValue,
    pub total_area: DisplayValue,
    pub volume: DisplayValue,
}

impl ResultDisplay {
    /// Renders an evaluated result set.
    #[must_use]
    pub fn new(results: &ResultSet) -> Self {
        Self {
            base_area: DisplayValue::new(&results.base_area),
            lateral_area: DisplayValue::new(&results.lateral_area),
            total_area: DisplayValue::new(&results.total_area),
            volume: DisplayValue::new(&results.volume),
        }
    }
}

/// Everything one recomputation produces: the validated request, the raw
/// quantities, their display rendering and the preview mesh.
#[derive(Debug, Clone)]
pub struct Computation {
    pub request: Request,
    pub results: ResultSet,
    pub display: ResultDisplay,
    pub mesh: TriangleMesh,
}

/// Recomputes everything from the current inputs.
///
/// Pure and synchronous: no caching, no incremental state; meant to be
/// re-run idempotently from the embedding event layer on every change.
/// Invalid input returns `Err` and the caller keeps its previous state.
/// A degenerate preview (for example r = 0) does not fail the computation;
/// the mesh simply comes back empty while the numbers still update.
///
/// # Errors
///
/// Returns an error if a field fails validation or a constant resolves to
/// a value the formulas cannot use.
pub fn compute(inputs: &Inputs) -> Result<Computation> {
    compute_with_params(inputs, TessellationParams::default())
}

/// [`compute`] with custom preview resolution.
///
/// # Errors
///
/// See [`compute`].
pub fn compute_with_params(inputs: &Inputs, params: TessellationParams) -> Result<Computation> {
    let request = inputs.parse()?;
    debug!(solid = %request.solid, base = %request.base, "recomputing");

    let results = EvaluateSolid::new(request.solid, request.base, request.dims)
        .execute(&request.constants)?;
    let display = ResultDisplay::new(&results);

    let mesh = match TessellateSolid::new(request.solid, request.base, request.dims)
        .with_params(params)
        .execute()
    {
        Ok(mesh) => mesh,
        Err(err) => {
            trace!(%err, "preview skipped");
            TriangleMesh::default()
        }
    };

    Ok(Computation {
        request,
        results,
        display,
        mesh,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{BaseKind, SolidKind};

    fn cylinder_inputs() -> Inputs {
        Inputs {
            solid: SolidKind::Cylinder,
            base: BaseKind::Circle,
            r1: "5".to_owned(),
            h: "10".to_owned(),
            ..Inputs::default()
        }
    }

    #[test]
    fn cylinder_end_to_end_exact() {
        let c = compute(&cylinder_inputs()).unwrap();
        assert_eq!(c.display.base_area.expression, "25\u{b7}\u{3c0}");
        assert_eq!(c.display.lateral_area.expression, "100\u{b7}\u{3c0}");
        assert_eq!(c.display.total_area.expression, "150\u{b7}\u{3c0}");
        assert_eq!(c.display.volume.expression, "250\u{b7}\u{3c0}");
        assert!(c.display.volume.decimal.is_none());
        assert!(!c.mesh.is_empty());
    }

    #[test]
    fn toggling_pi_switches_every_result_to_decimal() {
        let mut inputs = cylinder_inputs();
        inputs.pi_as_number = true;

        let c = compute(&inputs).unwrap();
        assert_eq!(c.display.volume.expression, "785");
        assert_eq!(c.display.volume.decimal.as_deref(), Some("\u{2248} 785.0000"));
        assert_eq!(
            c.display.total_area.decimal.as_deref(),
            Some("\u{2248} 471.0000")
        );

        // and back again
        inputs.pi_as_number = false;
        let c = compute(&inputs).unwrap();
        assert_eq!(c.display.volume.expression, "250\u{b7}\u{3c0}");
        assert!(c.display.volume.decimal.is_none());
    }

    #[test]
    fn invalid_input_produces_no_partial_output() {
        let inputs = Inputs {
            r1: "abc".to_owned(),
            ..cylinder_inputs()
        };
        assert!(compute(&inputs).is_err());

        let inputs = Inputs {
            h: "-1".to_owned(),
            ..cylinder_inputs()
        };
        assert!(compute(&inputs).is_err());
    }

    #[test]
    fn degenerate_preview_does_not_fail_the_numbers() {
        let inputs = Inputs {
            r1: "0".to_owned(),
            solid: SolidKind::Sphere,
            ..Inputs::default()
        };
        let c = compute(&inputs).unwrap();
        assert!(c.mesh.is_empty());
        assert_eq!(c.display.volume.expression, "0");
        assert!(c.display.volume.decimal.is_some());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let inputs = cylinder_inputs();
        let a = compute(&inputs).unwrap();
        let b = compute(&inputs).unwrap();
        assert_eq!(a.results, b.results);
        assert_eq!(a.display, b.display);
        assert_eq!(a.mesh.vertices, b.mesh.vertices);
        assert_eq!(a.mesh.indices, b.mesh.indices);
    }
}
