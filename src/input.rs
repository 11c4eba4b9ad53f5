use crate::error::{InputError, Result};
use crate::expr::{ConstantMode, Constants};
use crate::geometry::{BaseKind, Dimensions, SolidKind};

/// Raw calculator state as the embedding UI holds it: kind selectors, the
/// dimension text fields and the per-constant (checkbox, value) pairs.
///
/// Defaults match what the sidebar shows on startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub solid: SolidKind,
    pub base: BaseKind,
    /// Primary radius/apothem/length field.
    pub r1: String,
    /// Frustum top radius/apothem field.
    pub r2: String,
    /// Rectangle width field.
    pub w: String,
    /// Height field.
    pub h: String,
    /// "Define π as number" toggle.
    pub pi_as_number: bool,
    /// π value field, consulted only when the toggle is set.
    pub pi_value: String,
    /// "Define √3 as number" toggle.
    pub sqrt3_as_number: bool,
    /// √3 value field, consulted only when the toggle is set.
    pub sqrt3_value: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            solid: SolidKind::Sphere,
            base: BaseKind::Square,
            r1: "5".to_owned(),
            r2: String::new(),
            w: String::new(),
            h: "10".to_owned(),
            pi_as_number: false,
            pi_value: "3.14".to_owned(),
            sqrt3_as_number: false,
            sqrt3_value: "1.732".to_owned(),
        }
    }
}

/// A validated computation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub solid: SolidKind,
    pub base: BaseKind,
    pub dims: Dimensions,
    pub constants: Constants,
}

impl Inputs {
    /// Validates the raw fields into a [`Request`].
    ///
    /// Blank dimension fields count as zero. Any field that fails to parse,
    /// and any negative dimension, rejects the whole request — the caller
    /// keeps whatever it was showing before.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidNumber`] for unparsable text and
    /// [`InputError::NegativeDimension`] for negative dimensions.
    pub fn parse(&self) -> Result<Request> {
        let dims = Dimensions {
            r1: parse_dimension("r1", &self.r1)?,
            r2: parse_dimension("r2", &self.r2)?,
            w: parse_dimension("w", &self.w)?,
            h: parse_dimension("h", &self.h)?,
        };

        let pi = if self.pi_as_number {
            ConstantMode::Decimal(parse_constant("pi", &self.pi_value)?)
        } else {
            ConstantMode::Exact
        };
        let sqrt3 = if self.sqrt3_as_number {
            ConstantMode::Decimal(parse_constant("sqrt3", &self.sqrt3_value)?)
        } else {
            ConstantMode::Exact
        };

        Ok(Request {
            solid: self.solid,
            base: self.base,
            dims,
            constants: Constants { pi, sqrt3 },
        })
    }
}

/// Parses a dimension field: blank is zero, negatives are rejected.
fn parse_dimension(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        text: text.to_owned(),
    })?;
    if value < 0.0 {
        return Err(InputError::NegativeDimension { field, value }.into());
    }
    Ok(value)
}

/// Parses a constant value field. Unlike dimensions, blank is an error and
/// the sign is not checked.
fn parse_constant(field: &'static str, text: &str) -> Result<f64> {
    text.trim().parse().map_err(|_| {
        InputError::InvalidNumber {
            field,
            text: text.to_owned(),
        }
        .into()
    })
}
