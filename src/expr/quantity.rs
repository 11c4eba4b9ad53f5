use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};

use super::{ConstantMode, Constants};

/// One term of a quantity: `coeff * pi^pi_pow * sqrt3^sqrt3_pow`.
///
/// Terms are kept normalized with `sqrt3_pow` in `{0, 1}`; even powers of √3
/// fold into the coefficient as powers of 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Term {
    pub coeff: f64,
    pub pi_pow: i32,
    pub sqrt3_pow: i32,
}

impl Term {
    fn normalized(coeff: f64, pi_pow: i32, sqrt3_pow: i32) -> Self {
        let rem = sqrt3_pow.rem_euclid(2);
        let folded = (sqrt3_pow - rem) / 2;
        Self {
            coeff: coeff * 3f64.powi(folded),
            pi_pow,
            sqrt3_pow: rem,
        }
    }

    fn symbol_key(self) -> (i32, i32) {
        (self.pi_pow, self.sqrt3_pow)
    }

    fn is_numeric(self) -> bool {
        self.pi_pow == 0 && self.sqrt3_pow == 0
    }
}

/// A quantity that is either a plain number or a symbolic expression in
/// π and √3.
///
/// Internally a sum of normalized [`Term`]s sorted by symbol powers, with
/// like terms combined and zero terms dropped (the empty sum is zero). This
/// closes over every operation the solid formulas perform — sums, products,
/// integer powers and the square roots of similar-base products — so no
/// general expression tree is needed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quantity {
    terms: Vec<Term>,
}

impl Quantity {
    /// The zero quantity.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// A plain numeric quantity.
    #[must_use]
    pub fn num(value: f64) -> Self {
        Self::from_terms(vec![Term::normalized(value, 0, 0)])
    }

    /// The constant π under the given resolution.
    #[must_use]
    pub fn pi(constants: &Constants) -> Self {
        match constants.pi {
            ConstantMode::Exact => Self::from_terms(vec![Term::normalized(1.0, 1, 0)]),
            ConstantMode::Decimal(value) => Self::num(value),
        }
    }

    /// The constant √3 under the given resolution.
    #[must_use]
    pub fn sqrt3(constants: &Constants) -> Self {
        match constants.sqrt3 {
            ConstantMode::Exact => Self::from_terms(vec![Term::normalized(1.0, 0, 1)]),
            ConstantMode::Decimal(value) => Self::num(value),
        }
    }

    /// Combines like terms, drops zeros and sorts by symbol powers.
    fn from_terms(terms: Vec<Term>) -> Self {
        let mut combined: Vec<Term> = Vec::with_capacity(terms.len());
        for term in terms {
            if let Some(existing) = combined
                .iter_mut()
                .find(|t| t.symbol_key() == term.symbol_key())
            {
                existing.coeff += term.coeff;
            } else {
                combined.push(term);
            }
        }
        combined.retain(|t| t.coeff.abs() > 0.0);
        combined.sort_by_key(|t| t.symbol_key());
        Self { terms: combined }
    }

    pub(crate) fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns `true` if any π or √3 factor remains.
    ///
    /// This is a structural property of the expression: a quantity built
    /// from exact constants keeps its symbols even when a decimal rendering
    /// would be possible.
    #[must_use]
    pub fn has_symbols(&self) -> bool {
        self.terms.iter().any(|t| !t.is_numeric())
    }

    /// Returns the numeric value if the quantity is symbol-free.
    ///
    /// Exact quantities are never approximated; a quantity that still
    /// carries π or √3 yields `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self.terms.as_slice() {
            [] => Some(0.0),
            [term] if term.is_numeric() => Some(term.coeff),
            _ => None,
        }
    }

    /// Multiplies by a plain scalar.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .map(|t| Term::normalized(t.coeff * factor, t.pi_pow, t.sqrt3_pow))
                .collect(),
        )
    }

    /// Raises to a non-negative integer power.
    #[must_use]
    pub fn powi(&self, exponent: u32) -> Self {
        let mut acc = Self::num(1.0);
        for _ in 0..exponent {
            acc = acc * self.clone();
        }
        acc
    }

    /// Multiplicative inverse.
    ///
    /// Defined for a single nonzero term: the coefficient inverts and the
    /// symbol powers negate (`1/√3` normalizes to `√3/3`).
    ///
    /// # Errors
    ///
    /// Returns an error for zero or for a sum of several terms, which has no
    /// closed-form inverse in this representation.
    pub fn recip(&self) -> Result<Self> {
        match self.terms.as_slice() {
            [] => Err(GeometryError::DivisionByZero.into()),
            [term] => Ok(Self::from_terms(vec![Term::normalized(
                1.0 / term.coeff,
                -term.pi_pow,
                -term.sqrt3_pow,
            )])),
            _ => Err(GeometryError::IrrationalRoot(format!("1/({self:?})")).into()),
        }
    }

    /// Geometric mean `√(self · other)`.
    ///
    /// When both factors are single terms over the same symbol powers the
    /// root is taken on the coefficients alone and the symbols survive
    /// exactly: the mean of `12·√3` and `3·√3` is `6·√3`, not a decimal.
    /// Anything else falls back to [`Quantity::sqrt`] of the product.
    ///
    /// # Errors
    ///
    /// Returns an error when the fallback product has no closed-form root.
    pub fn geometric_mean(&self, other: &Self) -> Result<Self> {
        if let ([a], [b]) = (self.terms.as_slice(), other.terms.as_slice()) {
            if a.symbol_key() == b.symbol_key() && a.coeff >= 0.0 && b.coeff >= 0.0 {
                return Ok(Self::from_terms(vec![Term::normalized(
                    (a.coeff * b.coeff).sqrt(),
                    a.pi_pow,
                    a.sqrt3_pow,
                )]));
            }
        }
        (self.clone() * other.clone()).sqrt()
    }

    /// Square root.
    ///
    /// Exact when the radicand is a single term with even symbol powers and
    /// a non-negative coefficient, numeric when it is symbol-free. The solid
    /// formulas only ever take roots of such quantities (slant radicands are
    /// numeric; frustum base products pair similar bases, squaring the
    /// symbols).
    ///
    /// # Errors
    ///
    /// Returns an error for a negative numeric radicand or a symbolic
    /// radicand with no closed-form root.
    pub fn sqrt(&self) -> Result<Self> {
        if let Some(value) = self.as_number() {
            if value < 0.0 {
                return Err(GeometryError::NegativeRoot(value).into());
            }
            return Ok(Self::num(value.sqrt()));
        }
        if let [term] = self.terms.as_slice() {
            if term.pi_pow % 2 == 0 && term.sqrt3_pow % 2 == 0 && term.coeff >= 0.0 {
                return Ok(Self::from_terms(vec![Term::normalized(
                    term.coeff.sqrt(),
                    term.pi_pow / 2,
                    term.sqrt3_pow / 2,
                )]));
            }
        }
        Err(GeometryError::IrrationalRoot(format!("{self:?}")).into())
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut terms = self.terms;
        terms.extend(rhs.terms);
        Self::from_terms(terms)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for a in &self.terms {
            for b in &rhs.terms {
                terms.push(Term::normalized(
                    a.coeff * b.coeff,
                    a.pi_pow + b.pi_pow,
                    a.sqrt3_pow + b.sqrt3_pow,
                ));
            }
        }
        Self::from_terms(terms)
    }
}
