/// How a symbolic constant resolves during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstantMode {
    /// Keep the constant as an exact algebraic symbol.
    Exact,
    /// Substitute a user-supplied decimal approximation.
    Decimal(f64),
}

impl ConstantMode {
    /// Returns `true` if the constant stays symbolic.
    #[must_use]
    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

/// Resolution modes for the two symbolic constants the formulas use.
///
/// Each of π and √3 is resolved independently; the choice is made once per
/// computation and folds into every [`Quantity`](super::Quantity) built from
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    /// Resolution of π.
    pub pi: ConstantMode,
    /// Resolution of √3.
    pub sqrt3: ConstantMode,
}

impl Constants {
    /// Both constants kept exact.
    #[must_use]
    pub fn exact() -> Self {
        Self {
            pi: ConstantMode::Exact,
            sqrt3: ConstantMode::Exact,
        }
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::exact()
    }
}
