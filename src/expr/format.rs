use std::fmt;

use super::quantity::{Quantity, Term};

/// A result prepared for display: the algebraic rendering plus, when the
/// quantity is symbol-free, a decimal approximation row.
///
/// Mirrors the two-row layout of the calculator UI: the approximation row
/// stays hidden while any constant remains exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    /// Simplified algebraic string (`150·π`) or a compact number.
    pub expression: String,
    /// `≈`-prefixed decimal with 4 fractional digits and thousands
    /// separators; `None` while symbols remain.
    pub decimal: Option<String>,
}

impl DisplayValue {
    /// Renders a quantity for the two-row result display.
    #[must_use]
    pub fn new(quantity: &Quantity) -> Self {
        match quantity.as_number() {
            Some(value) => Self {
                expression: coefficient_string(value),
                decimal: Some(format!("\u{2248} {}", format_decimal(value))),
            },
            None => Self {
                expression: symbolic_string(quantity),
                decimal: None,
            },
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decimal {
            Some(decimal) => write!(f, "{} {decimal}", self.expression),
            None => write!(f, "{}", self.expression),
        }
    }
}

/// Symbolic if symbols remain, 4-digit decimal otherwise.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_number() {
            Some(value) => write!(f, "{}", format_decimal(value)),
            None => write!(f, "{}", symbolic_string(self)),
        }
    }
}

/// Formats a number with exactly 4 fractional digits and thousands
/// separators, e.g. `1,234.5678`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rendered = format!("{:.4}", value.abs());
    let (int_part, frac_part) = match rendered.find('.') {
        Some(idx) => (&rendered[..idx], &rendered[idx + 1..]),
        None => (rendered.as_str(), "0000"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

/// Renders a symbolic quantity with `·` for multiplication, `^` for
/// exponents and the literals `π` and `√3`.
fn symbolic_string(quantity: &Quantity) -> String {
    let terms = quantity.terms();
    if terms.is_empty() {
        return "0".to_owned();
    }

    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            if term.coeff < 0.0 {
                out.push('-');
            }
        } else if term.coeff < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&term_string(term));
    }
    out
}

fn term_string(term: &Term) -> String {
    let magnitude = term.coeff.abs();
    let mut factors: Vec<String> = Vec::new();

    let has_symbols = term.pi_pow != 0 || term.sqrt3_pow != 0;
    if !has_symbols || (magnitude - 1.0).abs() > f64::EPSILON {
        factors.push(coefficient_string(magnitude));
    }
    match term.pi_pow {
        0 => {}
        1 => factors.push("\u{3c0}".to_owned()),
        p => factors.push(format!("\u{3c0}^{p}")),
    }
    if term.sqrt3_pow != 0 {
        factors.push("\u{221a}3".to_owned());
    }
    factors.join("\u{b7}")
}

/// Integer-valued coefficients render without a fraction part; others keep
/// up to 4 fractional digits with trailing zeros trimmed.
#[allow(clippy::cast_possible_truncation)]
fn coefficient_string(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 && value.abs() < 1e15 {
        return format!("{}", value.round() as i64);
    }
    let mut rendered = format!("{value:.4}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    rendered
}
