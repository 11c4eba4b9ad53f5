use std::fmt;

/// The solids of revolution/extrusion the kernel measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    Sphere,
    Cone,
    Cylinder,
    Pyramid,
    Prism,
    Frustum,
}

impl SolidKind {
    /// Returns `true` if the solid takes a selectable polygonal base.
    ///
    /// Round solids (sphere, cone, cylinder) always stand on a circle; the
    /// embedding UI hides the base selector for them.
    #[must_use]
    pub fn uses_polygonal_base(self) -> bool {
        matches!(self, Self::Pyramid | Self::Prism | Self::Frustum)
    }

    /// Returns `true` if the solid has a height dimension.
    #[must_use]
    pub fn requires_height(self) -> bool {
        !matches!(self, Self::Sphere)
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sphere => "Sphere",
            Self::Cone => "Cone",
            Self::Cylinder => "Cylinder",
            Self::Pyramid => "Pyramid",
            Self::Prism => "Prism",
            Self::Frustum => "Frustum",
        };
        f.write_str(name)
    }
}

/// The base shapes a polygonal solid can stand on.
///
/// Only meaningful for solids where [`SolidKind::uses_polygonal_base`] is
/// `true`; round solids implicitly use [`BaseKind::Circle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Hexagon,
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Rectangle => "Rectangle",
            Self::Triangle => "Triangle",
            Self::Hexagon => "Hexagon",
        };
        f.write_str(name)
    }
}

/// Validated solid dimensions, all non-negative.
///
/// `r1` is the primary radius/apothem (or rectangle length), `r2` the top
/// radius/apothem of a frustum, `w` the rectangle width and `h` the height
/// (ignored for spheres).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub r1: f64,
    pub r2: f64,
    pub w: f64,
    pub h: f64,
}

impl Dimensions {
    /// Creates dimensions with a primary radius and height.
    #[must_use]
    pub fn new(r1: f64, h: f64) -> Self {
        Self {
            r1,
            h,
            ..Self::default()
        }
    }

    /// Sets the frustum top radius/apothem.
    #[must_use]
    pub fn with_r2(mut self, r2: f64) -> Self {
        self.r2 = r2;
        self
    }

    /// Sets the rectangle width.
    #[must_use]
    pub fn with_w(mut self, w: f64) -> Self {
        self.w = w;
        self
    }
}
