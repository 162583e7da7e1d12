//! The closed catalog of curve shapes.

use std::fmt;
use std::str::FromStr;

/// Selects the formula a [`CurveModel`](super::CurveModel) evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveShape {
    Constant,
    #[default]
    Linear,
    Quadratic,
    Logistic,
    Logit,
    Threshold,
    Sine,
    Parabolic,
    NormalDistribution,
    Bounce,
}

impl CurveShape {
    /// Every shape, in declaration order.
    pub const ALL: [CurveShape; 10] = [
        CurveShape::Constant,
        CurveShape::Linear,
        CurveShape::Quadratic,
        CurveShape::Logistic,
        CurveShape::Logit,
        CurveShape::Threshold,
        CurveShape::Sine,
        CurveShape::Parabolic,
        CurveShape::NormalDistribution,
        CurveShape::Bounce,
    ];

    /// The exact (case-sensitive) name used in the text encoding.
    pub fn name(self) -> &'static str {
        match self {
            CurveShape::Constant => "Constant",
            CurveShape::Linear => "Linear",
            CurveShape::Quadratic => "Quadratic",
            CurveShape::Logistic => "Logistic",
            CurveShape::Logit => "Logit",
            CurveShape::Threshold => "Threshold",
            CurveShape::Sine => "Sine",
            CurveShape::Parabolic => "Parabolic",
            CurveShape::NormalDistribution => "NormalDistribution",
            CurveShape::Bounce => "Bounce",
        }
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the ten shape names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown curve shape: {:?}", self.0)
    }
}

impl std::error::Error for UnknownShape {}

impl FromStr for CurveShape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveShape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
