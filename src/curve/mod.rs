//! Response curves — ten parameterized shapes mapping `[0, 1]` onto `[0, 1]`.

pub mod formula;
pub mod model;
pub mod shape;

pub use formula::clamp01;
pub use model::CurveModel;
pub use shape::{CurveShape, UnknownShape};
