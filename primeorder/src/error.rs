//! Error types.

use core::fmt;

/// Curve and point errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Coordinates do not satisfy the curve equation, or are not canonical
    /// field elements.
    PointNotOnCurve,

    /// The curve coefficients give a zero discriminant.
    SingularCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::SingularCurve => f.write_str("curve equation is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
