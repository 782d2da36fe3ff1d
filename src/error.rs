use thiserror::Error;

/// Errors raised while assembling a [crate::CubicSpline] from its knots.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Error in Spline: at least 2 knots are required, found {found}")]
    TooFewKnots { found: usize },

    #[error("Error in Spline: {x} knot x values but {y} knot y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("Error in Spline: knot x values must be strictly increasing (knot {index})")]
    NotIncreasing { index: usize },

    #[error("Error in Spline: knot {index} has a non-finite x value")]
    NonFiniteKnot { index: usize },

    #[error("Error in Spline: error while solving set of equations")]
    Singular,
}

/// Errors raised while configuring an extinction law.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtinctionError {
    #[error(transparent)]
    Spline(#[from] SplineError),

    #[error("Unknown extinction law: {0}")]
    UnknownLaw(String),
}
