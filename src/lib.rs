//! Interstellar dust extinction laws evaluated over wavelength or wavenumber grids.
//!
//! Polynomial laws ([ccm89], [od94], [gcc09]) are plain functions of the grid, A_V and R_V.
//! Spline based laws ([F99Extinction], [Fm07Extinction]) build their knot spline once and can
//! then be evaluated any number of times, from any number of threads.
//!
//! # Example
//! ```
//! use extinction::{ccm89, F99Extinction, DEFAULT_R_V};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let wave = vec![3000.0, 4400.0, 5500.0, 12000.0];
//!
//! let magnitudes = ccm89(&wave, 1.0, DEFAULT_R_V);
//! assert_approx_eq!(1.0, magnitudes[2], 0.05);
//!
//! let f99 = F99Extinction::new(DEFAULT_R_V).unwrap();
//! let magnitudes = f99.extinction_aa(&wave, 1.0);
//! assert_approx_eq!(1.0, magnitudes[2], 0.05);
//! ```

mod branch;
mod error;
mod fitzpatrick;
mod flux;
mod knot;
mod law;
mod model;
mod polynomial;
mod spline;
mod wavenumber;

pub use branch::{BranchFn, BranchSet, Coefficients};
pub use error::{ExtinctionError, SplineError};
pub use fitzpatrick::{
    f99_uv_invum, fm07_uv_invum, F99Extinction, Fm07Extinction, FM07_R_V, UV_BOUNDARY_AA,
};
pub use flux::{apply, remove};
pub use knot::{Knot, KnotTable, F99_X_KNOTS, FM07_X_KNOTS};
pub use law::{
    ccm89, ccm89_aa, ccm89_invum, f99, f99_aa, f99_invum, fm07, fm07_aa, fm07_invum, gcc09,
    gcc09_aa, gcc09_invum, od94, od94_aa, od94_invum,
};
pub use model::{ExtinctionConfig, ExtinctionModel, Law, DEFAULT_R_V};
pub use polynomial::{horner, Polynomial};
pub use spline::CubicSpline;
pub use wavenumber::aa_to_invum;
