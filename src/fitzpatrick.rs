//! Spline based laws of Fitzpatrick (1999) and Fitzpatrick & Massa (2007).
//!
//! Both laws are an analytic ultraviolet curve below 2700 Angstroms joined to a natural cubic
//! spline through fixed optical/infrared knots. The spline depends only on R_V, so it is built
//! once per law instance and reused for every evaluation.

use crate::{
    error::ExtinctionError,
    knot::{KnotTable, F99_X_KNOTS, FM07_X_KNOTS},
    spline::CubicSpline,
    wavenumber::aa_to_invum,
};

/// Wavelength of the knot where the spline meets the ultraviolet curve. Shorter wavelengths use
/// the ultraviolet formula; this wavelength and longer ones use the spline.
pub const UV_BOUNDARY_AA: f64 = 2700.0;

const F99_X0: f64 = 4.596;
const F99_GAMMA: f64 = 0.99;
const F99_C3: f64 = 3.23;
const F99_C4: f64 = 0.41;
const F99_C5: f64 = 5.9;

/// R_V assumed throughout by Fitzpatrick & Massa (2007).
pub const FM07_R_V: f64 = 3.1;

const FM07_X0: f64 = 4.592;
const FM07_GAMMA: f64 = 0.922;
const FM07_C1: f64 = -0.175;
const FM07_C2: f64 = 0.807;
const FM07_C3: f64 = 2.991;
const FM07_C4: f64 = 0.319;
const FM07_C5: f64 = 6.097;

/// Lorentzian-like bump term shared by both ultraviolet curves.
fn drude(x: f64, c3: f64, x0: f64, gamma: f64) -> f64 {
    let x2 = x * x;
    let d = x2 - x0 * x0;
    c3 * x2 / (d * d + x2 * gamma * gamma)
}

/// F99 ultraviolet curve `k = E(x-V)/E(B-V)` at wavenumber `x` (inverse microns).
pub fn f99_uv_invum(x: f64, r_v: f64) -> f64 {
    let c2 = -0.824 + 4.717 / r_v;
    let c1 = 2.030 - 3.007 * c2;

    let mut k = c1 + c2 * x + drude(x, F99_C3, F99_X0, F99_GAMMA);
    if x >= F99_C5 {
        let y = x - F99_C5;
        k += F99_C4 * (0.5392 * y * y + 0.05644 * y * y * y);
    }
    k
}

/// FM07 ultraviolet curve `k = E(x-V)/E(B-V)` at wavenumber `x` (inverse microns).
pub fn fm07_uv_invum(x: f64) -> f64 {
    let mut k = FM07_C1 + FM07_C2 * x + drude(x, FM07_C3, FM07_X0, FM07_GAMMA);
    if x >= FM07_C5 {
        let y = x - FM07_C5;
        k += FM07_C4 * y * y;
    }
    k
}

/// Merges spline and ultraviolet values sample by sample.
///
/// Wavenumbers up to and including `boundary` keep the spline value; the spline is evaluated
/// for the whole grid in one pass and discarded above it.
fn composite(
    spline: &CubicSpline,
    x: &[f64],
    boundary: f64,
    uv: impl Fn(f64) -> f64,
    a_v: f64,
    r_v: f64,
) -> Vec<f64> {
    spline
        .batch_evaluate(x)
        .into_iter()
        .zip(x)
        .map(|(k, &x)| {
            if x <= boundary {
                a_v / r_v * (k + r_v)
            } else {
                a_v * (1.0 + uv(x) / r_v)
            }
        })
        .collect()
}

/// Fitzpatrick (1999) extinction for one fixed R_V.
///
/// # Example
/// ```
/// use extinction::{F99Extinction, DEFAULT_R_V};
///
/// let f99 = F99Extinction::new(DEFAULT_R_V).unwrap();
/// let magnitudes = f99.extinction_aa(&[1500.0, 4400.0, 5500.0, 22000.0], 1.0);
///
/// assert_eq!(4, magnitudes.len());
/// assert!(magnitudes.windows(2).all(|w| w[0] > w[1]));
/// ```
#[derive(Debug, Clone)]
pub struct F99Extinction {
    r_v: f64,
    spline: CubicSpline,
}

impl F99Extinction {
    pub fn new(r_v: f64) -> Result<Self, ExtinctionError> {
        let table = KnotTable::f99(r_v);
        log::debug!("F99 knots for R_V = {}: {:?}", r_v, table.k_values());

        let spline = CubicSpline::from_table(&table)?;
        Ok(F99Extinction { r_v, spline })
    }

    pub fn r_v(&self) -> f64 {
        self.r_v
    }

    pub fn spline(&self) -> &CubicSpline {
        &self.spline
    }

    /// Extinction in magnitudes for wavelengths in Angstroms.
    pub fn extinction_aa(&self, wave: &[f64], a_v: f64) -> Vec<f64> {
        self.extinction_invum(&aa_to_invum(wave), a_v)
    }

    /// Extinction in magnitudes for wavenumbers in inverse microns.
    pub fn extinction_invum(&self, x: &[f64], a_v: f64) -> Vec<f64> {
        composite(
            &self.spline,
            x,
            F99_X_KNOTS[7],
            |x| f99_uv_invum(x, self.r_v),
            a_v,
            self.r_v,
        )
    }
}

/// Fitzpatrick & Massa (2007) extinction, defined for R_V = 3.1 only.
#[derive(Debug, Clone)]
pub struct Fm07Extinction {
    spline: CubicSpline,
}

impl Fm07Extinction {
    pub fn new() -> Result<Self, ExtinctionError> {
        let table = KnotTable::fm07();
        log::debug!("FM07 knots: {:?}", table.k_values());

        let spline = CubicSpline::from_table(&table)?;
        Ok(Fm07Extinction { spline })
    }

    pub fn r_v(&self) -> f64 {
        FM07_R_V
    }

    pub fn spline(&self) -> &CubicSpline {
        &self.spline
    }

    /// Extinction in magnitudes for wavelengths in Angstroms.
    pub fn extinction_aa(&self, wave: &[f64], a_v: f64) -> Vec<f64> {
        self.extinction_invum(&aa_to_invum(wave), a_v)
    }

    /// Extinction in magnitudes for wavenumbers in inverse microns.
    pub fn extinction_invum(&self, x: &[f64], a_v: f64) -> Vec<f64> {
        composite(
            &self.spline,
            x,
            FM07_X_KNOTS[8],
            fm07_uv_invum,
            a_v,
            FM07_R_V,
        )
    }
}
