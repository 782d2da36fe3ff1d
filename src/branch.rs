//! Piecewise `a(x)`, `b(x)` coefficients of the Cardelli, Clayton & Mathis (1989) law family.
//!
//! O'Donnell (1994) swaps in a new optical polynomial; Gordon et al. (2009) keeps that polynomial
//! and replaces the ultraviolet branch, which then runs through the far ultraviolet as well.
//! Each law is a [BranchSet] assembled from the shared branch functions below.

use crate::polynomial::horner;

/// Upper edge of the infrared branch, inverse microns.
pub const IR_LIMIT: f64 = 1.1;
/// Upper edge of the optical branch, inverse microns.
pub const OPTICAL_LIMIT: f64 = 3.3;
/// Start of the far ultraviolet branch, inverse microns.
pub const FAR_UV_LIMIT: f64 = 8.0;
/// Above this wavenumber the ultraviolet branches gain an additive correction.
pub const UV_CORRECTION_LIMIT: f64 = 5.9;

const CCM89_OPTICAL_A: [f64; 8] = [
    1.0, 0.17699, -0.50447, -0.02427, 0.72085, 0.01979, -0.77530, 0.32999,
];
const CCM89_OPTICAL_B: [f64; 8] = [
    0.0, 1.41338, 2.28305, 1.07233, -5.38434, -0.62251, 5.30260, -2.09002,
];

const OD94_OPTICAL_A: [f64; 9] = [1.0, 0.104, -0.609, 0.701, 1.137, -1.718, -0.827, 1.647, -0.505];
const OD94_OPTICAL_B: [f64; 9] = [0.0, 1.952, 2.908, -3.989, -7.985, 11.102, 5.491, -10.805, 3.347];

const CCM89_FAR_UV_A: [f64; 4] = [-1.073, -0.628, 0.137, -0.070];
const CCM89_FAR_UV_B: [f64; 4] = [13.670, 4.257, -0.420, 0.374];

/// Quadratic and cubic coefficients of the correction added above [UV_CORRECTION_LIMIT].
const CCM89_UV_CORRECTION_A: [f64; 2] = [-0.04473, -0.009779];
const CCM89_UV_CORRECTION_B: [f64; 2] = [0.2130, 0.1207];
const GCC09_UV_CORRECTION_A: [f64; 2] = [-0.110, -0.0099];
const GCC09_UV_CORRECTION_B: [f64; 2] = [0.537, 0.0530];

/// Mixing coefficients at one wavenumber: `A(x) / A_V = a + b / R_V`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64) -> Self {
        Coefficients { a, b }
    }

    /// Extinction in magnitudes.
    pub fn extinction(&self, a_v: f64, r_v: f64) -> f64 {
        a_v * (self.a + self.b / r_v)
    }
}

/// A single closed-form branch.
pub type BranchFn = fn(f64) -> Coefficients;

pub fn ccm89_ir(x: f64) -> Coefficients {
    let y = x.powf(1.61);
    Coefficients::new(0.574 * y, -0.527 * y)
}

pub fn ccm89_optical(x: f64) -> Coefficients {
    let y = x - 1.82;
    Coefficients::new(horner(&CCM89_OPTICAL_A, y), horner(&CCM89_OPTICAL_B, y))
}

pub fn od94_optical(x: f64) -> Coefficients {
    let y = x - 1.82;
    Coefficients::new(horner(&OD94_OPTICAL_A, y), horner(&OD94_OPTICAL_B, y))
}

pub fn ccm89_uv(x: f64) -> Coefficients {
    let a = 1.752 - 0.316 * x - 0.104 / ((x - 4.67) * (x - 4.67) + 0.341);
    let b = -3.090 + 1.825 * x + 1.206 / ((x - 4.62) * (x - 4.62) + 0.263);
    with_uv_correction(x, Coefficients::new(a, b), &CCM89_UV_CORRECTION_A, &CCM89_UV_CORRECTION_B)
}

pub fn gcc09_uv(x: f64) -> Coefficients {
    let a = 1.896 - 0.372 * x - 0.0108 / ((x - 4.57) * (x - 4.57) + 0.0422);
    let b = -3.503 + 2.057 * x + 0.718 / ((x - 4.59) * (x - 4.59) + 0.0530 * 3.1);
    with_uv_correction(x, Coefficients::new(a, b), &GCC09_UV_CORRECTION_A, &GCC09_UV_CORRECTION_B)
}

pub fn ccm89_far_uv(x: f64) -> Coefficients {
    let y = x - 8.0;
    Coefficients::new(horner(&CCM89_FAR_UV_A, y), horner(&CCM89_FAR_UV_B, y))
}

/// Adds `c2*y^2 + c3*y^3` (with `y = x - 5.9`) to both coefficients, strictly above 5.9 only.
/// The result is continuous at 5.9 but its derivative is not.
fn with_uv_correction(
    x: f64,
    base: Coefficients,
    correction_a: &[f64; 2],
    correction_b: &[f64; 2],
) -> Coefficients {
    if x > UV_CORRECTION_LIMIT {
        let y = x - UV_CORRECTION_LIMIT;
        let y2 = y * y;
        let y3 = y2 * y;
        Coefficients::new(
            base.a + correction_a[0] * y2 + correction_a[1] * y3,
            base.b + correction_b[0] * y2 + correction_b[1] * y3,
        )
    } else {
        base
    }
}

/// Branch selector of one law: which function covers each wavenumber region.
///
/// Selection uses strict `<` against each upper edge, so a wavenumber sitting exactly on an edge
/// belongs to the higher branch. Without a far ultraviolet branch the ultraviolet branch extends
/// to arbitrarily large wavenumbers.
#[derive(Debug, Clone, Copy)]
pub struct BranchSet {
    pub ir: BranchFn,
    pub optical: BranchFn,
    pub uv: BranchFn,
    pub far_uv: Option<BranchFn>,
}

impl BranchSet {
    pub const CCM89: BranchSet = BranchSet {
        ir: ccm89_ir,
        optical: ccm89_optical,
        uv: ccm89_uv,
        far_uv: Some(ccm89_far_uv),
    };

    pub const OD94: BranchSet = BranchSet {
        ir: ccm89_ir,
        optical: od94_optical,
        uv: ccm89_uv,
        far_uv: Some(ccm89_far_uv),
    };

    pub const GCC09: BranchSet = BranchSet {
        ir: ccm89_ir,
        optical: od94_optical,
        uv: gcc09_uv,
        far_uv: None,
    };

    pub fn coefficients(&self, x: f64) -> Coefficients {
        if x < IR_LIMIT {
            (self.ir)(x)
        } else if x < OPTICAL_LIMIT {
            (self.optical)(x)
        } else {
            match self.far_uv {
                Some(far_uv) if x >= FAR_UV_LIMIT => far_uv(x),
                _ => (self.uv)(x),
            }
        }
    }

    /// Extinction in magnitudes at each wavenumber (inverse microns).
    pub fn extinction_invum(&self, x: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
        x.iter()
            .map(|x| self.coefficients(*x).extinction(a_v, r_v))
            .collect()
    }
}
