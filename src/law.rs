//! Array entry points for each law.
//!
//! `<law>_invum` takes wavenumbers in inverse microns, `<law>_aa` wavelengths in Angstroms and
//! `<law>` is the Angstrom form. Output has the same length and order as the input.

use crate::{
    branch::BranchSet,
    error::ExtinctionError,
    fitzpatrick::{F99Extinction, Fm07Extinction},
    wavenumber::aa_to_invum,
};

/// Cardelli, Clayton & Mathis (1989).
pub fn ccm89_invum(x: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    BranchSet::CCM89.extinction_invum(x, a_v, r_v)
}

pub fn ccm89_aa(wave: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    ccm89_invum(&aa_to_invum(wave), a_v, r_v)
}

pub fn ccm89(wave: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    ccm89_aa(wave, a_v, r_v)
}

/// O'Donnell (1994): CCM89 with an updated optical polynomial.
pub fn od94_invum(x: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    BranchSet::OD94.extinction_invum(x, a_v, r_v)
}

pub fn od94_aa(wave: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    od94_invum(&aa_to_invum(wave), a_v, r_v)
}

pub fn od94(wave: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    od94_aa(wave, a_v, r_v)
}

/// Gordon, Cartledge & Clayton (2009): OD94 optical with a refit ultraviolet.
pub fn gcc09_invum(x: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    BranchSet::GCC09.extinction_invum(x, a_v, r_v)
}

pub fn gcc09_aa(wave: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    gcc09_invum(&aa_to_invum(wave), a_v, r_v)
}

pub fn gcc09(wave: &[f64], a_v: f64, r_v: f64) -> Vec<f64> {
    gcc09_aa(wave, a_v, r_v)
}

/// Fitzpatrick (1999). Builds the R_V spline on every call; keep an [F99Extinction] around when
/// evaluating repeatedly.
pub fn f99_invum(x: &[f64], a_v: f64, r_v: f64) -> Result<Vec<f64>, ExtinctionError> {
    Ok(F99Extinction::new(r_v)?.extinction_invum(x, a_v))
}

pub fn f99_aa(wave: &[f64], a_v: f64, r_v: f64) -> Result<Vec<f64>, ExtinctionError> {
    Ok(F99Extinction::new(r_v)?.extinction_aa(wave, a_v))
}

pub fn f99(wave: &[f64], a_v: f64, r_v: f64) -> Result<Vec<f64>, ExtinctionError> {
    f99_aa(wave, a_v, r_v)
}

/// Fitzpatrick & Massa (2007), R_V = 3.1. Builds the spline on every call; keep an
/// [Fm07Extinction] around when evaluating repeatedly.
pub fn fm07_invum(x: &[f64], a_v: f64) -> Result<Vec<f64>, ExtinctionError> {
    Ok(Fm07Extinction::new()?.extinction_invum(x, a_v))
}

pub fn fm07_aa(wave: &[f64], a_v: f64) -> Result<Vec<f64>, ExtinctionError> {
    Ok(Fm07Extinction::new()?.extinction_aa(wave, a_v))
}

pub fn fm07(wave: &[f64], a_v: f64) -> Result<Vec<f64>, ExtinctionError> {
    fm07_aa(wave, a_v)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn assert_allclose(actual: &[f64], expected: &[f64], rtol: f64) {
        assert_eq!(expected.len(), actual.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a - e).abs() <= rtol * e.abs(),
                "{} differs from {} by more than rtol {}",
                a,
                e,
                rtol
            );
        }
    }

    fn random_wave(seed: u64, n: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| rng.gen_range(910.0..33000.0)).collect()
    }

    #[test]
    fn ccm89_table_3() {
        // U, B, V, R, I, J, H, K effective wavenumbers and A(x)/A_V for R_V = 3.1 from CCM89
        // Table 3. Agreement is only at the 1.6 % level, the paper's B band differs by 0.014.
        let x = [2.78, 2.27, 1.82, 1.43, 1.11, 0.80, 0.63, 0.46];
        let expected = [1.569, 1.337, 1.000, 0.751, 0.479, 0.282, 0.190, 0.114];
        let wave: Vec<f64> = x.iter().map(|x| 1.0e4 / x).collect();

        assert_allclose(&ccm89(&wave, 1.0, 3.1), &expected, 0.016);
    }

    #[test]
    fn od94_sfd98_table() {
        // Effective wavelengths and A(x)/A_V for R_V = 3.1 tabulated by Schlegel, Finkbeiner &
        // Davis (1998).
        let wave = [
            3372., 4404., 5428., 6509., 8090., 3683., 4393., 5519., 6602., 8046., 12660., 16732.,
            22152., 5244., 6707., 7985., 9055., 6993., 3502., 4676., 4127., 4861., 5479., 3546.,
            4925., 6335., 7799., 9294., 3047., 4711., 5498., 6042., 7068., 8066., 4814., 6571.,
            8183.,
        ];
        let expected = [
            1.664, 1.321, 1.015, 0.819, 0.594, 1.521, 1.324, 0.992, 0.807, 0.601, 0.276, 0.176,
            0.112, 1.065, 0.793, 0.610, 0.472, 0.755, 1.602, 1.240, 1.394, 1.182, 1.004, 1.579,
            1.161, 0.843, 0.639, 0.453, 1.791, 1.229, 0.996, 0.885, 0.746, 0.597, 1.197, 0.811,
            0.580,
        ];

        assert_allclose(&od94(&wave, 1.0, 3.1), &expected, 0.0051);
    }

    #[test]
    fn ccm89_v_band() {
        assert_approx_eq!(ccm89(&[5500.0], 1.0, 3.1)[0], 1.0, 0.05);
    }

    #[test]
    fn ccm89_and_od94_differ_only_in_optical() {
        let x: Vec<f64> = (1..=110).map(|i| i as f64 * 0.1).collect();
        let ccm = ccm89_invum(&x, 1.0, 3.1);
        let od = od94_invum(&x, 1.0, 3.1);

        for ((x, c), o) in x.iter().zip(&ccm).zip(&od) {
            if (1.1..3.3).contains(x) {
                if (*x - 1.82).abs() > 1e-6 {
                    assert_ne!(c, o, "x = {}", x);
                }
            } else {
                assert_eq!(c, o, "x = {}", x);
            }
        }
    }

    #[test]
    fn gcc09_matches_od94_in_optical() {
        let x: Vec<f64> = (0..220).map(|i| 1.1 + i as f64 * 0.01).filter(|x| *x < 3.3).collect();

        assert_eq!(od94_invum(&x, 1.4, 2.9), gcc09_invum(&x, 1.4, 2.9));
    }

    #[test]
    fn gcc09_uv_extends_past_far_uv() {
        let x = [8.0, 9.5, 11.0];

        assert_ne!(ccm89_invum(&x, 1.0, 3.1), gcc09_invum(&x, 1.0, 3.1));
        assert!(gcc09_invum(&x, 1.0, 3.1).windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn boundary_uses_higher_branch() {
        let just_below = f64::from_bits(1.1_f64.to_bits() - 1);
        let values = ccm89_invum(&[just_below, 1.1], 1.0, 3.1);
        let optical = BranchSet::CCM89.optical;
        let ir = BranchSet::CCM89.ir;

        assert_eq!(optical(1.1).extinction(1.0, 3.1), values[1]);
        assert_eq!(ir(just_below).extinction(1.0, 3.1), values[0]);
    }

    #[test]
    fn uv_correction_starts_above_5_9() {
        let base = |x: f64| {
            let a = 1.752 - 0.316 * x - 0.104 / ((x - 4.67) * (x - 4.67) + 0.341);
            let b = -3.090 + 1.825 * x + 1.206 / ((x - 4.62) * (x - 4.62) + 0.263);
            a + b / 3.1
        };

        assert_eq!(base(5.9), ccm89_invum(&[5.9], 1.0, 3.1)[0]);
        assert_ne!(base(5.900001), ccm89_invum(&[5.900001], 1.0, 3.1)[0]);
    }

    #[test]
    fn zero_a_v_gives_zero() {
        let wave = random_wave(0, 300);

        for r_v in [2.0, 3.1, 6.0] {
            for result in [ccm89(&wave, 0.0, r_v), od94(&wave, 0.0, r_v), gcc09(&wave, 0.0, r_v)] {
                assert!(result.iter().all(|m| *m == 0.0));
            }
            assert!(f99(&wave, 0.0, r_v).unwrap().iter().all(|m| *m == 0.0));
        }
        assert!(fm07(&wave, 0.0).unwrap().iter().all(|m| *m == 0.0));
    }

    #[test]
    fn zero_r_v_is_not_an_error() {
        let result = ccm89(&[5500.0, 2000.0], 1.0, 0.0);
        assert!(result.iter().all(|m| !m.is_finite()));

        assert!(f99(&[5500.0], 1.0, 0.0).is_ok());
    }

    #[test]
    fn wavelength_forms_match_wavenumber_forms() {
        let wave = random_wave(7, 500);
        let x: Vec<f64> = wave.iter().map(|w| 1e4 / w).collect();

        assert_eq!(ccm89_aa(&wave, 1.2, 3.4), ccm89_invum(&x, 1.2, 3.4));
        assert_eq!(od94_aa(&wave, 1.2, 3.4), od94_invum(&x, 1.2, 3.4));
        assert_eq!(gcc09_aa(&wave, 1.2, 3.4), gcc09_invum(&x, 1.2, 3.4));
        assert_eq!(f99_aa(&wave, 1.2, 3.4).unwrap(), f99_invum(&x, 1.2, 3.4).unwrap());
        assert_eq!(fm07_aa(&wave, 1.2).unwrap(), fm07_invum(&x, 1.2).unwrap());
    }

    #[test]
    fn aliases_match_wavelength_forms() {
        let wave = random_wave(3, 50);

        assert_eq!(ccm89(&wave, 1.0, 3.1), ccm89_aa(&wave, 1.0, 3.1));
        assert_eq!(od94(&wave, 1.0, 3.1), od94_aa(&wave, 1.0, 3.1));
        assert_eq!(gcc09(&wave, 1.0, 3.1), gcc09_aa(&wave, 1.0, 3.1));
        assert_eq!(f99(&wave, 1.0, 3.1).unwrap(), f99_aa(&wave, 1.0, 3.1).unwrap());
        assert_eq!(fm07(&wave, 1.0).unwrap(), fm07_aa(&wave, 1.0).unwrap());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(ccm89(&[], 1.0, 3.1).is_empty());
        assert!(od94_invum(&[], 1.0, 3.1).is_empty());
        assert!(gcc09_aa(&[], 1.0, 3.1).is_empty());
        assert!(f99(&[], 1.0, 3.1).unwrap().is_empty());
        assert!(fm07(&[], 1.0).unwrap().is_empty());
    }

    #[test]
    fn f99_covers_wide_grid() {
        let wave: Vec<f64> = (0..100).map(|i| 1000.0 + i as f64 * 59000.0 / 99.0).collect();
        let result = f99(&wave, 1.0, 3.1).unwrap();

        assert_eq!(100, result.len());
        assert!(result.iter().all(|m| m.is_finite() && *m > 0.0));
    }
}
