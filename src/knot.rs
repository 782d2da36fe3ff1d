use crate::fitzpatrick::{f99_uv_invum, fm07_uv_invum, FM07_R_V, UV_BOUNDARY_AA};

/// Knot represents point through which spline function passes.
/// - `x` - wavenumber in inverse microns,
/// - `y` - spline value at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

/// Knot wavenumbers of Fitzpatrick (1999): infinite wavelength, then
/// 26500, 12200, 6000, 5470, 4670, 4110, 2700 and 2600 Angstroms.
pub const F99_X_KNOTS: [f64; 9] = [
    0.0,
    1.0e4 / 26500.0,
    1.0e4 / 12200.0,
    1.0e4 / 6000.0,
    1.0e4 / 5470.0,
    1.0e4 / 4670.0,
    1.0e4 / 4110.0,
    1.0e4 / UV_BOUNDARY_AA,
    1.0e4 / 2600.0,
];

/// Knot wavenumbers of Fitzpatrick & Massa (2007).
pub const FM07_X_KNOTS: [f64; 10] = [
    0.0,
    0.25,
    0.50,
    0.75,
    1.0,
    1.0e4 / 5530.0,
    1.0e4 / 4000.0,
    1.0e4 / 3300.0,
    1.0e4 / UV_BOUNDARY_AA,
    1.0e4 / 2600.0,
];

/// Ordered `(x, k)` anchor points of a spline-based extinction law.
///
/// The x values are fixed per law; only the k values depend on R_V. The last two knots of both
/// tables sit on the analytic UV curve so the spline meets it at 2700 Angstroms.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotTable {
    knots: Vec<Knot>,
}

impl KnotTable {
    /// Builds a table from matching x and k sequences.
    pub fn from_values(x_knots: &[f64], k_knots: &[f64]) -> Self {
        let knots = x_knots
            .iter()
            .zip(k_knots)
            .map(|(x, k)| Knot::new(*x, *k))
            .collect();
        KnotTable { knots }
    }

    /// Fitzpatrick (1999) knots for the given R_V.
    pub fn f99(r_v: f64) -> Self {
        let r_v2 = r_v * r_v;
        let r_v3 = r_v2 * r_v;
        let r_v4 = r_v3 * r_v;

        let mut k_knots = [0.0; 9];
        k_knots[0] = -r_v;
        k_knots[1] = 0.26469 * r_v / 3.1 - r_v;
        k_knots[2] = 0.82925 * r_v / 3.1 - r_v;
        k_knots[3] = -0.422809 + 1.00270 * r_v + 2.13572e-04 * r_v2 - r_v;
        k_knots[4] = -5.13540e-02 + 1.00216 * r_v - 7.35778e-05 * r_v2 - r_v;
        k_knots[5] = 7.00127e-01 + 1.00184 * r_v - 3.32598e-05 * r_v2 - r_v;
        k_knots[6] = 1.19456 + 1.01707 * r_v - 5.46959e-03 * r_v2 + 7.97809e-04 * r_v3
            - 4.45636e-05 * r_v4
            - r_v;
        k_knots[7] = f99_uv_invum(F99_X_KNOTS[7], r_v);
        k_knots[8] = f99_uv_invum(F99_X_KNOTS[8], r_v);

        Self::from_values(&F99_X_KNOTS, &k_knots)
    }

    /// Fitzpatrick & Massa (2007) knots. R_V is fixed at 3.1 for this law.
    pub fn fm07() -> Self {
        let mut k_knots = [0.0; 10];
        for (k, x) in k_knots.iter_mut().zip(&FM07_X_KNOTS[..5]) {
            *k = (-0.83 + 0.63 * FM07_R_V) * x.powf(1.84) - FM07_R_V;
        }
        k_knots[5] = 0.0;
        k_knots[6] = 1.322;
        k_knots[7] = 2.055;
        k_knots[8] = fm07_uv_invum(FM07_X_KNOTS[8]);
        k_knots[9] = fm07_uv_invum(FM07_X_KNOTS[9]);

        Self::from_values(&FM07_X_KNOTS, &k_knots)
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn x_values(&self) -> Vec<f64> {
        self.knots.iter().map(Knot::get_x).collect()
    }

    pub fn k_values(&self) -> Vec<f64> {
        self.knots.iter().map(Knot::get_y).collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new() {
        let knot = Knot::new(1.0, 2.5);

        assert_eq!(1.0, knot.get_x());
        assert_eq!(2.5, knot.get_y());
    }

    #[test]
    fn test_from_values() {
        let table = KnotTable::from_values(&[0.0, 1.0, 2.0], &[3.0, 4.0, 5.0]);

        assert_eq!(3, table.knots().len());
        assert_eq!(vec![0.0, 1.0, 2.0], table.x_values());
        assert_eq!(vec![3.0, 4.0, 5.0], table.k_values());
    }

    #[test]
    fn test_f99_x_values_are_increasing() {
        assert!(F99_X_KNOTS.windows(2).all(|w| w[0] < w[1]));
        assert!(FM07_X_KNOTS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_f99_knots() {
        let r_v = 3.1;
        let table = KnotTable::f99(r_v);

        assert_eq!(9, table.knots().len());
        assert_eq!(F99_X_KNOTS.to_vec(), table.x_values());

        let k = table.k_values();
        assert_eq!(-r_v, k[0]);
        assert_approx_eq!(k[1], 0.26469 - 3.1, 1e-12);
        assert_approx_eq!(k[2], 0.82925 - 3.1, 1e-12);
        // V band knot sits close to k = 0 by construction of E(B-V) normalisation.
        assert!(k[4].abs() < 0.1);
        assert_eq!(f99_uv_invum(F99_X_KNOTS[7], r_v), k[7]);
        assert_eq!(f99_uv_invum(F99_X_KNOTS[8], r_v), k[8]);
    }

    #[test]
    fn test_f99_knots_depend_on_r_v() {
        let low = KnotTable::f99(2.5);
        let high = KnotTable::f99(5.0);

        assert_eq!(low.x_values(), high.x_values());
        assert_ne!(low.k_values(), high.k_values());
    }

    #[test]
    fn test_fm07_knots() {
        let table = KnotTable::fm07();

        assert_eq!(10, table.knots().len());
        assert_eq!(FM07_X_KNOTS.to_vec(), table.x_values());

        let k = table.k_values();
        assert_eq!(-FM07_R_V, k[0]);
        assert_approx_eq!(k[4], -0.83 + 0.63 * 3.1 - 3.1, 1e-12);
        assert_eq!(0.0, k[5]);
        assert_eq!(1.322, k[6]);
        assert_eq!(2.055, k[7]);
        assert_eq!(fm07_uv_invum(FM07_X_KNOTS[8]), k[8]);
        assert_eq!(fm07_uv_invum(FM07_X_KNOTS[9]), k[9]);
    }
}
