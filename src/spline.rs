use nalgebra::{DMatrix, DVector};

use crate::{
    error::SplineError,
    knot::{Knot, KnotTable},
    polynomial::{falling_factorial, Polynomial},
};

const CUBIC_COEFFICIENTS: usize = 4;

/// Natural cubic spline over a small, fixed set of knots.
///
/// Every interval `[x_i, x_i+1]` carries its own cubic in the local coordinate `t = x - x_i`.
/// The spline passes through each knot, is C² continuous at interior knots and has zero second
/// derivative at the outermost knots. Queries outside the knot range are extrapolated with the
/// boundary interval's cubic.
///
/// # Example
/// ```
/// use extinction::CubicSpline;
/// use assert_approx_eq::assert_approx_eq;
///
/// let spline = CubicSpline::from_values(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
///
/// for knot in spline.knots() {
///     assert_approx_eq!(spline.evaluate(knot.get_x()), knot.get_y(), 1e-12);
/// }
/// assert_approx_eq!(spline.evaluate(0.5), 0.6875, 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<Knot>,
    polynomials: Vec<Polynomial>,
}

impl CubicSpline {
    /// Builds the spline from knots ordered by strictly increasing x.
    pub fn new(knots: Vec<Knot>) -> Result<Self, SplineError> {
        check_knots(&knots)?;
        let polynomials = calculate_polynomials(&knots)?;

        log::trace!("cubic spline assembled over {} intervals", polynomials.len());
        Ok(CubicSpline { knots, polynomials })
    }

    /// Builds the spline from separate x and y sequences.
    pub fn from_values(x_knots: &[f64], y_knots: &[f64]) -> Result<Self, SplineError> {
        if x_knots.len() != y_knots.len() {
            return Err(SplineError::LengthMismatch { x: x_knots.len(), y: y_knots.len() });
        }
        Self::new(KnotTable::from_values(x_knots, y_knots).knots().to_vec())
    }

    pub fn from_table(table: &KnotTable) -> Result<Self, SplineError> {
        Self::new(table.knots().to_vec())
    }

    /// Spline value at `x`, extrapolating beyond the outermost knots.
    pub fn evaluate(&self, x: f64) -> f64 {
        let index = self.find_interval_index(x);
        self.evaluate_interval(index, x)
    }

    /// Spline values for every entry of `x_vector`, in the same order.
    ///
    /// Consecutive queries usually fall into the same or a neighbouring interval, so the previous
    /// interval is tried before falling back to bisection.
    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.evaluate_interval(index, *x));
        }
        results
    }

    /// Value of the `order`-th derivative at `x`.
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        let index = self.find_interval_index(x);
        self.polynomials[index].derivative(x - self.knots[index].get_x(), order)
    }

    /// Knots the spline passes through, in increasing x.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn min_x(&self) -> f64 {
        self.knots[0].get_x()
    }

    pub fn max_x(&self) -> f64 {
        self.knots[self.knots.len() - 1].get_x()
    }

    fn evaluate_interval(&self, index: usize, x: f64) -> f64 {
        self.polynomials[index].evaluate(x - self.knots[index].get_x())
    }

    fn find_interval_index(&self, x: f64) -> usize {
        let size = self.knots.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            return index_hint;
        }
        if index_hint + 1 < self.polynomials.len() && self.is_in_interval_range(index_hint + 1, x) {
            return index_hint + 1;
        }
        if index_hint > 0 && self.is_in_interval_range(index_hint - 1, x) {
            return index_hint - 1;
        }
        self.find_interval_index(x)
    }

    /// Half-open `[x_i, x_i+1)` ranges, with the first and last interval extended to infinity so
    /// the result always agrees with [Self::find_interval_index].
    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        let last = self.polynomials.len() - 1;
        let above_start = interval_index == 0 || self.knots[interval_index].get_x() <= x;
        let below_end = interval_index == last || x < self.knots[interval_index + 1].get_x();
        above_start && below_end
    }
}

fn check_knots(knots: &[Knot]) -> Result<(), SplineError> {
    if knots.len() < 2 {
        return Err(SplineError::TooFewKnots { found: knots.len() });
    }
    if let Some(index) = knots.iter().position(|k| !k.get_x().is_finite()) {
        return Err(SplineError::NonFiniteKnot { index });
    }
    if let Some(index) = knots.windows(2).position(|w| w[1].get_x() <= w[0].get_x()) {
        return Err(SplineError::NotIncreasing { index: index + 1 });
    }
    Ok(())
}

/// Assembles and solves one linear system for all interval coefficients: two value equations
/// per interval, first and second derivative continuity at each interior knot, and zero second
/// derivative at both ends.
fn calculate_polynomials(knots: &[Knot]) -> Result<Vec<Polynomial>, SplineError> {
    let number_of_intervals = knots.len() - 1;
    let matrix_size = CUBIC_COEFFICIENTS * number_of_intervals;

    let mut matrix = DMatrix::<f64>::zeros(matrix_size, matrix_size);
    let mut rhs = DVector::<f64>::zeros(matrix_size);
    let mut equation_counter = 0;

    let start_pow = local_powers(0.0);

    for i in 0..number_of_intervals {
        let index_start = CUBIC_COEFFICIENTS * i;
        let end_pow = local_powers(knots[i + 1].get_x() - knots[i].get_x());

        function_value_equation(
            index_start,
            &start_pow,
            knots[i].get_y(),
            &mut equation_counter,
            &mut matrix,
            &mut rhs,
        );

        function_value_equation(
            index_start,
            &end_pow,
            knots[i + 1].get_y(),
            &mut equation_counter,
            &mut matrix,
            &mut rhs,
        );

        if i < number_of_intervals - 1 {
            for order in 1..=2 {
                continuity_equation(
                    order,
                    index_start,
                    index_start + CUBIC_COEFFICIENTS,
                    &end_pow,
                    &start_pow,
                    &mut equation_counter,
                    &mut matrix,
                );
            }
        }

        // natural end conditions
        if i == 0 {
            derivative_value_equation(
                2,
                index_start,
                &start_pow,
                0.0,
                &mut equation_counter,
                &mut matrix,
                &mut rhs,
            );
        }
        if i == number_of_intervals - 1 {
            derivative_value_equation(
                2,
                index_start,
                &end_pow,
                0.0,
                &mut equation_counter,
                &mut matrix,
                &mut rhs,
            );
        }
    }
    debug_assert_eq!(equation_counter, matrix_size);

    let solution = match matrix.lu().solve(&rhs) {
        Some(solution) => solution,
        None => return Err(SplineError::Singular),
    };

    Ok((0..number_of_intervals)
        .map(|i| {
            let start = CUBIC_COEFFICIENTS * i;
            Polynomial::new(solution.rows(start, CUBIC_COEFFICIENTS).iter().copied().collect())
        })
        .collect())
}

fn local_powers(t: f64) -> [f64; CUBIC_COEFFICIENTS] {
    [1.0, t, t * t, t * t * t]
}

fn derivative_coefficient(power: usize, order: usize, t_pow: &[f64; CUBIC_COEFFICIENTS]) -> f64 {
    if power < order {
        0.0
    } else {
        t_pow[power - order] * falling_factorial(power, order)
    }
}

fn function_value_equation(
    index_start: usize,
    t_pow: &[f64; CUBIC_COEFFICIENTS],
    y_value: f64,
    equation_counter: &mut usize,
    matrix: &mut DMatrix<f64>,
    rhs: &mut DVector<f64>,
) {
    for c in 0..CUBIC_COEFFICIENTS {
        matrix[(*equation_counter, index_start + c)] = t_pow[c];
    }
    rhs[*equation_counter] = y_value;
    *equation_counter += 1;
}

/// Left interval's derivative at its end minus right interval's derivative at its start.
fn continuity_equation(
    order: usize,
    index_start_0: usize,
    index_start_1: usize,
    end_pow: &[f64; CUBIC_COEFFICIENTS],
    start_pow: &[f64; CUBIC_COEFFICIENTS],
    equation_counter: &mut usize,
    matrix: &mut DMatrix<f64>,
) {
    for c in 0..CUBIC_COEFFICIENTS {
        matrix[(*equation_counter, index_start_0 + c)] = derivative_coefficient(c, order, end_pow);
        matrix[(*equation_counter, index_start_1 + c)] =
            -derivative_coefficient(c, order, start_pow);
    }
    *equation_counter += 1;
}

fn derivative_value_equation(
    order: usize,
    index_start: usize,
    t_pow: &[f64; CUBIC_COEFFICIENTS],
    value: f64,
    equation_counter: &mut usize,
    matrix: &mut DMatrix<f64>,
    rhs: &mut DVector<f64>,
) {
    for c in 0..CUBIC_COEFFICIENTS {
        matrix[(*equation_counter, index_start + c)] = derivative_coefficient(c, order, t_pow);
    }
    rhs[*equation_counter] = value;
    *equation_counter += 1;
}
