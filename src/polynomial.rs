/// Evaluates polynomial with ascending `coefficients` (`c0 + c1*x + c2*x^2 + ...`) in nested form.
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |result, c| result * x + c)
}

/// Owned polynomial, used for spline segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        horner(&self.coefficients, x)
    }

    /// Value of the `order`-th derivative at `x`.
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        let mut result = 0.0;
        for (power, c) in self.coefficients.iter().enumerate().skip(order).rev() {
            result = result * x + c * falling_factorial(power, order);
        }
        result
    }
}

/// `power * (power - 1) * ... * (power - order + 1)`, the factor that the `order`-th derivative
/// brings down in front of `x^power`.
pub fn falling_factorial(power: usize, order: usize) -> f64 {
    let mut multiplier = 1.0;
    let mut coeff = power as f64;
    for _ in 0..order {
        multiplier *= coeff;
        coeff -= 1.0;
    }
    multiplier
}
