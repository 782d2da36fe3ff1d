//! Applying extinction to observed fluxes.

/// Reddens `flux` by `extinction` magnitudes: `flux * 10^(-0.4 * A)`.
pub fn apply(extinction: &[f64], flux: &[f64]) -> Vec<f64> {
    scale(extinction, flux, -0.4)
}

/// Corrects `flux` for `extinction` magnitudes: `flux * 10^(0.4 * A)`.
pub fn remove(extinction: &[f64], flux: &[f64]) -> Vec<f64> {
    scale(extinction, flux, 0.4)
}

fn scale(extinction: &[f64], flux: &[f64], factor: f64) -> Vec<f64> {
    debug_assert_eq!(extinction.len(), flux.len());
    extinction
        .iter()
        .zip(flux)
        .map(|(a, f)| f * 10f64.powf(factor * a))
        .collect()
}
