/// Wavelength in Angstroms to wavenumber in inverse microns.
pub fn aa_to_invum(wave: &[f64]) -> Vec<f64> {
    wave.iter().map(|w| 1.0e4 / w).collect()
}
