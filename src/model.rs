//! Choosing a law at run time.

use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    branch::BranchSet,
    error::ExtinctionError,
    fitzpatrick::{F99Extinction, Fm07Extinction, FM07_R_V},
    wavenumber::aa_to_invum,
};

/// R_V of the diffuse Milky Way interstellar medium.
pub const DEFAULT_R_V: f64 = 3.1;

/// Supported extinction laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Law {
    Ccm89,
    Od94,
    Gcc09,
    F99,
    Fm07,
}

impl Law {
    pub const ALL: [Law; 5] = [Law::Ccm89, Law::Od94, Law::Gcc09, Law::F99, Law::Fm07];

    pub fn name(&self) -> &'static str {
        match self {
            Law::Ccm89 => "ccm89",
            Law::Od94 => "od94",
            Law::Gcc09 => "gcc09",
            Law::F99 => "f99",
            Law::Fm07 => "fm07",
        }
    }

    /// Branch table for the polynomial laws, `None` for the spline based ones.
    pub fn branches(&self) -> Option<BranchSet> {
        match self {
            Law::Ccm89 => Some(BranchSet::CCM89),
            Law::Od94 => Some(BranchSet::OD94),
            Law::Gcc09 => Some(BranchSet::GCC09),
            Law::F99 | Law::Fm07 => None,
        }
    }
}

impl Display for Law {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Law {
    type Err = ExtinctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ccm89" | "cardelli89" => Ok(Law::Ccm89),
            "od94" | "odonnell94" => Ok(Law::Od94),
            "gcc09" => Ok(Law::Gcc09),
            "f99" | "fitzpatrick99" => Ok(Law::F99),
            "fm07" | "fitzpatrick_massa07" => Ok(Law::Fm07),
            _ => Err(ExtinctionError::UnknownLaw(s.to_string())),
        }
    }
}

/// Which law to use and the R_V it is built for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtinctionConfig {
    pub law: Law,
    pub r_v: f64,
}

impl Default for ExtinctionConfig {
    fn default() -> Self {
        ExtinctionConfig { law: Law::F99, r_v: DEFAULT_R_V }
    }
}

impl ExtinctionConfig {
    pub fn new(law: Law, r_v: f64) -> Self {
        ExtinctionConfig { law, r_v }
    }

    /// Builds the law, including any spline it needs.
    pub fn build(&self) -> Result<ExtinctionModel, ExtinctionError> {
        if let Some(branches) = self.law.branches() {
            return Ok(ExtinctionModel::Polynomial { law: self.law, branches, r_v: self.r_v });
        }

        if self.law == Law::Fm07 {
            if self.r_v != FM07_R_V {
                log::warn!("FM07 is defined for R_V = {}, ignoring R_V = {}", FM07_R_V, self.r_v);
            }
            return Ok(ExtinctionModel::Fm07(Fm07Extinction::new()?));
        }

        Ok(ExtinctionModel::F99(F99Extinction::new(self.r_v)?))
    }
}

/// A ready to evaluate extinction law with its R_V fixed.
///
/// # Example
/// ```
/// use extinction::{ExtinctionConfig, Law};
///
/// let model = ExtinctionConfig::new(Law::Od94, 3.1).build().unwrap();
/// let magnitudes = model.extinction_aa(&[4400.0, 5500.0], 0.5);
///
/// assert!(magnitudes[0] > magnitudes[1]);
/// ```
#[derive(Debug, Clone)]
pub enum ExtinctionModel {
    Polynomial { law: Law, branches: BranchSet, r_v: f64 },
    F99(F99Extinction),
    Fm07(Fm07Extinction),
}

impl ExtinctionModel {
    pub fn law(&self) -> Law {
        match self {
            ExtinctionModel::Polynomial { law, .. } => *law,
            ExtinctionModel::F99(_) => Law::F99,
            ExtinctionModel::Fm07(_) => Law::Fm07,
        }
    }

    pub fn r_v(&self) -> f64 {
        match self {
            ExtinctionModel::Polynomial { r_v, .. } => *r_v,
            ExtinctionModel::F99(f99) => f99.r_v(),
            ExtinctionModel::Fm07(fm07) => fm07.r_v(),
        }
    }

    /// Extinction in magnitudes for wavelengths in Angstroms.
    pub fn extinction_aa(&self, wave: &[f64], a_v: f64) -> Vec<f64> {
        match self {
            ExtinctionModel::Polynomial { branches, r_v, .. } => {
                branches.extinction_invum(&aa_to_invum(wave), a_v, *r_v)
            }
            ExtinctionModel::F99(f99) => f99.extinction_aa(wave, a_v),
            ExtinctionModel::Fm07(fm07) => fm07.extinction_aa(wave, a_v),
        }
    }

    /// Extinction in magnitudes for wavenumbers in inverse microns.
    pub fn extinction_invum(&self, x: &[f64], a_v: f64) -> Vec<f64> {
        match self {
            ExtinctionModel::Polynomial { branches, r_v, .. } => {
                branches.extinction_invum(x, a_v, *r_v)
            }
            ExtinctionModel::F99(f99) => f99.extinction_invum(x, a_v),
            ExtinctionModel::Fm07(fm07) => fm07.extinction_invum(x, a_v),
        }
    }
}
