//! Tolerances for approximate comparison of beams

/// Default tolerance for the quantities that are only checked by
/// the extended comparison.
pub const DEFAULT_EXTENDED_TOLERANCE: f64 = 1.0e-6;

/// Per-quantity tolerances used by `is_similar_to_with`.
///
/// Angular tolerances (`direction`, `polarization_normal`) are in radians
/// and are compared against the angle between the two vectors.
/// `wavelength` is ignored when comparing polychromatic beams.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimilarityTolerances {
    pub wavelength: f64,
    pub direction: f64,
    pub polarization_normal: f64,
    pub polarization_fraction: f64,
    pub divergence: f64,
    pub sigma_divergence: f64,
    pub flux: f64,
    pub transmission: f64,
    pub sample_to_source_distance: f64,
}

impl Default for SimilarityTolerances {
    fn default() -> Self {
        Self::uniform(DEFAULT_EXTENDED_TOLERANCE)
    }
}

impl SimilarityTolerances {
    /// Tolerances for the four primary quantities, with the remainder
    /// set to [`DEFAULT_EXTENDED_TOLERANCE`].
    pub fn new(wavelength: f64, direction: f64, polarization_normal: f64, polarization_fraction: f64) -> Self {
        Self {
            wavelength,
            direction,
            polarization_normal,
            polarization_fraction,
            ..Default::default()
        }
    }

    /// The same tolerance for every quantity.
    pub fn uniform(tol: f64) -> Self {
        Self {
            wavelength: tol,
            direction: tol,
            polarization_normal: tol,
            polarization_fraction: tol,
            divergence: tol,
            sigma_divergence: tol,
            flux: tol,
            transmission: tol,
            sample_to_source_distance: tol,
        }
    }

    pub fn with_divergence(self, divergence: f64) -> Self {
        Self { divergence, ..self }
    }

    pub fn with_sigma_divergence(self, sigma_divergence: f64) -> Self {
        Self { sigma_divergence, ..self }
    }

    pub fn with_flux(self, flux: f64) -> Self {
        Self { flux, ..self }
    }

    pub fn with_transmission(self, transmission: f64) -> Self {
        Self { transmission, ..self }
    }

    pub fn with_sample_to_source_distance(self, sample_to_source_distance: f64) -> Self {
        Self { sample_to_source_distance, ..self }
    }
}

/// Is `|a - b| <= tol`?
pub(crate) fn within(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
