//! A beam with no fixed wavelength

use std::fmt;

use crate::constants::*;
use crate::geometry::ThreeVector;
use super::{BeamBase, BeamError, BeamProperties, SimilarityTolerances};

/// A polychromatic (e.g. white or pink) beam. It shares the geometry,
/// polarization and intensity attributes of a monochromatic beam, but
/// has neither a wavelength nor a wave vector, so those operations are
/// simply not available.
#[derive(Debug, Clone)]
pub struct PolychromaticBeam {
    properties: BeamProperties,
}

impl Default for PolychromaticBeam {
    fn default() -> Self {
        Self {
            properties: BeamProperties::with_polarization_fraction(0.5),
        }
    }
}

impl BeamBase for PolychromaticBeam {
    fn properties(&self) -> &BeamProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut BeamProperties {
        &mut self.properties
    }
}

impl PolychromaticBeam {
    /// Creates a new beam with sample-to-source `direction` (renormalized).
    pub fn new(direction: ThreeVector) -> Result<Self, BeamError> {
        let mut beam = Self::default();
        beam.set_direction(direction)?;
        Ok(beam)
    }

    /// Compares the direction, polarization and probe of two beams.
    pub fn is_similar_to(&self, other: &Self, direction_tolerance: f64, polarization_normal_tolerance: f64, polarization_fraction_tolerance: f64) -> bool {
        self.properties.is_similar_to(&other.properties, direction_tolerance, polarization_normal_tolerance, polarization_fraction_tolerance)
    }

    /// As [`is_similar_to`](Self::is_similar_to), but also compares the
    /// divergence, flux, transmission and sample-to-source distance.
    /// `tol.wavelength` is not used.
    pub fn is_similar_to_with(&self, other: &Self, tol: &SimilarityTolerances) -> bool {
        self.properties.is_similar_to_with(&other.properties, tol)
    }
}

impl PartialEq for PolychromaticBeam {
    fn eq(&self, other: &Self) -> bool {
        self.properties.approx_eq(&other.properties, BEAM_EQUALITY_TOLERANCE)
    }
}

impl fmt::Display for PolychromaticBeam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Beam:")?;
        writeln!(f, "    probe: {}", self.probe_name())?;
        writeln!(f, "    sample to source direction: {{{}}}", self.sample_to_source_direction())?;
        writeln!(f, "    divergence: {}", self.divergence())?;
        writeln!(f, "    sigma divergence: {}", self.sigma_divergence())?;
        writeln!(f, "    polarization normal: {{{}}}", self.polarization_normal())?;
        writeln!(f, "    polarization fraction: {}", self.polarization_fraction())?;
        writeln!(f, "    flux: {}", self.flux())?;
        writeln!(f, "    transmission: {}", self.transmission())?;
        writeln!(f, "    sample to source distance: {}", self.sample_to_source_distance())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use super::*;
    use crate::beam::Probe;

    #[test]
    fn defaults() {
        let beam = PolychromaticBeam::default();
        assert_eq!(beam.sample_to_source_direction(), ThreeVector::new(0.0, 0.0, 1.0));
        assert_eq!(beam.polarization_normal(), ThreeVector::new(0.0, 1.0, 0.0));
        assert_eq!(beam.polarization_fraction(), 0.5);
        assert_eq!(beam.divergence(), 0.0);
        assert_eq!(beam.transmission(), 1.0);
        assert_eq!(beam.probe(), Probe::Xray);
        assert_eq!(beam, PolychromaticBeam::new(ThreeVector::new(0.0, 0.0, 2.0)).unwrap());
        assert!(PolychromaticBeam::new(ThreeVector::zero()).is_err());
    }

    #[test]
    fn rotation() {
        let mut beam = PolychromaticBeam::new(ThreeVector::new(0.0, 0.0, 1.0)).unwrap();
        beam.rotate_around_origin(ThreeVector::new(1.0, 0.0, 0.0), consts::PI).unwrap();
        assert!((beam.sample_to_source_direction() - ThreeVector::new(0.0, 0.0, -1.0)).length() < 1.0e-12);
        assert!((beam.polarization_normal() - ThreeVector::new(0.0, -1.0, 0.0)).length() < 1.0e-12);
    }

    #[test]
    fn similarity() {
        let a = PolychromaticBeam::default();
        let mut b = a.clone();
        b.set_polarization_fraction(0.6);
        assert!(a != b);
        assert!(a.is_similar_to(&b, 1.0e-6, 1.0e-6, 0.2));
        assert!(!a.is_similar_to(&b, 1.0e-6, 1.0e-6, 0.05));

        b.set_polarization_fraction(0.5);
        b.set_divergence(0.01);
        assert!(a.is_similar_to(&b, 1.0e-6, 1.0e-6, 1.0e-6));
        let tol = SimilarityTolerances::uniform(1.0e-6);
        assert!(!a.is_similar_to_with(&b, &tol));
        assert!(a.is_similar_to_with(&b, &tol.with_divergence(0.02)));
    }

    #[test]
    fn summary_has_no_wavelength() {
        let text = PolychromaticBeam::default().to_string();
        assert!(!text.contains("wavelength"));
        assert!(text.contains("polarization fraction: 0.5"));
        assert_eq!(text.lines().count(), 10);
    }
}
