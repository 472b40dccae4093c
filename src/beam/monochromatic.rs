//! A beam with a single, fixed wavelength

use std::fmt;

use crate::constants::*;
use crate::geometry::{ThreeVector, angle_safe};
use super::{BeamBase, BeamError, BeamProperties, SimilarityTolerances};
use super::similarity::within;

/// A monochromatic beam, described either by its direction and
/// wavelength or, equivalently, by the wave vector
/// `s0 = -direction / wavelength`.
///
/// The beam may also carry a scan-varying trajectory of s0, one per
/// scan point.
#[derive(Debug, Clone)]
pub struct MonochromaticBeam {
    properties: BeamProperties,
    wavelength: f64,
    s0_at_scan_points: Vec<ThreeVector>,
}

impl Default for MonochromaticBeam {
    fn default() -> Self {
        Self {
            properties: BeamProperties::with_polarization_fraction(0.999),
            wavelength: 0.0,
            s0_at_scan_points: vec![],
        }
    }
}

impl BeamBase for MonochromaticBeam {
    fn properties(&self) -> &BeamProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut BeamProperties {
        &mut self.properties
    }
}

impl MonochromaticBeam {
    /// Creates a new beam with sample-to-source `direction` (renormalized)
    /// and `wavelength` (Å). Other attributes take their defaults.
    pub fn new(direction: ThreeVector, wavelength: f64) -> Result<Self, BeamError> {
        let mut beam = Self::default();
        beam.set_direction(direction)?;
        beam.wavelength = wavelength;
        Ok(beam)
    }

    /// Creates a new beam from the wave vector `s0` (Å^-1).
    pub fn from_s0(s0: ThreeVector) -> Result<Self, BeamError> {
        let mut beam = Self::default();
        beam.set_s0(s0)?;
        Ok(beam)
    }

    /// Wavelength, units of Å
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn set_wavelength(&mut self, wavelength: f64) {
        self.wavelength = wavelength;
    }

    /// Wave vector of the incident beam, units of Å^-1.
    /// Fails if the wavelength is zero.
    pub fn s0(&self) -> Result<ThreeVector, BeamError> {
        if self.wavelength == 0.0 {
            return Err(BeamError::invalid_state("s0 is undefined for a beam with zero wavelength"));
        }
        Ok(-self.sample_to_source_direction() / self.wavelength)
    }

    /// Sets both the direction and the wavelength from the wave vector `s0`.
    pub fn set_s0(&mut self, s0: ThreeVector) -> Result<(), BeamError> {
        let unit = BeamProperties::unit(s0, "s0")?;
        self.properties.set_unit_direction(-unit);
        self.wavelength = 1.0 / s0.length();
        Ok(())
    }

    /// Kinetic energy of the probe particles, units of keV.
    pub fn energy(&self) -> Result<f64, BeamError> {
        if self.wavelength == 0.0 {
            return Err(BeamError::invalid_state("energy is undefined for a beam with zero wavelength"));
        }
        Ok(self.probe().energy_from_wavelength(self.wavelength))
    }

    /// Sets the wavelength to that of probe particles with kinetic energy
    /// `energy` (keV). The probe should be set first.
    pub fn set_energy(&mut self, energy: f64) -> Result<(), BeamError> {
        if !(energy > 0.0) || !energy.is_finite() {
            return Err(BeamError::InvalidArgument(format!("energy must be positive and finite, got {}", energy)));
        }
        self.wavelength = self.probe().wavelength_from_energy(energy);
        Ok(())
    }

    pub fn num_scan_points(&self) -> usize {
        self.s0_at_scan_points.len()
    }

    pub fn s0_at_scan_points(&self) -> &[ThreeVector] {
        &self.s0_at_scan_points
    }

    pub fn s0_at_scan_point(&self, index: usize) -> Result<ThreeVector, BeamError> {
        self.s0_at_scan_points
            .get(index)
            .copied()
            .ok_or(BeamError::OutOfRange { index, len: self.s0_at_scan_points.len() })
    }

    /// Replaces the scan-varying trajectory with a copy of `s0`.
    pub fn set_s0_at_scan_points(&mut self, s0: &[ThreeVector]) {
        self.s0_at_scan_points = s0.to_vec();
    }

    pub fn reset_scan_points(&mut self) {
        self.s0_at_scan_points.clear();
    }

    /// Do the trajectories have the same length, with each pair of s0
    /// pointing in the same direction (within `direction_tolerance`) and
    /// implying the same wavelength (within `wavelength_tolerance`)?
    fn scan_points_similar(&self, other: &Self, wavelength_tolerance: f64, direction_tolerance: f64) -> bool {
        if self.num_scan_points() != other.num_scan_points() {
            return false;
        }
        self.s0_at_scan_points.iter()
            .zip(other.s0_at_scan_points.iter())
            .all(|(&a, &b)| {
                a == b || (
                    angle_safe(a, b).abs() <= direction_tolerance
                    && within(1.0 / a.length(), 1.0 / b.length(), wavelength_tolerance)
                )
            })
    }

    /// Compares the wavelength, direction, polarization and probe of two
    /// beams, as well as their scan-varying s0.
    pub fn is_similar_to(&self, other: &Self, wavelength_tolerance: f64, direction_tolerance: f64, polarization_normal_tolerance: f64, polarization_fraction_tolerance: f64) -> bool {
        self.scan_points_similar(other, wavelength_tolerance, direction_tolerance)
            && within(self.wavelength, other.wavelength, wavelength_tolerance)
            && self.properties.is_similar_to(&other.properties, direction_tolerance, polarization_normal_tolerance, polarization_fraction_tolerance)
    }

    /// As [`is_similar_to`](Self::is_similar_to), but also compares the
    /// divergence, flux, transmission and sample-to-source distance.
    pub fn is_similar_to_with(&self, other: &Self, tol: &SimilarityTolerances) -> bool {
        self.scan_points_similar(other, tol.wavelength, tol.direction)
            && within(self.wavelength, other.wavelength, tol.wavelength)
            && self.properties.is_similar_to_with(&other.properties, tol)
    }
}

impl PartialEq for MonochromaticBeam {
    fn eq(&self, other: &Self) -> bool {
        let eps = BEAM_EQUALITY_TOLERANCE;
        self.num_scan_points() == other.num_scan_points()
            && self.s0_at_scan_points.iter()
                .zip(other.s0_at_scan_points.iter())
                .all(|(&a, &b)| a.l1_distance(b) <= eps)
            && within(self.wavelength, other.wavelength, eps)
            && self.properties.approx_eq(&other.properties, eps)
    }
}

impl fmt::Display for MonochromaticBeam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Beam:")?;
        writeln!(f, "    probe: {}", self.probe_name())?;
        writeln!(f, "    wavelength: {}", self.wavelength)?;
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
