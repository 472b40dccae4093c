//! Attributes and operations shared by every kind of beam

use enum_dispatch::enum_dispatch;
use tracing::trace;

use crate::geometry::{ThreeVector, angle_safe};
use super::{BeamError, Probe, SimilarityTolerances};
use super::similarity::within;

/// The attribute record common to monochromatic and polychromatic beams.
///
/// `direction` always has unit length and points from the sample
/// towards the source. The polarization normal is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamProperties {
    direction: ThreeVector,
    divergence: f64,
    sigma_divergence: f64,
    polarization_normal: ThreeVector,
    polarization_fraction: f64,
    flux: f64,
    transmission: f64,
    probe: Probe,
    sample_to_source_distance: f64,
}

impl BeamProperties {
    /// Default attributes of a beam travelling along -z, with the given
    /// polarization fraction.
    pub(crate) fn with_polarization_fraction(polarization_fraction: f64) -> Self {
        Self {
            direction: ThreeVector::new(0.0, 0.0, 1.0),
            divergence: 0.0,
            sigma_divergence: 0.0,
            polarization_normal: ThreeVector::new(0.0, 1.0, 0.0),
            polarization_fraction,
            flux: 0.0,
            transmission: 1.0,
            probe: Probe::Xray,
            sample_to_source_distance: 0.0,
        }
    }

    /// Checks that `v` can be used as a direction and returns it
    /// normalized.
    pub(crate) fn unit(v: ThreeVector, what: &str) -> Result<ThreeVector, BeamError> {
        v.try_normalize()
            .ok_or_else(|| BeamError::InvalidArgument(format!("{} must have non-zero length, got [{}]", what, v)))
    }

    pub(crate) fn set_unit_direction(&mut self, direction: ThreeVector) {
        self.direction = direction;
    }

    /// Equality within `eps`, comparing the direction and polarization
    /// normal by the angle between them.
    pub(crate) fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        angle_safe(self.direction, other.direction).abs() <= eps
            && within(self.divergence, other.divergence, eps)
            && within(self.sigma_divergence, other.sigma_divergence, eps)
            && angle_safe(self.polarization_normal, other.polarization_normal).abs() <= eps
            && within(self.polarization_fraction, other.polarization_fraction, eps)
            && within(self.flux, other.flux, eps)
            && within(self.transmission, other.transmission, eps)
            && within(self.sample_to_source_distance, other.sample_to_source_distance, eps)
            && self.probe == other.probe
    }

    /// Checks the direction, polarization and probe only.
    pub(crate) fn is_similar_to(&self, other: &Self, direction_tolerance: f64, polarization_normal_tolerance: f64, polarization_fraction_tolerance: f64) -> bool {
        angle_safe(self.direction, other.direction).abs() <= direction_tolerance
            && angle_safe(self.polarization_normal, other.polarization_normal).abs() <= polarization_normal_tolerance
            && within(self.polarization_fraction, other.polarization_fraction, polarization_fraction_tolerance)
            && self.probe == other.probe
    }

    /// Checks every attribute against its own tolerance.
    pub(crate) fn is_similar_to_with(&self, other: &Self, tol: &SimilarityTolerances) -> bool {
        self.is_similar_to(other, tol.direction, tol.polarization_normal, tol.polarization_fraction)
            && within(self.divergence, other.divergence, tol.divergence)
            && within(self.sigma_divergence, other.sigma_divergence, tol.sigma_divergence)
            && within(self.flux, other.flux, tol.flux)
            && within(self.transmission, other.transmission, tol.transmission)
            && within(self.sample_to_source_distance, other.sample_to_source_distance, tol.sample_to_source_distance)
    }
}

/// Operations every beam supports, whether or not it has a fixed
/// wavelength.
#[enum_dispatch]
pub trait BeamBase {
    fn properties(&self) -> &BeamProperties;

    fn properties_mut(&mut self) -> &mut BeamProperties;

    /// Unit vector pointing from the sample towards the source
    fn sample_to_source_direction(&self) -> ThreeVector {
        self.properties().direction
    }

    /// Direction of the incident ray, i.e. minus the sample-to-source direction
    fn unit_s0(&self) -> ThreeVector {
        -self.properties().direction
    }

    /// Distance from the sample to the source, units of mm
    fn sample_to_source_distance(&self) -> f64 {
        self.properties().sample_to_source_distance
    }

    /// Beam divergence, units of radians
    fn divergence(&self) -> f64 {
        self.properties().divergence
    }

    /// Standard deviation of the beam divergence, units of radians
    fn sigma_divergence(&self) -> f64 {
        self.properties().sigma_divergence
    }

    fn polarization_normal(&self) -> ThreeVector {
        self.properties().polarization_normal
    }

    fn polarization_fraction(&self) -> f64 {
        self.properties().polarization_fraction
    }

    fn flux(&self) -> f64 {
        self.properties().flux
    }

    fn transmission(&self) -> f64 {
        self.properties().transmission
    }

    fn probe(&self) -> Probe {
        self.properties().probe
    }

    fn probe_name(&self) -> &'static str {
        self.properties().probe.name()
    }

    /// Sets the sample-to-source direction, which is renormalized.
    /// Fails if `direction` has zero length.
    fn set_direction(&mut self, direction: ThreeVector) -> Result<(), BeamError> {
        let direction = BeamProperties::unit(direction, "direction")?;
        self.properties_mut().direction = direction;
        Ok(())
    }

    /// Sets the direction of the incident ray. Only the direction of
    /// `unit_s0` is used, its length is discarded.
    fn set_unit_s0(&mut self, unit_s0: ThreeVector) -> Result<(), BeamError> {
        let unit_s0 = BeamProperties::unit(unit_s0, "unit s0")?;
        self.properties_mut().direction = -unit_s0;
        Ok(())
    }

    fn set_divergence(&mut self, divergence: f64) {
        self.properties_mut().divergence = divergence;
    }

    fn set_sigma_divergence(&mut self, sigma_divergence: f64) {
        self.properties_mut().sigma_divergence = sigma_divergence;
    }

    fn set_polarization_normal(&mut self, polarization_normal: ThreeVector) {
        self.properties_mut().polarization_normal = polarization_normal;
    }

    fn set_polarization_fraction(&mut self, polarization_fraction: f64) {
        self.properties_mut().polarization_fraction = polarization_fraction;
    }

    fn set_flux(&mut self, flux: f64) {
        self.properties_mut().flux = flux;
    }

    fn set_transmission(&mut self, transmission: f64) {
        self.properties_mut().transmission = transmission;
    }

    fn set_probe(&mut self, probe: Probe) {
        self.properties_mut().probe = probe;
    }

    /// Sets the sample-to-source distance (mm), which may not be negative.
    fn set_sample_to_source_distance(&mut self, sample_to_source_distance: f64) -> Result<(), BeamError> {
        if !(sample_to_source_distance >= 0.0) {
            return Err(BeamError::InvalidArgument(format!(
                "sample to source distance must be non-negative, got {}", sample_to_source_distance
            )));
        }
        self.properties_mut().sample_to_source_distance = sample_to_source_distance;
        Ok(())
    }

    /// Rotates the direction and polarization normal by `angle` (radians)
    /// around `axis`, which passes through the origin. Scalar attributes
    /// and any scan-point s0 are left alone.
    fn rotate_around_origin(&mut self, axis: ThreeVector, angle: f64) -> Result<(), BeamError> {
        let axis = BeamProperties::unit(axis, "rotation axis")?;
        trace!(axis = %axis, angle, "rotating beam around origin");
        let props = self.properties_mut();
        props.direction = props.direction.rotate_around(axis, angle);
        props.polarization_normal = props.polarization_normal.rotate_around(axis, angle);
        Ok(())
    }
}
