//! The incident beam model
//!
//! A beam is either [`MonochromaticBeam`], which has a fixed wavelength
//! and wave vector `s0` (optionally varying across a scan), or
//! [`PolychromaticBeam`], which has neither. Both implement
//! [`BeamBase`], the operations that make sense for any beam.
//! [`Beam`] holds either variant; asking it for a wavelength-dependent
//! quantity when it holds a polychromatic beam is an error rather than
//! a default value.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::geometry::ThreeVector;

mod error;
pub use error::*;

mod probe;
pub use probe::*;

mod similarity;
pub use similarity::{SimilarityTolerances, DEFAULT_EXTENDED_TOLERANCE};

mod base;
pub use base::*;

mod monochromatic;
pub use monochromatic::*;

mod polychromatic;
pub use polychromatic::*;

mod builder;
pub use builder::*;

/// A beam of either kind
#[enum_dispatch(BeamBase)]
#[derive(Debug, Clone)]
pub enum Beam {
    Monochromatic(MonochromaticBeam),
    Polychromatic(PolychromaticBeam),
}

impl Default for Beam {
    fn default() -> Self {
        Beam::Monochromatic(MonochromaticBeam::default())
    }
}

impl Beam {
    pub fn kind(&self) -> BeamKind {
        match self {
            Beam::Monochromatic(_) => BeamKind::Monochromatic,
            Beam::Polychromatic(_) => BeamKind::Polychromatic,
        }
    }

    pub fn is_monochromatic(&self) -> bool {
        matches!(self, Beam::Monochromatic(_))
    }

    /// The monochromatic view of the beam, or an invalid-operation error
    /// if the beam is polychromatic.
    pub fn as_monochromatic(&self) -> Result<&MonochromaticBeam, BeamError> {
        match self {
            Beam::Monochromatic(beam) => Ok(beam),
            Beam::Polychromatic(_) => Err(BeamError::no_fixed_wavelength()),
        }
    }

    pub fn as_monochromatic_mut(&mut self) -> Result<&mut MonochromaticBeam, BeamError> {
        match self {
            Beam::Monochromatic(beam) => Ok(beam),
            Beam::Polychromatic(_) => Err(BeamError::no_fixed_wavelength()),
        }
    }

    fn as_scan_varying(&self) -> Result<&MonochromaticBeam, BeamError> {
        self.as_monochromatic().map_err(|_| BeamError::no_fixed_s0())
    }

    fn as_scan_varying_mut(&mut self) -> Result<&mut MonochromaticBeam, BeamError> {
        self.as_monochromatic_mut().map_err(|_| BeamError::no_fixed_s0())
    }

    pub fn wavelength(&self) -> Result<f64, BeamError> {
        Ok(self.as_monochromatic()?.wavelength())
    }

    pub fn set_wavelength(&mut self, wavelength: f64) -> Result<(), BeamError> {
        self.as_monochromatic_mut()?.set_wavelength(wavelength);
        Ok(())
    }

    pub fn s0(&self) -> Result<ThreeVector, BeamError> {
        self.as_scan_varying()?.s0()
    }

    pub fn set_s0(&mut self, s0: ThreeVector) -> Result<(), BeamError> {
        self.as_scan_varying_mut()?.set_s0(s0)
    }

    pub fn num_scan_points(&self) -> Result<usize, BeamError> {
        Ok(self.as_scan_varying()?.num_scan_points())
    }

    pub fn s0_at_scan_points(&self) -> Result<&[ThreeVector], BeamError> {
        Ok(self.as_scan_varying()?.s0_at_scan_points())
    }

    pub fn s0_at_scan_point(&self, index: usize) -> Result<ThreeVector, BeamError> {
        self.as_scan_varying()?.s0_at_scan_point(index)
    }

    pub fn set_s0_at_scan_points(&mut self, s0: &[ThreeVector]) -> Result<(), BeamError> {
        self.as_scan_varying_mut()?.set_s0_at_scan_points(s0);
        Ok(())
    }

    pub fn reset_scan_points(&mut self) -> Result<(), BeamError> {
        self.as_scan_varying_mut()?.reset_scan_points();
        Ok(())
    }

    /// Compares two beams of the same kind; beams of different kinds are
    /// never similar. `wavelength_tolerance` is ignored for polychromatic
    /// beams.
    pub fn is_similar_to(&self, other: &Beam, wavelength_tolerance: f64, direction_tolerance: f64, polarization_normal_tolerance: f64, polarization_fraction_tolerance: f64) -> bool {
        match (self, other) {
            (Beam::Monochromatic(a), Beam::Monochromatic(b)) => {
                a.is_similar_to(b, wavelength_tolerance, direction_tolerance, polarization_normal_tolerance, polarization_fraction_tolerance)
            },
            (Beam::Polychromatic(a), Beam::Polychromatic(b)) => {
                a.is_similar_to(b, direction_tolerance, polarization_normal_tolerance, polarization_fraction_tolerance)
            },
            _ => false,
        }
    }

    pub fn is_similar_to_with(&self, other: &Beam, tol: &SimilarityTolerances) -> bool {
        match (self, other) {
            (Beam::Monochromatic(a), Beam::Monochromatic(b)) => a.is_similar_to_with(b, tol),
            (Beam::Polychromatic(a), Beam::Polychromatic(b)) => a.is_similar_to_with(b, tol),
            _ => false,
        }
    }
}

impl PartialEq for Beam {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Beam::Monochromatic(a), Beam::Monochromatic(b)) => a == b,
            (Beam::Polychromatic(a), Beam::Polychromatic(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Beam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Beam::Monochromatic(beam) => fmt::Display::fmt(beam, f),
            Beam::Polychromatic(beam) => fmt::Display::fmt(beam, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use super::*;

    #[test]
    fn polychromatic_refuses_wavelength_operations() {
        let mut beam: Beam = PolychromaticBeam::new([0.0, 0.0, 1.0].into()).unwrap().into();
        let before = beam.clone();
        let s0: ThreeVector = [0.0, 0.0, 1.0].into();

        let kinds = vec![
            beam.wavelength().map(|_| ()).unwrap_err().kind(),
            beam.set_wavelength(1.0).unwrap_err().kind(),
            beam.s0().map(|_| ()).unwrap_err().kind(),
            beam.set_s0(s0).unwrap_err().kind(),
            beam.num_scan_points().map(|_| ()).unwrap_err().kind(),
            beam.s0_at_scan_points().map(|_| ()).unwrap_err().kind(),
            beam.s0_at_scan_point(0).map(|_| ()).unwrap_err().kind(),
            beam.set_s0_at_scan_points(&[s0]).unwrap_err().kind(),
            beam.reset_scan_points().unwrap_err().kind(),
            beam.as_monochromatic().map(|_| ()).unwrap_err().kind(),
        ];
        assert!(kinds.iter().all(|k| *k == BeamErrorKind::InvalidOperation));
        assert_eq!(beam, before);
        assert_eq!(beam.divergence(), 0.0);
    }

    #[test]
    fn dispatch_to_shared_operations() {
        let mut beams: Vec<Beam> = vec![
            MonochromaticBeam::from_s0([0.0, 0.0, 2.0].into()).unwrap().into(),
            PolychromaticBeam::default().into(),
        ];
        for beam in beams.iter_mut() {
            beam.set_flux(10.0);
            beam.rotate_around_origin([1.0, 0.0, 0.0].into(), consts::PI).unwrap();
        }
        assert_eq!(beams[0].flux(), 10.0);
        assert_eq!(beams[1].flux(), 10.0);
        assert!((beams[0].sample_to_source_direction() - ThreeVector::new(0.0, 0.0, 1.0)).length() < 1.0e-12);
        assert!((beams[1].sample_to_source_direction() - ThreeVector::new(0.0, 0.0, -1.0)).length() < 1.0e-12);
        assert_eq!(beams[0].probe_name(), "x-ray");
    }

    #[test]
    fn monochromatic_view() {
        let mut beam = Beam::default();
        assert!(beam.is_monochromatic());
        assert_eq!(beam.kind(), BeamKind::Monochromatic);
        beam.set_s0([0.0, 0.0, 2.0].into()).unwrap();
        assert_eq!(beam.wavelength().unwrap(), 0.5);
        beam.set_s0_at_scan_points(&[[0.0, 0.0, 2.0].into()]).unwrap();
        assert_eq!(beam.num_scan_points().unwrap(), 1);
        assert_eq!(beam.as_monochromatic().unwrap().num_scan_points(), 1);
        beam.reset_scan_points().unwrap();
        assert_eq!(beam.num_scan_points().unwrap(), 0);
        let err = beam.s0_at_scan_point(0).unwrap_err();
        assert_eq!(err.kind(), BeamErrorKind::OutOfRange);
    }

    #[test]
    fn different_kinds_never_match() {
        let mono: Beam = MonochromaticBeam::default().into();
        let poly: Beam = PolychromaticBeam::default().into();
        assert!(mono != poly);
        assert!(!mono.is_similar_to(&poly, 1.0, 1.0, 1.0, 1.0));
        assert!(!poly.is_similar_to_with(&mono, &SimilarityTolerances::uniform(1.0)));
        assert!(poly.is_similar_to(&poly.clone(), 0.0, 0.0, 0.0, 0.0));
    }
}
