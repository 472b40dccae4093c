//! Shorthand constructors for the beams image-format readers need

use crate::beam::*;
use crate::geometry::ThreeVector;

/// A monochromatic X-ray beam travelling along -z, i.e. with the
/// source on the +z axis.
pub fn simple(wavelength: f64) -> MonochromaticBeam {
    let mut beam = MonochromaticBeam::default();
    beam.set_wavelength(wavelength);
    beam
}

/// A monochromatic X-ray beam with the given sample-to-source direction.
pub fn simple_directional(sample_to_source: ThreeVector, wavelength: f64) -> Result<MonochromaticBeam, BeamError> {
    MonochromaticBeam::new(sample_to_source, wavelength)
}

/// A monochromatic beam with specified polarization.
pub fn complex(sample_to_source: ThreeVector, polarization_fraction: f64, polarization_plane_normal: ThreeVector, wavelength: f64) -> Result<MonochromaticBeam, BeamError> {
    BeamBuilder::new()
        .with_direction(sample_to_source)
        .with_wavelength(wavelength)
        .with_polarization_normal(polarization_plane_normal)
        .with_polarization_fraction(polarization_fraction)
        .build_monochromatic()
}

/// An unpolarized polychromatic beam at the given distance (mm) from
/// its source.
pub fn polychromatic(sample_to_source: ThreeVector, sample_to_source_distance: f64) -> Result<PolychromaticBeam, BeamError> {
    BeamBuilder::new()
        .with_direction(sample_to_source)
        .with_sample_to_source_distance(sample_to_source_distance)
        .build_polychromatic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makers() {
        let beam = simple(1.2);
        assert_eq!(beam.wavelength(), 1.2);
        assert_eq!(beam.sample_to_source_direction(), ThreeVector::new(0.0, 0.0, 1.0));
        assert!((beam.s0().unwrap() - ThreeVector::new(0.0, 0.0, -1.0 / 1.2)).length() < 1.0e-15);

        let beam = simple_directional([0.0, 0.0, -3.0].into(), 1.0).unwrap();
        assert_eq!(beam.unit_s0(), ThreeVector::new(0.0, 0.0, 1.0));

        let beam = complex([0.0, 0.0, 1.0].into(), 0.9, [1.0, 0.0, 0.0].into(), 0.8).unwrap();
        assert_eq!(beam.polarization_fraction(), 0.9);
        assert_eq!(beam.polarization_normal(), ThreeVector::new(1.0, 0.0, 0.0));

        // same polarization fraction as every other polychromatic beam
        let beam = polychromatic([0.0, 0.0, 1.0].into(), 1000.0).unwrap();
        assert_eq!(beam.polarization_fraction(), 0.5);
        assert_eq!(beam.sample_to_source_distance(), 1000.0);
        assert!(polychromatic([0.0, 0.0, 1.0].into(), -1.0).is_err());
        assert!(simple_directional(ThreeVector::zero(), 1.0).is_err());
    }
}
