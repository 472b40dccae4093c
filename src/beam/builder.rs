use std::str::FromStr;

use crate::geometry::ThreeVector;
use super::*;

/// Which variant of beam to build
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BeamKind {
    Monochromatic,
    Polychromatic,
}

impl FromStr for BeamKind {
    type Err = BeamError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monochromatic" | "mono" => Ok(BeamKind::Monochromatic),
            "polychromatic" | "poly" => Ok(BeamKind::Polychromatic),
            _ => Err(BeamError::InvalidArgument(format!("unknown beam type '{}'", s))),
        }
    }
}

/// How the wavelength of a monochromatic beam is specified
#[derive(Debug, Copy, Clone, PartialEq)]
enum Spectrum {
    Unset,
    Wavelength(f64),
    Energy(f64),
    S0(ThreeVector),
}

/// Collects the attributes of a beam, any of which may be left at its
/// default, and validates them in one go.
///
/// ```
/// let beam = BeamBuilder::new()
///     .with_direction([0.0, 0.0, 1.0].into())
///     .with_wavelength(0.9795)
///     .with_flux(1.0e12)
///     .build_monochromatic()?;
/// ```
#[derive(Debug, Clone)]
pub struct BeamBuilder {
    direction: ThreeVector,
    spectrum: Spectrum,
    divergence: f64,
    sigma_divergence: f64,
    polarization_normal: ThreeVector,
    polarization_fraction: Option<f64>,
    flux: f64,
    transmission: f64,
    probe: Probe,
    sample_to_source_distance: f64,
    s0_at_scan_points: Vec<ThreeVector>,
}

impl Default for BeamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BeamBuilder {
    pub fn new() -> Self {
        BeamBuilder {
            direction: ThreeVector::new(0.0, 0.0, 1.0),
            spectrum: Spectrum::Unset,
            divergence: 0.0,
            sigma_divergence: 0.0,
            polarization_normal: ThreeVector::new(0.0, 1.0, 0.0),
            polarization_fraction: None,
            flux: 0.0,
            transmission: 1.0,
            probe: Probe::Xray,
            sample_to_source_distance: 0.0,
            s0_at_scan_points: vec![],
        }
    }

    pub fn with_direction(self, direction: ThreeVector) -> Self {
        BeamBuilder { direction, ..self }
    }

    pub fn with_wavelength(self, wavelength: f64) -> Self {
        BeamBuilder { spectrum: Spectrum::Wavelength(wavelength), ..self }
    }

    /// Kinetic energy of the probe particles in keV, converted to a
    /// wavelength when the beam is built.
    pub fn with_energy(self, energy: f64) -> Self {
        BeamBuilder { spectrum: Spectrum::Energy(energy), ..self }
    }

    /// Sets both direction and wavelength; takes precedence over
    /// `with_direction`.
    pub fn with_s0(self, s0: ThreeVector) -> Self {
        BeamBuilder { spectrum: Spectrum::S0(s0), ..self }
    }

    pub fn with_divergence(self, divergence: f64) -> Self {
        BeamBuilder { divergence, ..self }
    }

    pub fn with_sigma_divergence(self, sigma_divergence: f64) -> Self {
        BeamBuilder { sigma_divergence, ..self }
    }

    pub fn with_polarization_normal(self, polarization_normal: ThreeVector) -> Self {
        BeamBuilder { polarization_normal, ..self }
    }

    /// If not given, 0.999 for monochromatic and 0.5 for polychromatic beams.
    pub fn with_polarization_fraction(self, polarization_fraction: f64) -> Self {
        BeamBuilder { polarization_fraction: Some(polarization_fraction), ..self }
    }

    pub fn with_flux(self, flux: f64) -> Self {
        BeamBuilder { flux, ..self }
    }

    pub fn with_transmission(self, transmission: f64) -> Self {
        BeamBuilder { transmission, ..self }
    }

    pub fn with_probe(self, probe: Probe) -> Self {
        BeamBuilder { probe, ..self }
    }

    pub fn with_sample_to_source_distance(self, sample_to_source_distance: f64) -> Self {
        BeamBuilder { sample_to_source_distance, ..self }
    }

    pub fn with_s0_at_scan_points(self, s0: &[ThreeVector]) -> Self {
        BeamBuilder { s0_at_scan_points: s0.to_vec(), ..self }
    }

    fn apply<B: BeamBase>(&self, beam: &mut B) -> Result<(), BeamError> {
        beam.set_direction(self.direction)?;
        beam.set_sample_to_source_distance(self.sample_to_source_distance)?;
        beam.set_divergence(self.divergence);
        beam.set_sigma_divergence(self.sigma_divergence);
        beam.set_polarization_normal(self.polarization_normal);
        if let Some(fraction) = self.polarization_fraction {
            beam.set_polarization_fraction(fraction);
        }
        beam.set_flux(self.flux);
        beam.set_transmission(self.transmission);
        beam.set_probe(self.probe);
        Ok(())
    }

    pub fn build_monochromatic(&self) -> Result<MonochromaticBeam, BeamError> {
        let mut beam = MonochromaticBeam::default();
        self.apply(&mut beam)?;
        match self.spectrum {
            Spectrum::Unset => {},
            Spectrum::Wavelength(wavelength) => beam.set_wavelength(wavelength),
            Spectrum::Energy(energy) => beam.set_energy(energy)?,
            Spectrum::S0(s0) => beam.set_s0(s0)?,
        }
        beam.set_s0_at_scan_points(&self.s0_at_scan_points);
        Ok(beam)
    }

    /// Fails if a wavelength, energy, s0 or scan-varying s0 has been given.
    pub fn build_polychromatic(&self) -> Result<PolychromaticBeam, BeamError> {
        match self.spectrum {
            Spectrum::Unset => {},
            Spectrum::Wavelength(_) | Spectrum::Energy(_) => return Err(BeamError::no_fixed_wavelength()),
            Spectrum::S0(_) => return Err(BeamError::no_fixed_s0()),
        }
        if !self.s0_at_scan_points.is_empty() {
            return Err(BeamError::no_fixed_s0());
        }
        let mut beam = PolychromaticBeam::default();
        self.apply(&mut beam)?;
        Ok(beam)
    }

    pub fn build(&self, kind: BeamKind) -> Result<Beam, BeamError> {
        match kind {
            BeamKind::Monochromatic => self.build_monochromatic().map(Beam::from),
            BeamKind::Polychromatic => self.build_polychromatic().map(Beam::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn defaults_match_constructors() {
        let beam = BeamBuilder::new().build_monochromatic().unwrap();
        assert_eq!(beam, MonochromaticBeam::default());
        assert_eq!(beam.polarization_fraction(), 0.999);

        let beam = BeamBuilder::new().build_polychromatic().unwrap();
        assert_eq!(beam, PolychromaticBeam::default());
        assert_eq!(beam.polarization_fraction(), 0.5);

        let beam = BeamBuilder::new()
            .with_direction([1.0, 0.0, 0.0].into())
            .with_wavelength(1.5)
            .build_monochromatic()
            .unwrap();
        assert_eq!(beam, MonochromaticBeam::new([1.0, 0.0, 0.0].into(), 1.5).unwrap());
    }

    #[test]
    fn full_parameter_list() {
        let beam = BeamBuilder::new()
            .with_direction([0.0, 0.0, 2.0].into())
            .with_wavelength(0.9795)
            .with_divergence(1.0e-4)
            .with_sigma_divergence(2.0e-5)
            .with_polarization_normal([1.0, 0.0, 0.0].into())
            .with_polarization_fraction(0.95)
            .with_flux(1.0e12)
            .with_transmission(0.5)
            .with_probe(Probe::Electron)
            .with_sample_to_source_distance(3.0e4)
            .build_monochromatic()
            .unwrap();
        assert_eq!(beam.sample_to_source_direction(), ThreeVector::new(0.0, 0.0, 1.0));
        assert_eq!(beam.wavelength(), 0.9795);
        assert_eq!(beam.divergence(), 1.0e-4);
        assert_eq!(beam.sigma_divergence(), 2.0e-5);
        assert_eq!(beam.polarization_normal(), ThreeVector::new(1.0, 0.0, 0.0));
        assert_eq!(beam.polarization_fraction(), 0.95);
        assert_eq!(beam.flux(), 1.0e12);
        assert_eq!(beam.transmission(), 0.5);
        assert_eq!(beam.probe(), Probe::Electron);
        assert_eq!(beam.sample_to_source_distance(), 3.0e4);
    }

    #[test]
    fn s0_overrides_direction() {
        let beam = BeamBuilder::new()
            .with_direction([1.0, 0.0, 0.0].into())
            .with_s0([0.0, 0.0, -4.0].into())
            .build_monochromatic()
            .unwrap();
        assert_eq!(beam.sample_to_source_direction(), ThreeVector::new(0.0, 0.0, 1.0));
        assert_eq!(beam.wavelength(), 0.25);
    }

    #[test]
    fn energy_uses_probe() {
        let beam = BeamBuilder::new()
            .with_probe(Probe::Electron)
            .with_energy(300.0)
            .build_monochromatic()
            .unwrap();
        assert_abs_diff_eq!(beam.wavelength(), 0.019687, epsilon = 1.0e-5);
    }

    #[test]
    fn invalid_inputs() {
        let err = BeamBuilder::new()
            .with_direction(ThreeVector::zero())
            .build_monochromatic()
            .unwrap_err();
        assert_eq!(err.kind(), BeamErrorKind::InvalidArgument);

        let err = BeamBuilder::new()
            .with_sample_to_source_distance(-1.0)
            .build_polychromatic()
            .unwrap_err();
        assert_eq!(err.kind(), BeamErrorKind::InvalidArgument);

        let err = BeamBuilder::new()
            .with_wavelength(1.0)
            .build_polychromatic()
            .unwrap_err();
        assert_eq!(err.kind(), BeamErrorKind::InvalidOperation);

        let err = BeamBuilder::new()
            .with_s0_at_scan_points(&[[0.0, 0.0, 1.0].into()])
            .build(BeamKind::Polychromatic)
            .unwrap_err();
        assert_eq!(err.kind(), BeamErrorKind::InvalidOperation);

        assert!("white".parse::<BeamKind>().is_err());
        assert_eq!("polychromatic".parse::<BeamKind>().unwrap(), BeamKind::Polychromatic);
    }
}
