//! The particle species carried by the beam

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use super::BeamError;

/// Radiation used to probe the sample. Names follow the NeXus `NXsource`
/// vocabulary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Probe {
    Xray,
    Electron,
    Neutron,
}

impl Default for Probe {
    fn default() -> Self {
        Probe::Xray
    }
}

impl Probe {
    /// The NeXus name of the probe.
    pub fn name(&self) -> &'static str {
        match self {
            Probe::Xray => "x-ray",
            Probe::Electron => "electron",
            Probe::Neutron => "neutron",
        }
    }

    /// Looks up a probe by its NeXus name. Matching is exact.
    pub fn from_name(name: &str) -> Result<Self, BeamError> {
        match name {
            "x-ray" => Ok(Probe::Xray),
            "electron" => Ok(Probe::Electron),
            "neutron" => Ok(Probe::Neutron),
            _ => Err(BeamError::InvalidArgument(format!("unknown probe '{}'", name))),
        }
    }

    /// Integer code of the probe, as stored by older experiment files.
    pub fn code(&self) -> i32 {
        match self {
            Probe::Xray => 1,
            Probe::Electron => 2,
            Probe::Neutron => 3,
        }
    }

    /// Decodes an integer probe code. Anything other than 1, 2 or 3
    /// is an invalid state.
    pub fn from_code(code: i32) -> Result<Self, BeamError> {
        match code {
            1 => Ok(Probe::Xray),
            2 => Ok(Probe::Electron),
            3 => Ok(Probe::Neutron),
            _ => Err(BeamError::InvalidState(format!("unknown probe type {}", code))),
        }
    }

    /// Rest energy of the probe particle, units of keV
    pub fn rest_energy(&self) -> f64 {
        match self {
            Probe::Xray => 0.0,
            Probe::Electron => ELECTRON_REST_ENERGY_KEV,
            Probe::Neutron => NEUTRON_REST_ENERGY_KEV,
        }
    }

    /// De Broglie wavelength (Å) of a probe particle with kinetic
    /// energy `energy` (keV).
    pub fn wavelength_from_energy(&self, energy: f64) -> f64 {
        let m = self.rest_energy();
        let pc = (energy * (energy + 2.0 * m)).sqrt();
        HC_KEV_ANGSTROM / pc
    }

    /// Kinetic energy (keV) of a probe particle with wavelength
    /// `wavelength` (Å).
    pub fn energy_from_wavelength(&self, wavelength: f64) -> f64 {
        let m = self.rest_energy();
        let pc = HC_KEV_ANGSTROM / wavelength;
        if m == 0.0 {
            pc
        } else {
            // sqrt(pc^2 + m^2) - m, without the cancellation
            pc * pc / ((pc * pc + m * m).sqrt() + m)
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Probe {
    type Err = BeamError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Probe::from_name(s)
    }
}
