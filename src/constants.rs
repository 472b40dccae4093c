//! Physical constants

/// Planck constant times the speed of light, units of keV Å
pub const HC_KEV_ANGSTROM: f64 = 12.398419843320026;
/// Electron rest energy, units of keV
pub const ELECTRON_REST_ENERGY_KEV: f64 = 510.99895000;
/// Neutron rest energy, units of keV
pub const NEUTRON_REST_ENERGY_KEV: f64 = 939565.42052;
/// Tolerance used by the equality operators on beams
pub const BEAM_EQUALITY_TOLERANCE: f64 = 1.0e-6;
