//! A model of the incident radiation beam of a diffraction experiment.
//!
//! The beam is described by its direction at the sample (pointing back
//! towards the source), its wavelength or lack thereof, its polarization
//! and its integrated intensity. Monochromatic beams may additionally
//! carry a scan-varying wave vector, for refinement of beam motion
//! during a rotation scan.
//!
//! Conventions: wavelengths in Å, wave vectors in Å^-1, angles in
//! radians, distances in mm.

pub mod constants;
pub mod geometry;
pub mod beam;
pub mod factory;
pub mod input;

pub use beam::*;
pub use geometry::{ThreeVector, angle_safe};
