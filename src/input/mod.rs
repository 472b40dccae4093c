//! Parse beam definitions from a configuration file

use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;
use tracing::{debug, warn};

use crate::beam::*;
use crate::constants::*;
use crate::geometry::ThreeVector;

mod error;
mod types;

pub use error::*;
pub use types::*;

/// Represents the input configuration, which defines values for the
/// beam attributes, and any named constants used to evaluate them.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InputError::file(&format!("{}: {}", path.display(), e)))?;
        Self::from_string(&contents)
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|e| InputError::file(&e.to_string()))?;
        let input = input.into_iter()
            .next()
            .ok_or_else(|| InputError::file("document is empty"))?;

        Ok(Config {
            input,
            ctx: Self::default_context()?,
        })
    }

    /// Units are chosen so that wavelengths are in Å, energies in keV,
    /// angles in radians and distances in mm.
    fn default_context() -> Result<HashMapContext, InputError> {
        use helper::context_function;

        let mut ctx = context_map! {
            "pi" => std::f64::consts::PI,
            "degree" => std::f64::consts::PI / 180.0,
            "mrad" => 1.0e-3,
            "urad" => 1.0e-6,
            "angstrom" => 1.0,
            "nm" => 10.0,
            "pm" => 1.0e-2,
            "eV" => 1.0e-3,
            "keV" => 1.0,
            "MeV" => 1.0e3,
            "um" => 1.0e-3,
            "mm" => 1.0,
            "m" => 1.0e3,
            "hc" => HC_KEV_ANGSTROM,
        }.map_err(|e| InputError::file(&e.to_string()))?;

        context_function!(ctx, "sqrt", f64::sqrt)?;
        context_function!(ctx, "sin",  f64::sin)?;
        context_function!(ctx, "cos",  f64::cos)?;
        context_function!(ctx, "tan",  f64::tan)?;
        context_function!(ctx, "asin", f64::asin)?;
        context_function!(ctx, "acos", f64::acos)?;
        context_function!(ctx, "atan", f64::atan)?;
        context_function!(ctx, "exp",  f64::exp)?;
        context_function!(ctx, "ln",   f64::ln)?;

        Ok(ctx)
    }

    /// Loads and evaluates the named constants in the specified
    /// `section`, so they can be used in later expressions.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        let entries = match &self.input[section] {
            Yaml::BadValue => return Ok(self),
            Yaml::Hash(hash) => hash.clone(),
            _ => return Err(InputError::conversion(section)),
        };

        for (a, b) in entries.iter() {
            let key = a.as_str()
                .ok_or_else(|| InputError::conversion(section))?;
            let path = format!("{}:{}", section, key);
            // constants may refer to those defined before them
            let value = f64::from_yaml(b, &self.ctx)
                .ok_or_else(|| InputError::conversion(&path))?;
            self.ctx.set_value(key.to_owned(), Value::from(value))
                .map_err(|_| InputError::conversion(&path))?;
        }

        Ok(self)
    }

    fn locate(&self, path: &str) -> Result<&Yaml, InputError> {
        path.split(':')
            .try_fold(&self.input, |y, s| {
                if y[s].is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(&y[s])
                }
            })
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let arg = self.locate(path)?;
        T::from_yaml(arg, &self.ctx)
            .ok_or_else(|| InputError::conversion(path))
    }

    /// Like `Config::read`, but returns `None` if the key is absent.
    /// A key that is present but cannot be converted is still an error.
    pub fn read_optional<T, S>(&self, path: S) -> Result<Option<T>, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        match self.read(path) {
            Ok(value) => Ok(Some(value)),
            Err(InputError::Location {..}) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Evaluates a string using the constants loaded so far.
    pub fn evaluate<S: AsRef<str>>(&self, arg: S) -> Option<f64> {
        eval_number_with_context(arg.as_ref(), &self.ctx).ok()
    }

    /// Builds a beam from the specified `section`. Keys that are absent
    /// take their default values; see [`BeamBuilder`].
    pub fn beam<S: AsRef<str>>(&self, section: S) -> Result<Beam, InputError> {
        let section = section.as_ref();
        self.locate(section)?;
        let key = |k: &str| format!("{}:{}", section, k);

        let kind = match self.read_optional::<String, _>(key("type"))? {
            Some(s) => s.parse::<BeamKind>().map_err(|e| InputError::beam(&key("type"), e))?,
            None => BeamKind::Monochromatic,
        };

        let mut builder = BeamBuilder::new();

        if let Some(name) = self.read_optional::<String, _>(key("probe"))? {
            let probe = name.parse::<Probe>().map_err(|e| InputError::beam(&key("probe"), e))?;
            builder = builder.with_probe(probe);
        }

        if let Some(direction) = self.read_optional(key("direction"))? {
            builder = builder.with_direction(direction);
        }

        let wavelength: Option<f64> = self.read_optional(key("wavelength"))?;
        let energy: Option<f64> = self.read_optional(key("energy"))?;
        let s0: Option<ThreeVector> = self.read_optional(key("s0"))?;
        builder = match (wavelength, energy, s0) {
            (None, None, None) => builder,
            (Some(wavelength), None, None) => builder.with_wavelength(wavelength),
            (None, Some(energy), None) => builder.with_energy(energy),
            (None, None, Some(s0)) => builder.with_s0(s0),
            _ => {
                let err = BeamError::invalid_argument("only one of 'wavelength', 'energy' and 's0' may be given");
                return Err(InputError::beam(section, err));
            }
        };

        if let Some(divergence) = self.read_optional(key("divergence"))? {
            builder = builder.with_divergence(divergence);
        }

        if let Some(sigma_divergence) = self.read_optional(key("sigma_divergence"))? {
            builder = builder.with_sigma_divergence(sigma_divergence);
        }

        if let Some(normal) = self.read_optional(key("polarization_normal"))? {
            builder = builder.with_polarization_normal(normal);
        }

        if let Some(fraction) = self.read_optional::<f64, _>(key("polarization_fraction"))? {
            if !(0.0..=1.0).contains(&fraction) {
                warn!(fraction, "polarization fraction lies outside [0, 1]");
            }
            builder = builder.with_polarization_fraction(fraction);
        }

        if let Some(flux) = self.read_optional::<f64, _>(key("flux"))? {
            if flux < 0.0 {
                warn!(flux, "beam flux is negative");
            }
            builder = builder.with_flux(flux);
        }

        if let Some(transmission) = self.read_optional::<f64, _>(key("transmission"))? {
            if !(0.0..=1.0).contains(&transmission) {
                warn!(transmission, "transmission lies outside [0, 1]");
            }
            builder = builder.with_transmission(transmission);
        }

        if let Some(distance) = self.read_optional(key("sample_to_source_distance"))? {
            builder = builder.with_sample_to_source_distance(distance);
        }

        if let Some(s0) = self.read_optional::<Vec<ThreeVector>, _>(key("s0_at_scan_points"))? {
            builder = builder.with_s0_at_scan_points(&s0);
        }

        let beam = builder.build(kind)
            .map_err(|e| InputError::beam(section, e))?;

        debug!(section, kind = ?beam.kind(), probe = beam.probe_name(), "read beam from configuration");
        Ok(beam)
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).map_err(|e| InputError::file(&e.to_string()))
        };
    }

    pub(super) use context_function;
}
