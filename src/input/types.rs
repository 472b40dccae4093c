//! YAML-readable types

use yaml_rust::yaml::Yaml;
use evalexpr::{HashMapContext, eval_number_with_context};

use crate::geometry::ThreeVector;

/// Types that can be parsed from a YML-formatted file
pub trait FromYaml: Sized {
    /// Attempt to parse the YML field as the specified type, using the
    /// supplied context for named constants.
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Option<Self>;
}

impl FromYaml for String {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Option<Self> {
        match arg {
            Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
            Yaml::Integer(i) => Some(i.to_string()),
            Yaml::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Numbers may be given literally or as expressions, e.g. `12.4 * keV`.
impl FromYaml for f64 {
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Option<Self> {
        match arg {
            Yaml::Real(s) => s.parse::<f64>().ok(),
            Yaml::Integer(i) => Some(*i as f64),
            Yaml::String(s) => eval_number_with_context(s, ctx).ok(),
            _ => None,
        }
    }
}

impl FromYaml for ThreeVector {
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Option<Self> {
        match arg {
            Yaml::Array(array) if array.len() == 3 => {
                let x = f64::from_yaml(&array[0], ctx)?;
                let y = f64::from_yaml(&array[1], ctx)?;
                let z = f64::from_yaml(&array[2], ctx)?;
                Some(ThreeVector::new(x, y, z))
            },
            _ => None,
        }
    }
}

impl<T: FromYaml> FromYaml for Vec<T> {
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Option<Self> {
        match arg {
            Yaml::Array(array) => array.iter()
                .map(|y| T::from_yaml(y, ctx))
                .collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use yaml_rust::YamlLoader;
    use super::*;

    #[test]
    fn vectors() {
        let doc = YamlLoader::load_from_str("[[0, 0, 1], [0.5, 1.0e-3, -2]]").unwrap();
        let ctx = HashMapContext::new();
        let v: Vec<ThreeVector> = FromYaml::from_yaml(&doc[0], &ctx).unwrap();
        assert_eq!(v, vec![ThreeVector::new(0.0, 0.0, 1.0), ThreeVector::new(0.5, 1.0e-3, -2.0)]);

        let doc = YamlLoader::load_from_str("[0, 1]").unwrap();
        assert!(ThreeVector::from_yaml(&doc[0], &ctx).is_none());
    }
}
