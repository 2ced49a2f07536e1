//! Static value generators and YAML to Value conversion.

use forge_core::{GeneratorError, Params, Record, Value};
use rand::seq::IndexedRandom;
use rand::RngCore;
use serde_yaml::Value as YamlValue;

/// Convert a YAML value to a Value.
///
/// Mapping keys that are not scalars are skipped.
pub fn yaml_to_value(yaml: &YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::from(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(f) = n.as_f64() {
                Value::from(f)
            } else {
                Value::from(n.to_string())
            }
        }
        YamlValue::String(s) => Value::from(s.as_str()),
        YamlValue::Sequence(arr) => Value::Sequence(arr.iter().map(yaml_to_value).collect()),
        YamlValue::Mapping(map) => {
            let record: Record = map
                .iter()
                .filter_map(|(k, v)| {
                    let key = match k {
                        YamlValue::String(s) => s.clone(),
                        YamlValue::Number(n) => n.to_string(),
                        YamlValue::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, yaml_to_value(v)))
                })
                .collect();
            Value::Mapping(record)
        }
        YamlValue::Tagged(tagged) => yaml_to_value(&tagged.value),
    }
}

/// `static` generator: the `value` parameter, converted as-is.
pub fn static_value(params: &Params, _rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    params
        .get("value")
        .map(yaml_to_value)
        .ok_or_else(|| GeneratorError::MissingParam("value".to_string()))
}

/// `one_of` generator: a random entry of the `values` list.
pub fn one_of(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let values = params.value_list("values")?;
    values
        .choose(rng)
        .map(yaml_to_value)
        .ok_or_else(|| GeneratorError::invalid("values", "list is empty"))
}

/// `null` generator.
pub fn null(_params: &Params, _rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    Ok(Value::Null)
}
