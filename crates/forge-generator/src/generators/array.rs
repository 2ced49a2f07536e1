//! Array value generators.

use super::static_value::yaml_to_value;
use forge_core::{GeneratorError, Params, Value};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, RngCore};
use serde_yaml::Value as YamlValue;

/// Generate an array by sampling from a pool of values (with repeats).
pub fn generate_sample_array(
    rng: &mut dyn RngCore,
    pool: &[YamlValue],
    min_length: usize,
    max_length: usize,
) -> Value {
    if pool.is_empty() || max_length == 0 {
        return Value::Sequence(vec![]);
    }

    let length = rng.random_range(min_length.min(max_length)..=max_length);
    let items = (0..length)
        .filter_map(|_| pool.choose(rng).map(yaml_to_value))
        .collect();

    Value::Sequence(items)
}

/// Generate an array by sampling unique items from a pool.
pub fn generate_unique_sample_array(
    rng: &mut dyn RngCore,
    pool: &[YamlValue],
    min_length: usize,
    max_length: usize,
) -> Value {
    if pool.is_empty() || max_length == 0 {
        return Value::Sequence(vec![]);
    }

    // Clamp to pool size for unique sampling
    let effective_max = max_length.min(pool.len());
    let effective_min = min_length.min(effective_max);
    let length = rng.random_range(effective_min..=effective_max);

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);

    Value::Sequence(shuffled.iter().take(length).map(yaml_to_value).collect())
}

fn length_param(params: &Params, name: &str, default: i64) -> Result<usize, GeneratorError> {
    let raw = params.i64_or(name, default)?;
    usize::try_from(raw).map_err(|_| GeneratorError::invalid(name, "must not be negative"))
}

/// `sample_array` generator.
///
/// Parameters: `pool` (list), `min_length` (default 1), `max_length`
/// (default 3) and `unique` (default false).
pub fn sample_array(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let pool = params.value_list("pool")?;
    let min_length = length_param(params, "min_length", 1)?;
    let max_length = length_param(params, "max_length", 3)?;

    if params.bool_or("unique", false)? {
        Ok(generate_unique_sample_array(rng, pool, min_length, max_length))
    } else {
        Ok(generate_sample_array(rng, pool, min_length, max_length))
    }
}
