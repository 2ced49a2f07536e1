//! Numeric value generators.

use forge_core::{GeneratorError, Params, Value};
use rand::distr::{Distribution, Uniform};
use rand::{Rng, RngCore};

/// Generate a random integer in `min..=max`.
pub fn generate_int_range(
    rng: &mut dyn RngCore,
    min: i64,
    max: i64,
) -> Result<Value, GeneratorError> {
    if min > max {
        return Err(GeneratorError::invalid(
            "min",
            format!("min {min} is greater than max {max}"),
        ));
    }
    Ok(Value::from(rng.random_range(min..=max)))
}

/// Generate a random float in `min..=max`.
pub fn generate_float_range(
    rng: &mut dyn RngCore,
    min: f64,
    max: f64,
) -> Result<Value, GeneratorError> {
    let uniform = Uniform::new_inclusive(min, max).map_err(|e| {
        GeneratorError::invalid("min", format!("invalid float range {min}..={max}: {e}"))
    })?;
    Ok(Value::from(uniform.sample(rng)))
}

/// `number` generator: integer between `min` (default 0) and `max` (default 100).
pub fn number(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let min = params.i64_or("min", 0)?;
    let max = params.i64_or("max", 100)?;
    generate_int_range(rng, min, max)
}

/// `float` generator: float between `min` (default 0.0) and `max` (default 1.0).
pub fn float(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let min = params.f64_or("min", 0.0)?;
    let max = params.f64_or("max", 1.0)?;
    generate_float_range(rng, min, max)
}

/// `bool` generator: true with probability `true_weight` (default 0.5).
pub fn weighted_bool(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let true_weight = params.f64_or("true_weight", 0.5)?;
    if !(0.0..=1.0).contains(&true_weight) {
        return Err(GeneratorError::invalid(
            "true_weight",
            "must be between 0.0 and 1.0",
        ));
    }
    Ok(Value::from(rng.random_bool(true_weight)))
}
