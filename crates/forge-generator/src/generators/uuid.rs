//! UUID value generator.

use forge_core::{GeneratorError, Params, Value};
use rand::RngCore;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4(rng: &mut dyn RngCore) -> Uuid {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// `uuid` generator: hyphenated UUID v4 string.
pub fn uuid_v4(_params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    Ok(Value::from(generate_uuid_v4(rng).to_string()))
}
