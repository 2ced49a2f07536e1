//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number

use super::uuid::generate_uuid_v4;
use forge_core::{GeneratorError, Params, Value};
use rand::{Rng, RngCore};

/// Expand the placeholders of `pattern`.
pub fn generate_pattern(pattern: &str, rng: &mut dyn RngCore) -> String {
    let mut result = pattern.to_string();

    // Replace {uuid}
    while result.contains("{uuid}") {
        let uuid = generate_uuid_v4(rng).to_string();
        result = result.replacen("{uuid}", &uuid, 1);
    }

    // Replace {rand:N} patterns
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("{rand:") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}').map(|end| start + end) else {
            break;
        };
        match result[start + 6..end].parse::<usize>() {
            Ok(digits) => {
                let random_num = generate_random_digits(rng, digits);
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
                search_from = start + random_num.len();
            }
            // Invalid width, leave the placeholder as written
            Err(_) => search_from = end + 1,
        }
    }

    result
}

/// Generate a random number with exactly N digits.
fn generate_random_digits(rng: &mut dyn RngCore, digits: usize) -> String {
    let mut result = String::with_capacity(digits);

    for i in 0..digits {
        // First digit should be 1-9 to avoid leading zeros
        let low = if i == 0 { 1 } else { 0 };
        let digit: u8 = rng.random_range(low..10);
        result.push(char::from(b'0' + digit));
    }

    result
}

/// `pattern` generator: expands the required `pattern` parameter.
pub fn pattern(params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    let pattern = params.required_str("pattern")?;
    Ok(Value::from(generate_pattern(pattern, rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_literal() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_pattern("plain text", &mut rng), "plain text");
    }

    #[test]
    fn test_generate_pattern_uuid() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("id-{uuid}", &mut rng);

        assert!(s.starts_with("id-"));
        assert_eq!(s.len(), 3 + 36); // "id-" + UUID
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("code-{rand:6}", &mut rng);

        assert!(s.starts_with("code-"));
        assert_eq!(s.len(), 5 + 6); // "code-" + 6 digits
        let random_part = &s[5..];
        assert!(random_part.chars().all(|c| c.is_ascii_digit()));
        assert!(!random_part.starts_with('0'));
    }

    #[test]
    fn test_generate_pattern_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("a{rand:2}_b{rand:4}", &mut rng);

        assert_eq!(s.len(), 1 + 2 + 2 + 4);
        assert!(s.starts_with('a'));
        assert_eq!(&s[3..5], "_b");
    }

    #[test]
    fn test_invalid_width_left_as_is() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = generate_pattern("{rand:x}-{rand:1}", &mut rng);

        assert!(s.starts_with("{rand:x}-"));
        assert_eq!(s.len(), "{rand:x}-".len() + 1);
    }

    #[test]
    fn test_pattern_requires_param() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = pattern(&Params::new(), &mut rng);

        assert!(matches!(result, Err(GeneratorError::MissingParam(ref p)) if p == "pattern"));
    }

    #[test]
    fn test_pattern_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(
            generate_pattern("{uuid}/{rand:8}", &mut rng1),
            generate_pattern("{uuid}/{rand:8}", &mut rng2)
        );
    }
}
