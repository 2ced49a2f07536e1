//! Built-in value generators.
//!
//! Each generator follows the registry contract
//! `(params, rng) -> Result<Value, GeneratorError>` and draws randomness only
//! from the supplied source, so a fixed seed reproduces its output.
//!
//! | Name | Parameters | Output |
//! |---|---|---|
//! | `uuid` | | UUID v4 string |
//! | `number` | `min`, `max` | integer |
//! | `float` | `min`, `max` | float |
//! | `bool` | `true_weight` | boolean |
//! | `pattern` | `pattern` (`{uuid}`, `{rand:N}`) | string |
//! | `one_of` | `values` | one entry of `values` |
//! | `sample_array` | `pool`, `min_length`, `max_length`, `unique` | sequence |
//! | `static` | `value` | `value` as-is |
//! | `null` | | null |
//! | `timestamp` | `start`, `end`, `format` | string |
//! | `school` | | string |
//! | `sentence_simple` | | string |

pub mod array;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod timestamp;
pub mod uuid;
pub mod words;

use crate::registry::{GeneratorInfo, GeneratorRegistry, RegistryError};
use forge_core::{GeneratorError, Params, Value};
use rand::RngCore;

type GenerateFn = fn(&Params, &mut dyn RngCore) -> Result<Value, GeneratorError>;

struct Builtin {
    name: &'static str,
    display: &'static str,
    category: &'static str,
    description: &'static str,
    output: &'static str,
    generate: GenerateFn,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "uuid",
        display: "UUID",
        category: "misc",
        description: "Random version 4 UUID",
        output: "string",
        generate: uuid::uuid_v4,
    },
    Builtin {
        name: "number",
        display: "Number",
        category: "number",
        description: "Random integer between min and max",
        output: "int",
        generate: numeric::number,
    },
    Builtin {
        name: "float",
        display: "Float",
        category: "number",
        description: "Random float between min and max",
        output: "float64",
        generate: numeric::float,
    },
    Builtin {
        name: "bool",
        display: "Boolean",
        category: "misc",
        description: "Boolean that is true with probability true_weight",
        output: "bool",
        generate: numeric::weighted_bool,
    },
    Builtin {
        name: "pattern",
        display: "Pattern",
        category: "string",
        description: "String with {uuid} and {rand:N} placeholders expanded",
        output: "string",
        generate: pattern::pattern,
    },
    Builtin {
        name: "one_of",
        display: "One Of",
        category: "misc",
        description: "Random entry of the values list",
        output: "any",
        generate: static_value::one_of,
    },
    Builtin {
        name: "sample_array",
        display: "Sample Array",
        category: "misc",
        description: "Random sample of entries from the pool list",
        output: "[]any",
        generate: array::sample_array,
    },
    Builtin {
        name: "static",
        display: "Static",
        category: "misc",
        description: "The value parameter, unchanged",
        output: "any",
        generate: static_value::static_value,
    },
    Builtin {
        name: "null",
        display: "Null",
        category: "misc",
        description: "Absent value",
        output: "null",
        generate: static_value::null,
    },
    Builtin {
        name: "timestamp",
        display: "Timestamp",
        category: "time",
        description: "Random timestamp between start and end",
        output: "string",
        generate: timestamp::timestamp,
    },
    Builtin {
        name: "school",
        display: "School",
        category: "school",
        description: "An institution for formal education and learning",
        output: "string",
        generate: words::school,
    },
    Builtin {
        name: "sentence_simple",
        display: "Simple Sentence",
        category: "word",
        description: "Sentence made of a noun phrase and a verb phrase",
        output: "string",
        generate: words::sentence_simple,
    },
];

/// Register every built-in generator into `registry`.
pub fn register_builtins(registry: &mut GeneratorRegistry) -> Result<(), RegistryError> {
    for builtin in BUILTINS {
        registry.register(
            builtin.name,
            GeneratorInfo::new(
                builtin.display,
                builtin.category,
                builtin.description,
                builtin.output,
            ),
            builtin.generate,
        )?;
    }
    Ok(())
}
