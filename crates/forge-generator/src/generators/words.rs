//! Word based generators: school names and simple sentences.

use forge_core::{GeneratorError, Params, Value};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

const SCHOOL_NAMES: &[&str] = &[
    "Harborview", "Maplewood", "Riverside", "Oakridge", "Pinecrest", "Lakeside", "Brookfield",
    "Cedar Hill", "Westwood", "Sunnyvale", "Greenfield", "Fairview", "Hillcrest", "Stonebridge",
];

const SCHOOL_PRIVACY: &[&str] = &["Private", "State"];

const SCHOOL_TYPES: &[&str] = &[
    "Academy", "College", "Elementary School", "High School", "Institute", "Middle School",
    "University",
];

const ADJECTIVES: &[&str] = &[
    "quick", "lazy", "bright", "quiet", "brave", "curious", "gentle", "tall", "tiny", "clever",
];

const NOUNS: &[&str] = &[
    "dog", "teacher", "river", "city", "student", "garden", "robot", "artist", "train", "owl",
];

const VERBS: &[&str] = &[
    "runs", "sings", "waits", "jumps", "sleeps", "listens", "travels", "laughs", "writes", "grows",
];

const ADVERBS: &[&str] = &[
    "quickly", "quietly", "happily", "slowly", "loudly", "carefully", "rarely", "often",
];

fn pick(rng: &mut dyn RngCore, words: &'static [&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Generate a school name such as "Harborview State Academy".
pub fn generate_school(rng: &mut dyn RngCore) -> String {
    format!(
        "{} {} {}",
        pick(rng, SCHOOL_NAMES),
        pick(rng, SCHOOL_PRIVACY),
        pick(rng, SCHOOL_TYPES)
    )
}

fn phrase_noun(rng: &mut dyn RngCore) -> String {
    if rng.random_bool(0.5) {
        format!("the {} {}", pick(rng, ADJECTIVES), pick(rng, NOUNS))
    } else {
        format!("the {}", pick(rng, NOUNS))
    }
}

fn phrase_verb(rng: &mut dyn RngCore) -> String {
    if rng.random_bool(0.5) {
        format!("{} {}", pick(rng, VERBS), pick(rng, ADVERBS))
    } else {
        pick(rng, VERBS).to_string()
    }
}

/// Generate a simple sentence: a noun phrase and a verb phrase, capitalized.
pub fn generate_sentence_simple(rng: &mut dyn RngCore) -> String {
    let sentence = format!("{} {}.", phrase_noun(rng), phrase_verb(rng));

    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => sentence,
    }
}

/// `school` generator.
pub fn school(_params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    Ok(Value::from(generate_school(rng)))
}

/// `sentence_simple` generator.
pub fn sentence_simple(_params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
    Ok(Value::from(generate_sentence_simple(rng)))
}
