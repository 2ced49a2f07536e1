//! Name-indexed registry of generator functions.

use crate::generators;
use forge_core::{GeneratorError, Params, Value, AUTOINCREMENT};
use rand::RngCore;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A named function producing one value per invocation.
pub trait Generator: Send + Sync {
    /// Generate a value from the field's parameters and the shared random source.
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError>;
}

impl<F> Generator for F
where
    F: Fn(&Params, &mut dyn RngCore) -> Result<Value, GeneratorError> + Send + Sync,
{
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
        self(params, rng)
    }
}

/// Descriptive metadata for a registered generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Human readable name
    pub display: String,
    /// Grouping, e.g. `number` or `school`
    pub category: String,
    pub description: String,
    /// Kind of value produced, e.g. `string` or `[]string`
    pub output: String,
}

impl GeneratorInfo {
    pub fn new(
        display: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            display: display.into(),
            category: category.into(),
            description: description.into(),
            output: output.into(),
        }
    }
}

/// Error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The name is handled by the assembler and cannot be registered
    #[error("Generator name '{0}' is reserved")]
    ReservedName(String),

    /// A generator with this name is already registered
    #[error("Generator already registered: {0}")]
    Duplicate(String),
}

struct RegisteredGenerator {
    info: GeneratorInfo,
    generator: Box<dyn Generator>,
}

/// Mapping from generator name to generator.
///
/// Populate it before first use; lookups take `&self` so a fully built
/// registry can be shared freely.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: HashMap<String, RegisteredGenerator>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in generators.
    pub fn try_with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        generators::register_builtins(&mut registry)?;
        tracing::debug!("Registered {} built-in generators", registry.len());
        Ok(registry)
    }

    /// Like [`try_with_builtins`](Self::try_with_builtins), for callers that
    /// rely on the built-in table being well formed.
    pub fn with_builtins() -> Self {
        let registry = Self::try_with_builtins();
        debug_assert!(registry.is_ok(), "built-in generator table is invalid");
        registry.unwrap_or_default()
    }

    /// Register a generator under `name`.
    pub fn register<G>(
        &mut self,
        name: impl Into<String>,
        info: GeneratorInfo,
        generator: G,
    ) -> Result<(), RegistryError>
    where
        G: Generator + 'static,
    {
        let name = name.into();
        if name == AUTOINCREMENT {
            return Err(RegistryError::ReservedName(name));
        }
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        self.entries.insert(
            name,
            RegisteredGenerator {
                info,
                generator: Box::new(generator),
            },
        );
        Ok(())
    }

    /// Look up a generator by name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Generator> {
        self.entries.get(name).map(|entry| entry.generator.as_ref())
    }

    /// Look up a generator's metadata by name.
    pub fn info(&self, name: &str) -> Option<&GeneratorInfo> {
        self.entries.get(name).map(|entry| &entry.info)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Process-wide registry of built-in generators, built on first use.
pub fn default_registry() -> &'static GeneratorRegistry {
    static REGISTRY: OnceLock<GeneratorRegistry> = OnceLock::new();
    REGISTRY.get_or_init(GeneratorRegistry::with_builtins)
}
