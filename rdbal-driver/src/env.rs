//! Environment variable expansion for configuration values.

use std::collections::HashMap;

use crate::error::{DriverError, DriverResult};

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// Process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty map-based source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands `${VAR}` and `${VAR:-default}` references.
///
/// A `$` that does not start a `${...}` reference is kept as is, so
/// passwords containing `$` survive untouched.
#[derive(Debug, Clone, Default)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl EnvExpander<StdEnvSource> {
    /// Expander over the process environment.
    pub fn new() -> Self {
        Self {
            source: StdEnvSource,
        }
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Expander over a custom source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every reference in `input`.
    pub fn expand(&self, input: &str) -> DriverResult<String> {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("${") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| DriverError::env(after, "unterminated variable reference"))?;

            result.push_str(&self.resolve(&after[..end])?);
            rest = &after[end + 1..];
        }
        result.push_str(rest);

        Ok(result)
    }

    /// Expand an optional value in place.
    pub fn expand_opt(&self, value: &mut Option<String>) -> DriverResult<()> {
        if let Some(v) = value.as_mut() {
            *v = self.expand(v)?;
        }
        Ok(())
    }

    fn resolve(&self, reference: &str) -> DriverResult<String> {
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        if name.is_empty() {
            return Err(DriverError::env(name, "empty variable name"));
        }

        match (self.source.get(name), default) {
            (Some(value), _) if !value.is_empty() => Ok(value),
            (_, Some(default)) => Ok(default.to_string()),
            (Some(value), None) => Ok(value),
            (None, None) => Err(DriverError::env(name, "not set")),
        }
    }
}
