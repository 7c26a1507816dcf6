use std::collections::BTreeMap;

/// Pure predicate over a string value.
pub type FormatCheck = fn(&str) -> bool;

/// Named format checkers available to `format:NAME` rules.
///
/// Built once and handed to [`crate::validation::Schema::compile`]; there is
/// no process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    checks: BTreeMap<String, FormatCheck>,
}

impl FormatRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in formats (`tag`).
    pub fn with_defaults() -> Self {
        Self::new().register("tag", is_tag)
    }

    /// Adds (or replaces) a named format.
    pub fn register(mut self, name: impl Into<String>, check: FormatCheck) -> Self {
        self.checks.insert(name.into(), check);
        self
    }

    /// Looks up a format by name.
    pub fn get(&self, name: &str) -> Option<FormatCheck> {
        self.checks.get(name).copied()
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }
}

/// `tag`: the value starts with `#`.
pub fn is_tag(value: &str) -> bool {
    value.starts_with('#')
}
