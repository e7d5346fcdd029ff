use deriv_parser::domain::Domain;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variable bindings to use when evaluating or rendering an expression.
///
/// Bindings are supplied by the caller and never modified by the operations that read them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bindings<T> {
    /// The values of the variables.
    vars: HashMap<String, T>,
}

impl<T> Default for Bindings<T> {
    fn default() -> Self {
        Self { vars: HashMap::new() }
    }
}

impl<T: Domain> Bindings<T> {
    /// Creates a new empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the bindings, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: T) {
        self.vars.insert(name.to_string(), value);
    }

    /// Add a variable to the bindings, returning the bindings.
    ///
    /// ```
    /// use deriv_compute::ctxt::Bindings;
    ///
    /// let bindings = Bindings::new().with_var("a", 2.0).with_var("b", 1.0);
    /// assert_eq!(bindings.get_var("a"), Some(2.0));
    /// assert_eq!(bindings.get_var("c"), None);
    /// ```
    pub fn with_var(mut self, name: &str, value: T) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable.
    pub fn get_var(&self, name: &str) -> Option<T> {
        self.vars.get(name).copied()
    }

    /// Returns the number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<T> From<HashMap<String, T>> for Bindings<T> {
    fn from(vars: HashMap<String, T>) -> Self {
        Self { vars }
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Bindings<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}
