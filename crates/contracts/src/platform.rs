//! PlatformSpec - platform alias declaration for transports

use serde::{Deserialize, Serialize};

/// Platform aliases claimed by a transport.
///
/// A transport registers under a single platform name or an ordered list of
/// aliases that all resolve to the same instance. Matching is
/// case-insensitive; the dispatcher folds aliases to lowercase before
/// storing them, so `"iOS"` and `"ios"` denote the same platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformSpec {
    /// A single platform name
    Single(String),
    /// An ordered alias list
    Aliases(Vec<String>),
}

impl PlatformSpec {
    /// View the aliases as a slice, in declaration order.
    ///
    /// A `Single` behaves as a one-element sequence.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Aliases(names) => names,
        }
    }

    /// Iterate aliases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().map(String::as_str)
    }

    /// Number of declared aliases
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether no alias was declared
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for PlatformSpec {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<String> for PlatformSpec {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl From<Vec<String>> for PlatformSpec {
    fn from(names: Vec<String>) -> Self {
        Self::Aliases(names)
    }
}

impl From<&[&str]> for PlatformSpec {
    fn from(names: &[&str]) -> Self {
        Self::Aliases(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PlatformSpec {
    fn from(names: [&str; N]) -> Self {
        Self::Aliases(names.iter().map(|n| n.to_string()).collect())
    }
}
