//! sshd directive values and the ordered directive mapping.

use std::fmt::{Display, Formatter, Result as FmtResult};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single sshd directive value: a scalar word or an ordered word list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DirectiveValue {
    Single(String),
    List(Vec<String>),
}

impl DirectiveValue {
    /// Render the value the way it appears on an `sshd_config` line.
    pub fn render(&self) -> String {
        match self {
            DirectiveValue::Single(value) => value.clone(),
            DirectiveValue::List(values) => values.join(" "),
        }
    }
}

impl Display for DirectiveValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        DirectiveValue::Single(value.to_string())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        DirectiveValue::Single(value)
    }
}

impl From<Vec<String>> for DirectiveValue {
    fn from(values: Vec<String>) -> Self {
        DirectiveValue::List(values)
    }
}

/// An ordered directive-name → value mapping.
///
/// `set` overwrites in place: a key that already exists keeps its original
/// position, a new key is appended. Later writers win on key collision.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectiveMap(IndexMap<String, DirectiveValue>);

impl DirectiveMap {
    pub fn new() -> Self {
        DirectiveMap::default()
    }

    /// Insert or overwrite a directive.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<DirectiveValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&DirectiveValue> {
        self.0.get(name)
    }

    /// Iterate directives in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DirectiveValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for DirectiveMap
where
    N: Into<String>,
    V: Into<DirectiveValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = DirectiveMap::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}
