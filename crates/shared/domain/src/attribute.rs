use serde::{Deserialize, Serialize};

/// Primitive kind of an attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Boolean,
    Int,
    Float,
    #[default]
    String,
    Bytes,
    Any,
}

/// A single named parameter or field definition.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeExpr {
    pub kind: AttributeKind,
    pub description: Option<String>,
    pub required: bool,
}

impl AttributeExpr {
    #[must_use]
    pub fn new(kind: AttributeKind) -> Self {
        Self { kind, ..Self::default() }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered name → attribute map.
///
/// Insertion order is kept because generators emit parameters in declaration order.
/// Re-inserting an existing name replaces the attribute in place.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMapExpr {
    entries: Vec<(String, AttributeExpr)>,
}

impl AttributeMapExpr {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts or replaces `name`, returning the previous attribute if any.
    pub fn insert(&mut self, name: impl Into<String>, attr: AttributeExpr) -> Option<AttributeExpr> {
        let name = name.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(existing, attr));
        }
        self.entries.push((name, attr));
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeExpr> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, attr)| attr)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeExpr)> {
        self.entries.iter().map(|(n, attr)| (n.as_str(), attr))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, AttributeExpr)> for AttributeMapExpr {
    fn from_iter<I: IntoIterator<Item = (N, AttributeExpr)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, attr) in iter {
            map.insert(name, attr);
        }
        map
    }
}
