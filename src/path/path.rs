//! Path element and path types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PathElement represents one level of path navigation.
///
/// Serialized as a bare string (map key) or a bare number (list index).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathElement {
    /// Index into a list.
    Index(usize),
    /// Key of a map.
    Key(String),
}

impl PathElement {
    /// Creates a new key path element.
    pub fn key(name: impl Into<String>) -> Self {
        PathElement::Key(name.into())
    }

    /// Creates a new index path element.
    pub fn index(i: usize) -> Self {
        PathElement::Index(i)
    }

    /// Returns the key if this is a key element.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathElement::Key(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the index if this is an index element.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathElement::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// The map key this element addresses when it lands on a map node.
    /// Indices use their decimal spelling.
    pub fn to_key(&self) -> String {
        match self {
            PathElement::Key(name) => name.clone(),
            PathElement::Index(i) => i.to_string(),
        }
    }
}

impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        PathElement::Key(name.to_string())
    }
}

impl From<usize> for PathElement {
    fn from(i: usize) -> Self {
        PathElement::Index(i)
    }
}

/// Path represents a complete path to a nested node. The empty path is the
/// root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// Creates a path from a vector of elements.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    /// Returns the number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the path is the root.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the path elements.
    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter()
    }

    /// Appends a path element.
    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    /// Removes and returns the last path element.
    pub fn pop(&mut self) -> Option<PathElement> {
        self.elements.pop()
    }

    /// Returns a slice of the path elements.
    pub fn as_slice(&self) -> &[PathElement] {
        &self.elements
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Path {
            elements: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = PathElement;
    type IntoIter = std::vec::IntoIter<PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Key(name) => write!(f, ".{}", name),
            PathElement::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() {
            return write!(f, ".");
        }
        for element in &self.elements {
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

/// Builds a [`Path`] from a mix of keys and indices.
///
/// ```
/// use json_changes::path;
/// let p = path!["user", "tags", 0usize];
/// assert_eq!(p.to_string(), ".user.tags[0]");
/// ```
#[macro_export]
macro_rules! path {
    () => { $crate::path::Path::new() };
    ($($e:expr),+ $(,)?) => {
        $crate::path::Path::from_elements(vec![$($crate::path::PathElement::from($e)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_element_accessors() {
        let pe = PathElement::key("foo");
        assert_eq!(pe.as_key(), Some("foo"));
        assert_eq!(pe.as_index(), None);

        let idx = PathElement::index(3);
        assert_eq!(idx.as_index(), Some(3));
        assert_eq!(idx.to_key(), "3");
    }

    #[test]
    fn test_path_operations() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.push(PathElement::key("user"));
        path.push(PathElement::key("name"));
        assert_eq!(path.len(), 2);

        let popped = path.pop();
        assert_eq!(popped, Some(PathElement::Key("name".to_string())));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_path_display() {
        let path = Path::from_elements(vec![
            PathElement::key("user"),
            PathElement::key("tags"),
            PathElement::index(0),
        ]);
        assert_eq!(format!("{}", path), ".user.tags[0]");
        assert_eq!(format!("{}", Path::new()), ".");
    }

    #[test]
    fn test_path_serializes_as_array() {
        let path = crate::path!["user", "tags", 0usize];
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            r#"["user","tags",0]"#
        );
        let back: Path = serde_json::from_str(r#"["user","tags",0]"#).unwrap();
        assert_eq!(back, path);
    }
}
