//! Integer type codes for deep-sky object categories.
//!
//! Codes are derived from the labels present in one input file: each
//! normalized label gets the next code the first time it is seen. The mapping
//! travels with the compiled tables, since the same label can get a different
//! code from a different file.

use std::collections::HashMap;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trims a label and replaces inner spaces with underscores, so that
/// `" Open Cluster"` becomes `"Open_Cluster"`.
pub fn normalize_label(label: &str) -> String {
    label.trim().replace(' ', "_")
}

/// Ordered label ↔ code mapping; a label's code is its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct CategoryMap {
    labels: Vec<String>,
    index: HashMap<String, u32>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping from labels in input order.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::new();
        for label in labels {
            map.code_or_insert(label);
        }
        debug!(categories = map.len(), "built category map");
        map
    }

    /// Code for a label, assigning the next one if the label is new.
    pub fn code_or_insert(&mut self, label: &str) -> u32 {
        let key = normalize_label(label);
        if let Some(&code) = self.index.get(&key) {
            return code;
        }
        let code = self.labels.len() as u32;
        self.index.insert(key.clone(), code);
        self.labels.push(key);
        code
    }

    pub fn code(&self, label: &str) -> Option<u32> {
        self.index.get(&normalize_label(label)).copied()
    }

    pub fn label(&self, code: u32) -> Option<&str> {
        self.labels.get(code as usize).map(String::as_str)
    }

    /// `(label, code)` pairs in code order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(code, label)| (label.as_str(), code as u32))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<String>> for CategoryMap {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels.iter().map(String::as_str))
    }
}

impl From<CategoryMap> for Vec<String> {
    fn from(map: CategoryMap) -> Self {
        map.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let map = CategoryMap::from_labels(["Galaxy", "Open Cluster", " Galaxy ", "Nebula"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.code("Galaxy"), Some(0));
        assert_eq!(map.code("Open_Cluster"), Some(1));
        assert_eq!(map.code("Open Cluster"), Some(1));
        assert_eq!(map.code("Nebula"), Some(2));
        assert_eq!(map.code("Planetary Nebula"), None);
        assert_eq!(map.label(1), Some("Open_Cluster"));
    }

    #[test]
    fn test_deterministic() {
        let labels = ["Globular Cluster", "Galaxy", "Nebula", "Galaxy", "Supernova Remnant"];
        let a = CategoryMap::from_labels(labels);
        let b = CategoryMap::from_labels(labels);
        assert_eq!(a, b);
        let entries: Vec<_> = a.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("Globular_Cluster", 0),
                ("Galaxy", 1),
                ("Nebula", 2),
                ("Supernova_Remnant", 3)
            ]
        );
    }

    #[test]
    fn test_vec_conversion() {
        let map = CategoryMap::from_labels(["A b", "C"]);
        let labels: Vec<String> = map.clone().into();
        assert_eq!(labels, vec!["A_b".to_string(), "C".to_string()]);
        assert_eq!(CategoryMap::from(labels), map);
    }
}
