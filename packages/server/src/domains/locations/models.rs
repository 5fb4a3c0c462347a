use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered set of unique location labels.
///
/// Order is first occurrence in the scraped document; equality is exact
/// string equality (no case or whitespace folding). Serializes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationSet(IndexSet<String>);

impl LocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, returning false if it was already present.
    pub fn insert(&mut self, label: String) -> bool {
        self.0.insert(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<String> for LocationSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Remove duplicate labels, keeping the first occurrence of each.
pub fn dedupe_labels<I>(labels: I) -> LocationSet
where
    I: IntoIterator<Item = String>,
{
    labels.into_iter().collect()
}

/// Success body for `GET /api/locations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub details: LocationSet,
}
