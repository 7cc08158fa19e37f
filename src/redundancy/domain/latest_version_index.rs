use indexmap::IndexMap;

/// Highest version observed for each package name anywhere in the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestVersionIndex {
    versions: IndexMap<String, String>,
}

impl LatestVersionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, name: String, version: String) {
        self.versions.insert(name, version);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LatestVersionIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            versions: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
