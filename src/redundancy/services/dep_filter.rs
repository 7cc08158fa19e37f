use crate::shared::error::DepSlimError;
use crate::shared::Result;
use indexmap::IndexMap;
use std::cell::Cell;

/// Maximum number of dep filters
const MAX_DEP_FILTERS: usize = 64;

/// Maximum length of a single dep filter
const MAX_FILTER_LENGTH: usize = 255;

/// DepFilter - Allow-list of substrings deciding which dependency keys are analyzed
///
/// An empty filter keeps every key. Otherwise a key is kept when it contains
/// at least one filter as a case-sensitive substring, e.g. `@acme/` keeps only
/// the packages of that scope.
#[derive(Debug, Default)]
pub struct DepFilter {
    filters: Vec<Filter>,
}

#[derive(Debug)]
struct Filter {
    needle: String,
    matched: Cell<bool>,
}

impl DepFilter {
    /// Creates a DepFilter from raw filter strings
    ///
    /// # Errors
    /// - More than `MAX_DEP_FILTERS` filters
    /// - An empty or overly long filter
    pub fn new(filters: Vec<String>) -> Result<Self> {
        if filters.len() > MAX_DEP_FILTERS {
            return Err(DepSlimError::Validation {
                message: format!(
                    "Too many dep filters: {} (maximum: {})",
                    filters.len(),
                    MAX_DEP_FILTERS
                ),
            }
            .into());
        }

        let filters = filters
            .into_iter()
            .map(|needle| {
                validate_filter(&needle)?;
                Ok(Filter {
                    needle,
                    matched: Cell::new(false),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { filters })
    }

    /// A filter that keeps every key
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Checks whether a dependency key passes the filter
    pub fn allows(&self, key: &str) -> bool {
        if self.filters.is_empty() {
            return true;
        }

        let mut allowed = false;
        for filter in &self.filters {
            if key.contains(filter.needle.as_str()) {
                filter.matched.set(true);
                allowed = true;
            }
        }
        allowed
    }

    /// Entries of `map` whose keys pass the filter, in map order
    pub fn filtered<'a, T>(
        &'a self,
        map: &'a IndexMap<String, T>,
    ) -> impl Iterator<Item = (&'a String, &'a T)> + 'a {
        map.iter().filter(move |(key, _)| self.allows(key))
    }

    /// Filters that did not match any key seen so far
    pub fn unmatched_filters(&self) -> Vec<String> {
        self.filters
            .iter()
            .filter(|f| !f.matched.get())
            .map(|f| f.needle.clone())
            .collect()
    }
}

fn validate_filter(filter: &str) -> Result<()> {
    if filter.is_empty() {
        return Err(DepSlimError::Validation {
            message: "Dep filter cannot be empty".to_string(),
        }
        .into());
    }

    if filter.len() > MAX_FILTER_LENGTH {
        return Err(DepSlimError::Validation {
            message: format!(
                "Dep filter is too long: '{}' ({} chars). Maximum: {} chars",
                filter,
                filter.len(),
                MAX_FILTER_LENGTH
            ),
        }
        .into());
    }

    Ok(())
}
