use crate::domain::model::Entry;
use crate::utils::error::{CookbookError, Result};
use std::collections::HashMap;

/// Name-keyed store of cookbook entries. Entries are never replaced or removed.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.contains(entry.name()) {
            return Err(CookbookError::DuplicateNameError {
                name: entry.name().to_string(),
            });
        }
        self.entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
