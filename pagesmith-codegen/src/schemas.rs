use std::{
    collections::{HashMap, hash_map::Entry},
    path::PathBuf,
};

use pagesmith_schema::{Schema, SchemaStore};

use crate::PageError;

/// Schemas loaded during a run, keyed by name.
///
/// Each schema file is read and parsed at most once. Failed loads are not
/// cached, so a later descriptor naming the same schema reports the same
/// error again.
pub struct SchemaCache {
    store: SchemaStore,
    schemas: HashMap<String, Schema>,
}

impl SchemaCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: SchemaStore::new(dir),
            schemas: HashMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn get(&mut self, name: &str) -> Result<&Schema, PageError> {
        match self.schemas.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let schema = self.store.load(name).map_err(|e| PageError::Schema {
                    name: name.to_string(),
                    source: e,
                })?;
                Ok(entry.insert(schema))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_schema_loaded_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("book.yaml");
        fs::write(&path, "version: 1\ntypes:\n  title:\n    type: string\n").unwrap();

        let mut cache = SchemaCache::new(temp.path());
        assert_eq!(cache.get("book").unwrap().types.len(), 1);

        fs::remove_file(&path).unwrap();
        assert_eq!(cache.get("book").unwrap().types.len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_schema_not_cached() {
        let temp = TempDir::new().unwrap();
        let mut cache = SchemaCache::new(temp.path());

        let err = cache.get("ghost").unwrap_err();
        assert!(matches!(err, PageError::Schema { ref name, .. } if name == "ghost"));
        assert!(cache.is_empty());
    }
}
