use super::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Process-local key-value store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }
}

impl KeyValueStore for MemStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.data.borrow().contains_key(key))
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() -> Result<(), AppError> {
        let store = MemStorage::new();
        assert!(store.is_empty());

        store.set("k", "v1")?;
        store.set("k", "v2")?;
        assert_eq!(store.get("k")?, Some("v2".to_string()));
        assert!(store.exists("k")?);
        assert_eq!(store.len(), 1);

        store.remove("k")?;
        assert_eq!(store.get("k")?, None);
        assert!(!store.exists("k")?);
        Ok(())
    }

    #[test]
    fn clones_share_entries() -> Result<(), AppError> {
        let store = MemStorage::new();
        let other = store.clone();

        store.set("k", "v")?;

        assert_eq!(other.get("k")?, Some("v".to_string()));
        Ok(())
    }
}
