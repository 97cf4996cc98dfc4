pub mod file;
pub mod memory;
pub mod remote;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::helper;
use log::{debug, error};
use std::fs;
use std::path::Path;

pub const STORAGE_KEY: &str = "raincloud_contacts";
pub const DEFAULT_DATA_DIR: &str = "./.instance";

/// Synchronous string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn remove(&self, key: &str) -> Result<(), AppError>;

    fn exists(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.get(key)?.is_some())
    }

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    File,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "mem" => Ok(StorageMediums::Mem),
            "file" | "json" => Ok(StorageMediums::File),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

/// Picks the adapter named by `storage_medium`, falling back to `STORAGE_CHOICE`.
pub fn parse_storage_type(
    storage_medium: Option<StorageMediums>,
    data_dir: Option<&str>,
) -> Result<Box<dyn KeyValueStore>, AppError> {
    let medium = match storage_medium {
        Some(medium) => medium,
        None => {
            let choice =
                helper::get_env_value_by_key("STORAGE_CHOICE").unwrap_or("file".to_string());
            StorageMediums::from(&choice)?
        }
    };

    match medium {
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
        StorageMediums::File => {
            let dir = match data_dir {
                Some(dir) => dir.to_string(),
                None => helper::get_env_value_by_key("RAINCLOUD_DATA_DIR")
                    .unwrap_or(DEFAULT_DATA_DIR.to_string()),
            };
            Ok(Box::new(file::FileStorage::new(&dir)?))
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Mirrors a contact collection into a [`KeyValueStore`] under [`STORAGE_KEY`].
pub struct ContactStorage {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl ContactStorage {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn get_medium(&self) -> &str {
        self.store.get_medium()
    }

    /// Never fails: unreadable, missing or malformed data all come back empty.
    pub fn get_contacts(&self) -> Vec<Contact> {
        match self.try_get_contacts() {
            Ok(contacts) => contacts,
            Err(e) => {
                error!("Failed to load contacts from storage: {}", e);
                Vec::new()
            }
        }
    }

    fn try_get_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let data = match self.store.get(&self.key)? {
            Some(data) if !data.trim().is_empty() => data,
            _ => return Ok(Vec::new()),
        };

        // a stored `null` decodes to None
        let contacts: Option<Vec<Contact>> = serde_json::from_str(&data)?;
        Ok(contacts.unwrap_or_default())
    }

    pub fn save_contacts(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts)?;
        self.store.set(&self.key, &data)?;

        debug!(
            "Saved {} contacts to {} storage",
            contacts.len(),
            self.get_medium()
        );
        Ok(())
    }

    pub fn clear_contacts(&self) -> Result<(), AppError> {
        self.store.remove(&self.key)
    }

    pub fn has_existing_data(&self) -> bool {
        match self.store.exists(&self.key) {
            Ok(exists) => exists,
            Err(e) => {
                error!("Failed to check storage for existing contacts: {}", e);
                false
            }
        }
    }
}
