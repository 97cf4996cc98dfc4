use super::*;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

/// Keeps each key in its own `<dir>/<key>.json` file.
pub struct FileStorage {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &str) -> Result<Self, AppError> {
        Ok(Self {
            medium: "file".to_string(),
            dir: PathBuf::from(dir),
        })
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.starts_with('.')
        {
            return Err(AppError::Validation(format!(
                "'{}' cannot be used as a storage key",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.write_all(value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, AppError> {
        Ok(fs::exists(self.path_for(key)?)?)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
