use std::{
    fs::File,
    io::{ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use crate::interfaces::client_storage::ClientStorageInterface;
use crate::middleware::error::{AppError, AppResult};

/// One file per key under `storage_dir`, for visitors that are not browsers.
pub struct FileClientStorage {
    storage_dir: String,
}

impl FileClientStorage {
    pub fn new(storage_dir: String) -> Self {
        FileClientStorage { storage_dir }
    }

    fn ensure_dir_exists(&self, dir_path: &str) -> std::io::Result<()> {
        let path = Path::new(dir_path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        Path::new(&self.storage_dir).join(format!("{key}.json"))
    }
}

fn unavailable(err: std::io::Error) -> AppError {
    AppError::LocalStorageUnavailable {
        source: err.to_string(),
    }
}

impl ClientStorageInterface for FileClientStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let mut file = match File::open(self.key_path(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(unavailable(e)),
        };
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(unavailable)?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.ensure_dir_exists(&self.storage_dir)
            .map_err(unavailable)?;
        let mut file = File::create(self.key_path(key)).map_err(unavailable)?;
        file.write_all(value.as_bytes()).map_err(unavailable)?;
        Ok(())
    }
}
