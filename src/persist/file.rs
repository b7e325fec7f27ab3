//! Directory-backed store: each record is a file named after the record

use super::{validate_name, KeyValueStore, StoreError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const RECORD_EXTENSION: &str = "bin";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, RECORD_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_name(name)?;
        match fs::read(self.record_path(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), StoreError> {
        validate_name(name)?;
        // Write beside the record and rename so a crash never leaves half a record
        let final_path = self.record_path(name);
        let temp_path = self.dir.join(format!("{}.tmp", name));
        fs::write(&temp_path, data)?;
        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }
}
