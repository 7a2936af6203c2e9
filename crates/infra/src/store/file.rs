use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_inventory::InventoryItem;

use super::r#trait::{decode_items, encode_items, InventoryStore, StoreError};

/// Durable slot backed by a single JSON file: `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
    key: String,
}

impl FileSlotStore {
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", self.key))
    }
}

impl InventoryStore for FileSlotStore {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StoreError> {
        let raw = match fs::read_to_string(self.path()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        decode_items(&raw).map(Some)
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        let payload = encode_items(items)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = self.temp_path();
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, self.path())?;

        tracing::debug!(
            path = %self.path().display(),
            items = items.len(),
            "inventory slot written"
        );
        Ok(())
    }
}
