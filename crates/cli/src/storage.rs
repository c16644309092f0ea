//! File-backed cart persistence.
//!
//! The cart snapshot lives as a single JSON file under a fixed path, the
//! durable-storage analogue of the browser cart: loaded once when a
//! command starts, fully overwritten on every mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pulse_gear_core::cart::{CartItem, CartStorage, CartStorageError};

/// Environment variable overriding the snapshot location.
pub const CART_PATH_ENV: &str = "PULSEGEAR_CART_PATH";

/// Default snapshot file, relative to the home directory.
const DEFAULT_CART_FILE: &str = ".pulsegear/cart.json";

/// JSON-file [`CartStorage`] backend.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a backend for an explicit snapshot path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the snapshot path: `PULSEGEAR_CART_PATH` if set, otherwise
    /// `~/.pulsegear/cart.json` (falling back to the current directory
    /// when no home is known).
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CART_PATH_ENV) {
            return PathBuf::from(path);
        }
        std::env::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_CART_FILE)
    }

    /// The file this backend reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, CartStorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartStorageError::Io(e)),
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CartStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pulse_gear_core::cart::CartStore;
    use pulse_gear_core::Price;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pulse-cli-{}-{name}.json", std::process::id()))
    }

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn missing_file_loads_as_empty_cart() {
        let storage = FileStorage::new(temp_path("missing"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn snapshot_survives_a_reload() {
        let path = temp_path("reload");
        let _ = fs::remove_file(&path);

        let mut store = CartStore::load(Box::new(FileStorage::new(&path))).unwrap();
        store
            .add_item("Keyboard", price("50.00"), "img/keyboard.png")
            .unwrap();
        store
            .add_item("Mouse", price("30.00"), "img/mouse.png")
            .unwrap();

        let reloaded = CartStore::load(Box::new(FileStorage::new(&path))).unwrap();
        assert_eq!(reloaded.cart(), store.cart());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_snapshot_is_an_error_not_a_reset() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.load(),
            Err(CartStorageError::Corrupt(_))
        ));

        let _ = fs::remove_file(&path);
    }
}
