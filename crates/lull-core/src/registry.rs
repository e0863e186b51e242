//! Registry mapping display names to screensaver factories.

use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::options::SaverOptions;
use crate::screensaver::Screensaver;

/// Constructor for a screensaver instance.
pub type SaverFactory = fn(&SaverOptions) -> Box<dyn Screensaver>;

/// Registry errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("screensaver name must not be empty")]
    EmptyName,
    #[error("a screensaver named {0:?} is already registered")]
    Duplicate(&'static str),
    #[error("no screensaver named {0:?}")]
    Unknown(String),
}

/// A registered screensaver type.
#[derive(Debug, Clone, Copy)]
pub struct SaverEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub factory: SaverFactory,
}

impl SaverEntry {
    /// Build a fresh instance.
    pub fn create(&self, options: &SaverOptions) -> Box<dyn Screensaver> {
        (self.factory)(options)
    }
}

/// Ordered collection of screensaver types. Registration order is the order
/// screensavers are offered in the selector.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: Vec<SaverEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screensaver type.
    pub fn register(&mut self, entry: SaverEntry) -> Result<(), RegistryError> {
        if entry.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.find(entry.name).is_some() {
            return Err(RegistryError::Duplicate(entry.name));
        }
        tracing::debug!(name = entry.name, "registered screensaver");
        self.entries.push(entry);
        Ok(())
    }

    /// Copy of all entries in registration order.
    pub fn get_all(&self) -> Vec<SaverEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[SaverEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&SaverEntry> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// Menu index of the named entry, ignoring ASCII case.
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Instantiate the named screensaver.
    pub fn create(
        &self,
        name: &str,
        options: &SaverOptions,
    ) -> Result<Box<dyn Screensaver>, RegistryError> {
        self.find(name)
            .map(|entry| entry.create(options))
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Read access to the process-wide registry.
pub fn global() -> RwLockReadGuard<'static, Registry> {
    GLOBAL.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write access to the process-wide registry.
pub fn global_mut() -> RwLockWriteGuard<'static, Registry> {
    GLOBAL.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register a screensaver type in the process-wide registry.
pub fn register_global(entry: SaverEntry) -> Result<(), RegistryError> {
    global_mut().register(entry)
}

/// Snapshot of the process-wide registry.
pub fn global_snapshot() -> Registry {
    global().clone()
}
