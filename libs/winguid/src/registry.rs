//! Two-way registry between names and GUIDs.
//!
//! A [`Registry`] is an ordinary value: construct one, then share it with
//! `Arc<Registry>` wherever bindings are needed. Both directions live under a
//! single lock so a name and its GUID are always stored or rejected together.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::error::RegistryError;
use crate::Guid;

#[derive(Debug, Default)]
struct Bindings {
    by_name: HashMap<String, Guid>,
    by_guid: HashMap<Guid, String>,
}

/// Name to GUID bindings with duplicate detection.
#[derive(Debug, Default)]
pub struct Registry {
    bindings: RwLock<Bindings>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never leave the maps half-updated, so a poisoned lock still
    // holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Bindings> {
        self.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bindings> {
        self.bindings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Binds `name` to `guid`.
    ///
    /// Registering a pair that is already on file is a no-op.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::MultipleGuid`] if `name` is bound to another GUID.
    /// - [`RegistryError::DuplicateGuid`] if `guid` is bound to another name.
    pub fn register(&self, name: impl Into<String>, guid: Guid) -> Result<(), RegistryError> {
        let name = name.into();
        let mut bindings = self.write();

        if let Some(orig) = bindings.by_name.get(&name) {
            if *orig != guid {
                return Err(RegistryError::MultipleGuid {
                    name,
                    new: guid,
                    orig: *orig,
                });
            }
        }

        if let Some(orig) = bindings.by_guid.get(&guid) {
            if *orig != name {
                return Err(RegistryError::DuplicateGuid {
                    guid,
                    new: name,
                    orig: orig.clone(),
                });
            }
            trace!(name = %name, guid = %guid, "GUID already registered");
            return Ok(());
        }

        debug!(name = %name, guid = %guid, "registered GUID");
        bindings.by_guid.insert(guid, name.clone());
        bindings.by_name.insert(name, guid);
        Ok(())
    }

    /// Registers every pair in order, stopping at the first conflict.
    ///
    /// Pairs registered before the conflict stay registered.
    pub fn register_all<I, N>(&self, pairs: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (N, Guid)>,
        N: Into<String>,
    {
        for (name, guid) in pairs {
            self.register(name, guid)?;
        }
        Ok(())
    }

    /// Returns the GUID bound to `name`.
    pub fn guid_of(&self, name: &str) -> Option<Guid> {
        self.read().by_name.get(name).copied()
    }

    /// Returns the name bound to `guid`.
    pub fn name_of(&self, guid: &Guid) -> Option<String> {
        self.read().by_guid.get(guid).cloned()
    }

    /// Returns true if `name` is bound.
    pub fn contains_name(&self, name: &str) -> bool {
        self.read().by_name.contains_key(name)
    }

    /// Returns true if `guid` is bound.
    pub fn contains_guid(&self, guid: &Guid) -> bool {
        self.read().by_guid.contains_key(guid)
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.read().by_name.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.read().by_name.is_empty()
    }

    /// Returns a snapshot of all bindings, sorted by name.
    pub fn entries(&self) -> Vec<(String, Guid)> {
        let mut entries: Vec<(String, Guid)> = self
            .read()
            .by_name
            .iter()
            .map(|(name, guid)| (name.clone(), *guid))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
