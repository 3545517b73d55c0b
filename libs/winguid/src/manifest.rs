//! TOML manifest of well-known GUIDs.
//!
//! ```toml
//! [guids]
//! IUnknown = "{00000000-0000-0000-c000-000000000046}"
//! IClassFactory = "00000001-0000-0000-C000-000000000046"
//! ```
//!
//! Values may use any textual form the parser accepts. Entries are kept
//! sorted by name, which is also the order they are registered in.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ManifestError;
use crate::registry::Registry;
use crate::Guid;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    guids: BTreeMap<String, String>,
}

/// A parsed set of name to GUID pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, Guid>,
}

impl Manifest {
    /// Parses a manifest from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(content)?;

        let mut entries = BTreeMap::new();
        for (name, text) in raw.guids {
            let guid = Guid::parse(&text).map_err(|source| ManifestError::InvalidGuid {
                name: name.clone(),
                source,
            })?;
            entries.insert(name, guid);
        }

        debug!(entries = entries.len(), "parsed GUID manifest");
        Ok(Self { entries })
    }

    /// Reads and parses a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading GUID manifest");
        Self::from_toml_str(&content)
    }

    /// Returns the GUID listed under `name`.
    pub fn get(&self, name: &str) -> Option<Guid> {
        self.entries.get(name).copied()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the manifest lists nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Guid)> {
        self.entries.iter().map(|(name, guid)| (name.as_str(), *guid))
    }

    /// Registers every entry, stopping at the first conflict.
    pub fn apply(&self, registry: &Registry) -> Result<(), ManifestError> {
        registry.register_all(self.iter())?;
        Ok(())
    }
}

impl Registry {
    /// Creates a registry seeded with a manifest's entries.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        let registry = Self::new();
        manifest.apply(&registry)?;
        Ok(registry)
    }
}
