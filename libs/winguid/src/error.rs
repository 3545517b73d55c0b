//! Error types for GUID parsing, registration, and manifest loading.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::Guid;

/// The GUID field being read when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The leading 32-bit field.
    V1,
    /// The first 16-bit field.
    V2,
    /// The second 16-bit field.
    V3,
    /// The first byte of the trailing array.
    V4Low,
    /// The second byte of the trailing array.
    V4Next,
    /// The last six bytes of the trailing array.
    V4Tail,
}

impl Field {
    /// Returns the label used in error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::V1 => "V1",
            Field::V2 => "V2",
            Field::V3 => "V3",
            Field::V4Low => "V4[0]",
            Field::V4Next => "V4[1]",
            Field::V4Tail => "V4[2...]",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur when parsing a GUID from text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A byte that is not a hex digit (or not `}` after the last field).
    #[error("{} (at {offset}) is not valid in hex", escape_byte(.byte))]
    BadCharacter { byte: u8, offset: usize },

    /// The input ended before the field could be read.
    #[error("GUID sequence is not complete when parsing {field}")]
    Incomplete { field: Field },
}

impl ParseError {
    /// Returns the offset of the offending byte, if this is a bad character.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::BadCharacter { offset, .. } => Some(*offset),
            ParseError::Incomplete { .. } => None,
        }
    }

    /// Returns true if the input was too short.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParseError::Incomplete { .. })
    }
}

fn escape_byte(byte: &u8) -> std::ascii::EscapeDefault {
    std::ascii::escape_default(*byte)
}

/// Errors returned by the name registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is already bound to another GUID.
    #[error("{name} has multiple GUIDs: {new} and {orig}")]
    MultipleGuid { name: String, new: Guid, orig: Guid },

    /// The GUID is already bound to another name.
    #[error("{guid} is assigned to {new} and {orig}")]
    DuplicateGuid {
        guid: Guid,
        new: String,
        orig: String,
    },
}

impl RegistryError {
    /// Returns true if a name was claimed for two GUIDs.
    pub fn is_multiple_guid(&self) -> bool {
        matches!(self, RegistryError::MultipleGuid { .. })
    }

    /// Returns true if a GUID was claimed by two names.
    pub fn is_duplicate_guid(&self) -> bool {
        matches!(self, RegistryError::DuplicateGuid { .. })
    }
}

/// Errors that can occur when loading or applying a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The manifest is not valid TOML or has the wrong shape.
    #[error("invalid manifest: {0}")]
    Toml(#[from] toml::de::Error),

    /// An entry's value is not a GUID.
    #[error("invalid GUID for '{name}': {source}")]
    InvalidGuid {
        name: String,
        #[source]
        source: ParseError,
    },

    /// An entry conflicts with a registry binding.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        let labels: Vec<String> = [
            Field::V1,
            Field::V2,
            Field::V3,
            Field::V4Low,
            Field::V4Next,
            Field::V4Tail,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(labels, ["V1", "V2", "V3", "V4[0]", "V4[1]", "V4[2...]"]);
    }

    #[test]
    fn test_bad_character_message() {
        let err = ParseError::BadCharacter {
            byte: b'-',
            offset: 17,
        };
        assert_eq!(err.to_string(), "- (at 17) is not valid in hex");
        assert_eq!(err.offset(), Some(17));
        assert!(!err.is_incomplete());
    }

    #[test]
    fn test_bad_character_message_escapes_non_ascii() {
        let err = ParseError::BadCharacter {
            byte: 0xc3,
            offset: 3,
        };
        assert_eq!(err.to_string(), "\\xc3 (at 3) is not valid in hex");
    }

    #[test]
    fn test_incomplete_message() {
        let err = ParseError::Incomplete {
            field: Field::V4Tail,
        };
        assert_eq!(
            err.to_string(),
            "GUID sequence is not complete when parsing V4[2...]"
        );
        assert_eq!(err.offset(), None);
        assert!(err.is_incomplete());
    }

    #[test]
    fn test_registry_messages() {
        let a = Guid::from_fields(1, 2, 3, [1; 8]);
        let b = Guid::from_fields(0xff, 0, 0, [0; 8]);

        let multiple = RegistryError::MultipleGuid {
            name: "IFoo".to_string(),
            new: b,
            orig: a,
        };
        assert_eq!(
            multiple.to_string(),
            "IFoo has multiple GUIDs: {000000ff-0000-0000-0000-000000000000} and {00000001-0002-0003-0101-010101010101}"
        );
        assert!(multiple.is_multiple_guid());

        let duplicate = RegistryError::DuplicateGuid {
            guid: a,
            new: "IBar".to_string(),
            orig: "IFoo".to_string(),
        };
        assert_eq!(
            duplicate.to_string(),
            "{00000001-0002-0003-0101-010101010101} is assigned to IBar and IFoo"
        );
        assert!(duplicate.is_duplicate_guid());
    }
}
