//! The GUID value type.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::ParseError;

/// A 128-bit globally unique identifier in the Windows layout.
///
/// The value is one 32-bit field, two 16-bit fields, and an 8-byte array, in
/// that order. Two GUIDs are equal when all four fields are equal.
///
/// `Display` and serde use the canonical form
/// `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid {
    part1: u32,
    part2: u16,
    part3: u16,
    part4: [u8; 8],
}

impl Guid {
    /// The all-zero GUID.
    pub const NIL: Self = Self::from_fields(0, 0, 0, [0; 8]);

    /// Creates a GUID from its four fields.
    #[must_use]
    pub const fn from_fields(part1: u32, part2: u16, part3: u16, part4: [u8; 8]) -> Self {
        Self {
            part1,
            part2,
            part3,
            part4,
        }
    }

    /// Returns the four fields in order.
    #[must_use]
    pub const fn as_fields(&self) -> (u32, u16, u16, &[u8; 8]) {
        (self.part1, self.part2, self.part3, &self.part4)
    }

    /// Returns the 32-bit field.
    #[must_use]
    pub const fn part1(&self) -> u32 {
        self.part1
    }

    /// Returns the first 16-bit field.
    #[must_use]
    pub const fn part2(&self) -> u16 {
        self.part2
    }

    /// Returns the second 16-bit field.
    #[must_use]
    pub const fn part3(&self) -> u16 {
        self.part3
    }

    /// Returns the 8-byte array.
    #[must_use]
    pub const fn part4(&self) -> [u8; 8] {
        self.part4
    }

    /// Returns true if every field is zero.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Parses a GUID from text.
    ///
    /// See [`codec::parse`] for the accepted forms.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        codec::parse(s)
    }

    /// Parses a GUID, panicking on malformed text.
    ///
    /// Only for well-known constants written in source; use [`Guid::parse`]
    /// for anything read at runtime.
    #[must_use]
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        codec::must_parse(s)
    }

    /// Formats the GUID in canonical form.
    #[must_use]
    pub fn format(&self) -> String {
        codec::format(self)
    }

    /// Returns the canonical form as ASCII bytes without allocating.
    #[must_use]
    pub fn encode(&self) -> [u8; codec::CANONICAL_LEN] {
        codec::encode(self)
    }

    /// Creates a GUID from its in-memory Windows layout.
    ///
    /// The first three fields are little-endian; the byte array is taken as is.
    #[must_use]
    pub fn from_bytes_le(bytes: [u8; 16]) -> Self {
        let mut part4 = [0u8; 8];
        part4.copy_from_slice(&bytes[8..]);
        Self {
            part1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            part2: u16::from_le_bytes([bytes[4], bytes[5]]),
            part3: u16::from_le_bytes([bytes[6], bytes[7]]),
            part4,
        }
    }

    /// Returns the in-memory Windows layout.
    #[must_use]
    pub fn to_bytes_le(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&self.part1.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.part2.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.part3.to_le_bytes());
        bytes[8..].copy_from_slice(&self.part4);
        bytes
    }

    /// Creates a GUID from a 128-bit integer read in text order.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        let tail = (value as u64).to_be_bytes();
        Self {
            part1: (value >> 96) as u32,
            part2: (value >> 80) as u16,
            part3: (value >> 64) as u16,
            part4: tail,
        }
    }

    /// Returns the GUID as a 128-bit integer in text order.
    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        (self.part1 as u128) << 96
            | (self.part2 as u128) << 80
            | (self.part3 as u128) << 64
            | u64::from_be_bytes(self.part4) as u128
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.encode();
        let text = std::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl FromStr for Guid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<uuid::Uuid> for Guid {
    fn from(uuid: uuid::Uuid) -> Self {
        let (part1, part2, part3, part4) = uuid.as_fields();
        Self::from_fields(part1, part2, part3, *part4)
    }
}

impl From<Guid> for uuid::Uuid {
    fn from(guid: Guid) -> Self {
        uuid::Uuid::from_fields(guid.part1, guid.part2, guid.part3, &guid.part4)
    }
}

impl serde::Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> serde::Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
