//! # winguid
//!
//! Windows-style GUIDs: the value type, its textual codec, and a registry of
//! human-readable names.
//!
//! ## Textual Form
//!
//! GUIDs are always formatted as the braced, hyphenated, lowercase form:
//!
//! ```text
//! {770aae78-f26f-4dba-a829-253c83d1b387}
//! ```
//!
//! Parsing is lenient about presentation: braces and hyphens are optional and
//! hex digits may be either case, so all of these parse to the same value:
//!
//! - `{770aae78-f26f-4dba-a829-253c83d1b387}`
//! - `770AAE78-F26F-4DBA-A829-253C83D1B387`
//! - `770aae78f26f4dbaa829253c83d1b387`
//!
//! Parse errors carry either the offending byte and its offset, or the field
//! that was being read when the input ran out.
//!
//! ## Registry
//!
//! [`Registry`] binds names to GUIDs in both directions and rejects a name
//! claimed for two GUIDs or a GUID claimed by two names. It can be seeded from
//! a TOML [`Manifest`].

pub mod codec;
mod error;
mod guid;
mod macros;
mod manifest;
mod registry;

pub use codec::{decode_hex_digit, CANONICAL_LEN};
pub use error::{Field, ManifestError, ParseError, RegistryError};
pub use guid::Guid;
pub use manifest::Manifest;
pub use registry::Registry;
