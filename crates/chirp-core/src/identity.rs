//! Identity references - validated opaque identifiers for users and content.
//!
//! Every identifier that crosses the API boundary goes through [`IdentityRef::parse`]
//! or [`ContentId::parse`] exactly once. Only the canonical hyphenated UUID form
//! (36 characters) is accepted; the simple, braced and URN spellings that
//! `Uuid::parse_str` tolerates are rejected so that one identity has one spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Length of the canonical hyphenated UUID form.
const CANONICAL_LEN: usize = 36;

fn parse_canonical(raw: &str, what: &str) -> Result<Uuid, DomainError> {
    if raw.len() != CANONICAL_LEN {
        return Err(DomainError::InvalidReference(format!(
            "{what} must be a {CANONICAL_LEN}-character identifier, got {raw:?}"
        )));
    }
    Uuid::try_parse(raw)
        .map_err(|e| DomainError::InvalidReference(format!("{what} {raw:?} is malformed: {e}")))
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            /// Validate an externally supplied reference.
            pub fn parse(raw: &str) -> Result<Self, DomainError> {
                parse_canonical(raw, $what).map(Self)
            }

            /// Generate a fresh identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0.hyphenated().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }
    };
}

opaque_id!(
    /// Reference to a user identity (content owner, liker, or current actor).
    IdentityRef,
    "identity reference"
);

opaque_id!(
    /// Identifier of a tweet or video.
    ContentId,
    "content id"
);
