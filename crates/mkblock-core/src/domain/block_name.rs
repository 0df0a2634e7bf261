//! The block name value object.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated block name.
///
/// Used as the directory name, the base name of every generated file, and the
/// value substituted for the template placeholder. Only ASCII letters, digits,
/// `_` and `-` are allowed, and the name must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockName(String);

impl BlockName {
    /// Validate `raw` and wrap it unchanged.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(DomainError::InvalidBlockName { name: raw.to_owned() })
        }
    }

    /// `true` when `raw` is non-empty and made only of allowed characters.
    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(is_allowed_char)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the name.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

const fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BlockName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BlockName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
