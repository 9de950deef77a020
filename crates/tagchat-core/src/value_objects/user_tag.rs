//! User tag - public 6-digit identifier used for friend lookup
//!
//! Distinct from the internal Snowflake id: tags are short, human-shareable,
//! and allocated randomly at registration.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Public 6-digit user tag (`"100000"` through `"999999"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserTag(String);

impl UserTag {
    /// Lowest tag value ever issued
    pub const MIN: u32 = 100_000;
    /// Highest tag value ever issued
    pub const MAX: u32 = 999_999;

    /// Parse a tag from its string form
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTag` unless the input is exactly six ASCII
    /// digits. Tags below [`Self::MIN`] are syntactically valid but never
    /// issued, so they simply resolve to no user.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidTag(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Draw a uniformly random tag
    ///
    /// Uniqueness is the caller's concern; see the tag allocator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX).to_string())
    }

    /// Get the tag as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserTag::parse(s)
    }
}

impl<'de> Deserialize<'de> for UserTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserTag::parse(&s).map_err(serde::de::Error::custom)
    }
}
