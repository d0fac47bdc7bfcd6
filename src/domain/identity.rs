use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::{Uuid, Variant};

use crate::error::validation::InvalidIdError;

/// Globally unique entity identifier.
///
/// Always a lower-cased, hyphenated UUID v4 string. Compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Generates a random v4 identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Validates and lower-cases an identifier string.
    ///
    /// # Returns
    /// - `Ok(EntityId)` - Value matches the UUID v4 shape in any case
    /// - `Err(InvalidIdError)` - Any other value, carried in the error unchanged
    pub fn parse(value: &str) -> Result<Self, InvalidIdError> {
        let lowered = value.to_lowercase();

        if is_uuid_v4(&lowered) {
            Ok(Self(lowered))
        } else {
            Err(InvalidIdError {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hyphenated 8-4-4-4-12 form, version nibble 4, RFC 4122 variant (`8|9|a|b`).
fn is_uuid_v4(value: &str) -> bool {
    // `Uuid::try_parse` also accepts simple, braced and urn forms; only the
    // hyphenated form is a valid identifier here.
    if value.len() != 36 {
        return false;
    }

    match Uuid::try_parse(value) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
