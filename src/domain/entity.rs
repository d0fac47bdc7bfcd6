use serde::Serialize;

use crate::domain::identity::EntityId;

/// A domain object identified by a stable identity.
///
/// Two entities are the same entity when their identities match, regardless of
/// their other properties.
pub trait Entity: Serialize + Clone + Send + Sync + 'static {
    /// Name used in error messages, e.g. `"Category"`.
    const NAME: &'static str;

    fn entity_id(&self) -> &EntityId;

    /// Compares by identity only.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }

    /// Flattens identity and properties into a plain JSON object.
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
