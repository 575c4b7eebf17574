//! Shared traits implemented by the property-management entities.

use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the property tree.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
