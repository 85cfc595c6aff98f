use std::fmt;

use apollo_compiler::Name;
use serde::Serialize;
use serde::Serializer;

/// The unique key identifying a field within a schema: the name of the type
/// declaring the field plus the field's own name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldCoordinates {
    pub type_name: Name,
    pub field_name: Name,
}

impl FieldCoordinates {
    pub fn new(type_name: Name, field_name: Name) -> Self {
        Self {
            type_name,
            field_name,
        }
    }
}

impl fmt::Display for FieldCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

impl fmt::Debug for FieldCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Serialize for FieldCoordinates {
    /// Serialized as the `Type.field` display form so coordinates can key JSON maps.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use apollo_compiler::name;

    use super::*;

    #[test]
    fn displays_as_type_dot_field() {
        let coordinates = FieldCoordinates::new(name!("User"), name!("account"));
        assert_eq!(coordinates.to_string(), "User.account");
    }

    #[test]
    fn serializes_as_display_string() {
        let coordinates = FieldCoordinates::new(name!("User"), name!("account"));
        let json = serde_json::to_value(&coordinates).expect("serializes");
        assert_eq!(json, serde_json::json!("User.account"));
    }
}
