//! Derives field renames from single-segment field mapping declarations.

use crate::blueprint::UnderlyingField;
use crate::coordinates::FieldCoordinates;
use crate::declarations::FieldMappingDeclaration;
use crate::error::BlueprintError;
use crate::error::format_path;

pub(crate) fn underlying_field(
    location: &FieldCoordinates,
    mapping: &FieldMappingDeclaration,
) -> Result<UnderlyingField, BlueprintError> {
    match mapping.input_path.as_slice() {
        [] => Err(BlueprintError::InvalidDeclaration {
            element: location.to_string(),
            message: "field mapping has an empty path".to_owned(),
        }),
        [underlying_name] => Ok(UnderlyingField {
            parent_type_name: location.type_name.clone(),
            overall_name: location.field_name.clone(),
            underlying_name: underlying_name.clone(),
        }),
        path => Err(BlueprintError::UnsupportedFieldMappingPath {
            location: location.clone(),
            path: format_path(path),
        }),
    }
}
