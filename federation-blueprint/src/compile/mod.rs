//! The blueprint assembler: one pass over the overall schema's declarations,
//! merging the type map, field map, and artificial field classifications into a
//! single blueprint.

use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::ast::FieldDefinition;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::schema::Component;
use apollo_compiler::schema::ExtendedType;
use tracing::debug;

use crate::BlueprintOptions;
use crate::OverallSchema;
use crate::Service;
use crate::blueprint::ArtificialFieldDefinition;
use crate::blueprint::ExecutionBlueprint;
use crate::blueprint::UnderlyingField;
use crate::coordinates::FieldCoordinates;
use crate::declarations::FieldDeclarationKind;
use crate::error::BlueprintError;

mod arguments;
mod field_mapper;
mod hydration;
mod type_mapper;

pub(crate) fn compile(
    overall: &OverallSchema,
    services: &[Service],
    options: &BlueprintOptions,
) -> Result<ExecutionBlueprint, BlueprintError> {
    let underlying_types = type_mapper::underlying_types(overall)?;

    let mut underlying_fields: IndexMap<FieldCoordinates, UnderlyingField> = IndexMap::default();
    let mut artificial_fields: IndexMap<FieldCoordinates, ArtificialFieldDefinition> =
        IndexMap::default();

    for declaration in &overall.declarations.fields {
        let location = &declaration.location;
        if field_definition(&overall.schema, location).is_none() {
            return Err(BlueprintError::InvalidDeclaration {
                element: location.to_string(),
                message: "field does not exist in the overall schema".to_owned(),
            });
        }
        // Rename and hydration are mutually exclusive per field, and a field
        // carries at most one declaration of either kind.
        if underlying_fields.contains_key(location) || artificial_fields.contains_key(location) {
            return Err(BlueprintError::DuplicateFieldDeclaration {
                location: location.clone(),
            });
        }

        match &declaration.kind {
            FieldDeclarationKind::Mapping(mapping) => {
                let field = field_mapper::underlying_field(location, mapping)?;
                underlying_fields.insert(location.clone(), field);
            }
            FieldDeclarationKind::Hydration(hydration) => {
                let artificial = hydration::classify(
                    overall,
                    services,
                    &underlying_types,
                    location,
                    hydration,
                    options,
                )?;
                artificial_fields.insert(location.clone(), artificial);
            }
        }
    }

    debug!(
        types = underlying_types.len(),
        fields = underlying_fields.len(),
        artificial = artificial_fields.len(),
        "compiled execution blueprint"
    );
    Ok(ExecutionBlueprint {
        underlying_fields,
        underlying_types,
        artificial_fields,
    })
}

/// The output fields of a type, for the type kinds that have them.
pub(crate) fn output_fields(
    ty: &ExtendedType,
) -> Option<&IndexMap<Name, Component<FieldDefinition>>> {
    match ty {
        ExtendedType::Object(object) => Some(&object.fields),
        ExtendedType::Interface(interface) => Some(&interface.fields),
        _ => None,
    }
}

/// Looks up the field a pair of coordinates points at.
pub(crate) fn field_definition<'schema>(
    schema: &'schema Schema,
    location: &FieldCoordinates,
) -> Option<&'schema FieldDefinition> {
    let ty = schema.types.get(&location.type_name)?;
    output_fields(ty)?
        .get(&location.field_name)
        .map(|field| &***field)
}

/// Walks `path` field by field starting at the type named `start`, descending
/// through list and non-null wrappers, and returns the definition the last
/// segment names. `None` if any segment does not resolve.
pub(crate) fn field_at<'schema>(
    schema: &'schema Schema,
    start: &Name,
    path: &[Name],
) -> Option<&'schema FieldDefinition> {
    let mut type_name = start.clone();
    let mut resolved = None;
    for segment in path {
        let ty = schema.types.get(&type_name)?;
        let field = output_fields(ty)?.get(segment)?;
        type_name = field.ty.inner_named_type().clone();
        resolved = Some(&***field);
    }
    resolved
}
