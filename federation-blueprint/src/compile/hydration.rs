//! Classifies hydration-declared fields by cross-referencing the declaration
//! against the target service's actual field shapes.
//!
//! A declaration that stays within the service owning the field's parent type
//! needs no secondary call and compiles to a pull field. Everything else
//! resolves its source field from the target service's query root and is
//! classified as batch hydration when that field is list-typed, single
//! hydration otherwise.

use apollo_compiler::Name;
use apollo_compiler::ast::FieldDefinition;
use apollo_compiler::ast::OperationType;
use apollo_compiler::collections::IndexMap;
use tracing::trace;

use crate::BlueprintOptions;
use crate::OverallSchema;
use crate::Service;
use crate::blueprint::ArtificialFieldDefinition;
use crate::blueprint::BatchHydrationField;
use crate::blueprint::HydrationField;
use crate::blueprint::PullField;
use crate::blueprint::UnderlyingType;
use crate::compile::arguments;
use crate::compile::field_at;
use crate::coordinates::FieldCoordinates;
use crate::declarations::HydrationDeclaration;
use crate::error::BlueprintError;
use crate::error::format_path;

pub(crate) fn classify(
    overall: &OverallSchema,
    services: &[Service],
    underlying_types: &IndexMap<Name, UnderlyingType>,
    location: &FieldCoordinates,
    declaration: &HydrationDeclaration,
    options: &BlueprintOptions,
) -> Result<ArtificialFieldDefinition, BlueprintError> {
    if declaration.path_to_source_field.is_empty() {
        return Err(BlueprintError::InvalidDeclaration {
            element: location.to_string(),
            message: "hydration path is empty".to_owned(),
        });
    }
    if declaration.batch_size == Some(0) {
        return Err(BlueprintError::InvalidDeclaration {
            element: location.to_string(),
            message: "explicit batch size must be positive".to_owned(),
        });
    }

    // The parent type's name in its own service, for recognizing same-service
    // declarations.
    let parent_underlying_name = underlying_types
        .get(&location.type_name)
        .map(|mapped| mapped.underlying_name.clone())
        .unwrap_or_else(|| location.type_name.clone());
    let owners: Vec<&Service> = services
        .iter()
        .filter(|service| {
            service
                .underlying_schema
                .types
                .contains_key(&parent_underlying_name)
        })
        .collect();

    let source_service = match &declaration.source_service {
        None => {
            // A path declaration with no distinct service forwards within the
            // owning service's own result.
            let owner = match owners.as_slice() {
                [owner] => Some(*owner),
                _ => None,
            };
            return pull_field(location, declaration, owner, &parent_underlying_name);
        }
        Some(service_name) => {
            let service = services
                .iter()
                .find(|service| service.name == *service_name)
                .ok_or_else(|| BlueprintError::UnknownService {
                    location: location.clone(),
                    service_name: service_name.clone(),
                })?;
            if owners.iter().any(|owner| owner.name == *service_name) {
                // Declared service is the parent type's own service; no
                // cross-service call is needed.
                return pull_field(location, declaration, Some(service), &parent_underlying_name);
            }
            service
        }
    };

    let source_field = resolve_source_field(source_service, location, declaration)?;
    let arguments = arguments::resolve(overall, location, source_service, source_field, declaration)?;

    if source_field.ty.is_list() {
        trace!(field = %location, service = %source_service.name, "classified batch hydration");
        Ok(ArtificialFieldDefinition::BatchHydration(
            BatchHydrationField {
                location: location.clone(),
                source_service: source_service.name.clone(),
                path_to_source_field: declaration.path_to_source_field.clone(),
                arguments,
                batch_size: declaration
                    .batch_size
                    .unwrap_or(options.default_batch_size),
                batch_match_strategy: declaration.batch_match_strategy.clone().unwrap_or_default(),
            },
        ))
    } else {
        trace!(field = %location, service = %source_service.name, "classified single hydration");
        Ok(ArtificialFieldDefinition::Hydration(HydrationField {
            location: location.clone(),
            source_service: source_service.name.clone(),
            path_to_source_field: declaration.path_to_source_field.clone(),
            arguments,
        }))
    }
}

/// Walks the declared path from the service's query root to the field that
/// will serve the hydration call.
fn resolve_source_field<'service>(
    service: &'service Service,
    location: &FieldCoordinates,
    declaration: &HydrationDeclaration,
) -> Result<&'service FieldDefinition, BlueprintError> {
    service
        .underlying_schema
        .root_operation(OperationType::Query)
        .and_then(|root| {
            field_at(
                &service.underlying_schema,
                root,
                &declaration.path_to_source_field,
            )
        })
        .ok_or_else(|| BlueprintError::MissingSourceField {
            location: location.clone(),
            service_name: service.name.clone(),
            path: format_path(&declaration.path_to_source_field),
        })
}

/// Same-service forwarding. When the owning service is identifiable the path is
/// checked against the parent type's underlying field shape; otherwise no
/// single schema can authoritatively reject it and only the structural checks
/// above apply.
fn pull_field(
    location: &FieldCoordinates,
    declaration: &HydrationDeclaration,
    owner: Option<&Service>,
    parent_underlying_name: &Name,
) -> Result<ArtificialFieldDefinition, BlueprintError> {
    if let Some(service) = owner {
        field_at(
            &service.underlying_schema,
            parent_underlying_name,
            &declaration.path_to_source_field,
        )
        .ok_or_else(|| BlueprintError::MissingSourceField {
            location: location.clone(),
            service_name: service.name.clone(),
            path: format_path(&declaration.path_to_source_field),
        })?;
    }
    trace!(field = %location, "classified pull field");
    Ok(ArtificialFieldDefinition::Pull(PullField {
        location: location.clone(),
        path_to_source_field: declaration.path_to_source_field.clone(),
    }))
}
