use apollo_compiler::Name;
use itertools::Itertools;
use thiserror::Error;

use crate::coordinates::FieldCoordinates;

/// Failures detected while compiling an execution blueprint.
///
/// Every variant is a static configuration defect in the overall schema's
/// declarations. The first one detected aborts the build; no partial blueprint
/// is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlueprintError {
    /// A hydration declaration names a service absent from the supplied list.
    #[error(
        "hydration for \"{location}\" references service \"{service_name}\" which is not in the service list"
    )]
    UnknownService {
        location: FieldCoordinates,
        service_name: String,
    },

    /// A declared path does not resolve against the target service's schema.
    #[error(
        "hydration for \"{location}\": path \"{path}\" does not resolve to a field in service \"{service_name}\""
    )]
    MissingSourceField {
        location: FieldCoordinates,
        service_name: String,
        path: String,
    },

    /// An argument binding references a nonexistent path, or a required backend
    /// argument is unbound.
    #[error("hydration for \"{location}\", argument \"{argument_name}\": {message}")]
    UnresolvableArgument {
        location: FieldCoordinates,
        argument_name: Name,
        message: String,
    },

    /// Two type mappings collide on the same overall type name.
    #[error("duplicate type mapping for overall type \"{overall_name}\"")]
    DuplicateTypeMapping { overall_name: Name },

    /// Two field declarations collide on the same coordinates.
    #[error("duplicate declaration for field \"{location}\"")]
    DuplicateFieldDeclaration { location: FieldCoordinates },

    /// A declaration is structurally malformed.
    #[error("invalid declaration for \"{element}\": {message}")]
    InvalidDeclaration { element: String, message: String },

    /// Field mappings only support plain renames; deeper paths are rejected
    /// rather than silently dropped.
    #[error(
        "field mapping for \"{location}\" uses the multi-segment path \"{path}\", which is not supported"
    )]
    UnsupportedFieldMappingPath {
        location: FieldCoordinates,
        path: String,
    },
}

pub(crate) fn format_path(path: &[Name]) -> String {
    path.iter().join(".")
}
