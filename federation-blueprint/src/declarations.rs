//! Mapping and hydration declarations attached to the overall schema.
//!
//! Directive extraction happens in the external schema-parsing pass; that pass
//! hands the compiler these plain, statically-typed values instead of the
//! compiler re-inspecting directives (or downcasting extended definitions) at
//! build time.

use apollo_compiler::Name;
use serde_json_bytes::Value;

use crate::coordinates::FieldCoordinates;
use crate::hydration::HydrationBatchMatchStrategy;

/// All declarations extracted from one overall schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaDeclarations {
    pub types: Vec<TypeMappingDeclaration>,
    pub fields: Vec<FieldDeclaration>,
}

/// A type-level rename declaration.
#[derive(Debug, Clone)]
pub struct TypeMappingDeclaration {
    pub overall_name: Name,
    pub underlying_name: Name,
}

/// The declaration carried by one overall-schema field.
#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    pub location: FieldCoordinates,
    pub kind: FieldDeclarationKind,
}

/// A field carries at most one declaration; renames and hydration are mutually
/// exclusive by construction.
#[derive(Debug, Clone)]
pub enum FieldDeclarationKind {
    Mapping(FieldMappingDeclaration),
    Hydration(HydrationDeclaration),
}

/// A field-level rename declaration.
#[derive(Debug, Clone)]
pub struct FieldMappingDeclaration {
    /// Path to the underlying value, relative to the declaring type. Only
    /// single-segment paths (plain renames) are currently supported.
    pub input_path: Vec<Name>,
}

/// Declares that a field's value is resolved by a secondary query, either
/// against another service or within the same service's result.
#[derive(Debug, Clone)]
pub struct HydrationDeclaration {
    /// The service to fetch from. `None` declares a same-service forward,
    /// compiled to a pull field.
    pub source_service: Option<String>,
    /// Path from the source service's query root to the field to fetch: an
    /// optional synthetic container segment followed by the top-level field.
    pub path_to_source_field: Vec<Name>,
    /// Explicit batch size; the compiler default applies when absent.
    pub batch_size: Option<u32>,
    pub batch_match_strategy: Option<HydrationBatchMatchStrategy>,
    pub arguments: Vec<HydrationArgumentBinding>,
}

/// Binds one argument of the backend source field.
#[derive(Debug, Clone)]
pub struct HydrationArgumentBinding {
    pub name: Name,
    pub value: ArgumentBindingValue,
}

#[derive(Debug, Clone)]
pub enum ArgumentBindingValue {
    /// A static value sent as-is.
    Literal(Value),
    /// A path into the object currently being resolved; the execution engine
    /// substitutes the live parent result.
    FromParent(Vec<Name>),
}
