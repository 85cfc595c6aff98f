//! The compiled output: how every declared type and field of the overall schema
//! maps to backend reality.

use apollo_compiler::Name;
use apollo_compiler::collections::IndexMap;
use serde::Serialize;

use crate::coordinates::FieldCoordinates;
use crate::hydration::HydrationArgument;
use crate::hydration::HydrationBatchMatchStrategy;

/// The compiled mapping from the overall schema to the underlying services.
///
/// Built once per schema build and never mutated afterwards. A rebuild produces
/// a fully independent instance; callers publish it by swapping a shared
/// reference (e.g. an `Arc`), never by editing the previous one in place, so
/// in-flight requests keep a consistent view.
///
/// Types and fields without declarations are absent from these maps: absence
/// means identity mapping, resolved lazily by the execution engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionBlueprint {
    /// Field renames, keyed by the field's overall coordinates.
    pub underlying_fields: IndexMap<FieldCoordinates, UnderlyingField>,
    /// Type renames, keyed by the overall type name.
    pub underlying_types: IndexMap<Name, UnderlyingType>,
    /// Fields the execution engine must resolve itself rather than proxy.
    /// Disjoint from `underlying_fields`: a field is renamed or artificial,
    /// never both.
    pub artificial_fields: IndexMap<FieldCoordinates, ArtificialFieldDefinition>,
}

/// A type-level rename: the overall schema exposes `overall_name` for a type
/// the owning service calls `underlying_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnderlyingType {
    pub overall_name: Name,
    pub underlying_name: Name,
}

/// A field-level rename, scoped to one declaring type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnderlyingField {
    pub parent_type_name: Name,
    pub overall_name: Name,
    pub underlying_name: Name,
}

/// A field whose value cannot be proxied directly and needs a dedicated
/// resolution strategy at execution time.
///
/// This is a closed set: the execution engine matches it exhaustively, so
/// adding a variant is a compile-time-visible change everywhere it is consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArtificialFieldDefinition {
    Hydration(HydrationField),
    BatchHydration(BatchHydrationField),
    Pull(PullField),
}

impl ArtificialFieldDefinition {
    pub fn location(&self) -> &FieldCoordinates {
        match self {
            Self::Hydration(field) => &field.location,
            Self::BatchHydration(field) => &field.location,
            Self::Pull(field) => &field.location,
        }
    }
}

/// A single-item fetch against another service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrationField {
    pub location: FieldCoordinates,
    pub source_service: String,
    /// Path from the source service's query root to the field to fetch.
    pub path_to_source_field: Vec<Name>,
    pub arguments: Vec<HydrationArgument>,
}

/// One list-typed backend fetch serving a whole batch of requesting objects,
/// with results matched back individually.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchHydrationField {
    pub location: FieldCoordinates,
    pub source_service: String,
    pub path_to_source_field: Vec<Name>,
    pub arguments: Vec<HydrationArgument>,
    /// Maximum number of requesting objects served by one backend call.
    pub batch_size: u32,
    pub batch_match_strategy: HydrationBatchMatchStrategy,
}

/// A value forwarded from a nested path already present in the same service's
/// result. No secondary request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullField {
    pub location: FieldCoordinates,
    pub path_to_source_field: Vec<Name>,
}
