//! Hydration call shapes shared between declarations and the compiled blueprint.

use apollo_compiler::Name;
use serde::Serialize;
use serde_json_bytes::Value;

/// One argument of the backend call issued for a hydration field.
///
/// The argument list of a hydration field follows the backend field's declared
/// argument order, which the execution engine reproduces when it issues the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrationArgument {
    pub name: Name,
    pub value_source: ValueSource,
}

/// Where a hydration argument's value comes from at execution time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValueSource {
    /// A static value carried over from the declaration, sent as-is.
    Literal(Value),
    /// A path into the object currently being resolved, substituted against the
    /// actual parent result at execution time.
    ParentField(Vec<Name>),
}

/// How one element of a batched backend response is matched back to the request
/// element that asked for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum HydrationBatchMatchStrategy {
    /// Response elements line up with requesting objects by position.
    #[default]
    ByIndex,
    /// Response elements carry a key field whose value identifies the
    /// requesting object.
    ByKey { underlying_key_field: Name },
}
