//! Blueprint compiler for a federated GraphQL gateway.
//!
//! Given the gateway's overall schema (with the mapping and hydration
//! declarations its parsing pass extracted) and the list of backend services it
//! federates, [`compile_blueprint`] statically computes how every declared type
//! and field maps to backend reality and returns an [`ExecutionBlueprint`] for
//! the execution engine to route queries with. Renamed types and fields become
//! lookup entries; fields that cannot be served directly become hydration,
//! batch-hydration, or pull definitions.
//!
//! Compilation is a pure, synchronous transform over in-memory schema graphs:
//! no I/O, no request handling, no mutation of its inputs. It either returns a
//! complete blueprint or fails with the first inconsistency it finds.

#![warn(
    rustdoc::broken_intra_doc_links,
    unreachable_pub,
    unreachable_patterns,
    unused,
    unused_qualifications,
    dead_code,
    while_true,
    unconditional_panic,
    clippy::all
)]

pub mod blueprint;
mod compile;
pub mod coordinates;
pub mod declarations;
pub mod error;
pub mod hydration;

use apollo_compiler::Schema;
use apollo_compiler::validation::Valid;
use apollo_compiler::validation::WithErrors;

pub use crate::blueprint::ExecutionBlueprint;
pub use crate::coordinates::FieldCoordinates;
use crate::declarations::SchemaDeclarations;
pub use crate::error::BlueprintError;

/// Default number of requesting objects served by one batched backend request,
/// used when a batch hydration declaration does not set an explicit size.
pub const DEFAULT_BATCH_SIZE: u32 = 200;

/// A backend service the gateway federates: its identity plus its own schema.
///
/// Owned by the caller and read-only to the compiler.
#[derive(Debug, Clone)]
pub struct Service {
    pub name: String,
    pub underlying_schema: Valid<Schema>,
}

impl Service {
    pub fn new(name: &str, underlying_schema: Valid<Schema>) -> Self {
        Self {
            name: name.to_owned(),
            underlying_schema,
        }
    }

    /// Convenience constructor parsing and validating the service's SDL.
    pub fn parse(name: &str, sdl: &str) -> Result<Self, WithErrors<Schema>> {
        let underlying_schema = Schema::parse_and_validate(sdl, name)?;
        Ok(Self {
            name: name.to_owned(),
            underlying_schema,
        })
    }
}

/// The gateway's public schema together with the declarations extracted from it.
#[derive(Debug, Clone)]
pub struct OverallSchema {
    pub schema: Valid<Schema>,
    pub declarations: SchemaDeclarations,
}

/// Compile-time tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintOptions {
    /// Batch size for batch hydration fields whose declaration does not set one
    /// explicitly. Defaults to [`DEFAULT_BATCH_SIZE`].
    pub default_batch_size: u32,
}

impl Default for BlueprintOptions {
    fn default() -> Self {
        Self {
            default_batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Compiles an execution blueprint from the overall schema and the service list.
///
/// Pure and total: identical inputs yield an identical blueprint, and the
/// result is either a complete blueprint or the first error found. Nothing is
/// published here; the caller decides when (and whether) to swap the new
/// blueprint into the serving path.
pub fn compile_blueprint(
    overall: &OverallSchema,
    services: &[Service],
    options: &BlueprintOptions,
) -> Result<ExecutionBlueprint, BlueprintError> {
    compile::compile(overall, services, options)
}

const _: () = {
    const fn assert_thread_safe<T: Sync + Send>() {}

    assert_thread_safe::<ExecutionBlueprint>();
    assert_thread_safe::<Service>();
};
