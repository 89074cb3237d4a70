//! TypeScript type definition generation from GraphQL introspection.
//!
//! The input is a parsed introspection document (the JSON result of querying
//! an endpoint for its own type system); the output is a TypeScript document
//! declaring one type per schema entity, preceded by a fixed preamble of
//! utility aliases and the request/response envelope. Retrieval of the
//! introspection JSON and writing of the output belong to the caller.
//!
//! ```
//! let document = serde_json::json!({
//!     "data": {
//!         "__schema": {
//!             "queryType": { "name": "Query" },
//!             "types": [{
//!                 "kind": "OBJECT",
//!                 "name": "Query",
//!                 "fields": [{
//!                     "name": "version",
//!                     "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "String" } }
//!                 }]
//!             }]
//!         }
//!     }
//! });
//!
//! let schema = graphql_typegen::Schema::from_json_value(document).unwrap();
//! let config = graphql_typegen::GeneratorConfig::default();
//! let typescript = graphql_typegen::generate(&schema, &config).unwrap();
//!
//! assert!(typescript.contains("interface Query"));
//! assert!(typescript.contains("version: NonNull<string>;"));
//! ```
//!
//! Output ordering is a contract: definitions are sorted by kind (scalars,
//! enums, unions, interfaces, objects, input objects) and then by name, so
//! generated files diff cleanly. For incremental consumption, [`Blocks`]
//! yields the same document one chunk at a time and [`block_stream()`] wraps
//! it for stream-based consumers.

mod config;
mod emit;
mod error;
mod introspection;
mod render;
mod scalars;

pub use config::GeneratorConfig;
pub use emit::{block_stream, generate, Blocks};
pub use error::Error;
pub use introspection::{
    Directive, EnumValue, Field, InputValue, NamedType, Schema, Type, TypeKind, TypeRef,
};
pub use scalars::ScalarMap;
