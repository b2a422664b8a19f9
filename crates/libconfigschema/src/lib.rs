//! Compiles a merged GraphQL type graph into a JSON Schema document that
//! describes a configuration object, plus Markdown docs for selected types.
//!
//! The usual flow is:
//!
//! 1. Load SDL into a [`TypeGraphBuilder`] and [`build`](TypeGraphBuilder::build)
//!    an immutable [`TypeGraph`].
//! 2. [`json_schema::compile`] the graph against a root type.
//! 3. [`markdown::render`] the `@md`-annotated types.

pub(crate) mod ast;
pub mod directives;
pub mod file_reader;
pub mod graph;
pub mod json_schema;
pub mod loc;
pub mod markdown;
pub mod types;

pub use graph::TypeGraph;
pub use graph::TypeGraphBuildError;
pub use graph::TypeGraphBuilder;

#[cfg(test)]
mod test;
