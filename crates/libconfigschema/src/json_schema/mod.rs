mod compiled_schema;
mod scalar_mapper;
mod schema_compiler;
mod schema_node;

pub use compiled_schema::CompiledSchema;
pub use compiled_schema::DRAFT_04_SCHEMA_URI;
pub use scalar_mapper::map_scalar;
pub(crate) use scalar_mapper::unknown_object;
pub use schema_compiler::compile;
pub use schema_compiler::CompileError;
pub use schema_compiler::SchemaCompiler;
pub use schema_node::JsonType;
pub use schema_node::ObjectSchema;
pub use schema_node::SchemaNode;

#[cfg(test)]
mod tests;
