mod type_graph;
mod type_graph_builder;
mod type_graph_validator;
mod type_validation_error;

pub use type_graph::TypeGraph;
pub use type_graph_builder::TypeGraphBuildError;
pub use type_graph_builder::TypeGraphBuilder;
pub(crate) use type_graph_validator::TypeGraphValidator;
pub use type_validation_error::TypeValidationError;
