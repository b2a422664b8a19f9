mod doc_fragment;
mod doc_renderer;

pub use doc_fragment::DocFragment;
pub use doc_renderer::DocRenderer;

use crate::TypeGraph;

/// Render one [`DocFragment`] per `@md`-annotated object type in `graph`.
///
/// Shorthand for `DocRenderer::new(graph).render()`.
pub fn render(graph: &TypeGraph) -> Vec<DocFragment> {
    DocRenderer::new(graph).render()
}
