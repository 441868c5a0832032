//! High-level seam the CLI calls: catalog plus render options in, DOT text
//! plus analysis counters out. Everything underneath is synchronous and
//! pure; writing the output is the caller's job.

use crate::{
  analyzer::{
    builder::GraphBuilder,
    errors::AnalysisError,
    metrics::AnalysisStats,
    renderer::{RenderOptions, Renderer},
    types::Graph,
  },
  catalog::Catalog,
};

pub struct Voyager {
  catalog: Catalog,
  options: RenderOptions,
}

impl Voyager {
  pub fn new(catalog: Catalog, options: RenderOptions) -> Self {
    Self { catalog, options }
  }

  /// Builds the deduplicated node/edge registries from every route in the
  /// catalog.
  pub fn analyze(&self) -> Result<(Graph, AnalysisStats), AnalysisError> {
    let mut builder = GraphBuilder::new(&self.catalog);
    builder.register_all()?;
    Ok(builder.finish())
  }

  /// Runs the full pipeline and serializes the result to DOT.
  pub fn render_dot(&self) -> Result<(String, AnalysisStats), AnalysisError> {
    let (graph, stats) = self.analyze()?;
    let renderer = Renderer::new(self.options.clone());
    let dot = renderer.render_dot(&graph.tags, &graph.routes, &graph.nodes, &graph.edges);
    Ok((dot, stats))
  }
}
