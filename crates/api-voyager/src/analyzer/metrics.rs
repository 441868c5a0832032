use crate::analyzer::types::{EdgeKind, Graph};

/// Counters reported after one analysis run, for verbose CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisStats {
  pub routes_registered: usize,
  pub routes_skipped: usize,
  pub tags: usize,
  pub schema_nodes: usize,
  pub entry_edges: usize,
  pub child_edges: usize,
  pub parent_edges: usize,
  pub subset_edges: usize,
  pub entity_edges: usize,
}

impl AnalysisStats {
  pub fn record_route(&mut self) {
    self.routes_registered += 1;
  }

  pub fn record_skipped_route(&mut self) {
    self.routes_skipped += 1;
  }

  pub fn record_graph(&mut self, graph: &Graph) {
    self.tags = graph.tags.len();
    self.schema_nodes = graph.nodes.len();
    for edge in &graph.edges {
      match edge.kind {
        EdgeKind::Entry => self.entry_edges += 1,
        EdgeKind::Child => self.child_edges += 1,
        EdgeKind::Parent => self.parent_edges += 1,
        EdgeKind::Subset => self.subset_edges += 1,
        EdgeKind::Entity => self.entity_edges += 1,
      }
    }
  }

  pub fn edges(&self) -> usize {
    self.entry_edges + self.child_edges + self.parent_edges + self.subset_edges + self.entity_edges
  }
}
