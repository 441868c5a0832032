use indexmap::IndexMap;

use crate::{
  analyzer::{
    errors::AnalysisError,
    metrics::AnalysisStats,
    types::{Edge, EdgeKind, FieldInfo, Graph, PK, RouteNode, SchemaNode, Tag},
    unwrap::{Unwrapped, unwrap},
  },
  catalog::{Catalog, RouteDescriptor, SchemaDescriptor, SchemaRef},
};

/// Walks route response types and schema fields, producing deduplicated
/// node and edge registries. All registries are insertion-ordered so the
/// rendered output is stable across runs.
pub struct GraphBuilder<'a> {
  catalog: &'a Catalog,
  tags: IndexMap<String, Tag>,
  routes: IndexMap<String, RouteNode>,
  nodes: IndexMap<SchemaRef, SchemaNode>,
  /// Keyed by `(source identity, target identity)`. At most one edge per
  /// ordered pair; the first kind recorded wins.
  edges: IndexMap<(String, String), Edge>,
  stats: AnalysisStats,
}

impl<'a> GraphBuilder<'a> {
  pub fn new(catalog: &'a Catalog) -> Self {
    Self {
      catalog,
      tags: IndexMap::new(),
      routes: IndexMap::new(),
      nodes: IndexMap::new(),
      edges: IndexMap::new(),
      stats: AnalysisStats::default(),
    }
  }

  /// Registers every route of the catalog in declaration order.
  pub fn register_all(&mut self) -> Result<(), AnalysisError> {
    for route in &self.catalog.routes {
      self.register_route(route)?;
    }
    Ok(())
  }

  /// Registers one endpoint. Routes whose response type is absent or
  /// unwraps to a primitive contribute nothing; that is normal, not a
  /// fault.
  pub fn register_route(&mut self, route: &RouteDescriptor) -> Result<(), AnalysisError> {
    let targets = match &route.response {
      Some(type_ref) => unwrap(type_ref),
      None => Unwrapped::Nothing,
    };
    if targets.refs().is_empty() {
      self.stats.record_skipped_route();
      return Ok(());
    }

    for target in targets.refs() {
      self.ensure_node(target, &route.id)?;
    }

    if !self.routes.contains_key(&route.id) {
      let response_schema = targets
        .refs()
        .first()
        .and_then(|id| self.catalog.schema(id))
        .map(|descriptor| descriptor.name.clone())
        .unwrap_or_default();

      self.routes.insert(
        route.id.clone(),
        RouteNode {
          id: route.id.clone(),
          name: route.name.clone(),
          module: route.module.clone(),
          tags: route.tags.clone(),
          response_schema,
        },
      );
      self.stats.record_route();

      for tag in &route.tags {
        let entry = self.tags.entry(tag.clone()).or_insert_with(|| Tag {
          id: tag.clone(),
          name: tag.clone(),
          routes: Vec::new(),
        });
        if !entry.routes.contains(&route.id) {
          entry.routes.push(route.id.clone());
        }
      }
    }

    for target in targets.refs() {
      self.add_edge(route.id.clone(), target.clone(), EdgeKind::Entry);
      self.walk_schema(target)?;
    }

    Ok(())
  }

  /// Idempotent depth-first pre-order walk of one schema.
  ///
  /// Recursion happens only when a `child` pair is newly inserted, which is
  /// the sole guard against self-referential and mutually-referential
  /// schemas: the first path to reach a pair expands its target, every later
  /// path is cut. The reachable schema universe is finite, so each pair
  /// recurses at most once.
  pub fn walk_schema(&mut self, id: &str) -> Result<(), AnalysisError> {
    self.ensure_node(id, id)?;

    let catalog = self.catalog;
    let Some(descriptor) = catalog.schema(id) else {
      // ensure_node already rejected unknown ids
      return Ok(());
    };

    for base in &descriptor.bases {
      // bases absent from the catalog are plain mixins, not schemas
      if catalog.schema(base).is_none() {
        continue;
      }
      self.ensure_node(base, id)?;
      self.add_edge(id.to_string(), base.clone(), EdgeKind::Parent);
    }

    for field in descriptor.fields.iter().filter(|f| !f.from_base) {
      let Some(type_ref) = &field.type_ref else {
        continue;
      };
      // only single-schema fields become containment edges; primitives and
      // unions are recorded on the node but contribute nothing here
      if let Unwrapped::Single(target) = unwrap(type_ref) {
        self.ensure_node(&target, id)?;
        if self.add_edge(id.to_string(), target.clone(), EdgeKind::Child) {
          self.walk_schema(&target)?;
        }
      }
    }

    if let Some(source) = &descriptor.subset_of {
      if catalog.schema(source).is_none() {
        return Err(AnalysisError::UnresolvedSubset {
          schema: id.to_string(),
          source: source.clone(),
        });
      }
      self.ensure_node(source, id)?;
      self.add_edge(id.to_string(), source.clone(), EdgeKind::Subset);
    }

    for relationship in &descriptor.relationships {
      let targets = unwrap(&relationship.target);
      if targets.refs().is_empty() {
        return Err(AnalysisError::UnresolvedRelationship {
          schema: id.to_string(),
          field: relationship.field.clone(),
        });
      }
      for target in targets.refs() {
        self.ensure_node(target, id)?;
        self.add_edge(
          format!("{id}::f{}", relationship.field),
          format!("{target}::{PK}"),
          EdgeKind::Entity,
        );
      }
    }

    Ok(())
  }

  /// Creates the node for `id` the first time it is reached, attaching its
  /// declared field list once. Later calls are no-ops.
  fn ensure_node(&mut self, id: &str, referrer: &str) -> Result<(), AnalysisError> {
    if self.nodes.contains_key(id) {
      return Ok(());
    }

    let Some(descriptor) = self.catalog.schema(id) else {
      return Err(AnalysisError::UnknownSchema {
        id: id.to_string(),
        referrer: referrer.to_string(),
      });
    };

    let node = SchemaNode {
      id: id.to_string(),
      name: descriptor.name.clone(),
      module: descriptor.module.clone(),
      fields: Self::collect_fields(descriptor),
    };
    self.nodes.insert(id.to_string(), node);

    Ok(())
  }

  fn collect_fields(descriptor: &SchemaDescriptor) -> Vec<FieldInfo> {
    descriptor
      .fields
      .iter()
      .map(|field| FieldInfo {
        name: field.name.clone(),
        type_name: field.type_name.clone(),
        from_base: field.from_base,
        is_object: field
          .type_ref
          .as_ref()
          .is_some_and(|type_ref| !unwrap(type_ref).refs().is_empty()),
        is_exclude: field.exclude,
      })
      .collect()
  }

  /// Returns whether the ordered pair was newly inserted.
  fn add_edge(&mut self, source: String, target: String, kind: EdgeKind) -> bool {
    let key = (source.clone(), target.clone());
    if self.edges.contains_key(&key) {
      return false;
    }
    self.edges.insert(key, Edge { source, target, kind });
    true
  }

  pub fn finish(mut self) -> (Graph, AnalysisStats) {
    let graph = Graph {
      tags: self.tags.into_values().collect(),
      routes: self.routes.into_values().collect(),
      nodes: self.nodes.into_values().collect(),
      edges: self.edges.into_values().collect(),
    };
    self.stats.record_graph(&graph);
    (graph, self.stats)
  }
}
