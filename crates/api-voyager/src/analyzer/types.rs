use strum::Display;

use crate::catalog::SchemaRef;

/// Port name of the header cell on every schema node label. Entity edges
/// terminate here instead of on the node border.
pub const PK: &str = "pk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
  pub name: String,
  pub type_name: String,
  pub from_base: bool,
  /// Unwraps to another schema in the catalog.
  pub is_object: bool,
  pub is_exclude: bool,
}

#[derive(Debug, Clone)]
pub struct Tag {
  pub id: String,
  pub name: String,
  /// Route ids, in discovery order.
  pub routes: Vec<String>,
}

/// Synthetic node for one API endpoint.
#[derive(Debug, Clone)]
pub struct RouteNode {
  pub id: String,
  pub name: String,
  pub module: String,
  pub tags: Vec<String>,
  /// Short name of the response schema, shown in the route label.
  pub response_schema: String,
}

/// One node per unique fully-qualified schema name. Fields are attached at
/// creation and never change afterwards.
#[derive(Debug, Clone)]
pub struct SchemaNode {
  pub id: SchemaRef,
  pub name: String,
  pub module: String,
  pub fields: Vec<FieldInfo>,
}

impl SchemaNode {
  pub fn has_base_fields(&self) -> bool {
    self.fields.iter().any(|f| f.from_base)
  }

  /// Fields declared on this schema itself, in declaration order.
  pub fn own_fields(&self) -> impl Iterator<Item = &FieldInfo> {
    self.fields.iter().filter(|f| !f.from_base)
  }
}

/// Closed set of relations the renderer knows how to style. Adding a kind
/// here forces the style table in the renderer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EdgeKind {
  /// Route to its response schema.
  Entry,
  /// Schema to a schema appearing among its own field types.
  Child,
  /// Schema to a base schema it directly inherits from.
  Parent,
  /// Restricted view of another schema to its source schema.
  Subset,
  /// Declared association, anchored at the declaring field's port.
  Entity,
}

/// Directed relation between two node identities. `source`/`target` may
/// carry a `::port` anchor for edges terminating on a specific label row.
#[derive(Debug, Clone)]
pub struct Edge {
  pub source: String,
  pub target: String,
  pub kind: EdgeKind,
}

/// Everything one analysis run produced, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
  pub tags: Vec<Tag>,
  pub routes: Vec<RouteNode>,
  pub nodes: Vec<SchemaNode>,
  pub edges: Vec<Edge>,
}
