//! Serde model of the API catalog handed over by a framework-side
//! introspector: the flat list of routes plus one descriptor per composite
//! schema, keyed by fully-qualified name.

pub(crate) mod loader;

use indexmap::IndexMap;
use serde::Deserialize;

pub use loader::CatalogLoader;

/// Fully-qualified name of a composite schema (`module.path.TypeName`).
/// Node identity and dedup key throughout the analyzer.
pub type SchemaRef = String;

/// A type annotation as reported by the introspector, with wrapping
/// combinators preserved.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
  /// Scalars, enums and free-form structures. Nothing to link to.
  Primitive { name: String },
  /// A reference to a composite schema declared in the catalog.
  Schema { id: SchemaRef },
  Optional { inner: Box<TypeRef> },
  List { item: Box<TypeRef> },
  Union { variants: Vec<TypeRef> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteDescriptor {
  pub id: String,
  pub name: String,
  /// Dotted module path of the declaring handler, used for clustering.
  pub module: String,
  #[serde(default)]
  pub tags: Vec<String>,
  /// Declared response type, if any. Routes without one are skipped.
  #[serde(default)]
  pub response: Option<TypeRef>,
  #[serde(default)]
  pub methods: Vec<String>,
  #[serde(default)]
  pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
  pub name: String,
  /// Display string of the annotation, e.g. `list[Story]`.
  pub type_name: String,
  #[serde(default, rename = "type")]
  pub type_ref: Option<TypeRef>,
  /// Declared on an ancestor rather than on this schema.
  #[serde(default)]
  pub from_base: bool,
  /// Marked hidden in the schema declaration; still rendered, struck through.
  #[serde(default)]
  pub exclude: bool,
}

/// A declared non-containment association, anchored at one field of the
/// declaring schema (foreign-key style).
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipDecl {
  pub field: String,
  pub target: TypeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDescriptor {
  pub name: String,
  pub module: String,
  #[serde(default)]
  pub fields: Vec<FieldDecl>,
  /// Direct base classes by fully-qualified name. Names not present in the
  /// catalog are non-schema mixins and are ignored.
  #[serde(default)]
  pub bases: Vec<SchemaRef>,
  #[serde(default)]
  pub relationships: Vec<RelationshipDecl>,
  /// Set when this schema is declared as a restricted view of another.
  #[serde(default)]
  pub subset_of: Option<SchemaRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub routes: Vec<RouteDescriptor>,
  #[serde(default)]
  pub schemas: IndexMap<SchemaRef, SchemaDescriptor>,
}

impl Catalog {
  pub fn schema(&self, id: &str) -> Option<&SchemaDescriptor> {
    self.schemas.get(id)
  }
}
