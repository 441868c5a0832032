mod renderer_tests;

use indexmap::IndexMap;

use crate::catalog::{Catalog, FieldDecl, RelationshipDecl, RouteDescriptor, SchemaDescriptor, TypeRef};

pub(super) fn primitive(name: &str) -> TypeRef {
  TypeRef::Primitive { name: name.to_string() }
}

pub(super) fn schema_ref(id: &str) -> TypeRef {
  TypeRef::Schema { id: id.to_string() }
}

pub(super) fn optional(inner: TypeRef) -> TypeRef {
  TypeRef::Optional { inner: Box::new(inner) }
}

pub(super) fn list(item: TypeRef) -> TypeRef {
  TypeRef::List { item: Box::new(item) }
}

pub(super) fn union(variants: Vec<TypeRef>) -> TypeRef {
  TypeRef::Union { variants }
}

pub(super) fn field(name: &str, type_name: &str, type_ref: TypeRef) -> FieldDecl {
  FieldDecl {
    name: name.to_string(),
    type_name: type_name.to_string(),
    type_ref: Some(type_ref),
    from_base: false,
    exclude: false,
  }
}

pub(super) fn schema(module: &str, name: &str, fields: Vec<FieldDecl>) -> (String, SchemaDescriptor) {
  (
    format!("{module}.{name}"),
    SchemaDescriptor {
      name: name.to_string(),
      module: module.to_string(),
      fields,
      bases: vec![],
      relationships: vec![],
      subset_of: None,
    },
  )
}

pub(super) fn relationship(field: &str, target: TypeRef) -> RelationshipDecl {
  RelationshipDecl {
    field: field.to_string(),
    target,
  }
}

pub(super) fn route(id: &str, name: &str, module: &str, tags: &[&str], response: Option<TypeRef>) -> RouteDescriptor {
  RouteDescriptor {
    id: id.to_string(),
    name: name.to_string(),
    module: module.to_string(),
    tags: tags.iter().map(ToString::to_string).collect(),
    response,
    methods: vec![],
    path: None,
  }
}

pub(super) fn catalog(routes: Vec<RouteDescriptor>, schemas: Vec<(String, SchemaDescriptor)>) -> Catalog {
  Catalog {
    routes,
    schemas: schemas.into_iter().collect::<IndexMap<_, _>>(),
  }
}
