use crate::catalog::{SchemaRef, TypeRef};

/// Result of stripping optional/list/union wrappers from a type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unwrapped {
  /// Only primitives inside. Nothing to link to.
  Nothing,
  Single(SchemaRef),
  /// A union reaching several composite types.
  Many(Vec<SchemaRef>),
}

impl Unwrapped {
  pub fn single(&self) -> Option<&SchemaRef> {
    match self {
      Self::Single(id) => Some(id),
      Self::Nothing | Self::Many(_) => None,
    }
  }

  /// All reachable schema refs, regardless of arity.
  pub fn refs(&self) -> &[SchemaRef] {
    match self {
      Self::Nothing => &[],
      Self::Single(id) => std::slice::from_ref(id),
      Self::Many(ids) => ids,
    }
  }
}

/// Strips wrapping combinators and reports the composite types underneath.
/// Inspects type shape only: it never resolves fields, so self-referential
/// definitions unwrap without any cycle risk.
pub fn unwrap(type_ref: &TypeRef) -> Unwrapped {
  let mut refs: Vec<SchemaRef> = Vec::new();
  collect(type_ref, &mut refs);

  match refs.len() {
    0 => Unwrapped::Nothing,
    1 => Unwrapped::Single(refs.remove(0)),
    _ => Unwrapped::Many(refs),
  }
}

fn collect(type_ref: &TypeRef, refs: &mut Vec<SchemaRef>) {
  match type_ref {
    TypeRef::Primitive { .. } => {}
    TypeRef::Schema { id } => {
      if !refs.contains(id) {
        refs.push(id.clone());
      }
    }
    TypeRef::Optional { inner } => collect(inner, refs),
    TypeRef::List { item } => collect(item, refs),
    TypeRef::Union { variants } => {
      for variant in variants {
        collect(variant, refs);
      }
    }
  }
}
