use thiserror::Error;

/// Faults in the caller's own schema declarations. Anything here means the
/// graph would be silently incomplete, so analysis aborts instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
  #[error("schema `{id}` referenced from `{referrer}` is not present in the catalog")]
  UnknownSchema { id: String, referrer: String },

  #[error("relationship `{schema}.{field}` does not resolve to any schema type")]
  UnresolvedRelationship { schema: String, field: String },

  #[error("subset source `{source}` declared by `{schema}` is not present in the catalog")]
  UnresolvedSubset { schema: String, r#source: String },
}
