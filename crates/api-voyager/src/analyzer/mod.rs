pub(crate) mod builder;
pub(crate) mod errors;
pub(crate) mod metrics;
pub(crate) mod module_tree;
pub mod orchestrator;
pub(crate) mod renderer;
pub(crate) mod types;
pub(crate) mod unwrap;

pub use errors::AnalysisError;
pub use metrics::AnalysisStats;
pub use renderer::{FieldVisibility, RenderOptions};

#[cfg(test)]
mod tests;
