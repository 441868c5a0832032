pub mod list;
pub mod render;

pub use list::{list_routes, list_schemas};
pub use render::{RenderConfig, render_graph};
