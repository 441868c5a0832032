use indexmap::IndexMap;
use itertools::Itertools;

use crate::analyzer::{
  module_tree::{ModuleTree, build_module_tree},
  types::{Edge, EdgeKind, PK, RouteNode, SchemaNode, Tag},
};

/// Longest field name / type string shown before truncation.
const TRUNCATE_AT: usize = 25;

const FOCUS_HEADER_COLOR: &str = "tomato";
const HEADER_COLOR: &str = "#009485";

/// Which field rows appear inside a schema node label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisibility {
  /// Header row only.
  #[default]
  None,
  /// Only fields whose type resolves to another schema.
  Objects,
  /// Every own field, plus a placeholder row when inherited fields exist.
  All,
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
  pub field_visibility: FieldVisibility,
  /// Module-path prefix to cluster pen color. Each prefix is applied to at
  /// most one cluster: the first cluster matching it consumes it.
  pub module_colors: IndexMap<String, String>,
  /// Schema id whose header gets the focus fill.
  pub focus: Option<String>,
  /// When set, only clusters under this path prefix are eligible for
  /// `module_colors`.
  pub module_prefix: Option<String>,
  /// Cluster nodes by module path; flat lists otherwise.
  pub show_modules: bool,
  pub spline_line: bool,
}

impl RenderOptions {
  pub fn with_modules() -> Self {
    Self {
      show_modules: true,
      ..Self::default()
    }
  }
}

/// Serializes one analyzed graph into a Graphviz DOT document. Pure: the
/// same inputs yield byte-identical text.
pub struct Renderer {
  options: RenderOptions,
}

impl Renderer {
  pub fn new(options: RenderOptions) -> Self {
    Self { options }
  }

  fn truncate(text: &str) -> String {
    if text.chars().count() > TRUNCATE_AT {
      let cut: String = text.chars().take(TRUNCATE_AT).collect();
      format!("{cut}..")
    } else {
      text.to_string()
    }
  }

  /// Identities carrying a `::` anchor render as `"node":port`.
  fn anchor(identity: &str) -> String {
    match identity.split_once("::") {
      Some((node, port)) => format!("\"{node}\":{port}"),
      None => format!("\"{identity}\""),
    }
  }

  fn render_schema_label(&self, node: &SchemaNode) -> String {
    let shown: Vec<_> = match self.options.field_visibility {
      FieldVisibility::None => Vec::new(),
      FieldVisibility::Objects => node.own_fields().filter(|f| f.is_object).collect(),
      FieldVisibility::All => node.own_fields().collect(),
    };

    let mut rows: Vec<String> = Vec::new();
    if self.options.field_visibility == FieldVisibility::All && node.has_base_fields() {
      rows.push(
        r##"<tr><td align="left" cellpadding="8"><font color="#999">  Inherited Fields ... </font></td></tr>"##
          .to_string(),
      );
    }

    for field in shown {
      let name = Self::truncate(&field.name);
      let type_name = Self::truncate(&field.type_name);
      let text = if field.is_exclude {
        format!(r#"<s align="left">{name}: {type_name}</s>"#)
      } else {
        format!("{name}: {type_name}")
      };
      rows.push(format!(
        r#"<tr><td align="left" port="f{}" cellpadding="8"><font>  {text}    </font></td></tr>"#,
        field.name
      ));
    }

    let header_color = match &self.options.focus {
      Some(focus) if *focus == node.id => FOCUS_HEADER_COLOR,
      _ => HEADER_COLOR,
    };
    let header = format!(
      r#"<tr><td cellpadding="6" bgcolor="{header_color}" align="center" colspan="1" port="{PK}"> <font color="white">    {}    </font></td> </tr>"#,
      node.name
    );

    format!(
      r#"<<table border="1" cellborder="0" cellpadding="0" bgcolor="white"> {header} {}   </table>>"#,
      rows.join("")
    )
  }

  fn render_schema_node(&self, node: &SchemaNode) -> String {
    format!(
      r#"
                "{}" [
                    label = {}
                    shape = "plain"
                    margin="0.5,0.1"
                ];"#,
      node.id,
      self.render_schema_label(node)
    )
  }

  fn render_route_node(route: &RouteNode) -> String {
    let response_schema = Self::truncate(&route.response_schema);
    format!(
      r#"
                "{}" [
                    label = "    {} | {response_schema}    "
                    margin="0.5,0.1"
                    shape = "record"
                ];"#,
      route.id, route.name
    )
  }

  fn render_tag_node(tag: &Tag) -> String {
    format!(
      r#"
            "{}" [
                label = "    {}    "
                shape = "record"
                margin="0.5,0.1"
            ];"#,
      tag.id, tag.name
    )
  }

  /// The style table is closed over `EdgeKind`; a new kind fails to compile
  /// until a row is added here.
  fn render_edge(edge: &Edge) -> String {
    let source = Self::anchor(&edge.source);
    let target = Self::anchor(&edge.target);
    match edge.kind {
      EdgeKind::Entry => format!(r#"{source} -> {target} [style = "bold", minlen=3];"#),
      EdgeKind::Child => format!(r#"{source} -> {target} [style = "dashed", minlen=3];"#),
      EdgeKind::Parent => format!(
        r#"{source} -> {target} [style = "dashed", dir = "back", taillabel = "< inherit >", color = "purple", minlen=3];"#
      ),
      EdgeKind::Subset => format!(
        r#"{source} -> {target} [style = "dashed", dir = "back", taillabel = "< subset >", color = "orange", minlen=3];"#
      ),
      EdgeKind::Entity => {
        format!(r#"{source} -> {target} [style = "solid", dir = "back", arrowtail = "odot", minlen=3];"#)
      }
    }
  }

  /// Pen color for a module cluster. Prefixes are checked in configuration
  /// order and each one is consumed by its first matching cluster, so two
  /// subtrees sharing a prefix never both get the color.
  fn pick_color(&self, fullname: &str, remaining: &mut Vec<(String, String)>) -> Option<String> {
    if let Some(prefix) = &self.options.module_prefix
      && !fullname.starts_with(prefix.as_str())
    {
      return None;
    }
    let position = remaining.iter().position(|(prefix, _)| fullname.starts_with(prefix))?;
    Some(remaining.remove(position).1)
  }

  fn render_schema_module(&self, module: &ModuleTree<'_, SchemaNode>, remaining: &mut Vec<(String, String)>) -> String {
    let color = self.pick_color(&module.fullname, remaining);
    let (pencolor, penwidth) = match &color {
      Some(color) => (format!("pencolor = \"{color}\""), "penwidth = 3".to_string()),
      None => ("pencolor = \"#ccc\"".to_string(), String::new()),
    };

    let nodes = module.nodes.iter().map(|node| self.render_schema_node(node)).join("\n");
    let children = module
      .children
      .iter()
      .map(|child| self.render_schema_module(child, remaining))
      .join("\n");

    format!(
      r##"
                subgraph cluster_module_{} {{
                    tooltip="{}"
                    color = "#666"
                    style="rounded"
                    label = "  {}"
                    labeljust = "l"
                    {pencolor}
                    {penwidth}
                    {nodes}
                    {children}
                }}"##,
      module.fullname.replace('.', "_"),
      module.fullname,
      module.name
    )
  }

  fn render_route_module(&self, module: &ModuleTree<'_, RouteNode>) -> String {
    let nodes = module.nodes.iter().map(|route| Self::render_route_node(route)).join("\n");
    let children = module
      .children
      .iter()
      .map(|child| self.render_route_module(child))
      .join("\n");

    format!(
      r##"
                subgraph cluster_route_module_{} {{
                    tooltip="{}"
                    color = "#666"
                    style="rounded"
                    label = "  {}"
                    labeljust = "l"
                    {nodes}
                    {children}
                }}"##,
      module.fullname.replace('.', "_"),
      module.fullname,
      module.name
    )
  }

  fn render_schema_region(&self, nodes: &[SchemaNode]) -> String {
    if self.options.show_modules {
      let tree = build_module_tree(nodes.iter().map(|node| (node.module.as_str(), node)));
      let mut remaining: Vec<(String, String)> = self
        .options
        .module_colors
        .iter()
        .map(|(prefix, color)| (prefix.clone(), color.clone()))
        .collect();
      tree
        .iter()
        .map(|module| self.render_schema_module(module, &mut remaining))
        .join("\n")
    } else {
      nodes.iter().map(|node| self.render_schema_node(node)).join("\n")
    }
  }

  fn render_route_region(&self, routes: &[RouteNode]) -> String {
    if self.options.show_modules {
      let tree = build_module_tree(routes.iter().map(|route| (route.module.as_str(), route)));
      tree.iter().map(|module| self.render_route_module(module)).join("\n")
    } else {
      routes.iter().map(Self::render_route_node).join("\n")
    }
  }

  pub fn render_dot(&self, tags: &[Tag], routes: &[RouteNode], nodes: &[SchemaNode], edges: &[Edge]) -> String {
    let tag_region = tags.iter().map(Self::render_tag_node).join("\n");
    let route_region = self.render_route_region(routes);
    let schema_region = self.render_schema_region(nodes);
    let edge_region = edges.iter().map(Self::render_edge).join("\n            ");
    let splines = if self.options.spline_line { "splines=line" } else { "" };

    format!(
      r##"
        digraph api_voyager {{
            pad="0.5"
            nodesep=0.8
            {splines}
            fontname="Helvetica,Arial,sans-serif"
            node [fontname="Helvetica,Arial,sans-serif"]
            edge [
                fontname="Helvetica,Arial,sans-serif"
                color="gray"
            ]
            graph [
                rankdir = "LR"
            ];
            node [
                fontsize = "16"
            ];

            subgraph cluster_tags {{
                color = "#aaa"
                margin=18
                style="dashed"
                label = "  Tags"
                labeljust = "l"
                fontsize = "20"
                {tag_region}
            }}

            subgraph cluster_router {{
                color = "#aaa"
                margin=18
                style="dashed"
                label = "  Routes"
                labeljust = "l"
                fontsize = "20"
                {route_region}
            }}

            subgraph cluster_schema {{
                color = "#aaa"
                margin=18
                style="dashed"
                label = "  Schema"
                labeljust = "l"
                fontsize = "20"
                {schema_region}
            }}

            {edge_region}
        }}
"##
    )
  }
}
