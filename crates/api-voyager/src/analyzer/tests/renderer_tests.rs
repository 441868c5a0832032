use indexmap::IndexMap;

use crate::analyzer::{
  renderer::{FieldVisibility, RenderOptions, Renderer},
  types::{Edge, EdgeKind, FieldInfo, RouteNode, SchemaNode, Tag},
};

fn fld(name: &str, type_name: &str) -> FieldInfo {
  FieldInfo {
    name: name.to_string(),
    type_name: type_name.to_string(),
    from_base: false,
    is_object: false,
    is_exclude: false,
  }
}

fn node(module: &str, name: &str, fields: Vec<FieldInfo>) -> SchemaNode {
  SchemaNode {
    id: format!("{module}.{name}"),
    name: name.to_string(),
    module: module.to_string(),
    fields,
  }
}

fn edge(source: &str, target: &str, kind: EdgeKind) -> Edge {
  Edge {
    source: source.to_string(),
    target: target.to_string(),
    kind,
  }
}

fn render(options: RenderOptions, nodes: &[SchemaNode], edges: &[Edge]) -> String {
  Renderer::new(options).render_dot(&[], &[], nodes, edges)
}

#[test]
fn test_edge_style_table() {
  let edges = vec![
    edge("r.get", "app.A", EdgeKind::Entry),
    edge("app.A", "app.B", EdgeKind::Child),
    edge("app.A", "app.Base", EdgeKind::Parent),
    edge("app.Brief", "app.A", EdgeKind::Subset),
    edge("app.Task::fowner_id", "app.Member::pk", EdgeKind::Entity),
  ];
  let out = render(RenderOptions::with_modules(), &[], &edges);

  assert!(out.contains(r#""r.get" -> "app.A" [style = "bold", minlen=3];"#));
  assert!(out.contains(r#""app.A" -> "app.B" [style = "dashed", minlen=3];"#));
  assert!(out.contains(
    r#""app.A" -> "app.Base" [style = "dashed", dir = "back", taillabel = "< inherit >", color = "purple", minlen=3];"#
  ));
  assert!(out.contains(
    r#""app.Brief" -> "app.A" [style = "dashed", dir = "back", taillabel = "< subset >", color = "orange", minlen=3];"#
  ));
  assert!(out.contains(
    r#""app.Task":fowner_id -> "app.Member":pk [style = "solid", dir = "back", arrowtail = "odot", minlen=3];"#
  ));
}

#[test]
fn test_field_visibility_none_shows_header_only() {
  let nodes = vec![node("app", "Story", vec![fld("id", "int")])];
  let out = render(RenderOptions::with_modules(), &nodes, &[]);

  assert!(out.contains("    Story    "));
  assert!(!out.contains("id: int"));
}

#[test]
fn test_field_visibility_objects_filters_scalars() {
  let mut object_field = fld("task", "Task");
  object_field.is_object = true;
  let nodes = vec![node("app", "Story", vec![fld("id", "int"), object_field])];
  let options = RenderOptions {
    field_visibility: FieldVisibility::Objects,
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert!(out.contains("task: Task"));
  assert!(!out.contains("id: int"));
}

#[test]
fn test_field_visibility_all_adds_inherited_placeholder() {
  let mut inherited = fld("created_at", "datetime");
  inherited.from_base = true;
  let nodes = vec![node("app", "Story", vec![fld("id", "int"), inherited])];
  let options = RenderOptions {
    field_visibility: FieldVisibility::All,
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert!(out.contains("id: int"));
  assert!(out.contains("Inherited Fields ..."));
  assert!(!out.contains("created_at"), "inherited fields stay collapsed");
}

#[test]
fn test_excluded_fields_are_struck_through_not_removed() {
  let mut hidden = fld("secret", "str");
  hidden.is_exclude = true;
  let nodes = vec![node("app", "Story", vec![hidden])];
  let options = RenderOptions {
    field_visibility: FieldVisibility::All,
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert!(out.contains(r#"<s align="left">secret: str</s>"#));
}

#[test]
fn test_long_type_names_are_truncated() {
  let nodes = vec![node("app", "Story", vec![fld("items", "list[VeryLongGenericTypeName[Deep]]")])];
  let options = RenderOptions {
    field_visibility: FieldVisibility::All,
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert!(out.contains("items: list[VeryLongGenericTypeN.."));
  assert!(!out.contains("list[VeryLongGenericTypeName[Deep]]"));
}

#[test]
fn test_focused_schema_gets_distinct_header_fill() {
  let nodes = vec![node("app", "Story", vec![]), node("app", "Task", vec![])];
  let options = RenderOptions {
    focus: Some("app.Story".to_string()),
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert_eq!(out.matches(r#"bgcolor="tomato""#).count(), 1);
  assert_eq!(out.matches(r##"bgcolor="#009485""##).count(), 1);
}

#[test]
fn test_module_color_prefix_is_consumed_by_first_match() {
  let nodes = vec![node("app.a", "First", vec![]), node("app.b", "Second", vec![])];
  let options = RenderOptions {
    module_colors: IndexMap::from([("app.".to_string(), "red".to_string())]),
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert_eq!(out.matches(r#"pencolor = "red""#).count(), 1, "first match consumes the prefix");
  let first = out.find("cluster_module_app_a").unwrap();
  let colored = out.find(r#"pencolor = "red""#).unwrap();
  let second = out.find("cluster_module_app_b").unwrap();
  assert!(first < colored && colored < second);
}

#[test]
fn test_module_prefix_gates_color_eligibility() {
  let nodes = vec![node("vendor.x", "Foreign", vec![]), node("app.a", "Local", vec![])];
  let options = RenderOptions {
    module_colors: IndexMap::from([("vendor".to_string(), "red".to_string())]),
    module_prefix: Some("app".to_string()),
    ..RenderOptions::with_modules()
  };
  let out = render(options, &nodes, &[]);

  assert!(!out.contains(r#"pencolor = "red""#), "clusters outside the prefix are never colored");
}

#[test]
fn test_flat_mode_renders_no_module_clusters() {
  let nodes = vec![node("app.a", "Story", vec![])];
  let options = RenderOptions {
    show_modules: false,
    ..RenderOptions::default()
  };
  let out = render(options, &nodes, &[]);

  assert!(!out.contains("cluster_module_"));
  assert!(out.contains(r#""app.a.Story""#));
}

#[test]
fn test_tag_and_route_regions() {
  let tags = vec![Tag {
    id: "sprint".to_string(),
    name: "sprint".to_string(),
    routes: vec!["r.get".to_string()],
  }];
  let routes = vec![RouteNode {
    id: "r.get".to_string(),
    name: "get_sprints".to_string(),
    module: "routes.sprint".to_string(),
    tags: vec!["sprint".to_string()],
    response_schema: "Sprint".to_string(),
  }];
  let out = Renderer::new(RenderOptions::with_modules()).render_dot(&tags, &routes, &[], &[]);

  assert!(out.contains("subgraph cluster_tags"));
  assert!(out.contains("    sprint    "));
  assert!(out.contains("cluster_route_module_routes_sprint"));
  assert!(out.contains("get_sprints | Sprint"));
}

#[test]
fn test_rendering_is_byte_deterministic() {
  let mut object_field = fld("task", "Task");
  object_field.is_object = true;
  let nodes = vec![
    node("app.a", "Story", vec![fld("id", "int"), object_field]),
    node("app.b", "Task", vec![]),
  ];
  let edges = vec![edge("app.a.Story", "app.b.Task", EdgeKind::Child)];
  let options = RenderOptions {
    field_visibility: FieldVisibility::All,
    module_colors: IndexMap::from([("app".to_string(), "teal".to_string())]),
    ..RenderOptions::with_modules()
  };

  let first = render(options.clone(), &nodes, &edges);
  let second = render(options, &nodes, &edges);
  assert_eq!(first, second);
}
