use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  catalog::{Catalog, CatalogLoader},
  ui::{Colors, colors::IntoComfyColor, term_width},
};

async fn load_catalog(input: &PathBuf) -> anyhow::Result<Catalog> {
  CatalogLoader::open(input).await?.parse()
}

fn new_table() -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  table
}

pub async fn list_routes(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let catalog = load_catalog(input).await?;

  let mut table = new_table();
  let mut header = Row::new();
  header.add_cell(Cell::new("ROUTE ID").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("METHODS").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("PATH").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("TAGS").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for route in &catalog.routes {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&route.id)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(route.methods.join(","))
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(route.path.as_deref().unwrap_or("-")).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(route.tags.join(", ")).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

pub async fn list_schemas(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let catalog = load_catalog(input).await?;

  let mut table = new_table();
  let mut header = Row::new();
  header.add_cell(Cell::new("SCHEMA").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("MODULE").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("FIELDS").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for (id, schema) in &catalog.schemas {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(id)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&schema.module).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(schema.fields.len())
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
