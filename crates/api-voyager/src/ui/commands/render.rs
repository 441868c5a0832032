use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use indexmap::IndexMap;

use crate::{
  analyzer::{AnalysisStats, FieldVisibility, RenderOptions, orchestrator::Voyager, types::EdgeKind},
  catalog::CatalogLoader,
  ui::{Colors, FieldsMode, RenderCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub options: RenderOptions,
  pub verbose: bool,
  pub quiet: bool,
}

impl RenderConfig {
  pub fn from_command(command: RenderCommand) -> anyhow::Result<Self> {
    let RenderCommand {
      input,
      output,
      fields,
      focus,
      module_color,
      module_prefix,
      flat,
      spline_line,
      verbose,
      quiet,
    } = command;

    let options = RenderOptions {
      field_visibility: match fields {
        FieldsMode::None => FieldVisibility::None,
        FieldsMode::Objects => FieldVisibility::Objects,
        FieldsMode::All => FieldVisibility::All,
      },
      module_colors: parse_module_colors(module_color)?,
      focus,
      module_prefix,
      show_modules: !flat,
      spline_line,
    };

    Ok(Self {
      input,
      output,
      options,
      verbose,
      quiet,
    })
  }

  async fn write_output(&self, dot: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, dot).await?;
    Ok(())
  }
}

fn parse_module_colors(pairs: Option<Vec<String>>) -> anyhow::Result<IndexMap<String, String>> {
  let Some(entries) = pairs else {
    return Ok(IndexMap::new());
  };

  let mut map = IndexMap::new();
  for entry in entries {
    let (prefix, color) = entry
      .split_once('=')
      .ok_or_else(|| anyhow::anyhow!("Invalid module-color format '{entry}': expected PREFIX=COLOR (e.g., app.schema=teal)"))?;
    map.insert(prefix.to_string(), color.to_string());
  }
  Ok(map)
}

struct RenderLogger<'a> {
  config: &'a RenderConfig,
  colors: &'a Colors,
}

impl<'a> RenderLogger<'a> {
  fn new(config: &'a RenderConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading API catalog from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_analyzing(&self) {
    self.info(&"Building schema relationship graph...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &AnalysisStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Routes registered:", stats.routes_registered.to_string());
    if stats.routes_skipped > 0 {
      self.stat("", format!("{} skipped (no schema response)", stats.routes_skipped));
    }
    self.stat("Schema nodes:", stats.schema_nodes.to_string());
    self.stat("Tags:", stats.tags.to_string());
    self.stat("Edges:", stats.edges().to_string());

    if self.config.verbose {
      let by_kind = [
        (EdgeKind::Entry, stats.entry_edges),
        (EdgeKind::Child, stats.child_edges),
        (EdgeKind::Parent, stats.parent_edges),
        (EdgeKind::Subset, stats.subset_edges),
        (EdgeKind::Entity, stats.entity_edges),
      ];
      for (kind, count) in by_kind {
        self.stat("", format!("{count} {kind}"));
      }
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully rendered dependency graph".with(self.colors.success())
      );
    }
  }
}

pub async fn render_graph(config: RenderConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = RenderLogger::new(&config, colors);

  logger.log_loading();
  let catalog = CatalogLoader::open(&config.input).await?.parse()?;

  logger.log_analyzing();
  let voyager = Voyager::new(catalog, config.options.clone());
  let (dot, stats) = voyager.render_dot()?;

  logger.print_statistics(&stats);
  logger.log_writing();
  config.write_output(dot).await?;

  logger.log_success();
  Ok(())
}
