use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "api-voyager")]
#[command(author, version, about = "Renders an API's response schemas as a Graphviz dependency graph")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an API catalog
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Render an API catalog as a Graphviz DOT document
  Render(RenderCommand),
}

#[derive(Args, Debug)]
pub struct RenderCommand {
  /// Path to the API catalog JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the DOT document will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Which field rows appear inside schema nodes
  #[arg(long, value_enum, default_value = "none")]
  pub fields: FieldsMode,

  /// Fully-qualified schema name whose header gets the focus fill
  #[arg(long, value_name = "SCHEMA")]
  pub focus: Option<String>,

  /// Module cluster colors as PREFIX=COLOR pairs (comma-separated).
  /// Each prefix colors the first matching cluster only
  #[arg(long, value_name = "PAIRS", value_delimiter = ',')]
  pub module_color: Option<Vec<String>>,

  /// Only module clusters under this path prefix are eligible for coloring
  #[arg(long, value_name = "PREFIX")]
  pub module_prefix: Option<String>,

  /// Do not cluster nodes by module path
  #[arg(long, default_value_t = false)]
  pub flat: bool,

  /// Draw edges as straight lines (splines=line)
  #[arg(long, default_value_t = false)]
  pub spline_line: bool,

  /// Enable verbose output with analysis statistics
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FieldsMode {
  /// Header row only
  None,
  /// Only fields that resolve to another schema
  Objects,
  /// Every own field
  All,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all routes declared in the catalog
  Routes {
    /// Path to the API catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// List all schemas declared in the catalog
  Schemas {
    /// Path to the API catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
