#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod analyzer;
mod catalog;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Routes { input } => ui::commands::list_routes(&input, &colors).await?,
      ListCommands::Schemas { input } => ui::commands::list_schemas(&input, &colors).await?,
    },
    Commands::Render(command) => {
      let config = ui::commands::RenderConfig::from_command(command)?;
      ui::commands::render_graph(config, &colors).await?;
    }
  }

  Ok(())
}
