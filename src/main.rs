//! alia - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use alia::cli::{Cli, Commands, ConfigCommands};

use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Say {
            color,
            text,
            timestamp,
        } => {
            let ctx = Context::load(cli.color)?;
            commands::print::handle_say(&ctx, &color, &text, timestamp)
        }
        Commands::Code {
            code,
            text,
            timestamp,
        } => {
            let ctx = Context::load(cli.color)?;
            commands::print::handle_code(&ctx, code, &text, timestamp)
        }
        Commands::Markup { text, timestamp } => {
            let ctx = Context::load(cli.color)?;
            commands::print::handle_markup(&ctx, &text, timestamp)
        }
        Commands::Colors { code } => {
            let ctx = Context::load(cli.color)?;
            commands::colors::handle_colors(&ctx, code)
        }
        Commands::Names => {
            let ctx = Context::load(cli.color)?;
            commands::colors::handle_names(&ctx)
        }
        Commands::Tokens { text, single, json } => commands::tokens::handle(&text, single, json),
        Commands::Inspect { text } => commands::inspect::handle(text.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&Context::load(cli.color)?),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::SetColor { name, code } => {
                commands::config::handle_set_color(&Context::load(cli.color)?, &name, code)
            }
            ConfigCommands::RemoveColor { name } => {
                commands::config::handle_remove_color(&Context::load(cli.color)?, &name)
            }
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
