//! Config subcommands handler

use anyhow::Result;

use alia::Config;

use super::Context;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(ctx: &Context) -> Result<()> {
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Add or update a palette alias and save.
#[cfg(not(tarpaulin_include))]
pub fn handle_set_color(ctx: &Context, name: &str, code: u8) -> Result<()> {
    let mut config = ctx.config.clone();
    let previous = config.set_color(name, code);
    config.validate().map_err(|e| anyhow::anyhow!("Invalid color name: {}", e))?;
    config.save()?;

    let message = match previous {
        Some(old) => format!("Updated '{}': {} -> {}", name, old, code),
        None => format!("Added '{}' = {}", name, code),
    };
    println!("{}", ctx.renderer.render(&message, code, false));
    Ok(())
}

/// Remove a palette alias and save.
#[cfg(not(tarpaulin_include))]
pub fn handle_remove_color(ctx: &Context, name: &str) -> Result<()> {
    let mut config = ctx.config.clone();
    if config.remove_color(name) {
        config.save()?;
        println!("Removed '{}'", name);
    } else {
        println!("No palette alias named '{}'", name);
    }
    Ok(())
}
