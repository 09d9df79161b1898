//! Handlers for the printing commands: say, code and markup.

use anyhow::{anyhow, Result};

use alia::cli::TimestampArgs;
use alia::text::comma_and;
use alia::{RenderError, RenderRequest};

use super::Context;

/// Print text in a named color.
///
/// The name is resolved before anything is written, so an unknown name
/// produces no output.
#[cfg(not(tarpaulin_include))]
pub fn handle_say(ctx: &Context, color: &str, text: &str, ts: TimestampArgs) -> Result<()> {
    let code = ctx
        .config
        .resolve_color(color)
        .map_err(|e| unknown_color_hint(ctx, e))?;
    let include_timestamp = ts.resolve(ctx.config.output.timestamp);
    ctx.renderer
        .print(&RenderRequest::colored(text, code, include_timestamp))?;
    Ok(())
}

/// Print text in a numeric color.
#[cfg(not(tarpaulin_include))]
pub fn handle_code(ctx: &Context, code: u8, text: &str, ts: TimestampArgs) -> Result<()> {
    let include_timestamp = ts.resolve(ctx.config.output.timestamp);
    ctx.renderer
        .print(&RenderRequest::colored(text, code, include_timestamp))?;
    Ok(())
}

/// Print text with inline color tags.
#[cfg(not(tarpaulin_include))]
pub fn handle_markup(ctx: &Context, text: &str, ts: TimestampArgs) -> Result<()> {
    let include_timestamp = ts.resolve(ctx.config.output.timestamp);
    ctx.renderer
        .print(&RenderRequest::markup(text, include_timestamp))?;
    Ok(())
}

/// Turn an unknown-color error into a message listing what is available.
fn unknown_color_hint(ctx: &Context, err: RenderError) -> anyhow::Error {
    let names = ctx.config.color_names();
    anyhow!("{}. Available colors: {}", err, comma_and(&names, ", ", "and"))
}
