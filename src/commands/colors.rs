//! Handlers for palette commands: colors and names.

use anyhow::Result;
use std::io::{self, Write};

use alia::NamedColor;

use super::Context;

/// Preview one code, or all 256.
#[cfg(not(tarpaulin_include))]
pub fn handle_colors(ctx: &Context, code: Option<u8>) -> Result<()> {
    ctx.renderer.preview_color(code)?;
    Ok(())
}

/// List configured aliases and built-in names, each in its own color.
#[cfg(not(tarpaulin_include))]
pub fn handle_names(ctx: &Context) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_names(ctx, &mut out)?;
    Ok(())
}

/// Write one `name  code` line per color.
pub fn write_names<W: Write>(ctx: &Context, out: &mut W) -> io::Result<()> {
    let mut rows: Vec<(String, u8)> = ctx
        .config
        .palette
        .iter()
        .map(|(name, code)| (name.clone(), *code))
        .collect();
    rows.extend(
        NamedColor::ALL
            .iter()
            .filter(|c| !ctx.config.palette.contains_key(c.name()))
            .map(|c| (c.name().to_string(), c.code())),
    );

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, code) in rows {
        let label = format!("{:<width$}  {:>3}", name, code, width = width);
        writeln!(out, "{}", ctx.renderer.render(&label, code, false))?;
    }
    Ok(())
}
