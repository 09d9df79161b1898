//! Inspect command handler

use anyhow::{Context, Result};
use std::io::{self, Read};

use alia::inspect;

/// Describe the styles in rendered text from an argument or stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: Option<&str>) -> Result<()> {
    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            buf
        }
    };

    let spans = inspect::decode(&input);
    print!("{}", inspect::describe(&spans));
    if !input.ends_with('\n') {
        println!();
    }
    Ok(())
}
