//! Tokens command handler

use anyhow::Result;

use alia::markup::{self, MarkupToken, Mode};

/// Print the scanned tokens, one per line or as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, single: bool, json: bool) -> Result<()> {
    let mode = if single {
        Mode::SingleColor
    } else {
        Mode::MultiColor
    };
    let tokens = markup::scan(text, mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{}", format_token(token));
        }
    }
    Ok(())
}

/// One-line description of a token.
pub fn format_token(token: &MarkupToken) -> String {
    match token {
        MarkupToken::PlainText(s) => format!("text      {:?}", s),
        MarkupToken::OpenColor(code) => format!("color     {}", code),
        MarkupToken::CloseColor => "/color".to_string(),
        MarkupToken::OpenBold => "bold".to_string(),
        MarkupToken::CloseBold => "/bold".to_string(),
        MarkupToken::OpenUnderline => "underline".to_string(),
        MarkupToken::CloseUnderline => "/underline".to_string(),
    }
}
