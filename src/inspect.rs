//! Decode styled output back into text runs.
//!
//! Feeds rendered bytes through a VT parser and tracks the SGR state, so
//! callers can ask which style a piece of text actually ended up with.
//! Only the attributes the renderer emits are tracked: foreground, bold,
//! dim and underline.

use vte::{Params, Parser, Perform};

/// Style in effect for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    /// 256-color foreground, `None` for the terminal default.
    pub fg: Option<u8>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl SpanStyle {
    /// True when nothing differs from the terminal default.
    pub fn is_default(&self) -> bool {
        *self == SpanStyle::default()
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

/// Performer that collects spans as the parser walks the input.
#[derive(Default)]
struct SpanCollector {
    spans: Vec<StyledSpan>,
    style: SpanStyle,
}

impl SpanCollector {
    fn push_char(&mut self, c: char) {
        match self.spans.last_mut() {
            Some(span) if span.style == self.style => span.text.push(c),
            _ => self.spans.push(StyledSpan {
                text: c.to_string(),
                style: self.style,
            }),
        }
    }

    fn handle_sgr(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.style = SpanStyle::default();
            return;
        }

        let mut iter = params.iter().copied();
        while let Some(param) = iter.next() {
            match param {
                0 => self.style = SpanStyle::default(),
                1 => self.style.bold = true,
                2 => self.style.dim = true,
                4 => self.style.underline = true,
                22 => {
                    self.style.bold = false;
                    self.style.dim = false;
                }
                24 => self.style.underline = false,
                30..=37 => self.style.fg = Some((param - 30) as u8),
                90..=97 => self.style.fg = Some((param - 90 + 8) as u8),
                38 => match iter.next() {
                    Some(5) => {
                        if let Some(idx) = iter.next() {
                            self.style.fg = u8::try_from(idx).ok();
                        }
                    }
                    Some(2) => {
                        // RGB is outside the 256-color model; skip r;g;b.
                        iter.next();
                        iter.next();
                        iter.next();
                    }
                    _ => {}
                },
                39 => self.style.fg = None,
                _ => {}
            }
        }
    }
}

impl Perform for SpanCollector {
    fn print(&mut self, c: char) {
        self.push_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\t' => self.push_char(byte as char),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        if action != 'm' || !intermediates.is_empty() {
            return;
        }
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        self.handle_sgr(&params);
    }
}

fn collect(rendered: &str) -> SpanCollector {
    let mut parser = Parser::new();
    let mut collector = SpanCollector::default();
    parser.advance(&mut collector, rendered.as_bytes());
    collector
}

/// Split rendered output into styled runs.
pub fn decode(rendered: &str) -> Vec<StyledSpan> {
    collect(rendered).spans
}

/// Rendered output with every escape sequence removed.
pub fn strip(rendered: &str) -> String {
    decode(rendered).into_iter().map(|s| s.text).collect()
}

/// The style left active after the last byte of `rendered`.
pub fn final_style(rendered: &str) -> SpanStyle {
    collect(rendered).style
}

/// The style applied to the first occurrence of `needle`, if the needle
/// falls entirely inside one span.
pub fn style_of(rendered: &str, needle: &str) -> Option<SpanStyle> {
    decode(rendered)
        .into_iter()
        .find(|span| span.text.contains(needle))
        .map(|span| span.style)
}

/// Compact description of spans, e.g. `[fg=33]blue[-] plain`.
///
/// A bracketed style marker is written whenever the style changes; `[-]`
/// marks a return to the default style.
pub fn describe(spans: &[StyledSpan]) -> String {
    let mut out = String::new();
    let mut current = SpanStyle::default();

    for span in spans {
        if span.style != current {
            out.push_str(&style_marker(&span.style));
            current = span.style;
        }
        out.push_str(&span.text);
    }
    out
}

fn style_marker(style: &SpanStyle) -> String {
    if style.is_default() {
        return "[-]".to_string();
    }
    let mut parts = Vec::new();
    if let Some(fg) = style.fg {
        parts.push(format!("fg={}", fg));
    }
    if style.bold {
        parts.push("bold".to_string());
    }
    if style.dim {
        parts.push("dim".to_string());
    }
    if style.underline {
        parts.push("underline".to_string());
    }
    format!("[{}]", parts.join(","))
}
