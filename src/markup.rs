//! Inline markup tags and the substitution pass.
//!
//! Two dialects share one scanner:
//! - [`Mode::SingleColor`]: `<b>`, `</b>`, `<u>`, `</u>` (case-insensitive)
//! - [`Mode::MultiColor`]: the above plus `<N>` / `</N>` numeric color tags
//!
//! The format is flat. Opens and closes are never paired up or validated;
//! each tag family is replaced in its own text-wide pass, so families do not
//! interact positionally.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

/// A scanned unit of markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MarkupToken {
    PlainText(String),
    OpenColor(u8),
    CloseColor,
    OpenBold,
    CloseBold,
    OpenUnderline,
    CloseUnderline,
}

/// Which tags are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bold and underline only; the caller supplies one ambient color.
    SingleColor,
    /// Numeric color tags plus bold and underline.
    MultiColor,
}

/// A family of tags sharing one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    CloseColor,
    OpenColor,
    CloseBold,
    OpenBold,
    CloseUnderline,
    OpenUnderline,
}

const SINGLE_COLOR_ORDER: &[Tag] = &[
    Tag::CloseBold,
    Tag::OpenBold,
    Tag::CloseUnderline,
    Tag::OpenUnderline,
];

const MULTI_COLOR_ORDER: &[Tag] = &[
    Tag::CloseColor,
    Tag::OpenColor,
    Tag::CloseBold,
    Tag::OpenBold,
    Tag::CloseUnderline,
    Tag::OpenUnderline,
];

static OPEN_BOLD: OnceLock<Regex> = OnceLock::new();
static CLOSE_BOLD: OnceLock<Regex> = OnceLock::new();
static OPEN_UNDERLINE: OnceLock<Regex> = OnceLock::new();
static CLOSE_UNDERLINE: OnceLock<Regex> = OnceLock::new();
static OPEN_COLOR: OnceLock<Regex> = OnceLock::new();
static CLOSE_COLOR: OnceLock<Regex> = OnceLock::new();
static SINGLE_COLOR_ANY: OnceLock<Regex> = OnceLock::new();
static MULTI_COLOR_ANY: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Failed to compile markup regex"))
}

impl Mode {
    /// Tag families in the order they are substituted.
    pub fn precedence(self) -> &'static [Tag] {
        match self {
            Mode::SingleColor => SINGLE_COLOR_ORDER,
            Mode::MultiColor => MULTI_COLOR_ORDER,
        }
    }

    /// Pattern matching any tag this mode recognizes.
    fn any_tag(self) -> &'static Regex {
        match self {
            Mode::SingleColor => compiled(&SINGLE_COLOR_ANY, r"(?i)</?[bu]>"),
            Mode::MultiColor => {
                compiled(&MULTI_COLOR_ANY, r"(?i)</?[bu]>|<[0-9]{1,3}>|</[0-9]{0,3}>")
            }
        }
    }
}

impl Tag {
    /// The compiled pattern for this family.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Tag::OpenBold => compiled(&OPEN_BOLD, r"(?i)<b>"),
            Tag::CloseBold => compiled(&CLOSE_BOLD, r"(?i)</b>"),
            Tag::OpenUnderline => compiled(&OPEN_UNDERLINE, r"(?i)<u>"),
            Tag::CloseUnderline => compiled(&CLOSE_UNDERLINE, r"(?i)</u>"),
            Tag::OpenColor => compiled(&OPEN_COLOR, r"<([0-9]{1,3})>"),
            // Digits are not required to match the opening tag.
            Tag::CloseColor => compiled(&CLOSE_COLOR, r"</[0-9]{0,3}>"),
        }
    }

    /// The token for a match of this family, or `None` if the match
    /// should stay literal (a color number above 255).
    fn token(self, matched: &str) -> Option<MarkupToken> {
        match self {
            Tag::OpenBold => Some(MarkupToken::OpenBold),
            Tag::CloseBold => Some(MarkupToken::CloseBold),
            Tag::OpenUnderline => Some(MarkupToken::OpenUnderline),
            Tag::CloseUnderline => Some(MarkupToken::CloseUnderline),
            Tag::CloseColor => Some(MarkupToken::CloseColor),
            Tag::OpenColor => {
                let digits = matched.trim_start_matches('<').trim_end_matches('>');
                match digits.parse::<u8>() {
                    Ok(code) => Some(MarkupToken::OpenColor(code)),
                    Err(_) => {
                        debug!(tag = %matched, "color code out of range, leaving tag as text");
                        None
                    }
                }
            }
        }
    }
}

/// Classify a tag matched by [`Mode::any_tag`].
fn classify(matched: &str) -> Option<MarkupToken> {
    let lower = matched.to_ascii_lowercase();
    let tag = match lower.as_str() {
        "<b>" => Tag::OpenBold,
        "</b>" => Tag::CloseBold,
        "<u>" => Tag::OpenUnderline,
        "</u>" => Tag::CloseUnderline,
        s if s.starts_with("</") => Tag::CloseColor,
        _ => Tag::OpenColor,
    };
    tag.token(matched)
}

/// Split `text` into tokens, left to right.
///
/// Adjacent plain runs are merged, so the result never holds two
/// consecutive [`MarkupToken::PlainText`] entries.
pub fn scan(text: &str, mode: Mode) -> Vec<MarkupToken> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in mode.any_tag().find_iter(text) {
        push_plain(&mut tokens, &text[last..m.start()]);
        match classify(m.as_str()) {
            Some(token) => tokens.push(token),
            None => push_plain(&mut tokens, m.as_str()),
        }
        last = m.end();
    }
    push_plain(&mut tokens, &text[last..]);

    tokens
}

fn push_plain(tokens: &mut Vec<MarkupToken>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(MarkupToken::PlainText(prev)) = tokens.last_mut() {
        prev.push_str(text);
    } else {
        tokens.push(MarkupToken::PlainText(text.to_string()));
    }
}

/// Replace every recognized tag with `encode(token)`.
///
/// Families are processed one full pass at a time in
/// [`Mode::precedence`] order. Text that is not a tag passes through
/// untouched, including escape sequences from an earlier render.
pub fn substitute<F>(text: &str, mode: Mode, mut encode: F) -> String
where
    F: FnMut(&MarkupToken) -> String,
{
    let mut out = text.to_string();
    for &tag in mode.precedence() {
        let replaced = tag
            .pattern()
            .replace_all(&out, |caps: &Captures| match tag.token(&caps[0]) {
                Some(token) => encode(&token),
                None => caps[0].to_string(),
            })
            .into_owned();
        out = replaced;
    }
    out
}

/// Remove every recognized tag, keeping the text between them.
pub fn strip_tags(text: &str, mode: Mode) -> String {
    scan(text, mode)
        .into_iter()
        .filter_map(|t| match t {
            MarkupToken::PlainText(s) => Some(s),
            _ => None,
        })
        .collect()
}
