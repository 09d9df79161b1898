//! Unit tests for markup scanning and substitution

use alia::markup::{self, Tag};
use alia::{MarkupToken, Mode};

fn plain(s: &str) -> MarkupToken {
    MarkupToken::PlainText(s.to_string())
}

#[test]
fn multi_color_scan_recognizes_every_family() {
    let tokens = markup::scan("<33><b>a</b></33> <u>b</u>", Mode::MultiColor);
    assert_eq!(
        tokens,
        vec![
            MarkupToken::OpenColor(33),
            MarkupToken::OpenBold,
            plain("a"),
            MarkupToken::CloseBold,
            MarkupToken::CloseColor,
            plain(" "),
            MarkupToken::OpenUnderline,
            plain("b"),
            MarkupToken::CloseUnderline,
        ]
    );
}

#[test]
fn bare_close_tag_closes_color() {
    assert_eq!(
        markup::scan("x</>", Mode::MultiColor),
        vec![plain("x"), MarkupToken::CloseColor]
    );
}

#[test]
fn out_of_range_color_merges_into_plain_text() {
    assert_eq!(
        markup::scan("a<256>b", Mode::MultiColor),
        vec![plain("a<256>b")]
    );
}

#[test]
fn four_digit_tags_are_text() {
    assert_eq!(
        markup::strip_tags("<1000>x</1000>", Mode::MultiColor),
        "<1000>x</1000>"
    );
}

#[test]
fn only_ascii_digits_form_color_tags() {
    let text = "<\u{663}>a</\u{663}\u{663}>b";
    assert_eq!(markup::strip_tags(text, Mode::MultiColor), text);
    assert!(!Tag::OpenColor.pattern().is_match("<\u{663}>"));
    assert!(!Tag::CloseColor.pattern().is_match("</\u{663}>"));
    assert!(Tag::CloseColor.pattern().is_match("</12>"));
}

#[test]
fn strip_tags_per_mode() {
    let text = "<33><b>hi</b></33>";
    assert_eq!(markup::strip_tags(text, Mode::MultiColor), "hi");
    assert_eq!(markup::strip_tags(text, Mode::SingleColor), "<33>hi</33>");
}

#[test]
fn precedence_lists_close_before_open() {
    assert_eq!(
        Mode::SingleColor.precedence(),
        &[
            Tag::CloseBold,
            Tag::OpenBold,
            Tag::CloseUnderline,
            Tag::OpenUnderline
        ]
    );
    assert_eq!(Mode::MultiColor.precedence().len(), 6);
    assert_eq!(Mode::MultiColor.precedence()[0], Tag::CloseColor);
}

#[test]
fn substitute_passes_escapes_through() {
    let text = "\x1b[1m<b>x</b>";
    let out = markup::substitute(text, Mode::SingleColor, |t| match t {
        MarkupToken::OpenBold => "{".to_string(),
        MarkupToken::CloseBold => "}".to_string(),
        _ => String::new(),
    });
    assert_eq!(out, "\x1b[1m{x}");
}

#[test]
fn substitute_keeps_out_of_range_tags() {
    let out = markup::substitute("<300>a<3>b", Mode::MultiColor, |t| match t {
        MarkupToken::OpenColor(n) => format!("[{}]", n),
        _ => String::new(),
    });
    assert_eq!(out, "<300>a[3]b");
}

#[test]
fn tag_patterns_are_case_insensitive_for_attributes() {
    assert!(Tag::OpenBold.pattern().is_match("<B>"));
    assert!(Tag::CloseUnderline.pattern().is_match("</U>"));
    assert!(!Tag::OpenColor.pattern().is_match("<b>"));
}
