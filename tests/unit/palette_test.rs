//! Unit tests for the named color table

use alia::palette;
use alia::{NamedColor, RenderError};

#[test]
fn table_has_expected_codes() {
    let expected = [
        ("blue", 33),
        ("light_blue", 39),
        ("teal", 30),
        ("light_teal", 32),
        ("gray", 246),
        ("red", 196),
        ("dark_red", 160),
        ("green", 40),
        ("light_green", 30),
        ("purple", 57),
        ("violet", 63),
        ("magenta", 198),
        ("pink", 200),
        ("light_pink", 205),
        ("orange", 202),
    ];
    assert_eq!(NamedColor::ALL.len(), expected.len());
    for (name, code) in expected {
        assert_eq!(palette::lookup(name), Ok(code), "code for {}", name);
    }
}

#[test]
fn names_are_listed_in_table_order() {
    let names: Vec<&str> = NamedColor::names().collect();
    assert_eq!(names.first(), Some(&"blue"));
    assert_eq!(names.last(), Some(&"orange"));
    assert_eq!(names.len(), 15);
}

#[test]
fn lookup_is_lenient_about_spelling() {
    assert_eq!(NamedColor::lookup("Light-Pink"), Ok(NamedColor::LightPink));
    assert_eq!(NamedColor::lookup("  GRAY "), Ok(NamedColor::Gray));
    assert_eq!("dark_red".parse::<NamedColor>(), Ok(NamedColor::DarkRed));
}

#[test]
fn unknown_names_report_the_input() {
    let err = NamedColor::lookup("chartreuse").unwrap_err();
    assert_eq!(
        err,
        RenderError::UnknownColorName {
            name: "chartreuse".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unknown color name: 'chartreuse'");
}

#[test]
fn empty_name_is_unknown() {
    assert!(palette::lookup("").is_err());
    assert!(palette::lookup("   ").is_err());
}

#[test]
fn display_uses_canonical_name() {
    assert_eq!(NamedColor::LightTeal.to_string(), "light_teal");
}
