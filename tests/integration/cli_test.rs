//! CLI behaviour tests

use predicates::prelude::*;

use super::helpers::{alia_cmd, stdout_of};

const TIMESTAMP: &str = r"\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\]";

// ============================================================================
// say / code
// ============================================================================

#[test]
fn say_renders_named_color_with_ambient_reapplied() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "always", "say", "blue", "<b>hi</b> there", "-T"]);
    assert_eq!(
        stdout_of(&mut cmd),
        "\x1b[38;5;33m\x1b[1mhi\x1b[0m\x1b[38;5;33m there\x1b[0m\n"
    );
}

#[test]
fn say_accepts_dashed_names() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "always", "say", "light-pink", "x", "-T"]);
    assert_eq!(stdout_of(&mut cmd), "\x1b[38;5;205mx\x1b[0m\n");
}

#[test]
fn say_unknown_color_fails_without_output() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["say", "nope", "hello"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown color name: 'nope'"))
        .stderr(predicate::str::contains("Available colors: blue, light_blue"));
}

#[test]
fn code_renders_numeric_color() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["code", "202", "<u>warm</u>", "-T", "--color", "always"]);
    assert_eq!(
        stdout_of(&mut cmd),
        "\x1b[38;5;202m\x1b[4mwarm\x1b[0m\x1b[38;5;202m\x1b[0m\n"
    );
}

#[test]
fn code_rejects_out_of_range() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["code", "256", "x"]).assert().failure();
}

#[test]
fn timestamp_is_on_by_default() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "never", "say", "green", "done"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(format!("^done {}\n$", TIMESTAMP)).unwrap());
}

// ============================================================================
// Color selection
// ============================================================================

#[test]
fn no_color_env_disables_escapes() {
    let (mut cmd, _home) = alia_cmd();
    cmd.env("NO_COLOR", "1").args(["say", "red", "<b>x</b>y", "-T"]);
    assert_eq!(stdout_of(&mut cmd), "xy\n");
}

#[test]
fn force_color_env_enables_escapes() {
    let (mut cmd, _home) = alia_cmd();
    cmd.env("FORCE_COLOR", "1").args(["code", "7", "x", "-T"]);
    assert_eq!(stdout_of(&mut cmd), "\x1b[38;5;7mx\x1b[0m\n");
}

#[test]
fn color_flag_beats_environment() {
    let (mut cmd, _home) = alia_cmd();
    cmd.env("FORCE_COLOR", "1")
        .args(["--color", "never", "code", "7", "x", "-T"]);
    assert_eq!(stdout_of(&mut cmd), "x\n");
}

// ============================================================================
// markup
// ============================================================================

#[test]
fn markup_renders_inline_colors() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "always", "markup", "<33>blue</33> plain", "-T"]);
    assert_eq!(
        stdout_of(&mut cmd),
        "\x1b[38;5;33mblue\x1b[39m plain\x1b[0m\n"
    );
}

#[test]
fn markup_timestamp_is_gray() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "always", "markup", "msg", "-t"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(format!(
                "^msg \x1b\\[38;5;246m{}\x1b\\[39m\x1b\\[0m\n$",
                TIMESTAMP
            ))
            .unwrap(),
        );
}

// ============================================================================
// colors / names / tokens / inspect
// ============================================================================

#[test]
fn colors_previews_all_codes() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "never", "colors"]);
    let out = stdout_of(&mut cmd);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 256);
    assert_eq!(lines[0], "fg(0)");
    assert_eq!(lines[255], "fg(255)");
}

#[test]
fn colors_previews_one_code() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "always", "colors", "202"]);
    assert_eq!(stdout_of(&mut cmd), "\x1b[38;5;202mfg(202)\x1b[0m\n");
}

#[test]
fn names_lists_builtin_palette() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["--color", "never", "names"]);
    let out = stdout_of(&mut cmd);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 15);
    assert!(lines[0].starts_with("blue "));
    assert!(lines[0].ends_with(" 33"));
    assert!(lines[14].starts_with("orange "));
}

#[test]
fn tokens_as_json() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["tokens", "<33>hi</33>", "--json"]);
    let out = stdout_of(&mut cmd);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"kind": "open_color", "value": 33},
            {"kind": "plain_text", "value": "hi"},
            {"kind": "close_color"}
        ])
    );
}

#[test]
fn tokens_single_mode_keeps_numeric_tags() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["tokens", "<33><b>x", "--single"]);
    assert_eq!(
        stdout_of(&mut cmd),
        "text      \"<33>\"\nbold\ntext      \"x\"\n"
    );
}

#[test]
fn inspect_reads_stdin() {
    let (mut cmd, _home) = alia_cmd();
    cmd.arg("inspect")
        .write_stdin("\x1b[38;5;33mblue\x1b[39m plain");
    assert_eq!(stdout_of(&mut cmd), "[fg=33]blue[-] plain\n");
}

#[test]
fn completions_are_generated() {
    let (mut cmd, _home) = alia_cmd();
    cmd.args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alia"));
}
