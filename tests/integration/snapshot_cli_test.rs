//! CLI output snapshot tests
//!
//! Rendered output is piped through `alia inspect` so snapshots show
//! readable style markers instead of raw escape sequences.

use super::helpers::{alia_in, stdout_of};
use tempfile::TempDir;

/// Render with `args` and describe the result.
fn rendered(args: &[&str]) -> String {
    let home = TempDir::new().unwrap();
    let styled = stdout_of(alia_in(&home).args(["--color", "always"]).args(args));
    stdout_of(alia_in(&home).arg("inspect").write_stdin(styled))
        .trim_end()
        .to_string()
}

#[test]
fn snapshot_say_bold_then_plain() {
    insta::assert_snapshot!(
        rendered(&["say", "purple", "<b>built</b> 3 targets", "-T"]),
        @"[fg=57,bold]built[fg=57] 3 targets[-]"
    );
}

#[test]
fn snapshot_say_underline_unclosed() {
    insta::assert_snapshot!(
        rendered(&["say", "orange", "see <u>docs", "-T"]),
        @"[fg=202]see [fg=202,underline]docs[-]"
    );
}

#[test]
fn snapshot_markup_mixed_tags() {
    insta::assert_snapshot!(
        rendered(&["markup", "<40>ok</40> <b>12</b> files, <196><u>1 failed</u> of 9</196>", "-T"]),
        @"[fg=40]ok[-] [bold]12[-] files, [fg=196,underline]1 failed[-] of 9"
    );
}

#[test]
fn snapshot_markup_bold_inside_color() {
    insta::assert_snapshot!(
        rendered(&["markup", "<33>a <b>b</b> c</33>", "-T"]),
        @"[fg=33]a [fg=33,bold]b[fg=33] c[-]"
    );
}
