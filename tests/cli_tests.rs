use predicates::prelude::*;

#[test]
fn prints_help() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: ccolor").and(predicate::str::contains("Options:")));
}

#[test]
fn prints_version() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(format!("ccolor {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_exits_nonzero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Usage: ccolor"));
}

#[test]
fn styles_text_with_spec() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.args(["--style", "bold underline cyan", "Hi"]);
    cmd.assert()
        .success()
        .stdout("\x1b[36m\x1b[4m\x1b[1mHi\x1b[0m\n");
}

#[test]
fn color_off_prints_plain_text() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.args(["--color=off", "--style", "red on_bright_white", "plain", "text"]);
    cmd.assert().success().stdout("plain text\n");
}

#[test]
fn unknown_style_keyword_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.args(["--style", "bold sparkly", "x"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("unhandled style: sparkly"));
}

#[test]
fn invalid_color_mode_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.args(["--color", "auto", "x"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color mode: auto"));
}

#[test]
fn demo_without_color_has_no_escapes() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.args(["--color", "off", "--demo"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Orange Is the New Black").and(predicate::str::contains("\x1b").not()));
}

#[test]
fn demo_with_color_has_escapes() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ccolor");
    cmd.arg("--demo");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\x1b[46mHello World\x1b[0m"));
}
