//! End-to-end tests for the rtfhtml binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn rtfhtml(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rtfhtml"))
        .args(args)
        .env_remove("RTFHTML_LINE_ENDING")
        .env_remove("RTFHTML_DECODE_ENTITIES")
        .output()
        .expect("failed to run rtfhtml")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_html_command_prints_html() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "note.rtf", "{\\rtf1\\ansi\\deff0 \\b Bold text}");

    let output = rtfhtml(&["html", &input]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "<div><strong>Bold text</strong></div>");
}

#[test]
fn test_rtf_command_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "note.html", "<p>Hi {there}</p>");
    let out = dir.path().join("note.rtf");

    let output = rtfhtml(&["rtf", &input, "-o", &out.to_string_lossy()]);
    assert!(output.status.success());

    let rtf = fs::read_to_string(&out).unwrap();
    assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0\n"));
    assert!(rtf.contains("\\pard Hi \\{there\\}\\par\n"));
    assert!(rtf.ends_with('}'));
}

#[test]
fn test_crlf_from_flag() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "note.html", "<p>x</p>");

    let output = rtfhtml(&["rtf", &input, "--line-ending", "crlf"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("\\par\r\n"));
}

#[test]
fn test_text_command() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "note.rtf",
        "{\\rtf1\\ansi\\deff0 \\b Bold \\i Italic \\ul Underline}",
    );

    let output = rtfhtml(&["text", &input]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "Bold Italic Underline");
}

#[test]
fn test_fallback_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "broken.rtf", "{\\rtf1\\ansi Half");

    let output = rtfhtml(&["html", &input]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "<p>Half</p>");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Warning"));
}

#[test]
fn test_strict_fails_on_broken_input() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "broken.rtf", "{\\rtf1\\ansi Half");

    let output = rtfhtml(&["html", &input, "--strict"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unterminated group"));
}

#[test]
fn test_info_compact_json() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "note.rtf", "{\\rtf1 \\b One\\b0  two}");

    let output = rtfhtml(&["info", &input, "--compact"]);
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(info["format"], "rtf");
    assert_eq!(info["words"], 2);
    assert_eq!(info["runs"]["bold"], 1);
}

#[test]
fn test_convert_many_files() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "a.rtf", "{\\rtf1 \\i first}");
    let second = write(dir.path(), "b.rtf", "{\\rtf1 second}");
    let out_dir = dir.path().join("out");

    let output = rtfhtml(&[
        "convert",
        &first,
        &second,
        "--to",
        "html",
        "--output-dir",
        &out_dir.to_string_lossy(),
    ]);
    assert!(output.status.success());

    assert_eq!(
        fs::read_to_string(out_dir.join("a.html")).unwrap(),
        "<div><em>first</em></div>"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("b.html")).unwrap(),
        "<div>second</div>"
    );
}

#[test]
fn test_invalid_utf8_is_read_lossily() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.rtf");
    fs::write(&path, b"{\\rtf1 caf\xe9}").unwrap();

    let output = rtfhtml(&["text", &path.to_string_lossy()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "caf\u{FFFD}");
}

#[test]
fn test_missing_file_fails() {
    let output = rtfhtml(&["html", "/definitely/not/here.rtf"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error"));
}
