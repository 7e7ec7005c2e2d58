//! Integration tests for formatting-run extraction and inspection.

use rtfhtml::{html_to_rtf, inspect, parse_runs, to_json, FormattingRun, JsonFormat, SourceFormat};

#[test]
fn test_runs_from_generated_rtf() {
    let rtf = html_to_rtf("<p>Plain <strong>bold</strong> <em>slanted</em></p>");
    let runs = parse_runs(&rtf);

    let bold: Vec<&FormattingRun> = runs.iter().filter(|r| r.style.bold).collect();
    assert_eq!(bold.len(), 1);
    assert_eq!(bold[0].text, "bold");

    let italic: Vec<&FormattingRun> = runs.iter().filter(|r| r.style.italic).collect();
    assert_eq!(italic.len(), 1);
    assert_eq!(italic[0].text, "slanted");

    // Font and color tables contribute no text.
    let text: String = runs.iter().map(|r| r.text.as_str()).collect();
    assert!(!text.contains("Arial"));
    assert_eq!(text.trim_end(), "Plain bold slanted");
}

#[test]
fn test_runs_nested_groups() {
    let runs = parse_runs("{\\rtf1 a{\\b b{\\i c}d}e}");
    let summary: Vec<(&str, bool, bool)> = runs
        .iter()
        .map(|r| (r.text.as_str(), r.style.bold, r.style.italic))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("a", false, false),
            ("b", true, false),
            ("c", true, true),
            ("d", true, false),
            ("e", false, false),
        ]
    );
}

#[test]
fn test_runs_font_size_changes() {
    let runs = parse_runs("{\\rtf1 \\fs20 small \\fs32 large}");
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].style.font_size, Some(10));
    assert_eq!(runs[1].style.font_size, Some(16));
    assert_eq!(runs[1].text, "large");
}

#[test]
fn test_runs_hex_escapes_and_nonbreaking_space() {
    let runs = parse_runs("{\\rtf1 caf\\'e9 a\\~b}");
    assert_eq!(runs[0].text, "caf a b");
}

#[test]
fn test_inspect_round_trip_document() {
    let rtf = html_to_rtf("<p><b>Title</b></p><p>Body text here</p>");
    let info = inspect(&rtf);

    assert_eq!(info.format, SourceFormat::Rtf);
    assert_eq!(info.words, 4);
    assert_eq!(info.paragraphs, 2);
    assert_eq!(info.runs.as_ref().map(|r| r.bold), Some(1));

    let json = to_json(&info, JsonFormat::Compact).unwrap();
    assert!(json.starts_with("{\"format\":\"rtf\""));
}
