use super::*;

#[test]
fn line_stats_default() {
    let stats = LineStats::default();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.code, 0);
}

#[test]
fn count_empty_source() {
    let counter = LineCounter::default();
    let stats = counter.count("");

    assert_eq!(stats.total, 0);
    assert_eq!(stats.code, 0);
}

#[test]
fn count_code_only() {
    let counter = LineCounter::default();
    let source = "class Program\n{\n    static void Main() { }\n}\n";
    let stats = counter.count(source);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.code, 4);
}

#[test]
fn count_trailing_line_without_newline() {
    let counter = LineCounter::default();
    let stats = counter.count("int a = 1;\nint b = 2;");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.code, 2);
}

#[test]
fn count_single_newline_is_one_line() {
    let counter = LineCounter::default();
    let stats = counter.count("\n");

    assert_eq!(stats.total, 1);
    assert_eq!(stats.code, 1);
}

#[test]
fn count_comment_lines() {
    let counter = LineCounter::default();
    let source = "// header\nusing System;\n    // indented\n\t/// doc\nvar x = 1; // trailing\n";
    let stats = counter.count(source);

    assert_eq!(stats.total, 5);
    assert_eq!(stats.code, 2);
}

#[test]
fn count_blank_lines_as_code() {
    let counter = LineCounter::default();
    let stats = counter.count("\n\n   \n");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 3);
}

#[test]
fn count_block_comments_as_code() {
    let counter = LineCounter::default();
    let stats = counter.count("/* block\n * body\n */\n");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 3);
}

#[test]
fn count_single_slash_is_code() {
    let counter = LineCounter::default();
    let stats = counter.count("/ not a comment\n");

    assert_eq!(stats.code, 1);
}

#[test]
fn count_crlf_line_endings() {
    let counter = LineCounter::default();
    let stats = counter.count("// a\r\nint b;\r\n");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.code, 1);
}

#[test]
fn count_custom_marker() {
    let counter = LineCounter::new("#");
    let stats = counter.count("# comment\nx = 1\n// not a comment here\n");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 2);
}

#[test]
fn code_never_exceeds_total() {
    let counter = LineCounter::default();
    for source in ["", "//", "a", "a\n//b\n\n", "//\n//\n//"] {
        let stats = counter.count(source);
        assert!(stats.code <= stats.total, "source: {source:?}");
    }
}
