/*!
 * Tests for the line translator state machine and inline rules
 */

use std::path::Path;
use org2mdx::conversion::{BlockMode, DocumentContext, ImageRegistry, LineTranslator, rewrite_inline};
use org2mdx::conversion::inline::rule;
use org2mdx::file_utils::RecordingSink;

/// Translate `lines` with a fresh registry and return the body and final mode
fn translate_lines(lines: &[&str]) -> (String, BlockMode) {
    let mut registry = ImageRegistry::default();
    let mut sink = RecordingSink::default();
    let context = DocumentContext { year: "2024", slug: "post", source_root: Path::new("org") };
    let mut translator = LineTranslator::new(context, &mut registry, &mut sink);

    for line in lines {
        translator.translate_line(line).unwrap();
    }

    let mode = translator.mode();
    (translator.finish().1, mode)
}

#[test]
fn test_heading_forEveryLevel_shouldEmitMatchingHashes() {
    for level in 1..=6 {
        let line = format!("{} Title with *stars* and /slashes/", "*".repeat(level));
        let (body, _) = translate_lines(&[line.as_str()]);
        assert_eq!(body, format!("{} Title with *stars* and /slashes/\n", "#".repeat(level)));
    }
}

#[test]
fn test_heading_insideCodeBlock_stillWinsOverQuoting() {
    let (body, mode) = translate_lines(&["#+BEGIN_SRC org", "* not quoted", "#+END_SRC"]);
    assert_eq!(body, "```org\n# not quoted\n```\n");
    assert_eq!(mode, BlockMode::Plain);
}

#[test]
fn test_codeBlock_shouldProduceFenceQuotedLineFence() {
    let (body, _) = translate_lines(&["#+BEGIN_SRC python", "x = [1, 2] | y", "#+END_SRC"]);
    assert_eq!(body, "```python\n> x = [1, 2] | y\n```\n");
}

#[test]
fn test_codeBlock_unterminated_shouldStayInCodeMode() {
    let (body, mode) = translate_lines(&["#+BEGIN_SRC js", "a", "b"]);
    assert_eq!(body, "```js\n> a\n> b\n");
    assert_eq!(mode, BlockMode::Code);
}

#[test]
fn test_resultBlock_shouldFenceAsBashAndDropTerminator() {
    let (body, mode) = translate_lines(&["#+RESULTS:", ": v1", ": v2", "terminator line"]);
    assert_eq!(body, "```bash\nv1\nv2\n```\n");
    assert_eq!(mode, BlockMode::Plain);
}

#[test]
fn test_resultBlock_bareColon_shouldEmitEmptyLine() {
    let (body, mode) = translate_lines(&["#+RESULTS:", ":"]);
    assert_eq!(body, "```bash\n\n");
    assert_eq!(mode, BlockMode::Result);
}

#[test]
fn test_resultsMarker_insideCodeBlock_shouldBeQuoted() {
    let (body, mode) = translate_lines(&["#+BEGIN_SRC sh", "#+RESULTS:", "#+END_SRC"]);
    assert_eq!(body, "```sh\n> #+RESULTS:\n```\n");
    assert_eq!(mode, BlockMode::Plain);
}

#[test]
fn test_plainLine_inlineExamples_shouldRewrite() {
    let cases = [
        ("*bold*", "**bold**"),
        ("/it/", "*it*"),
        ("_u_", "<u>u</u>"),
        ("~s~", "~~s~~"),
        ("[[http://x][L]]", "[L](http://x)"),
        ("a|b", "a | b"),
        ("[ ] task", "- [ ] task"),
        ("[X] done", "- [x] done"),
    ];

    for (input, expected) in cases {
        assert_eq!(rewrite_inline(input), expected, "input: {input}");
    }
}

#[test]
fn test_plainLine_tableRow_shouldPadEverySeparator() {
    let (body, _) = translate_lines(&["|a|b|"]);
    assert_eq!(body, " | a | b | \n");
}

#[test]
fn test_plainLine_leadingStarIsHeadingNotBold() {
    let (body, _) = translate_lines(&["*bold* at start"]);
    assert_eq!(body, "#bold* at start\n");
}

#[test]
fn test_rulesInIsolation_matchSingleRewrite() {
    assert_eq!(rule("bold").unwrap().apply("*b*"), "**b**");
    assert_eq!(rule("table").unwrap().apply("x|y"), "x | y");
    assert_eq!(rule("checkbox_open").unwrap().apply("[ ]"), "- [ ]");
}

#[test]
fn test_unlabelledLink_shouldBeTreatedAsImage() {
    let mut registry = ImageRegistry::default();
    let mut sink = RecordingSink::default();
    let context = DocumentContext { year: "2024", slug: "post", source_root: Path::new("org") };
    let mut translator = LineTranslator::new(context, &mut registry, &mut sink);

    translator.translate_line("[[https://example.com]]").unwrap();
    drop(translator);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.records()[0].destination, "src/images/posts/2024/post/example.com");
    assert_eq!(sink.copies.len(), 1);
}
