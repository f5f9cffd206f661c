//! Whole-document text cleanups offered by the toolbar.

use regex::Regex;
use std::sync::LazyLock;

/// Two ideographic spaces: the conventional first-line indent for Chinese prose.
pub const PARAGRAPH_INDENT: &str = "\u{3000}\u{3000}";

static MARKDOWN_BLOCK_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#|>|-|\*|\+|\d+\.|`|\||!\[)").expect("valid markdown block regex")
});

static ALREADY_INDENTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\x{3000}\x{3000}|\s{4})").expect("valid indent regex"));

static BLANK_RUN_SMART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank-run regex"));

static BLANK_RUN_AGGRESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid blank-run regex"));

/// Indent every prose paragraph line with [`PARAGRAPH_INDENT`].
///
/// Blank lines, lines that start a Markdown construct (headings, quotes, lists, code fences,
/// tables, images) and lines that are already indented are left alone. Indented lines are
/// trimmed before the indent is added.
pub fn indent_paragraphs(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || MARKDOWN_BLOCK_START.is_match(trimmed)
                || ALREADY_INDENTED.is_match(line)
            {
                line.to_string()
            } else {
                format!("{PARAGRAPH_INDENT}{trimmed}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// How aggressively [`remove_empty_lines`] collapses blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLineMode {
    /// Keep paragraph breaks: runs of two or more blank lines become one blank line.
    Smart,
    /// Remove every blank line.
    Aggressive,
}

/// Strip trailing whitespace from every line, then collapse blank lines per `mode`.
pub fn remove_empty_lines(text: &str, mode: BlankLineMode) -> String {
    let trimmed = text
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    match mode {
        BlankLineMode::Smart => BLANK_RUN_SMART.replace_all(&trimmed, "\n\n").into_owned(),
        BlankLineMode::Aggressive => BLANK_RUN_AGGRESSIVE.replace_all(&trimmed, "\n").into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indent_prose_only() {
        let text = "# 标题\n第一段。\n\n- 列表\n  第二段。\n1. 有序\n> 引用\n| a | b |\n![img](x.png)\n```";
        let expected = "# 标题\n\u{3000}\u{3000}第一段。\n\n- 列表\n\u{3000}\u{3000}第二段。\n1. 有序\n> 引用\n| a | b |\n![img](x.png)\n```";
        assert_eq!(indent_paragraphs(text), expected);
    }

    #[test]
    fn test_indent_is_idempotent() {
        let once = indent_paragraphs("段落一\n段落二");
        assert_eq!(indent_paragraphs(&once), once);
    }

    #[test]
    fn test_four_space_indent_is_kept() {
        assert_eq!(indent_paragraphs("    code-ish"), "    code-ish");
    }

    #[test]
    fn test_remove_empty_lines_smart() {
        let text = "a  \n\n\n\nb\n\nc\t";
        assert_eq!(remove_empty_lines(text, BlankLineMode::Smart), "a\n\nb\n\nc");
    }

    #[test]
    fn test_remove_empty_lines_aggressive() {
        let text = "a\n   \n\nb\n\nc";
        assert_eq!(remove_empty_lines(text, BlankLineMode::Aggressive), "a\nb\nc");
    }

    #[test]
    fn test_tidy_text_is_unchanged() {
        let text = "a\n\nb";
        assert_eq!(remove_empty_lines(text, BlankLineMode::Smart), text);
    }
}
