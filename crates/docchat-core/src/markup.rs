//! Lightweight markdown-to-markup conversion for assistant replies, and
//! the reverse for plain-text surfaces.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static MATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(.*?)\$").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-\s(.*)$").unwrap());
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(?:strong|em|div|pre|li|br)\b[^<>]*>").unwrap());

/// Render the markdown subset the chat backend produces into markup.
///
/// Handles bold, emphasis, inline math, fenced code, `- ` list items and
/// blank-line paragraph breaks. Substitutions run in that order.
pub fn render(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    let text = EM_RE.replace_all(&text, "<em>${1}</em>");
    let text = MATH_RE.replace_all(&text, r#"<div class="math">${1}</div>"#);
    let text = CODE_RE.replace_all(&text, r#"<pre class="code">${1}</pre>"#);
    let text = LIST_RE.replace_all(&text, "<li>${1}</li>");
    text.replace("\n\n", "<br>")
}

/// Strip markup back to readable plain text for terminal output.
///
/// Only the tags `render` produces are removed; any other `<` or `>` in
/// the text is kept as written.
pub fn to_plain(markup: &str) -> String {
    let text = markup
        .replace("<br>", "\n\n")
        .replace("<li>", "- ")
        .replace("</li>", "");
    let text = TAG_RE.replace_all(&text, "");
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_emphasis() {
        assert_eq!(
            render("**bold** and *em*"),
            "<strong>bold</strong> and <em>em</em>"
        );
    }

    #[test]
    fn inline_math() {
        assert_eq!(render("area $a*b$"), r#"area <div class="math">a*b</div>"#);
    }

    #[test]
    fn fenced_code_spans_lines() {
        assert_eq!(
            render("```\nfn main() {}\n```"),
            "<pre class=\"code\">\nfn main() {}\n</pre>"
        );
    }

    #[test]
    fn list_items_and_paragraphs() {
        assert_eq!(
            render("Points:\n- one\n- two\n\nDone"),
            "Points:\n<li>one</li>\n<li>two</li><br>Done"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("nothing special here"), "nothing special here");
    }

    #[test]
    fn to_plain_strips_tags() {
        let markup = "<strong>Key</strong> points<br><li>first</li>\n<li>second</li>";
        assert_eq!(to_plain(markup), "Key points\n\n- first\n- second");
    }

    #[test]
    fn to_plain_decodes_entities() {
        assert_eq!(to_plain("a &lt;b&gt; &amp;amp; &quot;c&quot;"), "a <b> &amp; \"c\"");
    }

    #[test]
    fn to_plain_keeps_comparisons() {
        let text = "if a < b and c > d then swap";
        assert_eq!(to_plain(&render(text)), text);
        assert_eq!(
            to_plain(&render("**x** < 3 and y > 2")),
            "x < 3 and y > 2"
        );
    }

    #[test]
    fn to_plain_strips_math_and_code_blocks() {
        assert_eq!(
            to_plain(&render("area $a*b$ then ```let x = 1;```")),
            "area a*b then let x = 1;"
        );
    }
}
