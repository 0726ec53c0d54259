//! HTML serialization for [`Document`].
//!
//! Only the tags below are ever written; every piece of document text goes
//! through [`html_escape::encode_safe`], so tag-shaped input comes out as
//! inert text.
//!
//! | node | tag |
//! |---|---|
//! | heading | `<h3>` |
//! | list / item | `<ul>` / `<li>` |
//! | paragraph, plain text | `<p>` |
//! | code block | `<pre><code>` |
//! | bold / italic | `<strong>` / `<em>` |

use html_escape::encode_safe;

use super::ast::{Document, Inline, MarkdownNode};

impl Document {
    /// Serialize the document to escaped HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            write_node(&mut out, node);
        }
        out
    }
}

fn write_node(out: &mut String, node: &MarkdownNode) {
    match node {
        MarkdownNode::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>"));
            write_inline(out, content);
            out.push_str(&format!("</h{level}>\n"));
        }
        MarkdownNode::List { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                write_inline(out, &item.content);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        MarkdownNode::Paragraph { content } => {
            out.push_str("<p>");
            write_inline(out, content);
            out.push_str("</p>\n");
        }
        MarkdownNode::CodeBlock { language, code } => {
            match language {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    encode_safe(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_safe(code));
            out.push_str("</code></pre>\n");
        }
        MarkdownNode::PlainText { text } => {
            out.push_str("<p>");
            out.push_str(&encode_safe(text));
            out.push_str("</p>\n");
        }
    }
}

fn write_inline(out: &mut String, content: &[Inline]) {
    for segment in content {
        match segment {
            Inline::Text(t) => out.push_str(&encode_safe(t)),
            Inline::Bold(t) => {
                out.push_str("<strong>");
                out.push_str(&encode_safe(t));
                out.push_str("</strong>");
            }
            Inline::Italic(t) => {
                out.push_str("<em>");
                out.push_str(&encode_safe(t));
                out.push_str("</em>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::markdown::{parse, Document, Inline, MarkdownNode};

    /// Tags the serializer is allowed to emit.
    const ALLOWED: &[&str] = &["h3", "ul", "li", "p", "pre", "code", "strong", "em"];

    fn tag_names(html: &str) -> Vec<String> {
        html.split('<')
            .skip(1)
            .map(|rest| {
                rest.trim_start_matches('/')
                    .chars()
                    .take_while(char::is_ascii_alphanumeric)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_basic_html() {
        let doc = parse("# Title\n- one\n- *two*\n**b** text").unwrap();
        assert_eq!(
            doc.to_html(),
            "<h3>Title</h3>\n<ul>\n<li>one</li>\n<li><em>two</em></li>\n</ul>\n<p><strong>b</strong> text</p>\n"
        );
    }

    #[test]
    fn test_code_block_html() {
        let doc = parse("```rust\nif a < b && c {}\n```").unwrap();
        assert_eq!(
            doc.to_html(),
            "<pre><code class=\"language-rust\">if a &lt; b &amp;&amp; c {}</code></pre>\n"
        );
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let doc = Document::new(vec![MarkdownNode::Heading {
            level: 9,
            content: vec![Inline::Text("Deep".into())],
        }]);
        assert_eq!(doc.to_html(), "<h6>Deep</h6>\n");
    }

    #[test]
    fn test_injected_markup_is_escaped() {
        let inputs = [
            "<script>alert('x')</script>",
            "# <img src=x onerror=alert(1)>",
            "- <a href=\"javascript:alert(1)\">click</a>",
            "**<iframe>** *</p><p>*",
            "```\n</code></pre><script>\n```",
        ];
        for input in inputs {
            let html = parse(input).unwrap().to_html();
            for tag in tag_names(&html) {
                assert!(ALLOWED.contains(&tag.as_str()), "unexpected <{tag}> in {html}");
            }
            assert!(!html.contains("<script"));
        }
    }

    #[test]
    fn test_plain_fallback_is_escaped() {
        let html = crate::markdown::Document::plain("<b>x & y").to_html();
        assert_eq!(html, "<p>&lt;b&gt;x &amp; y</p>\n");
    }
}
