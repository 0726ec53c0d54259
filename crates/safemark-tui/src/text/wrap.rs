//! Width-aware wrapping for styled ratatui Lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Wrap Lines to fit within `width` display columns.
///
/// Lines that already fit are returned untouched; longer lines are split at
/// word boundaries with span styling preserved.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }

    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap a single Line, returning one or more Lines.
fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let total: usize = line.spans.iter().map(|s| display_width(&s.content)).sum();
    if total <= width {
        return vec![line];
    }

    let styled: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |ch| (ch, span.style)))
        .collect();
    let plain: String = styled.iter().map(|(ch, _)| ch).collect();

    let mut cursor = 0;
    let mut result: Vec<Line<'static>> = textwrap::wrap(&plain, width)
        .iter()
        .map(|row| restyle(row, &styled, &mut cursor))
        .filter(|row| !row.spans.is_empty())
        .collect();

    if result.is_empty() {
        result.push(Line::from(""));
    }
    result
}

/// Rebuild a wrapped row from the styled characters starting at `cursor`.
fn restyle(row: &str, styled: &[(char, Style)], cursor: &mut usize) -> Line<'static> {
    // textwrap drops the whitespace it breaks on
    while let Some((ch, _)) = styled.get(*cursor) {
        if ch.is_whitespace() && !row.starts_with(*ch) {
            *cursor += 1;
        } else {
            break;
        }
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<Style> = None;

    for expected in row.chars() {
        let (ch, style) = styled.get(*cursor).copied().unwrap_or((expected, Style::default()));
        *cursor += 1;

        if let Some(s) = run_style.filter(|s| *s != style) {
            spans.push(Span::styled(std::mem::take(&mut run), s));
        }
        run_style = Some(style);
        run.push(ch);
    }

    if let Some(s) = run_style {
        if !run.is_empty() {
            spans.push(Span::styled(run, s));
        }
    }

    Line::from(spans)
}

/// Display width of a string in terminal columns.
fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_short_line_untouched() {
        let wrapped = wrap_lines(vec![Line::from("Short")], 20);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(line_text(&wrapped[0]), "Short");
    }

    #[test]
    fn test_long_line_wraps_within_width() {
        let line = Line::from("This is a very long line that should definitely be wrapped to fit");
        let wrapped = wrap_lines(vec![line], 20);
        assert!(wrapped.len() > 1);
        for row in &wrapped {
            assert!(display_width(&line_text(row)) <= 20);
        }
    }

    #[test]
    fn test_wrap_preserves_styles() {
        let red = Style::default().fg(Color::Red);
        let blue = Style::default().fg(Color::Blue);
        let line = Line::from(vec![
            Span::styled("alpha beta ", red),
            Span::styled("gamma delta", blue),
        ]);
        let wrapped = wrap_lines(vec![line], 11);
        assert_eq!(
            wrapped.iter().map(line_text).collect::<Vec<_>>(),
            vec!["alpha beta", "gamma delta"]
        );
        assert!(wrapped[0].spans.iter().all(|s| s.style == red));
        assert!(wrapped[1].spans.iter().all(|s| s.style == blue));
    }

    #[test]
    fn test_zero_width_is_noop() {
        let lines = vec![Line::from("anything at all")];
        assert_eq!(wrap_lines(lines.clone(), 0), lines);
    }

    #[test]
    fn test_wide_characters() {
        let line = Line::from("你好世界 你好世界 你好世界");
        let wrapped = wrap_lines(vec![line], 10);
        assert!(wrapped.len() > 1);
        let all: String = wrapped.iter().map(line_text).collect();
        assert!(all.contains("你好世界"));
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("你好"), 4);
    }
}
