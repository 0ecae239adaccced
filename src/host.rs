// Chunk: docs/chunks/host_binary - Command-line host for the editor core

//! One-shot host: load a file, run a tick, report what the core sees.

use std::io::Write;

use anyhow::{bail, Context};
use yeet_buffer::{BufferId, BufferView, Editor, GlyphMetrics, Point};
use yeet_syntax::{Color, Style, SyntaxTheme};

/// What to print after the summary line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dump {
    pub lexemes: bool,
    pub spans: bool,
    /// 1-based line to print as styled spans.
    pub line: Option<usize>,
    /// View-local pixel position to resolve to a buffer offset.
    pub pick: Option<Point>,
}

/// Writes a report on buffer `id` to `out`.
///
/// The caller is expected to have ticked the editor; a buffer with stale
/// syntax reports its previous lex.
pub fn report<W: Write, M: GlyphMetrics + ?Sized>(
    editor: &Editor,
    id: BufferId,
    theme: &SyntaxTheme,
    metrics: &M,
    dump: &Dump,
    out: &mut W,
) -> anyhow::Result<()> {
    let buffer = editor
        .find_buffer(id)
        .with_context(|| format!("buffer {} is not open", id))?;
    let stats = buffer.lex_stats();

    writeln!(
        out,
        "{}: {} lines, {} chars, {} lexemes ({} us, {})",
        buffer.title(),
        buffer.line_count(),
        buffer.count(),
        stats.lexemes,
        stats.elapsed.as_micros(),
        buffer.language()
    )?;

    if dump.lexemes {
        for lexeme in buffer.syntax() {
            writeln!(out, "{}\t{}", lexeme.offset, lexeme.kind.name())?;
        }
    }

    if dump.spans {
        for (range, kind) in buffer.spans() {
            let text = buffer.slice(range.start, range.end);
            writeln!(out, "{}..{}\t{}\t{:?}", range.start, range.end, kind.name(), text)?;
        }
    }

    if let Some(line) = dump.line {
        if line == 0 || line > buffer.line_count() {
            bail!(
                "line {} is out of range (file has {} lines)",
                line,
                buffer.line_count()
            );
        }
        for span in buffer.styled_line(line - 1, theme).spans {
            writeln!(out, "{}\t{:?}", describe_style(&span.style), span.text)?;
        }
    }

    if let Some(point) = dump.pick {
        // A fresh view: unscrolled, so the point is relative to line 1.
        let view = BufferView::new(id);
        let offset = view.pick_index(buffer, metrics, point);
        let pos = buffer.position_of(offset);
        writeln!(
            out,
            "pick {},{}\t{}\t{}:{}",
            point.x,
            point.y,
            offset,
            pos.line + 1,
            pos.col + 1
        )?;
    }

    Ok(())
}

fn describe_color(color: Color) -> String {
    match color {
        Color::Default => String::from("default"),
        Color::Indexed(index) => format!("color{}", index),
        Color::Rgb { r, g, b } => format!("#{:02x}{:02x}{:02x}", r, g, b),
    }
}

fn describe_style(style: &Style) -> String {
    let mut desc = describe_color(style.fg);
    for (on, name) in [
        (style.bold, "bold"),
        (style.italic, "italic"),
        (style.dim, "dim"),
        (style.underline, "underline"),
    ] {
        if on {
            desc.push('+');
            desc.push_str(name);
        }
    }
    desc
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeet_buffer::MonospaceMetrics;

    fn editor_with(text: &str) -> (Editor, BufferId) {
        let mut editor = Editor::new();
        let buffer = editor.create_buffer();
        buffer.insert_str(text, 0).unwrap();
        let id = buffer.id();
        editor.tick();
        (editor, id)
    }

    fn run(editor: &Editor, id: BufferId, dump: &Dump) -> String {
        let mut out = Vec::new();
        let metrics = MonospaceMetrics::new(10.0, 20.0, 4);
        report(editor, id, &SyntaxTheme::catppuccin_mocha(), &metrics, dump, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_line() {
        let (editor, id) = editor_with("a\nb\n");
        let out = run(&editor, id, &Dump::default());
        assert!(out.starts_with("untitled: 3 lines, 4 chars, "));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_lexeme_dump() {
        let (editor, id) = editor_with("/* a */ b");
        let dump = Dump {
            lexemes: true,
            ..Dump::default()
        };
        let out = run(&editor, id, &dump);
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(lines, ["0\tcomment", "7\twhitespace", "8\tidentifier", "9\twhitespace"]);
    }

    #[test]
    fn test_span_dump() {
        let (editor, id) = editor_with("x 1");
        let dump = Dump {
            spans: true,
            ..Dump::default()
        };
        let out = run(&editor, id, &dump);
        assert!(out.contains("0..1\tidentifier\t\"x\""));
        assert!(out.contains("2..3\tnumber\t\"1\""));
    }

    #[test]
    fn test_styled_line_dump() {
        let (editor, id) = editor_with("int x;\n// done");
        let dump = Dump {
            line: Some(2),
            ..Dump::default()
        };
        let out = run(&editor, id, &dump);
        assert!(out.contains("#6c7086+italic\t\"// done\""));
    }

    #[test]
    fn test_line_out_of_range() {
        let (editor, id) = editor_with("one line");
        let dump = Dump {
            line: Some(5),
            ..Dump::default()
        };
        let mut out = Vec::new();
        let metrics = MonospaceMetrics::default();
        let err = report(&editor, id, &SyntaxTheme::default(), &metrics, &dump, &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_pick_uses_metrics() {
        // 10px cells, 20px lines, tab stops every 4 cells.
        let (editor, id) = editor_with("ab\n\tcd");
        let dump = Dump {
            pick: Some(Point::new(42.0, 25.0)),
            ..Dump::default()
        };
        let out = run(&editor, id, &dump);
        // Line 2: the tab spans 0..40, so x=42 is nearest the left of 'c'.
        assert!(out.contains("pick 42,25\t4\t2:2\n"));
    }

    #[test]
    fn test_describe_style() {
        assert_eq!(describe_style(&Style::default()), "default");
        assert_eq!(describe_color(Color::Indexed(3)), "color3");
    }
}
