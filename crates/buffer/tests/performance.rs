// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Performance sanity checks for the buffer and lexer.
//!
//! These are not formal benchmarks but guard against obvious performance
//! regressions, such as the gap relocating on every keystroke.

use std::time::{Duration, Instant};

use yeet_buffer::{Buffer, BufferId, BufferView, MonospaceMetrics};

/// Time budget, loosened for debug builds where sampled consistency checks
/// rebuild the line index every 64 mutations.
fn budget(ms: u64) -> Duration {
    if cfg!(debug_assertions) {
        Duration::from_millis(ms * 50)
    } else {
        Duration::from_millis(ms)
    }
}

#[test]
fn insert_100k_chars_under_100ms() {
    let mut buffer = Buffer::new(BufferId(1));
    let start = Instant::now();

    for i in 0..100_000 {
        buffer.insert('x', i).unwrap();
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < budget(100),
        "Inserting 100K characters took {:?}, expected < 100ms",
        elapsed
    );

    assert_eq!(buffer.count(), 100_000);
    assert_eq!(buffer.line_count(), 1);
}

#[test]
fn insert_100k_chars_with_newlines_under_200ms() {
    let mut buffer = Buffer::new(BufferId(1));
    let start = Instant::now();

    for i in 0..100_000 {
        let ch = if i % 80 == 79 { '\n' } else { 'x' };
        buffer.insert(ch, i).unwrap();
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < budget(200),
        "Inserting 100K characters with newlines took {:?}, expected < 200ms",
        elapsed
    );

    // Should have roughly 100000/80 = 1250 lines
    assert!(buffer.line_count() > 1000);
}

#[test]
fn line_access_performance() {
    let content: String = (0..1000)
        .map(|i| format!("Line number {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    let buffer = Buffer::from_text(BufferId(1), &content);
    let start = Instant::now();

    for _ in 0..100 {
        for line in 0..buffer.line_count() {
            let _ = buffer.line_content(line);
        }
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < budget(200),
        "Accessing {} lines 100 times took {:?}, expected < 200ms",
        buffer.line_count(),
        elapsed
    );
}

#[test]
fn delete_all_chars_performance() {
    let mut buffer = Buffer::from_text(BufferId(1), &"x".repeat(10_000));
    let start = Instant::now();

    while !buffer.is_empty() {
        buffer.remove_at(buffer.count() - 1).unwrap();
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < budget(50),
        "Deleting 10K characters took {:?}, expected < 50ms",
        elapsed
    );
}

#[test]
fn lex_large_document_under_100ms() {
    let line = "int value = compute(42, \"text\"); /* note */ // trailing\n";
    let buffer_text = line.repeat(2_000);
    let mut buffer = Buffer::from_text(BufferId(1), &buffer_text);
    // Put the gap in the middle so the split path is exercised.
    buffer.insert(' ', buffer.count() / 2).unwrap();

    let start = Instant::now();
    assert!(buffer.refresh_syntax());
    let elapsed = start.elapsed();

    assert!(
        elapsed < budget(100),
        "Lexing {} characters took {:?}, expected < 100ms",
        buffer.count(),
        elapsed
    );
    assert_eq!(buffer.lex_stats().chars, buffer.count());
}

#[test]
fn vertical_movement_through_long_document() {
    let content = "short\na much longer line of text\n".repeat(2_000);
    let buffer = Buffer::from_text(BufferId(1), &content);
    let metrics = MonospaceMetrics::default();
    let mut view = BufferView::new(BufferId(1));
    view.set_cursor(&buffer, &metrics, 20).unwrap();

    let start = Instant::now();
    for _ in 0..buffer.line_count() {
        view.move_vertical(&buffer, &metrics, 1);
    }
    let elapsed = start.elapsed();

    assert!(
        elapsed < budget(100),
        "Moving through {} lines took {:?}, expected < 100ms",
        buffer.line_count(),
        elapsed
    );
    assert_eq!(view.line(), buffer.line_count() - 1);
}
