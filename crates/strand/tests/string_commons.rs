//! Integration test: the sub-crates working together.
//!
//! Drives a small file-listing scenario end to end: lines are read
//! from a text stream into a `StrBuf`, filtered with a glob pattern,
//! copied into a scoped `PoolStack` level, reported through the
//! formatter, and finally released in bulk.

use std::io::Cursor;

use strand::prelude::*;

const LISTING: &[u8] = b"report.txt\n\nnotes.md\nsummary.txt\n\narchive.tar\n";

#[test]
fn read_filter_pool_format_release() {
    let mut reader = TextReader::new(Cursor::new(LISTING));
    let mut line = StrBuf::new();
    let mut pool = PoolStack::new();

    pool.push();
    let mut kept = Vec::new();
    while let Some(len) = reader.read_line(&mut line).unwrap() {
        assert_eq!(len, line.len());
        if strand::glob::match_bytes(b"*.txt", line.as_bytes()) {
            kept.push(pool.add(line.as_bytes()));
        }
    }
    assert_eq!(kept.len(), 2);
    assert_eq!(pool.get(kept[0]), b"report.txt");
    assert_eq!(pool.get(kept[1]), b"summary.txt");

    // Report on the matches with the formatter.
    let parsed = FormatString::parse("%s (%d bytes)");
    let mut report = StrBuf::new();
    let appended = strand::fmt::append_formatted(
        &mut report,
        &parsed,
        &[
            FormatArg::Str(Some(pool.get(kept[0]))),
            FormatArg::Int(pool.get(kept[0]).len() as i64),
        ],
    )
    .unwrap();
    assert_eq!(report, "report.txt (10 bytes)");
    assert_eq!(appended, report.len());

    // Releasing the scope zeroes everything added under it.
    pool.pop().unwrap();
    for handle in kept {
        assert_eq!(pool.get(handle), b"");
    }
    assert_eq!(pool.pop(), Err(TextError::EmptyStack));
}

#[test]
fn buffer_edits_feed_the_matcher() {
    let mut name = StrBuf::from("  draft.txt  ");
    assert_eq!(name.trim(b" "), 4);
    assert_eq!(name, "draft.txt");

    // Rename in place and recheck the pattern.
    let dot = name.find_byte(b'.').unwrap();
    name.delete_range(0, dot - 1).unwrap();
    name.insert(0, b"final").unwrap();
    assert_eq!(name, "final.txt");
    assert!(strand::glob::matches("*.txt", "final.txt"));
    assert!(!strand::glob::matches("draft*", "final.txt"));
}

#[test]
fn pooled_strings_survive_buffer_reallocation() {
    // The pool copies, so later buffer growth cannot disturb it.
    let mut pool = StringPool::new();
    let mut buf = StrBuf::with_capacity(4).unwrap();
    buf.append(b"abc");
    let stored = pool.add(buf.as_bytes());
    for _ in 0..100 {
        buf.append(b"grow and reallocate");
    }
    assert_eq!(pool.get(stored), b"abc");
}
