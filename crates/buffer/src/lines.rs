//! Forward line iteration over a gap buffer.
//!
//! Lines are newline-delimited spans of the logical text. A line that lies
//! entirely on one side of the gap is yielded as a borrowed slice of the
//! buffer; a line that straddles the gap is assembled into an owned string.
//! `Cow` carries both cases, so callers only pay for a copy when the gap
//! actually splits a line.
//!
//! The iterator scans raw storage coordinates and crosses the gap exactly
//! once per traversal. It never yields the delimiter, yields an unterminated
//! final fragment once, and is restarted by calling [`GapBuffer::lines`]
//! again. Holding it borrows the buffer, so edits (which could relocate the
//! storage) cannot happen mid-traversal.

use std::borrow::Cow;

use crate::gap_buffer::{text_slice, GapBuffer};

/// Iterator over the logical lines of a [`GapBuffer`].
#[derive(Debug)]
pub struct Lines<'b, 'a> {
    buffer: &'b GapBuffer<'a>,
    /// Next byte offset to scan from, in raw storage coordinates.
    cursor: usize,
    /// Whether the scan has passed the gap.
    crossed_gap: bool,
}

impl<'b, 'a> Lines<'b, 'a> {
    pub(crate) fn new(buffer: &'b GapBuffer<'a>) -> Self {
        Self {
            buffer,
            cursor: 0,
            crossed_gap: false,
        }
    }
}

fn find_newline(data: &[u8], from: usize, until: usize) -> usize {
    let mut i = from;
    while i < until && data[i] != b'\n' {
        i += 1;
    }
    i
}

impl<'b> Iterator for Lines<'b, '_> {
    type Item = Cow<'b, str>;

    fn next(&mut self) -> Option<Cow<'b, str>> {
        let (data, gap_start, gap_end) = self.buffer.raw();
        let total = data.len();

        if self.crossed_gap {
            // Everything left is contiguous; plain scan to newline or end.
            let start = self.cursor;
            let end = find_newline(data, start, total);
            if end == total && end == start {
                return None;
            }
            // Step past the delimiter, or stay at the end for the final
            // unterminated fragment (the span check above ends us next call).
            self.cursor = if end < total { end + 1 } else { end };
            return Some(Cow::Borrowed(text_slice(&data[start..end])));
        }

        let start = self.cursor;
        let end = find_newline(data, start, gap_start);

        if end < gap_start {
            // Whole line before the gap.
            self.cursor = end + 1;
            return Some(Cow::Borrowed(text_slice(&data[start..end])));
        }

        // The scan hit the gap with no newline: resume on the other side and
        // stitch the two spans into one logical line.
        let first = &data[start..end];
        let resume = gap_end;
        let end2 = find_newline(data, resume, total);
        let second = &data[resume..end2];

        if end2 == total && first.is_empty() && second.is_empty() {
            // Nothing on either side and no delimiter: true end of content.
            return None;
        }

        self.crossed_gap = true;
        self.cursor = if end2 < total { end2 + 1 } else { end2 };

        // Assemble only when both halves are non-empty.
        let line = if second.is_empty() {
            Cow::Borrowed(text_slice(first))
        } else if first.is_empty() {
            Cow::Borrowed(text_slice(second))
        } else {
            let mut assembled = String::with_capacity(first.len() + second.len());
            assembled.push_str(text_slice(first));
            assembled.push_str(text_slice(second));
            Cow::Owned(assembled)
        };
        Some(line)
    }
}
