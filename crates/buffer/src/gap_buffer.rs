//! Gap buffer storage, cursor navigation, and edit operations.
//!
//! A gap buffer is a byte array with a movable gap at the edit point.
//! Insertions and deletions at the edit point are O(1) amortized; moving the
//! edit point is O(distance) but amortizes well for typical editing patterns
//! (locality of edits).
//!
//! The logical text is the concatenation of the bytes before and after the
//! gap, and it is kept well-formed UTF-8 at all times: every insertion is
//! validated, and cursor motion and deletion work in whole symbols
//! (code points), so the gap never lands inside a multi-byte sequence.

use std::fmt;

use crate::error::Error;
use crate::lines::Lines;
use crate::utf8;

const INITIAL_GAP_SIZE: usize = 64;
const GROWTH_FACTOR: usize = 2;

/// Backing storage for a buffer, fixed at construction.
///
/// `Owned` storage may be relocated to a larger region when an insertion
/// outgrows the gap. `Fixed` storage wraps a caller-supplied region: the
/// buffer never grows it and never frees it (the borrow ends instead).
#[derive(Debug)]
enum Storage<'a> {
    Owned(Vec<u8>),
    Fixed(&'a mut [u8]),
}

impl Storage<'_> {
    fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(data) => data,
            Storage::Fixed(region) => region,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Owned(data) => data,
            Storage::Fixed(region) => region,
        }
    }
}

/// A gap buffer holding UTF-8 text.
///
/// The storage is logically partitioned as
/// `[text before gap | gap (unused) | text after gap]`. The edit point sits
/// at `gap_start`: inserted text lands immediately before it, deletions
/// consume symbols on either side of it, and moving it slides the gap.
///
/// The lifetime parameter is the borrow of a caller-supplied region;
/// self-allocating buffers are `GapBuffer<'static>`.
#[derive(Debug)]
pub struct GapBuffer<'a> {
    storage: Storage<'a>,
    /// Byte index where the gap starts (first unused position).
    gap_start: usize,
    /// Byte index where the gap ends (first used position after gap).
    gap_end: usize,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

/// View of a known-valid text span as `&str`.
///
/// The buffer validates all inserted bytes and only ever splits the text at
/// symbol boundaries, so both text spans are well-formed UTF-8 by invariant.
pub(crate) fn text_slice(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).expect("buffer text is not valid UTF-8")
}

fn count_symbols(bytes: &[u8]) -> usize {
    let mut i = 0;
    let mut count = 0;
    while i < bytes.len() {
        i += utf8::symbol_len(bytes[i]);
        count += 1;
    }
    count
}

impl GapBuffer<'static> {
    /// Creates a new empty gap buffer with a default-sized gap.
    pub fn new() -> Self {
        Self::from_owned(vec![0; INITIAL_GAP_SIZE], 0, INITIAL_GAP_SIZE)
    }

    /// Creates an empty gap buffer with exactly `capacity` bytes of free
    /// space, reported as `OutOfMemory` if the allocator refuses.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;
        data.resize(capacity, 0);
        Ok(Self::from_owned(data, 0, capacity))
    }

    /// Creates a gap buffer initialized with the given text.
    ///
    /// The edit point is placed after the text, so appending is cheap.
    ///
    /// Note: we don't implement `FromStr` because it requires returning
    /// `Result`, but building a buffer from a string cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let bytes = text.as_bytes();
        let total = bytes.len() + INITIAL_GAP_SIZE;
        let mut data = Vec::with_capacity(total);
        data.extend_from_slice(bytes);
        data.resize(total, 0);
        Self::from_owned(data, bytes.len(), total)
    }

    fn from_owned(data: Vec<u8>, gap_start: usize, gap_end: usize) -> Self {
        Self {
            storage: Storage::Owned(data),
            gap_start,
            gap_end,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }
}

impl<'a> GapBuffer<'a> {
    /// Creates a non-growable gap buffer over a caller-supplied region.
    ///
    /// The whole region becomes the gap; existing bytes in it are treated as
    /// free space. Fails with `InsufficientMemory` for an empty region,
    /// which could never hold any content.
    pub fn from_fixed_region(region: &'a mut [u8]) -> Result<GapBuffer<'a>, Error> {
        if region.is_empty() {
            return Err(Error::InsufficientMemory);
        }
        let gap_end = region.len();
        Ok(GapBuffer {
            storage: Storage::Fixed(region),
            gap_start: 0,
            gap_end,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        })
    }

    /// Clones this buffer's content and edit point into a caller-supplied
    /// region, producing a non-growable buffer.
    ///
    /// Fails with `InsufficientMemory` if the region cannot hold the
    /// logical text.
    pub fn clone_into_fixed_region<'b>(
        &self,
        region: &'b mut [u8],
    ) -> Result<GapBuffer<'b>, Error> {
        let mut clone = GapBuffer::from_fixed_region(region)?;
        if clone.capacity() < self.len() {
            return Err(Error::InsufficientMemory);
        }
        clone.insert_at_gap_start(self.before_gap())?;
        clone.insert_at_gap_end(self.after_gap())?;
        Ok(clone)
    }

    // ==================== Inspection ====================

    /// Returns the length of the logical text in bytes (excluding the gap).
    pub fn len(&self) -> usize {
        self.total() - self.gap_len()
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total size of the managed region in bytes.
    pub fn capacity(&self) -> usize {
        self.total()
    }

    /// Returns the number of symbols (code points) in the logical text.
    pub fn symbol_count(&self) -> usize {
        count_symbols(self.before_gap()) + count_symbols(self.after_gap())
    }

    /// Returns the byte offset of the edit point within the logical text.
    ///
    /// Insertions land immediately before this offset.
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    fn total(&self) -> usize {
        self.storage.as_slice().len()
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    pub(crate) fn before_gap(&self) -> &[u8] {
        &self.storage.as_slice()[..self.gap_start]
    }

    pub(crate) fn after_gap(&self) -> &[u8] {
        &self.storage.as_slice()[self.gap_end..]
    }

    /// Raw storage and gap bounds, for the line iterator's raw-coordinate
    /// scan. Bytes inside the gap range hold no meaningful content.
    pub(crate) fn raw(&self) -> (&[u8], usize, usize) {
        (self.storage.as_slice(), self.gap_start, self.gap_end)
    }

    /// Returns an iterator over the logical lines of the buffer.
    ///
    /// While it is alive the buffer cannot be mutated; iterate again to
    /// restart after an edit.
    pub fn lines(&self) -> Lines<'_, 'a> {
        Lines::new(self)
    }

    // ==================== Growth ====================

    /// Relocates the buffer into a region with at least `min_free` bytes of
    /// gap, preserving the logical text and the edit point.
    fn grow(&mut self, min_free: usize) -> Result<(), Error> {
        if matches!(self.storage, Storage::Fixed(_)) {
            return Err(Error::NotGrowable);
        }

        let total = self.total();
        let new_total = (total * GROWTH_FACTOR).max(total + min_free);

        let mut new_data = Vec::new();
        new_data
            .try_reserve_exact(new_total)
            .map_err(|_| Error::OutOfMemory)?;

        // Copy the two text spans to the ends of the new region; the gap is
        // whatever is left between them, at the same logical position.
        let after_len = self.after_gap().len();
        new_data.extend_from_slice(self.before_gap());
        new_data.resize(new_total - after_len, 0);
        new_data.extend_from_slice(self.after_gap());

        self.storage = Storage::Owned(new_data);
        self.gap_end = new_total - after_len;
        Ok(())
    }

    /// Ensures the gap holds at least `min_free` free bytes, growing if
    /// needed and permitted.
    fn ensure_gap(&mut self, min_free: usize) -> Result<(), Error> {
        if self.gap_len() >= min_free {
            return Ok(());
        }
        self.grow(min_free)
    }

    // ==================== Raw insert primitives ====================

    /// Copies `bytes` into the start of the gap, advancing the edit point
    /// past them.
    fn insert_at_gap_start(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.ensure_gap(bytes.len())?;
        let start = self.gap_start;
        self.storage.as_mut_slice()[start..start + bytes.len()].copy_from_slice(bytes);
        self.gap_start += bytes.len();
        Ok(())
    }

    /// Copies `bytes` into the end of the gap without moving the edit point.
    /// Used to re-seed the after-gap span when cloning.
    fn insert_at_gap_end(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.ensure_gap(bytes.len())?;
        let end = self.gap_end;
        self.storage.as_mut_slice()[end - bytes.len()..end].copy_from_slice(bytes);
        self.gap_end -= bytes.len();
        Ok(())
    }

    // ==================== Edit operations ====================

    /// Validates `bytes` as UTF-8 and inserts them at the edit point.
    ///
    /// Fails with `InvalidEncoding` for malformed input, or with
    /// `OutOfMemory` / `NotGrowable` when the gap cannot be enlarged. The
    /// buffer is unmodified on any failure.
    pub fn insert_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if !utf8::validate(bytes) {
            return Err(Error::InvalidEncoding);
        }
        self.insert_at_gap_start(bytes)?;
        self.assert_buffer_valid();
        Ok(())
    }

    /// Inserts a string at the edit point.
    ///
    /// `&str` is well-formed by construction, so only growth can fail.
    pub fn insert_str(&mut self, text: &str) -> Result<(), Error> {
        self.insert_at_gap_start(text.as_bytes())?;
        self.assert_buffer_valid();
        Ok(())
    }

    /// Inserts a single character at the edit point.
    pub fn insert_char(&mut self, ch: char) -> Result<(), Error> {
        let mut encoded = [0; 4];
        self.insert_str(ch.encode_utf8(&mut encoded))
    }

    /// Deletes up to `count` symbols before the edit point.
    ///
    /// Deleting more symbols than precede the edit point clamps to deleting
    /// them all.
    pub fn delete_backward(&mut self, count: usize) -> Result<(), Error> {
        self.gap_start = self.preceding_offset(count)?;
        self.assert_buffer_valid();
        Ok(())
    }

    /// Deletes up to `count` symbols after the edit point.
    ///
    /// Deleting more symbols than follow the edit point clamps to deleting
    /// them all.
    pub fn delete_forward(&mut self, count: usize) {
        self.gap_end = self.following_offset(count);
        self.assert_buffer_valid();
    }

    // ==================== Cursor navigation ====================

    /// Moves the edit point by `delta` symbols: backward when negative,
    /// forward when positive. Clamps at either end of the text.
    pub fn move_relative(&mut self, delta: isize) -> Result<(), Error> {
        if delta < 0 {
            let target = self.preceding_offset(delta.unsigned_abs())?;
            self.move_gap_to(target);
        } else {
            let target = self.following_offset(delta as usize);
            self.move_gap_to(target - self.gap_len());
        }
        self.assert_buffer_valid();
        Ok(())
    }

    /// Moves the edit point to `index` symbols from the start of the logical
    /// text, clamping to the end if the text is shorter.
    pub fn move_absolute(&mut self, index: usize) {
        let target = {
            let data = self.storage.as_slice();
            let total = data.len();
            let mut i = if self.gap_start > 0 { 0 } else { self.gap_end };
            let mut remaining = index;
            while remaining > 0 && i < total {
                i = (i + utf8::symbol_len(data[i])).min(total);
                // When the scan reaches the gap, jump over it.
                if i == self.gap_start {
                    i = self.gap_end;
                }
                remaining -= 1;
            }
            if i <= self.gap_start {
                i
            } else {
                i - self.gap_len()
            }
        };
        self.move_gap_to(target);
        self.assert_buffer_valid();
    }

    /// Computes the raw byte offset of the symbol boundary `count` symbols
    /// before the edit point, stopping early at offset 0.
    ///
    /// Walks backward over continuation bytes until each symbol's lead byte
    /// is reached. Meeting a continuation byte at offset 0 means the text
    /// before the gap is not valid UTF-8; that is reported as
    /// `CorruptedBuffer` rather than scanning out of range.
    fn preceding_offset(&self, count: usize) -> Result<usize, Error> {
        let data = self.storage.as_slice();
        let mut i = self.gap_start;
        let mut remaining = count;
        while remaining > 0 && i > 0 {
            loop {
                if i == 0 {
                    return Err(Error::CorruptedBuffer);
                }
                i -= 1;
                if !utf8::is_continuation(data[i]) {
                    break;
                }
            }
            remaining -= 1;
        }
        Ok(i)
    }

    /// Computes the raw byte offset of the symbol boundary `count` symbols
    /// after the edit point, stopping early at the end of storage.
    fn following_offset(&self, count: usize) -> usize {
        let data = self.storage.as_slice();
        let total = data.len();
        let mut i = self.gap_end;
        let mut remaining = count;
        while remaining > 0 && i < total {
            // The clamp matters only if the trailing symbol were truncated,
            // which valid contents rule out.
            i = (i + utf8::symbol_len(data[i])).min(total);
            remaining -= 1;
        }
        i
    }

    /// Slides the gap so its start lands at logical byte position `pos`.
    ///
    /// This is a single contiguous move of exactly the bytes between the old
    /// and new edit point; no other bytes are touched.
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        let gap_start = self.gap_start;
        let gap_end = self.gap_end;

        if pos < gap_start {
            // Move gap left: shift [pos..gap_start] to the far side of the gap.
            let shift = gap_start - pos;
            self.storage
                .as_mut_slice()
                .copy_within(pos..gap_start, gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > gap_start {
            // Move gap right: shift the bytes just after the gap down into it.
            let shift = pos - gap_start;
            self.storage
                .as_mut_slice()
                .copy_within(gap_end..gap_end + shift, gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    // ==================== Validation ====================

    /// Debug assertion: cheap checks on every mutation (gap bounds, and both
    /// gap edges landing on symbol boundaries), plus a full UTF-8 re-check of
    /// both text spans every 1024th mutation so the O(n) scan doesn't tank
    /// perf in tight loops. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn assert_buffer_valid(&mut self) {
        assert!(
            self.gap_start <= self.gap_end && self.gap_end <= self.total(),
            "gap out of bounds: {}..{} of {}",
            self.gap_start,
            self.gap_end,
            self.total(),
        );

        // The symbol straddling either gap edge is where a bookkeeping slip
        // would corrupt the text, so check those edges on every mutation.
        let before = self.before_gap();
        if let Some(lead_at) = (0..before.len())
            .rev()
            .take(4)
            .find(|&i| !utf8::is_continuation(before[i]))
        {
            assert_eq!(
                lead_at + utf8::symbol_len(before[lead_at]),
                before.len(),
                "text before the gap ends mid-symbol"
            );
        }
        if let Some(&first) = self.after_gap().first() {
            assert!(
                !utf8::is_continuation(first),
                "text after the gap starts mid-symbol"
            );
        }

        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 1024 != 0 {
            return;
        }
        assert!(
            utf8::validate(self.before_gap()),
            "text before the gap is not valid UTF-8"
        );
        assert!(
            utf8::validate(self.after_gap()),
            "text after the gap is not valid UTF-8"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_buffer_valid(&mut self) {}
}

impl Default for GapBuffer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GapBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(text_slice(self.before_gap()))?;
        f.write_str(text_slice(self.after_gap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.to_string(), "");
    }

    #[test]
    fn test_with_capacity_zero() {
        let mut buf = GapBuffer::with_capacity(0).unwrap();
        assert_eq!(buf.capacity(), 0);
        // The first insertion forces growth.
        buf.insert_str("hi").unwrap();
        assert_eq!(buf.to_string(), "hi");
    }

    #[test]
    fn test_from_str_places_cursor_at_end() {
        let buf = GapBuffer::from_str("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_insert_round_trip() {
        let mut buf = GapBuffer::new();
        let parts = ["héllo", " ", "wörld", "€𝄞"];
        for part in parts {
            buf.insert_str(part).unwrap();
        }
        let joined: String = parts.concat();
        assert_eq!(buf.to_string(), joined);
        assert_eq!(buf.len(), joined.len());
        assert_eq!(buf.symbol_count(), joined.chars().count());
    }

    #[test]
    fn test_insert_bytes_rejects_malformed() {
        let mut buf = GapBuffer::from_str("seed");
        let bad_inputs: [&[u8]; 4] = [b"\x80", b"ok \xc3", b"\xed\xa0\x80", b"\xf4\x90\x80\x80"];
        for bad in bad_inputs {
            assert_eq!(buf.insert_bytes(bad), Err(Error::InvalidEncoding));
        }
        // Unmodified on failure.
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.to_string(), "seed");
    }

    #[test]
    fn test_insert_at_middle() {
        let mut buf = GapBuffer::from_str("ac");
        buf.move_relative(-1).unwrap();
        buf.insert_char('b').unwrap();
        assert_eq!(buf.to_string(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut buf = GapBuffer::with_capacity(4).unwrap();
        buf.insert_str("ab").unwrap();
        buf.move_relative(-1).unwrap();

        // Much longer than the remaining gap; spliced in at the edit point.
        let long = "x".repeat(100);
        buf.insert_str(&long).unwrap();
        assert_eq!(buf.to_string(), format!("a{}b", long));
        assert!(buf.capacity() >= 102);
    }

    #[test]
    fn test_move_relative_walks_symbols() {
        let mut buf = GapBuffer::from_str("a€b");
        buf.move_relative(-2).unwrap();
        assert_eq!(buf.cursor(), 1); // between 'a' and '€'
        buf.move_relative(1).unwrap();
        assert_eq!(buf.cursor(), 4); // past the 3-byte '€'
    }

    #[test]
    fn test_move_relative_inverse() {
        let mut buf = GapBuffer::from_str("αβγδε");
        buf.move_absolute(3);
        let home = buf.cursor();
        for n in 1..=2 {
            buf.move_relative(n).unwrap();
            buf.move_relative(-n).unwrap();
            assert_eq!(buf.cursor(), home);
        }
    }

    #[test]
    fn test_move_relative_clamps() {
        let mut buf = GapBuffer::from_str("abc");
        buf.move_relative(-100).unwrap();
        assert_eq!(buf.cursor(), 0);
        buf.move_relative(100).unwrap();
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_move_absolute() {
        let mut buf = GapBuffer::from_str("a€b\ncd");
        buf.move_absolute(2);
        assert_eq!(buf.cursor(), 4); // after "a€"
        buf.insert_char('!').unwrap();
        assert_eq!(buf.to_string(), "a€!b\ncd");
    }

    #[test]
    fn test_move_absolute_idempotent() {
        let mut buf = GapBuffer::from_str("one\ntwo\nthree");
        for k in [0, 5, 13, 99] {
            buf.move_absolute(k);
            let cursor = buf.cursor();
            let content = buf.to_string();
            buf.move_absolute(k);
            assert_eq!(buf.cursor(), cursor);
            assert_eq!(buf.to_string(), content);
        }
    }

    #[test]
    fn test_move_absolute_clamps_to_symbol_count() {
        let mut buf = GapBuffer::from_str("€€€");
        buf.move_absolute(1000);
        assert_eq!(buf.cursor(), 9);
    }

    #[test]
    fn test_delete_backward() {
        let mut buf = GapBuffer::from_str("ab€c");
        buf.delete_backward(2).unwrap(); // 'c' and the 3-byte '€'
        assert_eq!(buf.to_string(), "ab");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_delete_backward_clamps() {
        let mut buf = GapBuffer::from_str("ab\ncd");
        buf.move_absolute(2);
        buf.delete_backward(usize::MAX).unwrap();
        assert_eq!(buf.to_string(), "\ncd");
        assert_eq!(buf.cursor(), 0);
        // Nothing precedes the edit point; a second delete is a no-op.
        buf.delete_backward(1).unwrap();
        assert_eq!(buf.to_string(), "\ncd");
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = GapBuffer::from_str("a€bc");
        buf.move_absolute(1);
        buf.delete_forward(2); // '€' and 'b'
        assert_eq!(buf.to_string(), "ac");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_delete_forward_clamps() {
        let mut buf = GapBuffer::from_str("abc");
        buf.move_absolute(1);
        buf.delete_forward(usize::MAX);
        assert_eq!(buf.to_string(), "a");
        buf.delete_forward(1);
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_fixed_region_basics() {
        let mut region = [0u8; 16];
        let mut buf = GapBuffer::from_fixed_region(&mut region).unwrap();
        assert_eq!(buf.capacity(), 16);
        buf.insert_str("hello").unwrap();
        buf.move_relative(-5).unwrap();
        buf.insert_str(">> ").unwrap();
        assert_eq!(buf.to_string(), ">> hello");
    }

    #[test]
    fn test_fixed_region_rejects_empty() {
        let mut region = [0u8; 0];
        assert!(matches!(
            GapBuffer::from_fixed_region(&mut region),
            Err(Error::InsufficientMemory)
        ));
    }

    #[test]
    fn test_fixed_region_exhaustion() {
        let mut region = [0u8; 8];
        let mut buf = GapBuffer::from_fixed_region(&mut region).unwrap();
        buf.insert_str("12345678").unwrap();
        // Full: any further insertion must fail without mutating.
        assert_eq!(buf.insert_str("9"), Err(Error::NotGrowable));
        assert_eq!(buf.to_string(), "12345678");
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn test_clone_into_fixed_region() {
        let mut buf = GapBuffer::from_str("left|right");
        buf.move_absolute(5);

        let mut region = [0u8; 32];
        let clone = buf.clone_into_fixed_region(&mut region).unwrap();
        assert_eq!(clone.to_string(), "left|right");
        assert_eq!(clone.cursor(), 5);
    }

    #[test]
    fn test_clone_into_too_small_region() {
        let buf = GapBuffer::from_str("this will not fit");
        let mut region = [0u8; 4];
        assert!(matches!(
            buf.clone_into_fixed_region(&mut region),
            Err(Error::InsufficientMemory)
        ));
    }

    #[test]
    fn test_cursor_equals_before_gap_length() {
        let mut buf = GapBuffer::from_str("αβγ\nδε");
        for k in [0, 2, 4, 6] {
            buf.move_absolute(k);
            assert_eq!(buf.cursor(), buf.before_gap().len());
            assert_eq!(buf.len(), "αβγ\nδε".len());
        }
    }

    #[test]
    fn test_symbol_count() {
        let buf = GapBuffer::from_str("a€𝄞");
        assert_eq!(buf.symbol_count(), 3);
        assert_eq!(buf.len(), 8);
        assert_eq!(GapBuffer::new().symbol_count(), 0);
    }

    #[test]
    fn test_interleaved_edit_session() {
        let mut buf = GapBuffer::new();
        buf.insert_str("the quick fox").unwrap();
        buf.move_absolute(9);
        buf.insert_str(" brown").unwrap();
        assert_eq!(buf.to_string(), "the quick brown fox");

        buf.move_absolute(4);
        buf.delete_forward(6); // "quick "
        assert_eq!(buf.to_string(), "the brown fox");

        buf.move_relative(100).unwrap();
        buf.delete_backward(4).unwrap(); // " fox"
        assert_eq!(buf.to_string(), "the brown");
    }
}
