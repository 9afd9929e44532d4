//! cleave-buffer: UTF-8 aware gap buffer text storage.
//!
//! This crate provides the text-storage engine for an interactive editor: a
//! single growable byte buffer with a movable gap at the edit point.
//! Insertions and deletions clustered near the edit point are O(1)
//! amortized, cursor motion counts whole Unicode code points, and line
//! iteration transparently stitches lines that the gap happens to split.
//!
//! # Overview
//!
//! The main type is [`GapBuffer`], which provides:
//! - Validated UTF-8 insertion at the edit point
//! - Symbol-counted deletion in both directions, with silent clamping
//! - Relative and absolute edit-point motion
//! - Lazy forward iteration over logical lines
//!
//! # Example
//!
//! ```
//! use cleave_buffer::GapBuffer;
//!
//! let mut buffer = GapBuffer::from_str("hello\nwörld");
//! buffer.move_absolute(5);
//! buffer.insert_str(", there")?;
//! assert_eq!(buffer.to_string(), "hello, there\nwörld");
//!
//! let lines: Vec<_> = buffer.lines().collect();
//! assert_eq!(lines, ["hello, there", "wörld"]);
//! # Ok::<(), cleave_buffer::Error>(())
//! ```
//!
//! # Storage model
//!
//! A buffer either owns its storage (growable: insertions relocate it when
//! the gap runs out) or wraps a caller-supplied fixed region
//! ([`GapBuffer::from_fixed_region`]), in which case insertions beyond the
//! region's capacity fail with [`Error::NotGrowable`] and nothing is ever
//! freed. Either way the choice is made at construction and never changes.

mod error;
mod gap_buffer;
mod lines;
pub mod utf8;

pub use error::Error;
pub use gap_buffer::GapBuffer;
pub use lines::Lines;
