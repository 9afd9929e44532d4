//! Error kinds for fallible buffer operations.
//!
//! Every failure is reported synchronously as a value; the buffer is left in
//! its prior valid state. Boundary overshoot (moving or deleting past the
//! available content) is not an error — those operations clamp.

use thiserror::Error;

/// Failure modes of buffer construction, growth, and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The bytes handed to an insertion are not well-formed UTF-8.
    /// The buffer is unmodified.
    #[error("input is not well-formed UTF-8")]
    InvalidEncoding,

    /// The allocator could not provide the region needed to grow the buffer.
    /// The buffer keeps its previous storage and contents.
    #[error("allocation failed while growing the buffer")]
    OutOfMemory,

    /// Growth was required but the buffer wraps a caller-supplied fixed
    /// region and may not relocate.
    #[error("buffer is fixed-size and cannot grow")]
    NotGrowable,

    /// A caller-supplied region is too small: zero bytes at construction, or
    /// smaller than the source content when cloning into it.
    #[error("fixed region is too small to hold the buffer")]
    InsufficientMemory,

    /// The text preceding the gap is not valid UTF-8, so a backward scan
    /// could not find a symbol boundary. Unreachable through the validated
    /// API; reported instead of panicking.
    #[error("buffer contents are corrupted: no symbol boundary before the gap")]
    CorruptedBuffer,
}
