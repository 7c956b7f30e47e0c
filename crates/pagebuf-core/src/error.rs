//! Error types surfaced by the allocator.

use std::io;

use thiserror::Error;

/// Failures of the underlying virtual-memory primitive.
///
/// A failed map leaves the allocator untouched. A failed unmap is reported,
/// but the mapping is still dropped from the allocator's books since it is
/// no longer usable either way.
#[derive(Debug, Error)]
pub enum AllocError {
    /// The operating system refused an anonymous mapping request.
    #[error("anonymous mapping of {size} bytes failed: {source}")]
    Map {
        size: usize,
        #[source]
        source: io::Error,
    },

    /// The operating system refused to release a mapping.
    #[error("unmapping {size} bytes at {addr:#x} failed: {source}")]
    Unmap {
        addr: usize,
        size: usize,
        #[source]
        source: io::Error,
    },
}
