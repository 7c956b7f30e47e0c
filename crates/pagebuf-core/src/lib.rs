//! # pagebuf-core
//!
//! A single-owner allocator for bulk byte buffers, built directly on
//! anonymous memory mappings.
//!
//! Programs that churn through many uniform, short-to-medium-lived byte
//! regions (parser arenas, column blocks, intermediate buffers) pay the
//! general-purpose heap for bookkeeping they do not need. This allocator
//! hands out raw regions instead: power-of-two size classes carved linearly
//! from shared pages, a per-class intrusive free list for returned slots, a
//! dedicated mapping per large request, and eager reclamation the moment a
//! page holds no live slot.
//!
//! There is no per-allocation metadata. Every mapping starts on a
//! [`config::PAGE_SIZE`] boundary, so masking the low bits of any returned
//! address recovers the owning page header, which makes `free` O(1).
//!
//! The allocator is not internally synchronized; an instance belongs to one
//! logical owner at a time (wrap it in a mutex or keep one per thread for
//! cross-thread use). Callers own returned regions until they hand them
//! back through [`Allocator::free`] or [`Allocator::resize`].
//!
//! ```
//! use pagebuf_core::Allocator;
//!
//! let mut alloc = Allocator::default();
//! let mut buf = alloc.alloc(1024)?;
//! // SAFETY: buf is live and nothing else views it.
//! unsafe { buf.as_mut_slice().fill(0xA5) };
//! // SAFETY: buf came from this allocator and is not used afterwards.
//! unsafe { alloc.free(buf)? };
//! assert_eq!(alloc.mapped_bytes(), 0);
//! # Ok::<(), pagebuf_core::AllocError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

pub mod allocator;
pub mod config;
pub mod error;
pub mod freelist;
pub mod page;
pub mod region;
pub mod size_class;
pub mod vm;

pub use allocator::{usable_size, Allocator, Stats};
pub use error::AllocError;
pub use region::Region;
