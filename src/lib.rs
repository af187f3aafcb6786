//! Growable buffers with a hard byte budget and explicit allocation failure.
//!
//! [`Vec`] grows whenever it needs to and aborts the process if the allocator refuses. The types
//! in this crate grow the same way, by doubling, but every buffer carries a byte budget it will
//! never exceed, and every allocation that can fail returns an [`Error`] instead of aborting. A
//! failing operation leaves its buffer exactly as it was.
//!
//! # When to use this
//!
//! This crate fits code that must bound its memory use per buffer, or that handles untyped
//! records whose width is only known at runtime: packet and record assembly, simple storage
//! layers, C interop that wants a terminated string ready to hand over.
//!
//! # Quick start
//!
//! ```
//! use growbuf::{List, Text};
//!
//! // A list of 4-byte elements
//! let mut list = List::new(4).unwrap();
//! list.append(&1u32.to_le_bytes()).unwrap();
//! list.append(&3u32.to_le_bytes()).unwrap();
//! list.insert(1, &2u32.to_le_bytes()).unwrap();
//! assert_eq!(list.get(1), Some(&2u32.to_le_bytes()[..]));
//!
//! // A null-terminated string
//! let mut text = Text::from_bytes(b"To be").unwrap();
//! text.append(b", or not to be").unwrap();
//! assert_eq!(text.as_bytes_with_nul(), b"To be, or not to be\0");
//! ```
//!
//! # Byte budgets
//!
//! ```
//! use growbuf::{List, ErrorKind};
//!
//! let mut list = List::builder(1)
//!     .initial_capacity(2)   // start at 2 elements
//!     .max_bytes(4)          // never allocate more than 4 bytes
//!     .build()
//!     .unwrap();
//!
//! list.append_many(b"abcd", 4).unwrap();
//! let err = list.append(b"e").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::CapacityExhausted);
//! assert_eq!(list.as_bytes(), b"abcd");
//! ```
//!
//! # Crate organisation
//!
//! - [`List`]: growable array of fixed-width byte elements, with [`ListBuilder`] for capacity
//!   and budget.
//! - [`Text`]: growable null-terminated byte string, with [`TextBuilder`].
//! - [`Error`] and [`ErrorKind`]: the single error type and its classification.
//! - [`dump`]: `Display` adapters rendering a buffer's allocation for debugging.
//! - [`constants`]: the default initial lengths and the global budget
//!   ([`MAX_BYTES`](constants::MAX_BYTES)).
//!
//! # Logging
//!
//! Growth is reported through [`tracing`]: every reallocation at `trace` level, and a buffer that
//! stalls at its budget or is refused by the allocator at `debug` level. Nothing is logged on the
//! happy path unless a subscriber asks for those levels.

pub mod constants;
pub mod dump;
mod error;
pub mod list;
pub mod text;

pub use error::{Error, ErrorKind, Result};
pub use list::{List, ListBuilder};
pub use text::{Text, TextBuilder};
