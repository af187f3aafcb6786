//! Growable array of fixed-width, untyped elements.
//!
//! A [`List`] stores elements as runs of `element_size` bytes in one owned block. Capacity doubles
//! whenever an insertion needs room, and never passes the list's byte budget (see
//! [`MAX_BYTES`]). Every element is opaque to the list: it is copied in and out byte for byte.
//!
//! # Example
//!
//! ```
//! use growbuf::List;
//!
//! let mut list = List::with_capacity(2, 32).unwrap();
//!
//! // Eight 2-byte elements in one go
//! list.insert_many(0, b"ABCDEFGHIJKLMNOP", 8).unwrap();
//! assert_eq!(list.len(), 8);
//! assert_eq!(list.first(), Some(&b"AB"[..]));
//! assert_eq!(list.last(), Some(&b"OP"[..]));
//!
//! // Shift the tail down over index 1
//! list.remove(1).unwrap();
//! assert_eq!(list.get(1), Some(&b"EF"[..]));
//! ```

use crate::constants::{DEFAULT_INITIAL_LENGTH, MAX_BYTES};
use crate::error::{Error, Result, alloc_zeroed};
use std::fmt;
use std::ops::Range;

/// A growable array of elements that are each `element_size` bytes wide.
///
/// # Capacity Management
///
/// - **Growth**: when an insertion needs more slots, the allocated length doubles. If doubling
///   would overflow or pass the byte budget, it is clamped to `max_bytes / element_size`. Once the
///   clamp is reached, growth makes no further progress and insertions fail with
///   [`Error::CapacityExceeded`].
/// - **Reallocation**: growth allocates a new block, copies the whole old allocation into it and
///   drops the old block. It is the only operation that moves storage.
/// - **Removal**: never shrinks the allocation and never clears the freed slots.
///
/// # Invariants
///
/// `0 <= self.len <= self.cap` and `self.buf.len() == self.element_size * self.cap <=
/// self.max_bytes` hold after every call. Failing operations leave the list untouched.
#[derive(Clone)]
pub struct List {
    /// Element storage, `element_size * cap` bytes long.
    buf: Vec<u8>,
    /// Width of one element in bytes, never zero.
    element_size: usize,
    /// Number of element slots in `buf`.
    cap: usize,
    /// Number of live elements.
    len: usize,
    /// The most bytes `buf` may ever hold.
    max_bytes: usize,
}

impl List {
    /// Creates a list with [`DEFAULT_INITIAL_LENGTH`] slots.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroElementSize`] if `element_size` is zero, [`Error::CapacityExceeded`] if the
    /// default allocation exceeds [`MAX_BYTES`], or [`Error::AllocFailed`].
    pub fn new(element_size: usize) -> Result<Self> {
        Self::with_capacity(element_size, DEFAULT_INITIAL_LENGTH)
    }

    /// Creates a list with room for `capacity` elements.
    ///
    /// A capacity of zero is raised to one slot. The size check uses checked multiplication, so a
    /// request whose byte size doesn't even fit in `usize` is rejected instead of wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::{List, Error, constants::MAX_BYTES};
    /// let list = List::with_capacity(4, 10).unwrap();
    /// assert_eq!(list.cap(), 10);
    /// assert_eq!(list.allocated_bytes(), 40);
    ///
    /// assert_eq!(List::with_capacity(4, 0).unwrap().cap(), 1);
    ///
    /// assert!(matches!(
    ///     List::with_capacity(2, MAX_BYTES),
    ///     Err(Error::CapacityExceeded { .. })
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::ZeroElementSize`], [`Error::CapacityExceeded`] or [`Error::AllocFailed`].
    pub fn with_capacity(element_size: usize, capacity: usize) -> Result<Self> {
        Self::allocate(element_size, capacity, MAX_BYTES)
    }

    /// Creates a blank list whose entire allocation, reserved slots included, is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let list = List::zeroed(3, 4).unwrap();
    /// assert!(list.storage().iter().all(|&b| b == 0));
    /// assert_eq!(list.storage().len(), 12);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`with_capacity`](Self::with_capacity).
    pub fn zeroed(element_size: usize, capacity: usize) -> Result<Self> {
        let mut list = Self::with_capacity(element_size, capacity)?;
        list.zero();
        Ok(list)
    }

    /// Returns a [`ListBuilder`] for configuring capacity and byte budget.
    pub fn builder(element_size: usize) -> ListBuilder {
        ListBuilder {
            element_size,
            initial_capacity: None,
            max_bytes: None,
        }
    }

    fn allocate(element_size: usize, capacity: usize, max_bytes: usize) -> Result<Self> {
        if element_size == 0 {
            return Err(Error::ZeroElementSize);
        }

        let cap = capacity.max(1);
        let bytes = element_size
            .checked_mul(cap)
            .filter(|&bytes| bytes <= max_bytes)
            .ok_or(Error::CapacityExceeded { budget: max_bytes })?;

        Ok(Self {
            buf: alloc_zeroed(bytes)?,
            element_size,
            cap,
            len: 0,
            max_bytes,
        })
    }

    /// Returns the width of one element in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of element slots currently allocated.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the byte budget of this list.
    #[inline]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Returns the number of bytes used by live elements.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.element_size * self.len
    }

    /// Returns the number of bytes allocated, reserved slots included.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.buf.len()
    }

    /// Returns the live elements as one contiguous byte slice.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.used_bytes()]
    }

    /// Returns the live elements as one contiguous mutable byte slice.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let used = self.used_bytes();
        &mut self.buf[..used]
    }

    /// Returns the whole allocation, including slots past [`len()`](Self::len).
    ///
    /// Bytes past the live region are whatever was last written there: zero for a fresh list,
    /// stale data after a removal.
    #[inline]
    pub fn storage(&self) -> &[u8] {
        &self.buf
    }

    /// Iterates over the live elements, each as an `element_size` byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(2).unwrap();
    /// list.append_many(b"abcd", 2).unwrap();
    /// let elements: Vec<&[u8]> = list.iter().collect();
    /// assert_eq!(elements, [&b"ab"[..], &b"cd"[..]]);
    /// ```
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element_size)
    }

    /// Byte range covering `count` elements starting at `index`.
    ///
    /// Callers guarantee `index + count <= self.cap`.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    #[inline]
    fn byte_range(&self, index: usize, count: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + count * self.element_size
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(1).unwrap();
    /// assert_eq!(list.get(0), None);
    /// list.append(b"x").unwrap();
    /// assert_eq!(list.get(0), Some(&b"x"[..]));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len {
            return None;
        }

        if index == 0 {
            return self.buf.get(..self.element_size);
        }

        self.buf.get(self.byte_range(index, 1))
    }

    /// Returns the element at `index` mutably, or `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.len {
            return None;
        }

        let range = self.byte_range(index, 1);
        self.buf.get_mut(range)
    }

    /// Returns the first element, or `None` if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<&[u8]> {
        self.get(0)
    }

    /// Returns the last element, or `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<&[u8]> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Doubles the allocated length, clamped to the byte budget, and returns the new length.
    ///
    /// If the list is already at the largest length its budget allows, or the allocator refuses
    /// the new block, nothing changes and the current length is returned. Comparing the result
    /// with the previous [`cap()`](Self::cap) tells whether growth made progress.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::builder(3).initial_capacity(2).max_bytes(10).build().unwrap();
    /// assert_eq!(list.expand(), 3); // 4 slots would need 12 bytes; 10 / 3 = 3
    /// assert_eq!(list.expand(), 3); // No further progress
    /// assert_eq!(list.allocated_bytes(), 9);
    /// ```
    pub fn expand(&mut self) -> usize {
        self.try_expand().unwrap_or(self.cap)
    }

    /// Growth step behind [`expand`](Self::expand), surfacing allocation failure.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by bounds checks"
    )]
    fn try_expand(&mut self) -> Result<usize> {
        // The element count can never pass this, so `next * element_size` can't overflow.
        let max_cap = self.max_bytes / self.element_size;

        let next = match self.cap.checked_mul(2) {
            Some(doubled) if doubled <= max_cap => doubled,
            _ => max_cap,
        };

        if next <= self.cap {
            tracing::debug!(
                cap = self.cap,
                element_size = self.element_size,
                max_bytes = self.max_bytes,
                "list growth stalled at byte budget"
            );
            return Ok(self.cap);
        }

        let mut block = alloc_zeroed(next * self.element_size)?;
        block[..self.buf.len()].copy_from_slice(&self.buf);

        tracing::trace!(from = self.cap, to = next, "list expanded");

        self.buf = block;
        self.cap = next;

        Ok(self.cap)
    }

    /// Grows until at least `count` free slots exist.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    fn make_room(&mut self, count: usize) -> Result<()> {
        while self.cap - self.len < count {
            let before = self.cap;
            if self.try_expand()? <= before {
                return Err(Error::CapacityExceeded {
                    budget: self.max_bytes,
                });
            }
        }

        Ok(())
    }

    /// Moves elements `index..len` up by `count` slots and returns the byte range of the gap.
    ///
    /// Callers must have made room for `count` more elements. The gap still holds stale bytes.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    fn open_gap(&mut self, index: usize, count: usize) -> Range<usize> {
        let gap = self.byte_range(index, count);
        let tail = self.byte_range(index, self.len - index);

        if !tail.is_empty() {
            // Source and destination overlap whenever the tail is longer than the gap
            self.buf.copy_within(tail, gap.end);
        }

        gap
    }

    /// Validates an insertion of `count` elements read from `elements` at `index`.
    fn check_insert<'e>(&self, index: usize, elements: &'e [u8], count: usize) -> Result<&'e [u8]> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if count == 0 {
            return Err(Error::InvalidCount {
                index,
                count,
                len: self.len,
            });
        }

        let expected = count
            .checked_mul(self.element_size)
            .ok_or(Error::CapacityExceeded {
                budget: self.max_bytes,
            })?;

        elements.get(..expected).ok_or(Error::ElementSize {
            expected,
            actual: elements.len(),
        })
    }

    /// Inserts a copy of `element` at `index`, shifting later elements up by one.
    ///
    /// `index` may equal [`len()`](Self::len), which appends. Returns the inserted element in its
    /// new position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(1).unwrap();
    /// list.append_many(b"ac", 2).unwrap();
    /// list.insert(1, b"b").unwrap();
    /// assert_eq!(list.as_bytes(), b"abc");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index > len()`.
    /// - [`Error::ElementSize`] if `element` isn't exactly `element_size` bytes.
    /// - [`Error::CapacityExceeded`] if the list is full and cannot grow.
    /// - [`Error::AllocFailed`] if growth was refused by the allocator.
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<&mut [u8]> {
        if element.len() != self.element_size {
            return Err(Error::ElementSize {
                expected: self.element_size,
                actual: element.len(),
            });
        }

        self.insert_many(index, element, 1)
    }

    /// Appends a copy of `element`. Same as `insert(len(), element)`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    #[inline]
    pub fn append(&mut self, element: &[u8]) -> Result<&mut [u8]> {
        self.insert(self.len, element)
    }

    /// Prepends a copy of `element`. Same as `insert(0, element)`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    #[inline]
    pub fn prepend(&mut self, element: &[u8]) -> Result<&mut [u8]> {
        self.insert(0, element)
    }

    /// Inserts the first `count` elements of `elements` at `index`.
    ///
    /// Grows as many times as needed before anything moves, then shifts the tail up by `count`
    /// slots and copies all new elements at once. Returns the inserted run.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::with_capacity(2, 1).unwrap();
    /// list.append(b"yz").unwrap();
    /// let inserted = list.insert_many(0, b"abcdefgh", 3).unwrap();
    /// assert_eq!(inserted, b"abcdef");
    /// assert_eq!(list.as_bytes(), b"abcdefyz");
    /// assert_eq!(list.cap(), 4);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index > len()`.
    /// - [`Error::InvalidCount`] if `count` is zero.
    /// - [`Error::ElementSize`] if `elements` is shorter than `count * element_size` bytes.
    /// - [`Error::CapacityExceeded`] if the list cannot grow enough.
    /// - [`Error::AllocFailed`] if growth was refused by the allocator.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    pub fn insert_many(
        &mut self,
        index: usize,
        elements: &[u8],
        count: usize,
    ) -> Result<&mut [u8]> {
        let elements = self.check_insert(index, elements, count)?;

        self.make_room(count)?;

        let gap = self.open_gap(index, count);
        self.buf[gap.clone()].copy_from_slice(elements);
        self.len += count;

        Ok(&mut self.buf[gap])
    }

    /// Appends the first `count` elements of `elements`.
    ///
    /// # Errors
    ///
    /// Same as [`insert_many`](Self::insert_many).
    #[inline]
    pub fn append_many(&mut self, elements: &[u8], count: usize) -> Result<&mut [u8]> {
        self.insert_many(self.len, elements, count)
    }

    /// Prepends the first `count` elements of `elements`.
    ///
    /// # Errors
    ///
    /// Same as [`insert_many`](Self::insert_many).
    #[inline]
    pub fn prepend_many(&mut self, elements: &[u8], count: usize) -> Result<&mut [u8]> {
        self.insert_many(0, elements, count)
    }

    /// Inserts a duplicate of the element at `source` at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(1).unwrap();
    /// list.append_many(b"abc", 3).unwrap();
    /// list.insert_copy(0, 2).unwrap();
    /// assert_eq!(list.as_bytes(), b"cabc");
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`insert_many_copy`](Self::insert_many_copy).
    #[inline]
    pub fn insert_copy(&mut self, index: usize, source: usize) -> Result<&mut [u8]> {
        self.insert_many_copy(index, source, 1)
    }

    /// Inserts duplicates of the `count` elements starting at `source` at `index`.
    ///
    /// The source run is read after the tail has been shifted, at its new position. A run that
    /// straddles `index` is copied in two parts: the part before `index` stayed put, the rest moved
    /// up by `count` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(1).unwrap();
    /// list.append_many(b"abcd", 4).unwrap();
    /// list.insert_many_copy(2, 1, 2).unwrap(); // Duplicate "bc" in front of "c"
    /// assert_eq!(list.as_bytes(), b"abbccd");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index > len()` or `source >= len()`.
    /// - [`Error::InvalidCount`] if `count` is zero or `source + count > len()`.
    /// - [`Error::CapacityExceeded`] or [`Error::AllocFailed`] if the list cannot grow enough.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by bounds checks"
    )]
    pub fn insert_many_copy(
        &mut self,
        index: usize,
        source: usize,
        count: usize,
    ) -> Result<&mut [u8]> {
        if index > self.len || source >= self.len {
            return Err(Error::IndexOutOfBounds {
                index: if index > self.len { index } else { source },
                len: self.len,
            });
        }

        let source_end = match source.checked_add(count) {
            Some(end) if count > 0 && end <= self.len => end,
            _ => {
                return Err(Error::InvalidCount {
                    index: source,
                    count,
                    len: self.len,
                });
            }
        };

        self.make_room(count)?;

        let gap = self.open_gap(index, count);

        if source_end <= index {
            // Entirely before the gap, unmoved
            let from = self.byte_range(source, count);
            self.buf.copy_within(from, gap.start);
        } else if source >= index {
            // Entirely after the gap, moved up by `count`
            let from = self.byte_range(source + count, count);
            self.buf.copy_within(from, gap.start);
        } else {
            let head = index - source;
            let from = self.byte_range(source, head);
            self.buf.copy_within(from, gap.start);

            let rest = self.byte_range(index + count, source_end - index);
            let to = self.byte_range(index + head, 0).start;
            self.buf.copy_within(rest, to);
        }

        self.len += count;

        Ok(&mut self.buf[gap])
    }

    /// Removes the element at `index`, shifting later elements down by one.
    ///
    /// Removing the last element only shortens the list; its bytes stay in storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(1).unwrap();
    /// list.append_many(b"abc", 3).unwrap();
    /// list.remove(0).unwrap();
    /// assert_eq!(list.as_bytes(), b"bc");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty list, [`Error::IndexOutOfBounds`] if `index >= len()`.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by bounds checks")]
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index + 1 < self.len {
            let tail = self.byte_range(index + 1, self.len - index - 1);
            let to = self.byte_range(index, 0).start;
            self.buf.copy_within(tail, to);
        }

        self.len -= 1;

        Ok(())
    }

    /// Removes the first element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty list.
    #[inline]
    pub fn remove_first(&mut self) -> Result<()> {
        self.remove(0)
    }

    /// Removes the last element without touching its bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty list.
    pub fn remove_last(&mut self) -> Result<()> {
        self.len = self.len.checked_sub(1).ok_or(Error::Empty)?;
        Ok(())
    }

    /// Removes `count` elements starting at `index`.
    ///
    /// A range that reaches the end of the list only shortens it. Otherwise the remaining tail
    /// moves down by `count` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::new(1).unwrap();
    /// list.append_many(b"abcdef", 6).unwrap();
    /// list.remove_many(1, 3).unwrap();
    /// assert_eq!(list.as_bytes(), b"aef");
    /// assert!(list.remove_many(2, 2).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `count` is zero or `index + count > len()`.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by bounds checks")]
    pub fn remove_many(&mut self, index: usize, count: usize) -> Result<()> {
        let end = match index.checked_add(count) {
            Some(end) if count > 0 && end <= self.len => end,
            _ => {
                return Err(Error::InvalidCount {
                    index,
                    count,
                    len: self.len,
                });
            }
        };

        if end < self.len {
            let tail = self.byte_range(end, self.len - end);
            let to = self.byte_range(index, 0).start;
            self.buf.copy_within(tail, to);
        }

        self.len -= count;

        Ok(())
    }

    /// Removes the first `count` elements.
    ///
    /// # Errors
    ///
    /// Same as [`remove_many`](Self::remove_many).
    #[inline]
    pub fn remove_many_first(&mut self, count: usize) -> Result<()> {
        self.remove_many(0, count)
    }

    /// Removes the last `count` elements without touching their bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `count` is zero or larger than `len()`.
    pub fn remove_many_last(&mut self, count: usize) -> Result<()> {
        match self.len.checked_sub(count) {
            Some(len) if count > 0 => {
                self.len = len;
                Ok(())
            }
            _ => Err(Error::InvalidCount {
                index: self.len.saturating_sub(count),
                count,
                len: self.len,
            }),
        }
    }

    /// Drops every element. Storage is left as it was.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Sets every allocated byte, reserved slots included, to `byte`.
    #[inline]
    pub fn fill(&mut self, byte: u8) {
        self.buf.fill(byte);
    }

    /// Sets every allocated byte, reserved slots included, to zero.
    #[inline]
    pub fn zero(&mut self) {
        self.fill(0);
    }
}

impl PartialEq for List {
    /// Lists are equal when they have the same element size and the same live bytes.
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for List {}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("element_size", &self.element_size)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

/// A builder for constructing a [`List`] with a custom capacity or byte budget.
///
/// Without an explicit initial capacity, the list starts at [`DEFAULT_INITIAL_LENGTH`] slots, or
/// at as many as the budget allows if that is fewer.
///
/// # Examples
///
/// ```
/// # use growbuf::List;
/// let list = List::builder(8)
///     .initial_capacity(4)
///     .max_bytes(1024)
///     .build()
///     .unwrap();
/// assert_eq!(list.cap(), 4);
/// assert_eq!(list.max_bytes(), 1024);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ListBuilder {
    element_size: usize,
    initial_capacity: Option<usize>,
    max_bytes: Option<usize>,
}

impl ListBuilder {
    /// Sets the initial number of element slots.
    pub fn initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = Some(cap);
        self
    }

    /// Sets the byte budget. Defaults to [`MAX_BYTES`].
    pub fn max_bytes(mut self, bytes: usize) -> Self {
        self.max_bytes = Some(bytes);
        self
    }

    /// Builds the [`List`].
    ///
    /// # Errors
    ///
    /// [`Error::ZeroElementSize`], [`Error::CapacityExceeded`] if the initial capacity doesn't fit
    /// the budget, or [`Error::AllocFailed`].
    pub fn build(self) -> Result<List> {
        let max_bytes = self.max_bytes.unwrap_or(MAX_BYTES);
        let capacity = match self.initial_capacity {
            Some(cap) => cap,
            None => DEFAULT_INITIAL_LENGTH.min(
                max_bytes
                    .checked_div(self.element_size)
                    .unwrap_or(DEFAULT_INITIAL_LENGTH),
            ),
        };

        List::allocate(self.element_size, capacity, max_bytes)
    }
}
