//! Growable null-terminated byte string.
//!
//! A [`Text`] follows the same growth law as [`List`](crate::List), specialised to single bytes
//! plus one reserved terminator byte. Every byte from [`len()`](Text::len) to the end of the
//! allocation is zero after every operation, so the contents are always usable as a C string.
//!
//! Inputs are taken the way C string functions take them: a `&[u8]` argument ends at its first
//! zero byte, if it has one. Content therefore never contains a zero byte.
//!
//! # Example
//!
//! ```
//! use growbuf::Text;
//!
//! let mut text = Text::from_bytes(b"to be, or not to be").unwrap();
//!
//! assert_eq!(text.find(b"be"), Some(3));
//! assert_eq!(text.replace_all(b"be", b"sleep").unwrap(), 2);
//! assert_eq!(text.as_bytes(), b"to sleep, or not to sleep");
//!
//! text.prepend(b"perchance ").unwrap();
//! assert_eq!(text.as_c_str().to_bytes(), b"perchance to sleep, or not to sleep");
//! ```

use crate::constants::{DEFAULT_INITIAL_STRING_LENGTH, MAX_BYTES};
use crate::error::{Error, Result, alloc_zeroed};
use std::ffi::CStr;
use std::fmt;

/// The part of `src` before its first zero byte.
#[expect(clippy::indexing_slicing, reason = "Position is within bounds")]
fn content(src: &[u8]) -> &[u8] {
    match src.iter().position(|&b| b == 0) {
        Some(end) => &src[..end],
        None => src,
    }
}

/// A growable byte string that keeps a zero terminator and a zeroed reserved tail.
///
/// # Invariants
///
/// `self.len + 1 <= self.buf.len() <= self.max_bytes`, and `self.buf[self.len..]` is all zero,
/// after every call. Failing operations leave the text untouched.
#[derive(Clone)]
pub struct Text {
    /// Content, terminator and reserved tail. Its length is the allocated length.
    buf: Vec<u8>,
    /// Number of content bytes, excluding the terminator.
    len: usize,
    /// The most bytes `buf` may ever hold.
    max_bytes: usize,
}

impl Text {
    /// Creates an empty text with [`DEFAULT_INITIAL_STRING_LENGTH`] bytes allocated.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the allocator refuses.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_INITIAL_STRING_LENGTH)
    }

    /// Creates an empty text with `capacity` bytes allocated, terminator included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::{Text, Error};
    /// let text = Text::with_capacity(1).unwrap();
    /// assert_eq!(text.cap(), 1);
    /// assert_eq!(text.as_bytes_with_nul(), b"\0");
    ///
    /// assert_eq!(Text::with_capacity(0).unwrap_err(), Error::InvalidCapacity(0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCapacity`] if `capacity` is zero, [`Error::AllocFailed`] if the allocator
    /// refuses.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::allocate(capacity, MAX_BYTES)
    }

    /// Creates a text holding a copy of `src`.
    ///
    /// The allocation starts at [`DEFAULT_INITIAL_STRING_LENGTH`] and doubles until the copy and
    /// its terminator fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let text = Text::from_bytes(b"hello").unwrap();
    /// assert_eq!(text.as_bytes(), b"hello");
    /// assert_eq!(text.cap(), 64);
    ///
    /// // Only the part before a zero byte is copied
    /// let text = Text::from_bytes(b"abc\0def").unwrap();
    /// assert_eq!(text.as_bytes(), b"abc");
    ///
    /// let long = [b'x'; 100];
    /// assert_eq!(Text::from_bytes(&long).unwrap().cap(), 128);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the copy can't fit in [`MAX_BYTES`], [`Error::AllocFailed`]
    /// if the allocator refuses.
    pub fn from_bytes(src: &[u8]) -> Result<Self> {
        Self::builder().build_from(src)
    }

    /// Returns a [`TextBuilder`] for configuring capacity and byte budget.
    pub fn builder() -> TextBuilder {
        TextBuilder {
            initial_capacity: None,
            max_bytes: None,
        }
    }

    fn allocate(capacity: usize, max_bytes: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        if capacity > max_bytes {
            return Err(Error::CapacityExceeded { budget: max_bytes });
        }

        Ok(Self {
            buf: alloc_zeroed(capacity)?,
            len: 0,
            max_bytes,
        })
    }

    /// Allocates from `seed` bytes, doubling until `src` fits, then copies it in.
    #[expect(clippy::indexing_slicing, reason = "Capacity checked above")]
    fn seeded(src: &[u8], seed: usize, max_bytes: usize) -> Result<Self> {
        let src = content(src);

        let needed = src
            .len()
            .checked_add(1)
            .filter(|&needed| needed <= max_bytes)
            .ok_or(Error::CapacityExceeded { budget: max_bytes })?;

        let mut capacity = seed.clamp(1, max_bytes.max(1));
        while capacity < needed {
            capacity = capacity
                .checked_mul(2)
                .map_or(max_bytes, |doubled| doubled.min(max_bytes));
        }

        let mut text = Self::allocate(capacity, max_bytes)?;
        text.buf[..src.len()].copy_from_slice(src);
        text.len = src.len();

        Ok(text)
    }

    /// Deep-copies this text, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the allocator refuses.
    pub fn try_clone(&self) -> Result<Self> {
        let mut buf = alloc_zeroed(self.buf.len())?;
        buf.copy_from_slice(&self.buf);

        Ok(Self {
            buf,
            len: self.len,
            max_bytes: self.max_bytes,
        })
    }

    /// Returns the number of content bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the text has no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bytes allocated, terminator included.
    #[inline]
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Returns the byte budget of this text.
    #[inline]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Returns the content without the terminator.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the content followed by its terminator.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Returns the content as a C string.
    #[expect(clippy::expect_used, reason = "Safe by invariant")]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul())
            .expect("content has no zero bytes and is terminated")
    }

    /// Returns the whole allocation, terminator and zeroed tail included.
    #[inline]
    pub fn storage(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the byte at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Returns the first byte, or `None` if the text is empty.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Returns the last byte before the terminator, or `None` if the text is empty.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Returns a new text holding `len` bytes starting at `index`.
    ///
    /// A `len` running past the end is clamped, so the result holds whatever is left.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let text = Text::from_bytes(b"question").unwrap();
    /// assert_eq!(text.substring(2, 3).unwrap().as_bytes(), b"est");
    /// assert_eq!(text.substring(7, 1000).unwrap().as_bytes(), b"n");
    /// assert!(text.substring(8, 1).is_err());
    /// assert!(text.substring(0, 0).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= len()`, [`Error::ZeroCount`] if `len` is zero,
    /// [`Error::AllocFailed`] if the allocator refuses.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by bounds checks"
    )]
    pub fn substring(&self, index: usize, len: usize) -> Result<Self> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if len == 0 {
            return Err(Error::ZeroCount);
        }

        let len = len.min(self.len - index);
        Self::seeded(&self.buf[index..index + len], len + 1, self.max_bytes)
    }

    /// Doubles the allocated length, clamped to the byte budget, and returns the new length.
    ///
    /// If the text is already at its budget, or the allocator refuses the new block, nothing
    /// changes and the current length is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::builder().initial_capacity(8).max_bytes(12).build().unwrap();
    /// assert_eq!(text.expand(), 12);
    /// assert_eq!(text.expand(), 12);
    /// ```
    pub fn expand(&mut self) -> usize {
        self.try_expand().unwrap_or(self.buf.len())
    }

    #[expect(clippy::indexing_slicing, reason = "New block is larger")]
    fn try_expand(&mut self) -> Result<usize> {
        let cap = self.buf.len();

        let next = match cap.checked_mul(2) {
            Some(doubled) if doubled <= self.max_bytes => doubled,
            _ => self.max_bytes,
        };

        if next <= cap {
            tracing::debug!(cap, max_bytes = self.max_bytes, "text growth stalled at byte budget");
            return Ok(cap);
        }

        let mut block = alloc_zeroed(next)?;
        block[..cap].copy_from_slice(&self.buf);

        tracing::trace!(from = cap, to = next, "text expanded");

        self.buf = block;

        Ok(next)
    }

    /// Grows until at least `total` bytes are allocated.
    fn reserve_total(&mut self, total: usize) -> Result<()> {
        if total > self.max_bytes {
            return Err(Error::CapacityExceeded {
                budget: self.max_bytes,
            });
        }

        while self.buf.len() < total {
            let before = self.buf.len();
            if self.try_expand()? <= before {
                return Err(Error::CapacityExceeded {
                    budget: self.max_bytes,
                });
            }
        }

        Ok(())
    }

    /// Grows until `additional` more content bytes fit alongside the terminator.
    fn make_room(&mut self, additional: usize) -> Result<()> {
        let total = self
            .len
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(Error::CapacityExceeded {
                budget: self.max_bytes,
            })?;

        self.reserve_total(total)
    }

    /// Inserts `src`, already cut at its first zero byte, at `index`.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    fn insert_content(&mut self, index: usize, src: &[u8]) -> Result<&mut [u8]> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if src.is_empty() {
            return Err(Error::EmptyInput);
        }

        self.make_room(src.len())?;

        let end = index + src.len();

        // `len + 1 - index` bytes, terminator included
        self.buf.copy_within(index..=self.len, end);
        self.buf[index..end].copy_from_slice(src);
        self.len += src.len();

        Ok(&mut self.buf[index..end])
    }

    /// Inserts `byte` at `index`, shifting the rest up. Returns the inserted byte in place.
    ///
    /// # Errors
    ///
    /// - [`Error::NulByte`] if `byte` is zero.
    /// - [`Error::IndexOutOfBounds`] if `index > len()`.
    /// - [`Error::CapacityExceeded`] or [`Error::AllocFailed`] if the text can't grow.
    pub fn insert_byte(&mut self, index: usize, byte: u8) -> Result<&mut [u8]> {
        if byte == 0 {
            return Err(Error::NulByte);
        }

        self.insert_content(index, &[byte])
    }

    /// Inserts a copy of `src` at `index`, shifting the rest up. Returns the inserted run.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"to be").unwrap();
    /// text.insert(2, b" not").unwrap();
    /// assert_eq!(text.as_bytes(), b"to not be");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `src` is empty before its first zero byte.
    /// - [`Error::IndexOutOfBounds`] if `index > len()`.
    /// - [`Error::CapacityExceeded`] or [`Error::AllocFailed`] if the text can't grow.
    pub fn insert(&mut self, index: usize, src: &[u8]) -> Result<&mut [u8]> {
        self.insert_content(index, content(src))
    }

    /// Inserts at most `len` bytes of `src` at `index`.
    ///
    /// A `len` longer than `src` is clamped to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"ac").unwrap();
    /// text.insert_partial(1, b"bbbb", 1).unwrap();
    /// text.insert_partial(3, b"de", 10).unwrap();
    /// assert_eq!(text.as_bytes(), b"abcde");
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert), with [`Error::EmptyInput`] also for `len == 0`.
    #[expect(clippy::indexing_slicing, reason = "Length clamped to source")]
    pub fn insert_partial(&mut self, index: usize, src: &[u8], len: usize) -> Result<&mut [u8]> {
        let src = content(src);
        self.insert_content(index, &src[..len.min(src.len())])
    }

    /// Appends `byte`.
    ///
    /// # Errors
    ///
    /// Same as [`insert_byte`](Self::insert_byte).
    #[inline]
    pub fn append_byte(&mut self, byte: u8) -> Result<&mut [u8]> {
        self.insert_byte(self.len, byte)
    }

    /// Appends a copy of `src`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    #[inline]
    pub fn append(&mut self, src: &[u8]) -> Result<&mut [u8]> {
        self.insert(self.len, src)
    }

    /// Appends at most `len` bytes of `src`.
    ///
    /// # Errors
    ///
    /// Same as [`insert_partial`](Self::insert_partial).
    #[inline]
    pub fn append_partial(&mut self, src: &[u8], len: usize) -> Result<&mut [u8]> {
        self.insert_partial(self.len, src, len)
    }

    /// Prepends `byte`.
    ///
    /// # Errors
    ///
    /// Same as [`insert_byte`](Self::insert_byte).
    #[inline]
    pub fn prepend_byte(&mut self, byte: u8) -> Result<&mut [u8]> {
        self.insert_byte(0, byte)
    }

    /// Prepends a copy of `src`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    #[inline]
    pub fn prepend(&mut self, src: &[u8]) -> Result<&mut [u8]> {
        self.insert(0, src)
    }

    /// Prepends at most `len` bytes of `src`.
    ///
    /// # Errors
    ///
    /// Same as [`insert_partial`](Self::insert_partial).
    #[inline]
    pub fn prepend_partial(&mut self, src: &[u8], len: usize) -> Result<&mut [u8]> {
        self.insert_partial(0, src, len)
    }

    /// Removes `count` bytes starting at `index`.
    ///
    /// The rest, terminator included, moves down over the gap, and the freed tail is zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"to be, or not").unwrap();
    /// text.remove_range(5, 8).unwrap();
    /// assert_eq!(text.as_bytes(), b"to be");
    /// assert!(text.storage()[5..].iter().all(|&b| b == 0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `count` is zero or `index + count > len()`.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by bounds checks"
    )]
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
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

        if end == self.len {
            self.buf[index..end].fill(0);
        } else {
            let new_len = self.len - count;
            self.buf.copy_within(end..=self.len, index);
            self.buf[new_len + 1..=self.len].fill(0);
        }

        self.len -= count;

        Ok(())
    }

    /// Removes the byte at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty text, [`Error::IndexOutOfBounds`] if `index >= len()`.
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

        self.remove_range(index, 1)
    }

    /// Removes the first byte.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty text.
    #[inline]
    pub fn remove_first(&mut self) -> Result<()> {
        self.remove(0)
    }

    /// Removes the last byte.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty text.
    pub fn remove_last(&mut self) -> Result<()> {
        let index = self.len.checked_sub(1).ok_or(Error::Empty)?;
        self.remove_range(index, 1)
    }

    /// Removes the first `count` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`remove_range`](Self::remove_range).
    #[inline]
    pub fn remove_first_n(&mut self, count: usize) -> Result<()> {
        self.remove_range(0, count)
    }

    /// Removes the last `count` bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `count` is zero or larger than `len()`.
    pub fn remove_last_n(&mut self, count: usize) -> Result<()> {
        let index = self.len.checked_sub(count).ok_or(Error::InvalidCount {
            index: 0,
            count,
            len: self.len,
        })?;

        self.remove_range(index, count)
    }

    /// Returns the index of the first `byte`, or `None` if there is none.
    ///
    /// Zero is never found: it isn't content.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == byte)
    }

    /// Returns the index where the first occurrence of `needle` starts.
    ///
    /// `None` if there is no occurrence, if `needle` is empty before its first zero byte, or if
    /// it's longer than the text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let text = Text::from_bytes(b"that is the question").unwrap();
    /// assert_eq!(text.find(b"the"), Some(8));
    /// assert_eq!(text.find(b"answer"), None);
    /// assert_eq!(text.find(b""), None);
    /// ```
    #[inline]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        self.find_from(content(needle), 0)
    }

    /// Naive scan for `needle` starting at `from`, comparing byte by byte at each offset.
    #[expect(clippy::arithmetic_side_effects, reason = "Offset within haystack")]
    fn find_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        let haystack = self.as_bytes();

        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }

        haystack
            .windows(needle.len())
            .skip(from)
            .position(|window| window == needle)
            .map(|offset| offset + from)
    }

    /// Replaces the first `old` byte with `new`. Returns the number of replacements, 0 or 1.
    ///
    /// # Errors
    ///
    /// [`Error::NulByte`] if `new` is zero.
    #[expect(clippy::indexing_slicing, reason = "Index found by search")]
    pub fn replace_byte(&mut self, old: u8, new: u8) -> Result<usize> {
        if new == 0 {
            return Err(Error::NulByte);
        }

        match self.find_byte(old) {
            Some(index) => {
                self.buf[index] = new;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    /// Replaces every `old` byte with `new`. Returns the number of replacements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"a-b-c").unwrap();
    /// assert_eq!(text.replace_byte_all(b'-', b'+').unwrap(), 2);
    /// assert_eq!(text.as_bytes(), b"a+b+c");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NulByte`] if `new` is zero.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    pub fn replace_byte_all(&mut self, old: u8, new: u8) -> Result<usize> {
        if new == 0 {
            return Err(Error::NulByte);
        }

        let mut count = 0;
        for b in self.buf[..self.len].iter_mut().filter(|b| **b == old) {
            *b = new;
            count += 1;
        }

        Ok(count)
    }

    /// Replaces the `old_len` bytes at `index` with `new`, growing or shrinking in place.
    ///
    /// Growth happens before anything moves, and every offset is derived from indices after it,
    /// since growth moves the storage.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by bounds checks"
    )]
    fn replace_at(&mut self, index: usize, old_len: usize, new: &[u8]) -> Result<()> {
        debug_assert!(index + old_len <= self.len);

        if new.len() > old_len {
            self.make_room(new.len() - old_len)?;
        }

        let new_total = self.len - old_len + new.len();
        let tail_from = index + old_len;
        let tail_to = index + new.len();

        if tail_from != tail_to {
            self.buf.copy_within(tail_from..=self.len, tail_to);
        }
        self.buf[index..tail_to].copy_from_slice(new);

        if new_total < self.len {
            self.buf[new_total + 1..=self.len].fill(0);
        }

        self.len = new_total;

        Ok(())
    }

    /// Replaces the first occurrence of `old` with `new`. Returns the number of replacements.
    ///
    /// `new` may be empty, which deletes the occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"to be or not to be").unwrap();
    /// assert_eq!(text.replace(b"be", b"code").unwrap(), 1);
    /// assert_eq!(text.as_bytes(), b"to code or not to be");
    /// assert_eq!(text.replace(b"xyz", b"abc").unwrap(), 0);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `old` is empty.
    /// - [`Error::CapacityExceeded`] or [`Error::AllocFailed`] if the result doesn't fit. The
    ///   text is left unchanged.
    pub fn replace(&mut self, old: &[u8], new: &[u8]) -> Result<usize> {
        let (old, new) = (content(old), content(new));

        if old.is_empty() {
            return Err(Error::EmptyInput);
        }

        match self.find_from(old, 0) {
            Some(index) => {
                self.replace_at(index, old.len(), new)?;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    /// Replaces every occurrence of `old` with `new`. Returns the number of replacements.
    ///
    /// The work happens on a copy, and each search resumes right after the replacement just
    /// made, so a `new` that contains `old` is never matched again. The result is committed with
    /// [`overwrite`](Self::overwrite).
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"a.b.c").unwrap();
    /// assert_eq!(text.replace_all(b".", b"..").unwrap(), 2);
    /// assert_eq!(text.as_bytes(), b"a..b..c");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `old` is empty.
    /// - [`Error::CapacityExceeded`] or [`Error::AllocFailed`] if the result doesn't fit. The
    ///   text is left unchanged.
    #[expect(clippy::arithmetic_side_effects, reason = "Bounded by text length")]
    pub fn replace_all(&mut self, old: &[u8], new: &[u8]) -> Result<usize> {
        let (old, new) = (content(old), content(new));

        if old.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut work = self.try_clone()?;
        let mut count = 0;
        let mut from = 0;

        while let Some(index) = work.find_from(old, from) {
            work.replace_at(index, old.len(), new)?;
            from = index + new.len();
            count += 1;
        }

        if count > 0 {
            self.overwrite(work.as_bytes())?;
        }

        Ok(count)
    }

    /// Returns a copy with ASCII letters in upper case.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the allocator refuses.
    pub fn to_upper(&self) -> Result<Self> {
        let mut text = self.try_clone()?;
        text.buf.make_ascii_uppercase();
        Ok(text)
    }

    /// Returns a copy with ASCII letters in lower case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let text = Text::from_bytes(b"Hamlet: TO BE").unwrap();
    /// assert_eq!(text.to_lower().unwrap().as_bytes(), b"hamlet: to be");
    /// assert_eq!(text.to_upper().unwrap().as_bytes(), b"HAMLET: TO BE");
    /// assert_eq!(text.as_bytes(), b"Hamlet: TO BE");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the allocator refuses.
    pub fn to_lower(&self) -> Result<Self> {
        let mut text = self.try_clone()?;
        text.buf.make_ascii_lowercase();
        Ok(text)
    }

    /// Replaces the whole content with a copy of `src`, which may be empty.
    ///
    /// Grows if needed and zeroes whatever the old content left behind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let mut text = Text::from_bytes(b"slings and arrows").unwrap();
    /// text.overwrite(b"sea").unwrap();
    /// assert_eq!(text.as_bytes(), b"sea");
    /// assert!(text.storage()[3..].iter().all(|&b| b == 0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] or [`Error::AllocFailed`] if `src` doesn't fit. The text is
    /// left unchanged.
    #[expect(clippy::indexing_slicing, reason = "Capacity reserved above")]
    pub fn overwrite(&mut self, src: &[u8]) -> Result<()> {
        let src = content(src);

        let total = src.len().checked_add(1).ok_or(Error::CapacityExceeded {
            budget: self.max_bytes,
        })?;
        self.reserve_total(total)?;

        let n = src.len();
        self.buf[..n].copy_from_slice(src);
        self.buf[n..=self.len.max(n)].fill(0);
        self.len = n;

        Ok(())
    }

    /// Returns a reversed copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::Text;
    /// let text = Text::from_bytes(b"stressed").unwrap();
    /// assert_eq!(text.reverse().unwrap().as_bytes(), b"desserts");
    /// assert!(Text::new().unwrap().reverse().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the text is empty, [`Error::AllocFailed`] if the allocator refuses.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    pub fn reverse(&self) -> Result<Self> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let mut text = self.try_clone()?;
        text.buf[..text.len].reverse();
        Ok(text)
    }

    /// Zeroes every allocated byte and empties the text.
    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }
}

impl PartialEq for Text {
    /// Texts are equal when their content is, whatever their allocation.
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl PartialEq<[u8]> for Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("content", &self.as_bytes().escape_ascii().to_string())
            .field("len", &self.len)
            .field("cap", &self.buf.len())
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

/// A builder for constructing a [`Text`] with a custom capacity or byte budget.
///
/// # Examples
///
/// ```
/// # use growbuf::Text;
/// let text = Text::builder().initial_capacity(4).max_bytes(16).build_from(b"hello").unwrap();
/// assert_eq!(text.cap(), 8);
/// assert_eq!(text.max_bytes(), 16);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct TextBuilder {
    initial_capacity: Option<usize>,
    max_bytes: Option<usize>,
}

impl TextBuilder {
    /// Sets the initial allocated length, terminator included.
    ///
    /// For [`build_from`](Self::build_from) this is the seed that doubles until the input fits.
    pub fn initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = Some(cap);
        self
    }

    /// Sets the byte budget. Defaults to [`MAX_BYTES`].
    pub fn max_bytes(mut self, bytes: usize) -> Self {
        self.max_bytes = Some(bytes);
        self
    }

    /// Builds an empty [`Text`].
    ///
    /// Without an explicit initial capacity, [`DEFAULT_INITIAL_STRING_LENGTH`] is used, or the
    /// budget if that is smaller.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCapacity`] for a zero capacity, [`Error::CapacityExceeded`] if it doesn't
    /// fit the budget, or [`Error::AllocFailed`].
    pub fn build(self) -> Result<Text> {
        let max_bytes = self.max_bytes.unwrap_or(MAX_BYTES);
        let capacity = self
            .initial_capacity
            .unwrap_or(DEFAULT_INITIAL_STRING_LENGTH.min(max_bytes));

        Text::allocate(capacity, max_bytes)
    }

    /// Builds a [`Text`] holding a copy of `src`.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `src` can't fit the budget, or [`Error::AllocFailed`].
    pub fn build_from(self, src: &[u8]) -> Result<Text> {
        let max_bytes = self.max_bytes.unwrap_or(MAX_BYTES);
        let seed = self
            .initial_capacity
            .unwrap_or(DEFAULT_INITIAL_STRING_LENGTH);

        Text::seeded(src, seed, max_bytes)
    }
}

#[cfg(test)]
mod tests;
