//! Tests for the Text
//!
//! These tests are in the same narrative order as the main file, and are designed to not depend on
//! things that we've yet to have written tests for, at least narratively. Nearly every test ends by
//! checking the terminator invariant, since that's the one property every operation must keep.

#![expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    clippy::unwrap_used,
    reason = "Okay in tests"
)]

use super::*;
use crate::ErrorKind;

/// Checks that the terminator and everything after it is zero, and the sizes are consistent.
fn assert_terminated(text: &Text) {
    assert!(text.len < text.buf.len());
    assert!(text.buf.len() <= text.max_bytes);
    assert!(
        text.buf[text.len..].iter().all(|&b| b == 0),
        "non-zero byte past the content in {text:?}"
    );
    assert!(!text.as_bytes().contains(&0));
}

/// A text with a small budget, holding `src`.
fn budgeted(src: &[u8], initial: usize, max_bytes: usize) -> Text {
    Text::builder()
        .initial_capacity(initial)
        .max_bytes(max_bytes)
        .build_from(src)
        .unwrap()
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

#[test]
fn test_content() {
    assert_eq!(content(b"abc"), b"abc");
    assert_eq!(content(b"ab\0c"), b"ab");
    assert_eq!(content(b"\0abc"), b"");
    assert_eq!(content(b""), b"");
}

// -----------------------------------------------------------------------------
// Text - Creation
// -----------------------------------------------------------------------------

#[test]
fn test_text_new() {
    let text = Text::new().unwrap();

    assert_eq!(text.len, 0);
    assert_eq!(text.buf.len(), DEFAULT_INITIAL_STRING_LENGTH);
    assert_eq!(text.max_bytes, MAX_BYTES);
    assert_terminated(&text);
}

#[test]
fn test_text_with_capacity() {
    let text = Text::with_capacity(10).unwrap();
    assert_eq!(text.cap(), 10);
    assert_terminated(&text);

    assert_eq!(Text::with_capacity(0), Err(Error::InvalidCapacity(0)));

    // Within budget, but no allocator hands out this much
    let err = Text::with_capacity(MAX_BYTES).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AllocationFailed);
}

#[test]
fn test_text_from_bytes() {
    let text = Text::from_bytes(b"Hamlet").unwrap();
    assert_eq!(text.as_bytes(), b"Hamlet");
    assert_eq!(text.cap(), DEFAULT_INITIAL_STRING_LENGTH);
    assert_terminated(&text);

    // Empty input gives an empty text
    let text = Text::from_bytes(b"").unwrap();
    assert!(text.is_empty());
    assert_terminated(&text);

    // Exactly filling the seed leaves no room for the terminator, so it doubles
    let text = Text::from_bytes(&[b'a'; 64]).unwrap();
    assert_eq!(text.cap(), 128);
    assert_terminated(&text);

    let text = Text::from_bytes(&[b'a'; 63]).unwrap();
    assert_eq!(text.cap(), 64);
}

#[test]
fn test_text_builder() {
    // Doubles from the seed, clamped to the budget
    let text = budgeted(b"hello world", 4, 13);
    assert_eq!(text.cap(), 13);
    assert_eq!(text.as_bytes(), b"hello world");
    assert_terminated(&text);

    // Doesn't fit at all
    let err = Text::builder().max_bytes(5).build_from(b"hello");
    assert_eq!(err, Err(Error::CapacityExceeded { budget: 5 }));

    // Empty text, default capacity limited by a small budget
    let text = Text::builder().max_bytes(8).build().unwrap();
    assert_eq!(text.cap(), 8);

    // Explicit capacity over budget is an error
    let err = Text::builder().initial_capacity(9).max_bytes(8).build();
    assert_eq!(err, Err(Error::CapacityExceeded { budget: 8 }));

    // A zero budget can't even hold the terminator
    let err = Text::builder().max_bytes(0).build();
    assert_eq!(err, Err(Error::InvalidCapacity(0)));
}

#[test]
fn test_text_clone() {
    let text = Text::from_bytes(b"original").unwrap();

    let mut copy = text.try_clone().unwrap();
    copy.append(b"!").unwrap();

    assert_eq!(text.as_bytes(), b"original");
    assert_eq!(copy.as_bytes(), b"original!");
    assert_eq!(copy.cap(), text.cap());

    let copy = text.clone();
    assert_eq!(copy, text);
}

// -----------------------------------------------------------------------------
// Text - Accessors
// -----------------------------------------------------------------------------

#[test]
fn test_text_accessors() {
    let text = Text::from_bytes(b"abc").unwrap();

    assert_eq!(text.len(), 3);
    assert!(!text.is_empty());
    assert_eq!(text.as_bytes(), b"abc");
    assert_eq!(text.as_bytes_with_nul(), b"abc\0");
    assert_eq!(text.as_c_str().to_bytes(), b"abc");
    assert_eq!(text.storage().len(), DEFAULT_INITIAL_STRING_LENGTH);
    assert_eq!(AsRef::<[u8]>::as_ref(&text), b"abc");

    assert_eq!(text.get(0), Some(b'a'));
    assert_eq!(text.get(2), Some(b'c'));
    assert_eq!(text.get(3), None);
    assert_eq!(text.first(), Some(b'a'));
    assert_eq!(text.last(), Some(b'c'));
}

#[test]
fn test_text_accessors_empty() {
    let text = Text::new().unwrap();

    assert_eq!(text.get(0), None);
    assert_eq!(text.first(), None);
    assert_eq!(text.last(), None);
    assert_eq!(text.as_bytes_with_nul(), b"\0");
    assert!(text.as_c_str().is_empty());
}

#[test]
fn test_text_substring() {
    let text = Text::from_bytes(b"To be, or not to be").unwrap();

    let sub = text.substring(3, 2).unwrap();
    assert_eq!(sub.as_bytes(), b"be");
    assert_eq!(sub.cap(), 3);
    assert_terminated(&sub);

    // Overrunning the end is clamped to the final character
    let sub = text.substring(text.len() - 1, 1000).unwrap();
    assert_eq!(sub.as_bytes(), b"e");
    assert_terminated(&sub);

    // usize::MAX doesn't overflow anything either
    let sub = text.substring(10, usize::MAX).unwrap();
    assert_eq!(sub.as_bytes(), b"not to be");

    assert_eq!(
        text.substring(19, 1),
        Err(Error::IndexOutOfBounds { index: 19, len: 19 })
    );
    assert_eq!(text.substring(0, 0), Err(Error::ZeroCount));
}

// -----------------------------------------------------------------------------
// Text - Growth
// -----------------------------------------------------------------------------

#[test]
fn test_text_expand() {
    let mut text = Text::from_bytes(b"abc").unwrap();

    assert_eq!(text.expand(), 128);
    assert_eq!(text.as_bytes(), b"abc");
    assert_terminated(&text);
}

#[test]
fn test_text_expand_clamps_to_budget() {
    let mut text = budgeted(b"", 4, 10);

    assert_eq!(text.expand(), 8);
    assert_eq!(text.expand(), 10);

    // Idempotent at the clamp
    assert_eq!(text.expand(), 10);
    assert_eq!(text.cap(), 10);
    assert_terminated(&text);
}

// -----------------------------------------------------------------------------
// Text - Insertion
// -----------------------------------------------------------------------------

#[test]
fn test_text_insert_byte() {
    let mut text = Text::from_bytes(b"ac").unwrap();

    let inserted = text.insert_byte(1, b'b').unwrap();
    assert_eq!(inserted, b"b");
    assert_eq!(text.as_bytes(), b"abc");

    text.append_byte(b'd').unwrap();
    text.prepend_byte(b'_').unwrap();
    assert_eq!(text.as_bytes(), b"_abcd");
    assert_terminated(&text);

    assert_eq!(text.insert_byte(0, 0), Err(Error::NulByte));
    assert_eq!(
        text.insert_byte(6, b'x'),
        Err(Error::IndexOutOfBounds { index: 6, len: 5 })
    );
    assert_eq!(text.as_bytes(), b"_abcd");
}

#[test]
fn test_text_insert() {
    let mut text = Text::from_bytes(b"or not").unwrap();

    text.prepend(b"To be, ").unwrap();
    text.append(b" to be").unwrap();
    text.insert(5, b"!").unwrap();
    assert_eq!(text.as_bytes(), b"To be!, or not to be");
    assert_terminated(&text);

    // Input ends at its first zero byte
    text.append(b"?\0ignored").unwrap();
    assert_eq!(text.as_bytes(), b"To be!, or not to be?");

    assert_eq!(text.append(b""), Err(Error::EmptyInput));
    assert_eq!(text.append(b"\0abc"), Err(Error::EmptyInput));
    assert_terminated(&text);
}

#[test]
fn test_text_insert_moves_terminator() {
    let mut text = Text::with_capacity(8).unwrap();

    text.append(b"abc").unwrap();
    text.insert(0, b"xy").unwrap();

    assert_eq!(text.storage(), b"xyabc\0\0\0");
}

#[test]
fn test_text_insert_grows() {
    let mut text = Text::with_capacity(2).unwrap();

    text.append(b"a").unwrap();
    assert_eq!(text.cap(), 2);

    // Needs len + 5 + 1 = 7 bytes: 2 -> 4 -> 8
    text.append(b"bcdef").unwrap();
    assert_eq!(text.cap(), 8);
    assert_eq!(text.as_bytes(), b"abcdef");
    assert_terminated(&text);
}

#[test]
fn test_text_insert_at_ceiling() {
    let mut text = budgeted(b"abc", 4, 6);

    // 3 + 2 + 1 = 6 fits exactly
    text.append(b"de").unwrap();
    assert_eq!(text.cap(), 6);

    let storage = text.storage().to_vec();
    assert_eq!(
        text.insert(1, b"x"),
        Err(Error::CapacityExceeded { budget: 6 })
    );
    assert_eq!(text.storage(), storage.as_slice());
    assert_terminated(&text);
}

#[test]
fn test_text_insert_partial() {
    let mut text = Text::from_bytes(b"ad").unwrap();

    text.insert_partial(1, b"bcxyz", 2).unwrap();
    assert_eq!(text.as_bytes(), b"abcd");

    // Clamped to the source
    text.append_partial(b"ef", 100).unwrap();
    assert_eq!(text.as_bytes(), b"abcdef");

    // Clamped to the source's first zero byte
    text.prepend_partial(b"_\0zz", 3).unwrap();
    assert_eq!(text.as_bytes(), b"_abcdef");

    assert_eq!(text.append_partial(b"abc", 0), Err(Error::EmptyInput));
    assert_terminated(&text);
}

// -----------------------------------------------------------------------------
// Text - Removal
// -----------------------------------------------------------------------------

#[test]
fn test_text_remove() {
    let mut text = Text::from_bytes(b"abcde").unwrap();

    text.remove(1).unwrap();
    assert_eq!(text.as_bytes(), b"acde");
    assert_terminated(&text);

    text.remove_first().unwrap();
    text.remove_last().unwrap();
    assert_eq!(text.as_bytes(), b"cd");
    assert_terminated(&text);

    assert_eq!(
        text.remove(2),
        Err(Error::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
fn test_text_remove_empty() {
    let mut text = Text::new().unwrap();

    assert_eq!(text.remove(0), Err(Error::Empty));
    assert_eq!(text.remove_first(), Err(Error::Empty));
    assert_eq!(text.remove_last(), Err(Error::Empty));
    assert!(text.remove_first_n(1).is_err());
    assert!(text.remove_last_n(1).is_err());
}

#[test]
fn test_text_remove_range() {
    let mut text = Text::with_capacity(12).unwrap();
    text.append(b"abcdefghij").unwrap();

    text.remove_range(2, 3).unwrap();
    assert_eq!(text.as_bytes(), b"abfghij");
    // The freed tail is zeroed, unlike a List
    assert_eq!(text.storage(), b"abfghij\0\0\0\0\0");

    text.remove_first_n(2).unwrap();
    assert_eq!(text.as_bytes(), b"fghij");

    text.remove_last_n(2).unwrap();
    assert_eq!(text.as_bytes(), b"fgh");
    assert_eq!(text.storage(), b"fgh\0\0\0\0\0\0\0\0\0");

    assert!(text.remove_range(1, 3).is_err());
    assert!(text.remove_range(1, 0).is_err());
    assert!(text.remove_range(usize::MAX, 2).is_err());
    assert!(text.remove_last_n(4).is_err());

    text.remove_range(0, 3).unwrap();
    assert!(text.is_empty());
    assert_terminated(&text);
}

// -----------------------------------------------------------------------------
// Text - Search
// -----------------------------------------------------------------------------

#[test]
fn test_text_find_byte() {
    let text = Text::from_bytes(b"hello").unwrap();

    assert_eq!(text.find_byte(b'l'), Some(2));
    assert_eq!(text.find_byte(b'z'), None);

    // The terminator isn't content
    assert_eq!(text.find_byte(0), None);
}

#[test]
fn test_text_find() {
    let text = Text::from_bytes(b"abababc").unwrap();

    assert_eq!(text.find(b"abc"), Some(4));
    assert_eq!(text.find(b"ab"), Some(0));
    assert_eq!(text.find(b"abababc"), Some(0));
    assert_eq!(text.find(b"abababcd"), None);
    assert_eq!(text.find(b"x"), None);
    assert_eq!(text.find(b""), None);
    assert_eq!(text.find(b"\0ab"), None);

    assert_eq!(text.find_from(b"ab", 1), Some(2));
    assert_eq!(text.find_from(b"ab", 5), None);
    assert_eq!(text.find_from(b"ab", 100), None);

    assert_eq!(Text::new().unwrap().find(b"a"), None);
}

// -----------------------------------------------------------------------------
// Text - Replacement
// -----------------------------------------------------------------------------

#[test]
fn test_text_replace_byte() {
    let mut text = Text::from_bytes(b"a.b.c").unwrap();

    assert_eq!(text.replace_byte(b'.', b'-').unwrap(), 1);
    assert_eq!(text.as_bytes(), b"a-b.c");

    assert_eq!(text.replace_byte_all(b'.', b'-').unwrap(), 1);
    assert_eq!(text.replace_byte_all(b'-', b'+').unwrap(), 2);
    assert_eq!(text.as_bytes(), b"a+b+c");

    assert_eq!(text.replace_byte(b'x', b'y').unwrap(), 0);
    assert_eq!(text.replace_byte_all(b'x', b'y').unwrap(), 0);

    assert_eq!(text.replace_byte(b'a', 0), Err(Error::NulByte));
    assert_eq!(text.replace_byte_all(b'a', 0), Err(Error::NulByte));
    assert_terminated(&text);
}

#[test]
fn test_text_replace() {
    // Same length
    let mut text = Text::from_bytes(b"the slings").unwrap();
    assert_eq!(text.replace(b"the", b"our").unwrap(), 1);
    assert_eq!(text.as_bytes(), b"our slings");

    // Shrinking
    assert_eq!(text.replace(b"slings", b"x").unwrap(), 1);
    assert_eq!(text.as_bytes(), b"our x");
    assert_terminated(&text);

    // Growing
    assert_eq!(text.replace(b"our", b"outrageous").unwrap(), 1);
    assert_eq!(text.as_bytes(), b"outrageous x");
    assert_terminated(&text);

    // Deleting
    assert_eq!(text.replace(b" x", b"").unwrap(), 1);
    assert_eq!(text.as_bytes(), b"outrageous");
    assert_terminated(&text);

    // Only the first occurrence
    let mut text = Text::from_bytes(b"aXaXa").unwrap();
    assert_eq!(text.replace(b"a", b"bb").unwrap(), 1);
    assert_eq!(text.as_bytes(), b"bbXaXa");

    assert_eq!(text.replace(b"zzz", b"y").unwrap(), 0);
    assert_eq!(text.replace(b"", b"y"), Err(Error::EmptyInput));
}

#[test]
fn test_text_replace_grows_storage() {
    let mut text = Text::with_capacity(4).unwrap();
    text.append(b"a_c").unwrap();

    // The replacement reallocates; the tail must be moved inside the new block
    assert_eq!(text.replace(b"_", b"-----").unwrap(), 1);
    assert_eq!(text.as_bytes(), b"a-----c");
    assert_eq!(text.cap(), 8);
    assert_terminated(&text);
}

#[test]
fn test_text_replace_at_ceiling() {
    let mut text = budgeted(b"abc", 4, 4);

    assert_eq!(
        text.replace(b"b", b"xyz"),
        Err(Error::CapacityExceeded { budget: 4 })
    );
    assert_eq!(text.as_bytes(), b"abc");
    assert_terminated(&text);
}

#[test]
fn test_text_replace_all() {
    let mut text = Text::from_bytes(b"a.b.c").unwrap();

    // A replacement containing the needle must not be matched again
    assert_eq!(text.replace_all(b".", b"..").unwrap(), 2);
    assert_eq!(text.as_bytes(), b"a..b..c");
    assert_terminated(&text);

    // Shrinking everywhere
    assert_eq!(text.replace_all(b"..", b"").unwrap(), 2);
    assert_eq!(text.as_bytes(), b"abc");
    assert_terminated(&text);

    // Adjacent occurrences
    let mut text = Text::from_bytes(b"aaaa").unwrap();
    assert_eq!(text.replace_all(b"aa", b"b").unwrap(), 2);
    assert_eq!(text.as_bytes(), b"bb");

    assert_eq!(text.replace_all(b"z", b"y").unwrap(), 0);
    assert_eq!(text.replace_all(b"", b"y"), Err(Error::EmptyInput));
}

#[test]
fn test_text_replace_all_grows_mid_replacement() {
    let mut text = Text::with_capacity(8).unwrap();
    text.append(b"x.y.z").unwrap();

    // Each replacement adds 9 bytes, so the working copy reallocates more than once
    assert_eq!(text.replace_all(b".", b"<-------->").unwrap(), 2);
    assert_eq!(text.as_bytes(), b"x<-------->y<-------->z");
    assert_eq!(text.cap(), 32);
    assert_terminated(&text);
}

#[test]
fn test_text_replace_all_at_ceiling() {
    let mut text = budgeted(b"a.b.c", 8, 8);

    // The first replacement fits, the second doesn't; nothing is committed
    assert_eq!(
        text.replace_all(b".", b"..."),
        Err(Error::CapacityExceeded { budget: 8 })
    );
    assert_eq!(text.as_bytes(), b"a.b.c");
    assert_terminated(&text);
}

// -----------------------------------------------------------------------------
// Text - Copies and overwrite
// -----------------------------------------------------------------------------

#[test]
fn test_text_case() {
    let text = Text::from_bytes(b"Whether 'tis Nobler 123").unwrap();

    let upper = text.to_upper().unwrap();
    assert_eq!(upper.as_bytes(), b"WHETHER 'TIS NOBLER 123");
    assert_terminated(&upper);

    let lower = text.to_lower().unwrap();
    assert_eq!(lower.as_bytes(), b"whether 'tis nobler 123");

    // The source is untouched
    assert_eq!(text.as_bytes(), b"Whether 'tis Nobler 123");

    // Non-ASCII bytes pass through
    let text = Text::from_bytes(&[0xC3, 0xA9, b'a']).unwrap();
    assert_eq!(text.to_upper().unwrap().as_bytes(), &[0xC3, 0xA9, b'A']);

    // Empty is fine
    assert!(Text::new().unwrap().to_upper().unwrap().is_empty());
}

#[test]
fn test_text_overwrite() {
    let mut text = Text::with_capacity(8).unwrap();
    text.append(b"abcdef").unwrap();

    text.overwrite(b"xy").unwrap();
    assert_eq!(text.storage(), b"xy\0\0\0\0\0\0");

    // Grows when needed
    text.overwrite(b"0123456789").unwrap();
    assert_eq!(text.as_bytes(), b"0123456789");
    assert_eq!(text.cap(), 16);
    assert_terminated(&text);

    text.overwrite(b"").unwrap();
    assert!(text.is_empty());
    assert!(text.storage().iter().all(|&b| b == 0));
}

#[test]
fn test_text_overwrite_at_ceiling() {
    let mut text = budgeted(b"abc", 4, 4);

    assert_eq!(
        text.overwrite(b"abcd"),
        Err(Error::CapacityExceeded { budget: 4 })
    );
    assert_eq!(text.as_bytes(), b"abc");
}

#[test]
fn test_text_reverse() {
    let text = Text::from_bytes(b"abc").unwrap();

    let reversed = text.reverse().unwrap();
    assert_eq!(reversed.as_bytes(), b"cba");
    assert_terminated(&reversed);
    assert_eq!(text.as_bytes(), b"abc");

    let single = Text::from_bytes(b"a").unwrap();
    assert_eq!(single.reverse().unwrap().as_bytes(), b"a");

    assert_eq!(Text::new().unwrap().reverse(), Err(Error::Empty));
}

#[test]
fn test_text_clear() {
    let mut text = Text::from_bytes(b"abc").unwrap();

    text.clear();
    assert!(text.is_empty());
    assert_eq!(text.cap(), DEFAULT_INITIAL_STRING_LENGTH);
    assert!(text.storage().iter().all(|&b| b == 0));
}

#[test]
fn test_text_eq_and_debug() {
    let a = Text::with_capacity(4).unwrap();
    let b = Text::with_capacity(100).unwrap();

    // Equality ignores allocation
    assert_eq!(a, b);
    assert!(Text::from_bytes(b"xy").unwrap() == *b"xy".as_slice());

    let text = Text::from_bytes(b"a\tb").unwrap();
    let debug = format!("{text:?}");
    assert!(debug.contains(r#"content: "a\\tb""#));
    assert!(debug.contains("len: 3"));
}
