//! Size constants shared by [`List`](crate::List) and [`Text`](crate::Text).
//!
//! Both buffer types grow by doubling their allocated length, starting from one of the defaults
//! below, until they reach their byte budget. The budget defaults to [`MAX_BYTES`] and can be
//! lowered per instance through the builders.
//!
//! # Invariant
//!
//! - `DEFAULT_INITIAL_LENGTH` and `DEFAULT_INITIAL_STRING_LENGTH` are non-zero powers of two
//! - `DEFAULT_INITIAL_STRING_LENGTH` leaves room for at least one byte besides the terminator
//! - Both defaults are far below `MAX_BYTES`, so a default-sized buffer of one-byte elements is
//!   always within budget

/// The largest total storage, in bytes, any buffer may reach.
///
/// This is the largest value of the length type. A buffer never allocates more than this many
/// bytes, no matter its element size: the element count is clamped to `MAX_BYTES / element_size`.
///
/// In practice the allocator refuses far smaller requests, which is reported as
/// [`Error::AllocFailed`](crate::Error::AllocFailed) rather than a budget violation.
pub const MAX_BYTES: usize = usize::MAX;

/// Initial allocated length, in elements, of a [`List`](crate::List) created without an explicit
/// capacity.
pub const DEFAULT_INITIAL_LENGTH: usize =
    // 2^4 = 16 elements
    1 << 4;

/// Initial allocated length, in bytes, of a [`Text`](crate::Text) created without an explicit
/// capacity. This includes the terminator byte.
///
/// It is also the seed from which [`Text::from_bytes`](crate::Text::from_bytes) doubles until the
/// copied input fits.
pub const DEFAULT_INITIAL_STRING_LENGTH: usize =
    // 2^6 = 64 bytes, 63 usable
    1 << 6;
