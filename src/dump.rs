//! Human-readable dumps of a buffer's allocation.
//!
//! [`List::dump`] and [`Text::dump`] return borrowing adapters whose [`Display`](fmt::Display)
//! output shows the sizes of a buffer and every allocated byte, with `||` marking where the live
//! data ends. They never touch the buffer, so they can be printed or logged at any point.
//!
//! # Example
//!
//! ```
//! use growbuf::Text;
//!
//! let text = Text::builder().initial_capacity(8).build_from(b"abc").unwrap();
//!
//! assert_eq!(
//!     text.dump().to_string(),
//!     "Length: 3\nAllocated: 8\nContents:\nabc||~~~~~\n",
//! );
//! ```

use crate::list::List;
use crate::text::Text;
use std::fmt;

/// Displays a [`List`]: its sizes, then each allocated byte in hex.
#[derive(Debug, Clone, Copy)]
pub struct ListDump<'a> {
    list: &'a List,
}

impl fmt::Display for ListDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.list;
        let used = list.used_bytes();

        writeln!(f, "Length: {}", list.len())?;
        writeln!(f, "Element size: {}", list.element_size())?;
        writeln!(f, "Bytes used: {used}")?;
        writeln!(f, "Bytes allocated: {}", list.allocated_bytes())?;
        writeln!(f, "Contents:")?;

        let (live, spare) = list.storage().split_at(used);
        for byte in live {
            write!(f, "{byte:02x}")?;
        }
        f.write_str("||")?;
        for byte in spare {
            write!(f, "{byte:02x}")?;
        }

        writeln!(f)
    }
}

/// Displays a [`Text`]: its sizes, then each allocated byte, with `~` standing in for zero.
#[derive(Debug, Clone, Copy)]
pub struct TextDump<'a> {
    text: &'a Text,
}

impl TextDump<'_> {
    fn write_byte(f: &mut fmt::Formatter<'_>, byte: u8) -> fmt::Result {
        match byte {
            0 => f.write_str("~"),
            b if b.is_ascii_graphic() || b == b' ' => write!(f, "{}", char::from(b)),
            b => write!(f, "{}", b.escape_ascii()),
        }
    }
}

impl fmt::Display for TextDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text;

        writeln!(f, "Length: {}", text.len())?;
        writeln!(f, "Allocated: {}", text.cap())?;
        writeln!(f, "Contents:")?;

        let (live, spare) = text.storage().split_at(text.len());
        for &byte in live {
            Self::write_byte(f, byte)?;
        }
        f.write_str("||")?;
        for &byte in spare {
            Self::write_byte(f, byte)?;
        }

        writeln!(f)
    }
}

impl List {
    /// Returns a [`Display`](fmt::Display) adapter describing this list's allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::List;
    /// let mut list = List::with_capacity(2, 2).unwrap();
    /// list.append(&[0xAB, 0xCD]).unwrap();
    ///
    /// let dump = list.dump().to_string();
    /// assert!(dump.ends_with("Contents:\nabcd||0000\n"));
    /// ```
    pub fn dump(&self) -> ListDump<'_> {
        ListDump { list: self }
    }
}

impl Text {
    /// Returns a [`Display`](fmt::Display) adapter describing this text's allocation.
    pub fn dump(&self) -> TextDump<'_> {
        TextDump { text: self }
    }
}
