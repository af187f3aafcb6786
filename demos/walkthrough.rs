//! Builds a text and a list, then prints their dumps.
//!
//! Run with `cargo run --example walkthrough`. Growth is logged at `trace` level.

use growbuf::{List, Text};

fn main() -> growbuf::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut text = Text::from_bytes(
        b"Hamlet: To be, or not to be. That is the question. \
          Whether 'tis nobler in the mind to suffer the slings and arrows...",
    )?;
    println!("{}", text.dump());

    text.replace_all(b"be", b"exist")?;
    text.remove_range(0, 8)?;
    println!("{}", text.dump());

    let mut list = List::zeroed(2, 2)?;
    list.insert_many(0, b"ABCDEFGHIJKLMNOP", 8)?;
    println!("{}", list.dump());

    list.remove_many(2, 4)?;
    list.insert_many_copy(0, 1, 2)?;
    println!("{}", list.dump());

    Ok(())
}
