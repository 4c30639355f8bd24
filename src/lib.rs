// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! A Minimal Published Greeter
//!
//! This crate exists to demonstrate packaging and publishing a minimal
//! artifact to crates.io. The entire program is one unconditional
//! write: the `hullo` binary prints `Hello, world!` followed by a
//! newline to standard output and exits with status 0. Arguments are
//! accepted and ignored.
//!
//! # Quick Start
//!
//! ```
//! use anyhow::Result;
//! use hullo::{write_greeting, GREETING};
//!
//! fn main() -> Result<()> {
//!     let mut out = Vec::new();
//!     write_greeting(&mut out)?;
//!
//!     assert_eq!(out, format!("{GREETING}\n").into_bytes());
//!     Ok(())
//! }
//! ```

use std::io::Write;

use anyhow::Result;

/// The greeting emitted by the `hullo` binary. The trailing line
/// terminator is not part of the constant; [`write_greeting`] appends
/// it.
pub const GREETING: &str = "Hello, world!";

/// Writes [`GREETING`] and a single line terminator to `out`. If the
/// writer cannot be written an error will be returned.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_greeting_has_no_terminator() {
        assert_eq!(GREETING, "Hello, world!");
    }

    #[test]
    fn test_write_greeting() {
        let mut out = Vec::new();
        write_greeting(&mut out).unwrap();

        assert_eq!(out, b"Hello, world!\n");
    }

    #[test]
    fn test_write_greeting_appends() {
        let mut out = Vec::new();
        write_greeting(&mut out).unwrap();
        write_greeting(&mut out).unwrap();

        assert_eq!(out, b"Hello, world!\nHello, world!\n");
    }
}
