//! # OxiLZ Core
//!
//! Core components shared by the OxiLZ crates:
//!
//! - [`error`]: Error type and `Result` alias used by every codec
//! - [`checksum`]: Adler-32 (RFC 1950), the checksum block tools verify with
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI: oxilz compress / decompress / test / bench / info  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec: oxilz-fastlz (level 1 and level 2 block format)  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate): OxiLzError, Adler32                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::checksum::Adler32;
//!
//! let sum = Adler32::compute(b"Wikipedia");
//! assert_eq!(sum, 0x11E6_0398);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod checksum;
pub mod error;

pub use checksum::Adler32;
pub use error::{OxiLzError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::checksum::Adler32;
    pub use crate::error::{OxiLzError, Result};
}
