//! Command implementations for OxiLZ CLI.

pub mod bench;
pub mod compress;
pub mod decompress;
pub mod info;

pub use bench::cmd_bench;
pub use compress::{CompressionLevel, cmd_compress, encode_file, parse_level};
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;
