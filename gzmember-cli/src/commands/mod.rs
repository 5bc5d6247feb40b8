//! Command implementations for the gzmember CLI.

pub mod decode;
pub mod info;
pub mod test;

pub use decode::{DecodeOptions, cmd_decode};
pub use info::cmd_info;
pub use test::cmd_test;
