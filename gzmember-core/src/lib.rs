//! # gzmember core
//!
//! Building blocks shared by the gzmember crates:
//!
//! - [`crc`]: the CRC-32 checksum used by GZIP headers and trailers
//! - [`traits`]: the inflate and gzip-decompression capabilities
//! - [`error`]: the decode error type
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Transport: BodyDecoder, CLI                             │
//! ├─────────────────────────────────────────────────────────┤
//! │ Container: GZIP member header / trailer                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ Primitives (this crate): Inflate, GzipDecompress, CRC   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gzmember_core::Crc32;
//!
//! let crc = Crc32::compute(b"Hello, World!");
//! assert_eq!(crc, 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod crc;
pub mod error;
pub mod traits;

pub use crc::Crc32;
pub use error::{DecodeError, GzipField, Result};
pub use traits::{GzipDecompress, Inflate};
