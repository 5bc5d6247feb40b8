//! # gzmember decode
//!
//! Decoding of single GZIP members (RFC 1952) from untrusted byte buffers.
//!
//! - [`member`]: the member decoder, with header and trailer parsing
//! - [`inflate`]: the raw DEFLATE adapter over `flate2`
//! - [`native`]: `flate2`'s own gzip decoder as an alternative strategy
//! - [`body`]: transport-facing decoding of response bodies
//! - [`config`]: strategy and output-size configuration
//!
//! ## Example
//!
//! ```rust
//! use flate2::{Compression, write::GzEncoder};
//! use std::io::Write;
//!
//! let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
//! encoder.write_all(b"hello").unwrap();
//! let member = encoder.finish().unwrap();
//!
//! assert!(gzmember_decode::is_gzip(&member));
//! assert_eq!(gzmember_decode::decode(&member).unwrap(), b"hello");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod body;
pub mod config;
pub mod inflate;
pub mod member;
#[cfg(feature = "native")]
pub mod native;

pub use body::{BodyDecoder, BodyEncoding, DecodedBody};
pub use config::{DecodeConfig, InflateStrategy};
pub use gzmember_core::{DecodeError, GzipField, Result};
pub use inflate::Flate2Inflater;
pub use member::{
    GzipHeader, GzipMember, GzipTrailer, MemberDecoder, decode, decode_member, is_gzip,
};
#[cfg(feature = "native")]
pub use native::NativeGzip;
