//! # Stamina Serde
//! Bit-level encoding for the messages exchanged between stamina-bridge
//! clients & servers.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bit_reader;
mod bit_writer;
mod error;
mod serde;

pub use bit_reader::BitReader;
pub use bit_writer::{BitWrite, BitWriter};
pub use error::SerdeErr;
pub use serde::Serde;

/// Upper bound on the byte length of a serialized string
pub const MAX_STRING_BYTES: usize = 1024;
