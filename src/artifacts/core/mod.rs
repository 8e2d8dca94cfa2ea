//! Byte-level building blocks shared by every object kind
//!
//! - `codec`: zlib compression applied to every stored object
//! - `hasher`: SHA-1 content digest

pub mod codec;
pub mod hasher;
