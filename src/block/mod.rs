//! Block types.
//!
//! - [`Block`] - One fixed-size block of a file: offset, length, hash
//! - [`BlockHash`] - Digest of a block's bytes

mod data;
mod hash;

pub use data::Block;
pub use hash::BlockHash;
