//! Small display helpers shared by pages.

pub mod hash;

pub use hash::hash_shortener;
