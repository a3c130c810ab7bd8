//! lw-core: numeric foundation shared by the lubriwave crates.
//!
//! `Real`, the `TWO_PI` period constant, and tolerance-based float helpers.

pub mod numeric;

pub use numeric::*;
