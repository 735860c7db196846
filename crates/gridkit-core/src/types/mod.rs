//! Type system utilities and aliases.
//!
//! - [`aliases`]: Type aliases for shared mutable state.

pub mod aliases;

pub use aliases::*;
