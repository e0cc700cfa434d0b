//! Safe SQL builder: identifiers from compile-time allow-lists, values as parameters.

mod builder;
pub use builder::*;
