//! Low-level board geometry.
//!
//! - [`square`]: squares packed into a single `u8`, plus label parsing (`"E4"`).
//! - [`offset`]: row/column displacements and the direction tables pieces move along.

pub mod offset;
pub mod square;
