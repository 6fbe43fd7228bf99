//! Owned values of the primitive types that have no direct Rust counterpart

mod decimal;
mod timestamp;
mod uuid;

// to avoid ambiguity
pub use crate::primitives::decimal::*;
pub use crate::primitives::timestamp::*;
pub use crate::primitives::uuid::*;
