//! A function that always fails
//!
//! Useful for exercising callers' error reporting.

use anyhow::bail;

pub const EXPLOSION_MESSAGE: &str = "Something went terribly wrong";

/// Always returns an error carrying [`EXPLOSION_MESSAGE`]
pub fn explode() -> anyhow::Result<()> {
    bail!(EXPLOSION_MESSAGE)
}
