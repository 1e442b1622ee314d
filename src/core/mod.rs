//! The core module.
//!
//! Contains the functional parts of the crate, free of any infrastructure.

pub mod greeting;
pub mod size;
