//! CLI command implementations.
//!
//! One module per workflow step, each exposing `run`.

pub mod batch;
pub mod excel;
pub mod forum;
pub mod judge;
pub mod steppers;
pub mod template;
